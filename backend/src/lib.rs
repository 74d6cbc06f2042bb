//! CollectHub backend library modules.
//!
//! A REST API exposing CRUD operations over independent favourite-thing
//! collections, backed by a document store. The layout follows a hexagonal
//! split: [`domain`] holds entities, ports, and services; [`inbound`] the
//! HTTP adapter; [`outbound`] the store adapters; [`server`] assembles the
//! application.

pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod server;

pub use middleware::RequestId;
