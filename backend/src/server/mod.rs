//! HTTP server assembly.
//!
//! [`configure`] registers the full route table and shared state on an
//! Actix app; `main` and the handler tests both go through it so the wiring
//! under test is the wiring that ships.

pub mod config;

use actix_web::{web, HttpResponse};

use crate::inbound::http::envelope::ApiResponse;
use crate::inbound::http::health::{self, HealthState};
use crate::inbound::http::state::AppState;
use crate::inbound::http::{
    games, mobile_apps, music, programming_languages, users, vehicles, youtube_channels,
};

/// JSON extractor configuration producing envelope-shaped 400s for
/// malformed or undeserialisable bodies.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        let body = ApiResponse::<()>::failure("Invalid request body", vec![err.to_string()]);
        actix_web::error::InternalError::from_response(err, HttpResponse::BadRequest().json(body))
            .into()
    })
}

/// Route-and-state registration shared by the real server and tests.
pub fn configure(
    state: AppState,
    health_state: web::Data<HealthState>,
) -> impl Fn(&mut web::ServiceConfig) + Clone {
    move |cfg| {
        cfg.app_data(web::Data::new(state.clone()))
            .app_data(health_state.clone())
            .app_data(json_config())
            .service(
                web::scope("/api")
                    .service(music::create_music)
                    .service(music::list_music)
                    .service(music::get_music)
                    .service(music::update_music)
                    .service(music::delete_music)
                    .service(vehicles::create_vehicle)
                    .service(vehicles::list_vehicles)
                    .service(vehicles::get_vehicle)
                    .service(vehicles::update_vehicle)
                    .service(vehicles::delete_vehicle)
                    .service(games::create_game)
                    .service(games::list_games)
                    .service(games::get_game)
                    .service(games::update_game)
                    .service(games::delete_game)
                    .service(mobile_apps::create_mobile_app)
                    .service(mobile_apps::list_mobile_apps)
                    .service(mobile_apps::get_mobile_app)
                    .service(mobile_apps::update_mobile_app)
                    .service(mobile_apps::delete_mobile_app)
                    .service(youtube_channels::create_youtube_channel)
                    .service(youtube_channels::list_youtube_channels)
                    .service(youtube_channels::get_youtube_channel)
                    .service(youtube_channels::update_youtube_channel)
                    .service(youtube_channels::delete_youtube_channel)
                    .service(programming_languages::create_programming_language)
                    .service(programming_languages::list_programming_languages)
                    .service(programming_languages::get_programming_language)
                    .service(programming_languages::update_programming_language)
                    .service(programming_languages::delete_programming_language)
                    .service(users::create_user)
                    .service(users::list_users)
                    .service(users::get_user)
                    .service(users::delete_user),
            )
            .service(health::ping)
            .service(health::health)
            .service(health::ready)
            .service(health::live);
    }
}
