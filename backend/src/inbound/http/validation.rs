//! Shared validation helpers for inbound HTTP adapters.
//!
//! Handlers collect every failure for a request into one itemised list
//! rather than stopping at the first, so clients see all problems at once.

use serde::Deserialize;

use crate::domain::Error;

/// Message attached to every itemised validation failure.
pub(crate) const VALIDATION_FAILED: &str = "Validation failed";

/// Trim a maybe-supplied value, treating blank as absent.
pub(crate) fn normalise(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_owned())
        .filter(|v| !v.is_empty())
}

/// Accumulates itemised validation failures for one request.
#[derive(Debug, Default)]
pub(crate) struct FieldErrors {
    errors: Vec<String>,
}

impl FieldErrors {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
    }

    /// Required string field; blank counts as missing.
    pub(crate) fn require(&mut self, field: &'static str, value: Option<String>) -> Option<String> {
        let value = normalise(value);
        if value.is_none() {
            self.errors.push(format!("{field} is required"));
        }
        value
    }

    /// Required boolean field.
    pub(crate) fn require_bool(&mut self, field: &'static str, value: Option<bool>) -> Option<bool> {
        if value.is_none() {
            self.errors.push(format!("{field} is required"));
        }
        value
    }

    /// Required integer field.
    pub(crate) fn require_int(&mut self, field: &'static str, value: Option<i32>) -> Option<i32> {
        if value.is_none() {
            self.errors.push(format!("{field} is required"));
        }
        value
    }

    /// Enumerated-value check against a fixed whitelist (exact match).
    pub(crate) fn one_of(&mut self, field: &'static str, value: &str, allowed: &[&str]) {
        if !allowed.contains(&value) {
            self.errors
                .push(format!("{field} must be one of: {}", allowed.join(", ")));
        }
    }

    /// Bounded integer check.
    pub(crate) fn in_range(&mut self, field: &'static str, value: i32, min: i32, max: i32) {
        if value < min || value > max {
            self.errors
                .push(format!("{field} must be between {min} and {max}"));
        }
    }

    /// Maximum-length check.
    pub(crate) fn max_len(&mut self, field: &'static str, value: &str, max: usize) {
        if value.chars().count() > max {
            self.errors
                .push(format!("{field} cannot exceed {max} characters"));
        }
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Turn the collected failures into a 400-mapped domain error.
    pub(crate) fn into_error(mut self) -> Error {
        if self.errors.is_empty() {
            // A caller only reaches this with at least one missing field;
            // keep the envelope coherent if that assumption ever breaks.
            self.errors.push("request is invalid".to_owned());
        }
        Error::invalid_request(VALIDATION_FAILED).with_errors(self.errors)
    }

    /// Ok when nothing failed, otherwise the itemised 400 error.
    pub(crate) fn into_result(self) -> Result<(), Error> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self.into_error())
        }
    }
}

/// `userId` query parameter shared by list, update, and delete routes.
#[derive(Debug, Deserialize)]
pub(crate) struct OwnerQuery {
    #[serde(rename = "userId")]
    pub(crate) user_id: Option<String>,
}

impl OwnerQuery {
    /// Reject a missing or blank `userId` with an itemised 400.
    pub(crate) fn require_user_id(self) -> Result<String, Error> {
        normalise(self.user_id).ok_or_else(|| {
            Error::invalid_request("userId is required")
                .with_errors(vec!["userId query parameter cannot be empty".to_owned()])
        })
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::domain::ErrorCode;

    #[rstest]
    #[case(None, None)]
    #[case(Some("".to_owned()), None)]
    #[case(Some("   ".to_owned()), None)]
    #[case(Some("  x ".to_owned()), Some("x".to_owned()))]
    fn normalise_treats_blank_as_absent(
        #[case] input: Option<String>,
        #[case] expected: Option<String>,
    ) {
        assert_eq!(normalise(input), expected);
    }

    #[test]
    fn require_collects_every_missing_field() {
        let mut errors = FieldErrors::new();

        assert!(errors.require("userId", None).is_none());
        assert!(errors.require("gameName", Some("  ".to_owned())).is_none());
        assert_eq!(
            errors.require("platform", Some("indoor".to_owned())),
            Some("indoor".to_owned())
        );

        let error = errors.into_error();
        assert_eq!(error.code(), ErrorCode::InvalidRequest);
        assert_eq!(
            error.errors(),
            ["userId is required", "gameName is required"]
        );
    }

    #[test]
    fn one_of_rejects_values_outside_the_whitelist() {
        let mut errors = FieldErrors::new();
        errors.one_of("platform", "arcade", &["indoor", "outdoor"]);

        let error = errors.into_error();
        assert_eq!(error.errors(), ["platform must be one of: indoor, outdoor"]);
    }

    #[test]
    fn in_range_accepts_the_boundaries() {
        let mut errors = FieldErrors::new();
        errors.in_range("launchYear", 1886, 1886, 2030);
        errors.in_range("launchYear", 2030, 1886, 2030);
        assert!(errors.is_empty());

        errors.in_range("launchYear", 1885, 1886, 2030);
        assert!(!errors.is_empty());
    }

    #[test]
    fn max_len_counts_characters_not_bytes() {
        let mut errors = FieldErrors::new();
        errors.max_len("vehicleName", &"å".repeat(100), 100);
        assert!(errors.is_empty());

        errors.max_len("vehicleName", &"å".repeat(101), 100);
        assert!(!errors.is_empty());
    }

    #[rstest]
    #[case(None)]
    #[case(Some("".to_owned()))]
    #[case(Some("   ".to_owned()))]
    fn owner_query_rejects_blank_user_ids(#[case] user_id: Option<String>) {
        let err = OwnerQuery { user_id }
            .require_user_id()
            .expect_err("rejected");
        assert_eq!(err.code(), ErrorCode::InvalidRequest);
    }

    #[test]
    fn owner_query_trims_the_user_id() {
        let owner = OwnerQuery {
            user_id: Some(" u1 ".to_owned()),
        }
        .require_user_id()
        .expect("accepted");
        assert_eq!(owner, "u1");
    }
}
