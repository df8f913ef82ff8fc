//! Decoding of raw API responses.
//!
//! Transport hands over the status code and body text; everything about how the
//! API shapes its answers lives here so it can be checked without a network.

use serde::de::DeserializeOwned;

use crate::{
    error::gateway::GatewayError,
    model::{
        api::{DataDto, ErrorDto, MutationDto},
        user::LoginResponseDto,
    },
};

/// Decode a `{ "data": ... }` read response.
pub fn decode_data<T: DeserializeOwned>(status: u16, body: &str) -> Result<T, GatewayError> {
    ensure_success(status, body)?;

    serde_json::from_str::<DataDto<T>>(body)
        .map(|envelope| envelope.data)
        .map_err(|e| GatewayError::Decode(e.to_string()))
}

/// Decode a create, update or delete response.
///
/// Returns the affected record when the API included one. An empty body on a
/// 2xx status counts as success.
pub fn decode_mutation<T: DeserializeOwned>(
    status: u16,
    body: &str,
) -> Result<Option<T>, GatewayError> {
    ensure_success(status, body)?;

    if body.trim().is_empty() {
        return Ok(None);
    }

    let mutation = serde_json::from_str::<MutationDto<serde_json::Value>>(body)
        .map_err(|e| GatewayError::Decode(e.to_string()))?;

    if mutation.success == Some(false) {
        return Err(GatewayError::Rejected);
    }

    // The record is informational; a shape we don't recognise is not a failure
    // of the mutation itself.
    Ok(mutation
        .data
        .and_then(|data| serde_json::from_value::<T>(data).ok()))
}

/// Decode `POST /login`, which answers `{ user, token }` without an envelope.
pub fn decode_login(status: u16, body: &str) -> Result<LoginResponseDto, GatewayError> {
    ensure_success(status, body)?;

    let login = serde_json::from_str::<LoginResponseDto>(body)
        .or_else(|_| serde_json::from_str::<DataDto<LoginResponseDto>>(body).map(|e| e.data))
        .map_err(|e| GatewayError::Decode(e.to_string()))?;

    if login.token.trim().is_empty() {
        return Err(GatewayError::Decode(
            "login response contained an empty token".to_string(),
        ));
    }

    Ok(login)
}

fn ensure_success(status: u16, body: &str) -> Result<(), GatewayError> {
    if (200..300).contains(&status) {
        return Ok(());
    }

    Err(GatewayError::Status {
        status,
        message: error_message(body),
    })
}

fn error_message(body: &str) -> String {
    match serde_json::from_str::<ErrorDto>(body) {
        Ok(error_dto) => error_dto.error,
        Err(_) => body.trim().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod decode_data {
        use super::*;

        /// Expect the envelope to be unwrapped
        #[test]
        fn unwraps_envelope() {
            let ids: Vec<i64> = decode_data(200, r#"{"data": [1, 2, 3]}"#).unwrap();

            assert_eq!(ids, vec![1, 2, 3]);
        }

        /// Expect a bare array to be a decode error
        #[test]
        fn rejects_missing_envelope() {
            let result = decode_data::<Vec<i64>>(200, "[1, 2, 3]");

            assert!(matches!(result, Err(GatewayError::Decode(_))));
        }

        /// Expect the API's error message on failure statuses
        #[test]
        fn surfaces_error_body() {
            let result = decode_data::<Vec<i64>>(403, r#"{"error": "Admins only"}"#);

            assert_eq!(
                result,
                Err(GatewayError::Status {
                    status: 403,
                    message: "Admins only".to_string()
                })
            );
        }

        /// Expect plain-text error bodies to be kept
        #[test]
        fn surfaces_text_body() {
            let result = decode_data::<Vec<i64>>(502, " Bad Gateway \n");

            assert_eq!(
                result,
                Err(GatewayError::Status {
                    status: 502,
                    message: "Bad Gateway".to_string()
                })
            );
        }
    }

    mod decode_mutation {
        use super::*;

        /// Expect `success: false` to be an error even with a 200
        #[test]
        fn rejected_on_success_false() {
            let result = decode_mutation::<serde_json::Value>(200, r#"{"success": false}"#);

            assert_eq!(result, Err(GatewayError::Rejected));
        }

        /// Expect the record to be returned when present
        #[test]
        fn returns_record() {
            let result =
                decode_mutation::<i64>(201, r#"{"success": true, "data": 42}"#).unwrap();

            assert_eq!(result, Some(42));
        }

        /// Expect an empty 204 body to count as success
        #[test]
        fn empty_body_is_success() {
            let result = decode_mutation::<i64>(204, "").unwrap();

            assert_eq!(result, None);
        }

        /// Expect an unrecognised record shape not to fail the mutation
        #[test]
        fn ignores_unexpected_record_shape() {
            let result =
                decode_mutation::<i64>(200, r#"{"success": true, "data": {"id": 1}}"#).unwrap();

            assert_eq!(result, None);
        }
    }

    mod decode_login {
        use super::*;

        const USER: &str =
            r#"{"id": 5, "first_name": "Li", "last_name": "Wei", "email": "li@example.com", "is_admin": true}"#;

        /// Expect the unwrapped user and token
        #[test]
        fn decodes_plain_body() {
            let body = format!(r#"{{"user": {}, "token": "abc"}}"#, USER);

            let login = decode_login(200, &body).unwrap();

            assert_eq!(login.token, "abc");
            assert!(login.user.is_admin);
        }

        /// Expect an enveloped body to be accepted too
        #[test]
        fn decodes_enveloped_body() {
            let body = format!(r#"{{"data": {{"user": {}, "token": "abc"}}}}"#, USER);

            assert!(decode_login(200, &body).is_ok());
        }

        /// Expect an empty token to be refused
        #[test]
        fn rejects_empty_token() {
            let body = format!(r#"{{"user": {}, "token": ""}}"#, USER);

            assert!(matches!(
                decode_login(200, &body),
                Err(GatewayError::Decode(_))
            ));
        }

        /// Expect wrong credentials to surface the API's message
        #[test]
        fn surfaces_invalid_credentials() {
            let result = decode_login(401, r#"{"error": "Invalid email or password"}"#);

            assert!(matches!(
                result,
                Err(GatewayError::Status { status: 401, ref message }) if message == "Invalid email or password"
            ));
        }
    }
}
