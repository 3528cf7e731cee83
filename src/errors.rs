use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use derive_more::Display;
use serde_json::json;
use validator::ValidationErrors;

use crate::entities::contact::Locale;
use crate::limiter::rate_limiter::WINDOW;

/// Wire-order of the contact form fields; the first violated field's message
/// is the one surfaced to the client.
const FIELD_ORDER: [&str; 4] = ["name", "email", "message", "privacy"];

/// Every way a contact submission can fail, mapped one-to-one onto an HTTP
/// response. Server-caused variants carry the submission's locale so the
/// client sees a translated, non-leaking message; the diagnostic detail is
/// logged where the failure happens and never crosses the API boundary.
#[derive(Debug, Display)]
pub enum ContactError {
    #[display("Rate limit exceeded")]
    RateLimited,

    #[display("Malformed request body")]
    MalformedRequest,

    #[display("Validation failed: {_0}")]
    Validation(String),

    #[display("Server misconfiguration")]
    Configuration(Locale),

    #[display("Lead notification delivery failed")]
    LeadDelivery(Locale),
}

impl ResponseError for ContactError {
    fn status_code(&self) -> StatusCode {
        match self {
            ContactError::RateLimited => StatusCode::TOO_MANY_REQUESTS,
            ContactError::MalformedRequest | ContactError::Validation(_) => {
                StatusCode::BAD_REQUEST
            }
            ContactError::Configuration(_) | ContactError::LeadDelivery(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            ContactError::RateLimited => HttpResponse::build(self.status_code())
                .insert_header(("Retry-After", WINDOW.as_secs().to_string()))
                .insert_header(("X-RateLimit-Remaining", "0"))
                .json(json!({
                    "error": "Too many requests. Please try again later."
                })),
            ContactError::MalformedRequest => HttpResponse::build(self.status_code())
                .json(json!({ "error": "Invalid request body" })),
            ContactError::Validation(message) => HttpResponse::build(self.status_code())
                .json(json!({ "error": message })),
            ContactError::Configuration(locale) | ContactError::LeadDelivery(locale) => {
                HttpResponse::build(self.status_code())
                    .json(json!({ "error": locale.error_message() }))
            }
        }
    }
}

impl From<ValidationErrors> for ContactError {
    fn from(errors: ValidationErrors) -> Self {
        let field_errors = errors.field_errors();

        let message = FIELD_ORDER
            .iter()
            .find_map(|field| {
                field_errors.get(*field).and_then(|violations| {
                    violations.first().map(|violation| {
                        violation
                            .message
                            .as_ref()
                            .map(|message| message.to_string())
                            .unwrap_or_else(|| format!("Invalid value for {field}"))
                    })
                })
            })
            .unwrap_or_else(|| "Invalid submission".to_string());

        ContactError::Validation(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rate_limit_response_carries_retry_headers() {
        let response = ContactError::RateLimited.error_response();

        assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
        assert_eq!(response.headers().get("Retry-After").unwrap(), "900");
        assert_eq!(response.headers().get("X-RateLimit-Remaining").unwrap(), "0");
    }

    #[test]
    fn server_errors_use_the_submission_locale() {
        let response = ContactError::LeadDelivery(Locale::En).error_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn malformed_request_is_a_400() {
        assert_eq!(
            ContactError::MalformedRequest.status_code(),
            StatusCode::BAD_REQUEST
        );
    }
}
