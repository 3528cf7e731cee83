use actix_web::{post, web, HttpResponse, Responder};

use crate::{errors::ContactError, use_cases::extractors::ClientIp, AppState};

/// Accepts a contact-form submission and runs it through the pipeline.
///
/// The body is taken as raw bytes so a malformed JSON payload maps to the
/// pipeline's own 400 instead of actix's default JSON extractor error, and so
/// the rate limiter is consulted before any parsing happens.
#[post("/contact")]
pub async fn submit_contact(
    state: web::Data<AppState>,
    ip: ClientIp,
    body: web::Bytes,
) -> Result<impl Responder, ContactError> {
    let accepted = state.contact_handler.handle_submission(&body, &ip.0).await?;

    Ok(HttpResponse::Ok()
        .insert_header(("X-RateLimit-Remaining", accepted.remaining.to_string()))
        .json(serde_json::json!({
            "success": true,
            "message": accepted.message,
        })))
}
