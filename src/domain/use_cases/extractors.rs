use actix_web::{dev::Payload, FromRequest, HttpRequest};
use futures_util::future::{ready, Ready};

use crate::utils::get_client_ip::get_client_ip;

/// Extractor for the resolved client IP (proxy headers, `"unknown"` fallback).
/// Usage: add `ip: ClientIp` as a parameter to your handler function.
#[derive(Debug, Clone)]
pub struct ClientIp(pub String);

impl FromRequest for ClientIp {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(Ok(ClientIp(get_client_ip(req))))
    }
}
