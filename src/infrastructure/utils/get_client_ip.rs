use actix_web::HttpRequest;

/// Resolve the client's IP address from proxy headers.
///
/// Takes the first comma-separated entry of `x-forwarded-for`, trimmed, then
/// falls back to `x-real-ip`, then to the literal `"unknown"`. Traffic that
/// arrives without proxy headers therefore shares a single rate-limit bucket.
pub fn get_client_ip(req: &HttpRequest) -> String {
    if let Some(forwarded) = req.headers().get("x-forwarded-for") {
        if let Ok(value) = forwarded.to_str() {
            let first = value.split(',').next().unwrap_or("").trim();
            if !first.is_empty() {
                return first.to_string();
            }
        }
    }

    req.headers()
        .get("x-real-ip")
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| "unknown".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    #[test]
    fn takes_first_forwarded_entry_trimmed() {
        let req = TestRequest::default()
            .insert_header(("x-forwarded-for", " 203.0.113.7 , 10.0.0.1, 10.0.0.2"))
            .to_http_request();

        assert_eq!(get_client_ip(&req), "203.0.113.7");
    }

    #[test]
    fn falls_back_to_real_ip() {
        let req = TestRequest::default()
            .insert_header(("x-real-ip", "198.51.100.4"))
            .to_http_request();

        assert_eq!(get_client_ip(&req), "198.51.100.4");
    }

    #[test]
    fn prefers_forwarded_over_real_ip() {
        let req = TestRequest::default()
            .insert_header(("x-forwarded-for", "203.0.113.7"))
            .insert_header(("x-real-ip", "198.51.100.4"))
            .to_http_request();

        assert_eq!(get_client_ip(&req), "203.0.113.7");
    }

    #[test]
    fn unknown_when_no_headers_present() {
        let req = TestRequest::default().to_http_request();

        assert_eq!(get_client_ip(&req), "unknown");
    }
}
