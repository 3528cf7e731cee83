/// Escapes HTML-special characters in user-supplied text before it is
/// interpolated into an email body, then trims surrounding whitespace.
///
/// `&` is replaced first so the later replacements never produce an `&` that
/// gets re-encoded. The function is NOT idempotent: escaping already-escaped
/// text double-encodes `&`, so callers must escape raw input exactly once.
pub fn sanitize_for_html(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
        .trim()
        .to_string()
}
