/// Escapes `&`, `<`, `>`, `"` and `'` so untrusted text is inert both as
/// element content and inside quoted attributes.
pub fn escape_html(text: &str) -> String {
    html_escape::encode_quoted_attribute(text).into_owned()
}
