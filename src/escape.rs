/// Escapes the five HTML-significant characters so `s` can be interpolated
/// into element content or a quoted attribute.
///
/// Not idempotent: `&amp;` becomes `&amp;amp;` on a second pass. Callers
/// escape raw text exactly once.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
