//! Coercion of raw model output into a complete HTML document.

const WRAP_HEAD: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Generated Website</title>
    <style>
        body { font-family: Arial, sans-serif; margin: 0; padding: 20px; }
        .container { max-width: 1200px; margin: 0 auto; }
    </style>
</head>
<body>
    <div class="container">
        "#;

const WRAP_TAIL: &str = r#"
    </div>
</body>
</html>"#;

/// Case-sensitive prefix check for a doctype declaration or an `<html` root.
pub fn is_complete_document(text: &str) -> bool {
    text.starts_with("<!DOCTYPE html") || text.starts_with("<html")
}

/// Whitespace plus a leading or trailing byte order mark.
fn is_trimmable(c: char) -> bool {
    c.is_whitespace() || c == '\u{feff}'
}

/// Trims `raw` and, unless it already is a complete document, wraps it verbatim in
/// the fixed HTML5 skeleton.
///
/// Markdown fences or prose around the markup are not stripped; they end up
/// inside the container element.
pub fn normalize(raw: &str) -> String {
    let trimmed = raw.trim_matches(is_trimmable);
    if is_complete_document(trimmed) {
        return trimmed.to_string();
    }

    let mut document = String::with_capacity(WRAP_HEAD.len() + trimmed.len() + WRAP_TAIL.len());
    document.push_str(WRAP_HEAD);
    document.push_str(trimmed);
    document.push_str(WRAP_TAIL);
    document
}
