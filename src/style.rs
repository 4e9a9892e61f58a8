//! Conversion of design values into Dart literal syntax.

/// Convert a canvas color value into a Flutter color expression.
///
/// Accepts whatever the whiteboard stored: a hex string, an expression
/// that is already Flutter syntax, the literal `"transparent"`, or
/// nothing at all. Unrecognized input falls back to the transparent
/// sentinel rather than erroring.
pub fn flutter_color(value: Option<&str>) -> String {
    let color = match value {
        Some(c) if !c.is_empty() => c,
        _ => return "Colors.transparent".to_string(),
    };

    if color == "transparent" {
        return "Colors.transparent".to_string();
    }

    // Already a Flutter color expression, pass through unchanged.
    if color.starts_with("Colors.") || color.starts_with("Color(") {
        return color.to_string();
    }

    if let Some(hex) = color.strip_prefix('#') {
        // Right-pad short values to 6 hex digits, opaque alpha.
        let mut hex = hex.to_uppercase();
        while hex.len() < 6 {
            hex.push('0');
        }
        return format!("Color(0xFF{hex})");
    }

    "Colors.transparent".to_string()
}

/// Format a number as a valid Dart double literal.
///
/// A value whose display form already contains a decimal point is passed
/// through verbatim so it never gets a second `.0` suffix.
pub fn dart_double(value: f64) -> String {
    let s = format!("{value}");
    if s.contains('.') || s.contains('e') || s.contains("inf") || s.contains("NaN") {
        s
    } else {
        format!("{s}.0")
    }
}

/// Escape text for inclusion in a single-quoted Dart string literal.
///
/// The canvas stores free text; without this a stray quote or newline in
/// a label would break the generated file's syntax.
pub fn dart_string(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '$' => out.push_str("\\$"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            _ => out.push(ch),
        }
    }
    out
}
