//! Number text for the calculator screen

/// Formats a result for display.
///
/// Uses the shortest text that reads back as the same `f64`. Magnitudes of
/// `1e21` and above, or below `1e-6`, switch to exponent form with an
/// explicit sign (`1e+21`, `1e-7`). Negative zero shows as `0`.
#[must_use]
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }

    let magnitude = value.abs();
    if magnitude >= 1e21 || magnitude < 1e-6 {
        exponent_form(value)
    } else {
        format!("{value}")
    }
}

fn exponent_form(value: f64) -> String {
    let text = format!("{value:e}");
    match text.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{mantissa}e+{exponent}")
        }
        _ => text,
    }
}

/// Reads the screen text as a number.
///
/// Takes the longest prefix that parses, so a trailing `.` or a dangling
/// exponent marker is ignored. Text with no numeric prefix yields NaN, which
/// the evaluator later rejects.
#[must_use]
pub fn parse_display(text: &str) -> f64 {
    let text = text.trim();
    (1..=text.len())
        .rev()
        .filter(|&end| text.is_char_boundary(end))
        .find_map(|end| parse_prefix(&text[..end]))
        .unwrap_or(f64::NAN)
}

fn parse_prefix(candidate: &str) -> Option<f64> {
    // `str::parse` also accepts "inf" and "NaN" spellings
    if candidate
        .chars()
        .any(|c| c.is_alphabetic() && !matches!(c, 'e' | 'E'))
    {
        return None;
    }
    candidate.parse().ok()
}
