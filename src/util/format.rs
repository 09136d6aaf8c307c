#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

const SIZE_UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];

/// Human-readable file size: powers of 1024, up to two decimals with
/// trailing zeros trimmed (`1536.0` becomes `"1.5 KB"`, `512.0` stays
/// `"512 Bytes"`). Sizes come from the browser as `f64`.
#[must_use]
pub fn file_size(bytes: f64) -> String {
    if bytes <= 0.0 || !bytes.is_finite() {
        return "0 Bytes".to_owned();
    }
    let exponent = (bytes.ln() / 1024_f64.ln()).floor();
    let exponent = exponent.clamp(0.0, (SIZE_UNITS.len() - 1) as f64);
    let value = bytes / 1024_f64.powf(exponent);
    let rendered = format!("{value:.2}");
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let unit = SIZE_UNITS[exponent as usize];
    format!("{} {unit}", trim_decimal(&rendered))
}

/// Normalize a currency field to two decimals. Returns `None` when the
/// value does not parse as a finite number, leaving the field untouched.
#[must_use]
pub fn currency(raw: &str) -> Option<String> {
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => Some(format!("{value:.2}")),
        _ => None,
    }
}

fn trim_decimal(rendered: &str) -> &str {
    if rendered.contains('.') {
        rendered.trim_end_matches('0').trim_end_matches('.')
    } else {
        rendered
    }
}
