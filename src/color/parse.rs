use crate::error::{ColorError, Result};

/// Parse the percentage micro-format used for channel values.
///
/// The accepted shape is `<float>%`, optionally surrounded by whitespace,
/// e.g. `"50%"`, `" 70.5 %"` or `"1e2%"`. The number must lie in `0..=100`.
///
/// Returns the percentage itself (not yet scaled to a byte).
pub fn parse_percentage(s: &str) -> Result<f64> {
    use ColorError::*;

    let Some(number) = s.trim().strip_suffix('%') else {
        return Err(InvalidFormat(s.to_owned()));
    };

    let percent = number
        .trim()
        .parse::<f64>()
        .map_err(|_| InvalidFormat(s.to_owned()))?;

    // NaN fails `contains` as well
    if !(0.0..=100.0).contains(&percent) {
        return Err(InvalidValue(format!("{s:?} is outside 0%..=100%")));
    }

    Ok(percent)
}
