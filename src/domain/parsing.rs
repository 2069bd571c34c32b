use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde_json::Value;

/// Coerce a stored numeric column to a number. Anything that is not a finite
/// number or a numeric string counts as zero, never as an error.
pub fn parse_metric(value: &Value) -> f64 {
    match value {
        Value::Number(n) => n.as_f64().filter(|v| v.is_finite()).unwrap_or(0.0),
        Value::String(s) => parse_metric_text(s),
        _ => 0.0,
    }
}

/// Text flavour of `parse_metric`, shared with stores that read raw column text.
/// Reads the longest leading decimal number, so `"12.5 km"` is 12.5 and `"1,5"` is 1.
pub fn parse_metric_text(text: &str) -> f64 {
    let text = text.trim();
    text[..numeric_prefix_len(text)]
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

/// Byte length of `[+-]digits[.digits][(e|E)[+-]digits]` at the start of `text`
fn numeric_prefix_len(text: &str) -> usize {
    let bytes = text.as_bytes();
    let digits_from = |mut i: usize| {
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        i
    };

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }

    let int_end = digits_from(end);
    let mut mantissa_end = int_end;
    if bytes.get(int_end) == Some(&b'.') {
        mantissa_end = digits_from(int_end + 1);
    }

    // a lone sign or dot is not a number
    if mantissa_end - end <= usize::from(mantissa_end > int_end) {
        return 0;
    }
    end = mantissa_end;

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp = end + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let exp_end = digits_from(exp);
        if exp_end > exp {
            end = exp_end;
        }
    }

    end
}

/// Whole-number columns such as moving time; fractional input is truncated
pub fn parse_count(value: &Value) -> i64 {
    match value {
        Value::Number(n) => n
            .as_i64()
            .unwrap_or_else(|| parse_metric(value) as i64),
        Value::String(s) => parse_metric_text(s) as i64,
        _ => 0,
    }
}

/// Parse an activity start timestamp in any of the shapes the stores hand out
pub fn parse_start_date(text: &str) -> Option<NaiveDateTime> {
    let text = text.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.naive_utc());
    }

    const FORMATS: [&str; 4] = [
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%d %H:%M:%S%.f",
    ];
    for format in FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(text, format) {
            return Some(dt);
        }
    }

    if let Ok(dt) = DateTime::parse_from_str(text, "%Y-%m-%d %H:%M:%S%#z") {
        return Some(dt.naive_utc());
    }

    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}
