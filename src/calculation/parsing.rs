//! Lenient numeric parsing for free-text form fields.

/// Parses the leading number of a form field, returning zero when there is none.
///
/// Leading whitespace is skipped and the longest prefix of the form
/// `[+-]digits[.digits][(e|E)[+-]digits]` is read, so `"12.5 hrs"` is `12.5`.
/// Empty, non-numeric and non-finite input yields `0.0`.
///
/// # Examples
///
/// ```
/// use paystub_engine::calculation::parse_lenient;
///
/// assert_eq!(parse_lenient("  40"), 40.0);
/// assert_eq!(parse_lenient("6.2%"), 6.2);
/// assert_eq!(parse_lenient("abc"), 0.0);
/// assert_eq!(parse_lenient(""), 0.0);
/// ```
pub fn parse_lenient(text: &str) -> f64 {
    let trimmed = text.trim_start();
    let bytes = trimmed.as_bytes();
    let digits_from = |mut at: usize| {
        while at < bytes.len() && bytes[at].is_ascii_digit() {
            at += 1;
        }
        at
    };

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }

    let int_end = digits_from(end);
    let mut digit_count = int_end - end;
    end = int_end;

    if bytes.get(end) == Some(&b'.') {
        let frac_end = digits_from(end + 1);
        digit_count += frac_end - (end + 1);
        end = frac_end;
    }

    if digit_count == 0 {
        return 0.0;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_start = end + 1;
        if matches!(bytes.get(exp_start), Some(b'+' | b'-')) {
            exp_start += 1;
        }
        let exp_end = digits_from(exp_start);
        if exp_end > exp_start {
            end = exp_end;
        }
    }

    trimmed[..end]
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .unwrap_or(0.0)
}
