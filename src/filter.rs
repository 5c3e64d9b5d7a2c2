use std::borrow::Cow;

/// Trim a decimal string to its minimal representation.
///
/// Input matching `-?\d*\.?\d{1,28}` is rewritten with leading integer zeros
/// removed, a `0` supplied before a bare fraction, trailing fractional zeros
/// (and a then-trailing decimal point) removed, and a zero value rendered
/// unsigned as `0`. Anything else, including a fractional part longer than
/// 28 digits, is returned unchanged: this is a best-effort formatter, not a
/// validator.
///
/// # Examples
///
/// ```rust
/// use decinterval::canonicalize;
///
/// assert_eq!(canonicalize("1.500"), "1.5");
/// assert_eq!(canonicalize(".5"), "0.5");
/// assert_eq!(canonicalize("-0.000"), "0");
/// assert_eq!(canonicalize("not a number"), "not a number");
/// ```
#[must_use]
pub fn canonicalize(value: &str) -> Cow<'_, str> {
    let Some((negative, int_part, frac_part)) = split_numeric(value) else {
        return Cow::Borrowed(value);
    };

    let int_trimmed = int_part.trim_start_matches('0');
    let int_canonical = if int_trimmed.is_empty() { "0" } else { int_trimmed };
    let frac_canonical = frac_part.trim_end_matches('0');
    let is_zero = int_canonical == "0" && frac_canonical.is_empty();

    let mut out = String::with_capacity(value.len() + 1);
    if negative && !is_zero {
        out.push('-');
    }
    out.push_str(int_canonical);
    if !frac_canonical.is_empty() {
        out.push('.');
        out.push_str(frac_canonical);
    }

    if out == value {
        Cow::Borrowed(value)
    } else {
        Cow::Owned(out)
    }
}

/// Split a candidate into sign, integer digits, and 1-28 fractional digits.
///
/// Returns `None` when the input falls outside the accepted shape.
fn split_numeric(value: &str) -> Option<(bool, &str, &str)> {
    let (negative, body) = match value.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, value),
    };
    if body.is_empty() {
        return None;
    }
    let (int_part, frac_part) = match body.split_once('.') {
        Some((int, frac)) => {
            if frac.is_empty() || frac.len() > 28 {
                return None;
            }
            (int, frac)
        }
        None => (body, ""),
    };
    // A second '.' lands in frac_part and fails the digit check
    if !int_part.bytes().all(|b| b.is_ascii_digit())
        || !frac_part.bytes().all(|b| b.is_ascii_digit())
    {
        return None;
    }
    Some((negative, int_part, frac_part))
}
