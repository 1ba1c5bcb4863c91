//! Line-level helpers shared by the OBJ and MTL parsers: comment stripping,
//! whitespace tokenization and strict numeric classification.

/// Truncates `line` at the first `#`.
pub fn strip_comment(line: &str) -> &str {
    match line.find('#') {
        Some(index) => &line[..index],
        None => line,
    }
}

/// Splits a comment-stripped line into whitespace-delimited tokens.
pub fn split(line: &str) -> Vec<&str> {
    line.split_whitespace().collect()
}

/// Parses a strict decimal float: optional sign, digits, optional fractional
/// part. Exponents, `inf` and `nan` are rejected so malformed geometry fails
/// loudly instead of sneaking through `f32::from_str`.
pub fn parse_float(token: &str) -> Option<f32> {
    if !is_decimal(token, true) {
        return None;
    }
    token.parse().ok()
}

/// Parses a strict decimal integer: optional sign followed by digits only.
pub fn parse_int(token: &str) -> Option<i64> {
    if !is_decimal(token, false) {
        return None;
    }
    token.parse().ok()
}

fn is_decimal(token: &str, allow_fraction: bool) -> bool {
    let rest = token.strip_prefix(['+', '-']).unwrap_or(token);
    if rest.is_empty() {
        return false;
    }
    let mut parts = rest.splitn(2, '.');
    let integer = parts.next().unwrap_or("");
    let fraction = parts.next();
    if fraction.is_some() && !allow_fraction {
        return false;
    }
    // `.` alone carries no digits at all.
    if integer.is_empty() && fraction.map_or(true, str::is_empty) {
        return false;
    }
    integer.chars().all(|c| c.is_ascii_digit())
        && fraction.map_or(true, |f| f.chars().all(|c| c.is_ascii_digit()))
}
