// scan.rs - number scanning shared by all fragment formats

/// Scan a decimal `-?digits(.digits*)?` at the start of `input`
///
/// Returns the value and the unconsumed remainder.
pub(crate) fn scan_decimal(input: &str) -> Option<(f64, &str)> {
    let bytes = input.as_bytes();
    let mut end = usize::from(bytes.first() == Some(&b'-'));

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    if end == int_start {
        return None;
    }

    // "52." is tolerated
    if bytes.get(end) == Some(&b'.') {
        end += 1;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
        }
    }

    let value = input[..end].parse::<f64>().ok()?;
    Some((value, &input[end..]))
}

/// Scan an unsigned integer at the start of `input`
pub(crate) fn scan_unsigned(input: &str) -> Option<(u32, &str)> {
    let end = input
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(input.len());
    if end == 0 {
        return None;
    }

    let value = input[..end].parse::<u32>().ok()?;
    Some((value, &input[end..]))
}

/// Parse a complete `lat,lng` pair, whitespace allowed after the comma
pub(crate) fn parse_pair(input: &str) -> Option<(f64, f64)> {
    let (lat, rest) = scan_decimal(input)?;
    let rest = rest.strip_prefix(',')?;
    let (lng, rest) = scan_decimal(rest.trim_start())?;

    rest.is_empty().then_some((lat, lng))
}
