//! Digit extraction from raw field text.

/// Extract the dialable digits from raw input.
///
/// Every character outside `0-9` is dropped, then the leading run of `0`s is
/// stripped: a leading zero is typically a dial-out prefix artifact and
/// breaks mask matching for many regions. Zeros after the first non-zero
/// digit are kept.
///
/// # Examples
///
/// ```
/// use phone_core::extract_digits;
///
/// assert_eq!(extract_digits("+1 (020) 555-0123"), "10205550123");
/// assert_eq!(extract_digits("06-1234"), "61234");
/// assert_eq!(extract_digits("0000"), "");
/// assert_eq!(extract_digits("no digits"), "");
/// ```
pub fn extract_digits(raw: &str) -> String {
    raw.chars()
        .filter(char::is_ascii_digit)
        .skip_while(|&c| c == '0')
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_everything_but_digits() {
        assert_eq!(extract_digits("(555) 123-4567"), "5551234567");
        assert_eq!(extract_digits("+31 6 12345678"), "31612345678");
    }

    #[test]
    fn strips_only_the_leading_zero_run() {
        assert_eq!(extract_digits("0612345678"), "612345678");
        assert_eq!(extract_digits("00 31 6 10203040"), "31610203040");
        // Internal and trailing zeros survive.
        assert_eq!(extract_digits("5005000"), "5005000");
    }

    #[test]
    fn all_zeros_yield_empty() {
        assert_eq!(extract_digits("0000"), "");
    }

    #[test]
    fn empty_input_yields_empty() {
        assert_eq!(extract_digits(""), "");
    }
}
