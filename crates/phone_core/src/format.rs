//! Progressive formatting of raw field text against a mask set.

use crate::digits::extract_digits;
use crate::mask::{MaskPattern, MaskSet, PLACEHOLDER};

/// Fill a mask with digits, front to back, and trim the tail.
///
/// Each placeholder consumes one digit; literals are copied through. The
/// result is cut immediately after the last filled slot, so a partially
/// typed number never shows trailing separators or empty placeholder room.
/// Digits beyond the mask's slots are ignored (callers pick a mask that
/// fits first).
pub fn fill_mask(mask: &MaskPattern, digits: &str) -> String {
    let mut out = String::with_capacity(mask.as_str().len());
    let mut rest = digits.chars();
    let mut keep = 0;

    for ch in mask.as_str().chars() {
        if ch == PLACEHOLDER {
            match rest.next() {
                Some(d) => {
                    out.push(d);
                    keep = out.len();
                }
                None => out.push(ch),
            }
        } else {
            out.push(ch);
        }
    }

    out.truncate(keep);
    out
}

/// Format raw field text against the mask set.
///
/// `None` means leave the field untouched: no digits were typed, or no mask
/// can hold them all.
///
/// Re-running on its own output is stable: extraction on a masked string
/// recovers the same digit sequence (mask literals are non-digit by
/// construction), so the same mask is picked and the same string produced.
///
/// # Examples
///
/// ```
/// use phone_core::{MaskSet, format_raw};
///
/// let masks = MaskSet::parse("(XXX) XXX-XXXX");
/// assert_eq!(format_raw("555123", &masks).as_deref(), Some("(555) 123"));
/// assert_eq!(format_raw("5551234567", &masks).as_deref(), Some("(555) 123-4567"));
/// assert_eq!(format_raw("", &masks), None);
/// ```
pub fn format_raw(raw: &str, masks: &MaskSet) -> Option<String> {
    let digits = extract_digits(raw);
    if digits.is_empty() {
        return None;
    }

    let mask = masks.best_fit(digits.chars().count())?;
    Some(fill_mask(mask, &digits))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn fills_left_to_right_with_literals() {
        let mask = MaskPattern::parse("(XXX) XXX-XXXX");
        assert_eq!(fill_mask(&mask, "5551234567"), "(555) 123-4567");
    }

    #[test]
    fn truncates_after_the_last_filled_slot() {
        let mask = MaskPattern::parse("(XXX) XXX-XXXX");
        assert_eq!(fill_mask(&mask, "555123"), "(555) 123");
        assert_eq!(fill_mask(&mask, "5551"), "(555) 1");
        assert_eq!(fill_mask(&mask, "555"), "(555");
    }

    #[test]
    fn no_digits_formats_to_empty() {
        let mask = MaskPattern::parse("XX-XX");
        assert_eq!(fill_mask(&mask, ""), "");
    }

    #[test]
    fn format_raw_noop_without_digits_or_fit() {
        let masks = MaskSet::parse("XXX");
        assert_eq!(format_raw("abc", &masks), None);
        assert_eq!(format_raw("12345", &masks), None);
        assert_eq!(format_raw("123", &MaskSet::default()), None);
    }

    #[test]
    fn format_raw_reformats_already_masked_text() {
        let masks = MaskSet::parse("XXX-XXXX,XXX-XXX-XXXX");
        let once = format_raw("5551234", &masks).unwrap();
        assert_eq!(once, "555-1234");

        // Typing continues inside the already formatted value.
        let extended = format!("{once}89");
        assert_eq!(format_raw(&extended, &masks).as_deref(), Some("555-123-489"));
    }

    #[test]
    fn format_raw_is_idempotent() {
        let masks = MaskSet::parse("XX XX,(XXX) XXX-XXXX");
        for raw in ["1", "+12", "12 34", "(555) 123-4567", "555-0001"] {
            if let Some(once) = format_raw(raw, &masks) {
                assert_eq!(format_raw(&once, &masks).as_deref(), Some(once.as_str()));
            }
        }
    }

    proptest! {
        #[test]
        fn formatting_is_idempotent_for_arbitrary_input(raw in "[-+ ()0-9a-z]{0,24}") {
            let masks = MaskSet::parse("XX-XX,(XXX) XXX-XXXX,XXXXXXXXXXXX");
            if let Some(once) = format_raw(&raw, &masks) {
                let reformatted = format_raw(&once, &masks);
                prop_assert_eq!(reformatted.as_deref(), Some(once.as_str()));
            }
        }

        #[test]
        fn formatted_output_preserves_the_digit_sequence(raw in "[-+ ()0-9]{0,20}") {
            let masks = MaskSet::parse("XX-XX,(XXX) XXX-XXXX,XXXXXXXXXXXX");
            if let Some(once) = format_raw(&raw, &masks) {
                prop_assert_eq!(extract_digits(&once), extract_digits(&raw));
            }
        }
    }
}
