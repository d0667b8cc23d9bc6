#![no_main]

use libfuzzer_sys::fuzz_target;
use phone_core::{MaskSet, extract_digits, format_raw};

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    // Split the input into a mask list and a raw value; both sides are
    // attacker-controlled in the sense that the backend supplies masks and
    // the user supplies text.
    let (masks, raw) = text.split_once('\n').unwrap_or((text, ""));
    // Well-formed masks never use digits as literals; a digit literal would
    // make the output feed back into extraction.
    if masks.bytes().any(|b| b.is_ascii_digit()) {
        return;
    }
    let masks = MaskSet::parse(masks);

    if let Some(once) = format_raw(raw, &masks) {
        // Masked output must be stable under re-formatting and must not
        // lose or invent digits.
        assert_eq!(format_raw(&once, &masks).as_deref(), Some(once.as_str()));
        assert_eq!(extract_digits(&once), extract_digits(raw));
    }
});
