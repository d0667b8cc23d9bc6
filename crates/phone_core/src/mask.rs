//! Mask templates and best-fit selection.

/// The digit-slot marker inside a mask template. Every other character is a
/// literal separator.
pub const PLACEHOLDER: char = 'X';

/// A parsed mask template, e.g. `"(XXX) XXX-XXXX"`.
///
/// Immutable once parsed; `slot_count` is the number of placeholder
/// characters. A template without placeholders parses to a zero-slot mask,
/// which [`MaskSet::best_fit`] never picks once a digit has been typed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MaskPattern {
    pattern: String,
    slots: usize,
}

impl MaskPattern {
    pub fn parse(pattern: &str) -> Self {
        let slots = pattern.chars().filter(|&c| c == PLACEHOLDER).count();
        Self {
            pattern: pattern.to_string(),
            slots,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.pattern
    }

    pub fn slot_count(&self) -> usize {
        self.slots
    }
}

/// An ordered collection of mask templates, as supplied by the backend.
///
/// Input order is preserved; it is the tie-breaker for equally tight fits.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MaskSet {
    patterns: Vec<MaskPattern>,
}

impl MaskSet {
    /// Parse a comma-delimited mask list, e.g. `"XXX-XXXX,XXX-XXX-XXXX"`.
    ///
    /// Blank entries are skipped.
    pub fn parse(raw: &str) -> Self {
        Self {
            patterns: raw
                .split(',')
                .map(str::trim)
                .filter(|p| !p.is_empty())
                .map(MaskPattern::parse)
                .collect(),
        }
    }

    pub fn from_patterns<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            patterns: patterns
                .into_iter()
                .map(|p| MaskPattern::parse(p.as_ref()))
                .collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// The tightest mask that can hold `digit_count` digits.
    ///
    /// Masks with fewer slots than typed digits are excluded; among the rest
    /// the smallest slot count wins, first-listed on ties. `None` means: do
    /// not reformat, leave the raw text as typed.
    ///
    /// # Examples
    ///
    /// ```
    /// use phone_core::MaskSet;
    ///
    /// let masks = MaskSet::parse("XXX-XXX,XXX-XXX-XXXX");
    /// assert_eq!(masks.best_fit(5).unwrap().as_str(), "XXX-XXX");
    /// assert_eq!(masks.best_fit(7).unwrap().as_str(), "XXX-XXX-XXXX");
    /// assert!(masks.best_fit(11).is_none());
    /// assert!(masks.best_fit(0).is_none());
    /// ```
    pub fn best_fit(&self, digit_count: usize) -> Option<&MaskPattern> {
        if digit_count == 0 {
            return None;
        }

        let mut best: Option<&MaskPattern> = None;
        for pattern in &self.patterns {
            if pattern.slot_count() < digit_count {
                continue;
            }
            let tighter = match best {
                None => true,
                Some(b) => pattern.slot_count() < b.slot_count(),
            };
            if tighter {
                best = Some(pattern);
            }
        }
        best
    }
}
