//! Typeahead: jump to the first country whose name starts with what the
//! user recently typed.

use std::time::{Duration, Instant};

/// Inactivity window after which the accumulated prefix resets.
pub(crate) const RESET_AFTER: Duration = Duration::from_millis(1500);

/// Accumulated prefix plus its restart-on-activity reset deadline.
///
/// The deadline is checked lazily before each append and by [`tick`], so no
/// background timer is needed; cancel on unbind so a disposed widget never
/// resurrects stale state.
///
/// [`tick`]: Typeahead::tick
#[derive(Debug, Default)]
pub(crate) struct Typeahead {
    text: String,
    deadline: Option<Instant>,
}

impl Typeahead {
    /// Append a typed character and re-arm the reset deadline.
    ///
    /// Returns the accumulated prefix. The deadline re-arms on every call,
    /// whether or not the caller ends up finding a match.
    pub(crate) fn push(&mut self, ch: char, now: Instant) -> &str {
        if self.expired(now) {
            self.text.clear();
        }
        self.text.push(ch);
        self.deadline = Some(now + RESET_AFTER);
        &self.text
    }

    /// Host-loop hook: clear the prefix once the deadline passes.
    pub(crate) fn tick(&mut self, now: Instant) {
        if self.expired(now) {
            self.cancel();
        }
    }

    /// Drop the prefix and disarm the deadline.
    pub(crate) fn cancel(&mut self) {
        self.text.clear();
        self.deadline = None;
    }

    fn expired(&self, now: Instant) -> bool {
        self.deadline.is_some_and(|d| now >= d)
    }
}

/// First label (in document order) starting with `prefix`, ASCII
/// case-insensitive. Labels are trimmed before matching since markup
/// indentation leaks into collected text.
pub(crate) fn match_prefix(labels: &[String], prefix: &str) -> Option<usize> {
    if prefix.is_empty() {
        return None;
    }
    labels
        .iter()
        .position(|label| starts_with_ignore_ascii_case(label.trim(), prefix))
}

fn starts_with_ignore_ascii_case(s: &str, prefix: &str) -> bool {
    let mut chars = s.chars();
    prefix
        .chars()
        .all(|p| chars.next().is_some_and(|c| c.eq_ignore_ascii_case(&p)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn push_accumulates_within_the_window() {
        let mut ta = Typeahead::default();
        let t0 = Instant::now();

        assert_eq!(ta.push('g', t0), "g");
        assert_eq!(ta.push('e', t0 + Duration::from_millis(200)), "ge");
    }

    #[test]
    fn push_after_the_window_starts_a_fresh_prefix() {
        let mut ta = Typeahead::default();
        let t0 = Instant::now();

        ta.push('g', t0);
        assert_eq!(ta.push('e', t0 + Duration::from_millis(1600)), "e");
    }

    #[test]
    fn each_push_restarts_the_window() {
        let mut ta = Typeahead::default();
        let t0 = Instant::now();

        ta.push('g', t0);
        ta.push('h', t0 + Duration::from_millis(1400));
        // 1.4s + 1.4s is past the original deadline but not the restarted one.
        assert_eq!(ta.push('a', t0 + Duration::from_millis(2800)), "gha");
    }

    #[test]
    fn tick_clears_only_after_the_deadline() {
        let mut ta = Typeahead::default();
        let t0 = Instant::now();

        ta.push('g', t0);
        ta.tick(t0 + Duration::from_millis(1000));
        assert_eq!(ta.push('e', t0 + Duration::from_millis(1100)), "ge");

        ta.tick(t0 + Duration::from_millis(2700));
        assert_eq!(ta.push('x', t0 + Duration::from_millis(2800)), "x");
    }

    #[test]
    fn cancel_disarms_and_clears() {
        let mut ta = Typeahead::default();
        let t0 = Instant::now();

        ta.push('g', t0);
        ta.cancel();
        assert_eq!(ta.push('e', t0 + Duration::from_millis(10)), "e");
    }

    #[test]
    fn match_prefix_is_case_insensitive_and_first_wins() {
        let items = labels(&["Ghana", "Georgia", "Germany"]);

        assert_eq!(match_prefix(&items, "g"), Some(0));
        assert_eq!(match_prefix(&items, "ge"), Some(1));
        assert_eq!(match_prefix(&items, "GER"), Some(2));
        assert_eq!(match_prefix(&items, "x"), None);
    }

    #[test]
    fn match_prefix_trims_label_whitespace() {
        let items = labels(&["\n      Germany\n    "]);
        assert_eq!(match_prefix(&items, "ger"), Some(0));
    }

    #[test]
    fn empty_prefix_never_matches() {
        let items = labels(&["Germany"]);
        assert_eq!(match_prefix(&items, ""), None);
    }
}
