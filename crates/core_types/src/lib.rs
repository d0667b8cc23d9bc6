pub type CountryCode = String;

/// Key presses the widget reacts to, as delivered by the embedding shell.
///
/// Anything outside this set never reaches the widget's keyboard handler.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    ArrowUp,
    ArrowDown,
    Enter,
    Space,
    Escape,
    Char(char),
}
