//! # dom
//!
//! Minimal DOM surface for server-rendered widget markup.
//!
//! The backend view layer owns the real document; this crate mirrors just
//! enough of it for browser-side widget behaviors:
//! - [`Node`]/[`Id`]: an element tree with plain attribute lists
//! - guarded, option-returning queries (by id, by class token, attributes,
//!   subtree containment, label text)
//! - [`Document`]: the tree plus the active (focused) element and a drainable
//!   queue of requested side effects ([`DomEffect`]) that the embedding shell
//!   replays against the real browser (focus, synthetic clicks, scrolling,
//!   synthetic change notifications).
//!
//! Elements may or may not be present depending on the backend's render
//! state, so every accessor here returns `Option` and call sites degrade to
//! no-ops rather than panic.

mod document;
mod query;
mod types;

pub use document::{Document, DomEffect, ScrollAlignment};
pub use query::{
    add_class, attr, collect_class, collect_text, contains, find_by_id, find_by_id_mut,
    find_first_class, has_attr, has_class, remove_class, set_attr,
};
pub use types::{Id, Node, NodeId};
