//! # phone_widget
//!
//! Browser-side behavior for a server-rendered phone-number input: a text
//! field, a hidden normalized field, and a country-selector overlay list.
//!
//! The backend view layer owns the markup and the country data; this crate
//! owns the in-browser interaction glue:
//! - progressive input masking (via `phone_core`)
//! - the keyboard-driven selection state machine for the overlay list
//! - typeahead (jump-to-country-by-typed-prefix) with an inactivity reset
//! - event binding lifetime and dispatch of `close`/`select_country` back to
//!   the backend
//!
//! The rendered DOM is the single source of truth: selection state is
//! re-derived from `aria-selected` on every call, never cached, so a backend
//! re-render between events cannot leave the widget stale.

mod controller;
mod elements;
mod keyboard;
mod selection;
mod typeahead;

pub use controller::{Listeners, PhoneWidget};
pub use elements::{
    COUNTRY_ATTR, COUNTRY_ITEM_CLASS, COUNTRY_ITEM_NAME_CLASS, COUNTRY_LIST_CLASS,
    COUNTRY_SELECTOR_CLASS, MASKS_ATTR,
};
