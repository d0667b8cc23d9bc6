//! # phone_core
//!
//! UI-agnostic masking/formatting core for a phone-number input.
//!
//! This crate provides the building blocks the widget controller composes:
//! - [`extract_digits`]: strip non-digits and the leading zero run
//! - [`MaskPattern`]/[`MaskSet`]: parsed mask templates with slot counts
//! - [`format_raw`]: best-fit progressive formatting of raw field text
//!
//! ## Design Principles
//!
//! No DOM, no events, no I/O: everything here is a pure function of its
//! inputs, so the formatting semantics can be tested exhaustively without a
//! document. Absence of a result (`None`) always means "leave the field as
//! typed" rather than an error.

mod digits;
mod format;
mod mask;

pub use digits::extract_digits;
pub use format::{fill_mask, format_raw};
pub use mask::{MaskPattern, MaskSet, PLACEHOLDER};
