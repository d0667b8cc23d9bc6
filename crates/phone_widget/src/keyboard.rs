//! Keyboard navigation for the country overlay.

use bus::WidgetEvent;
use core_types::Key;
use dom::{Document, Id};
use std::sync::mpsc::Sender;

use crate::controller::dispatch;
use crate::{elements, selection};

/// Route one key press. Returns `true` when the event was consumed and the
/// host must suppress the browser default (scrolling, form submit).
///
/// Overlay "open" is observed, not tracked: the list element is present in
/// the markup exactly while the backend shows the overlay.
pub(crate) fn on_keydown(
    doc: &mut Document,
    root: Id,
    evt_tx: &Sender<WidgetEvent>,
    key: Key,
) -> bool {
    let open = elements::country_list_id(doc, root).is_some();
    let selector = elements::country_selector_id(doc, root);
    let selector_focused = selector.is_some() && doc.active_element() == selector;

    match key {
        Key::ArrowDown if open => {
            selection::shift_selected(doc, root, 1);
            true
        }

        Key::ArrowUp if open => {
            selection::shift_selected(doc, root, -1);
            true
        }

        // A focused selector opens the overlay like a click would.
        Key::Space if !open && selector_focused => {
            if let Some(id) = selector {
                doc.request_click(id);
            }
            true
        }

        Key::Enter => {
            if !open {
                if selector_focused && let Some(id) = selector {
                    doc.request_click(id);
                }
                return true;
            }

            match selection::selected_item(doc, root) {
                Some(item) => {
                    if let Some(country) = elements::item_country(doc, item) {
                        dispatch(doc, root, evt_tx, WidgetEvent::SelectCountry { country });
                    }
                    // Hand the user back to the text field to keep typing.
                    if let Some(field) = elements::text_field_id(doc, root) {
                        doc.request_focus(field);
                    }
                }
                None => dispatch(doc, root, evt_tx, WidgetEvent::Close),
            }
            true
        }

        Key::Escape if open => {
            dispatch(doc, root, evt_tx, WidgetEvent::Close);
            true
        }

        _ => false,
    }
}
