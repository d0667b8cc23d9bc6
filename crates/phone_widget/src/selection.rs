//! Overlay selection state machine.
//!
//! The rendered list is the store: current index and item count are
//! re-derived from `aria-selected` and the item elements on every call, so
//! the machine survives backend re-renders between events. Invariant: at
//! most one item is selected at a time.

use dom::{Document, Id, ScrollAlignment, add_class, find_by_id_mut, remove_class, set_attr};

use crate::elements;

/// Index of the selected item within the current item list, if any.
pub(crate) fn selected_index(doc: &Document, root: Id) -> Option<usize> {
    let selected = selected_item(doc, root)?;
    elements::country_item_ids(doc, root)
        .iter()
        .position(|&id| id == selected)
}

pub(crate) fn selected_item(doc: &Document, root: Id) -> Option<Id> {
    elements::selected_item_ids(doc, root).into_iter().next()
}

/// Move the selection up or down, clamped to the list ends.
///
/// With no current selection the baseline is index 0, so the first step down
/// lands on index 1. Scrolls to the nearest visible position: keyboard
/// stepping should disturb the viewport minimally.
pub(crate) fn shift_selected(doc: &mut Document, root: Id, delta: isize) {
    let items = elements::country_item_ids(doc, root);
    if items.is_empty() {
        return;
    }

    let current = selected_index(doc, root).unwrap_or(0);
    let target = current.saturating_add_signed(delta).min(items.len() - 1);

    for id in elements::selected_item_ids(doc, root) {
        set_selected(doc, id, false);
    }
    set_selected(doc, items[target], true);
    doc.request_scroll(items[target], ScrollAlignment::Nearest);
}

/// Jump the selection to a specific index (typeahead path).
///
/// Scrolls the item to the start of the viewport: a typeahead jump moves to
/// a new letter group and should show it from the top.
pub(crate) fn select_index(doc: &mut Document, root: Id, index: usize) {
    let items = elements::country_item_ids(doc, root);
    let Some(&target) = items.get(index) else {
        return;
    };

    for id in elements::selected_item_ids(doc, root) {
        set_selected(doc, id, false);
    }
    set_selected(doc, target, true);
    doc.request_scroll(target, ScrollAlignment::Start);
}

fn set_selected(doc: &mut Document, item: Id, on: bool) {
    let Some(node) = find_by_id_mut(doc.root_mut(), item) else {
        return;
    };

    set_attr(node, elements::SELECTED_ATTR, if on { "true" } else { "false" });
    if on {
        add_class(node, elements::SELECTED_CLASS);
    } else {
        remove_class(node, elements::SELECTED_CLASS);
    }
}
