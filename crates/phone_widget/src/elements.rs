//! Guarded lookups for the widget's backend-rendered parts.
//!
//! These have to be dynamic: not all elements are always present, since the
//! overlay list only exists in the markup while the backend shows it.

use dom::{Document, Id, Node, attr, collect_class, collect_text, find_by_id, find_first_class};

pub const COUNTRY_SELECTOR_CLASS: &str = "dialview-country";
pub const COUNTRY_LIST_CLASS: &str = "dialview-country-list";
pub const COUNTRY_ITEM_CLASS: &str = "dialview-country-item";
pub const COUNTRY_ITEM_NAME_CLASS: &str = "dialview-country-item-name";

/// Country code carried by each overlay item.
pub const COUNTRY_ATTR: &str = "data-country";
/// Comma-delimited mask list carried by the widget root.
pub const MASKS_ATTR: &str = "data-masks";

pub(crate) const SELECTED_ATTR: &str = "aria-selected";
pub(crate) const SELECTED_CLASS: &str = "selected";

pub(crate) fn widget_root<'a>(doc: &'a Document, root: Id) -> Option<&'a Node> {
    find_by_id(doc.root(), root)
}

fn first_input_of_type<'a>(node: &'a Node, ty: &str) -> Option<&'a Node> {
    if node.name().is_some_and(|n| n.eq_ignore_ascii_case("input"))
        && attr(node, "type").is_some_and(|t| t.eq_ignore_ascii_case(ty))
    {
        return Some(node);
    }
    node.children()
        .iter()
        .find_map(|c| first_input_of_type(c, ty))
}

pub(crate) fn text_field_id(doc: &Document, root: Id) -> Option<Id> {
    widget_root(doc, root)
        .and_then(|n| first_input_of_type(n, "text"))
        .map(Node::id)
}

pub(crate) fn hidden_field_id(doc: &Document, root: Id) -> Option<Id> {
    widget_root(doc, root)
        .and_then(|n| first_input_of_type(n, "hidden"))
        .map(Node::id)
}

pub(crate) fn country_selector_id(doc: &Document, root: Id) -> Option<Id> {
    widget_root(doc, root)
        .and_then(|n| find_first_class(n, COUNTRY_SELECTOR_CLASS))
        .map(Node::id)
}

/// The overlay list container; present only while the overlay is open.
pub(crate) fn country_list_id(doc: &Document, root: Id) -> Option<Id> {
    widget_root(doc, root)
        .and_then(|n| find_first_class(n, COUNTRY_LIST_CLASS))
        .map(Node::id)
}

pub(crate) fn country_item_ids(doc: &Document, root: Id) -> Vec<Id> {
    let Some(node) = widget_root(doc, root) else {
        return Vec::new();
    };

    let mut items = Vec::new();
    collect_class(node, COUNTRY_ITEM_CLASS, &mut items);
    items.iter().map(|n| n.id()).collect()
}

/// Item label texts in document order, one per item.
///
/// An item without a name sub-element contributes an empty label, which
/// never matches a non-empty typeahead prefix.
pub(crate) fn country_item_labels(doc: &Document, root: Id) -> Vec<String> {
    let Some(node) = widget_root(doc, root) else {
        return Vec::new();
    };

    let mut items = Vec::new();
    collect_class(node, COUNTRY_ITEM_CLASS, &mut items);

    items
        .iter()
        .map(|item| {
            let mut label = String::new();
            if let Some(name) = find_first_class(item, COUNTRY_ITEM_NAME_CLASS) {
                collect_text(name, &mut label);
            }
            label
        })
        .collect()
}

pub(crate) fn selected_item_ids(doc: &Document, root: Id) -> Vec<Id> {
    let Some(node) = widget_root(doc, root) else {
        return Vec::new();
    };

    let mut items = Vec::new();
    collect_class(node, COUNTRY_ITEM_CLASS, &mut items);

    items
        .iter()
        .filter(|n| attr(n, SELECTED_ATTR) == Some("true"))
        .map(|n| n.id())
        .collect()
}

pub(crate) fn item_country(doc: &Document, item: Id) -> Option<String> {
    find_by_id(doc.root(), item)
        .and_then(|n| attr(n, COUNTRY_ATTR))
        .map(str::to_string)
}
