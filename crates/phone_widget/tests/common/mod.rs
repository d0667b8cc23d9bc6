//! Shared markup builder: the widget subtree as the backend renders it.
#![allow(dead_code)]

use dom::{Document, Id, Node};
use phone_widget::{
    COUNTRY_ATTR, COUNTRY_ITEM_CLASS, COUNTRY_ITEM_NAME_CLASS, COUNTRY_LIST_CLASS,
    COUNTRY_SELECTOR_CLASS, MASKS_ATTR,
};

pub const BODY: Id = Id(0);
pub const ROOT: Id = Id(1);
pub const TEXT_FIELD: Id = Id(2);
pub const HIDDEN_FIELD: Id = Id(3);
pub const SELECTOR: Id = Id(4);
pub const LIST: Id = Id(5);
pub const OUTSIDE: Id = Id(99);

pub fn attr(name: &str, value: &str) -> (String, Option<String>) {
    (name.to_string(), Some(value.to_string()))
}

pub fn item_id(index: usize) -> Id {
    Id(10 + index as u32)
}

fn item(index: usize, code: &str, name: &str) -> Node {
    let name_id = Id(40 + index as u32);
    let text_id = Id(70 + index as u32);
    Node::element(
        item_id(index),
        "li",
        vec![
            attr("class", COUNTRY_ITEM_CLASS),
            attr(COUNTRY_ATTR, code),
            attr("aria-selected", "false"),
        ],
        vec![Node::element(
            name_id,
            "span",
            vec![attr("class", COUNTRY_ITEM_NAME_CLASS)],
            vec![Node::text(text_id, name)],
        )],
    )
}

/// Build a page: body > [widget root, an unrelated element].
///
/// `countries` is `(code, display name)` per overlay item; an empty slice
/// with `open == true` renders an empty open list. `masks` lands in the
/// root's mask attribute when present.
pub fn phone_doc(countries: &[(&str, &str)], open: bool, masks: Option<&str>) -> Document {
    let mut root_attrs = vec![attr("id", "phone-widget")];
    if let Some(m) = masks {
        root_attrs.push(attr(MASKS_ATTR, m));
    }

    let mut children = vec![
        Node::element(
            TEXT_FIELD,
            "input",
            vec![attr("type", "text"), attr("value", "")],
            Vec::new(),
        ),
        Node::element(
            HIDDEN_FIELD,
            "input",
            vec![attr("type", "hidden"), attr("value", "")],
            Vec::new(),
        ),
        Node::element(
            SELECTOR,
            "button",
            vec![attr("class", COUNTRY_SELECTOR_CLASS)],
            Vec::new(),
        ),
    ];

    if open {
        let items = countries
            .iter()
            .enumerate()
            .map(|(i, &(code, name))| item(i, code, name))
            .collect();
        children.push(Node::element(
            LIST,
            "ul",
            vec![attr("class", COUNTRY_LIST_CLASS)],
            items,
        ));
    }

    let widget = Node::element(ROOT, "div", root_attrs, children);
    let outside = Node::element(OUTSIDE, "div", Vec::new(), Vec::new());

    Document::new(Node::element(BODY, "body", Vec::new(), vec![widget, outside]))
}

pub fn field_value(doc: &Document, field: Id) -> Option<String> {
    dom::find_by_id(doc.root(), field)
        .and_then(|n| dom::attr(n, "value"))
        .map(str::to_string)
}

pub fn set_field_value(doc: &mut Document, field: Id, value: &str) {
    if let Some(node) = dom::find_by_id_mut(doc.root_mut(), field) {
        dom::set_attr(node, "value", value);
    }
}

pub fn selected_codes(doc: &Document) -> Vec<String> {
    let mut items = Vec::new();
    dom::collect_class(doc.root(), COUNTRY_ITEM_CLASS, &mut items);
    items
        .iter()
        .filter(|n| dom::attr(n, "aria-selected") == Some("true"))
        .filter_map(|n| dom::attr(n, COUNTRY_ATTR))
        .map(str::to_string)
        .collect()
}
