//! Guarded lookups and mutations over a [`Node`] tree.
//!
//! All lookups are dynamic: the backend re-renders at will, so nothing here
//! caches indices or assumes an element is still present.

use crate::{Id, Node};

/// First value of a (case-insensitively) named attribute, if present.
pub fn attr<'a>(node: &'a Node, name: &str) -> Option<&'a str> {
    match node {
        Node::Element { attributes, .. } => attributes
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .and_then(|(_, v)| v.as_deref()),
        _ => None,
    }
}

pub fn has_attr(node: &Node, name: &str) -> bool {
    match node {
        Node::Element { attributes, .. } => {
            attributes.iter().any(|(k, _)| k.eq_ignore_ascii_case(name))
        }
        _ => false,
    }
}

/// Set or replace an attribute value. No-op on non-element nodes.
pub fn set_attr(node: &mut Node, name: &str, value: &str) {
    let Node::Element { attributes, .. } = node else {
        return;
    };

    if let Some(slot) = attributes.iter_mut().find(|(k, _)| k.eq_ignore_ascii_case(name)) {
        slot.1 = Some(value.to_string());
    } else {
        attributes.push((name.to_string(), Some(value.to_string())));
    }
}

/// Whitespace-token class membership test, ASCII case-insensitive.
pub fn has_class(node: &Node, class: &str) -> bool {
    attr(node, "class").is_some_and(|v| {
        v.split_whitespace()
            .any(|t| t.eq_ignore_ascii_case(class))
    })
}

pub fn add_class(node: &mut Node, class: &str) {
    if has_class(node, class) {
        return;
    }

    let current = attr(node, "class").unwrap_or("").trim().to_string();
    let updated = if current.is_empty() {
        class.to_string()
    } else {
        format!("{current} {class}")
    };
    set_attr(node, "class", &updated);
}

pub fn remove_class(node: &mut Node, class: &str) {
    let Some(current) = attr(node, "class") else {
        return;
    };

    let updated = current
        .split_whitespace()
        .filter(|t| !t.eq_ignore_ascii_case(class))
        .collect::<Vec<_>>()
        .join(" ");
    set_attr(node, "class", &updated);
}

pub fn find_by_id<'a>(node: &'a Node, id: Id) -> Option<&'a Node> {
    if node.id() == id {
        return Some(node);
    }
    node.children().iter().find_map(|c| find_by_id(c, id))
}

pub fn find_by_id_mut<'a>(node: &'a mut Node, id: Id) -> Option<&'a mut Node> {
    if node.id() == id {
        return Some(node);
    }
    node.children_mut()?
        .iter_mut()
        .find_map(|c| find_by_id_mut(c, id))
}

/// First element in document order carrying the class token.
pub fn find_first_class<'a>(node: &'a Node, class: &str) -> Option<&'a Node> {
    if has_class(node, class) {
        return Some(node);
    }
    node.children()
        .iter()
        .find_map(|c| find_first_class(c, class))
}

/// Collect every element carrying the class token, in document order.
pub fn collect_class<'a>(node: &'a Node, class: &str, out: &mut Vec<&'a Node>) {
    if has_class(node, class) {
        out.push(node);
    }
    for c in node.children() {
        collect_class(c, class, out);
    }
}

/// Is `target` the node itself or anywhere in its subtree?
pub fn contains(node: &Node, target: Id) -> bool {
    find_by_id(node, target).is_some()
}

/// Concatenated text content of a subtree.
pub fn collect_text(node: &Node, out: &mut String) {
    match node {
        Node::Text { text, .. } => out.push_str(text),
        Node::Element { children, .. } | Node::Document { children, .. } => {
            for c in children {
                collect_text(c, out);
            }
        }
    }
}
