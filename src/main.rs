//! Headless demo shell: drives the phone widget against a scripted backend.
//!
//! The real deployment embeds the widget in a browser page owned by a
//! server-driven view layer. This binary stands in for both: it renders the
//! markup as a `dom::Document`, replays a short user session, applies the
//! widget's requested DOM effects, and answers outbound events the way the
//! backend would.

use bus::{HostBus, WidgetCommand, WidgetEvent, bus};
use core_types::Key;
use dom::{Document, DomEffect, Id, Node};
use mimalloc::MiMalloc;
use phone_widget::{
    COUNTRY_ATTR, COUNTRY_ITEM_CLASS, COUNTRY_ITEM_NAME_CLASS, COUNTRY_LIST_CLASS,
    COUNTRY_SELECTOR_CLASS, MASKS_ATTR, PhoneWidget,
};
use std::time::Instant;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

const BODY: Id = Id(0);
const ROOT: Id = Id(1);
const TEXT_FIELD: Id = Id(2);
const HIDDEN_FIELD: Id = Id(3);
const SELECTOR: Id = Id(4);
const LIST: Id = Id(5);

/// (country code, display name, dial prefix)
const COUNTRIES: &[(&str, &str, &str)] = &[
    ("de", "Germany", "+49"),
    ("nl", "Netherlands", "+31"),
    ("gb", "United Kingdom", "+44"),
    ("us", "United States", "+1"),
];

fn attr(name: &str, value: &str) -> (String, Option<String>) {
    (name.to_string(), Some(value.to_string()))
}

fn render_page() -> Document {
    let widget = Node::element(
        ROOT,
        "div",
        vec![
            attr("id", "phone"),
            attr(MASKS_ATTR, "XXX-XXXX,(XXX) XXX-XXXX"),
        ],
        vec![
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
        ],
    );

    Document::new(Node::element(BODY, "body", Vec::new(), vec![widget]))
}

/// Backend render step: show the country overlay.
fn open_overlay(doc: &mut Document) {
    let items = COUNTRIES
        .iter()
        .enumerate()
        .map(|(i, &(code, name, _))| {
            let base = 10 + 3 * i as u32;
            Node::element(
                Id(base),
                "li",
                vec![
                    attr("class", COUNTRY_ITEM_CLASS),
                    attr(COUNTRY_ATTR, code),
                    attr("aria-selected", "false"),
                ],
                vec![Node::element(
                    Id(base + 1),
                    "span",
                    vec![attr("class", COUNTRY_ITEM_NAME_CLASS)],
                    vec![Node::text(Id(base + 2), name)],
                )],
            )
        })
        .collect();

    if let Some(root) = dom::find_by_id_mut(doc.root_mut(), ROOT)
        && let Some(children) = root.children_mut()
    {
        children.push(Node::element(
            LIST,
            "ul",
            vec![attr("class", COUNTRY_LIST_CLASS)],
            items,
        ));
    }
}

/// Backend render step: hide the country overlay.
fn close_overlay(doc: &mut Document) {
    if let Some(root) = dom::find_by_id_mut(doc.root_mut(), ROOT)
        && let Some(children) = root.children_mut()
    {
        children.retain(|n| n.id() != LIST);
    }
}

/// Replay requested browser side effects; a synthetic click on the selector
/// is how the overlay opens.
fn replay_effects(doc: &mut Document) {
    for effect in doc.drain_effects() {
        println!("  [dom] {effect:?}");
        if effect == DomEffect::Click(SELECTOR) {
            open_overlay(doc);
        }
    }
}

fn pump_backend(doc: &mut Document, widget: &mut PhoneWidget, host: &HostBus) {
    while let Ok(event) = host.evt_rx.try_recv() {
        println!("  [backend] received {event:?}");
        match event {
            WidgetEvent::Close => close_overlay(doc),
            WidgetEvent::SelectCountry { country } => {
                let dial = COUNTRIES
                    .iter()
                    .find(|(code, _, _)| *code == country)
                    .map(|(_, _, dial)| *dial)
                    .unwrap_or_default();
                // The backend validates, re-renders, and pushes the
                // normalized value down.
                close_overlay(doc);
                widget.handle_command(
                    doc,
                    WidgetCommand::Change {
                        value: dial.to_string(),
                    },
                );
            }
        }
    }
}

fn field_value(doc: &Document, id: Id) -> String {
    dom::find_by_id(doc.root(), id)
        .and_then(|n| dom::attr(n, "value"))
        .unwrap_or("")
        .to_string()
}

fn main() {
    env_logger::init();

    let mut doc = render_page();
    let (host, widget_bus) = bus();

    let Some(mut widget) = PhoneWidget::mount(&doc, ROOT) else {
        log::error!("widget root missing from the page");
        return;
    };
    widget.bind_events();

    println!("typing a number:");
    if let Some(node) = dom::find_by_id_mut(doc.root_mut(), TEXT_FIELD) {
        dom::set_attr(node, "value", "5551234");
    }
    widget.on_input(&mut doc);
    println!("  text field now: {:?}", field_value(&doc, TEXT_FIELD));

    println!("opening the overlay with Enter on the selector:");
    doc.set_active(Some(SELECTOR));
    widget.on_keydown(&mut doc, &widget_bus.evt_tx, Key::Enter);
    replay_effects(&mut doc);
    println!("  overlay open: {}", widget.is_open(&doc));

    println!("stepping down, then typeahead to the U-countries:");
    widget.on_keydown(&mut doc, &widget_bus.evt_tx, Key::ArrowDown);
    widget.on_keypress(&mut doc, SELECTOR, 'u', Instant::now());
    replay_effects(&mut doc);

    println!("confirming with Enter:");
    widget.on_keydown(&mut doc, &widget_bus.evt_tx, Key::Enter);
    pump_backend(&mut doc, &mut widget, &host);
    replay_effects(&mut doc);
    println!("  hidden field now: {:?}", field_value(&doc, HIDDEN_FIELD));
    println!("  overlay open: {}", widget.is_open(&doc));

    widget.unbind_events();
}
