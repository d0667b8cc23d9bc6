//! Widget lifecycle and event plumbing.

use bitflags::bitflags;
use bus::{WidgetCommand, WidgetEvent};
use core_types::Key;
use dom::{Document, Id, attr, contains, find_by_id, find_by_id_mut, set_attr};
use phone_core::{MaskSet, format_raw};
use std::sync::mpsc::Sender;
use std::time::Instant;

use crate::elements::{self, MASKS_ATTR};
use crate::keyboard;
use crate::selection;
use crate::typeahead::{self, Typeahead};

bitflags! {
    /// Listener registrations held while the widget is bound.
    ///
    /// The embedding shell keeps delivering events for the whole page; a
    /// handler whose flag is cleared ignores them, which is what unbinding
    /// a listener means here.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct Listeners: u8 {
        const BODY_CLICK  = 1 << 0;
        const BODY_FOCUS  = 1 << 1;
        const BODY_BLUR   = 1 << 2;
        const KEYDOWN     = 1 << 3;
        const KEYPRESS    = 1 << 4;
        const FIELD_FOCUS = 1 << 5;
        const FIELD_INPUT = 1 << 6;
    }
}

/// One mounted phone-input widget.
///
/// Holds only what cannot live in the DOM: the parsed mask set, the
/// typeahead buffer, and the listener flags. Everything else (field values,
/// selection, overlay visibility) is read from the document on demand.
pub struct PhoneWidget {
    root: Id,
    masks: MaskSet,
    typeahead: Typeahead,
    listeners: Listeners,
}

impl PhoneWidget {
    /// Attach to the widget root element. `None` if the root is not in the
    /// document.
    ///
    /// Masking is an optional capability: without a mask attribute the
    /// selection/typeahead/keyboard core still runs, formatting is inert.
    pub fn mount(doc: &Document, root: Id) -> Option<Self> {
        let node = elements::widget_root(doc, root)?;
        let masks = attr(node, MASKS_ATTR)
            .map(MaskSet::parse)
            .unwrap_or_default();

        Some(Self {
            root,
            masks,
            typeahead: Typeahead::default(),
            listeners: Listeners::empty(),
        })
    }

    pub fn root(&self) -> Id {
        self.root
    }

    pub fn listeners(&self) -> Listeners {
        self.listeners
    }

    /// Single setup routine: register every listener this widget uses.
    pub fn bind_events(&mut self) {
        self.listeners = Listeners::all();
        log::debug!("phone widget {:?}: listeners bound", self.root);
    }

    /// Single teardown routine: release listeners and cancel the typeahead
    /// reset deadline so nothing fires against a disposed widget.
    pub fn unbind_events(&mut self) {
        self.listeners = Listeners::empty();
        self.typeahead.cancel();
        log::debug!("phone widget {:?}: listeners unbound", self.root);
    }

    /// Is the country overlay currently rendered?
    pub fn is_open(&self, doc: &Document) -> bool {
        elements::country_list_id(doc, self.root).is_some()
    }

    /// Backend notification handler.
    pub fn handle_command(&mut self, doc: &mut Document, cmd: WidgetCommand) {
        match cmd {
            WidgetCommand::Focus => {
                if let Some(field) = elements::text_field_id(doc, self.root) {
                    doc.request_focus(field);
                }
            }
            WidgetCommand::Change { value } => self.push_change(doc, &value),
            WidgetCommand::SetMasks { masks } => {
                self.masks = MaskSet::from_patterns(masks);
                self.apply_format(doc);
            }
        }
    }

    /// Backend re-render hook: the mask attribute may have been replaced.
    pub fn on_update(&mut self, doc: &mut Document) {
        if self.masks.is_empty() {
            return;
        }
        let Some(raw) = elements::widget_root(doc, self.root).and_then(|n| attr(n, MASKS_ATTR))
        else {
            return;
        };

        self.masks = MaskSet::parse(raw);
        self.apply_format(doc);
    }

    /// Key navigation. Returns `true` when the host must preventDefault.
    pub fn on_keydown(&mut self, doc: &mut Document, evt_tx: &Sender<WidgetEvent>, key: Key) -> bool {
        if !self.listeners.contains(Listeners::KEYDOWN) {
            return false;
        }
        keyboard::on_keydown(doc, self.root, evt_tx, key)
    }

    /// Printable-key handler feeding the typeahead.
    ///
    /// Qualifying presses: a single ASCII letter, targeted inside this
    /// widget but not at the text field (typing a phone number must not
    /// jump the country selection).
    pub fn on_keypress(&mut self, doc: &mut Document, target: Id, ch: char, now: Instant) {
        if !self.listeners.contains(Listeners::KEYPRESS) {
            return;
        }
        let Some(node) = elements::widget_root(doc, self.root) else {
            return;
        };
        if !contains(node, target) {
            return;
        }
        if elements::text_field_id(doc, self.root) == Some(target) {
            return;
        }
        if !ch.is_ascii_alphabetic() {
            return;
        }

        let prefix = self.typeahead.push(ch, now).to_string();
        if prefix.is_empty() {
            return;
        }

        let labels = elements::country_item_labels(doc, self.root);
        let Some(index) = typeahead::match_prefix(&labels, &prefix) else {
            return;
        };
        selection::select_index(doc, self.root, index);
    }

    /// A click anywhere in the page body.
    pub fn on_body_click(&self, doc: &Document, evt_tx: &Sender<WidgetEvent>, target: Id) {
        self.outside_event(Listeners::BODY_CLICK, doc, evt_tx, target);
    }

    /// Focus moved somewhere in the page body.
    pub fn on_body_focus(&self, doc: &Document, evt_tx: &Sender<WidgetEvent>, target: Id) {
        self.outside_event(Listeners::BODY_FOCUS, doc, evt_tx, target);
    }

    /// Focus left an element somewhere in the page body.
    pub fn on_body_blur(&self, doc: &Document, evt_tx: &Sender<WidgetEvent>, target: Id) {
        self.outside_event(Listeners::BODY_BLUR, doc, evt_tx, target);
    }

    /// Focus entered the widget's own text field: switching from the country
    /// list back to typing closes the overlay.
    pub fn on_field_focus(&self, doc: &Document, evt_tx: &Sender<WidgetEvent>, target: Id) {
        if !self.listeners.contains(Listeners::FIELD_FOCUS) {
            return;
        }
        if elements::text_field_id(doc, self.root) != Some(target) {
            return;
        }
        dispatch(doc, self.root, evt_tx, WidgetEvent::Close);
    }

    /// The text field's value changed (user typed/pasted): re-format it.
    pub fn on_input(&self, doc: &mut Document) {
        if !self.listeners.contains(Listeners::FIELD_INPUT) {
            return;
        }
        self.apply_format(doc);
    }

    /// Host-loop time hook for the typeahead inactivity reset.
    pub fn tick(&mut self, now: Instant) {
        self.typeahead.tick(now);
    }

    fn outside_event(
        &self,
        flag: Listeners,
        doc: &Document,
        evt_tx: &Sender<WidgetEvent>,
        target: Id,
    ) {
        if !self.listeners.contains(flag) {
            return;
        }
        // Events inside the widget are its own business; anything else
        // closes the overlay.
        if elements::widget_root(doc, self.root).is_some_and(|node| contains(node, target)) {
            return;
        }
        dispatch(doc, self.root, evt_tx, WidgetEvent::Close);
    }

    /// Write `value` into the hidden field and request a synthetic change
    /// notification, but only when the value actually differs. The direct
    /// backend write does not produce a normal change notification, so form
    /// code around the widget would otherwise miss it.
    fn push_change(&self, doc: &mut Document, value: &str) {
        let Some(field) = elements::hidden_field_id(doc, self.root) else {
            return;
        };
        if find_by_id(doc.root(), field).and_then(|n| attr(n, "value")) == Some(value) {
            return;
        }

        if let Some(node) = find_by_id_mut(doc.root_mut(), field) {
            set_attr(node, "value", value);
        }
        doc.request_change_event(field);
    }

    fn apply_format(&self, doc: &mut Document) {
        if self.masks.is_empty() {
            return;
        }
        let Some(field) = elements::text_field_id(doc, self.root) else {
            return;
        };

        let raw = match find_by_id(doc.root(), field).and_then(|n| attr(n, "value")) {
            Some(v) => v.to_string(),
            None => return,
        };
        let Some(formatted) = format_raw(&raw, &self.masks) else {
            return;
        };
        if formatted == raw {
            return;
        }

        // The visible field only; the hidden normalized field is the
        // backend's to write.
        if let Some(node) = find_by_id_mut(doc.root_mut(), field) {
            set_attr(node, "value", &formatted);
        }
    }
}

/// Send an event to the backend, addressed to the widget root.
///
/// Dropped when the root is no longer in the document (mid-re-render) or
/// the backend side of the bus is gone.
pub(crate) fn dispatch(doc: &Document, root: Id, evt_tx: &Sender<WidgetEvent>, event: WidgetEvent) {
    if find_by_id(doc.root(), root).is_none() {
        log::debug!("phone widget {root:?}: dropping {event:?}, root detached");
        return;
    }
    if evt_tx.send(event).is_err() {
        log::debug!("phone widget {root:?}: backend bus closed");
    }
}
