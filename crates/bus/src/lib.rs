use core_types::CountryCode;
use std::sync::mpsc::{Receiver, Sender, channel};

/// Backend -> widget notifications.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum WidgetCommand {
    /// Move input focus to the widget's text field.
    Focus,
    /// Push a normalized value into the hidden field.
    Change { value: String },
    /// Replace the active mask list and re-run formatting.
    SetMasks { masks: Vec<String> },
}

/// Widget -> backend events, addressed to the widget's root element.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum WidgetEvent {
    /// Ask the backend to hide the country overlay.
    Close,
    /// Ask the backend to apply a country selection.
    SelectCountry { country: CountryCode },
}

/// Channel ends held by the widget side.
pub struct WidgetBus {
    pub cmd_rx: Receiver<WidgetCommand>,
    pub evt_tx: Sender<WidgetEvent>,
}

/// Channel ends held by the backend/host side.
pub struct HostBus {
    pub cmd_tx: Sender<WidgetCommand>,
    pub evt_rx: Receiver<WidgetEvent>,
}

/// Create a connected host/widget bus pair.
pub fn bus() -> (HostBus, WidgetBus) {
    let (cmd_tx, cmd_rx) = channel();
    let (evt_tx, evt_rx) = channel();
    (HostBus { cmd_tx, evt_rx }, WidgetBus { cmd_rx, evt_tx })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn events_cross_the_bus_in_order() {
        let (host, widget) = bus();

        widget.evt_tx.send(WidgetEvent::Close).unwrap();
        widget
            .evt_tx
            .send(WidgetEvent::SelectCountry {
                country: "us".to_string(),
            })
            .unwrap();

        assert_eq!(host.evt_rx.recv().unwrap(), WidgetEvent::Close);
        assert_eq!(
            host.evt_rx.recv().unwrap(),
            WidgetEvent::SelectCountry {
                country: "us".to_string()
            }
        );
    }

    #[test]
    fn commands_cross_the_bus() {
        let (host, widget) = bus();

        host.cmd_tx.send(WidgetCommand::Focus).unwrap();
        assert_eq!(widget.cmd_rx.recv().unwrap(), WidgetCommand::Focus);
    }
}
