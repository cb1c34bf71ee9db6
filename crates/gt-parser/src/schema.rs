//! Accessors for the tags of an event file.
//!
//! Each accessor states what happens when its node is missing:
//!
//! | tag                   | parent          | when missing                  |
//! |-----------------------|-----------------|-------------------------------|
//! | `event`               | root            | zero events                   |
//! | `event_name`          | `event`         | `EVENT_NODE_MISSING` error    |
//! | `event_body`          | `event`         | no text breaks                |
//! | `text_break`          | `event_body`    | no text breaks                |
//! | `text`                | `text_break`    | `""`                          |
//! | `event_options`       | `event`         | no options                    |
//! | `event_option`        | `event_options` | no options                    |
//! | `option_text`         | `event_option`  | `EVENT_NODE_MISSING` error    |
//! | `hidden_message_text` | `event_option`  | `None`                        |
//! | `destinations`        | `event_option`  | no destinations               |
//! | `destination`         | `destinations`  | no destinations               |
//! | `destination_id`      | `destination`   | destination skipped           |
//!
//! A node that is present but has no text content reads as `""` everywhere.

use gt_core::error::EVENT_NODE_MISSING;
use gt_core::GtError;

use crate::xml::XmlElementNode;

pub const EVENT: &str = "event";
pub const EVENT_NAME: &str = "event_name";
pub const EVENT_BODY: &str = "event_body";
pub const TEXT_BREAK: &str = "text_break";
pub const TEXT: &str = "text";
pub const EVENT_OPTIONS: &str = "event_options";
pub const EVENT_OPTION: &str = "event_option";
pub const OPTION_TEXT: &str = "option_text";
pub const HIDDEN_MESSAGE_TEXT: &str = "hidden_message_text";
pub const DESTINATIONS: &str = "destinations";
pub const DESTINATION: &str = "destination";
pub const DESTINATION_ID: &str = "destination_id";

pub fn events(root: &XmlElementNode) -> impl Iterator<Item = &XmlElementNode> {
    root.children_named(EVENT)
}

/// Required.
pub fn event_name(event: &XmlElementNode) -> Result<String, GtError> {
    required_text(event, EVENT_NAME)
}

/// Empty when `<event_body>` is absent.
pub fn text_breaks(event: &XmlElementNode) -> Vec<&XmlElementNode> {
    event
        .child(EVENT_BODY)
        .map(|body| body.children_named(TEXT_BREAK).collect())
        .unwrap_or_default()
}

/// `""` both for a missing `<text>` and for an empty one.
pub fn text_break_text(text_break: &XmlElementNode) -> String {
    text_break
        .child(TEXT)
        .and_then(XmlElementNode::text)
        .unwrap_or_default()
}

/// Empty when `<event_options>` is absent.
pub fn event_options(event: &XmlElementNode) -> Vec<&XmlElementNode> {
    event
        .child(EVENT_OPTIONS)
        .map(|options| options.children_named(EVENT_OPTION).collect())
        .unwrap_or_default()
}

/// Required.
pub fn option_text(option: &XmlElementNode) -> Result<String, GtError> {
    required_text(option, OPTION_TEXT)
}

/// `None` only when the node is absent; an empty node gives `Some("")`.
pub fn hidden_message_text(option: &XmlElementNode) -> Option<String> {
    option
        .child(HIDDEN_MESSAGE_TEXT)
        .map(|hidden| hidden.text().unwrap_or_default())
}

/// Empty when `<destinations>` is absent.
pub fn destinations(option: &XmlElementNode) -> Vec<&XmlElementNode> {
    option
        .child(DESTINATIONS)
        .map(|list| list.children_named(DESTINATION).collect())
        .unwrap_or_default()
}

/// `None` when the destination has no `<destination_id>`; the caller skips it.
pub fn destination_id(destination: &XmlElementNode) -> Option<String> {
    destination
        .child(DESTINATION_ID)
        .map(|id| id.text().unwrap_or_default())
}

fn required_text(parent: &XmlElementNode, name: &str) -> Result<String, GtError> {
    let Some(node) = parent.child(name) else {
        return Err(GtError::with_span(
            EVENT_NODE_MISSING,
            format!("Missing required <{}> in <{}>.", name, parent.name),
            parent.location.clone(),
        ));
    };
    Ok(node.text().unwrap_or_default())
}
