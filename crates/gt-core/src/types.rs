use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceLocation {
    pub line: usize,
    pub column: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceSpan {
    pub start: SourceLocation,
    pub end: SourceLocation,
}

/// One selectable choice of an event.
///
/// Prerequisites, variable substitutions and variable changes attached to
/// destinations are not interpreted; destination ids are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventOption {
    pub text: String,
    /// `None` when the option has no `<hidden_message_text>` node at all.
    pub hidden_text: Option<String>,
    pub destinations: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub name: String,
    pub texts: Vec<String>,
    pub options: Vec<EventOption>,
}

/// Parsed events keyed by event name.
pub type EventMap = BTreeMap<String, Event>;
