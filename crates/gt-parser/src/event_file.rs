use std::fs;
use std::path::Path;

use gt_core::error::EVENT_FILE_READ;
use gt_core::{Event, EventMap, EventOption, GtError};
use log::{debug, trace, warn};

use crate::schema;
use crate::xml::{parse_xml_document, XmlElementNode};

/// Reads and parses one event file.
///
/// Errors carry the file path in their message. Nothing is returned unless the
/// whole file parses.
pub fn parse_event_file(path: impl AsRef<Path>) -> Result<EventMap, GtError> {
    let path = path.as_ref();
    debug!("reading event file {}", path.display());
    let source = fs::read_to_string(path).map_err(|error| map_event_file_read(path, error))?;
    parse_event_source(&source).map_err(|error| error.in_file(path.display()))
}

/// Parses the text of an event file.
///
/// Later events overwrite earlier ones with the same name.
pub fn parse_event_source(source: &str) -> Result<EventMap, GtError> {
    let document = parse_xml_document(source)?;

    let mut events = EventMap::new();
    for event_node in schema::events(&document.root) {
        let event = parse_event(event_node)?;
        if events.contains_key(&event.name) {
            warn!(
                "event \"{}\" is defined more than once; keeping the later one",
                event.name
            );
        }
        events.insert(event.name.clone(), event);
    }

    debug!("parsed {} events", events.len());
    Ok(events)
}

fn parse_event(node: &XmlElementNode) -> Result<Event, GtError> {
    let name = schema::event_name(node)?;
    let texts = schema::text_breaks(node)
        .into_iter()
        .map(schema::text_break_text)
        .collect::<Vec<_>>();
    let options = schema::event_options(node)
        .into_iter()
        .map(parse_option)
        .collect::<Result<Vec<_>, _>>()?;

    debug!(
        "event \"{}\": {} text breaks, {} options",
        name,
        texts.len(),
        options.len()
    );
    Ok(Event {
        name,
        texts,
        options,
    })
}

fn parse_option(node: &XmlElementNode) -> Result<EventOption, GtError> {
    let text = schema::option_text(node)?;
    let hidden_text = schema::hidden_message_text(node);

    let mut destinations = Vec::new();
    for destination in schema::destinations(node) {
        match schema::destination_id(destination) {
            Some(id) => destinations.push(id),
            None => trace!(
                "option \"{}\": skipping destination without id at line {}",
                text,
                destination.location.start.line
            ),
        }
    }

    Ok(EventOption {
        text,
        hidden_text,
        destinations,
    })
}

fn map_event_file_read(path: &Path, error: std::io::Error) -> GtError {
    GtError::new(
        EVENT_FILE_READ,
        format!("Failed to read event file \"{}\": {}", path.display(), error),
    )
}
