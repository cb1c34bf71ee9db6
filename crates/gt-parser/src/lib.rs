//! Reader for the narrative event files of Golden Treasure: the Great Green.

pub mod event_file;
pub mod loader;
pub mod schema;
pub mod xml;

pub use event_file::{parse_event_file, parse_event_source};
pub use gt_core::{Event, EventMap, EventOption, GtError};
pub use loader::{event_files_in_dir, parse_event_dir};
pub use xml::{parse_xml_document, XmlDocument, XmlElementNode};
