use std::path::{Path, PathBuf};

use gt_core::error::{EVENT_DIR_EMPTY, EVENT_DIR_NOT_DIR, EVENT_DIR_NOT_FOUND};
use gt_core::{EventMap, GtError};
use log::{debug, warn};
use walkdir::WalkDir;

use crate::event_file::parse_event_file;

/// Parses every `.xml` file under `dir` and merges the events.
///
/// Files are visited in sorted path order; an event name seen again in a later
/// file replaces the earlier event.
pub fn parse_event_dir(dir: impl AsRef<Path>) -> Result<EventMap, GtError> {
    let dir = dir.as_ref();
    let files = event_files_in_dir(dir)?;

    let mut events = EventMap::new();
    for file in &files {
        for (name, event) in parse_event_file(file)? {
            if events.contains_key(&name) {
                warn!(
                    "event \"{}\" from {} replaces an earlier definition",
                    name,
                    file.display()
                );
            }
            events.insert(name, event);
        }
    }

    debug!(
        "loaded {} events from {} files in {}",
        events.len(),
        files.len(),
        dir.display()
    );
    Ok(events)
}

/// Sorted paths of the event files below `dir`. Symlinks are not followed.
pub fn event_files_in_dir(dir: &Path) -> Result<Vec<PathBuf>, GtError> {
    if !dir.exists() {
        return Err(GtError::new(
            EVENT_DIR_NOT_FOUND,
            format!("event directory does not exist: {}", dir.display()),
        ));
    }
    if !dir.is_dir() {
        return Err(GtError::new(
            EVENT_DIR_NOT_DIR,
            format!("event directory is not a directory: {}", dir.display()),
        ));
    }

    let mut files = WalkDir::new(dir)
        .follow_links(false)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
        .filter(|path| path.extension().is_some_and(|ext| ext == "xml"))
        .collect::<Vec<_>>();
    files.sort();

    if files.is_empty() {
        return Err(GtError::new(
            EVENT_DIR_EMPTY,
            format!("no event files found in {}", dir.display()),
        ));
    }

    Ok(files)
}
