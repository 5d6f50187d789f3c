//! Whole-file persistence for a [`Calendar`].
//!
//! The file holds one bincode blob of the full map. Writes go to a sibling
//! `.tmp` file which is then renamed over the target.

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use bincode::Options;
use tracing::{debug, info, warn};

use crate::calendar::Calendar;
use crate::error::{DayNotesError, DayNotesResult};

/// Where a loaded calendar came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadSource {
    /// Read from an existing, non-empty file.
    File,
    /// No file (or an empty one) was found; the calendar starts empty.
    Fresh,
}

pub(crate) fn open(path: &Path) -> DayNotesResult<(Calendar, LoadSource)> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            info!(path = %path.display(), "no note file found, starting a new calendar");
            return Ok((Calendar::new(), LoadSource::Fresh));
        }
        Err(e) => return Err(e.into()),
    };

    let len = file.metadata()?.len();
    if len == 0 {
        info!(path = %path.display(), "note file is empty, starting a new calendar");
        return Ok((Calendar::new(), LoadSource::Fresh));
    }

    // A valid file never decodes to more bytes than it holds
    let calendar: Calendar = encoding()
        .with_limit(len)
        .deserialize_from(BufReader::new(file))
        .map_err(|e| DayNotesError::Deserialization(format!("{}: {e}", path.display())))?;

    debug!(path = %path.display(), days = calendar.len(), "loaded calendar");
    Ok((calendar, LoadSource::File))
}

pub(crate) fn save(path: &Path, calendar: &Calendar) -> DayNotesResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }

    write_replacing(path, |writer| {
        encoding()
            .serialize_into(writer, calendar)
            .map_err(|e| DayNotesError::Serialization(format!("{}: {e}", path.display())))
    })?;

    debug!(path = %path.display(), days = calendar.len(), "saved calendar");
    Ok(())
}

/// Write through `write` into the sibling temp file, then rename it over `path`.
/// On any failure the temp file is removed and `path` is left untouched.
fn write_replacing<F>(path: &Path, write: F) -> DayNotesResult<()>
where
    F: FnOnce(&mut BufWriter<File>) -> DayNotesResult<()>,
{
    let temp = temp_path(path);

    let result = File::create(&temp)
        .map_err(DayNotesError::from)
        .and_then(|file| {
            let mut writer = BufWriter::new(file);
            write(&mut writer)?;
            writer.flush()?;
            Ok(())
        })
        .and_then(|()| std::fs::rename(&temp, path).map_err(DayNotesError::from));

    if result.is_err() && temp.exists() {
        if let Err(e) = std::fs::remove_file(&temp) {
            warn!(path = %temp.display(), error = %e, "could not remove temp note file");
        }
    }

    result
}

fn encoding() -> impl Options {
    bincode::DefaultOptions::new()
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    path.with_file_name(name)
}
