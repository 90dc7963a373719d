//! Loader for the locomotion RON file at startup.

use ron::Options;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use super::data::LocomotionDef;
use crate::movement::LocomotionTuning;

/// Error type for content loading failures.
#[derive(Debug)]
pub struct ContentLoadError {
    pub file: String,
    pub message: String,
}

impl std::fmt::Display for ContentLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to load {}: {}", self.file, self.message)
    }
}

impl std::error::Error for ContentLoadError {}

/// Create RON options with extensions enabled for more flexible parsing.
fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

/// Parse and validate locomotion tuning from RON text.
pub fn parse_locomotion(contents: &str, file: &str) -> Result<LocomotionTuning, ContentLoadError> {
    let def: LocomotionDef = ron_options()
        .from_str(contents)
        .map_err(|e| ContentLoadError {
            file: file.to_string(),
            message: format!("Parse error: {}", e),
        })?;

    let tuning = LocomotionTuning::from(def);
    tuning.validate().map_err(|e| ContentLoadError {
        file: file.to_string(),
        message: e.to_string(),
    })?;

    Ok(tuning)
}

/// Load locomotion tuning from disk. A missing file is not an error and
/// yields `Ok(None)`; anything unreadable or invalid is.
pub fn load_locomotion_tuning(path: &Path) -> Result<Option<LocomotionTuning>, ContentLoadError> {
    let file_name = path.display().to_string();
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(e) => {
            return Err(ContentLoadError {
                file: file_name,
                message: format!("IO error: {}", e),
            });
        }
    };

    parse_locomotion(&contents, &file_name).map(Some)
}
