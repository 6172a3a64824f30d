/// Corpus loading: file contents with carriage returns stripped.
use std::path::Path;

use crate::core::model::ModelError;

/// Read a training corpus file into one string, dropping every `'\r'` so
/// Windows line endings match Unix ones.
///
/// The model itself never opens files; drivers load here and hand the
/// returned string to `LanguageModel::train`.
pub fn load(path: &Path) -> Result<String, ModelError> {
    let text = std::fs::read_to_string(path)?;
    Ok(text.replace('\r', ""))
}
