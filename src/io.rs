pub mod mtl_loader;
pub mod obj_loader;
pub mod tokenizer;

use crate::error::{Error, Result};
use std::path::Path;

/// Rejects paths whose extension is not `expected` (compared
/// case-sensitively, without the dot).
pub(crate) fn check_extension(path: &Path, expected: &'static str) -> Result<()> {
    if path.extension().and_then(|e| e.to_str()) == Some(expected) {
        return Ok(());
    }
    Err(Error::InvalidExtension {
        path: path.display().to_string(),
        expected,
    })
}
