//! Loading documents from disk.

use crate::error::{Error, Result};
use std::path::Path;

/// Read the document at `path`.
///
/// The path is checked for existence first so a missing file is reported as
/// [`Error::FileNotFound`] instead of a generic I/O failure. Bytes that are not
/// valid UTF-8 are decoded as U+FFFD, which tokenization discards.
pub fn load_document(path: impl AsRef<Path>) -> Result<String> {
  let path = path.as_ref();
  if !path.is_file() {
    return Err(Error::FileNotFound(path.to_path_buf()));
  }

  let bytes = std::fs::read(path).map_err(|source| Error::Io {
    path: path.to_path_buf(),
    source,
  })?;

  let text = match String::from_utf8(bytes) {
    Ok(text) => text,
    Err(err) => {
      log::warn!(
        "'{}' is not valid UTF-8 (first bad byte at {}); decoding lossily",
        path.display(),
        err.utf8_error().valid_up_to()
      );
      String::from_utf8_lossy(err.as_bytes()).into_owned()
    }
  };

  log::debug!("loaded {} bytes from '{}'", text.len(), path.display());
  Ok(text)
}
