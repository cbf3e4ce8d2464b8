//! Interpreting the positional argument as a file path or as HTML.

use std::fs;

use crate::InputError;

/// Resolve the positional argument into the HTML to convert.
///
/// When nothing exists at `raw` in the filesystem, `raw` itself is the HTML.
/// A directory is an error; a file is read whole as UTF-8.
///
/// # Examples
///
/// ```
/// let html = markdownify::input::resolve("<p>inline</p>").unwrap();
/// assert_eq!(html, "<p>inline</p>");
/// ```
pub fn resolve(raw: &str) -> Result<String, InputError> {
    let metadata = match fs::metadata(raw) {
        Ok(metadata) => metadata,
        Err(_) => {
            debug!(bytes = raw.len(), "argument is not a path; treating it as HTML");
            return Ok(raw.to_string());
        }
    };

    if metadata.is_dir() {
        return Err(InputError::IsDirectory {
            path: raw.to_string(),
        });
    }

    let html = fs::read_to_string(raw).map_err(|error| InputError::from_io(raw, error))?;
    debug!(path = raw, bytes = html.len(), "read HTML from file");
    Ok(html)
}
