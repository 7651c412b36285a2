pub mod file;
pub mod stdin;

use serde::de::DeserializeOwned;

/// Load a typed input from `--input` or piped stdin, in that order.
/// `None` means neither was given and the caller falls back to flags.
pub fn load<T: DeserializeOwned>(path: Option<&str>) -> Result<Option<T>, Box<dyn std::error::Error>> {
    if let Some(path) = path {
        tracing::debug!(path, "reading input file");
        return Ok(Some(file::read_json(path)?));
    }
    if let Some(data) = stdin::read_stdin()? {
        tracing::debug!("reading input from stdin");
        return Ok(Some(serde_json::from_value(data)?));
    }
    Ok(None)
}
