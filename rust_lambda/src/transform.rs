//! Pure helpers for the object pipeline: key handling and the text transform.

use crate::error::ProcessorError;

/// Decodes an object key as delivered in an S3 notification. Keys arrive
/// form-encoded: spaces become `+` and other reserved bytes are `%XX`.
pub(crate) fn decode_object_key(raw: &str) -> Result<String, ProcessorError> {
    let spaced = raw.replace('+', " ");
    urlencoding::decode(&spaced)
        .map(|key| key.into_owned())
        .map_err(|e| {
            ProcessorError::MalformedEvent(format!("object key {raw:?} is not valid UTF-8: {e}"))
        })
}

/// Final `/`-separated segment of a key. Empty when the key ends in `/`.
pub(crate) fn basename(key: &str) -> &str {
    key.rsplit('/').next().unwrap_or(key)
}

pub(crate) fn processed_file_name(basename: &str) -> String {
    format!("processed_{basename}")
}

pub(crate) fn destination_key(prefix: &str, object_key: &str) -> String {
    format!("{prefix}/{}", processed_file_name(basename(object_key)))
}

pub(crate) fn uppercase_text(key: &str, bytes: Vec<u8>) -> Result<String, ProcessorError> {
    let text = String::from_utf8(bytes).map_err(|source| ProcessorError::Decode {
        key: key.to_string(),
        source,
    })?;
    Ok(text.to_uppercase())
}
