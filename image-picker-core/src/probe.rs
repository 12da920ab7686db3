//! Describe files picked from the local filesystem.
//!
//! Used by backends that hand back plain paths (the desktop file dialog).
//! The result is an asset-like record that goes through
//! [`parse_response`](crate::parse_response) like any native payload.

use std::path::Path;

use serde_json::{Map, Value};
use tracing::debug;

use crate::models::RawAsset;

/// Build an asset record for `path`.
///
/// Metadata that cannot be read is left out; probing never fails a pick.
pub fn describe_file(path: &Path) -> RawAsset {
    let mut record = Map::new();
    record.insert(
        "path".into(),
        Value::String(path.to_string_lossy().into_owned()),
    );

    if let Some(name) = path.file_name() {
        record.insert(
            "fileName".into(),
            Value::String(name.to_string_lossy().into_owned()),
        );
    }

    match std::fs::metadata(path) {
        Ok(metadata) => {
            record.insert("fileSize".into(), Value::from(metadata.len()));
        }
        Err(e) => debug!("No metadata for {}: {}", path.display(), e),
    }

    if let Some(mime) = mime_type(path) {
        record.insert("type".into(), Value::String(mime.to_string()));
    }

    match image::image_dimensions(path) {
        Ok((width, height)) => {
            record.insert("width".into(), Value::from(width));
            record.insert("height".into(), Value::from(height));
        }
        Err(e) => debug!("Could not read dimensions of {}: {}", path.display(), e),
    }

    RawAsset::Record(record)
}

/// MIME type derived from the file extension.
pub fn mime_type(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    let mime = match ext.as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "heic" => "image/heic",
        "heif" => "image/heif",
        "bmp" => "image/bmp",
        "tif" | "tiff" => "image/tiff",
        _ => return None,
    };
    Some(mime)
}
