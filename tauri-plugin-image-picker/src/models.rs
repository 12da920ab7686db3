//! Wire types exchanged with the native plugins.

use image_picker_core::RawResponse;
use serde::Deserialize;

/// What the native `pickImages` call resolves with.
///
/// Native plugins must resolve with an object, so the raw payload sits under
/// `assets`. A missing or `null` field means the user cancelled.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct NativePickResponse {
    #[serde(default)]
    pub assets: Option<RawResponse>,
}

impl NativePickResponse {
    pub fn into_raw(self) -> RawResponse {
        self.assets.unwrap_or_default()
    }
}
