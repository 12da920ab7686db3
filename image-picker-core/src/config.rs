//! Plugin configuration.
//!
//! Read from the `plugins.image-picker` block of `tauri.conf.json`:
//!
//! ```json
//! {
//!   "plugins": {
//!     "image-picker": {
//!       "title": "Select photos",
//!       "checkboxTintColor": "#6750A4",
//!       "imageExtensions": ["jpg", "png"]
//!     }
//!   }
//! }
//! ```

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::models::PickerOptions;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PickerConfig {
    /// Title used when the caller does not pass one.
    pub title: Option<String>,
    /// Checkbox tint used when the caller does not pass one.
    pub checkbox_tint_color: Option<String>,
    /// File extensions offered by the desktop file dialog.
    pub image_extensions: Vec<String>,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            title: None,
            checkbox_tint_color: None,
            image_extensions: default_image_extensions(),
        }
    }
}

fn default_image_extensions() -> Vec<String> {
    ["jpg", "jpeg", "png", "gif", "webp", "heic", "heif", "bmp", "tiff"]
        .iter()
        .map(|ext| ext.to_string())
        .collect()
}

impl PickerConfig {
    /// Fill options the caller left out with configured defaults.
    ///
    /// Caller values always win, even malformed ones; those still fail
    /// validation afterwards.
    pub fn apply_defaults(&self, mut options: PickerOptions) -> PickerOptions {
        if is_absent(&options.title) {
            options.title = self.title.clone().map(Value::String);
        }
        if is_absent(&options.checkbox_tint_color) {
            options.checkbox_tint_color = self.checkbox_tint_color.clone().map(Value::String);
        }
        options
    }
}

fn is_absent(value: &Option<Value>) -> bool {
    value.as_ref().map_or(true, Value::is_null)
}
