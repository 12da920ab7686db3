//! Tauri command handlers for the image picker plugin.

use tauri::{command, AppHandle, Runtime};

use crate::ImagePickerExt;
use crate::{ImageAsset, PickerOptions, Result, SingleImageOptions};

/// Let the user pick one or more images.
///
/// - `selectionMode`: `"single"` (default) or `"multiple"`
/// - `maxSelection`: cap for multiple selection, unlimited when absent
/// - `checkboxTintColor`: selection highlight color, e.g. `"#6750A4"`
///
/// Resolves with an empty list when the user cancels.
#[command]
pub(crate) async fn pick_images<R: Runtime>(
    app: AppHandle<R>,
    options: Option<PickerOptions>,
) -> Result<Vec<ImageAsset>> {
    app.image_picker()
        .pick_images(options.unwrap_or_default())
        .await
}

/// Let the user pick a single image.
///
/// Resolves with `null` when the user cancels.
#[command]
pub(crate) async fn pick_image<R: Runtime>(
    app: AppHandle<R>,
    options: Option<SingleImageOptions>,
) -> Result<Option<ImageAsset>> {
    app.image_picker()
        .pick_image(options.unwrap_or_default())
        .await
}
