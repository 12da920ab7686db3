use tauri::{
    plugin::{Builder, TauriPlugin},
    Manager, Runtime,
};

use image_picker_core::Picker;
pub use image_picker_core::{
    Error, ImageAsset, MaxSelection, NativeRequest, PickerConfig, PickerOptions, Result,
    SelectionMode, SingleImageOptions,
};

#[cfg(desktop)]
mod desktop;
#[cfg(mobile)]
mod mobile;

mod commands;
#[cfg(any(mobile, test))]
mod models;

#[cfg(desktop)]
use desktop::DesktopBackend as Backend;
#[cfg(mobile)]
use mobile::MobileBackend as Backend;

/// Access to the image picker APIs.
pub struct ImagePicker<R: Runtime>(Picker<Backend<R>>);

impl<R: Runtime> ImagePicker<R> {
    /// Let the user pick one or more images.
    ///
    /// Resolves with an empty list when the user cancels.
    pub async fn pick_images(&self, options: PickerOptions) -> Result<Vec<ImageAsset>> {
        self.0.pick_images(options).await
    }

    /// Let the user pick a single image.
    ///
    /// Resolves with `None` when the user cancels.
    pub async fn pick_image(&self, options: SingleImageOptions) -> Result<Option<ImageAsset>> {
        self.0.pick_image(options).await
    }

    pub fn config(&self) -> &PickerConfig {
        self.0.config()
    }
}

/// Extensions to [`tauri::App`], [`tauri::AppHandle`] and [`tauri::Window`] to access the image picker APIs.
pub trait ImagePickerExt<R: Runtime> {
    fn image_picker(&self) -> &ImagePicker<R>;
}

impl<R: Runtime, T: Manager<R>> crate::ImagePickerExt<R> for T {
    fn image_picker(&self) -> &ImagePicker<R> {
        self.state::<ImagePicker<R>>().inner()
    }
}

/// Initializes the image picker plugin.
///
/// - **Android/iOS**: forwards requests to the native gallery picker
/// - **Desktop**: opens the system file dialog filtered to images
///
/// Defaults for the picker title, checkbox tint and desktop file filter are
/// read from `plugins.image-picker` in `tauri.conf.json`.
pub fn init<R: Runtime>() -> TauriPlugin<R, Option<PickerConfig>> {
    Builder::<R, Option<PickerConfig>>::new("image-picker")
        .invoke_handler(tauri::generate_handler![
            commands::pick_images,
            commands::pick_image,
        ])
        .setup(|app, api| {
            let config = api.config().clone().unwrap_or_default();
            #[cfg(mobile)]
            let backend = mobile::init(app, api)?;
            #[cfg(desktop)]
            let backend = desktop::init(app, api, &config)?;
            app.manage(ImagePicker(Picker::with_config(backend, config)));
            Ok(())
        })
        .build()
}
