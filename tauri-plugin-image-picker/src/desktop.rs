//! Desktop implementation using the system file dialog.
//!
//! There is no photo gallery on desktop, so the picker is a native file
//! dialog filtered to image extensions. Picked files are probed for size,
//! MIME type and dimensions.

use std::path::PathBuf;

use async_trait::async_trait;
use image_picker_core::{
    probe, NativeRequest, PickerBackend, PickerConfig, RawResponse, Result, SelectionState,
    SessionSlot,
};
use rfd::AsyncFileDialog;
use serde::de::DeserializeOwned;
use tauri::{plugin::PluginApi, AppHandle, Manager, Runtime};
use tracing::{debug, info, warn};

/// Initialize the desktop plugin.
pub fn init<R: Runtime, C: DeserializeOwned>(
    app: &AppHandle<R>,
    _api: PluginApi<R, C>,
    config: &PickerConfig,
) -> Result<DesktopBackend<R>> {
    Ok(DesktopBackend {
        app: app.clone(),
        extensions: config.image_extensions.clone(),
        session: SessionSlot::new(),
    })
}

/// Picker backend for desktop platforms.
pub struct DesktopBackend<R: Runtime> {
    app: AppHandle<R>,
    extensions: Vec<String>,
    session: SessionSlot,
}

impl<R: Runtime> DesktopBackend<R> {
    fn dialog(&self, request: &NativeRequest) -> AsyncFileDialog {
        let mut dialog = AsyncFileDialog::new().add_filter("Images", self.extensions.as_slice());
        if let Some(title) = &request.title {
            dialog = dialog.set_title(title.as_str());
        }

        // Keep the dialog modal to the window the user is looking at
        let focused = self
            .app
            .webview_windows()
            .into_values()
            .find(|window| window.is_focused().unwrap_or(false));
        if let Some(window) = focused {
            dialog = dialog.set_parent(&window);
        }
        dialog
    }
}

#[async_trait]
impl<R: Runtime> PickerBackend for DesktopBackend<R> {
    fn name(&self) -> &'static str {
        "desktop"
    }

    async fn open(&self, request: NativeRequest) -> Result<RawResponse> {
        let _session = self.session.try_begin()?;

        let picked: Vec<PathBuf> = if request.allow_multiple {
            let pending = self.dialog(&request).pick_files();
            pending
                .await
                .unwrap_or_default()
                .iter()
                .map(|file| file.path().to_path_buf())
                .collect()
        } else {
            let pending = self.dialog(&request).pick_file();
            pending
                .await
                .iter()
                .map(|file| file.path().to_path_buf())
                .collect()
        };

        if picked.is_empty() {
            debug!("File dialog dismissed without a selection");
            return Ok(RawResponse::empty());
        }

        // The dialog cannot enforce the cap, so apply it in selection order
        let mut selection = SelectionState::new(&request);
        for path in &picked {
            if !selection.select(path.clone()) {
                warn!(
                    "Selection limit {:?} reached, ignoring {}",
                    request.max_selection,
                    path.display()
                );
            }
        }

        info!("Picked {} file(s) from the file dialog", selection.len());
        Ok(RawResponse::Many(
            selection
                .into_selected()
                .iter()
                .map(|path| probe::describe_file(path))
                .collect(),
        ))
    }
}
