//! Mobile implementation bridging to native Android/iOS code.
//!
//! The native plugins own the gallery grid, permission prompts and camera
//! capture. This module forwards the canonical request and turns their
//! rejection codes into picker errors.

use async_trait::async_trait;
use image_picker_core::{
    rejection_outcome, NativeRequest, PickerBackend, RawResponse, Result, SessionSlot,
};
use serde::de::DeserializeOwned;
use tauri::{
    plugin::{mobile::PluginInvokeError, PluginApi, PluginHandle},
    AppHandle, Runtime,
};
use tracing::{debug, error};

use crate::models::NativePickResponse;

#[cfg(target_os = "ios")]
tauri::ios_plugin_binding!(init_plugin_image_picker);

/// Initialize the mobile plugin by registering native code.
pub fn init<R: Runtime, C: DeserializeOwned>(
    _app: &AppHandle<R>,
    api: PluginApi<R, C>,
) -> std::result::Result<MobileBackend<R>, PluginInvokeError> {
    #[cfg(target_os = "android")]
    let handle = api.register_android_plugin("com.imagepicker.plugin", "ImagePickerPlugin")?;
    #[cfg(target_os = "ios")]
    let handle = api.register_ios_plugin(init_plugin_image_picker)?;
    Ok(MobileBackend {
        handle,
        session: SessionSlot::new(),
    })
}

/// Picker backend for mobile platforms.
pub struct MobileBackend<R: Runtime> {
    handle: PluginHandle<R>,
    session: SessionSlot,
}

#[async_trait]
impl<R: Runtime> PickerBackend for MobileBackend<R> {
    fn name(&self) -> &'static str {
        if cfg!(target_os = "android") {
            "android"
        } else {
            "ios"
        }
    }

    /// Present the native gallery picker.
    ///
    /// - **Android**: starts the picker activity and waits for its result
    /// - **iOS**: presents the SwiftUI grid over the root view controller
    async fn open(&self, request: NativeRequest) -> Result<RawResponse> {
        let _session = self.session.try_begin()?;

        match self
            .handle
            .run_mobile_plugin_async::<NativePickResponse>("pickImages", request)
            .await
        {
            Ok(response) => Ok(response.into_raw()),
            // Some native versions reject on "back"; that is still a cancellation
            Err(err) => match rejection_outcome(&err.to_string()) {
                Ok(empty) => {
                    debug!("Native picker cancelled: {}", err);
                    Ok(empty)
                }
                Err(e) => {
                    error!("Native picker failed: {}", e);
                    Err(e)
                }
            },
        }
    }
}
