//! Caller-facing picker API.

use tracing::{debug, info, warn};

use crate::backend::PickerBackend;
use crate::config::PickerConfig;
use crate::error::Result;
use crate::models::*;
use crate::normalizer::{build_request, parse_response};

/// Picks images through an injected [`PickerBackend`].
///
/// Each call is independent: options are validated, the backend is opened
/// once, and its response is normalized. Cancellation yields an empty list
/// (or `None` from [`Picker::pick_image`]), never an error.
pub struct Picker<B> {
    backend: B,
    config: PickerConfig,
}

impl<B: PickerBackend> Picker<B> {
    pub fn new(backend: B) -> Self {
        Self::with_config(backend, PickerConfig::default())
    }

    pub fn with_config(backend: B, config: PickerConfig) -> Self {
        Self { backend, config }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn config(&self) -> &PickerConfig {
        &self.config
    }

    /// Let the user pick one or more images.
    pub async fn pick_images(&self, options: PickerOptions) -> Result<Vec<ImageAsset>> {
        let request = build_request(&self.config.apply_defaults(options))?;
        self.backend.ensure_available()?;

        debug!(
            "Opening {} picker (allow_multiple: {}, max_selection: {:?})",
            self.backend.name(),
            request.allow_multiple,
            request.max_selection
        );

        let raw = self.backend.open(request).await.map_err(|e| {
            warn!("{} picker failed: {}", self.backend.name(), e);
            e
        })?;

        let assets = parse_response(&raw);
        if assets.is_empty() {
            info!("Image picker returned no images");
        } else {
            info!("Image picker returned {} image(s)", assets.len());
        }
        Ok(assets)
    }

    /// Let the user pick a single image; `None` if they cancelled.
    pub async fn pick_image(&self, options: SingleImageOptions) -> Result<Option<ImageAsset>> {
        let assets = self.pick_images(options.into()).await?;
        Ok(assets.into_iter().next())
    }
}
