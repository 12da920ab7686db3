//! Platform backend abstraction.
//!
//! A backend presents the picking UI and resolves with whatever the platform
//! produced. The Android/iOS plugins, the desktop file dialog and test fakes
//! all implement [`PickerBackend`].

use async_trait::async_trait;

use crate::error::Result;
use crate::models::{NativeRequest, RawResponse};

/// Trait for platform-specific image picking.
///
/// # Contract
///
/// - `open` completes exactly once per call, after one terminal user action.
/// - User cancellation resolves with an empty response (`RawResponse::empty()`
///   or `null`), never an error.
/// - Failures are limited to `NoActiveHost`, `PermissionDenied`, `Busy` and
///   `Unknown`.
/// - At most one session is active at a time; a concurrent `open` is rejected
///   with `Busy` (see [`SessionSlot`](crate::SessionSlot)).
///
/// # Example
///
/// ```ignore
/// #[async_trait]
/// impl PickerBackend for GalleryBackend {
///     fn name(&self) -> &'static str {
///         "gallery"
///     }
///
///     async fn open(&self, request: NativeRequest) -> Result<RawResponse> {
///         // Present the grid, wait for "done" or "back"
///     }
/// }
/// ```
#[async_trait]
pub trait PickerBackend: Send + Sync {
    /// Short backend name used in logs (e.g., "android", "desktop").
    fn name(&self) -> &'static str;

    /// Check that the backend can service a request at all.
    ///
    /// Called before `open`; a backend that is missing an entry point returns
    /// [`Error::BackendUnavailable`](crate::Error::BackendUnavailable).
    fn ensure_available(&self) -> Result<()> {
        Ok(())
    }

    /// Present the picker and wait for the user.
    async fn open(&self, request: NativeRequest) -> Result<RawResponse>;
}
