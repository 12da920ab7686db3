//! Host-independent core of the image picker plugin.
//!
//! Caller options are validated into a [`NativeRequest`], handed to a
//! [`PickerBackend`], and the backend's loosely shaped response is normalized
//! into [`ImageAsset`]s:
//!
//! ```ignore
//! let picker = Picker::new(backend);
//! let assets = picker
//!     .pick_images(PickerOptions::multiple().with_max_selection(3))
//!     .await?;
//! ```

mod backend;
mod config;
mod error;
mod models;
mod normalizer;
mod picker;
pub mod probe;
mod selection;
mod session;

pub use backend::PickerBackend;
pub use config::PickerConfig;
pub use error::{classify_native_rejection, rejection_outcome, Error, NativeRejection, Result};
pub use models::*;
pub use normalizer::{build_request, normalize_asset, parse_response};
pub use picker::Picker;
pub use selection::SelectionState;
pub use session::{SessionGuard, SessionSlot};
