//! Data types for the image picker.
//!
//! Caller options are loosely typed on purpose: a JavaScript caller can send
//! anything, and a malformed field has to surface as
//! [`Error::InvalidArgument`](crate::Error::InvalidArgument) rather than as a
//! deserialization failure. Native responses are modelled as tagged unions
//! ([`RawResponse`], [`RawAsset`]) that the normalizer resolves explicitly.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

// ============================================================================
// Caller input
// ============================================================================

/// How many images the user may pick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SelectionMode {
    #[default]
    Single,
    Multiple,
}

impl SelectionMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            SelectionMode::Single => "single",
            SelectionMode::Multiple => "multiple",
        }
    }
}

/// Options accepted by `pick_images`.
///
/// `max_selection` only applies in multiple mode; in single mode it is
/// discarded and the cap is always one.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PickerOptions {
    /// `"single"` (default) or `"multiple"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selection_mode: Option<Value>,
    /// Positive integer cap for multiple selection. Absent means unlimited;
    /// an explicit `null` (what `JSON.stringify` makes of `NaN`) is kept as
    /// `Some(Value::Null)` so it can be rejected.
    #[serde(
        default,
        deserialize_with = "explicit_value",
        skip_serializing_if = "Option::is_none"
    )]
    pub max_selection: Option<Value>,
    /// Color of the selection checkbox, passed to the native UI unparsed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub checkbox_tint_color: Option<Value>,
    /// Title shown by the picker UI.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<Value>,
}

/// Keep a present field as `Some`, even when it is `null`.
fn explicit_value<'de, D>(deserializer: D) -> std::result::Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

impl PickerOptions {
    pub fn single() -> Self {
        Self::with_mode(SelectionMode::Single)
    }

    pub fn multiple() -> Self {
        Self::with_mode(SelectionMode::Multiple)
    }

    fn with_mode(mode: SelectionMode) -> Self {
        Self {
            selection_mode: Some(Value::from(mode.as_str())),
            ..Default::default()
        }
    }

    pub fn with_max_selection(mut self, max_selection: u32) -> Self {
        self.max_selection = Some(Value::from(max_selection));
        self
    }

    pub fn with_checkbox_tint_color(mut self, color: impl Into<String>) -> Self {
        self.checkbox_tint_color = Some(Value::String(color.into()));
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(Value::String(title.into()));
        self
    }
}

/// Options accepted by `pick_image`.
///
/// There is no selection mode or cap here: a single pick is always capped at
/// one image. Extra fields sent by a JavaScript caller are ignored.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SingleImageOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub checkbox_tint_color: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<Value>,
}

impl SingleImageOptions {
    pub fn with_checkbox_tint_color(mut self, color: impl Into<String>) -> Self {
        self.checkbox_tint_color = Some(Value::String(color.into()));
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(Value::String(title.into()));
        self
    }
}

impl From<SingleImageOptions> for PickerOptions {
    fn from(options: SingleImageOptions) -> Self {
        PickerOptions {
            checkbox_tint_color: options.checkbox_tint_color,
            title: options.title,
            ..PickerOptions::single()
        }
    }
}

// ============================================================================
// Backend request
// ============================================================================

/// Upper bound on the number of selected images.
///
/// On the wire `Limited(n)` is the integer `n` and `Unlimited` is `null`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaxSelection {
    Limited(u32),
    Unlimited,
}

impl MaxSelection {
    /// Whether a selection of `count` items has room for one more.
    pub fn has_room(&self, count: usize) -> bool {
        match self {
            MaxSelection::Limited(n) => count < *n as usize,
            MaxSelection::Unlimited => true,
        }
    }
}

impl Serialize for MaxSelection {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            MaxSelection::Limited(n) => serializer.serialize_u32(*n),
            MaxSelection::Unlimited => serializer.serialize_none(),
        }
    }
}

/// Canonical request handed to a picker backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NativeRequest {
    pub allow_multiple: bool,
    pub max_selection: MaxSelection,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checkbox_tint_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

// ============================================================================
// Picker output
// ============================================================================

/// One image picked by the user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageAsset {
    /// Location of the image (`content://`, `file://`, `ph://` or a path).
    pub uri: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
    /// Size in bytes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_size: Option<f64>,
    /// MIME type, e.g. `image/jpeg`.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,
}

impl ImageAsset {
    pub fn from_uri(uri: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            width: None,
            height: None,
            file_name: None,
            file_size: None,
            mime_type: None,
        }
    }
}

// ============================================================================
// Raw backend response
// ============================================================================

/// One element of a native response, before normalization.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "Value")]
pub enum RawAsset {
    /// `null` / absent.
    Missing,
    /// A bare URI string.
    Uri(String),
    /// An object carrying `uri`/`path`/`url` plus optional metadata.
    Record(Map<String, Value>),
    /// Anything else: numbers, booleans, nested arrays.
    Unrecognized(Value),
}

impl From<Value> for RawAsset {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => RawAsset::Missing,
            Value::String(uri) => RawAsset::Uri(uri),
            Value::Object(record) => RawAsset::Record(record),
            other => RawAsset::Unrecognized(other),
        }
    }
}

/// Whatever a backend resolved with: a sequence or a single value.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "Value")]
pub enum RawResponse {
    Many(Vec<RawAsset>),
    One(RawAsset),
}

impl RawResponse {
    /// The response of a cancelled picker.
    pub fn empty() -> Self {
        RawResponse::Many(Vec::new())
    }
}

impl Default for RawResponse {
    fn default() -> Self {
        Self::empty()
    }
}

impl From<Value> for RawResponse {
    fn from(value: Value) -> Self {
        match value {
            Value::Array(items) => {
                RawResponse::Many(items.into_iter().map(RawAsset::from).collect())
            }
            other => RawResponse::One(RawAsset::from(other)),
        }
    }
}
