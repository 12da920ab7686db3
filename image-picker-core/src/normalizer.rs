//! Request and response normalization.
//!
//! [`build_request`] turns loosely typed caller options into the canonical
//! [`NativeRequest`]; [`parse_response`] turns whatever a backend resolved
//! with into a list of [`ImageAsset`]s. Both are pure.

use serde_json::{Map, Value};

use crate::error::{Error, Result};
use crate::models::*;

const SELECTION_MODE_MESSAGE: &str = "selectionMode must be 'single' or 'multiple'";
const MAX_SELECTION_MESSAGE: &str =
    "maxSelection must be a positive integer when using multiple selection";
const TINT_COLOR_MESSAGE: &str = "checkboxTintColor must be a string color";
const TITLE_MESSAGE: &str = "title must be a string";

/// Keys that may carry an asset's location, in priority order.
const URI_KEYS: [&str; 3] = ["uri", "path", "url"];

/// Validate and default caller options into a backend request.
///
/// In single mode the cap is always one and any supplied `maxSelection` is
/// discarded without being looked at. In multiple mode a missing cap means
/// unlimited, and a supplied one is floored to an integer. An explicit
/// `null` cap is supplied, not missing, and fails like `NaN` does.
pub fn build_request(options: &PickerOptions) -> Result<NativeRequest> {
    let mode = selection_mode(present(&options.selection_mode))?;
    let allow_multiple = mode == SelectionMode::Multiple;

    let max_selection = if allow_multiple {
        match &options.max_selection {
            Some(value) => MaxSelection::Limited(positive_integer(value)?),
            None => MaxSelection::Unlimited,
        }
    } else {
        MaxSelection::Limited(1)
    };

    Ok(NativeRequest {
        allow_multiple,
        max_selection,
        checkbox_tint_color: optional_string(
            present(&options.checkbox_tint_color),
            TINT_COLOR_MESSAGE,
        )?,
        title: optional_string(present(&options.title), TITLE_MESSAGE)?,
    })
}

/// Normalize a backend response into assets, preserving backend order.
///
/// Elements that do not describe an asset are dropped. A single value is
/// treated as a one-element response.
pub fn parse_response(raw: &RawResponse) -> Vec<ImageAsset> {
    match raw {
        RawResponse::Many(items) => items.iter().filter_map(normalize_asset).collect(),
        RawResponse::One(item) => normalize_asset(item).into_iter().collect(),
    }
}

/// Normalize one element of a backend response.
///
/// Returns `None` when the element has no usable URI.
pub fn normalize_asset(raw: &RawAsset) -> Option<ImageAsset> {
    match raw {
        RawAsset::Missing | RawAsset::Unrecognized(_) => None,
        RawAsset::Uri(uri) if uri.is_empty() => None,
        RawAsset::Uri(uri) => Some(ImageAsset::from_uri(uri.clone())),
        RawAsset::Record(record) => normalize_record(record),
    }
}

fn normalize_record(record: &Map<String, Value>) -> Option<ImageAsset> {
    let uri = URI_KEYS
        .iter()
        .filter_map(|key| record.get(*key).and_then(Value::as_str))
        .find(|uri| !uri.is_empty())?;

    Some(ImageAsset {
        uri: uri.to_string(),
        width: dimension(record.get("width")),
        height: dimension(record.get("height")),
        file_name: string_field(record.get("fileName")),
        file_size: byte_count(record.get("fileSize")),
        mime_type: string_field(record.get("type")),
    })
}

// ============================================================================
// Option coercion
// ============================================================================

/// A field set to JSON `null` counts as not supplied.
fn present(value: &Option<Value>) -> Option<&Value> {
    value.as_ref().filter(|v| !v.is_null())
}

fn selection_mode(value: Option<&Value>) -> Result<SelectionMode> {
    match value {
        None => Ok(SelectionMode::Single),
        Some(Value::String(mode)) if mode == "single" => Ok(SelectionMode::Single),
        Some(Value::String(mode)) if mode == "multiple" => Ok(SelectionMode::Multiple),
        Some(_) => Err(Error::invalid(SELECTION_MODE_MESSAGE)),
    }
}

/// Coerce a cap to an integer >= 1, truncating fractions.
fn positive_integer(value: &Value) -> Result<u32> {
    let number = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) if !s.trim().is_empty() => s.trim().parse::<f64>().ok(),
        _ => None,
    };

    match number {
        Some(n) if n.is_finite() && n >= 1.0 => Ok(n.floor().min(u32::MAX as f64) as u32),
        _ => Err(Error::invalid(MAX_SELECTION_MESSAGE)),
    }
}

fn optional_string(value: Option<&Value>, message: &str) -> Result<Option<String>> {
    match value {
        None => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(_) => Err(Error::invalid(message)),
    }
}

// ============================================================================
// Asset metadata
// ============================================================================

fn finite_number(value: Option<&Value>) -> Option<f64> {
    value.and_then(Value::as_f64).filter(|n| n.is_finite())
}

fn dimension(value: Option<&Value>) -> Option<f64> {
    finite_number(value).filter(|n| *n > 0.0)
}

fn byte_count(value: Option<&Value>) -> Option<f64> {
    finite_number(value).filter(|n| *n >= 0.0)
}

fn string_field(value: Option<&Value>) -> Option<String> {
    value.and_then(Value::as_str).map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn options(value: Value) -> PickerOptions {
        serde_json::from_value(value).unwrap()
    }

    fn assert_invalid(result: Result<NativeRequest>, expected: &str) {
        match result {
            Err(Error::InvalidArgument(message)) => assert_eq!(message, expected),
            other => panic!("expected InvalidArgument, got {:?}", other),
        }
    }

    #[test]
    fn test_default_options_build_single_request() {
        let request = build_request(&PickerOptions::default()).unwrap();
        assert_eq!(
            request,
            NativeRequest {
                allow_multiple: false,
                max_selection: MaxSelection::Limited(1),
                checkbox_tint_color: None,
                title: None,
            }
        );
    }

    #[test]
    fn test_single_mode_ignores_max_selection() {
        for max in [json!(5), json!(0), json!(-1), json!("garbage")] {
            let request = build_request(&options(json!({
                "selectionMode": "single",
                "maxSelection": max,
            })))
            .unwrap();
            assert!(!request.allow_multiple);
            assert_eq!(request.max_selection, MaxSelection::Limited(1));
        }

        // Absent mode behaves like single
        let request = build_request(&options(json!({"maxSelection": 4}))).unwrap();
        assert_eq!(request.max_selection, MaxSelection::Limited(1));
    }

    #[test]
    fn test_multiple_mode_keeps_cap() {
        for n in [1u32, 3, 50] {
            let request = build_request(&PickerOptions::multiple().with_max_selection(n)).unwrap();
            assert!(request.allow_multiple);
            assert_eq!(request.max_selection, MaxSelection::Limited(n));
        }
    }

    #[test]
    fn test_multiple_mode_floors_fractional_cap() {
        let request = build_request(&options(json!({
            "selectionMode": "multiple",
            "maxSelection": 2.7,
        })))
        .unwrap();
        assert_eq!(request.max_selection, MaxSelection::Limited(2));
    }

    #[test]
    fn test_multiple_mode_accepts_numeric_string() {
        let request = build_request(&options(json!({
            "selectionMode": "multiple",
            "maxSelection": " 4 ",
        })))
        .unwrap();
        assert_eq!(request.max_selection, MaxSelection::Limited(4));
    }

    #[test]
    fn test_multiple_mode_rejects_bad_cap() {
        for max in [json!(0), json!(-1), json!(0.5), json!("NaN"), json!("abc"), json!(""), json!(true)] {
            assert_invalid(
                build_request(&options(json!({
                    "selectionMode": "multiple",
                    "maxSelection": max,
                }))),
                MAX_SELECTION_MESSAGE,
            );
        }
    }

    #[test]
    fn test_multiple_mode_without_cap_is_unlimited() {
        let request = build_request(&PickerOptions::multiple()).unwrap();
        assert!(request.allow_multiple);
        assert_eq!(request.max_selection, MaxSelection::Unlimited);

    }

    #[test]
    fn test_multiple_mode_rejects_null_cap() {
        // JSON.stringify({maxSelection: NaN}) sends an explicit null
        let parsed: PickerOptions =
            serde_json::from_str(r#"{"selectionMode":"multiple","maxSelection":null}"#).unwrap();
        assert_invalid(build_request(&parsed), MAX_SELECTION_MESSAGE);

        let mut from_rust = PickerOptions::multiple();
        from_rust.max_selection = Some(Value::from(f64::NAN));
        assert_invalid(build_request(&from_rust), MAX_SELECTION_MESSAGE);

        // Single mode still discards it
        let parsed: PickerOptions =
            serde_json::from_str(r#"{"selectionMode":"single","maxSelection":null}"#).unwrap();
        assert_eq!(
            build_request(&parsed).unwrap().max_selection,
            MaxSelection::Limited(1)
        );
    }

    #[test]
    fn test_tint_color_must_be_string() {
        assert_invalid(
            build_request(&options(json!({"checkboxTintColor": 42}))),
            TINT_COLOR_MESSAGE,
        );

        // Format is not validated here
        let request =
            build_request(&PickerOptions::single().with_checkbox_tint_color("not-a-color")).unwrap();
        assert_eq!(request.checkbox_tint_color.as_deref(), Some("not-a-color"));
    }

    #[test]
    fn test_title_and_mode_validation() {
        assert_invalid(build_request(&options(json!({"title": ["x"]}))), TITLE_MESSAGE);
        assert_invalid(
            build_request(&options(json!({"selectionMode": "many"}))),
            SELECTION_MODE_MESSAGE,
        );

        let request = build_request(&PickerOptions::single().with_title("Select photos")).unwrap();
        assert_eq!(request.title.as_deref(), Some("Select photos"));
    }

    #[test]
    fn test_parse_mixed_response() {
        let raw = RawResponse::from(json!([
            "a.jpg",
            {"uri": "b.jpg", "width": 100},
            {"path": "c.jpg"},
            {"foo": "bar"},
            null,
        ]));

        assert_eq!(
            parse_response(&raw),
            vec![
                ImageAsset::from_uri("a.jpg"),
                ImageAsset {
                    width: Some(100.0),
                    ..ImageAsset::from_uri("b.jpg")
                },
                ImageAsset::from_uri("c.jpg"),
            ]
        );
    }

    #[test]
    fn test_parse_empty_and_scalar_responses() {
        assert!(parse_response(&RawResponse::from(json!([]))).is_empty());
        assert!(parse_response(&RawResponse::from(json!(null))).is_empty());
        assert!(parse_response(&RawResponse::from(json!({"foo": "bar"}))).is_empty());
        assert_eq!(
            parse_response(&RawResponse::from(json!("x.jpg"))),
            vec![ImageAsset::from_uri("x.jpg")]
        );
    }

    #[test]
    fn test_uri_key_priority() {
        let asset = normalize_asset(&RawAsset::from(json!({
            "url": "https://example.com/c.jpg",
            "path": "/sdcard/b.jpg",
            "uri": "content://media/a",
        })))
        .unwrap();
        assert_eq!(asset.uri, "content://media/a");

        let asset = normalize_asset(&RawAsset::from(json!({
            "uri": "",
            "path": 12,
            "url": "https://example.com/c.jpg",
        })))
        .unwrap();
        assert_eq!(asset.uri, "https://example.com/c.jpg");

        assert_eq!(normalize_asset(&RawAsset::from(json!({"uri": ""}))), None);
        assert_eq!(normalize_asset(&RawAsset::from(json!(""))), None);
    }

    #[test]
    fn test_metadata_copied_only_when_well_typed() {
        let asset = normalize_asset(&RawAsset::from(json!({
            "uri": "file:///tmp/a.png",
            "width": 640,
            "height": "480",
            "fileName": "a.png",
            "fileSize": 2048,
            "type": 5,
            "exif": {"iso": 100},
        })))
        .unwrap();

        assert_eq!(
            asset,
            ImageAsset {
                width: Some(640.0),
                file_name: Some("a.png".into()),
                file_size: Some(2048.0),
                ..ImageAsset::from_uri("file:///tmp/a.png")
            }
        );

        let asset = normalize_asset(&RawAsset::from(json!({
            "uri": "a.jpg",
            "width": 0,
            "height": -3,
            "fileSize": -1,
        })))
        .unwrap();
        assert_eq!(asset, ImageAsset::from_uri("a.jpg"));
    }

    #[test]
    fn test_unrecognized_elements_are_dropped() {
        let raw = RawResponse::from(json!([7, true, ["nested.jpg"], "ok.jpg"]));
        assert_eq!(parse_response(&raw), vec![ImageAsset::from_uri("ok.jpg")]);
    }

    #[test]
    fn test_parse_response_is_idempotent() {
        let raw = RawResponse::from(json!([
            {"uri": "a.jpg", "fileName": "a.jpg", "fileSize": 10},
            "b.jpg",
        ]));
        assert_eq!(parse_response(&raw), parse_response(&raw));
    }
}
