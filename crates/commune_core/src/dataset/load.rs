use super::{DatasetError, DatasetResult, DatasetShape};
use crate::model::municipality::MunicipalityRecord;
use log::{debug, warn};
use serde_json::Value;
use std::path::Path;

const RESULTS_FIELD: &str = "results";

/// Dataset compiled into the crate, envelope layout.
pub const BUNDLED_DATASET_JSON: &str = include_str!("../../assets/records.json");

/// Decodes the bundled dataset with the given accepted layout.
///
/// # Errors
/// - `InvalidShape` when `shape` is `BareArray`, since the asset is enveloped.
pub fn bundled_dataset(shape: DatasetShape) -> DatasetResult<Vec<MunicipalityRecord>> {
    parse_dataset(BUNDLED_DATASET_JSON, shape)
}

/// Reads and decodes a dataset file.
pub fn load_dataset_file(
    path: impl AsRef<Path>,
    shape: DatasetShape,
) -> DatasetResult<Vec<MunicipalityRecord>> {
    let path = path.as_ref();
    let raw = std::fs::read_to_string(path)?;
    debug!(
        "event=dataset_read module=dataset status=ok path={} bytes={}",
        path.display(),
        raw.len()
    );
    parse_dataset(raw.as_str(), shape)
}

/// Decodes a dataset document with the given accepted layout.
///
/// # Errors
/// - `Json` when the document is not valid JSON.
/// - `InvalidShape` when the top level does not match `shape`.
/// - `InvalidRecord` when one array entry is not a commune record.
pub fn parse_dataset(json: &str, shape: DatasetShape) -> DatasetResult<Vec<MunicipalityRecord>> {
    let document: Value = serde_json::from_str(json)?;
    let items = match unwrap_records(document, shape) {
        Ok(items) => items,
        Err(err) => {
            warn!("event=dataset_parse module=dataset status=error reason=shape");
            return Err(err);
        }
    };

    let records = items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            serde_json::from_value::<MunicipalityRecord>(item).map_err(|err| {
                DatasetError::InvalidRecord {
                    index,
                    message: err.to_string(),
                }
            })
        })
        .collect::<DatasetResult<Vec<_>>>()?;

    debug!(
        "event=dataset_parse module=dataset status=ok records={}",
        records.len()
    );
    Ok(records)
}

fn unwrap_records(document: Value, shape: DatasetShape) -> DatasetResult<Vec<Value>> {
    match (document, shape) {
        (Value::Array(items), DatasetShape::BareArray | DatasetShape::Auto) => Ok(items),
        (Value::Object(mut map), DatasetShape::Envelope | DatasetShape::Auto) => {
            match map.remove(RESULTS_FIELD) {
                Some(Value::Array(items)) => Ok(items),
                Some(_) => Err(DatasetError::InvalidShape {
                    expected: shape,
                    found: "an object whose `results` field is not an array",
                }),
                None => Err(DatasetError::InvalidShape {
                    expected: shape,
                    found: "an object without a `results` field",
                }),
            }
        }
        (other, _) => Err(DatasetError::InvalidShape {
            expected: shape,
            found: json_kind(&other),
        }),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
