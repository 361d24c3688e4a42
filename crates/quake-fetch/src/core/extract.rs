use serde_json::{Map, Value};
use tracing::{debug, error};

use crate::LOG_TAG;
use crate::data::Record;
use crate::error::{Error, Result};

const ROOT: &str = "$";
const FEATURES: &str = "features";
const PROPERTIES: &str = "properties";
const MAG: &str = "mag";
const PLACE: &str = "place";
const TIME: &str = "time";
const URL: &str = "url";

/// Build records from a feed document.
///
/// `None` or empty text returns `None`: nothing could be parsed. Otherwise the
/// `features` array is walked in order and the first problem of any kind
/// (invalid JSON, a missing key, a value of the wrong type) stops the walk.
/// The problem is logged and the records built before it are returned, so
/// `Some(vec![])` means either an empty feed or a failure on the first entry.
///
/// # Examples
///
/// ```
/// use quake_fetch::extract_records;
///
/// let feed = r#"{"features": [
///     {"properties": {"mag": 6.7, "place": "Offshore", "time": 1609459200000, "url": "https://example.com/1"}}
/// ]}"#;
/// let records = extract_records(Some(feed)).unwrap();
/// assert_eq!(records[0].location(), "Offshore");
///
/// assert!(extract_records(Some("")).is_none());
/// ```
pub fn extract_records(text: Option<&str>) -> Option<Vec<Record>> {
    let text = text.filter(|text| !text.is_empty())?;

    let mut records = Vec::new();
    match extract_into(text, &mut records) {
        Ok(()) => debug!(target: LOG_TAG, count = records.len(), "extracted earthquake records"),
        Err(e) => error!(
            target: LOG_TAG,
            error = %e,
            extracted = records.len(),
            "problem parsing the earthquake JSON results"
        ),
    }
    Some(records)
}

/// Append one record per feature to `records`, stopping at the first error.
///
/// Records pushed before the error stay in `records`.
pub(crate) fn extract_into(text: &str, records: &mut Vec<Record>) -> Result<()> {
    let document: Value = serde_json::from_str(text)?;
    let root = as_object(&document, ROOT)?;
    let features = field(root, ROOT, FEATURES)?
        .as_array()
        .ok_or_else(|| Error::NotAnArray {
            path: FEATURES.to_string(),
        })?;

    for (index, feature) in features.iter().enumerate() {
        records.push(record_from_feature(index, feature)?);
    }
    Ok(())
}

fn record_from_feature(index: usize, feature: &Value) -> Result<Record> {
    let feature_path = format!("{FEATURES}[{index}]");
    let feature = as_object(feature, &feature_path)?;

    let path = format!("{feature_path}.{PROPERTIES}");
    let properties = as_object(field(feature, &feature_path, PROPERTIES)?, &path)?;

    let magnitude = field(properties, &path, MAG)?
        .as_f64()
        .ok_or_else(|| wrong_type(&path, MAG, "a number"))?;
    let location = field(properties, &path, PLACE)?
        .as_str()
        .ok_or_else(|| wrong_type(&path, PLACE, "a string"))?;
    let time = field(properties, &path, TIME)?
        .as_i64()
        .ok_or_else(|| wrong_type(&path, TIME, "an integer"))?;
    let url = field(properties, &path, URL)?
        .as_str()
        .ok_or_else(|| wrong_type(&path, URL, "a string"))?;

    Ok(Record::new(Some(magnitude), location, time, url))
}

fn as_object<'a>(value: &'a Value, path: &str) -> Result<&'a Map<String, Value>> {
    value.as_object().ok_or_else(|| Error::NotAnObject {
        path: path.to_string(),
    })
}

fn field<'a>(object: &'a Map<String, Value>, path: &str, key: &'static str) -> Result<&'a Value> {
    object.get(key).ok_or_else(|| Error::MissingKey {
        path: path.to_string(),
        key,
    })
}

fn wrong_type(path: &str, key: &'static str, expected: &'static str) -> Error {
    Error::WrongType {
        path: path.to_string(),
        key,
        expected,
    }
}
