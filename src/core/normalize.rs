use crate::core::errors::{Error, Result};
use crate::core::json::{JsonChange, JsonEndpointRecord, JsonVersionReport};
use crate::core::records::{ChangeEvent, EndpointRecord, VersionSummary};
use serde::de::DeserializeOwned;
use serde_json::Value;

/*-------------------------------------------------------------------------------------------------
  Response Normalization
-------------------------------------------------------------------------------------------------*/

// The service is inconsistent about its document root: some responses are a JSON array of
// records, others a single record object. Both shapes normalize to an ordered sequence of typed
// records; any other root is rejected.
//
// Normalization is all-or-nothing: the first record that fails field validation aborts the whole
// response. Partially-valid access-control data is never returned.

pub(crate) fn normalize<W, T, F>(root: Value, convert: F) -> Result<Vec<T>>
where
    W: DeserializeOwned,
    F: Fn(W, usize) -> Result<T>,
{
    match root {
        Value::Array(entries) => entries
            .into_iter()
            .enumerate()
            .map(|(index, entry)| {
                let wire: W = serde_json::from_value(entry)?;
                convert(wire, index)
            })
            .collect(),
        root @ Value::Object(_) => {
            let wire: W = serde_json::from_value(root)?;
            Ok(vec![convert(wire, 0)?])
        }
        _ => Err(Error::UnexpectedRootShape),
    }
}

/*--------------------------------------------------------------------------------------
  Per-Operation Entry Points
--------------------------------------------------------------------------------------*/

pub(crate) fn versions(root: Value) -> Result<Vec<VersionSummary>> {
    normalize(root, JsonVersionReport::into_record)
}

pub(crate) fn endpoints(root: Value) -> Result<Vec<EndpointRecord>> {
    normalize(root, JsonEndpointRecord::into_record)
}

pub(crate) fn changes(root: Value) -> Result<Vec<ChangeEvent>> {
    normalize(root, JsonChange::into_record)
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/
