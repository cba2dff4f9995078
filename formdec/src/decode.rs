//! The decode engine: walks the input mapping, resolves each key to a
//! field, and dispatches validation, setter hooks, and coercion.

use std::collections::HashMap;

use serde::Serialize;

use crate::FormData;
use crate::coerce;
use crate::error::{CompoundValidationError, DecodeError};
use crate::field::{self, FormRecord};

/// What to do with an input key that resolves to no field.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum UnknownKeys {
    /// Skip it silently.
    #[default]
    Ignore,
    /// Skip it, but emit a `tracing::warn!` event.
    Warn,
    /// Fail the decode with [`DecodeError::UnknownKey`].
    Deny,
}

/// A configured decoder. The zero-configuration entry point is
/// [`unmarshal`]; build a `Decoder` to change the unknown-key policy.
#[derive(Clone, Copy, Debug, Default)]
pub struct Decoder {
    unknown_keys: UnknownKeys,
}

impl Decoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the unknown-key policy.
    pub fn unknown_keys(mut self, policy: UnknownKeys) -> Self {
        self.unknown_keys = policy;
        self
    }

    /// Decode `data` into `record`.
    ///
    /// Every input key is processed (in no guaranteed order). Validation
    /// failures are collected and returned together once all keys have
    /// been seen; any other failure aborts immediately, leaving the record
    /// partially populated.
    pub fn unmarshal<R: FormRecord>(
        &self,
        data: &FormData,
        record: &mut R,
    ) -> Result<(), DecodeError> {
        let resolved = field::resolve::<R>();
        let mut failures = Vec::new();

        for (key, values) in data {
            let Some(fld) = field::find_by_key(&resolved, key) else {
                match self.unknown_keys {
                    UnknownKeys::Ignore => tracing::debug!("skipping unknown key {key:?}"),
                    UnknownKeys::Warn => tracing::warn!("unknown form key {key:?}"),
                    UnknownKeys::Deny => return Err(DecodeError::UnknownKey(key.clone())),
                }
                continue;
            };

            if let Some(validate) = fld.validator {
                if let Some(failure) = validate(record, values) {
                    tracing::debug!("validation of {key}={values:?} failed: {failure}");
                    failures.push(failure);
                    continue;
                }
            }

            if let Some(set) = fld.setter {
                tracing::debug!("setting {key:?} via registered setter");
                set(record, values).map_err(|source| DecodeError::Setter {
                    field: fld.name,
                    source,
                })?;
                continue;
            }

            tracing::debug!("assigning {key:?} value {values:?}");
            coerce::assign(fld.name, (fld.slot)(record), values)?;
        }

        if failures.is_empty() {
            Ok(())
        } else {
            Err(CompoundValidationError::new(failures).into())
        }
    }
}

/// Decode `data` into `record` with the default decoder (unknown keys
/// silently skipped).
pub fn unmarshal<R: FormRecord>(data: &FormData, record: &mut R) -> Result<(), DecodeError> {
    Decoder::new().unmarshal(data, record)
}

/// A decoded value in a string-map destination.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum MapValue {
    /// The key was submitted with exactly one value.
    Text(String),
    /// The key was submitted with several values, kept in order.
    List(Vec<String>),
}

/// Decode `data` into a string map: one value becomes [`MapValue::Text`],
/// several become [`MapValue::List`], and a key submitted with zero values
/// is skipped. Cannot fail.
pub fn unmarshal_map(data: &FormData, map: &mut HashMap<String, MapValue>) {
    for (key, values) in data {
        match values.as_slice() {
            [] => {}
            [value] => {
                map.insert(key.clone(), MapValue::Text(value.clone()));
            }
            _ => {
                map.insert(key.clone(), MapValue::List(values.clone()));
            }
        }
    }
}
