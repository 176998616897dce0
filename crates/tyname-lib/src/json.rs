use serde::de::DeserializeOwned;

use crate::Error;

/// Deserialize with the JSON path of the failing node in the error.
pub(crate) fn from_str_with_path<T: DeserializeOwned>(src: &str) -> Result<T, Error> {
    let de = &mut serde_json::Deserializer::from_str(src);
    serde_path_to_error::deserialize(de).map_err(path_error)
}

pub(crate) fn from_value_with_path<T: DeserializeOwned>(value: serde_json::Value) -> Result<T, Error> {
    serde_path_to_error::deserialize(value).map_err(path_error)
}

fn path_error<E: std::fmt::Display>(err: serde_path_to_error::Error<E>) -> Error {
    Error::Metadata {
        path: err.path().to_string(),
        message: err.into_inner().to_string(),
    }
}
