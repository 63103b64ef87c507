//! JSON hooks for [`Optional`]. An absent container is written as `null`, and
//! `null` is read back as an absent container.

use serde::{de::DeserializeOwned, Serialize};

use crate::{error::JsonError, Optional};

/// Encodes `value` as JSON: the contained value, or `null` if absent.
pub fn marshal<T: Serialize>(value: &Optional<T>) -> Result<Vec<u8>, JsonError> {
    if value.is_nil() {
        log::trace!("marshalling absent Optional as null");
    }
    Ok(serde_json::to_vec(value)?)
}

/// Decodes a JSON document into a new container.
pub fn unmarshal<T: DeserializeOwned>(data: &[u8]) -> Result<Optional<T>, JsonError> {
    let decoded: Option<T> = serde_json::from_slice(data)?;
    if decoded.is_none() {
        log::trace!("unmarshalled null into absent Optional");
    }
    Ok(Optional::from(decoded))
}

/// Decodes a JSON document into `target`, replacing its previous contents.
///
/// Fails with [`JsonError::InvalidTarget`] if there is no target. On a decode
/// error, `target` is left untouched.
pub fn unmarshal_into<T: DeserializeOwned>(
    target: Option<&mut Optional<T>>,
    data: &[u8],
) -> Result<(), JsonError> {
    let Some(target) = target else {
        log::trace!("refusing to unmarshal into a null target");
        return Err(JsonError::InvalidTarget);
    };
    *target = unmarshal(data)?;
    Ok(())
}
