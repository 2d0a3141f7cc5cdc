use std::any::Any;
use std::marker::PhantomData;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::codec::{expect_value, Codec, TypeSpec};
use crate::error::CodecResult;

/// Fallback codec serializing any serde-capable type as JSON text.
///
/// The registry synthesizes one of these, bound to the requested type, when
/// no registered codec matches. It never takes part in the lookup scan, so
/// [`Codec::can_handle`] is a programming error and panics.
pub struct JsonCodec<T> {
    _type: PhantomData<fn() -> T>,
}

impl<T> JsonCodec<T> {
    pub fn new() -> Self {
        JsonCodec { _type: PhantomData }
    }
}

impl<T> Default for JsonCodec<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Codec for JsonCodec<T>
where
    T: Serialize + DeserializeOwned + Send + 'static,
{
    fn name(&self) -> &'static str {
        "json"
    }

    fn can_handle(&self, _ty: &TypeSpec) -> bool {
        panic!("can_handle must not be called on the JSON fallback codec");
    }

    fn encode(&self, value: Option<&dyn Any>) -> CodecResult<Option<Vec<u8>>> {
        match value {
            None => Ok(None),
            Some(value) => {
                let value = expect_value::<T>(value)?;
                Ok(Some(serde_json::to_vec(value)?))
            }
        }
    }

    fn decode(&self, payload: Option<&[u8]>) -> CodecResult<Box<dyn Any + Send>> {
        // An absent payload decodes like an empty one: it fails with an
        // end-of-input error instead of fabricating a value.
        let value: T = serde_json::from_slice(payload.unwrap_or_default())?;
        Ok(Box::new(value))
    }
}
