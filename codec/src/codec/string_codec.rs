use std::any::Any;
use std::str;

use crate::codec::{expect_value, Codec, TypeSpec};
use crate::error::{CodecError, CodecResult};

/// Codec for `String` values, stored as their UTF-8 bytes.
///
/// An absent payload decodes to the empty string.
#[derive(Debug, Clone, Copy, Default)]
pub struct StringCodec;

impl Codec for StringCodec {
    fn name(&self) -> &'static str {
        "string"
    }

    fn can_handle(&self, ty: &TypeSpec) -> bool {
        ty.is::<String>()
    }

    fn encode(&self, value: Option<&dyn Any>) -> CodecResult<Option<Vec<u8>>> {
        match value {
            None => Ok(None),
            Some(value) => {
                let value = expect_value::<String>(value)?;
                Ok(Some(value.clone().into_bytes()))
            }
        }
    }

    fn decode(&self, payload: Option<&[u8]>) -> CodecResult<Box<dyn Any + Send>> {
        match payload {
            None => Ok(Box::new(String::new())),
            Some(payload) => {
                let text = String::from_utf8(payload.to_vec())
                    .map_err(|err| CodecError::Format(err.to_string()))?;
                Ok(Box::new(text))
            }
        }
    }
}

/// Codec for `char` values, stored as UTF-8 text.
///
/// Decoding takes the first character of the payload; an empty payload is a
/// format error so truncated data is not masked by a default. An absent
/// payload decodes to `'\0'`.
#[derive(Debug, Clone, Copy, Default)]
pub struct CharacterCodec;

impl Codec for CharacterCodec {
    fn name(&self) -> &'static str {
        "character"
    }

    fn can_handle(&self, ty: &TypeSpec) -> bool {
        ty.is::<char>()
    }

    fn encode(&self, value: Option<&dyn Any>) -> CodecResult<Option<Vec<u8>>> {
        match value {
            None => Ok(None),
            Some(value) => {
                let value = expect_value::<char>(value)?;
                Ok(Some(value.to_string().into_bytes()))
            }
        }
    }

    fn decode(&self, payload: Option<&[u8]>) -> CodecResult<Box<dyn Any + Send>> {
        match payload {
            None => Ok(Box::new(char::default())),
            Some(payload) => {
                let text = str::from_utf8(payload)
                    .map_err(|err| CodecError::Format(err.to_string()))?;
                let value = text.chars().next().ok_or_else(|| {
                    CodecError::Format("cannot decode a character from an empty payload".to_string())
                })?;
                Ok(Box::new(value))
            }
        }
    }
}
