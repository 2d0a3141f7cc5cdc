use std::any::Any;

use crate::codec::{expect_value, Codec, TypeSpec};
use crate::error::CodecResult;

/// Identity codec for raw `Vec<u8>` payloads.
///
/// Bytes pass through untouched in both directions. An absent payload
/// decodes to the empty vector.
#[derive(Debug, Clone, Copy, Default)]
pub struct ByteArrayCodec;

impl Codec for ByteArrayCodec {
    fn name(&self) -> &'static str {
        "byte-array"
    }

    fn can_handle(&self, ty: &TypeSpec) -> bool {
        ty.is::<Vec<u8>>()
    }

    fn encode(&self, value: Option<&dyn Any>) -> CodecResult<Option<Vec<u8>>> {
        match value {
            None => Ok(None),
            Some(value) => {
                let value = expect_value::<Vec<u8>>(value)?;
                Ok(Some(value.clone()))
            }
        }
    }

    fn decode(&self, payload: Option<&[u8]>) -> CodecResult<Box<dyn Any + Send>> {
        Ok(Box::new(payload.unwrap_or_default().to_vec()))
    }
}
