use std::any::Any;
use std::str;

use crate::codec::{expect_value, Codec, TypeSpec};
use crate::error::{CodecError, CodecResult};

/// Defines a codec whose byte representation is the UTF-8 decimal/text
/// rendering of the value, decoded through [`str::parse`]. A `None` payload
/// decodes to the type's zero value instead of failing.
macro_rules! text_codec {
    ($(#[$doc:meta])* $codec:ident, $ty:ty, $label:expr) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, Default)]
        pub struct $codec;

        impl Codec for $codec {
            fn name(&self) -> &'static str {
                $label
            }

            fn can_handle(&self, ty: &TypeSpec) -> bool {
                ty.is::<$ty>()
            }

            fn encode(&self, value: Option<&dyn Any>) -> CodecResult<Option<Vec<u8>>> {
                match value {
                    None => Ok(None),
                    Some(value) => {
                        let value = expect_value::<$ty>(value)?;
                        Ok(Some(value.to_string().into_bytes()))
                    }
                }
            }

            fn decode(&self, payload: Option<&[u8]>) -> CodecResult<Box<dyn Any + Send>> {
                match payload {
                    None => Ok(Box::new(<$ty>::default())),
                    Some(payload) => {
                        let text = str::from_utf8(payload)
                            .map_err(|err| CodecError::Format(err.to_string()))?;
                        let value = text
                            .parse::<$ty>()
                            .map_err(|err| CodecError::Format(err.to_string()))?;
                        Ok(Box::new(value))
                    }
                }
            }
        }
    };
}

text_codec!(
    /// Codec for `f32` values rendered as decimal text
    FloatCodec,
    f32,
    "float"
);

text_codec!(
    /// Codec for `f64` values rendered as decimal text
    DoubleCodec,
    f64,
    "double"
);

text_codec!(
    /// Codec for `i8` values rendered as decimal text
    ByteCodec,
    i8,
    "byte"
);

text_codec!(
    /// Codec for `i16` values rendered as decimal text
    ShortCodec,
    i16,
    "short"
);

text_codec!(
    /// Codec for `i32` values rendered as decimal text
    IntegerCodec,
    i32,
    "integer"
);

text_codec!(
    /// Codec for `i64` values rendered as decimal text
    LongCodec,
    i64,
    "long"
);

text_codec!(
    /// Codec for `bool` values rendered as `"true"`/`"false"`. Decoding any
    /// other text fails rather than defaulting to `false`, so truncated
    /// payloads are not silently masked.
    BooleanCodec,
    bool,
    "boolean"
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CodecError;
    use pretty_assertions::assert_eq;

    fn roundtrip<T: Any + Send + Clone + PartialEq + std::fmt::Debug>(
        codec: &dyn Codec,
        value: T,
    ) -> T {
        let payload = codec.encode(Some(&value)).unwrap().unwrap();
        *codec.decode(Some(&payload)).unwrap().downcast::<T>().unwrap()
    }

    #[test]
    fn test_integer_roundtrip() {
        let codec = IntegerCodec;
        for value in [0i32, 1, -1, 42, i32::MIN, i32::MAX] {
            assert_eq!(roundtrip(&codec, value), value);
        }
    }

    #[test]
    fn test_long_roundtrip() {
        let codec = LongCodec;
        for value in [0i64, -987_654_321, i64::MIN, i64::MAX] {
            assert_eq!(roundtrip(&codec, value), value);
        }
    }

    #[test]
    fn test_byte_and_short_roundtrip() {
        for value in [i8::MIN, -1, 0, 1, i8::MAX] {
            assert_eq!(roundtrip(&ByteCodec, value), value);
        }
        for value in [i16::MIN, -300, 0, 300, i16::MAX] {
            assert_eq!(roundtrip(&ShortCodec, value), value);
        }
    }

    #[test]
    fn test_float_roundtrip() {
        for value in [0.0f32, -1.5, 3.125, f32::MAX, f32::MIN_POSITIVE] {
            assert_eq!(roundtrip(&FloatCodec, value), value);
        }
        for value in [0.0f64, -2.25, 1e300, f64::MIN] {
            assert_eq!(roundtrip(&DoubleCodec, value), value);
        }
    }

    #[test]
    fn test_boolean_roundtrip() {
        assert!(roundtrip(&BooleanCodec, true));
        assert!(!roundtrip(&BooleanCodec, false));
    }

    #[test]
    fn test_encoded_form_is_decimal_text() {
        let payload = IntegerCodec.encode(Some(&-42i32)).unwrap().unwrap();
        assert_eq!(payload, b"-42");

        let payload = BooleanCodec.encode(Some(&true)).unwrap().unwrap();
        assert_eq!(payload, b"true");
    }

    #[test]
    fn test_encode_absent_value() {
        assert!(IntegerCodec.encode(None).unwrap().is_none());
        assert!(LongCodec.encode(None).unwrap().is_none());
        assert!(FloatCodec.encode(None).unwrap().is_none());
        assert!(DoubleCodec.encode(None).unwrap().is_none());
        assert!(ByteCodec.encode(None).unwrap().is_none());
        assert!(ShortCodec.encode(None).unwrap().is_none());
        assert!(BooleanCodec.encode(None).unwrap().is_none());
    }

    #[test]
    fn test_decode_absent_payload_defaults_to_zero() {
        let value = IntegerCodec.decode(None).unwrap();
        assert_eq!(*value.downcast::<i32>().unwrap(), 0);

        let value = LongCodec.decode(None).unwrap();
        assert_eq!(*value.downcast::<i64>().unwrap(), 0);

        let value = DoubleCodec.decode(None).unwrap();
        assert_eq!(*value.downcast::<f64>().unwrap(), 0.0);

        let value = BooleanCodec.decode(None).unwrap();
        assert!(!*value.downcast::<bool>().unwrap());
    }

    #[test]
    fn test_decode_malformed_text() {
        assert!(matches!(
            IntegerCodec.decode(Some(b"abc")),
            Err(CodecError::Format(_))
        ));
        assert!(matches!(
            IntegerCodec.decode(Some(b"")),
            Err(CodecError::Format(_))
        ));
        // Overflow is a parse failure, not a wrap-around.
        assert!(matches!(
            ByteCodec.decode(Some(b"300")),
            Err(CodecError::Format(_))
        ));
        // Anything but "true"/"false" is rejected for booleans.
        assert!(matches!(
            BooleanCodec.decode(Some(b"yes")),
            Err(CodecError::Format(_))
        ));
        assert!(matches!(
            BooleanCodec.decode(Some(b"TRUE")),
            Err(CodecError::Format(_))
        ));
    }

    #[test]
    fn test_decode_invalid_utf8() {
        assert!(matches!(
            IntegerCodec.decode(Some(&[0xff, 0xfe])),
            Err(CodecError::Format(_))
        ));
    }

    #[test]
    fn test_encode_wrong_type() {
        let value = "not a number".to_string();
        assert!(matches!(
            IntegerCodec.encode(Some(&value)),
            Err(CodecError::TypeMismatch { .. })
        ));
    }

    #[test]
    fn test_can_handle_is_exact() {
        assert!(IntegerCodec.can_handle(&TypeSpec::of::<i32>()));
        assert!(!IntegerCodec.can_handle(&TypeSpec::of::<i64>()));
        assert!(!IntegerCodec.can_handle(&TypeSpec::of::<u32>()));
        assert!(BooleanCodec.can_handle(&TypeSpec::of::<bool>()));
        assert!(!FloatCodec.can_handle(&TypeSpec::of::<f64>()));
    }
}
