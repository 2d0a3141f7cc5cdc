use std::any::{Any, TypeId};
use std::fmt;

use crate::error::{CodecError, CodecResult};

pub mod bytes_codec;
pub mod json_codec;
pub mod numeric_codec;
pub mod string_codec;

pub use bytes_codec::ByteArrayCodec;
pub use json_codec::JsonCodec;
pub use numeric_codec::{
    BooleanCodec, ByteCodec, DoubleCodec, FloatCodec, IntegerCodec, LongCodec, ShortCodec,
};
pub use string_codec::{CharacterCodec, StringCodec};

/// Runtime descriptor of the value type a codec converts.
///
/// Built from [`std::any::TypeId`], so parameterized types such as
/// `Vec<Point>` or `HashMap<String, i64>` each get their own descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypeSpec {
    id: TypeId,
    name: &'static str,
}

impl TypeSpec {
    /// Descriptor for the type `T`
    pub fn of<T: ?Sized + 'static>() -> Self {
        TypeSpec {
            id: TypeId::of::<T>(),
            name: std::any::type_name::<T>(),
        }
    }

    /// Whether this descriptor identifies the type `T`
    pub fn is<T: ?Sized + 'static>(&self) -> bool {
        self.id == TypeId::of::<T>()
    }

    /// Human-readable type name, for diagnostics only
    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl fmt::Display for TypeSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Strategy object converting between a native value and a byte sequence.
///
/// `None` stands for an absent value on encode and an absent payload on
/// decode. Primitive codecs encode absence as `Ok(None)` and decode an
/// absent payload to the type's zero value; this is a deliberate
/// convention, not a round-trip-safe behavior.
pub trait Codec: Send + Sync {
    /// Name of this codec, for diagnostics
    fn name(&self) -> &'static str;

    /// Whether this codec handles values of the given type.
    ///
    /// Pure and total for every codec that takes part in registry lookup.
    /// The JSON fallback codec is the one exception: it never participates
    /// in lookup and panics when asked.
    fn can_handle(&self, ty: &TypeSpec) -> bool;

    /// Encode a value into a byte sequence. A `None` input yields
    /// `Ok(None)`.
    fn encode(&self, value: Option<&dyn Any>) -> CodecResult<Option<Vec<u8>>>;

    /// Decode a byte sequence back into a value
    fn decode(&self, payload: Option<&[u8]>) -> CodecResult<Box<dyn Any + Send>>;
}

/// Downcast an encode input to the concrete type a codec expects
pub(crate) fn expect_value<T: Any>(value: &dyn Any) -> CodecResult<&T> {
    value.downcast_ref::<T>().ok_or(CodecError::TypeMismatch {
        expected: std::any::type_name::<T>(),
    })
}
