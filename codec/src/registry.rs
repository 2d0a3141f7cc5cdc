use std::any::Any;
use std::marker::PhantomData;
use std::sync::Arc;

use arc_swap::ArcSwap;
use log::{debug, trace};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::codec::{
    BooleanCodec, ByteArrayCodec, ByteCodec, CharacterCodec, Codec, DoubleCodec, FloatCodec,
    IntegerCodec, JsonCodec, LongCodec, ShortCodec, StringCodec, TypeSpec,
};
use crate::error::{CodecError, CodecResult};

/// Ordered, append-only collection of codecs, searched linearly on lookup.
///
/// The codec list is held behind a copy-on-write swap: lookups load an
/// immutable snapshot and iterate without locking, while registrations swap
/// in a new list. An in-flight lookup never observes a torn list and sees
/// every codec registered before it loaded its snapshot.
///
/// The registry is owned by the client that constructs it; share it with an
/// [`Arc`] where several components resolve codecs.
pub struct CodecRegistry {
    codecs: ArcSwap<Vec<Arc<dyn Codec>>>,
}

impl CodecRegistry {
    /// Build a registry seeded with the built-in codecs for `char`,
    /// `String`, `f32`, `f64`, `i8`, `i16`, `i32`, `i64`, `Vec<u8>` and
    /// `bool`.
    pub fn new() -> Self {
        let builtins: Vec<Arc<dyn Codec>> = vec![
            Arc::new(CharacterCodec),
            Arc::new(StringCodec),
            Arc::new(FloatCodec),
            Arc::new(DoubleCodec),
            Arc::new(ByteCodec),
            Arc::new(ShortCodec),
            Arc::new(IntegerCodec),
            Arc::new(LongCodec),
            Arc::new(ByteArrayCodec),
            Arc::new(BooleanCodec),
        ];
        CodecRegistry {
            codecs: ArcSwap::from_pointee(builtins),
        }
    }

    /// Append a custom codec to the registry.
    ///
    /// Codecs are scanned in registration order and the built-ins come
    /// first, so a custom codec for a type a built-in already handles is
    /// never selected. Register custom codecs for your own types only.
    pub fn register(&self, codec: Arc<dyn Codec>) {
        debug!("registering codec {}", codec.name());
        self.codecs.rcu(|codecs| {
            let mut next = Vec::with_capacity(codecs.len() + 1);
            next.extend(codecs.iter().cloned());
            next.push(Arc::clone(&codec));
            next
        });
    }

    /// Register several codecs, in iteration order
    pub fn register_all<I>(&self, codecs: I)
    where
        I: IntoIterator<Item = Arc<dyn Codec>>,
    {
        for codec in codecs {
            self.register(codec);
        }
    }

    /// Number of codecs currently registered, built-ins included
    pub fn len(&self) -> usize {
        self.codecs.load().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Resolve the codec for values of type `T`.
    ///
    /// The first registered codec whose `can_handle` accepts `T` wins. When
    /// none matches, a JSON codec bound to `T` is synthesized, which is why
    /// `T` carries serde bounds even for types a built-in covers.
    pub fn codec_for<T>(&self) -> BoundCodec<T>
    where
        T: Serialize + DeserializeOwned + Send + 'static,
    {
        let ty = TypeSpec::of::<T>();
        let codecs = self.codecs.load();
        for codec in codecs.iter() {
            if codec.can_handle(&ty) {
                return BoundCodec::new(Arc::clone(codec));
            }
        }

        trace!("no codec registered for {}, falling back to JSON", ty);
        BoundCodec::new(Arc::new(JsonCodec::<T>::new()))
    }
}

impl Default for CodecRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Typed view over the codec selected for `T`.
///
/// Wraps the type-erased codec the registry resolved and gives the caller a
/// plain `Option<&T>` / `T` surface.
pub struct BoundCodec<T> {
    codec: Arc<dyn Codec>,
    _type: PhantomData<fn() -> T>,
}

impl<T: Any + Send> BoundCodec<T> {
    fn new(codec: Arc<dyn Codec>) -> Self {
        BoundCodec {
            codec,
            _type: PhantomData,
        }
    }

    /// Name of the underlying codec, for diagnostics
    pub fn name(&self) -> &'static str {
        self.codec.name()
    }

    /// Encode a value; `None` encodes to an absent payload
    pub fn encode(&self, value: Option<&T>) -> CodecResult<Option<Vec<u8>>> {
        self.codec.encode(value.map(|value| value as &dyn Any))
    }

    /// Decode a payload; `None` follows each codec's documented default
    pub fn decode(&self, payload: Option<&[u8]>) -> CodecResult<T> {
        let value = self.codec.decode(payload)?;
        value
            .downcast::<T>()
            .map(|value| *value)
            .map_err(|_| CodecError::TypeMismatch {
                expected: std::any::type_name::<T>(),
            })
    }
}
