//! `kv-codec` is the type-to-byte-array codec layer of a key-value store
//! client. Given a value type, the registry selects an encoder/decoder pair
//! converting between the native value and the byte sequence sent to (or
//! received from) the store. Ten primitive codecs are built in; any other
//! type falls back to a JSON codec bound to it. [Author fengyang]
//!
//! ## Getting started
//!
//! ```rust
//! use kv_codec::registry::CodecRegistry;
//!
//! let registry = CodecRegistry::new();
//!
//! // Built-in codecs render primitives as UTF-8 text.
//! let codec = registry.codec_for::<i64>();
//! let payload = codec.encode(Some(&42)).unwrap();
//! assert_eq!(payload.as_deref(), Some(b"42".as_slice()));
//! assert_eq!(codec.decode(payload.as_deref()).unwrap(), 42);
//!
//! // Unmatched types go through the JSON fallback.
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Debug, PartialEq, Serialize, Deserialize)]
//! struct Point { x: i64, y: i64 }
//!
//! let codec = registry.codec_for::<Point>();
//! let payload = codec.encode(Some(&Point { x: 3, y: -7 })).unwrap();
//! assert_eq!(
//!     codec.decode(payload.as_deref()).unwrap(),
//!     Point { x: 3, y: -7 },
//! );
//! ```

pub mod codec;
pub mod error;
pub mod registry;
