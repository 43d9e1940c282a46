//! Discriminated-union decoding
//!
//! ARM models several payloads as a base shape plus a string discriminator
//! (`taskType`, `commandType`, `resultType`, `type`). Each union in this crate
//! is a Rust enum with one variant per known tag and a `Raw` variant for tags
//! the client does not know yet.
//!
//! Concrete variant structs carry `#[serde(tag = ..., rename = ...)]`, so they
//! always serialize with their own literal and have no tag field that could
//! disagree with it. Decoding goes through [`Tagged`], which
//! [`discriminated_union!`] wires up for every union:
//!
//! ```ignore
//! discriminated_union! {
//!     pub enum CommandProperties("commandType") {
//!         MongoDbCancel(MongoDbCancelCommand) => "cancel",
//!     }
//!     raw: RawCommandProperties,
//!     decoder: unmarshal_command_properties_implementation,
//! }
//! ```

use serde::de::{DeserializeOwned, Error as _};
use serde_json::{Map, Value};
use std::any::type_name;

/// A concrete variant of a discriminated union
pub trait Variant: DeserializeOwned {
    /// JSON key holding the discriminator
    const DISCRIMINATOR: &'static str;
    /// Literal this variant is tagged with on the wire
    const TAG: &'static str;
}

/// A JSON object whose discriminator has been read but not yet dispatched
#[derive(Debug)]
pub struct Tagged {
    map: Map<String, Value>,
    tag: Option<String>,
}

impl Tagged {
    /// Fails when `value` is not a JSON object
    pub fn from_value(value: Value, discriminator: &str, union: &str) -> Result<Self, serde_json::Error> {
        let Value::Object(map) = value else {
            return Err(serde_json::Error::custom(format!(
                "unmarshaling {}: expected a JSON object",
                union
            )));
        };

        let tag = match map.get(discriminator) {
            Some(Value::String(tag)) => Some(tag.clone()),
            Some(Value::Null) | None => None,
            Some(other) => {
                return Err(serde_json::Error::custom(format!(
                    "unmarshaling {}: {:?} must be a string, got {}",
                    union, discriminator, other
                )))
            },
        };

        Ok(Self { map, tag })
    }

    /// The discriminator as received, if present
    pub fn tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }

    /// Case-insensitive comparison against a variant's literal
    pub fn is<V: Variant>(&self) -> bool {
        self.tag
            .as_deref()
            .is_some_and(|tag| tag.to_lowercase() == V::TAG.to_lowercase())
    }

    /// Decode into a concrete variant. The discriminator is rewritten to the
    /// canonical literal first, so casing differences never reach serde.
    pub fn decode<V: Variant>(mut self) -> Result<V, serde_json::Error> {
        self.map
            .insert(V::DISCRIMINATOR.to_string(), Value::String(V::TAG.to_string()));
        serde_json::from_value(Value::Object(self.map)).map_err(|e| {
            serde_json::Error::custom(format!("unmarshaling into {}: {}", short_name::<V>(), e))
        })
    }

    /// Decode the common base shape and hand back every original key
    pub fn into_raw<B: DeserializeOwned>(self) -> Result<(B, Map<String, Value>), serde_json::Error> {
        let base = serde_json::from_value(Value::Object(self.map.clone())).map_err(|e| {
            serde_json::Error::custom(format!("unmarshaling into {}: {}", short_name::<B>(), e))
        })?;
        Ok((base, self.map))
    }
}

/// Declares a discriminated union over already-defined variant structs.
///
/// Generates the enum (plus a `Raw` variant wrapping `$raw { base, values }`),
/// a [`Variant`] impl per struct, the public decoder function, `tag()`,
/// `From` conversions and the serde hooks. Variants are tried in declaration
/// order and tags compare case-insensitively.
macro_rules! discriminated_union {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident($discriminator:literal) {
            $(
                $(#[$vmeta:meta])*
                $variant:ident($ty:ty) => $tag:literal
            ),+ $(,)?
        }
        raw: $raw:ident,
        decoder: $decoder:ident $(,)?
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq)]
        $vis enum $name {
            $(
                $(#[$vmeta])*
                $variant($ty),
            )+
            /// A variant this client does not know, with every original key
            Raw($raw),
        }

        $(
            impl $crate::polymorphic::Variant for $ty {
                const DISCRIMINATOR: &'static str = $discriminator;
                const TAG: &'static str = $tag;
            }

            impl From<$ty> for $name {
                fn from(value: $ty) -> Self {
                    Self::$variant(value)
                }
            }
        )+

        #[doc = concat!("Decode a `", stringify!($name), "` by its `", $discriminator, "` field")]
        $vis fn $decoder(value: ::serde_json::Value) -> ::std::result::Result<$name, ::serde_json::Error> {
            let tagged = $crate::polymorphic::Tagged::from_value(value, $discriminator, stringify!($name))?;
            $(
                if tagged.is::<$ty>() {
                    return tagged.decode::<$ty>().map($name::$variant);
                }
            )+
            let (base, values) = tagged.into_raw()?;
            Ok($name::Raw($raw { base, values }))
        }

        impl $name {
            /// Discriminator literal, as received for raw values
            pub fn tag(&self) -> &str {
                match self {
                    $(Self::$variant(_) => $tag,)+
                    Self::Raw(raw) => raw
                        .values
                        .get($discriminator)
                        .and_then(::serde_json::Value::as_str)
                        .unwrap_or_default(),
                }
            }
        }

        impl ::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error>
            where
                S: ::serde::Serializer,
            {
                match self {
                    $(Self::$variant(value) => ::serde::Serialize::serialize(value, serializer),)+
                    Self::Raw(raw) => ::serde::Serialize::serialize(&raw.values, serializer),
                }
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> ::std::result::Result<Self, D::Error>
            where
                D: ::serde::Deserializer<'de>,
            {
                let value = <::serde_json::Value as ::serde::Deserialize>::deserialize(deserializer)?;
                $decoder(value).map_err(<D::Error as ::serde::de::Error>::custom)
            }
        }
    };
}

pub(crate) use discriminated_union;

fn short_name<T>() -> &'static str {
    let full = type_name::<T>();
    full.rsplit("::").next().unwrap_or(full)
}
