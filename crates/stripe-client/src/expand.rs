//! Decoding of references that may be a bare id or an expanded object
//!
//! A reference field comes back as `"we_123"` unless the caller asked for it
//! to be expanded, in which case the full object is returned. Types that can
//! appear in either shape use [`impl_expandable!`](crate::impl_expandable).

use serde_json::Value;

/// Returns the id when the value is a bare id string
pub fn parse_id(value: &Value) -> Option<&str> {
    value.as_str()
}

/// Implements `Serialize` and `Deserialize` for an expandable resource.
///
/// The type must derive both traits with `#[serde(remote = "Self")]`,
/// implement `Default` and carry a `pub id: String` field. Decoding tries the
/// bare id shape first and falls back to the derived structural decode.
#[macro_export]
macro_rules! impl_expandable {
    ($ty:ident) => {
        impl<'de> $crate::__private::serde::Deserialize<'de> for $ty {
            fn deserialize<D>(deserializer: D) -> ::std::result::Result<Self, D::Error>
            where
                D: $crate::__private::serde::Deserializer<'de>,
            {
                use $crate::__private::serde::de::Error as _;

                let value: $crate::__private::serde_json::Value =
                    $crate::__private::serde::Deserialize::deserialize(deserializer)?;
                if let Some(id) = $crate::expand::parse_id(&value) {
                    return Ok($ty {
                        id: id.to_string(),
                        ..::std::default::Default::default()
                    });
                }
                $ty::deserialize(value).map_err(D::Error::custom)
            }
        }

        impl $crate::__private::serde::Serialize for $ty {
            fn serialize<S>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error>
            where
                S: $crate::__private::serde::Serializer,
            {
                $ty::serialize(self, serializer)
            }
        }
    };
}
