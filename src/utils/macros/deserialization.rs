//! Case-insensitive deserialization of plain string enums
//!
//! Filter trees written by hand tend to spell connectives as `AND`, `And` or `and`;
//! all of them should resolve to the same variant.

/// Implements `Deserialize` for a fieldless enum from a string, ignoring case.
///
/// Each `"name" => Variant` pair maps the lowercase spelling to a variant. Unknown
/// names fail with serde's `unknown_variant` error listing the accepted names.
#[macro_export]
macro_rules! impl_case_insensitive_enum {
	($enum_name:ident, { $($variant_str:literal => $variant:ident),* $(,)? }) => {
		impl<'de> ::serde::Deserialize<'de> for $enum_name {
			fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
			where
				D: ::serde::Deserializer<'de>,
			{
				use ::serde::de::{self, Visitor};
				use std::fmt;

				struct EnumVisitor;

				impl<'de> Visitor<'de> for EnumVisitor {
					type Value = $enum_name;

					fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
						formatter.write_str(concat!("a string naming a ", stringify!($enum_name)))
					}

					fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
					where
						E: de::Error,
					{
						match value.to_lowercase().as_str() {
							$(
								$variant_str => Ok($enum_name::$variant),
							)*
							_ => Err(de::Error::unknown_variant(value, &[$($variant_str),*])),
						}
					}
				}

				deserializer.deserialize_str(EnumVisitor)
			}
		}
	};
}
