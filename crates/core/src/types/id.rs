//! Newtype IDs for type-safe entity references.
//!
//! Use the `define_id!` macro to create type-safe ID wrappers that prevent
//! accidentally mixing IDs from different entity types.

/// Macro to define a type-safe string ID wrapper.
///
/// Creates a newtype wrapper around `String` with:
/// - `Serialize`/`Deserialize` with `#[serde(transparent)]`
/// - `Debug`, `Clone`, `PartialEq`, `Eq`, `Hash`, `PartialOrd`, `Ord`
/// - Conversion methods: `new()`, `as_str()`, `into_inner()`
/// - `From<&str>`, `From<String>`, `FromStr` and `Display` implementations
///
/// # Example
///
/// ```rust
/// # use autopos_core::define_id;
/// define_id!(TicketId);
/// define_id!(BranchId);
///
/// let ticket_id = TicketId::new("T-1");
/// let branch_id = BranchId::new("B-1");
///
/// // These are different types, so this won't compile:
/// // let _: TicketId = branch_id;
/// assert_eq!(ticket_id.as_str(), "T-1");
/// ```
#[macro_export]
macro_rules! define_id {
    ($name:ident) => {
        #[derive(
            Debug,
            Clone,
            PartialEq,
            Eq,
            Hash,
            PartialOrd,
            Ord,
            ::serde::Serialize,
            ::serde::Deserialize
        )]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new ID from anything convertible to a `String`.
            #[must_use]
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Get the underlying string value.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume the ID and return the inner string.
            #[must_use]
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_owned())
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl ::core::str::FromStr for $name {
            type Err = ::core::convert::Infallible;

            fn from_str(s: &str) -> ::core::result::Result<Self, Self::Err> {
                Ok(Self(s.to_owned()))
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

// Define standard entity IDs
define_id!(ProductId);
define_id!(CustomerId);
define_id!(OrderId);

impl OrderId {
    /// Prefix used for invoice numbers.
    pub const INVOICE_PREFIX: &'static str = "INV-";

    /// Build an invoice number from a Unix timestamp in milliseconds.
    ///
    /// The result is a display label (`INV-<millis>`), not a globally unique
    /// key: two orders placed within the same millisecond share a label.
    #[must_use]
    pub fn from_timestamp_millis(millis: i64) -> Self {
        Self(format!("{}{millis}", Self::INVOICE_PREFIX))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_serialize_as_plain_strings() {
        let id = ProductId::new("C-0001");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"C-0001\"");

        let parsed: CustomerId = serde_json::from_str("\"CU-1\"").unwrap();
        assert_eq!(parsed.as_str(), "CU-1");
    }

    #[test]
    fn test_invoice_number_from_timestamp() {
        let id = OrderId::from_timestamp_millis(1_700_000_000_123);
        assert_eq!(id.as_str(), "INV-1700000000123");
        assert_eq!(id.to_string(), "INV-1700000000123");
    }

    #[test]
    fn test_from_str_and_conversions() {
        let id: ProductId = "C-0002".parse().unwrap();
        assert_eq!(id, ProductId::from("C-0002"));
        assert_eq!(String::from(id), "C-0002");
    }
}
