//! Strongly-typed value objects used by domain entities.
//!
//! These wrappers enforce basic invariants (positive identifiers, non-empty
//! text) on values entering the store. Rows read back from the store are
//! wrapped with the `from_stored` constructors and never re-validated.
use std::fmt::{Display, Formatter};
use std::ops::Deref;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced when attempting to construct a constrained value object.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// Provided identifier is zero or negative.
    #[error("id must be greater than zero")]
    NonPositiveId,
    /// Provided string contained no non-whitespace characters.
    #[error("value cannot be empty")]
    EmptyString,
    /// Provided year/month/day triple is not a calendar date.
    #[error("invalid date")]
    InvalidDate,
}

/// Macro to generate lightweight newtypes for positive identifiers.
macro_rules! id_newtype {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(i32);

        impl $name {
            /// Creates a new identifier ensuring it is greater than zero.
            pub fn new(value: i32) -> Result<Self, TypeConstraintError> {
                if value > 0 {
                    Ok(Self(value))
                } else {
                    Err(TypeConstraintError::NonPositiveId)
                }
            }

            /// Wraps an identifier assigned by the store.
            pub const fn from_stored(value: i32) -> Self {
                Self(value)
            }

            /// Returns the raw `i32` backing this identifier.
            pub const fn get(self) -> i32 {
                self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl TryFrom<i32> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: i32) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for i32 {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

id_newtype!(CustomerId, "Unique identifier for a customer.");

/// Trimmed, non-empty text wrappers. Case is preserved.
macro_rules! non_empty_string_newtype {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(String);

        impl $name {
            /// Constructs a trimmed, non-empty value.
            pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
                let trimmed = value.into().trim().to_string();
                if trimmed.is_empty() {
                    return Err(TypeConstraintError::EmptyString);
                }
                Ok(Self(trimmed))
            }

            /// Wraps a value read back from the store as-is.
            pub fn from_stored(value: String) -> Self {
                Self(value)
            }

            /// Borrow the value as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume the wrapper and return the owned string.
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl Deref for $name {
            type Target = str;

            fn deref(&self) -> &Self::Target {
                &self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl TryFrom<String> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl TryFrom<&str> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: &str) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

non_empty_string_newtype!(CustomerName, "Display name of a customer.");
non_empty_string_newtype!(CustomerEmail, "Free-text contact email; case is preserved.");
non_empty_string_newtype!(StateCode, "Region or province the customer lives in.");
non_empty_string_newtype!(CountryCode, "Country the customer lives in.");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn customer_id_rejects_non_positive_values() {
        assert_eq!(CustomerId::new(0), Err(TypeConstraintError::NonPositiveId));
        assert_eq!(CustomerId::new(-5), Err(TypeConstraintError::NonPositiveId));
        assert_eq!(CustomerId::new(7).map(CustomerId::get), Ok(7));
    }

    #[test]
    fn email_keeps_case_and_accepts_free_text() {
        let email = CustomerEmail::new("  Alice.Smith@Example.COM ").unwrap();
        assert_eq!(email.as_str(), "Alice.Smith@Example.COM");
        assert_eq!(
            CustomerEmail::new("zed at example").unwrap().as_str(),
            "zed at example"
        );
    }

    #[test]
    fn stored_values_are_wrapped_untouched() {
        assert_eq!(CustomerId::from_stored(0).get(), 0);
        assert_eq!(StateCode::from_stored(" Texas ".to_string()).as_str(), " Texas ");
        assert_eq!(CustomerName::from_stored(String::new()).as_str(), "");
    }

    #[test]
    fn text_values_keep_case_but_drop_whitespace() {
        let state = StateCode::new("  CA ").unwrap();
        assert_eq!(state.as_str(), "CA");
        assert_eq!(&*state, "CA");
        assert_eq!(CountryCode::new("   "), Err(TypeConstraintError::EmptyString));
    }
}
