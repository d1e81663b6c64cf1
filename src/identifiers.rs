//! Domain identifier types for catalog entries.
//!
//! Colors and palettes form closed sets and are modelled as enums. Fun facts,
//! avatars and mini-game challenges are open-ended catalog entries, so they are
//! addressed through these type-safe wrappers around string identifiers.

use std::{borrow::Borrow, fmt};

use serde::{Deserialize, Serialize};

macro_rules! string_identifier {
    ($(#[$meta:meta])* $name:ident, $example:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            #[doc = concat!("Create a new identifier, e.g. `", $example, "`.")]
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            /// Get the identifier as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Convert the identifier into its inner String.
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl PartialEq<&str> for $name {
            fn eq(&self, other: &&str) -> bool {
                self.as_str() == *other
            }
        }

        impl PartialEq<$name> for &str {
            fn eq(&self, other: &$name) -> bool {
                *self == other.as_str()
            }
        }

        impl Borrow<str> for $name {
            fn borrow(&self) -> &str {
                self.as_str()
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self::new(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self::new(s)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                self.as_str()
            }
        }
    };
}

string_identifier!(
    /// Identifier of a fun fact in the catalog (e.g. `ls1`).
    FactId,
    "gc1"
);

string_identifier!(
    /// Identifier of a selectable avatar.
    AvatarId,
    "avatar1"
);

string_identifier!(
    /// Identifier of a Color-Match or Rainbow-Sequence challenge definition.
    ChallengeId,
    "cm_apple"
);
