//! Type-safe record identifiers.
//!
//! Each record type gets its own newtype over the `BIGSERIAL` primary key so
//! that a venue id can never be passed where an artist id is expected.

use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! record_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
            sqlx::Type,
        )]
        #[serde(transparent)]
        #[sqlx(transparent)]
        pub struct $name(i64);

        impl $name {
            /// Wraps a raw primary key.
            #[must_use]
            pub const fn new(raw: i64) -> Self {
                Self(raw)
            }

            /// Returns the raw primary key.
            #[must_use]
            pub const fn get(self) -> i64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<i64> for $name {
            fn from(raw: i64) -> Self {
                Self(raw)
            }
        }

        impl From<$name> for i64 {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl std::str::FromStr for $name {
            type Err = std::num::ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.trim().parse().map(Self)
            }
        }
    };
}

record_id! {
    /// Primary key of a row in `venues`.
    VenueId
}

record_id! {
    /// Primary key of a row in `artists`.
    ArtistId
}

record_id! {
    /// Primary key of a row in `shows`.
    ShowId
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_raw_integer() {
        assert_eq!(VenueId::new(42).to_string(), "42");
    }

    #[test]
    fn parses_with_surrounding_whitespace() {
        assert_eq!(" 7 ".parse::<ArtistId>(), Ok(ArtistId::new(7)));
        assert!("seven".parse::<ArtistId>().is_err());
    }

    #[test]
    fn serde_is_transparent() {
        let json = serde_json::to_string(&ShowId::new(3)).ok();
        assert_eq!(json.as_deref(), Some("3"));
        let parsed: Option<ShowId> = serde_json::from_str("3").ok();
        assert_eq!(parsed, Some(ShowId::new(3)));
    }

    #[test]
    fn raw_round_trip() {
        let id = VenueId::from(9);
        assert_eq!(i64::from(id), 9);
        assert_eq!(id.get(), 9);
    }
}
