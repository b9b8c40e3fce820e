//! Identifiers of the six kinds.
//!
//! Every object gets a random v4 UUID when it is built and keeps it for life.
//! On the wire an id is the hyphenated string; in storage it is the raw UUID.
//! Each id type knows the name of its kind, so a lookup failure can be
//! reported from the id alone.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::NotFoundError;

/// Behavior shared by every id type.
pub trait Identifier: Copy + fmt::Display + FromStr {
    /// Kind name used in not-found reports (`"State"`, `"Place"`, …).
    const KIND: &'static str;

    /// Parse a caller-supplied id.
    ///
    /// A string that is not a UUID can never name a stored object, so it is
    /// reported the same way as an unknown id.
    ///
    /// # Errors
    ///
    /// Returns [`NotFoundError`] carrying the raw string when it does not parse.
    fn resolve(raw: &str) -> Result<Self, NotFoundError> {
        raw.parse().map_err(|_| NotFoundError::new(Self::KIND, raw))
    }
}

macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident => $kind:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Draw a fresh random id.
            #[must_use]
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            /// The UUID as stored in the database.
            #[must_use]
            pub fn as_uuid(self) -> Uuid {
                self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl From<Uuid> for $name {
            fn from(uuid: Uuid) -> Self {
                Self(uuid)
            }
        }

        impl Identifier for $name {
            const KIND: &'static str = $kind;
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Display::fmt(&self.0.hyphenated(), f)
            }
        }

        impl FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Uuid::parse_str(s).map(Self)
            }
        }
    };
}

define_id!(
    /// Id of a [`State`](crate::state::State).
    StateId => "State"
);
define_id!(
    /// Id of a [`City`](crate::city::City).
    CityId => "City"
);
define_id!(
    /// Id of an [`Amenity`](crate::amenity::Amenity).
    AmenityId => "Amenity"
);
define_id!(
    /// Id of a [`User`](crate::user::User).
    UserId => "User"
);
define_id!(
    /// Id of a [`Place`](crate::place::Place).
    PlaceId => "Place"
);
define_id!(
    /// Id of a [`Review`](crate::review::Review).
    ReviewId => "Review"
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_draw_distinct_ids_for_each_new_object() {
        let california = StateId::new();
        let nevada = StateId::new();
        assert_ne!(california, nevada);
    }

    #[test]
    fn should_resolve_the_hyphenated_form_it_displays() {
        let fresno = CityId::new();
        let resolved = CityId::resolve(&fresno.to_string()).unwrap();
        assert_eq!(resolved, fresno);
    }

    #[test]
    fn should_report_unparsable_id_as_missing_object_of_its_kind() {
        let err = PlaceId::resolve("bad-id").unwrap_err();
        assert_eq!(err.entity, "Place");
        assert_eq!(err.id, "bad-id");
    }

    #[test]
    fn should_appear_in_json_as_bare_string() {
        let host = UserId::new();
        let json = serde_json::to_value(host).unwrap();
        assert_eq!(json, serde_json::Value::String(host.to_string()));
    }

    #[test]
    fn should_keep_stored_uuid_when_loaded_back() {
        let stored = Uuid::new_v4();
        let review = ReviewId::from(stored);
        assert_eq!(review.as_uuid(), stored);
        assert_eq!(AmenityId::KIND, "Amenity");
    }
}
