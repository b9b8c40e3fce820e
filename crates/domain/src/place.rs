//! Place: a rentable listing located in a city and owned by a user.

use serde::{Deserialize, Serialize};

use crate::error::{HbnbError, ValidationError};
use crate::id::{AmenityId, CityId, PlaceId, UserId};
use crate::time::{Timestamp, now};

/// A listing. `city_id` and `user_id` are fixed at creation; amenities are
/// attached and detached through dedicated operations, never through a patch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    pub id: PlaceId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub city_id: CityId,
    pub user_id: UserId,
    pub name: String,
    pub description: Option<String>,
    pub address: Option<String>,
    pub number_rooms: u32,
    pub number_bathrooms: u32,
    pub max_guest: u32,
    pub price_by_night: u32,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub amenity_ids: Vec<AmenityId>,
}

impl Place {
    /// Create a builder for constructing a [`Place`].
    #[must_use]
    pub fn builder() -> PlaceBuilder {
        PlaceBuilder::default()
    }

    /// Whether the amenity is attached to this place.
    #[must_use]
    pub fn has_amenity(&self, amenity_id: AmenityId) -> bool {
        self.amenity_ids.contains(&amenity_id)
    }

    /// Attach an amenity. Returns `false` when it was already attached.
    pub fn link_amenity(&mut self, amenity_id: AmenityId) -> bool {
        if self.has_amenity(amenity_id) {
            return false;
        }
        self.amenity_ids.push(amenity_id);
        true
    }

    /// Detach an amenity. Returns `false` when it was not attached.
    pub fn unlink_amenity(&mut self, amenity_id: AmenityId) -> bool {
        let before = self.amenity_ids.len();
        self.amenity_ids.retain(|id| *id != amenity_id);
        self.amenity_ids.len() != before
    }
}

/// Step-by-step builder for [`Place`].
#[derive(Debug, Default)]
pub struct PlaceBuilder {
    id: Option<PlaceId>,
    city_id: Option<CityId>,
    user_id: Option<UserId>,
    name: Option<String>,
    description: Option<String>,
    address: Option<String>,
    number_rooms: u32,
    number_bathrooms: u32,
    max_guest: u32,
    price_by_night: u32,
    latitude: Option<f64>,
    longitude: Option<f64>,
    amenity_ids: Vec<AmenityId>,
}

impl PlaceBuilder {
    #[must_use]
    pub fn id(mut self, id: PlaceId) -> Self {
        self.id = Some(id);
        self
    }

    #[must_use]
    pub fn city_id(mut self, city_id: CityId) -> Self {
        self.city_id = Some(city_id);
        self
    }

    #[must_use]
    pub fn user_id(mut self, user_id: UserId) -> Self {
        self.user_id = Some(user_id);
        self
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    #[must_use]
    pub fn number_rooms(mut self, number_rooms: u32) -> Self {
        self.number_rooms = number_rooms;
        self
    }

    #[must_use]
    pub fn number_bathrooms(mut self, number_bathrooms: u32) -> Self {
        self.number_bathrooms = number_bathrooms;
        self
    }

    #[must_use]
    pub fn max_guest(mut self, max_guest: u32) -> Self {
        self.max_guest = max_guest;
        self
    }

    #[must_use]
    pub fn price_by_night(mut self, price_by_night: u32) -> Self {
        self.price_by_night = price_by_night;
        self
    }

    #[must_use]
    pub fn latitude(mut self, latitude: f64) -> Self {
        self.latitude = Some(latitude);
        self
    }

    #[must_use]
    pub fn longitude(mut self, longitude: f64) -> Self {
        self.longitude = Some(longitude);
        self
    }

    #[must_use]
    pub fn coordinates(self, latitude: f64, longitude: f64) -> Self {
        self.latitude(latitude).longitude(longitude)
    }

    #[must_use]
    pub fn amenity(mut self, amenity_id: AmenityId) -> Self {
        if !self.amenity_ids.contains(&amenity_id) {
            self.amenity_ids.push(amenity_id);
        }
        self
    }

    /// Consume the builder and return a [`Place`].
    ///
    /// # Errors
    ///
    /// Returns [`HbnbError::Validation`] if `city_id`, `user_id` or `name`
    /// is missing, checked in that order.
    pub fn build(self) -> Result<Place, HbnbError> {
        let city_id = self.city_id.ok_or(ValidationError::MissingField("city_id"))?;
        let user_id = self.user_id.ok_or(ValidationError::MissingField("user_id"))?;
        let name = self.name.ok_or(ValidationError::MissingField("name"))?;
        let ts = now();
        Ok(Place {
            id: self.id.unwrap_or_default(),
            created_at: ts,
            updated_at: ts,
            city_id,
            user_id,
            name,
            description: self.description,
            address: self.address,
            number_rooms: self.number_rooms,
            number_bathrooms: self.number_bathrooms,
            max_guest: self.max_guest,
            price_by_night: self.price_by_night,
            latitude: self.latitude,
            longitude: self.longitude,
            amenity_ids: self.amenity_ids,
        })
    }
}

/// Mutable fields of a [`Place`].
#[derive(Debug, Default, Deserialize)]
pub struct PlacePatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub address: Option<String>,
    pub number_rooms: Option<u32>,
    pub number_bathrooms: Option<u32>,
    pub max_guest: Option<u32>,
    pub price_by_night: Option<u32>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl PlacePatch {
    /// Overwrite the fields present in the patch.
    pub fn apply(self, place: &mut Place) {
        if let Some(name) = self.name {
            place.name = name;
        }
        if let Some(description) = self.description {
            place.description = Some(description);
        }
        if let Some(address) = self.address {
            place.address = Some(address);
        }
        if let Some(number_rooms) = self.number_rooms {
            place.number_rooms = number_rooms;
        }
        if let Some(number_bathrooms) = self.number_bathrooms {
            place.number_bathrooms = number_bathrooms;
        }
        if let Some(max_guest) = self.max_guest {
            place.max_guest = max_guest;
        }
        if let Some(price_by_night) = self.price_by_night {
            place.price_by_night = price_by_night;
        }
        if let Some(latitude) = self.latitude {
            place.latitude = Some(latitude);
        }
        if let Some(longitude) = self.longitude {
            place.longitude = Some(longitude);
        }
    }
}
