//! Amenity: a feature a place may offer (wifi, pool, …).

use serde::{Deserialize, Serialize};

use crate::error::{HbnbError, ValidationError};
use crate::id::AmenityId;
use crate::time::{Timestamp, now};

/// An amenity, linked to places many-to-many.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Amenity {
    pub id: AmenityId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub name: String,
}

impl Amenity {
    /// Create a builder for constructing an [`Amenity`].
    #[must_use]
    pub fn builder() -> AmenityBuilder {
        AmenityBuilder::default()
    }
}

/// Step-by-step builder for [`Amenity`].
#[derive(Debug, Default)]
pub struct AmenityBuilder {
    id: Option<AmenityId>,
    name: Option<String>,
}

impl AmenityBuilder {
    #[must_use]
    pub fn id(mut self, id: AmenityId) -> Self {
        self.id = Some(id);
        self
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Consume the builder and return an [`Amenity`].
    ///
    /// # Errors
    ///
    /// Returns [`HbnbError::Validation`] if `name` is missing.
    pub fn build(self) -> Result<Amenity, HbnbError> {
        let name = self.name.ok_or(ValidationError::MissingField("name"))?;
        let ts = now();
        Ok(Amenity {
            id: self.id.unwrap_or_default(),
            created_at: ts,
            updated_at: ts,
            name,
        })
    }
}

/// Mutable fields of an [`Amenity`].
#[derive(Debug, Default, Deserialize)]
pub struct AmenityPatch {
    pub name: Option<String>,
}

impl AmenityPatch {
    /// Overwrite the fields present in the patch.
    pub fn apply(self, amenity: &mut Amenity) {
        if let Some(name) = self.name {
            amenity.name = name;
        }
    }
}
