//! City: belongs to exactly one state and owns places.

use serde::{Deserialize, Serialize};

use crate::error::{HbnbError, ValidationError};
use crate::id::{CityId, StateId};
use crate::time::{Timestamp, now};

/// A city inside a [`State`](crate::state::State).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct City {
    pub id: CityId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub state_id: StateId,
    pub name: String,
}

impl City {
    /// Create a builder for constructing a [`City`].
    #[must_use]
    pub fn builder() -> CityBuilder {
        CityBuilder::default()
    }
}

/// Step-by-step builder for [`City`].
#[derive(Debug, Default)]
pub struct CityBuilder {
    id: Option<CityId>,
    state_id: Option<StateId>,
    name: Option<String>,
}

impl CityBuilder {
    #[must_use]
    pub fn id(mut self, id: CityId) -> Self {
        self.id = Some(id);
        self
    }

    #[must_use]
    pub fn state_id(mut self, state_id: StateId) -> Self {
        self.state_id = Some(state_id);
        self
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Consume the builder and return a [`City`].
    ///
    /// # Errors
    ///
    /// Returns [`HbnbError::Validation`] if `state_id` or `name` is missing.
    pub fn build(self) -> Result<City, HbnbError> {
        let state_id = self.state_id.ok_or(ValidationError::MissingField("state_id"))?;
        let name = self.name.ok_or(ValidationError::MissingField("name"))?;
        let ts = now();
        Ok(City {
            id: self.id.unwrap_or_default(),
            created_at: ts,
            updated_at: ts,
            state_id,
            name,
        })
    }
}

/// Mutable fields of a [`City`]. `state_id` is fixed at creation.
#[derive(Debug, Default, Deserialize)]
pub struct CityPatch {
    pub name: Option<String>,
}

impl CityPatch {
    /// Overwrite the fields present in the patch.
    pub fn apply(self, city: &mut City) {
        if let Some(name) = self.name {
            city.name = name;
        }
    }
}
