//! State: a top-level region that owns cities.

use serde::{Deserialize, Serialize};

use crate::error::{HbnbError, ValidationError};
use crate::id::StateId;
use crate::time::{Timestamp, now};

/// A geographic state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct State {
    pub id: StateId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub name: String,
}

impl State {
    /// Create a builder for constructing a [`State`].
    #[must_use]
    pub fn builder() -> StateBuilder {
        StateBuilder::default()
    }
}

/// Step-by-step builder for [`State`].
#[derive(Debug, Default)]
pub struct StateBuilder {
    id: Option<StateId>,
    name: Option<String>,
}

impl StateBuilder {
    #[must_use]
    pub fn id(mut self, id: StateId) -> Self {
        self.id = Some(id);
        self
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Consume the builder and return a [`State`] stamped with the current time.
    ///
    /// # Errors
    ///
    /// Returns [`HbnbError::Validation`] if `name` is missing.
    pub fn build(self) -> Result<State, HbnbError> {
        let name = self.name.ok_or(ValidationError::MissingField("name"))?;
        let ts = now();
        Ok(State {
            id: self.id.unwrap_or_default(),
            created_at: ts,
            updated_at: ts,
            name,
        })
    }
}

/// Mutable fields of a [`State`].
#[derive(Debug, Default, Deserialize)]
pub struct StatePatch {
    pub name: Option<String>,
}

impl StatePatch {
    /// Overwrite the fields present in the patch.
    pub fn apply(self, state: &mut State) {
        if let Some(name) = self.name {
            state.name = name;
        }
    }
}
