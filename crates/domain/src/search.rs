//! Place search: the staged filter pipeline behind `POST /places_search`.
//!
//! The pipeline runs in four stages, each with its own type:
//!
//! 1. [`PlaceSearch`] (the request) is turned into a [`SearchPlan`].
//! 2. A scoped plan resolves states and cities into [`CandidateCities`].
//! 3. The places of those cities form [`CandidatePlaces`].
//! 4. [`RequiredAmenities`] drops every candidate missing one of them.
//!
//! Resolution (stages 2–4) needs the store and lives in the application
//! layer; this module only holds the set logic.
//!
//! Known quirk: a request naming amenities but neither states nor cities
//! plans to [`SearchPlan::Unscoped`] and yields no places at all, not "every
//! place with those amenities". This mirrors the historical API and is kept
//! until the intended behavior is confirmed.

use std::collections::HashSet;

use serde::Deserialize;

use crate::id::{AmenityId, CityId, Identifier, PlaceId, StateId};
use crate::place::Place;

/// Search request body. Every filter is optional.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct PlaceSearch {
    pub states: Vec<String>,
    pub cities: Vec<String>,
    pub amenities: Vec<String>,
}

/// What a search request asks for, decided before touching the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchPlan {
    /// No filter carries a value: return every place.
    AllPlaces,
    /// Amenities were given without any state or city: return nothing.
    Unscoped,
    /// Resolve the scope, then filter by amenities.
    Scoped(SearchScope),
}

/// Parsed identifiers of a scoped search.
///
/// Strings that are not valid identifiers are dropped here; they could never
/// resolve in the store, and unresolved identifiers are skipped rather than
/// reported.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchScope {
    pub states: Vec<StateId>,
    pub cities: Vec<CityId>,
    pub amenities: Vec<AmenityId>,
}

impl PlaceSearch {
    /// Whether every filter is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.states.is_empty() && self.cities.is_empty() && self.amenities.is_empty()
    }

    /// Decide the plan for this request.
    ///
    /// Emptiness is judged on the raw arrays, so `{"cities": ["bad-id"]}` is
    /// a scoped search that resolves to nothing.
    #[must_use]
    pub fn plan(self) -> SearchPlan {
        if self.is_empty() {
            return SearchPlan::AllPlaces;
        }
        if self.states.is_empty() && self.cities.is_empty() {
            return SearchPlan::Unscoped;
        }
        SearchPlan::Scoped(SearchScope {
            states: parse_ids(&self.states),
            cities: parse_ids(&self.cities),
            amenities: parse_ids(&self.amenities),
        })
    }
}

/// Ids that do not parse can never resolve, so they are dropped here.
fn parse_ids<T: Identifier>(raw: &[String]) -> Vec<T> {
    raw.iter().filter_map(|s| T::resolve(s).ok()).collect()
}

/// Stage 2 output: the union of directly named cities and the cities of
/// every named state, without duplicates.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CandidateCities {
    ids: Vec<CityId>,
}

impl CandidateCities {
    /// Add a city unless it is already a candidate.
    pub fn insert(&mut self, id: CityId) {
        if !self.ids.contains(&id) {
            self.ids.push(id);
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = CityId> + '_ {
        self.ids.iter().copied()
    }
}

impl Extend<CityId> for CandidateCities {
    fn extend<I: IntoIterator<Item = CityId>>(&mut self, iter: I) {
        for id in iter {
            self.insert(id);
        }
    }
}

/// Stage 3 output: places of the candidate cities, without duplicates.
#[derive(Debug, Default, Clone)]
pub struct CandidatePlaces {
    seen: HashSet<PlaceId>,
    places: Vec<Place>,
}

impl CandidatePlaces {
    /// Add a place unless it is already a candidate.
    pub fn insert(&mut self, place: Place) {
        if self.seen.insert(place.id) {
            self.places.push(place);
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.places.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.places.is_empty()
    }

    /// Stage 4: keep only the places that carry every required amenity.
    #[must_use]
    pub fn retain_admitted(self, required: &RequiredAmenities) -> Vec<Place> {
        self.places
            .into_iter()
            .filter(|place| required.admits(place))
            .collect()
    }
}

impl Extend<Place> for CandidatePlaces {
    fn extend<I: IntoIterator<Item = Place>>(&mut self, iter: I) {
        for place in iter {
            self.insert(place);
        }
    }
}

/// Amenities that resolved in the store. Unresolved ids never make it here,
/// so they never eliminate a place.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RequiredAmenities {
    ids: Vec<AmenityId>,
}

impl RequiredAmenities {
    #[must_use]
    pub fn new(ids: Vec<AmenityId>) -> Self {
        Self { ids }
    }

    /// Whether the place carries all required amenities.
    #[must_use]
    pub fn admits(&self, place: &Place) -> bool {
        self.ids.iter().all(|id| place.has_amenity(*id))
    }
}
