//! # hbnb-domain
//!
//! Pure domain model for the hbnb rental listing API.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions, timestamps
//! - Define the six kinds: **States** own **Cities**, cities own **Places**,
//!   **Users** own places and write **Reviews**, places and **Amenities**
//!   are linked many-to-many
//! - Define per-kind **patch** records: the explicit allow-list of fields an
//!   update may touch
//! - Define the stage types of the **place search** pipeline
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod time;

pub mod amenity;
pub mod city;
pub mod place;
pub mod review;
pub mod search;
pub mod state;
pub mod stats;
pub mod user;
