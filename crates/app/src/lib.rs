//! # hbnb-app
//!
//! Application layer: use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   one repository per kind (`StateRepository`, `CityRepository`,
//!   `AmenityRepository`, `UserRepository`, `PlaceRepository`,
//!   `ReviewRepository`)
//! - Define **driving/inbound ports** as use-case structs:
//!   one service per kind, plus `SearchService` for the composite place search
//! - Enforce relationship rules: a referenced parent must exist, and
//!   relationship views are recomputed on every call
//!
//! ## Dependency rule
//! Depends on `hbnb-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
