#![deny(missing_debug_implementations)]
#![deny(rustdoc::broken_intra_doc_links)]
#![cfg_attr(test, deny(warnings))]

//! # geotracker-entities
//!
//! Reusable, agnostic domain entities for the geotracker page.
//!
//! The entities only contain generic functionality that does not reveal any
//! browser or widget specific details.

pub mod geo;
pub mod location;
pub mod place;
