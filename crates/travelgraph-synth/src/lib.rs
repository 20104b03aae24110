//! Synthetic travel-footprint generators.
//!
//! Produces the pseudo-random digital footprint of a hypothetical traveler
//! as RDF statements, split into seven event categories (notifications,
//! messages, bookings, browsing history, calendar events, social media,
//! local search), plus the reified travel ontology and a fixture set of
//! named individuals.
//!
//! Design rules shared by every generator:
//!
//! - vocabulary terms come exclusively from [`vocab::Vocabulary`]; only the
//!   documented numeric-id ranges are free draws
//! - all randomness flows through an explicit [`rng::XorShift64`] handle, so
//!   a seed reproduces a run byte for byte
//! - the wall clock is never read; callers inject the current date through
//!   [`config::GeneratorConfig`]
//! - optional enrichments are emitted as complete sub-groups or not at all

pub mod config;
pub mod events;
pub mod generator;
pub mod instances;
pub mod location;
pub mod prob;
pub mod rng;
pub mod schema;
pub mod vocab;

pub use config::{GeneratorConfig, LocalSearchPolicy};
pub use generator::FootprintGenerator;
pub use location::{pick_location, LocationRef, LocationTier};
pub use rng::XorShift64;
pub use vocab::Vocabulary;
