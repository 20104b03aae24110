//! Travelgraph statement model (canonical in-memory representation).
//!
//! This crate defines the single triple model every other crate works
//! against:
//!
//! - `Iri` / `Literal` / `Term` / `Statement` (the canonical model)
//! - `CategoryStore` (ordered per-category statement collections)
//! - `StatementSet` (insertion-ordered, deduplicating graph buffer)
//! - Turtle projection (`turtle::write_turtle` / `turtle::read_turtle`)
//!
//! There is exactly one canonical model; the lightweight tuple view
//! (`Statement::as_tuple`) and the Turtle serialization are projections of
//! it, not parallel representations.

pub mod ns;
pub mod store;
pub mod term;
pub mod turtle;

pub use store::{merge, Category, CategoryStore, StatementSet, StoreError};
pub use term::{Datatype, Iri, Literal, Statement, Term};

/// Base IRI of the `kb:` namespace every generated individual lives under.
pub const KB_BASE: &str = "http://example.org/knowledgebase/";

/// Base IRI of the `travel:` namespace used by the travel-guide ontology.
pub const TRAVEL_BASE: &str = "http://example.org/travel/";
