//! Travel-guide ontology (boundary adapter + read path).
//!
//! This crate sits at the interop boundary:
//!
//! - It builds the base travel ontology (cities, countries, continents,
//!   places of interest) and persists it as Turtle.
//! - It populates the graph from a federated SPARQL endpoint (untrusted;
//!   failures are logged and folded into absent results).
//! - It answers the fixed read-only query shapes against the loaded graph.
//! - It runs the single illustrative conformance check.
//!
//! SPARQL language semantics and full SHACL validation stay with standard
//! RDF tooling; nothing here plans or caches queries.

pub mod conformance;
pub mod ingest;
pub mod ontology;
pub mod query;
pub mod sparql;

pub use conformance::{ConformanceReport, DistinctFieldsConstraint, Violation};
pub use ontology::OntologyBuilder;
pub use query::TravelGuideQuery;
pub use sparql::{SparqlExecutor, SparqlResults};
