//! Base travel ontology and Turtle persistence.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use travelgraph_model::ns;
use travelgraph_model::turtle;
use travelgraph_model::{Iri, Literal, Statement, StatementSet};

/// Builds and persists the travel-guide graph.
///
/// Loading is forgiving: a missing or unparseable file means "start from the
/// base ontology", never a fatal error.
pub struct OntologyBuilder {
    graph: StatementSet,
    path: Option<PathBuf>,
}

impl OntologyBuilder {
    /// Fresh builder holding only the base ontology.
    pub fn new() -> Self {
        Self {
            graph: base_ontology(),
            path: None,
        }
    }

    /// Load a previously saved graph, falling back to the base ontology.
    pub fn load_or_create(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let graph = match fs::read_to_string(&path) {
            Ok(text) => match turtle::read_turtle_str(&text) {
                Ok(statements) => statements.into_iter().collect(),
                Err(err) => {
                    tracing::warn!(
                        path = %path.display(),
                        error = %err,
                        "failed to parse saved graph, starting from base ontology"
                    );
                    base_ontology()
                }
            },
            Err(err) => {
                tracing::debug!(
                    path = %path.display(),
                    error = %err,
                    "no saved graph, starting from base ontology"
                );
                base_ontology()
            }
        };
        Self {
            graph,
            path: Some(path),
        }
    }

    pub fn graph(&self) -> &StatementSet {
        &self.graph
    }

    pub fn graph_mut(&mut self) -> &mut StatementSet {
        &mut self.graph
    }

    /// Take the graph out of the builder.
    pub fn into_graph(self) -> StatementSet {
        self.graph
    }

    /// Serialize the graph to Turtle at the given path (or the path the
    /// builder was loaded from).
    pub fn save(&self, path: Option<&Path>) -> Result<()> {
        let target = path
            .or(self.path.as_deref())
            .context("no filepath specified")?;
        let text = turtle::to_turtle_string(self.graph.as_slice());
        fs::write(target, text)
            .with_context(|| format!("failed to write {}", target.display()))?;
        Ok(())
    }

    /// IRI of a name in the travel namespace.
    pub fn uri(name: &str) -> Iri {
        Iri::travel(name)
    }
}

impl Default for OntologyBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// The base schema: four classes and five properties, all labeled.
pub fn base_ontology() -> StatementSet {
    let mut graph = StatementSet::new();

    for class in ["City", "Country", "Continent", "PlaceOfInterest"] {
        let class_iri = Iri::travel(class);
        graph.add(Statement::new(
            class_iri.clone(),
            Iri::new(ns::RDF_TYPE),
            Iri::new(ns::RDFS_CLASS),
        ));
        graph.add(Statement::new(
            class_iri,
            Iri::new(ns::RDFS_LABEL),
            Literal::lang(class, "en"),
        ));
    }

    let properties: [(&str, &str, &str, &str); 5] = [
        ("locatedIn", "located in", "City", "Country"),
        ("hasCapital", "has capital", "Country", "City"),
        (
            "locatedInContinent",
            "located in continent",
            "Country",
            "Continent",
        ),
        (
            "hasPlaceOfInterest",
            "has place of interest",
            "City",
            "PlaceOfInterest",
        ),
        ("category", "category", "PlaceOfInterest", ""),
    ];
    for (name, label, domain, range) in properties {
        let prop_iri = Iri::travel(name);
        graph.add(Statement::new(
            prop_iri.clone(),
            Iri::new(ns::RDF_TYPE),
            Iri::new(ns::RDF_PROPERTY),
        ));
        graph.add(Statement::new(
            prop_iri.clone(),
            Iri::new(ns::RDFS_LABEL),
            Literal::lang(label, "en"),
        ));
        graph.add(Statement::new(
            prop_iri.clone(),
            Iri::new(ns::RDFS_DOMAIN),
            Iri::travel(domain),
        ));
        let range_iri = if range.is_empty() {
            // `category` ranges over plain literals.
            Iri::new(ns::RDFS_LITERAL)
        } else {
            Iri::travel(range)
        };
        graph.add(Statement::new(prop_iri, Iri::new(ns::RDFS_RANGE), range_iri));
    }

    graph
}
