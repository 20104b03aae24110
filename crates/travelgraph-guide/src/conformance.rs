//! Opt-in conformance checking.
//!
//! The generator never validates its own output; this module is the
//! explicit, separate step that surfaces schema-inconsistent data. It
//! implements the one illustrative constraint the system ships with: two
//! designated fields of the same entity must not be textually identical.
//! Full SHACL evaluation is delegated to standard RDF tooling.

use serde::Serialize;
use std::fmt::Write as _;
use travelgraph_model::{Iri, StatementSet};

pub const FOAF_BASE: &str = "http://xmlns.com/foaf/0.1/";

/// Constraint: for every instance of `target_class` carrying both
/// properties, the two literal values must differ.
#[derive(Debug, Clone)]
pub struct DistinctFieldsConstraint {
    pub target_class: Iri,
    pub first: Iri,
    pub second: Iri,
    pub message: String,
}

impl DistinctFieldsConstraint {
    /// The shipped example: a person's first and last names must not be
    /// identical.
    pub fn person_name_default() -> Self {
        Self {
            target_class: Iri::new(format!("{FOAF_BASE}Person")),
            first: Iri::new(format!("{FOAF_BASE}firstName")),
            second: Iri::new(format!("{FOAF_BASE}lastName")),
            message: "First name and last name cannot be identical.".to_string(),
        }
    }

    pub fn check(&self, graph: &StatementSet) -> ConformanceReport {
        let mut violations = Vec::new();

        let focus_nodes: Vec<&Iri> = graph
            .iter()
            .filter(|s| s.is_type_assertion() && s.object.as_node() == Some(&self.target_class))
            .map(|s| &s.subject)
            .collect();

        for focus in focus_nodes {
            let firsts = literal_values(graph, focus, &self.first);
            let seconds = literal_values(graph, focus, &self.second);
            // Entities missing either field cannot violate the constraint.
            for first_value in &firsts {
                for second_value in &seconds {
                    if first_value == second_value {
                        violations.push(Violation {
                            focus: focus.to_string(),
                            first_value: first_value.clone(),
                            second_value: second_value.clone(),
                            message: self.message.clone(),
                        });
                    }
                }
            }
        }

        ConformanceReport {
            conforms: violations.is_empty(),
            violations,
        }
    }
}

fn literal_values(graph: &StatementSet, subject: &Iri, predicate: &Iri) -> Vec<String> {
    graph
        .iter()
        .filter(|s| s.subject == *subject && s.predicate == *predicate)
        .filter_map(|s| s.object.as_literal().map(|l| l.lexical.clone()))
        .collect()
}

/// Machine-readable violation; `ConformanceReport::text` renders the
/// human-readable form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    pub focus: String,
    pub first_value: String,
    pub second_value: String,
    pub message: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ConformanceReport {
    pub conforms: bool,
    pub violations: Vec<Violation>,
}

impl ConformanceReport {
    pub fn text(&self) -> String {
        if self.conforms {
            return "Conforms: no violations.".to_string();
        }
        let mut out = format!("Does not conform: {} violation(s).\n", self.violations.len());
        for violation in &self.violations {
            let _ = writeln!(
                out,
                "- {}: {} ({:?} / {:?})",
                violation.focus, violation.message, violation.first_value, violation.second_value
            );
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use travelgraph_model::ns;
    use travelgraph_model::{Literal, Statement};

    fn person(graph: &mut StatementSet, id: &str, first: Option<&str>, last: Option<&str>) {
        let iri = Iri::new(format!("http://example.com/data#{id}"));
        graph.add(Statement::new(
            iri.clone(),
            Iri::new(ns::RDF_TYPE),
            Iri::new(format!("{FOAF_BASE}Person")),
        ));
        if let Some(name) = first {
            graph.add(Statement::new(
                iri.clone(),
                Iri::new(format!("{FOAF_BASE}firstName")),
                Literal::plain(name),
            ));
        }
        if let Some(name) = last {
            graph.add(Statement::new(
                iri,
                Iri::new(format!("{FOAF_BASE}lastName")),
                Literal::plain(name),
            ));
        }
    }

    #[test]
    fn conforming_data_passes() {
        let mut graph = StatementSet::new();
        person(&mut graph, "johnDoe", Some("John"), Some("Doe"));
        person(&mut graph, "janeSmith", Some("Jane"), Some("Smith"));

        let report = DistinctFieldsConstraint::person_name_default().check(&graph);
        assert!(report.conforms);
        assert!(report.violations.is_empty());
        assert!(report.text().contains("Conforms"));
    }

    #[test]
    fn identical_fields_are_flagged() {
        let mut graph = StatementSet::new();
        person(&mut graph, "aliceAlice", Some("Alice"), Some("Alice"));
        person(&mut graph, "bobBob", Some("Bob"), Some("Bob"));
        person(&mut graph, "johnDoe", Some("John"), Some("Doe"));

        let report = DistinctFieldsConstraint::person_name_default().check(&graph);
        assert!(!report.conforms);
        assert_eq!(report.violations.len(), 2);
        assert!(report
            .violations
            .iter()
            .any(|v| v.focus.ends_with("aliceAlice")));
        assert!(report.text().contains("2 violation(s)"));
    }

    #[test]
    fn missing_fields_do_not_trigger_the_constraint() {
        let mut graph = StatementSet::new();
        person(&mut graph, "charlieBrown", Some("Charlie"), None);

        let report = DistinctFieldsConstraint::person_name_default().check(&graph);
        assert!(report.conforms);
    }
}
