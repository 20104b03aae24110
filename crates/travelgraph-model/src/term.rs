//! Canonical term and statement types.
//!
//! Every generated fact is an immutable `Statement`. Subjects and predicates
//! are always named (`Iri`); objects are either named individuals or typed
//! literals. Free-text values (search queries, labels) are always literal
//! *objects*; the model never places a literal in subject position.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::ns;

// ============================================================================
// IRIs
// ============================================================================

/// A named term (individual, class or property).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Iri(String);

impl Iri {
    pub fn new(iri: impl Into<String>) -> Self {
        Self(iri.into())
    }

    /// Mint an IRI under the `kb:` namespace.
    pub fn kb(suffix: &str) -> Self {
        Self(format!("{}{suffix}", crate::KB_BASE))
    }

    /// Mint an instance IRI: lowercased category prefix plus a
    /// disambiguating key, e.g. `kb:notification/notif_3`.
    ///
    /// Two calls with the same category and key always produce the same IRI;
    /// callers that want independent individuals must supply distinct keys.
    pub fn kb_instance(category: &str, key: &str) -> Self {
        Self::kb(&format!("{}/{}", slug(category).to_lowercase(), slug(key)))
    }

    /// Mint an IRI under the `travel:` namespace.
    pub fn travel(name: &str) -> Self {
        Self(format!("{}{}", crate::TRAVEL_BASE, slug(name)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Last path/fragment segment, e.g. `Bengaluru` for
    /// `kb:location/Bengaluru`.
    pub fn local_name(&self) -> &str {
        self.0.rsplit(['#', '/']).next().unwrap_or(&self.0)
    }
}

impl fmt::Display for Iri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifier-safe form of a vocabulary term: spaces, dots and dashes all
/// become underscores (`Booking.com` -> `Booking_com`, `The Ritz-Carlton` ->
/// `The_Ritz_Carlton`).
pub fn slug(name: &str) -> String {
    name.chars()
        .map(|c| if matches!(c, ' ' | '.' | '-') { '_' } else { c })
        .collect()
}

// ============================================================================
// Literals
// ============================================================================

/// Datatype tag carried by typed literals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Datatype {
    Date,
    DateTime,
    String,
}

impl Datatype {
    pub fn iri(self) -> &'static str {
        match self {
            Datatype::Date => ns::XSD_DATE,
            Datatype::DateTime => ns::XSD_DATE_TIME,
            Datatype::String => ns::XSD_STRING,
        }
    }

    pub fn from_iri(iri: &str) -> Option<Self> {
        match iri {
            ns::XSD_DATE => Some(Datatype::Date),
            ns::XSD_DATE_TIME => Some(Datatype::DateTime),
            ns::XSD_STRING => Some(Datatype::String),
            _ => None,
        }
    }
}

/// A literal value: lexical form plus an optional datatype or language tag.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Literal {
    pub lexical: String,
    pub datatype: Option<Datatype>,
    pub language: Option<String>,
}

impl Literal {
    pub fn plain(lexical: impl Into<String>) -> Self {
        Self {
            lexical: lexical.into(),
            datatype: None,
            language: None,
        }
    }

    pub fn typed(lexical: impl Into<String>, datatype: Datatype) -> Self {
        Self {
            lexical: lexical.into(),
            datatype: Some(datatype),
            language: None,
        }
    }

    pub fn lang(lexical: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            lexical: lexical.into(),
            datatype: None,
            language: Some(language.into()),
        }
    }
}

// ============================================================================
// Terms and statements
// ============================================================================

/// Object-position term.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Term {
    Node(Iri),
    Literal(Literal),
}

impl Term {
    pub fn as_node(&self) -> Option<&Iri> {
        match self {
            Term::Node(iri) => Some(iri),
            Term::Literal(_) => None,
        }
    }

    pub fn as_literal(&self) -> Option<&Literal> {
        match self {
            Term::Node(_) => None,
            Term::Literal(lit) => Some(lit),
        }
    }

    /// Lightweight display form used by the tuple projection.
    pub fn display_form(&self) -> &str {
        match self {
            Term::Node(iri) => iri.as_str(),
            Term::Literal(lit) => &lit.lexical,
        }
    }
}

impl From<Iri> for Term {
    fn from(iri: Iri) -> Self {
        Term::Node(iri)
    }
}

impl From<Literal> for Term {
    fn from(lit: Literal) -> Self {
        Term::Literal(lit)
    }
}

/// An immutable (subject, predicate, object) fact.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Statement {
    pub subject: Iri,
    pub predicate: Iri,
    pub object: Term,
}

impl Statement {
    pub fn new(subject: Iri, predicate: Iri, object: impl Into<Term>) -> Self {
        Self {
            subject,
            predicate,
            object: object.into(),
        }
    }

    /// `subject rdf:type class`.
    pub fn typed(subject: Iri, class: Iri) -> Self {
        Self::new(subject, Iri::new(ns::RDF_TYPE), class)
    }

    pub fn is_type_assertion(&self) -> bool {
        self.predicate.as_str() == ns::RDF_TYPE
    }

    /// Lightweight prototyping projection: three plain strings.
    pub fn as_tuple(&self) -> (String, String, String) {
        (
            self.subject.to_string(),
            self.predicate.to_string(),
            self.object.display_form().to_string(),
        )
    }
}
