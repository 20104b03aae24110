//! Read-only query shapes over a loaded travel-guide graph.
//!
//! No caching and no planning: each call scans the full in-memory graph.

use serde::Serialize;
use std::path::Path;
use travelgraph_model::ns;
use travelgraph_model::{Iri, Statement, StatementSet, Term};

use crate::ontology::OntologyBuilder;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NamedRecord {
    pub iri: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CityDetails {
    pub name: String,
    pub country: Option<NamedRecord>,
    pub capital: Option<NamedRecord>,
    pub continent: Option<NamedRecord>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PoiRecord {
    pub iri: String,
    pub name: String,
    pub description: Option<String>,
    pub category: Option<String>,
}

pub struct TravelGuideQuery {
    graph: StatementSet,
}

impl TravelGuideQuery {
    pub fn new(graph: StatementSet) -> Self {
        Self { graph }
    }

    /// Load a saved graph (missing or malformed files fall back to the base
    /// ontology, which simply answers every query with nothing).
    pub fn from_file(path: impl AsRef<Path>) -> Self {
        Self::new(OntologyBuilder::load_or_create(path.as_ref()).into_graph())
    }

    pub fn graph(&self) -> &StatementSet {
        &self.graph
    }

    // ------------------------------------------------------------------
    // scan helpers
    // ------------------------------------------------------------------

    fn statements(&self) -> impl Iterator<Item = &Statement> {
        self.graph.iter()
    }

    fn objects_of<'a>(&'a self, subject: &'a Iri, predicate: &'a Iri) -> impl Iterator<Item = &'a Term> {
        self.statements()
            .filter(move |s| s.subject == *subject && s.predicate == *predicate)
            .map(|s| &s.object)
    }

    fn node_object(&self, subject: &Iri, predicate: &Iri) -> Option<Iri> {
        self.objects_of(subject, predicate)
            .find_map(|t| t.as_node().cloned())
    }

    fn literal_object(&self, subject: &Iri, predicate: &Iri) -> Option<String> {
        self.objects_of(subject, predicate)
            .find_map(|t| t.as_literal().map(|l| l.lexical.clone()))
    }

    fn label_of(&self, subject: &Iri) -> Option<String> {
        self.literal_object(subject, &Iri::new(ns::RDFS_LABEL))
    }

    fn instances_of(&self, class: &Iri) -> Vec<Iri> {
        self.statements()
            .filter(|s| s.is_type_assertion() && s.object.as_node() == Some(class))
            .map(|s| s.subject.clone())
            .collect()
    }

    fn named(&self, iri: &Iri) -> Option<NamedRecord> {
        Some(NamedRecord {
            iri: iri.to_string(),
            name: self.label_of(iri)?,
        })
    }

    // ------------------------------------------------------------------
    // query shapes
    // ------------------------------------------------------------------

    /// Every city in the graph, with its label.
    pub fn all_cities(&self) -> Vec<NamedRecord> {
        self.instances_of(&Iri::travel("City"))
            .iter()
            .filter_map(|city| self.named(city))
            .collect()
    }

    /// A city's country, the country's capital and continent.
    pub fn city_details(&self, city_name: &str) -> Option<CityDetails> {
        let city = Iri::travel(city_name);
        let name = self.label_of(&city)?;

        let country = self.node_object(&city, &Iri::travel("locatedIn"));
        let capital = country
            .as_ref()
            .and_then(|c| self.node_object(c, &Iri::travel("hasCapital")));
        let continent = country
            .as_ref()
            .and_then(|c| self.node_object(c, &Iri::travel("locatedInContinent")));

        Some(CityDetails {
            name,
            country: country.as_ref().and_then(|iri| self.named(iri)),
            capital: capital.as_ref().and_then(|iri| self.named(iri)),
            continent: continent.as_ref().and_then(|iri| self.named(iri)),
        })
    }

    /// Points of interest attached to a city.
    pub fn pois_for_city(&self, city_name: &str) -> Vec<PoiRecord> {
        let city = Iri::travel(city_name);
        self.objects_of(&city, &Iri::travel("hasPlaceOfInterest"))
            .filter_map(|t| t.as_node())
            .filter_map(|poi| self.poi_record(poi))
            .collect()
    }

    /// Names of the cities located in a country.
    pub fn cities_in_country(&self, country_name: &str) -> Vec<String> {
        let country = Iri::travel(country_name);
        let located_in = Iri::travel("locatedIn");
        self.statements()
            .filter(|s| s.predicate == located_in && s.object.as_node() == Some(&country))
            .filter_map(|s| self.label_of(&s.subject))
            .collect()
    }

    /// Points of interest whose category contains the keyword,
    /// case-insensitively. An empty keyword matches every categorized POI.
    pub fn search_pois_by_category(&self, keyword: &str) -> Vec<PoiRecord> {
        let keyword = keyword.to_lowercase();
        self.instances_of(&Iri::travel("PlaceOfInterest"))
            .iter()
            .filter_map(|poi| self.poi_record(poi))
            .filter(|record| {
                record
                    .category
                    .as_deref()
                    .unwrap_or_default()
                    .to_lowercase()
                    .contains(&keyword)
            })
            .collect()
    }

    fn poi_record(&self, poi: &Iri) -> Option<PoiRecord> {
        Some(PoiRecord {
            iri: poi.to_string(),
            name: self.label_of(poi)?,
            description: self.literal_object(poi, &Iri::new(ns::RDFS_COMMENT)),
            category: self.literal_object(poi, &Iri::travel("category")),
        })
    }
}
