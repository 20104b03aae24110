//! Binding processors: turn federated query results into graph statements.
//!
//! Two fixed query shapes per city: the city/country/capital/continent
//! chain, and the filtered points-of-interest sweep. Deduplication is the
//! graph buffer's job, so re-processing a city is harmless.

use travelgraph_model::ns;
use travelgraph_model::{Iri, Literal, Statement, StatementSet};

use crate::sparql::{bound, SparqlExecutor, SparqlResults};

fn add_typed_labeled(graph: &mut StatementSet, iri: &Iri, class: &str, label: &str) {
    graph.add(Statement::new(
        iri.clone(),
        Iri::new(ns::RDF_TYPE),
        Iri::travel(class),
    ));
    graph.add(Statement::new(
        iri.clone(),
        Iri::new(ns::RDFS_LABEL),
        Literal::lang(label, "en"),
    ));
}

/// Apply city-information bindings: city, its country, the country's
/// capital and continent.
pub fn apply_city_bindings(results: &SparqlResults, graph: &mut StatementSet) {
    for row in &results.results.bindings {
        let Some(city_name) = bound(row, "cityName") else {
            continue;
        };
        let city_iri = Iri::travel(city_name);
        add_typed_labeled(graph, &city_iri, "City", city_name);

        let Some(country_name) = bound(row, "countryName") else {
            continue;
        };
        let country_iri = Iri::travel(country_name);
        graph.add(Statement::new(
            city_iri,
            Iri::travel("locatedIn"),
            country_iri.clone(),
        ));
        add_typed_labeled(graph, &country_iri, "Country", country_name);

        if let Some(capital_name) = bound(row, "capitalName") {
            let capital_iri = Iri::travel(capital_name);
            graph.add(Statement::new(
                country_iri.clone(),
                Iri::travel("hasCapital"),
                capital_iri.clone(),
            ));
            add_typed_labeled(graph, &capital_iri, "City", capital_name);
        }
        if let Some(continent_name) = bound(row, "continentName") {
            let continent_iri = Iri::travel(continent_name);
            graph.add(Statement::new(
                country_iri,
                Iri::travel("locatedInContinent"),
                continent_iri.clone(),
            ));
            add_typed_labeled(graph, &continent_iri, "Continent", continent_name);
        }
    }
}

/// Apply points-of-interest bindings for a city.
pub fn apply_poi_bindings(results: &SparqlResults, graph: &mut StatementSet) {
    for row in &results.results.bindings {
        let (Some(city_name), Some(poi_name)) = (bound(row, "cityName"), bound(row, "poiName"))
        else {
            continue;
        };
        let city_iri = Iri::travel(city_name);
        let poi_iri = Iri::travel(poi_name);

        add_typed_labeled(graph, &poi_iri, "PlaceOfInterest", poi_name);
        graph.add(Statement::new(
            city_iri.clone(),
            Iri::travel("hasPlaceOfInterest"),
            poi_iri.clone(),
        ));
        graph.add(Statement::new(
            poi_iri.clone(),
            Iri::travel("locatedIn"),
            city_iri,
        ));

        if let Some(description) = bound(row, "poiDescription") {
            graph.add(Statement::new(
                poi_iri.clone(),
                Iri::new(ns::RDFS_COMMENT),
                Literal::lang(description, "en"),
            ));
        }
        if let Some(poi_type) = bound(row, "instanceOfLabel") {
            graph.add(Statement::new(
                poi_iri.clone(),
                Iri::travel("category"),
                Literal::lang(poi_type, "en"),
            ));
        }
    }
}

/// City-information query (one row).
pub fn city_info_query(city_id: &str) -> String {
    format!(
        r#"SELECT ?cityName ?countryName ?capitalName ?continentName
WHERE {{
  BIND({city_id} AS ?city)
  ?city rdfs:label ?cityName .
  ?city wdt:P17 ?country .
  ?country rdfs:label ?countryName .
  OPTIONAL {{ ?country wdt:P36 ?capital .
             ?capital rdfs:label ?capitalName .
             FILTER (LANG(?capitalName) = "en") }}
  ?country wdt:P30 ?continent .
  ?continent rdfs:label ?continentName .
  FILTER (LANG(?cityName) = "en")
  FILTER (LANG(?countryName) = "en")
  FILTER (LANG(?continentName) = "en")
}}
LIMIT 1"#
    )
}

/// Points-of-interest query: landmark-ish instances located in the city.
pub fn poi_query(city_id: &str) -> String {
    format!(
        r#"SELECT DISTINCT ?cityName ?poiName ?poiDescription ?instanceOfLabel
WHERE {{
  BIND({city_id} AS ?city)
  ?city rdfs:label ?cityName .
  ?poi wdt:P131* ?city .
  ?poi wdt:P31 ?instanceOf .
  ?instanceOf rdfs:label ?instanceOfLabel .
  FILTER (LANG(?instanceOfLabel) = "en" &&
          (CONTAINS(LCASE(?instanceOfLabel), "landmark") ||
           CONTAINS(LCASE(?instanceOfLabel), "museum") ||
           CONTAINS(LCASE(?instanceOfLabel), "palace") ||
           CONTAINS(LCASE(?instanceOfLabel), "temple") ||
           CONTAINS(LCASE(?instanceOfLabel), "histor") ||
           CONTAINS(LCASE(?instanceOfLabel), "memorial") ||
           CONTAINS(LCASE(?instanceOfLabel), "park") ||
           CONTAINS(LCASE(?instanceOfLabel), "garden") ||
           CONTAINS(LCASE(?instanceOfLabel), "monument")))
  ?poi rdfs:label ?poiName .
  OPTIONAL {{ ?poi schema:description ?poiDescription . FILTER (LANG(?poiDescription) = "en") }}
  FILTER (LANG(?cityName) = "en")
  FILTER (LANG(?poiName) = "en")
}}
LIMIT 50"#
    )
}

/// Fetch and apply both query shapes for one city. A failed query leaves
/// the graph as it was.
pub fn process_city(city_id: &str, executor: &SparqlExecutor, graph: &mut StatementSet) {
    tracing::info!(city_id, "processing city");

    if let Some(results) = executor.run_query(&city_info_query(city_id)) {
        apply_city_bindings(&results, graph);
    }
    if let Some(results) = executor.run_query(&poi_query(city_id)) {
        apply_poi_bindings(&results, graph);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use travelgraph_model::Term;

    fn results(json: &str) -> SparqlResults {
        serde_json::from_str(json).expect("fixture parses")
    }

    const CITY_ROW: &str = r#"{
        "results": {"bindings": [{
            "cityName": {"type": "literal", "xml:lang": "en", "value": "Bengaluru"},
            "countryName": {"type": "literal", "xml:lang": "en", "value": "India"},
            "capitalName": {"type": "literal", "xml:lang": "en", "value": "New Delhi"},
            "continentName": {"type": "literal", "xml:lang": "en", "value": "Asia"}
        }]}
    }"#;

    #[test]
    fn city_bindings_build_the_full_chain() {
        let mut graph = StatementSet::new();
        apply_city_bindings(&results(CITY_ROW), &mut graph);

        assert!(graph.contains(&Statement::new(
            Iri::travel("Bengaluru"),
            Iri::travel("locatedIn"),
            Iri::travel("India"),
        )));
        assert!(graph.contains(&Statement::new(
            Iri::travel("India"),
            Iri::travel("hasCapital"),
            Iri::travel("New_Delhi"),
        )));
        assert!(graph.contains(&Statement::new(
            Iri::travel("India"),
            Iri::travel("locatedInContinent"),
            Iri::travel("Asia"),
        )));
    }

    #[test]
    fn reprocessing_does_not_duplicate() {
        let mut graph = StatementSet::new();
        apply_city_bindings(&results(CITY_ROW), &mut graph);
        let first = graph.len();
        apply_city_bindings(&results(CITY_ROW), &mut graph);
        assert_eq!(graph.len(), first);
    }

    #[test]
    fn poi_bindings_attach_description_and_category() {
        let poi_row = r#"{
            "results": {"bindings": [{
                "cityName": {"type": "literal", "value": "Bengaluru"},
                "poiName": {"type": "literal", "value": "Lalbagh Botanical Garden"},
                "poiDescription": {"type": "literal", "value": "botanical garden in Bengaluru"},
                "instanceOfLabel": {"type": "literal", "value": "botanical garden"}
            }]}
        }"#;
        let mut graph = StatementSet::new();
        apply_poi_bindings(&results(poi_row), &mut graph);

        let poi = Iri::travel("Lalbagh Botanical Garden");
        assert!(graph.contains(&Statement::new(
            Iri::travel("Bengaluru"),
            Iri::travel("hasPlaceOfInterest"),
            poi.clone(),
        )));
        let category = graph
            .iter()
            .find(|s| s.subject == poi && s.predicate == Iri::travel("category"))
            .expect("category statement");
        match &category.object {
            Term::Literal(lit) => assert_eq!(lit.lexical, "botanical garden"),
            Term::Node(_) => panic!("category must be a literal"),
        }
    }

    #[test]
    fn rows_without_a_city_are_skipped() {
        let row = r#"{"results": {"bindings": [{
            "poiName": {"type": "literal", "value": "Orphan"}
        }]}}"#;
        let mut graph = StatementSet::new();
        apply_poi_bindings(&results(row), &mut graph);
        assert!(graph.is_empty());
    }

    #[test]
    fn query_text_binds_the_city_id() {
        let q = city_info_query("wd:Q1355");
        assert!(q.contains("BIND(wd:Q1355 AS ?city)"));
        assert!(q.contains("LIMIT 1"));
        assert!(poi_query("wd:Q1355").contains("LIMIT 50"));
    }
}
