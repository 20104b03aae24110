//! End-to-end tests for the footprint generator.

use chrono::NaiveDate;
use travelgraph_model::{merge, ns, Category, Iri, Statement, Term};
use travelgraph_synth::{FootprintGenerator, GeneratorConfig, LocalSearchPolicy, Vocabulary};

fn fixture_generator(seed: u64) -> FootprintGenerator {
    FootprintGenerator::new(GeneratorConfig::fixture(), seed)
}

fn statements_of(gen: &FootprintGenerator, category: Category) -> Vec<Statement> {
    gen.store()
        .get(category)
        .map(|s| s.to_vec())
        .unwrap_or_default()
}

// ============================================================================
// Well-formedness and coverage
// ============================================================================

#[test]
fn every_event_category_is_populated_under_the_fixture_config() {
    let gen = fixture_generator(17);
    for category in Category::EVENTS {
        let statements = statements_of(&gen, category);
        assert!(
            !statements.is_empty(),
            "category {category} is empty under the fixture config"
        );
    }
}

#[test]
fn statements_are_well_formed() {
    let gen = fixture_generator(23);
    for stmt in gen.all_statements() {
        assert!(!stmt.subject.as_str().is_empty());
        assert!(!stmt.predicate.as_str().is_empty());
        match &stmt.object {
            Term::Node(iri) => assert!(!iri.as_str().is_empty()),
            Term::Literal(lit) => assert!(!lit.lexical.is_empty()),
        }
    }
}

#[test]
fn event_counts_match_the_per_category_minimums() {
    let gen = fixture_generator(3);
    // Each event always emits its required group, so a category can never
    // hold fewer statements than events * required-group size.
    assert!(statements_of(&gen, Category::Notification).len() >= 30);
    assert!(statements_of(&gen, Category::Messages).len() >= 30);
    assert!(statements_of(&gen, Category::TravelApp).len() >= 61);
    assert!(statements_of(&gen, Category::BrowsingHistory).len() >= 10);
    assert!(statements_of(&gen, Category::CalendarEvents).len() >= 15);
    assert!(statements_of(&gen, Category::SocialMedia).len() >= 21);
    assert!(statements_of(&gen, Category::LocalSearch).len() >= 25);
}

#[test]
fn vocabulary_terms_are_never_invented() {
    let vocab = Vocabulary::default();
    let gen = fixture_generator(41);
    let airline_iris: Vec<String> = vocab
        .airlines
        .iter()
        .map(|a| Iri::kb_instance("airline", a).as_str().to_string())
        .collect();
    for stmt in gen.all_statements() {
        if stmt.predicate.local_name() == "onAirline" {
            let object = stmt.object.as_node().expect("airline is a node");
            assert!(airline_iris.contains(&object.as_str().to_string()));
        }
    }
}

// ============================================================================
// Determinism
// ============================================================================

#[test]
fn identical_seeds_reproduce_identical_sequences() {
    let a = fixture_generator(99).all_statements();
    let b = fixture_generator(99).all_statements();
    assert_eq!(a, b);
}

#[test]
fn different_seeds_diverge() {
    let a = fixture_generator(1).all_statements();
    let b = fixture_generator(2).all_statements();
    assert_ne!(a, b);
}

// ============================================================================
// Sampling
// ============================================================================

#[test]
fn oversized_sample_is_capped_at_category_size() {
    let mut gen = fixture_generator(7);
    let len = statements_of(&gen, Category::Notification).len();
    let sample = gen.random_sample("notification", len + 1000).expect("known category");
    assert_eq!(sample.len(), len);
}

#[test]
fn unknown_category_is_an_error_not_a_panic() {
    let mut gen = fixture_generator(7);
    let err = gen.random_sample("weather", 5).unwrap_err();
    assert!(err.to_string().contains("weather"));
}

#[test]
fn sample_statements_come_from_the_category() {
    let mut gen = fixture_generator(11);
    let population = statements_of(&gen, Category::SocialMedia);
    let sample = gen.random_sample("social_media", 5).expect("known category");
    assert_eq!(sample.len(), 5);
    for stmt in &sample {
        assert!(population.contains(stmt));
    }
}

// ============================================================================
// Merge
// ============================================================================

#[test]
fn merge_order_does_not_change_the_statement_set() {
    use std::collections::HashSet;
    let gen = fixture_generator(13);
    let a = statements_of(&gen, Category::Notification);
    let b = statements_of(&gen, Category::Messages);

    let ab = merge(b.clone(), Some(merge(a.clone(), None)));
    let ba = merge(a, Some(merge(b, None)));

    let ab_set: HashSet<Statement> = ab.into_iter().collect();
    let ba_set: HashSet<Statement> = ba.into_iter().collect();
    assert_eq!(ab_set, ba_set);
}

// ============================================================================
// Conditional enrichments
// ============================================================================

#[test]
fn airline_and_ground_operator_never_share_a_booking() {
    for seed in 0..50 {
        let gen = fixture_generator(seed);
        let bookings = statements_of(&gen, Category::TravelApp);
        let with_airline: Vec<&Iri> = bookings
            .iter()
            .filter(|s| s.predicate.local_name() == "onAirline")
            .map(|s| &s.subject)
            .collect();
        for stmt in &bookings {
            if stmt.predicate.local_name() == "operatedBy" {
                assert!(
                    !with_airline.contains(&&stmt.subject),
                    "booking {} has both an airline and a ground operator",
                    stmt.subject
                );
            }
        }
    }
}

#[test]
fn social_checkins_only_happen_in_bengaluru() {
    let bengaluru = Iri::kb_instance("location", "Bengaluru");
    for seed in 0..50 {
        let gen = fixture_generator(seed);
        let social = statements_of(&gen, Category::SocialMedia);
        for stmt in &social {
            if stmt.predicate.local_name() == "checkedInAt" {
                let attraction = stmt.object.as_node().expect("check-in target is a node");
                let located = social.iter().find(|s| {
                    s.subject == *attraction && s.predicate.local_name() == "locatedIn"
                });
                let located = located.expect("check-in carries its locatedIn statement");
                assert_eq!(located.object.as_node(), Some(&bengaluru));
            }
        }
    }
}

#[test]
fn calendar_local_events_require_a_bengaluru_location() {
    let bengaluru = Iri::kb_instance("location", "Bengaluru");
    for seed in 0..50 {
        let gen = fixture_generator(seed);
        let calendar = statements_of(&gen, Category::CalendarEvents);
        for stmt in &calendar {
            if stmt.predicate.local_name() == "isRelatedTo" {
                let located_at = calendar.iter().find(|s| {
                    s.subject == stmt.subject && s.predicate.local_name() == "locatedAt"
                });
                let located_at = located_at.expect("related event has a location");
                assert_eq!(located_at.object.as_node(), Some(&bengaluru));
            }
        }
    }
}

// ============================================================================
// Local-search gating
// ============================================================================

#[test]
fn local_search_is_empty_outside_the_window() {
    let outside = NaiveDate::from_ymd_opt(2025, 6, 1)
        .expect("valid date")
        .and_hms_opt(12, 0, 0)
        .expect("valid time");
    let gen = FootprintGenerator::new(GeneratorConfig::fixture().with_now(outside), 5);
    assert!(statements_of(&gen, Category::LocalSearch).is_empty());

    // The other six categories are unaffected.
    assert!(!statements_of(&gen, Category::Notification).is_empty());
    assert!(!statements_of(&gen, Category::SocialMedia).is_empty());
}

#[test]
fn local_search_is_empty_when_disabled() {
    let config = GeneratorConfig {
        local_search: LocalSearchPolicy::disabled(),
        ..GeneratorConfig::fixture()
    };
    let gen = FootprintGenerator::new(config, 5);
    assert!(statements_of(&gen, Category::LocalSearch).is_empty());
}

#[test]
fn local_search_queries_are_literal_valued_properties_of_the_search_event() {
    let gen = fixture_generator(29);
    let local = statements_of(&gen, Category::LocalSearch);
    assert!(!local.is_empty());
    for stmt in &local {
        if stmt.predicate.local_name() == "searchedFor" {
            // The free-text query is the object, never the subject.
            assert!(stmt.object.as_literal().is_some());
            assert!(stmt.subject.as_str().contains("localsearchquery/"));
        }
        if stmt.predicate.local_name() == "hasSearchResult" {
            assert!(stmt.subject.as_str().contains("localsearchquery/"));
        }
    }
}

// ============================================================================
// Schema and instance categories
// ============================================================================

#[test]
fn ontology_and_instances_land_in_the_store() {
    let gen = fixture_generator(31);
    let ontology = statements_of(&gen, Category::Ontology);
    let instances = statements_of(&gen, Category::Instances);
    assert!(!ontology.is_empty());
    assert!(!instances.is_empty());

    assert!(ontology.iter().any(|s| {
        s.predicate.as_str() == ns::RDFS_SUBCLASS_OF && s.subject.local_name() == "City"
    }));
    assert!(instances
        .iter()
        .any(|s| s.subject.as_str().ends_with("user/me")));
}

#[test]
fn schema_categories_can_be_excluded() {
    let config = GeneratorConfig {
        include_ontology: false,
        include_instances: false,
        ..GeneratorConfig::fixture()
    };
    let mut gen = FootprintGenerator::new(config, 31);
    assert!(gen.random_sample("ontology", 1).is_err());
    assert!(gen.random_sample("instances", 1).is_err());
}
