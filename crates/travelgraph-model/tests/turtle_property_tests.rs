//! Property tests for the Turtle projection.

use proptest::prelude::*;
use std::collections::HashSet;
use travelgraph_model::turtle::{read_turtle_str, to_turtle_string};
use travelgraph_model::{Iri, Literal, Statement};

fn key() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z][A-Za-z0-9_]{0,12}").unwrap()
}

proptest! {
    #[test]
    fn literal_lexical_forms_survive_escaping(text in "[ -~\\n\\t]{0,40}") {
        let stmt = Statement::new(
            Iri::kb("s"),
            Iri::kb("searchedFor"),
            Literal::plain(text.clone()),
        );
        let reparsed = read_turtle_str(&to_turtle_string(&[stmt])).expect("reparse");
        prop_assert_eq!(reparsed.len(), 1);
        let lit = reparsed[0].object.as_literal().expect("literal");
        prop_assert_eq!(&lit.lexical, &text);
    }

    #[test]
    fn node_statements_round_trip_as_sets(
        keys in proptest::collection::vec((key(), key(), key()), 1..20)
    ) {
        let statements: Vec<Statement> = keys
            .iter()
            .map(|(s, p, o)| {
                Statement::new(
                    Iri::kb_instance("subject", s),
                    Iri::kb(p),
                    Iri::kb_instance("object", o),
                )
            })
            .collect();
        let reparsed = read_turtle_str(&to_turtle_string(&statements)).expect("reparse");
        let before: HashSet<Statement> = statements.into_iter().collect();
        let after: HashSet<Statement> = reparsed.into_iter().collect();
        prop_assert_eq!(before, after);
    }
}
