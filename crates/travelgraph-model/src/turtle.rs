//! Turtle projection of the canonical statement model.
//!
//! `write_turtle` emits a standards-compliant document with the fixed prefix
//! block; `read_turtle` parses one back with Sophia. The round trip
//! guarantees set-equality of statements, not byte equality of files.
//!
//! Simple string literals are normalized on both ends (`xsd:string` and
//! plain literals are the same value in RDF 1.1), so a write/read cycle
//! cannot split one statement into two.

use anyhow::{anyhow, Result};
use sophia::api::prelude::*;
use std::io::{self, BufRead, Write};

use crate::ns;
use crate::term::{Datatype, Iri, Literal, Statement, Term};

// ============================================================================
// Writing
// ============================================================================

/// Serialize statements as Turtle with the standard prefix block.
pub fn write_turtle<W: Write>(statements: &[Statement], mut w: W) -> io::Result<()> {
    w.write_all(to_turtle_string(statements).as_bytes())
}

/// Render statements to a Turtle string.
pub fn to_turtle_string(statements: &[Statement]) -> String {
    let mut out = String::new();
    for (prefix, base) in ns::PREFIXES {
        out.push_str(&format!("@prefix {prefix}: <{base}> .\n"));
    }
    out.push('\n');
    for stmt in statements {
        out.push_str(&format!(
            "{} {} {} .\n",
            iri_turtle(&stmt.subject),
            iri_turtle(&stmt.predicate),
            term_turtle(&stmt.object)
        ));
    }
    out
}

fn iri_turtle(iri: &Iri) -> String {
    for (prefix, base) in ns::PREFIXES {
        if let Some(local) = iri.as_str().strip_prefix(base) {
            if is_pn_local(local) {
                return format!("{prefix}:{local}");
            }
        }
    }
    format!("<{}>", iri.as_str())
}

fn term_turtle(term: &Term) -> String {
    match term {
        Term::Node(iri) => iri_turtle(iri),
        Term::Literal(lit) => literal_turtle(lit),
    }
}

fn literal_turtle(lit: &Literal) -> String {
    let quoted = format!("\"{}\"", escape_literal(&lit.lexical));
    if let Some(lang) = &lit.language {
        return format!("{quoted}@{lang}");
    }
    match lit.datatype {
        // Plain and xsd:string literals are the same RDF 1.1 value.
        None | Some(Datatype::String) => quoted,
        Some(dt) => format!("{quoted}^^{}", iri_turtle(&Iri::new(dt.iri()))),
    }
}

fn escape_literal(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            other => out.push(other),
        }
    }
    out
}

/// A prefixed local name we are willing to emit without escaping.
fn is_pn_local(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}

// ============================================================================
// Reading
// ============================================================================

#[derive(Debug, thiserror::Error)]
#[error("{message}")]
struct TurtleSinkError {
    message: String,
}

impl From<anyhow::Error> for TurtleSinkError {
    fn from(value: anyhow::Error) -> Self {
        Self {
            message: value.to_string(),
        }
    }
}

/// Parse a Turtle document back into statements.
///
/// Triples involving blank nodes are skipped: the canonical model only
/// carries named individuals and literals.
pub fn read_turtle<R: BufRead>(reader: R) -> Result<Vec<Statement>> {
    let mut out: Vec<Statement> = Vec::new();
    let mut parser = sophia::turtle::parser::turtle::parse_bufread(reader);
    parser
        .try_for_each_triple(|t| -> std::result::Result<(), TurtleSinkError> {
            let Some(subject) = parse_iri_display(&t.s().to_string()) else {
                return Ok(());
            };
            let Some(predicate) = parse_iri_display(&t.p().to_string()) else {
                return Ok(());
            };
            let Some(object) = parse_term_display(&t.o().to_string()).map_err(TurtleSinkError::from)?
            else {
                return Ok(());
            };
            out.push(Statement::new(subject, predicate, object));
            Ok(())
        })
        .map_err(|e| anyhow!("failed to parse Turtle: {e}"))?;
    Ok(out)
}

/// Parse a Turtle document from a string.
pub fn read_turtle_str(text: &str) -> Result<Vec<Statement>> {
    read_turtle(text.as_bytes())
}

fn parse_iri_display(term: &str) -> Option<Iri> {
    let s = term.trim();
    s.strip_prefix('<')
        .and_then(|t| t.strip_suffix('>'))
        .map(Iri::new)
}

/// Parse a term in its N-Triples-ish display form. Returns `Ok(None)` for
/// blank nodes.
fn parse_term_display(term: &str) -> Result<Option<Term>> {
    let s = term.trim();

    if let Some(iri) = parse_iri_display(s) {
        return Ok(Some(Term::Node(iri)));
    }
    if s.starts_with("_:") {
        return Ok(None);
    }
    if s.starts_with('"') {
        let (lexical, rest) = split_quoted(s)?;
        let lexical = unescape_literal(&lexical);

        let rest = rest.trim();
        if let Some(lang) = rest.strip_prefix('@') {
            return Ok(Some(Term::Literal(Literal::lang(lexical, lang))));
        }
        if let Some(dt) = rest.strip_prefix("^^") {
            let dt = dt
                .trim()
                .strip_prefix('<')
                .and_then(|t| t.strip_suffix('>'))
                .unwrap_or(dt.trim());
            return Ok(Some(Term::Literal(match Datatype::from_iri(dt) {
                // xsd:string folds back into a plain literal.
                Some(Datatype::String) | None => Literal::plain(lexical),
                Some(known) => Literal::typed(lexical, known),
            })));
        }
        return Ok(Some(Term::Literal(Literal::plain(lexical))));
    }

    Err(anyhow!("unsupported term form: {s}"))
}

/// Split a leading quoted section off a literal display form, honoring
/// escape sequences. Returns the raw (still-escaped) lexical part and the
/// remainder after the closing quote.
fn split_quoted(s: &str) -> Result<(String, &str)> {
    let mut escaped = false;
    for (i, ch) in s.char_indices().skip(1) {
        if escaped {
            escaped = false;
            continue;
        }
        match ch {
            '\\' => escaped = true,
            '"' => return Ok((s[1..i].to_string(), &s[i + 1..])),
            _ => {}
        }
    }
    Err(anyhow!("invalid literal term (missing closing quote): {s}"))
}

fn unescape_literal(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('t') => out.push('\t'),
            Some('"') => out.push('"'),
            Some('\\') => out.push('\\'),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::term::{Datatype, Iri, Literal, Statement};
    use std::collections::HashSet;

    fn sample_statements() -> Vec<Statement> {
        vec![
            Statement::typed(Iri::kb_instance("location", "Bengaluru"), Iri::kb("Location")),
            Statement::new(
                Iri::kb("user/me"),
                Iri::kb("browsedAbout"),
                Iri::kb_instance("location", "Bengaluru"),
            ),
            Statement::new(
                Iri::kb_instance("booking", "3"),
                Iri::kb("hasTravelDate"),
                Literal::typed("2025-06-01", Datatype::Date),
            ),
            Statement::new(
                Iri::kb("user/me"),
                Iri::kb("searchedFor"),
                Literal::plain("best hotels \"cheap\"\nParis"),
            ),
            Statement::new(
                Iri::travel("Bengaluru"),
                Iri::new(crate::ns::RDFS_LABEL),
                Literal::lang("Bengaluru", "en"),
            ),
        ]
    }

    #[test]
    fn round_trip_preserves_statement_sets() {
        let original = sample_statements();
        let text = to_turtle_string(&original);
        let reparsed = read_turtle_str(&text).expect("reparse");

        let before: HashSet<Statement> = original.into_iter().collect();
        let after: HashSet<Statement> = reparsed.into_iter().collect();
        assert_eq!(before, after);
    }

    #[test]
    fn kb_instance_iris_are_written_in_full() {
        // `notification/notif_0` is not a valid prefixed local name, so the
        // writer must fall back to an absolute IRI.
        let stmt = Statement::typed(
            Iri::kb_instance("Notification", "notif_0"),
            Iri::kb("Notification"),
        );
        let text = to_turtle_string(&[stmt]);
        assert!(text.contains("<http://example.org/knowledgebase/notification/notif_0>"));
        assert!(text.contains("kb:Notification"));
        assert!(text.contains("rdf:type"));
    }

    #[test]
    fn plain_and_string_typed_literals_collapse() {
        let typed = Statement::new(
            Iri::kb("s"),
            Iri::kb("p"),
            Literal::typed("hello", Datatype::String),
        );
        let plain = Statement::new(Iri::kb("s"), Iri::kb("p"), Literal::plain("hello"));

        let text = to_turtle_string(&[typed]);
        let reparsed = read_turtle_str(&text).expect("reparse");
        assert_eq!(reparsed, vec![plain]);
    }

    #[test]
    fn date_literals_keep_their_datatype() {
        let stmt = Statement::new(
            Iri::kb("s"),
            Iri::kb("hasTravelDate"),
            Literal::typed("2025-05-20", Datatype::Date),
        );
        let text = to_turtle_string(&[stmt.clone()]);
        assert!(text.contains("^^xsd:date"));
        let reparsed = read_turtle_str(&text).expect("reparse");
        assert_eq!(reparsed, vec![stmt]);
    }
}
