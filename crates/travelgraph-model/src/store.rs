//! Per-category statement collections and the deduplicating graph buffer.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

use crate::term::Statement;

// ============================================================================
// Categories
// ============================================================================

/// The fixed topical buckets a generated footprint is split into.
///
/// The seven event categories are always populated; `Ontology` and
/// `Instances` hold the reified schema and the fixture individuals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Notification,
    Messages,
    TravelApp,
    BrowsingHistory,
    CalendarEvents,
    SocialMedia,
    LocalSearch,
    Ontology,
    Instances,
}

impl Category {
    /// The seven event categories, in store insertion order.
    pub const EVENTS: [Category; 7] = [
        Category::Notification,
        Category::Messages,
        Category::TravelApp,
        Category::BrowsingHistory,
        Category::CalendarEvents,
        Category::SocialMedia,
        Category::LocalSearch,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Notification => "notification",
            Category::Messages => "messages",
            Category::TravelApp => "travel_app",
            Category::BrowsingHistory => "browsing_history",
            Category::CalendarEvents => "calendar_events",
            Category::SocialMedia => "social_media",
            Category::LocalSearch => "local_search",
            Category::Ontology => "ontology",
            Category::Instances => "instances",
        }
    }

    pub fn parse(name: &str) -> Option<Category> {
        match name {
            "notification" => Some(Category::Notification),
            "messages" => Some(Category::Messages),
            "travel_app" => Some(Category::TravelApp),
            "browsing_history" => Some(Category::BrowsingHistory),
            "calendar_events" => Some(Category::CalendarEvents),
            "social_media" => Some(Category::SocialMedia),
            "local_search" => Some(Category::LocalSearch),
            "ontology" => Some(Category::Ontology),
            "instances" => Some(Category::Instances),
            _ => None,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("category '{name}' not found (known: {})", .known.join(", "))]
    UnknownCategory { name: String, known: Vec<String> },
}

// ============================================================================
// Category store
// ============================================================================

/// Ordered mapping from category to its generated statements.
///
/// Insertion order is preserved so `all_statements` concatenates categories
/// in the order they were generated.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CategoryStore {
    entries: Vec<(Category, Vec<Statement>)>,
}

impl CategoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a category's statements, appending if the category already
    /// exists.
    pub fn insert(&mut self, category: Category, statements: Vec<Statement>) {
        if let Some((_, existing)) = self.entries.iter_mut().find(|(c, _)| *c == category) {
            existing.extend(statements);
        } else {
            self.entries.push((category, statements));
        }
    }

    pub fn get(&self, category: Category) -> Option<&[Statement]> {
        self.entries
            .iter()
            .find(|(c, _)| *c == category)
            .map(|(_, stmts)| stmts.as_slice())
    }

    /// Look up a category by name, reporting the known names on a miss.
    pub fn get_by_name(&self, name: &str) -> Result<&[Statement], StoreError> {
        Category::parse(name)
            .and_then(|c| self.get(c))
            .ok_or_else(|| StoreError::UnknownCategory {
                name: name.to_string(),
                known: self.entries.iter().map(|(c, _)| c.to_string()).collect(),
            })
    }

    pub fn categories(&self) -> impl Iterator<Item = Category> + '_ {
        self.entries.iter().map(|(c, _)| *c)
    }

    /// All statements, concatenated in category insertion order.
    pub fn all_statements(&self) -> Vec<Statement> {
        self.entries
            .iter()
            .flat_map(|(_, stmts)| stmts.iter().cloned())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.iter().map(|(_, stmts)| stmts.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Append statements to a collection, creating one if absent.
///
/// Never deduplicates and never validates; the caller owns any schema
/// conformance concerns.
pub fn merge(statements: Vec<Statement>, into: Option<Vec<Statement>>) -> Vec<Statement> {
    let mut target = into.unwrap_or_default();
    target.extend(statements);
    target
}

// ============================================================================
// Statement set
// ============================================================================

/// Insertion-ordered statement collection that deduplicates on add.
///
/// Used by the guide read path, where repeated federated fetches must not
/// accumulate duplicate facts.
#[derive(Debug, Clone, Default)]
pub struct StatementSet {
    ordered: Vec<Statement>,
    seen: HashSet<Statement>,
}

impl StatementSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a statement; returns false if it was already present.
    pub fn add(&mut self, statement: Statement) -> bool {
        if self.seen.contains(&statement) {
            return false;
        }
        self.seen.insert(statement.clone());
        self.ordered.push(statement);
        true
    }

    pub fn contains(&self, statement: &Statement) -> bool {
        self.seen.contains(statement)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Statement> {
        self.ordered.iter()
    }

    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }

    pub fn extend(&mut self, statements: impl IntoIterator<Item = Statement>) {
        for stmt in statements {
            self.add(stmt);
        }
    }

    pub fn as_slice(&self) -> &[Statement] {
        &self.ordered
    }
}

impl FromIterator<Statement> for StatementSet {
    fn from_iter<T: IntoIterator<Item = Statement>>(iter: T) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::term::{Iri, Literal};

    fn stmt(s: &str, p: &str, o: &str) -> Statement {
        Statement::new(Iri::kb(s), Iri::kb(p), Iri::kb(o))
    }

    #[test]
    fn store_preserves_insertion_order() {
        let mut store = CategoryStore::new();
        store.insert(Category::Messages, vec![stmt("a", "p", "b")]);
        store.insert(Category::Notification, vec![stmt("c", "p", "d")]);

        let all = store.all_statements();
        assert_eq!(all[0], stmt("a", "p", "b"));
        assert_eq!(all[1], stmt("c", "p", "d"));
    }

    #[test]
    fn unknown_category_is_a_descriptive_error() {
        let mut store = CategoryStore::new();
        store.insert(Category::Notification, vec![stmt("a", "p", "b")]);

        let err = store.get_by_name("weather").unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("weather"));
        assert!(msg.contains("notification"));
    }

    #[test]
    fn merge_appends_without_dedup() {
        let existing = vec![stmt("a", "p", "b")];
        let merged = merge(vec![stmt("a", "p", "b")], Some(existing));
        assert_eq!(merged.len(), 2);

        let fresh = merge(vec![stmt("x", "p", "y")], None);
        assert_eq!(fresh.len(), 1);
    }

    #[test]
    fn statement_set_dedups_but_keeps_order() {
        let mut set = StatementSet::new();
        assert!(set.add(stmt("a", "p", "b")));
        assert!(set.add(stmt("c", "p", "d")));
        assert!(!set.add(stmt("a", "p", "b")));
        assert_eq!(set.len(), 2);
        assert_eq!(set.iter().next(), Some(&stmt("a", "p", "b")));
    }

    #[test]
    fn literal_and_node_objects_are_distinct() {
        let as_node = Statement::new(Iri::kb("s"), Iri::kb("p"), Iri::kb("London"));
        let as_literal = Statement::new(Iri::kb("s"), Iri::kb("p"), Literal::plain("London"));
        let mut set = StatementSet::new();
        assert!(set.add(as_node));
        assert!(set.add(as_literal));
        assert_eq!(set.len(), 2);
    }
}
