//! Generator configuration: the user identity, the injected clock and the
//! local-search feature gate.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use travelgraph_model::Iri;

/// Default date window the local-search demo category is active in.
///
/// A fixture default only; the gate itself is the injected `now` date plus
/// the [`LocalSearchPolicy::enabled`] flag, never the machine clock.
pub const LOCAL_SEARCH_FIXTURE_WINDOW: (&str, &str) = ("2025-04-18", "2025-04-30");

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalSearchPolicy {
    pub enabled: bool,
    pub window_start: NaiveDate,
    pub window_end: NaiveDate,
}

impl LocalSearchPolicy {
    pub fn active_on(&self, today: NaiveDate) -> bool {
        self.enabled && self.window_start <= today && today <= self.window_end
    }

    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Self::default()
        }
    }
}

impl Default for LocalSearchPolicy {
    fn default() -> Self {
        Self {
            enabled: true,
            window_start: fixture_date(LOCAL_SEARCH_FIXTURE_WINDOW.0),
            window_end: fixture_date(LOCAL_SEARCH_FIXTURE_WINDOW.1),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// The traveler every category hangs facts off of.
    pub user: Iri,
    /// Injected current time; all relative dates are computed from it.
    pub now: NaiveDateTime,
    pub local_search: LocalSearchPolicy,
    /// Also reify the travel ontology into the store.
    pub include_ontology: bool,
    /// Also reify the fixture individuals into the store.
    pub include_instances: bool,
}

impl GeneratorConfig {
    pub fn today(&self) -> NaiveDate {
        self.now.date()
    }

    /// Fixture configuration: a fixed date inside the local-search window,
    /// so every category emits.
    pub fn fixture() -> Self {
        Self::default()
    }

    pub fn with_now(mut self, now: NaiveDateTime) -> Self {
        self.now = now;
        self
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            user: Iri::kb("user/me"),
            now: fixture_date("2025-04-20")
                .and_hms_opt(9, 30, 0)
                .expect("valid fixture time"),
            local_search: LocalSearchPolicy::default(),
            include_ontology: true,
            include_instances: true,
        }
    }
}

fn fixture_date(s: &str) -> NaiveDate {
    s.parse().expect("valid fixture date")
}
