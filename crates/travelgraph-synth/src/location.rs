//! Three-tier location selection.

use serde::{Deserialize, Serialize};
use travelgraph_model::Iri;

use crate::rng::XorShift64;
use crate::vocab::Vocabulary;

/// Which vocabulary table a location was drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LocationTier {
    City,
    Country,
    State,
}

impl LocationTier {
    /// IRI path prefix the tier is encoded under.
    pub fn prefix(self) -> &'static str {
        match self {
            LocationTier::City => "location",
            LocationTier::Country => "country",
            LocationTier::State => "state",
        }
    }
}

/// A drawn location: tier plus the raw vocabulary term.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationRef {
    pub tier: LocationTier,
    pub name: String,
}

impl LocationRef {
    pub fn new(tier: LocationTier, name: impl Into<String>) -> Self {
        Self {
            tier,
            name: name.into(),
        }
    }

    /// The location's IRI; the path prefix encodes the tier, so the tier is
    /// recoverable from the reference alone.
    pub fn iri(&self) -> Iri {
        Iri::kb_instance(self.tier.prefix(), &self.name)
    }

    /// Recover the tier from an IRI minted by [`LocationRef::iri`].
    pub fn tier_of(iri: &Iri) -> Option<LocationTier> {
        let path = iri.as_str().strip_prefix(travelgraph_model::KB_BASE)?;
        let prefix = path.split('/').next()?;
        match prefix {
            "location" => Some(LocationTier::City),
            "country" => Some(LocationTier::Country),
            "state" => Some(LocationTier::State),
            _ => None,
        }
    }

    /// Exact-match guard used by the Bengaluru-only enrichments.
    pub fn is_bengaluru(&self) -> bool {
        self.tier == LocationTier::City && self.name == "Bengaluru"
    }
}

/// Choose a location: the tier is drawn uniformly among city/country/state,
/// then a term uniformly within the tier's table.
///
/// Uniform-over-tiers is deliberate: each tier gets ~1/3 of the draws no
/// matter how unbalanced the table sizes are (11 cities vs. 4 states).
pub fn pick_location(vocab: &Vocabulary, rng: &mut XorShift64) -> LocationRef {
    match rng.gen_range_usize(3) {
        0 => LocationRef::new(LocationTier::City, rng.pick(&vocab.cities)),
        1 => LocationRef::new(LocationTier::Country, rng.pick(&vocab.countries)),
        _ => LocationRef::new(LocationTier::State, rng.pick(&vocab.states_india)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn iri_encodes_tier() {
        let city = LocationRef::new(LocationTier::City, "Bengaluru");
        assert_eq!(
            city.iri().as_str(),
            "http://example.org/knowledgebase/location/Bengaluru"
        );
        assert_eq!(LocationRef::tier_of(&city.iri()), Some(LocationTier::City));

        let state = LocationRef::new(LocationTier::State, "Tamil Nadu");
        assert_eq!(
            state.iri().as_str(),
            "http://example.org/knowledgebase/state/Tamil_Nadu"
        );
        assert_eq!(LocationRef::tier_of(&state.iri()), Some(LocationTier::State));
    }

    #[test]
    fn bengaluru_guard_requires_the_city_tier() {
        assert!(LocationRef::new(LocationTier::City, "Bengaluru").is_bengaluru());
        assert!(!LocationRef::new(LocationTier::Country, "India").is_bengaluru());
        assert!(!LocationRef::new(LocationTier::State, "Karnataka").is_bengaluru());
        assert!(!LocationRef::new(LocationTier::City, "Paris").is_bengaluru());
    }

    #[test]
    fn tiers_are_roughly_balanced() {
        let vocab = Vocabulary::default();
        let mut rng = XorShift64::new(1234);
        let mut counts = [0usize; 3];
        let n = 30_000;
        for _ in 0..n {
            match pick_location(&vocab, &mut rng).tier {
                LocationTier::City => counts[0] += 1,
                LocationTier::Country => counts[1] += 1,
                LocationTier::State => counts[2] += 1,
            }
        }
        for count in counts {
            let freq = count as f64 / n as f64;
            assert!(
                (freq - 1.0 / 3.0).abs() < 0.02,
                "tier frequency {freq} drifted from 1/3"
            );
        }
    }
}
