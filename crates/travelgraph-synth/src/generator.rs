//! The aggregating generator: builds every category eagerly and exposes
//! sampling and bulk-export operations over the resulting store.

use travelgraph_model::{Category, CategoryStore, Statement, StoreError};

use crate::config::GeneratorConfig;
use crate::events;
use crate::instances::InstanceRegistry;
use crate::rng::XorShift64;
use crate::schema::OntologySchema;
use crate::vocab::Vocabulary;

/// Generates one traveler's synthetic footprint.
///
/// All categories are populated at construction time; afterwards the store
/// is only read (sampled or exported). A category that legitimately emits
/// nothing (local search outside its window) never affects the others.
pub struct FootprintGenerator {
    vocab: Vocabulary,
    config: GeneratorConfig,
    schema: OntologySchema,
    instances: InstanceRegistry,
    store: CategoryStore,
    rng: XorShift64,
}

impl FootprintGenerator {
    pub fn new(config: GeneratorConfig, seed: u64) -> Self {
        Self::with_vocabulary(Vocabulary::default(), config, seed)
    }

    pub fn with_vocabulary(vocab: Vocabulary, config: GeneratorConfig, seed: u64) -> Self {
        let mut rng = XorShift64::new(seed);
        let schema = OntologySchema::travel_default();
        let instances = InstanceRegistry::travel_default();

        let mut store = CategoryStore::new();
        store.insert(
            Category::Notification,
            events::notification_statements(&vocab, &config, &mut rng),
        );
        store.insert(
            Category::Messages,
            events::message_statements(&vocab, &config, &mut rng),
        );
        store.insert(
            Category::TravelApp,
            events::booking_statements(&vocab, &config, &mut rng),
        );
        store.insert(
            Category::BrowsingHistory,
            events::browsing_statements(&vocab, &config, &mut rng),
        );
        store.insert(
            Category::CalendarEvents,
            events::calendar_statements(&vocab, &config, &mut rng),
        );
        store.insert(
            Category::SocialMedia,
            events::social_statements(&vocab, &config, &mut rng),
        );
        store.insert(
            Category::LocalSearch,
            events::local_search_statements(&vocab, &config, &mut rng),
        );
        if config.include_ontology {
            store.insert(Category::Ontology, schema.reify());
        }
        if config.include_instances {
            store.insert(Category::Instances, instances.reify());
        }

        for category in store.categories() {
            tracing::debug!(
                category = %category,
                statements = store.get(category).map(|s| s.len()).unwrap_or(0),
                "generated category"
            );
        }

        Self {
            vocab,
            config,
            schema,
            instances,
            store,
            rng,
        }
    }

    pub fn store(&self) -> &CategoryStore {
        &self.store
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocab
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    pub fn schema(&self) -> &OntologySchema {
        &self.schema
    }

    pub fn instances(&self) -> &InstanceRegistry {
        &self.instances
    }

    /// Sample `min(n, |category|)` statements without replacement.
    ///
    /// An unrecognized category name is a typed error, never a panic.
    pub fn random_sample(&mut self, category: &str, n: usize) -> Result<Vec<Statement>, StoreError> {
        let statements = self.store.get_by_name(category)?;
        Ok(sample_without_replacement(statements, n, &mut self.rng))
    }

    /// Every category's statements, concatenated in insertion order.
    pub fn all_statements(&self) -> Vec<Statement> {
        self.store.all_statements()
    }
}

/// Partial Fisher-Yates draw of `min(n, len)` items.
pub fn sample_without_replacement(
    statements: &[Statement],
    n: usize,
    rng: &mut XorShift64,
) -> Vec<Statement> {
    let k = n.min(statements.len());
    let mut indexes: Vec<usize> = (0..statements.len()).collect();
    for i in 0..k {
        let j = i + rng.gen_range_usize(indexes.len() - i);
        indexes.swap(i, j);
    }
    indexes[..k]
        .iter()
        .map(|&i| statements[i].clone())
        .collect()
}
