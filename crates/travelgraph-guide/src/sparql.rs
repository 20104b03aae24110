//! Federated SPARQL collaborator.
//!
//! One blocking request per query, no retry, no backoff. Every failure mode
//! (unreachable endpoint, malformed query, non-2xx response, bad JSON) is
//! logged and collapsed into `None`; population continues with whatever was
//! already collected.

use anyhow::{Context, Result};
use reqwest::blocking::Client;
use serde::Deserialize;
use std::collections::HashMap;
use std::time::Duration;
use url::Url;

/// W3C `application/sparql-results+json` payload, reduced to what the
/// binding processors consume.
#[derive(Debug, Clone, Deserialize)]
pub struct SparqlResults {
    #[serde(default)]
    pub head: SparqlHead,
    #[serde(default)]
    pub results: SparqlBindings,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SparqlHead {
    #[serde(default)]
    pub vars: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SparqlBindings {
    #[serde(default)]
    pub bindings: Vec<BindingRow>,
}

pub type BindingRow = HashMap<String, BoundValue>;

#[derive(Debug, Clone, Deserialize)]
pub struct BoundValue {
    pub value: String,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(rename = "xml:lang", default)]
    pub lang: Option<String>,
}

/// The bound value of a variable, if present in the row.
pub fn bound<'a>(row: &'a BindingRow, var: &str) -> Option<&'a str> {
    row.get(var).map(|v| v.value.as_str())
}

pub struct SparqlExecutor {
    endpoint: Url,
    client: Client,
}

impl SparqlExecutor {
    pub fn new(endpoint: &str) -> Result<Self> {
        let endpoint = Url::parse(endpoint)
            .with_context(|| format!("invalid SPARQL endpoint: {endpoint}"))?;
        let client = Client::builder()
            .user_agent("travelgraph/0.3")
            .timeout(Duration::from_secs(60))
            .build()
            .context("failed to build HTTP client")?;
        Ok(Self { endpoint, client })
    }

    /// Run a query; any failure is logged and becomes `None`.
    pub fn run_query(&self, query: &str) -> Option<SparqlResults> {
        match self.try_run(query) {
            Ok(results) => Some(results),
            Err(err) => {
                tracing::warn!(endpoint = %self.endpoint, error = %err, "SPARQL query failed");
                None
            }
        }
    }

    fn try_run(&self, query: &str) -> Result<SparqlResults> {
        let response = self
            .client
            .get(self.endpoint.clone())
            .query(&[("query", query), ("format", "json")])
            .header("Accept", "application/sparql-results+json")
            .send()
            .context("request failed")?
            .error_for_status()
            .context("endpoint returned an error status")?;
        response
            .json::<SparqlResults>()
            .context("malformed SPARQL JSON results")
    }
}
