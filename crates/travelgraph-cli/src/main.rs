//! Travelgraph CLI
//!
//! Thin wrapper over the library crates:
//! - Generating a synthetic traveler footprint and exporting it as Turtle
//! - Sampling statements per category
//! - Reifying the travel ontology/instance registries
//! - Building the travel-guide graph from a SPARQL endpoint and querying it
//! - Running the illustrative conformance check over a Turtle file

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::fs;
use std::io::BufReader;
use std::path::PathBuf;
use travelgraph_guide::ingest::process_city;
use travelgraph_guide::{
    DistinctFieldsConstraint, OntologyBuilder, SparqlExecutor, TravelGuideQuery,
};
use travelgraph_model::{turtle, Statement, StatementSet};
use travelgraph_synth::{FootprintGenerator, GeneratorConfig, LocalSearchPolicy};

const DEFAULT_ENDPOINT: &str = "https://query.wikidata.org/sparql";

/// Wikidata ids of the default city set (Bengaluru, New York, London,
/// Paris, Tokyo).
const DEFAULT_CITY_IDS: &[&str] = &["wd:Q1355", "wd:Q60", "wd:Q84", "wd:Q90", "wd:Q1490"];

#[derive(Parser)]
#[command(name = "travelgraph")]
#[command(
    author,
    version,
    about = "Synthetic travel knowledge-graph generator and guide"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a synthetic footprint and export it as Turtle.
    Generate {
        /// Random seed (identical seeds reproduce identical graphs)
        #[arg(long, default_value_t = 42)]
        seed: u64,
        /// Output Turtle file (stdout when omitted)
        #[arg(short, long)]
        out: Option<PathBuf>,
        /// Current date injected into the generators (YYYY-MM-DD); defaults
        /// to the fixture date
        #[arg(long)]
        date: Option<NaiveDate>,
        /// Disable the local-search demo category
        #[arg(long)]
        no_local_search: bool,
        /// Skip the reified ontology and fixture instances
        #[arg(long)]
        events_only: bool,
    },

    /// Print a random sample of one category's statements.
    Sample {
        /// Category name (e.g. notification, messages, travel_app)
        category: String,
        /// Sample size
        #[arg(short, default_value_t = 5)]
        n: usize,
        #[arg(long, default_value_t = 42)]
        seed: u64,
    },

    /// Export only the reified ontology and fixture instances.
    Schema {
        /// Output Turtle file (stdout when omitted)
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Travel-guide graph commands (federated build + read-only queries).
    Guide {
        #[command(subcommand)]
        command: GuideCommands,
    },

    /// Run the distinct-fields conformance check over a Turtle file.
    Check {
        /// Data graph to validate
        input: PathBuf,
        /// Emit the machine-readable report as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Subcommand)]
enum GuideCommands {
    /// Populate the guide graph from a SPARQL endpoint.
    Build {
        /// Graph file to load and update
        #[arg(short, long, default_value = "travel_guide_ontology.ttl")]
        file: PathBuf,
        #[arg(long, default_value = DEFAULT_ENDPOINT)]
        endpoint: String,
        /// City ids to process (defaults to the shipped five)
        #[arg(long = "city")]
        cities: Vec<String>,
    },

    /// List all cities in the graph.
    Cities {
        #[arg(short, long, default_value = "travel_guide_ontology.ttl")]
        file: PathBuf,
    },

    /// Show a city's country, capital and continent.
    City {
        name: String,
        #[arg(short, long, default_value = "travel_guide_ontology.ttl")]
        file: PathBuf,
    },

    /// List a city's points of interest.
    Pois {
        city: String,
        #[arg(short, long, default_value = "travel_guide_ontology.ttl")]
        file: PathBuf,
    },

    /// List the cities located in a country.
    InCountry {
        country: String,
        #[arg(short, long, default_value = "travel_guide_ontology.ttl")]
        file: PathBuf,
    },

    /// Search points of interest by category keyword.
    PoiSearch {
        keyword: String,
        #[arg(short, long, default_value = "travel_guide_ontology.ttl")]
        file: PathBuf,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Generate {
            seed,
            out,
            date,
            no_local_search,
            events_only,
        } => generate(seed, out, date, no_local_search, events_only),
        Commands::Sample { category, n, seed } => sample(&category, n, seed),
        Commands::Schema { out } => schema(out),
        Commands::Guide { command } => guide(command),
        Commands::Check { input, json } => check(&input, json),
    }
}

fn generator_config(
    date: Option<NaiveDate>,
    no_local_search: bool,
    events_only: bool,
) -> GeneratorConfig {
    let mut config = GeneratorConfig::fixture();
    if let Some(date) = date {
        if let Some(now) = date.and_hms_opt(9, 30, 0) {
            config.now = now;
        }
    }
    if no_local_search {
        config.local_search = LocalSearchPolicy::disabled();
    }
    if events_only {
        config.include_ontology = false;
        config.include_instances = false;
    }
    config
}

fn write_statements(statements: &[Statement], out: Option<PathBuf>) -> Result<()> {
    match out {
        Some(path) => {
            let file = fs::File::create(&path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            turtle::write_turtle(statements, file)?;
            println!(
                "{} {} statements to {}",
                "wrote".green(),
                statements.len(),
                path.display()
            );
        }
        None => {
            print!("{}", turtle::to_turtle_string(statements));
        }
    }
    Ok(())
}

fn generate(
    seed: u64,
    out: Option<PathBuf>,
    date: Option<NaiveDate>,
    no_local_search: bool,
    events_only: bool,
) -> Result<()> {
    let config = generator_config(date, no_local_search, events_only);
    let gen = FootprintGenerator::new(config, seed);

    for category in gen.store().categories() {
        let count = gen.store().get(category).map(|s| s.len()).unwrap_or(0);
        eprintln!("{} {category}: {count} statements", "generated".cyan());
    }

    write_statements(&gen.all_statements(), out)
}

fn sample(category: &str, n: usize, seed: u64) -> Result<()> {
    let mut gen = FootprintGenerator::new(GeneratorConfig::fixture(), seed);
    let statements = gen.random_sample(category, n)?;
    for stmt in &statements {
        let (s, p, o) = stmt.as_tuple();
        println!("({s}, {p}, {o})");
    }
    Ok(())
}

fn schema(out: Option<PathBuf>) -> Result<()> {
    let gen = FootprintGenerator::new(GeneratorConfig::fixture(), 0);
    let mut statements = gen.schema().reify();
    statements.extend(gen.instances().reify());
    write_statements(&statements, out)
}

fn guide(command: GuideCommands) -> Result<()> {
    match command {
        GuideCommands::Build {
            file,
            endpoint,
            cities,
        } => {
            let executor = SparqlExecutor::new(&endpoint)?;
            let mut builder = OntologyBuilder::load_or_create(&file);
            let city_ids: Vec<String> = if cities.is_empty() {
                DEFAULT_CITY_IDS.iter().map(|s| s.to_string()).collect()
            } else {
                cities
            };
            for city_id in &city_ids {
                process_city(city_id, &executor, builder.graph_mut());
            }
            builder.save(None)?;
            println!(
                "{} guide graph ({} statements) to {}",
                "saved".green(),
                builder.graph().len(),
                file.display()
            );
            Ok(())
        }
        GuideCommands::Cities { file } => {
            let query = TravelGuideQuery::from_file(&file);
            print_json(&query.all_cities())
        }
        GuideCommands::City { name, file } => {
            let query = TravelGuideQuery::from_file(&file);
            match query.city_details(&name) {
                Some(details) => print_json(&details),
                None => {
                    println!("{} city '{name}' not found", "warning:".yellow());
                    Ok(())
                }
            }
        }
        GuideCommands::Pois { city, file } => {
            let query = TravelGuideQuery::from_file(&file);
            print_json(&query.pois_for_city(&city))
        }
        GuideCommands::InCountry { country, file } => {
            let query = TravelGuideQuery::from_file(&file);
            print_json(&query.cities_in_country(&country))
        }
        GuideCommands::PoiSearch { keyword, file } => {
            let query = TravelGuideQuery::from_file(&file);
            print_json(&query.search_pois_by_category(&keyword))
        }
    }
}

fn check(input: &PathBuf, json: bool) -> Result<()> {
    let file = fs::File::open(input)
        .with_context(|| format!("failed to open {}", input.display()))?;
    let statements = turtle::read_turtle(BufReader::new(file))?;
    let graph: StatementSet = statements.into_iter().collect();

    let constraint = DistinctFieldsConstraint::person_name_default();
    let report = constraint.check(&graph);

    if json {
        print_json(&report)?;
    } else {
        let headline = if report.conforms {
            "conforms".green()
        } else {
            "violations".red()
        };
        println!("{headline}");
        print!("{}", report.text());
    }
    Ok(())
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
