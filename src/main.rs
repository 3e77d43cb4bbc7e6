//! Fixture Kit command line
//!
//! Validates sample fixtures, prints connection URLs, and seeds a mock
//! document store whose contents are dumped as JSON.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use serde_json::Value;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use fixture_kit::fixtures::{load_db_config, load_samples};
use fixture_kit::schemas::{SampleSet, RECORD_KINDS};
use fixture_kit::{bootstrap_admin, AdminOutcome, AdminRequest, Config, DocumentStore};

#[derive(Debug, Parser)]
#[command(name = "fixture_kit", version, about = "Test fixture utilities")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Validate every record in the sample file
    Validate {
        /// Sample file (defaults to FIXTURE_SAMPLES)
        #[arg(long)]
        samples: Option<PathBuf>,
    },
    /// Print database and cache connection URLs
    Urls {
        /// Connection config file (defaults to FIXTURE_DB_CONFIG)
        #[arg(long)]
        config: Option<PathBuf>,
        /// Only print the URL of this database
        #[arg(long)]
        database: Option<String>,
    },
    /// Load valid samples into a fresh store and print it as JSON
    Seed {
        /// Sample file (defaults to FIXTURE_SAMPLES)
        #[arg(long)]
        samples: Option<PathBuf>,
        #[arg(long, requires_all = ["admin_username", "admin_password"])]
        admin_email: Option<String>,
        #[arg(long, requires_all = ["admin_email", "admin_password"])]
        admin_username: Option<String>,
        #[arg(
            long,
            env = "FIXTURE_ADMIN_PASSWORD",
            hide_env_values = true,
            requires_all = ["admin_email", "admin_username"]
        )]
        admin_password: Option<String>,
    },
}

fn main() -> ExitCode {
    // Logs go to stderr so stdout stays parseable
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "fixture_kit=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = Config::from_env();

    match run(cli.command, &config) {
        Ok(code) => code,
        Err(err) => {
            tracing::error!("{:#}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(command: Command, config: &Config) -> anyhow::Result<ExitCode> {
    match command {
        Command::Validate { samples } => {
            let set = read_samples(samples.as_deref().unwrap_or(&config.samples_path))?;
            let invalid = set.invalid_records();
            for record in &invalid {
                warn!(kind = record.kind, index = record.index, "{}", record.reason);
            }
            info!(
                total = set.len(),
                invalid = invalid.len(),
                "Sample validation finished"
            );
            Ok(if invalid.is_empty() {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
        Command::Urls { config: path, database } => {
            let path = path.as_deref().unwrap_or(&config.db_config_path);
            let db_config = load_db_config(path)
                .with_context(|| format!("loading {}", path.display()))?;

            match database {
                Some(name) => println!("{}", db_config.db_url(&name)?),
                None => {
                    for name in db_config.databases.keys() {
                        println!("{}\t{}", name, db_config.db_url(name)?);
                    }
                    println!("redis\t{}", db_config.redis_url());
                }
            }
            Ok(ExitCode::SUCCESS)
        }
        Command::Seed {
            samples,
            admin_email,
            admin_username,
            admin_password,
        } => {
            let set = read_samples(samples.as_deref().unwrap_or(&config.samples_path))?;
            let mut store = DocumentStore::with_id_length(config.id_length);
            seed_store(&mut store, &set)?;

            if let (Some(email), Some(username), Some(password)) =
                (admin_email, admin_username, admin_password)
            {
                let request = AdminRequest::new(email, username, password);
                match bootstrap_admin(&mut store, &request)? {
                    AdminOutcome::Created(id) => info!(id = %id, "Admin user created"),
                    AdminOutcome::AlreadyExists => info!("Admin user already present"),
                }
            }

            println!("{}", serde_json::to_string_pretty(&store.snapshot())?);
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn read_samples(path: &Path) -> anyhow::Result<SampleSet> {
    let raw = load_samples(path).with_context(|| format!("loading {}", path.display()))?;
    Ok(SampleSet::from_value(&raw)?)
}

/// Inserts every valid sample under its kind's collection, skipping invalid ones.
fn seed_store(store: &mut DocumentStore, set: &SampleSet) -> anyhow::Result<()> {
    let invalid = set.invalid_records();

    for kind in RECORD_KINDS {
        for (index, record) in set.records(kind)?.iter().enumerate() {
            if invalid.iter().any(|r| r.kind == kind && r.index == index) {
                warn!(kind, index, "skipping invalid sample");
                continue;
            }
            let Value::Object(fields) = record else {
                bail!("{} sample {} is not an object", kind, index);
            };
            store.insert(kind, fields.clone());
        }
        info!(kind, count = store.count(kind), "Seeded collection");
    }
    Ok(())
}
