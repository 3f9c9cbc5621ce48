//! Detachd CLI: run the claims rules against local files and roles.
//!
//! Configuration is read from the environment (and `.env`), as for the API.

use anyhow::Context;
use clap::{Parser, Subcommand};
use detachd_cli::{assess_paths, decide, init_tracing, navigation_for, AccessQuery};
use detachd_core::models::UploadKind;
use detachd_core::Config;
use serde::Serialize;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "detachd", about = "Detachd claims rules CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum KindArg {
    Documents,
    Media,
}

impl From<KindArg> for UploadKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Documents => UploadKind::Documents,
            KindArg::Media => UploadKind::Media,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Validate files and flag document risk as one upload batch
    Assess {
        /// Files to assess
        #[arg(required = true)]
        paths: Vec<PathBuf>,
        /// Upload step the files belong to
        #[arg(long, value_enum, default_value = "documents")]
        kind: KindArg,
        /// Risk score before the batch (defaults to RISK_BASE_SCORE)
        #[arg(long)]
        base_score: Option<i64>,
        /// Seed for reproducible fraud checks
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Decide whether a session may view a route
    Access {
        /// Role of the session
        #[arg(long)]
        role: Option<String>,
        /// Comma-separated roles allowed on the route
        #[arg(long, value_delimiter = ',', required = true)]
        allow: Vec<String>,
        /// Redirect target for disallowed roles
        #[arg(long)]
        redirect_to: Option<String>,
        /// Send disallowed roles to the dashboard instead of a denial screen
        #[arg(long)]
        no_access_denied: bool,
        /// Treat the session as signed out
        #[arg(long)]
        unauthenticated: bool,
    },
    /// Print the navigation menu for a role
    Nav {
        #[arg(long)]
        role: String,
    },
}

fn print_json(value: &impl Serialize) -> anyhow::Result<()> {
    let out = serde_json::to_string_pretty(value).context("Serialize output")?;
    println!("{}", out);
    Ok(())
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let cli = Cli::parse();
    let config = Config::from_env().context("Failed to load configuration")?;

    match cli.command {
        Commands::Assess {
            paths,
            kind,
            base_score,
            seed,
        } => {
            let report = assess_paths(&config, kind.into(), &paths, base_score, seed)?;
            print_json(&report)?;
        }
        Commands::Access {
            role,
            allow,
            redirect_to,
            no_access_denied,
            unauthenticated,
        } => {
            let authenticated = !unauthenticated && role.is_some();
            let query = AccessQuery {
                role,
                authenticated,
                allowed_roles: allow,
                redirect_to,
                show_access_denied: !no_access_denied,
            };
            print_json(&decide(&config, &query))?;
        }
        Commands::Nav { role } => {
            print_json(&serde_json::json!({
                "role": role,
                "items": navigation_for(&role),
            }))?;
        }
    }

    Ok(())
}
