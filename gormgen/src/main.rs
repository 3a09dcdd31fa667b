//! CLI entry point for gormgen

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use gormgen::codegen::{to_field_name, to_type_name, TypeResolver};
use gormgen::config::{load_env_file, process_env};
use gormgen::{GeneratorConfig, Overrides};
use gormgen_db::MySqlPool;

#[derive(Parser)]
#[command(name = "gormgen")]
#[command(about = "Generate Go GORM model structs from MySQL tables")]
#[command(version)]
struct Cli {
    /// Destination path for generated models [default: .]
    #[arg(long)]
    dest: Option<PathBuf>,

    /// Path to .env file
    #[arg(long)]
    env: Option<PathBuf>,

    /// Database user (falls back to DB_USER)
    #[arg(long)]
    dbuser: Option<String>,

    /// Database password (falls back to DB_PASSWORD)
    #[arg(long)]
    dbpassword: Option<String>,

    /// Database host (falls back to DB_HOST)
    #[arg(long)]
    dbhost: Option<String>,

    /// Database port (falls back to DB_PORT)
    #[arg(long)]
    dbport: Option<String>,

    /// Database name (falls back to DB_NAME)
    #[arg(long)]
    dbname: Option<String>,

    /// Comma-separated list of tables to generate models for (falls back to TABLES)
    #[arg(long)]
    tables: Option<String>,

    /// Path to configuration file (TOML format), lowest priority
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Go package name of the generated files [default: models]
    #[arg(long)]
    package: Option<String>,

    /// Dry run - show what would be generated without writing files
    #[arg(long)]
    dry_run: bool,

    /// Log level (trace, debug, info, warn, error), overridden by RUST_LOG
    #[arg(long)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate one model file per table (default)
    Generate,
    /// Show the introspected columns and their mapping without writing files
    Inspect,
}

impl Cli {
    fn overrides(&self) -> Overrides {
        Overrides {
            dest: self.dest.clone(),
            db_user: self.dbuser.clone(),
            db_password: self.dbpassword.clone(),
            db_host: self.dbhost.clone(),
            db_port: self.dbport.clone(),
            db_name: self.dbname.clone(),
            tables: self.tables.clone(),
            package: self.package.clone(),
            dry_run: self.dry_run,
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // The env file has to be in the process environment before the log
    // filter and the configuration read it
    let env_loaded = cli.env.as_deref().map(load_env_file).transpose();

    tracing_subscriber::fmt()
        .with_env_filter(log_filter(cli.log_level.as_deref()))
        .init();

    if let Err(e) = env_loaded {
        error!("{:#}", e);
        return ExitCode::FAILURE;
    }

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

/// Priority: RUST_LOG env var > --log-level > default (debug for dev, info for release)
fn log_filter(log_level: Option<&str>) -> EnvFilter {
    let default_level = if cfg!(debug_assertions) {
        "debug"
    } else {
        "info"
    };
    let log_level = log_level.unwrap_or(default_level);

    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level))
}

async fn run(cli: Cli) -> Result<()> {
    let config = GeneratorConfig::load(cli.config.as_deref(), process_env(), &cli.overrides())?;
    config.validate()?;

    let dsn = config.dsn();
    info!("Connecting to {}", dsn.redacted());
    let pool = MySqlPool::connect(&dsn)
        .await
        .context("Failed to connect to database")?;

    let result = match cli.command {
        Some(Commands::Inspect) => inspect_tables(&pool, &config).await,
        Some(Commands::Generate) | None => generate_models(&pool, &config).await,
    };

    if let Err(e) = pool.disconnect().await {
        warn!("Failed to disconnect cleanly: {}", e);
    }

    result
}

async fn generate_models(pool: &MySqlPool, config: &GeneratorConfig) -> Result<()> {
    let files = gormgen::generate(pool, config).await?;

    if config.dry_run {
        println!("Dry run mode - would generate:");
        for file in &files {
            println!("  Model: {} (table {})", file.path.display(), file.table);
        }
    }

    Ok(())
}

async fn inspect_tables(pool: &MySqlPool, config: &GeneratorConfig) -> Result<()> {
    let tables = gormgen::inspect(pool, config).await?;

    println!("Inspected {} tables:\n", tables.len());
    for table in &tables {
        println!("Table: {} -> {}", table.name, to_type_name(&table.name));
        println!("  Columns:");
        for col in &table.columns {
            println!(
                "    - {} {} -> {} {}",
                col.name,
                col.column_type,
                to_field_name(&col.name),
                TypeResolver::resolve(&col.data_type).type_name()
            );
        }
        println!();
    }

    Ok(())
}
