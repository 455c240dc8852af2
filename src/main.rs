use anyhow::{anyhow, bail, Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;

use assets_manager::{
    apis::HttpClient,
    arguments::enabled_debug_flags,
    chains,
    config::{self, Config},
    ingest::{IngestOutcome, IngestionReport, RemoteIngestionPipeline},
    logger::{self, LogTag},
    paths,
    registry::{format_json_file, parse_asset_id, Reconciler, TemplateCreator, TokenListVariant},
    RegistryError,
};

#[derive(Parser)]
#[command(name = "assets-manager", version)]
#[command(about = "Maintain a file-based registry of blockchain asset metadata", long_about = None)]
struct Cli {
    /// Configuration file (default: ./assets.toml, then the data directory)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Registry root directory, overrides `registry.root_dir`
    #[arg(long, global = true, value_name = "DIR")]
    root: Option<PathBuf>,

    /// Show every log message
    #[arg(long, global = true)]
    verbose: bool,

    /// Only show warnings and errors
    #[arg(long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    /// Do not write the daily log file
    #[arg(long, global = true)]
    no_file_log: bool,

    #[arg(long, global = true, hide = true)]
    debug_registry: bool,
    #[arg(long, global = true, hide = true)]
    debug_tokenlist: bool,
    #[arg(long, global = true, hide = true)]
    debug_ingest: bool,
    #[arg(long, global = true, hide = true)]
    debug_logo: bool,
    #[arg(long, global = true, hide = true)]
    debug_api: bool,
    #[arg(long, global = true, hide = true)]
    debug_config: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Write a blank info.json for an asset, e.g. c60_t0xABC
    CreateTemplate { asset_id: String },

    /// Append a curated asset to one of its chain's token lists
    AddToken {
        asset_id: String,

        /// Target list: default or extended
        #[arg(long, default_value = "default")]
        list: TokenListVariant,
    },

    /// Ingest new assets from a remote feed
    Ingest {
        /// Chain coin id or handle
        #[arg(long)]
        chain: String,

        /// Feed URL; defaults to the first configured feed for the chain
        #[arg(long)]
        url: Option<String>,
    },

    /// Ingest every feed listed in the configuration
    IngestAll,

    /// Rewrite JSON files in the canonical layout
    Format {
        #[arg(required = true)]
        paths: Vec<PathBuf>,
    },

    /// List known chains
    Chains,

    /// Write the default configuration to a file
    InitConfig {
        /// Destination (default: ./assets.toml)
        path: Option<PathBuf>,

        /// Replace an existing file
        #[arg(long)]
        force: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    logger::init();

    let debug_flags = enabled_debug_flags();
    if !debug_flags.is_empty() {
        logger::debug(
            LogTag::System,
            &format!("Debug modes: {}", debug_flags.join(", ")),
        );
    }

    let code = match run(cli) {
        Ok(()) => 0,
        Err(e) => {
            logger::error(LogTag::System, &format!("{:#}", e));
            if e
                .downcast_ref::<RegistryError>()
                .map_or(false, RegistryError::is_recoverable)
            {
                logger::info(LogTag::System, "The failure may be transient; rerunning can succeed");
            }
            1
        }
    };

    if let Err(e) = logger::flush() {
        eprintln!("Failed to flush log file: {}", e);
    }
    std::process::exit(code);
}

fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = config::load_config(cli.config.as_deref())?;
    if let Some(root) = &cli.root {
        config.registry.root_dir = root.to_string_lossy().to_string();
    }
    logger::debug(
        LogTag::Config,
        &format!("Registry root: {}", config.registry.root_dir),
    );
    Ok(config)
}

fn run(cli: Cli) -> Result<()> {
    match &cli.command {
        Command::CreateTemplate { asset_id } => {
            let config = load_config(&cli)?;
            let path = TemplateCreator::new(&config).create_template(asset_id)?;
            println!("{} {}", "created".green(), path.display());
        }

        Command::AddToken { asset_id, list } => {
            let config = load_config(&cli)?;
            let parsed = parse_asset_id(asset_id)?;
            let token = parsed.require_token()?;
            let written = Reconciler::new(&config)
                .add_token_to_list(&parsed.chain, asset_id, token, *list)
                .with_context(|| format!("Failed to add {} to the {} list", asset_id, list))?;
            println!(
                "{} {} to {} {} list (version {}, {} tokens)",
                "added".green(),
                asset_id,
                parsed.chain.handle,
                list,
                written.version.major,
                written.tokens.len()
            );
        }

        Command::Ingest { chain, url } => {
            let config = load_config(&cli)?;
            let chain = chains::find_chain(chain).ok_or_else(|| anyhow!("Unknown chain '{}'", chain))?;
            let url = match url {
                Some(url) => url.clone(),
                None => config
                    .remote
                    .feeds
                    .iter()
                    .find(|f| f.chain_id == chain.id)
                    .map(|f| f.url.clone())
                    .ok_or_else(|| anyhow!("No --url given and no feed configured for {}", chain.handle))?,
            };

            let client = HttpClient::new(&config.http)?;
            let report = RemoteIngestionPipeline::new(&config, &client, &client)
                .ingest_from_remote(&chain, &url)?;
            print_report(&report);
            log_http_stats(&client);
        }

        Command::IngestAll => {
            let config = load_config(&cli)?;
            if config.remote.feeds.is_empty() {
                bail!("No feeds configured under [[remote.feeds]]");
            }

            let client = HttpClient::new(&config.http)?;
            let runs = RemoteIngestionPipeline::new(&config, &client, &client).ingest_all();
            let mut failed = 0;
            for run in &runs {
                match &run.result {
                    Ok(report) => print_report(report),
                    Err(e) => {
                        failed += 1;
                        println!("{} {}: {}", "feed failed".red(), run.feed.url, e);
                    }
                }
            }
            log_http_stats(&client);

            if failed > 0 {
                bail!("{} of {} feeds failed", failed, runs.len());
            }
        }

        Command::Format { paths } => {
            for path in paths {
                let changed = format_json_file(path)?;
                let status = if changed { "formatted".green() } else { "unchanged".dimmed() };
                println!("{} {}", status, path.display());
            }
        }

        Command::Chains => {
            let config = load_config(&cli)?;
            for chain in chains::all_chains() {
                let remote = if config.remote.supported_chains.contains(&chain.id) {
                    "remote".cyan()
                } else {
                    "".normal()
                };
                println!("{:>12}  {:<12} {:<20} {}", chain.id, chain.handle, chain.name, remote);
            }
        }

        Command::InitConfig { path, force } => {
            let path = path
                .clone()
                .unwrap_or_else(|| PathBuf::from(config::utils::CONFIG_FILE_NAME));
            if path.exists() && !force {
                bail!("{} already exists (use --force to replace it)", path.display());
            }
            config::save_config(&Config::default(), &path)?;
            println!("{} {}", "wrote".green(), path.display());
            logger::debug(
                LogTag::Config,
                &format!("Log files go to {}", paths::get_logs_directory().display()),
            );
        }
    }

    Ok(())
}

fn print_report(report: &IngestionReport) {
    for entry in &report.entries {
        let outcome = match &entry.outcome {
            IngestOutcome::Created => entry.outcome.to_string().green(),
            IngestOutcome::AlreadyKnown => entry.outcome.to_string().dimmed(),
            IngestOutcome::Failed(_) => entry.outcome.to_string().red(),
        };
        println!("{:<46} {}", entry.address, outcome);
    }
    println!("{}", report.summary().bold());
}

fn log_http_stats(client: &HttpClient) {
    let stats = client.stats();
    logger::debug(
        LogTag::Api,
        &format!(
            "HTTP requests: {} ok, {} failed, avg {:.0}ms",
            stats.succeeded(),
            stats.failed(),
            stats.average_ms()
        ),
    );
}
