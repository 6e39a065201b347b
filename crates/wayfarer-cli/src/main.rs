mod config;
mod render;
mod tui;

use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use clap::{CommandFactory, Parser, Subcommand};

use wayfarer_core::{
    ExplorerFilter, ItineraryDocument, Month, Season, Selection, SortKey, ViewState, clamp_days,
    export_itinerary, generate_itinerary_with,
};

use config::WayfarerConfig;

#[derive(Parser)]
#[command(name = "wayfarer", about = "Trip planner: itineraries, restaurants and local highlights")]
struct Cli {
    /// Catalog TOML file (overrides WAYFARER_CATALOG env var)
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Seed for itinerary crowd levels (overrides WAYFARER_SEED env var)
    #[arg(long, global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a wayfarer config file with the built-in defaults
    Init {
        /// Overwrite existing config file
        #[arg(long)]
        force: bool,
    },
    /// Submit a trip and print the view it selects
    Plan {
        /// Where you want to explore
        destination: String,
        /// Number of days (clamped to 1..=30)
        #[arg(long, allow_negative_numbers = true)]
        days: Option<i64>,
        /// What to explore: itinerary, restaurant or specific-places
        #[arg(long)]
        mode: Option<String>,
        /// Restaurant ordering: rating, reviews or google-rating
        #[arg(long)]
        sort: Option<SortKey>,
        /// Explorer search text (matches names and descriptions)
        #[arg(long, default_value = "")]
        search: String,
        /// Explorer month filter, or "all"
        #[arg(long, default_value = "all")]
        month: Selection<Month>,
        /// Explorer season filter, or "all"
        #[arg(long, default_value = "all")]
        season: Selection<Season>,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Generate an itinerary and write it to a .json or .toml file
    Export {
        /// Where you want to explore
        destination: String,
        /// Number of days (clamped to 1..=30)
        #[arg(long, allow_negative_numbers = true)]
        days: Option<i64>,
        /// Output file; the extension picks the format
        #[arg(long, short)]
        output: PathBuf,
    },
    /// Launch the interactive planner
    Ui,
    /// Print shell completions
    Completions {
        /// Target shell
        shell: clap_complete::Shell,
    },
}

/// Execute the `wayfarer init` command: write config file.
fn cmd_init(force: bool) -> anyhow::Result<()> {
    let path = config::config_path();

    if path.exists() && !force {
        anyhow::bail!(
            "config file already exists at {}\nUse --force to overwrite.",
            path.display()
        );
    }

    let cfg = config::starter_config();
    config::save_config(&cfg)?;

    println!("Config written to {}", path.display());
    if let Some(days) = cfg.defaults.days {
        println!("  defaults.days = {days}");
    }
    if let Some(mode) = &cfg.defaults.mode {
        println!("  defaults.mode = {mode}");
    }
    if let Some(sort) = &cfg.defaults.sort {
        println!("  defaults.sort = {sort}");
    }

    Ok(())
}

struct PlanArgs {
    destination: String,
    days: Option<i64>,
    mode: Option<String>,
    sort: Option<SortKey>,
    filter: ExplorerFilter,
    json: bool,
}

/// Execute the `wayfarer plan` command.
fn cmd_plan(cfg: &WayfarerConfig, args: PlanArgs) -> anyhow::Result<()> {
    let catalog = cfg.load_catalog()?;
    let mut rng = cfg.rng();

    let days = args.days.map(clamp_days).unwrap_or(cfg.days);
    let mode = args.mode.unwrap_or_else(|| cfg.mode.to_string());

    let mut state =
        ViewState::Home.submit_form(&mut rng, &catalog, &args.destination, days, &mode);

    match &mut state {
        ViewState::Restaurants(view) => view.sort = args.sort.unwrap_or(cfg.sort),
        ViewState::Explorer(view) => view.filter = args.filter,
        _ => {}
    }

    if args.json {
        let doc = render::render_json(&state, &catalog);
        let text = serde_json::to_string_pretty(&doc).context("failed to serialize view")?;
        println!("{text}");
    } else {
        let mut out = std::io::stdout().lock();
        render::render_text(&mut out, &state, &catalog)?;
        out.flush()?;
    }

    Ok(())
}

/// Execute the `wayfarer export` command.
fn cmd_export(
    cfg: &WayfarerConfig,
    destination: &str,
    days: Option<i64>,
    output: &std::path::Path,
) -> anyhow::Result<()> {
    let destination = destination.trim();
    if destination.is_empty() {
        anyhow::bail!("destination must not be empty");
    }

    let catalog = cfg.load_catalog()?;
    let days = days.map(clamp_days).unwrap_or(cfg.days);
    let entries = generate_itinerary_with(&mut cfg.rng(), &catalog, destination, days);
    let document = ItineraryDocument::new(destination, entries);

    export_itinerary(output, &document)
        .with_context(|| format!("failed to export itinerary to {}", output.display()))?;

    println!("{days}-day itinerary for {destination} written to {}", output.display());
    Ok(())
}

fn main() -> anyhow::Result<()> {
    // Default to warn so log lines do not garble the TUI.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Init { force } => {
            cmd_init(force)?;
        }
        Commands::Plan {
            destination,
            days,
            mode,
            sort,
            search,
            month,
            season,
            json,
        } => {
            let resolved = WayfarerConfig::resolve(cli.catalog, cli.seed)?;
            let args = PlanArgs {
                destination,
                days,
                mode,
                sort,
                filter: ExplorerFilter {
                    search,
                    month,
                    season,
                },
                json,
            };
            cmd_plan(&resolved, args)?;
        }
        Commands::Export {
            destination,
            days,
            output,
        } => {
            let resolved = WayfarerConfig::resolve(cli.catalog, cli.seed)?;
            cmd_export(&resolved, &destination, days, &output)?;
        }
        Commands::Ui => {
            let resolved = WayfarerConfig::resolve(cli.catalog, cli.seed)?;
            let app = tui::app::App::new(
                resolved.load_catalog()?,
                resolved.rng(),
                resolved.days,
                resolved.mode,
                resolved.sort,
            );
            tui::run(app)?;
        }
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            clap_complete::generate(shell, &mut cmd, "wayfarer", &mut std::io::stdout());
        }
    }

    Ok(())
}
