use anyhow::{bail, Context, Result};
use chrono::{NaiveDate, Utc};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use roomflow_core::{Catalog, ProbabilisticOccupancy, Room, StaffMember};
use roomflow_engine::{
    default_catalog, generate_window, run_rules, run_setup, validate_run, GeneratorConfig,
    JsonFileStore, RuleRunConfig, TaskStore,
};

mod config;
mod state;

#[derive(Parser, Debug)]
#[command(name = "roomflow", version, about = "Roomflow task scheduling CLI")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write a default ~/.roomflow/config.toml
    Init,

    /// Bulk setup: seed the built-in catalog (or a provided one) and
    /// generate the rolling window
    Setup {
        /// Room directory (CSV export or JSON)
        #[arg(long)]
        rooms: PathBuf,

        /// Staff roster (CSV export or JSON)
        #[arg(long)]
        staff: PathBuf,

        /// Catalog JSON; defaults to the built-in housekeeping catalog
        #[arg(long)]
        catalog: Option<PathBuf>,

        /// First day of the window (default: today)
        #[arg(long)]
        start_date: Option<NaiveDate>,

        /// Override the configured window length
        #[arg(long)]
        window_days: Option<u32>,

        /// Seed for the probabilistic occupancy fallback (reproducible runs)
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Generate the rolling window against an existing catalog file
    Generate {
        #[arg(long)]
        rooms: PathBuf,

        #[arg(long)]
        staff: PathBuf,

        #[arg(long)]
        catalog: PathBuf,

        #[arg(long)]
        start_date: Option<NaiveDate>,

        #[arg(long)]
        window_days: Option<u32>,

        #[arg(long)]
        seed: Option<u64>,
    },

    /// Steady-state recurring rules
    Rules {
        #[command(subcommand)]
        command: RulesCommand,
    },

    /// Post-run validation report over the stored tasks
    Validate {
        #[arg(long)]
        staff: PathBuf,

        /// Catalog the tasks were generated from; defaults to the built-in
        #[arg(long)]
        catalog: Option<PathBuf>,
    },
}

#[derive(Subcommand, Debug)]
enum RulesCommand {
    /// Run all due rules for one date
    Run {
        /// Schedule rules JSON
        #[arg(long)]
        rules: PathBuf,

        #[arg(long)]
        rooms: PathBuf,

        #[arg(long)]
        staff: PathBuf,

        /// Date to run for (default: today)
        #[arg(long)]
        date: Option<NaiveDate>,

        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Init => {
            config::init_config()?;
        }

        Command::Setup {
            rooms,
            staff,
            catalog,
            start_date,
            window_days,
            seed,
        } => {
            let cfg = config::load_config()?;
            let rooms = load_rooms(&rooms)?;
            let staff = load_staff(&staff)?;
            let catalog = catalog.map(|p| load_catalog(&p)).transpose()?;
            let gen_config = generator_config(&cfg, start_date, window_days)?;
            let mut occupancy = occupancy_source(&cfg, seed);
            let mut store = JsonFileStore::new(state::tasks_path()?);

            let summary = run_setup(
                catalog,
                &rooms,
                &staff,
                &mut occupancy,
                &mut store,
                &gen_config,
            )?;
            println!("{}", summary.summary());
            print_warnings(&summary.generation.warnings);
        }

        Command::Generate {
            rooms,
            staff,
            catalog,
            start_date,
            window_days,
            seed,
        } => {
            let cfg = config::load_config()?;
            let rooms = load_rooms(&rooms)?;
            let staff = load_staff(&staff)?;
            let catalog = load_catalog(&catalog)?;
            let gen_config = generator_config(&cfg, start_date, window_days)?;
            let mut occupancy = occupancy_source(&cfg, seed);
            let mut store = JsonFileStore::new(state::tasks_path()?);

            let summary = generate_window(
                &catalog,
                &rooms,
                &staff,
                &mut occupancy,
                &mut store,
                &gen_config,
            )?;
            println!("{}", summary.summary());
            if !summary.failed_days.is_empty() {
                println!("Failed days (safe to re-run): {:?}", summary.failed_days);
            }
            print_warnings(&summary.warnings);
        }

        Command::Rules { command } => match command {
            RulesCommand::Run {
                rules,
                rooms,
                staff,
                date,
                seed,
            } => {
                let cfg = config::load_config()?;
                let rules = roomflow_ingest::load_rules(&rules)
                    .with_context(|| "loading schedule rules")?;
                let rooms = load_rooms(&rooms)?;
                let staff = load_staff(&staff)?;
                let mut occupancy = occupancy_source(&cfg, seed);
                let mut store = JsonFileStore::new(state::tasks_path()?);

                let run_config = RuleRunConfig {
                    date: date.unwrap_or_else(|| Utc::now().date_naive()),
                    timezone: cfg.timezone()?,
                    slot_minutes: cfg.scheduling.slot_minutes,
                };

                let summary = run_rules(
                    &rules,
                    &rooms,
                    &staff,
                    &mut occupancy,
                    &mut store,
                    &run_config,
                )?;
                println!("{}", summary.summary());
                print_warnings(&summary.warnings);
            }
        },

        Command::Validate { staff, catalog } => {
            let staff = load_staff(&staff)?;
            let catalog = match catalog {
                Some(p) => load_catalog(&p)?,
                None => default_catalog(),
            };
            let store = JsonFileStore::new(state::tasks_path()?);
            let tasks = store.all()?;

            let report = validate_run(&catalog, &staff, &tasks, Utc::now());
            if report.is_valid {
                println!("Schedule is valid.");
            } else {
                println!("Schedule has {} issue(s):", report.issues.len());
                for issue in &report.issues {
                    println!("  - {issue}");
                }
            }
            println!(
                "Stats: {} templates, {} staff, {} scheduled tasks across {} active days",
                report.statistics.total_templates,
                report.statistics.total_staff,
                report.statistics.total_scheduled_tasks,
                report.statistics.active_days,
            );
        }
    }

    Ok(())
}

fn generator_config(
    cfg: &config::Config,
    start_date: Option<NaiveDate>,
    window_days: Option<u32>,
) -> Result<GeneratorConfig> {
    let start = start_date.unwrap_or_else(|| Utc::now().date_naive());
    Ok(GeneratorConfig::new(start)
        .with_window_days(window_days.unwrap_or(cfg.scheduling.window_days))
        .with_timezone(cfg.timezone()?))
}

fn occupancy_source(cfg: &config::Config, seed: Option<u64>) -> ProbabilisticOccupancy {
    match seed {
        Some(seed) => ProbabilisticOccupancy::seeded(seed, cfg.probabilities()),
        None => ProbabilisticOccupancy::from_entropy(cfg.probabilities()),
    }
}

fn is_csv(path: &Path) -> bool {
    path.extension().is_some_and(|e| e.eq_ignore_ascii_case("csv"))
}

fn load_rooms(path: &Path) -> Result<Vec<Room>> {
    if !path.exists() {
        bail!("rooms file not found: {}", path.display());
    }
    if is_csv(path) {
        roomflow_ingest::parse_rooms_csv(path)
    } else {
        roomflow_ingest::load_rooms(path)
    }
}

fn load_staff(path: &Path) -> Result<Vec<StaffMember>> {
    if !path.exists() {
        bail!("staff file not found: {}", path.display());
    }
    if is_csv(path) {
        roomflow_ingest::parse_staff_csv(path)
    } else {
        roomflow_ingest::load_staff(path)
    }
}

fn load_catalog(path: &Path) -> Result<Catalog> {
    if !path.exists() {
        bail!("catalog file not found: {}", path.display());
    }
    roomflow_ingest::load_catalog(path)
}

fn print_warnings(warnings: &[String]) {
    for w in warnings {
        println!("warning: {w}");
    }
}
