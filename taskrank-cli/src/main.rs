use anyhow::{bail, Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use taskrank_core::{summary_input, Prioritization, Prioritizer, ScoringStrategy, Summary};
use taskrank_ingest::{mark_completed, read_tasks, write_prioritized};
use taskrank_train::{train_file, TrainOptions};

mod add;
mod config;
mod report;
mod state;
mod summarize;

use config::Config;

#[derive(Parser, Debug)]
#[command(name = "taskrank", version, about = "Prioritize academic tasks by deadline, importance and difficulty")]
struct Cli {
    /// Debug-level logging (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Score, rank and summarize the pending tasks in a CSV file
    Rank {
        /// Task CSV with Task, Deadline, Difficulty, Importance[, Completed]
        #[arg(long)]
        csv: PathBuf,

        /// Model artifact (defaults to [model] path in config)
        #[arg(long, conflicts_with = "no_model")]
        model: Option<PathBuf>,

        /// Ignore any trained model and use heuristic scoring
        #[arg(long)]
        no_model: bool,

        /// Treat this date as today (YYYY-MM-DD)
        #[arg(long)]
        today: Option<NaiveDate>,

        /// Write the full prioritized table (default file from config)
        #[arg(long, num_args = 0..=1, value_name = "PATH")]
        export: Option<Option<PathBuf>>,

        /// Ask the summarization model for a study strategy
        #[arg(long)]
        summarize: bool,

        /// Limit number of rows printed
        #[arg(long, default_value_t = 20)]
        limit: usize,
    },

    /// Interactively add a task to a CSV file
    Add {
        #[arg(long)]
        csv: PathBuf,
    },

    /// Mark pending tasks with this name as completed
    Done {
        #[arg(long)]
        csv: PathBuf,

        name: String,
    },

    /// Fit the priority model from a labeled dataset (Difficulty, Importance, Priority)
    Train {
        #[arg(long, default_value = "tasks_dataset.csv")]
        dataset: PathBuf,

        /// Where to write the model (defaults to [model] path in config)
        #[arg(long)]
        out: Option<PathBuf>,

        #[arg(long, default_value_t = 42)]
        seed: u64,

        #[arg(long, default_value_t = 0.3)]
        test_size: f64,
    },

    /// Show whether a trained model is available
    Model {
        #[arg(long)]
        model: Option<PathBuf>,
    },

    /// Manage ~/.taskrank/config.toml
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Write the default config if none exists
    Init,
}

struct RankArgs {
    csv: PathBuf,
    model: Option<PathBuf>,
    no_model: bool,
    today: Option<NaiveDate>,
    export: Option<Option<PathBuf>>,
    summarize: bool,
    limit: usize,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter)).init();

    let cfg = config::load_config()?;

    match cli.command {
        Command::Rank {
            csv,
            model,
            no_model,
            today,
            export,
            summarize,
            limit,
        } => {
            run_rank(
                &cfg,
                RankArgs {
                    csv,
                    model,
                    no_model,
                    today,
                    export,
                    summarize,
                    limit,
                },
            )?;
        }

        Command::Add { csv } => {
            let today = resolve_today(&cfg, None)?;
            add::run_add(&csv, today)?;
        }

        Command::Done { csv, name } => {
            let n = mark_completed(&csv, &name)?;
            println!("Marked {} task(s) named '{}' completed", n, name.trim());
        }

        Command::Train {
            dataset,
            out,
            seed,
            test_size,
        } => {
            if !dataset.exists() {
                bail!("dataset not found: {} (pass --dataset <path>)", dataset.display());
            }
            let out = match out {
                Some(p) => p,
                None => cfg.model_path()?,
            };

            let report = train_file(&dataset, &out, TrainOptions { test_size, seed })
                .with_context(|| format!("training from {}", dataset.display()))?;

            println!("Training complete on {} rows ({} held out)", report.train_rows, report.test_rows);
            println!("Model R² score (reliability): {:.2}", report.r2);
            println!(
                "priority = {:.4} + {:.4}*difficulty + {:.4}*importance",
                report.model.intercept, report.model.difficulty_coef, report.model.importance_coef
            );
            println!("Model saved to {}", out.display());
        }

        Command::Model { model } => {
            let path = match model {
                Some(p) => p,
                None => cfg.model_path()?,
            };
            show_model(&path);
        }

        Command::Config { command } => match command {
            ConfigCommand::Init => config::init_config()?,
        },
    }

    Ok(())
}

fn resolve_today(cfg: &Config, today: Option<NaiveDate>) -> Result<NaiveDate> {
    match today {
        Some(d) => Ok(d),
        None => taskrank_core::today_in(&cfg.schedule.timezone),
    }
}

fn run_rank(cfg: &Config, args: RankArgs) -> Result<()> {
    if !args.csv.exists() {
        bail!("CSV not found: {} (pass --csv <path>)", args.csv.display());
    }
    let tasks = read_tasks(&args.csv).with_context(|| format!("importing {}", args.csv.display()))?;
    let today = resolve_today(cfg, args.today)?;

    let strategy = if args.no_model {
        ScoringStrategy::Heuristic
    } else {
        let path = match args.model {
            Some(p) => p,
            None => cfg.model_path()?,
        };
        ScoringStrategy::from_model_file(Some(path.as_path()))
    };
    let prioritizer = Prioritizer::new(strategy);

    println!("Loaded {} tasks from {} (today: {})", tasks.len(), args.csv.display(), today);
    println!("Scoring: {}\n", prioritizer.strategy().name());

    let ranked = match prioritizer.prioritize(&tasks, today) {
        Prioritization::NoPending => {
            println!("All tasks completed or no pending tasks left!");
            return Ok(());
        }
        Prioritization::Ranked(r) => r,
    };

    println!("## Recommended order\n");
    print!("{}", report::render_table(&ranked, args.limit));
    if ranked.len() > args.limit {
        println!("... {} more", ranked.len() - args.limit);
    }

    if let Some(summary) = Summary::compute(&tasks, &ranked) {
        println!("\n## Evaluation\n");
        print!("{}", report::render_summary(&summary));
    }

    if let Some(export) = args.export {
        let path = export.unwrap_or_else(|| cfg.export.file.clone());
        write_prioritized(&path, &ranked)?;
        println!("\nExported prioritized list to {}", path.display());
    }

    if args.summarize {
        println!("\n## Study strategy\n");
        match summarize::summarize(&cfg.summarizer, &summary_input(&ranked)) {
            Some(text) => println!("{text}"),
            None => println!("(summary unavailable)"),
        }
    }

    Ok(())
}

fn show_model(path: &Path) {
    match taskrank_core::LinearModel::load(path) {
        Ok(m) => {
            println!("Model loaded from {}", path.display());
            println!(
                "priority = {:.4} + {:.4}*difficulty + {:.4}*importance",
                m.intercept, m.difficulty_coef, m.importance_coef
            );
            match m.r2 {
                Some(r2) => println!("Held-out R² (reliability): {:.2}", r2),
                None => println!("Held-out R²: unknown"),
            }
        }
        Err(e) if path.exists() => {
            println!("Model at {} is unusable ({e:#}); heuristic scoring will be used.", path.display());
        }
        Err(_) => {
            println!("No model at {}; heuristic scoring will be used.", path.display());
            println!("Train one with: taskrank train --dataset <file>");
        }
    }
}
