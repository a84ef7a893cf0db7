//! pathfinder CLI — take and score career aptitude assessments.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "pathfinder", version, about = "Career aptitude assessment")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Take an assessment interactively
    Take {
        /// Question bank TOML (defaults to the built-in assessment)
        #[arg(long)]
        bank: Option<PathBuf>,

        /// Allow moving past unanswered questions
        #[arg(long)]
        allow_skip: bool,

        /// Save the JSON report to the configured output directory
        #[arg(long)]
        save: bool,

        /// Output directory for the JSON report (implies --save)
        #[arg(long)]
        output: Option<PathBuf>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Score a list of answers without prompting
    Score {
        /// 0-based option per question, comma-separated ("-" leaves a question unanswered)
        #[arg(long)]
        answers: String,

        /// Question bank TOML (defaults to the built-in assessment)
        #[arg(long)]
        bank: Option<PathBuf>,

        /// Allow unanswered questions
        #[arg(long)]
        allow_skip: bool,

        /// Output format: text, json, markdown
        #[arg(long, default_value = "text")]
        format: String,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Validate question bank TOML files
    Validate {
        /// Path to question bank file or directory
        #[arg(long)]
        bank: PathBuf,
    },

    /// Show the career recommendations for each trait
    Careers {
        /// Only show this trait (analytical, creative, social, practical)
        #[arg(long = "trait")]
        trait_name: Option<String>,

        /// Question bank TOML (defaults to the built-in assessment)
        #[arg(long)]
        bank: Option<PathBuf>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Create starter config and example question bank
    Init,
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("pathfinder=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Take {
            bank,
            allow_skip,
            save,
            output,
            config,
        } => commands::take::execute(bank, allow_skip, save, output, config),
        Commands::Score {
            answers,
            bank,
            allow_skip,
            format,
            config,
        } => commands::score::execute(answers, bank, allow_skip, format, config),
        Commands::Validate { bank } => commands::validate::execute(bank),
        Commands::Careers {
            trait_name,
            bank,
            config,
        } => commands::careers::execute(trait_name, bank, config),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
