//! OC CLI - inspect and manage the site's data files.
//!
//! Reads and writes the same JSON blobs as the server (`OC_DATA_DIR`,
//! default `data`). Stop the server first when writing: it only reads the
//! files at startup.
//!
//! # Usage
//!
//! ```bash
//! oc-cli members list
//! oc-cli activities list
//! oc-cli activities add -t "함덕 해변 정화" -p "30,000" --describe
//! oc-cli activities clear --yes
//! oc-cli stats show
//! oc-cli stats set --tons "21,000"
//! oc-cli describe "애월 연안 수거"
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "oc-cli")]
#[command(author, version, about = "OC site data tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Inspect registered members
    Members {
        #[command(subcommand)]
        action: MembersAction,
    },
    /// Manage reward listings
    Activities {
        #[command(subcommand)]
        action: ActivitiesAction,
    },
    /// Show or overwrite headline stats
    Stats {
        #[command(subcommand)]
        action: StatsAction,
    },
    /// Generate an AI description for an activity title
    Describe {
        /// Activity title
        title: String,
    },
}

#[derive(Subcommand)]
enum MembersAction {
    /// List registered members (no passwords)
    List,
}

#[derive(Subcommand)]
enum ActivitiesAction {
    /// List listings, newest first
    List,
    /// Post a new listing
    Add {
        /// Listing title
        #[arg(short, long)]
        title: String,

        /// Reward amount in won
        #[arg(short, long)]
        price: String,

        /// Description
        #[arg(short, long, default_value = "")]
        desc: String,

        /// Image URL (defaults to the stock image)
        #[arg(short, long, default_value = "")]
        img: String,

        /// Generate the description with Gemini when `--desc` is empty
        #[arg(long)]
        describe: bool,
    },
    /// Remove every listing
    Clear {
        /// Confirm removal
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Subcommand)]
enum StatsAction {
    /// Show current stats
    Show,
    /// Overwrite stats; omitted values keep their current value
    Set {
        #[arg(long)]
        tons: Option<String>,
        #[arg(long)]
        years: Option<String>,
        #[arg(long)]
        prob: Option<String>,
    },
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Members { action } => match action {
            MembersAction::List => commands::members::list()?,
        },
        Commands::Activities { action } => match action {
            ActivitiesAction::List => commands::activities::list()?,
            ActivitiesAction::Add {
                title,
                price,
                desc,
                img,
                describe,
            } => {
                commands::activities::add(title, price, desc, img, describe).await?;
            }
            ActivitiesAction::Clear { yes } => commands::activities::clear(yes)?,
        },
        Commands::Stats { action } => match action {
            StatsAction::Show => commands::stats::show()?,
            StatsAction::Set { tons, years, prob } => commands::stats::set(tons, years, prob)?,
        },
        Commands::Describe { title } => commands::describe::run(&title).await?,
    }
    Ok(())
}
