mod inspect_cmd;
mod plan_cmd;

use clap::{Parser, Subcommand};

use charter_core::ALL_DOMAINS;

#[derive(Parser)]
#[command(name = "charter", about = "Turn a free-text software goal into a structured project plan")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a plan for a goal and persist it
    Plan {
        /// The software goal to plan (free text)
        goal: String,
        /// Output file path
        #[arg(long, default_value = charter_core::DEFAULT_PLAN_FILE)]
        output: String,
        /// Model command line (overrides CHARTER_MODEL_CMD env var)
        #[arg(long)]
        model_cmd: Option<String>,
        /// Skip classification and force a domain (marketplace, dashboard, social, general)
        #[arg(long)]
        domain: Option<String>,
    },
    /// Load a persisted plan and print a structural summary
    Inspect {
        /// Path to the plan file
        file: String,
    },
    /// List the domain set and available templates
    Domains,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Plan {
            goal,
            output,
            model_cmd,
            domain,
        } => {
            plan_cmd::run_plan(&goal, &output, model_cmd.as_deref(), domain.as_deref()).await?;
        }
        Commands::Inspect { file } => {
            inspect_cmd::run_inspect(&file)?;
        }
        Commands::Domains => {
            for domain in ALL_DOMAINS {
                match domain.template() {
                    Some(template) => println!(
                        "{domain}: {} core features, {} pages, {} files",
                        template.core_features.len(),
                        template.pages.len(),
                        template.file_structure.len()
                    ),
                    None => println!("{domain}: no template (classifier default)"),
                }
            }
        }
    }

    Ok(())
}
