use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use flotool::registry::{self, Tool};

#[derive(Parser)]
#[command(
    name = "flotool",
    about = "Flonest tools orchestrator - strict single entry point",
    version
)]
struct Args {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// List available tools
    List,
    /// Read a tool's source and capabilities
    Read {
        /// Tool name
        tool: String,
    },
    /// Execute a tool
    Use {
        /// Tool name
        tool: String,
        /// Repo root path
        #[arg(long, default_value = ".")]
        root: PathBuf,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "flotool=info,git2=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();

    match args.command {
        None | Some(Command::List) => {
            registry::list_tools();
            ExitCode::SUCCESS
        }
        Some(Command::Read { tool }) => match tool.parse::<Tool>() {
            Ok(tool) => {
                registry::read_tool(tool);
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("{e}");
                registry::list_tools();
                ExitCode::FAILURE
            }
        },
        Some(Command::Use { tool, root }) => {
            let tool = match tool.parse::<Tool>() {
                Ok(tool) => tool,
                Err(e) => {
                    eprintln!("{e}");
                    registry::list_tools();
                    return ExitCode::FAILURE;
                }
            };

            let root = match root.canonicalize() {
                Ok(root) => root,
                Err(e) => {
                    eprintln!("Invalid root path {}: {e}", root.display());
                    return ExitCode::FAILURE;
                }
            };

            println!("\nExecuting: {tool}");
            println!("   {}\n", tool.summary());

            match tool.run(&root).await {
                Ok(()) => {
                    println!("\n{tool} completed successfully\n");
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    eprintln!("\nError executing {tool}: {e}\n");
                    ExitCode::FAILURE
                }
            }
        }
    }
}
