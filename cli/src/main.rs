mod repl;
mod table;
mod tui;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use lyra_core::repository::file::DEFAULT_FILE_PATH;
use lyra_core::{FileTaskRepository, Session, TaskDto};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "lyra")]
#[command(about = "A personal task-tracking assistant", long_about = None)]
struct Cli {
    /// Task file to load from and save to
    #[arg(short, long, env = "LYRA_FILE", default_value = DEFAULT_FILE_PATH, global = true)]
    file: PathBuf,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Read commands line by line from stdin (default)
    Repl,
    /// Open the terminal chat interface
    Tui,
    /// Run a single command, e.g. `lyra run todo Buy milk`
    Run {
        #[arg(trailing_var_arg = true, allow_hyphen_values = true, required = true)]
        args: Vec<String>,
    },
    /// Print all tasks as a table
    Table,
    /// Print all tasks as JSON
    Export,
}

fn main() -> Result<()> {
    if std::env::var("LYRA_DEBUG").is_ok() {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::new("lyra=debug,lyra_core=debug"))
            .with_writer(std::io::stderr)
            .init();
    }

    let cli = Cli::parse();
    let mut session = Session::open(FileTaskRepository::new(&cli.file));

    match cli.command {
        None | Some(Commands::Repl) => {
            let stdin = std::io::stdin();
            repl::run(&mut session, stdin.lock(), std::io::stdout().lock())?;
        }
        Some(Commands::Tui) => {
            tui::run(session)?;
        }
        Some(Commands::Run { args }) => {
            if let Some(notice) = session.startup_notice() {
                eprintln!("{}", notice);
            }
            let response = session.handle(&args.join(" "));
            println!("{}", response.message);
        }
        Some(Commands::Table) => {
            println!("{}", table::render(session.tasks()));
        }
        Some(Commands::Export) => {
            let dtos = TaskDto::from_tasks(session.tasks());
            println!("{}", serde_json::to_string_pretty(&dtos)?);
        }
    }
    Ok(())
}
