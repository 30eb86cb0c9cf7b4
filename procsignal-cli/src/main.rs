mod ops;

use clap::{Parser, Subcommand};
use ops::{list_processes, parse_signal, signal_processes, OutputFormat};
use procsignal_core::{ProcConfig, ProcessSource, DEFAULT_PROC_ROOT};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Send a signal to processes by name.
#[derive(Parser)]
#[command(
    name = "procsignal",
    author,
    version,
    about = "Signal processes by name via /proc"
)]
struct Cli {
    /// Process information root
    #[arg(long, env = "HOST_PROC", default_value = DEFAULT_PROC_ROOT)]
    proc_root: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value = "table")]
    output: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Send a signal to every process with the given name
    Signal {
        /// Process name (exact, case-sensitive match)
        #[arg(long, short)]
        name: String,
        /// Signal number or name, e.g. 15, TERM, SIGTERM
        #[arg(long, short, value_parser = parse_signal, default_value = "TERM")]
        signal: i32,
    },
    /// List processes and their resolved names
    List {
        /// Only show processes with this name
        #[arg(long, short)]
        name: Option<String>,
    },
}

fn main() -> anyhow::Result<()> {
    // 加载 .env 文件（如果存在），忽略错误
    let _ = dotenvy::dotenv();
    init_tracing();
    let cli = Cli::parse();
    let config = ProcConfig::new(&cli.proc_root);

    match cli.command {
        Commands::Signal { name, signal } => signal_processes(config, &name, signal, cli.output)?,
        Commands::List { name } => {
            list_processes(&ProcessSource::new(config), name.as_deref(), cli.output)?
        }
    }

    Ok(())
}

fn init_tracing() {
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);
    let filter =
        tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into());
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}
