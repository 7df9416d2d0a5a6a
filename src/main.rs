//! optscan - scan a command line against a JSON option table.

use anyhow::{Context, Result};
use clap::{Parser as ClapParser, Subcommand};
use optscan::{OptionTable, Parser, Report};
use tracing_subscriber::EnvFilter;

/// Scan command lines against a declared option table.
#[derive(ClapParser, Debug)]
#[command(name = "optscan", version, about, disable_help_subcommand = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Scan arguments and print matches, unmatched count and operands as JSON
    Scan {
        /// JSON option table
        #[arg(long)]
        options: String,

        /// Suppress the scanner's diagnostics on stderr
        #[arg(long)]
        quiet: bool,

        /// Arguments to scan (the program name comes from the table)
        #[arg(last = true)]
        args: Vec<String>,
    },

    /// Print the help lines for an option table
    Help {
        /// JSON option table
        #[arg(long)]
        options: String,
    },
}

fn init_logging() {
    let filter = EnvFilter::try_from_env("OPTSCAN_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_table(json: &str) -> Result<OptionTable> {
    let table = OptionTable::from_json(json).context("failed to parse option table JSON")?;
    table.validate().context("invalid option table")?;
    Ok(table)
}

/// Build the argument vector: program name first, then the scanned arguments.
fn build_argv(table: &OptionTable, args: Vec<String>) -> Vec<String> {
    let program = table.name.clone().unwrap_or_else(|| "optscan".to_string());
    std::iter::once(program).chain(args).collect()
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Scan {
            options,
            quiet,
            args,
        } => {
            let table = load_table(&options)?;
            let argv = build_argv(&table, args);

            let mut parser = Parser::new(&argv).context("failed to create parser")?;
            parser.set_error_reporting(!quiet);
            table.register(&mut parser);

            let report = Report::collect(&mut parser);
            println!("{}", report.to_json().context("failed to serialize report")?);
        }
        Commands::Help { options } => {
            let table = load_table(&options)?;
            let argv = build_argv(&table, Vec::new());

            let mut parser = Parser::new(&argv).context("failed to create parser")?;
            table.register(&mut parser);

            if let Some(ref description) = table.description {
                println!("{}\n", description);
            }
            let stdout = std::io::stdout();
            parser
                .print_help(&mut stdout.lock())
                .context("failed to write help")?;
        }
    }

    Ok(())
}
