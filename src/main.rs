use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use clap_complete::{generate, Shell};
use recase::cli::output::OutputFormat;
use recase::{cli, CaseConverter, Config, Scheme};
use std::io::{self, BufRead};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "recase")]
#[command(version, about = "Convert strings to camelCase, kebab-case or dot.case", long_about = None)]
struct Cli {
    /// Strings to convert (read from stdin, one per line, when omitted)
    #[arg(value_name = "INPUTS")]
    inputs: Vec<String>,

    /// Target scheme (camel, kebab, dot)
    #[arg(short, long)]
    scheme: Option<Scheme>,

    /// Extra delimiter characters used alongside whitespace (e.g. "_-.")
    #[arg(short, long)]
    delimiters: Option<String>,

    /// Treat every input as a JSON value
    #[arg(long)]
    json: bool,

    /// Output format (text, json)
    #[arg(short = 'o', long, default_value = "text")]
    format: OutputFormat,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Exit with code 0 even if some inputs failed to convert
    #[arg(long)]
    no_fail: bool,

    /// Generate shell completion script
    #[arg(long, value_name = "SHELL")]
    completion: Option<Shell>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Parser, Debug)]
enum Commands {
    /// Print sample conversions for every scheme
    Demo,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    if let Some(shell) = cli.completion {
        let mut cmd = Cli::command();
        generate(shell, &mut cmd, "recase", &mut io::stdout());
        return Ok(());
    }

    let config = Config::load(
        cli.scheme,
        cli.delimiters.as_deref().map(|d| d.chars().collect()),
    )?;
    let converter = CaseConverter::new(&config)?;

    if let Some(Commands::Demo) = cli.command {
        cli::demo::run(&converter, !cli.no_color);
        return Ok(());
    }

    let inputs = if cli.inputs.is_empty() {
        read_stdin()?
    } else {
        cli.inputs
    };
    debug!(count = inputs.len(), "Collected inputs");

    let result = cli::convert_inputs(&converter, &inputs, config.scheme, cli.json)?;

    cli::output::print_results(&result, config.scheme, !cli.no_color, &cli.format)?;
    cli::output::print_summary(&result, !cli.no_color);

    if result.error_count > 0 && !cli.no_fail {
        std::process::exit(1);
    }

    Ok(())
}

fn read_stdin() -> Result<Vec<String>> {
    io::stdin()
        .lock()
        .lines()
        .collect::<io::Result<Vec<_>>>()
        .context("Failed to read inputs from stdin")
}
