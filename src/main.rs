use anyhow::{Context, Result};
use clap::{Args, CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use protonames::batch::{self, Transform};
use protonames::cli::output::{print_results, print_summary, OutputFormat};
use protonames::{CaseFormatter, Config};
use std::fs;
use std::io::{self, BufRead};
use std::path::PathBuf;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "protonames")]
#[command(version, about = "Identifier case conversion and literal escaping for code generators", long_about = None)]
struct Cli {
    /// Output format (text, json)
    #[arg(short = 'o', long, global = true)]
    format: Option<OutputFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Exit with code 0 even if some inputs fail
    #[arg(long, global = true)]
    no_fail: bool,

    /// Extra word to render fully upper-cased in camel case (repeatable)
    #[arg(long, global = true)]
    initialism: Vec<String>,

    /// Generate shell completion script
    #[arg(long, value_name = "SHELL")]
    completion: Option<Shell>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Args, Debug)]
struct InputArgs {
    /// Values to transform; read from stdin, one per line, when omitted
    #[arg(value_name = "INPUTS")]
    inputs: Vec<String>,

    /// Read values from a file, one per line
    #[arg(short, long, conflicts_with = "inputs")]
    file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Split paths into directory, base name and extension
    SplitPath(InputArgs),
    /// Convert identifiers to UpperCamelCase
    UpperCamel(InputArgs),
    /// Convert identifiers to lowerCamelCase
    LowerCamel(InputArgs),
    /// Convert proto field names to JSON field names
    JsonName(InputArgs),
    /// Replace periods with underscores
    Periods(InputArgs),
    /// Trim leading and trailing whitespace
    Trim(InputArgs),
    /// Decode C-escaped byte strings into byte lists
    Bytes(InputArgs),
    /// Quote strings as escaped string literals
    String(InputArgs),
}

impl Commands {
    fn split(self) -> (Transform, InputArgs) {
        match self {
            Commands::SplitPath(args) => (Transform::SplitPath, args),
            Commands::UpperCamel(args) => (Transform::UpperCamel, args),
            Commands::LowerCamel(args) => (Transform::LowerCamel, args),
            Commands::JsonName(args) => (Transform::JsonName, args),
            Commands::Periods(args) => (Transform::Periods, args),
            Commands::Trim(args) => (Transform::Trim, args),
            Commands::Bytes(args) => (Transform::Bytes, args),
            Commands::String(args) => (Transform::String, args),
        }
    }
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    if let Some(shell) = cli.completion {
        let mut cmd = Cli::command();
        generate(shell, &mut cmd, "protonames", &mut io::stdout());
        return Ok(());
    }

    let Some(command) = cli.command else {
        anyhow::bail!("No command specified. Use --help for usage information.");
    };
    let (transform, args) = command.split();

    let config = Config::load(
        cli.format.map(|f| f.to_string()),
        cli.no_color,
        cli.initialism.clone(),
    )?;
    let format: OutputFormat = config
        .format
        .parse()
        .map_err(|e: String| anyhow::anyhow!(e))
        .context("Invalid output format in config")?;
    let formatter = CaseFormatter::with_initialisms(&config.initialisms);

    let inputs = read_inputs(&args)?;
    debug!(command = %transform, count = inputs.len(), "processing inputs");

    let result = batch::run(transform, &formatter, &inputs);
    if result.failed > 0 {
        warn!(command = %transform, failed = result.failed, "some inputs could not be transformed");
    }

    let mut stdout = io::stdout().lock();
    let mut stderr = io::stderr().lock();
    print_results(transform, &result, format, config.color, &mut stdout, &mut stderr)?;
    print_summary(&result, config.color, &mut stderr)?;

    if result.failed > 0 && !cli.no_fail {
        std::process::exit(1);
    }

    Ok(())
}

fn init_logging() {
    let filter = EnvFilter::try_from_env("PROTONAMES_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn read_inputs(args: &InputArgs) -> Result<Vec<String>> {
    if let Some(path) = &args.file {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file: {}", path.display()))?;
        return Ok(content.lines().map(str::to_string).collect());
    }

    if !args.inputs.is_empty() {
        return Ok(args.inputs.clone());
    }

    io::stdin()
        .lock()
        .lines()
        .collect::<io::Result<Vec<_>>>()
        .context("Failed to read inputs from stdin")
}
