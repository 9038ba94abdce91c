use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use intact_case::cli::output::{self, OutputFormat};
use intact_case::convert::FileConversion;
use intact_case::{Config, Converter, Style};
use log::{debug, warn};
use rayon::prelude::*;
use std::io::{self, BufRead, IsTerminal};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "intact-case")]
#[command(
    version,
    about = "Interconvert camelCase, StudlyCaps and delimited identifiers without losing acronyms",
    long_about = None
)]
struct Cli {
    /// Word delimiter for delimited styles [default: _]
    #[arg(short, long, global = true)]
    delimiter: Option<String>,

    /// Add a leading delimiter when the input starts with a capital (CSS vendor prefixes)
    #[arg(long, global = true)]
    vendor_prefix: bool,

    /// Keep the first word of camelCase input as written when tokenizing
    #[arg(long, global = true)]
    raw_first_word: bool,

    /// Output format (text, json)
    #[arg(short = 'o', long, default_value = "text", global = true)]
    format: OutputFormat,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Generate shell completion script
    #[arg(long, value_name = "SHELL")]
    completion: Option<Shell>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Convert identifiers to another case style (reads stdin when no input is given)
    Convert {
        /// Target style (camel, studly, snake, kebab, ucfirst, lcfirst, ...)
        #[arg(short, long)]
        style: Option<Style>,

        /// Convert every identifier inside these files
        #[arg(short = 'f', long = "file", value_name = "FILE")]
        files: Vec<PathBuf>,

        /// Identifiers to convert
        #[arg(value_name = "INPUTS")]
        inputs: Vec<String>,
    },
    /// Split identifiers into words (reads stdin when no input is given)
    Tokenize {
        /// Identifiers to split
        #[arg(value_name = "INPUTS")]
        inputs: Vec<String>,
    },
    /// Join words into a single identifier
    Compound {
        /// Words to join, in order
        #[arg(value_name = "TOKENS", required = true)]
        tokens: Vec<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    // Handle shell completion generation
    if let Some(shell) = cli.completion {
        let mut cmd = Cli::command();
        generate(shell, &mut cmd, "intact-case", &mut io::stdout());
        return Ok(());
    }

    let Some(command) = cli.command else {
        anyhow::bail!("No command specified. Use --help for usage information.");
    };

    let config = Config::load(cli.delimiter.clone(), cli.vendor_prefix, cli.raw_first_word)?;
    let converter = Converter::new(&config)?;
    let colored = !cli.no_color && io::stdout().is_terminal();

    match command {
        Commands::Convert {
            style,
            files,
            inputs,
        } => {
            let style = style.or(config.style).context(
                "No style given. Pass --style or set `style` in .intact-case.toml",
            )?;

            if !files.is_empty() {
                let results = files
                    .par_iter()
                    .map(|path| converter.convert_file(style, path))
                    .collect::<Result<Vec<FileConversion>>>()?;
                return output::print_files(&results, colored, cli.format);
            }

            let conversions: Vec<_> = read_inputs(inputs)?
                .iter()
                .map(|input| converter.conversion(style, input))
                .collect();
            output::print_conversions(&conversions, colored, cli.format)
        }
        Commands::Tokenize { inputs } => {
            let lists: Vec<_> = read_inputs(inputs)?
                .iter()
                .map(|input| converter.tokenize(input))
                .collect();
            output::print_tokens(&lists, colored, cli.format)
        }
        Commands::Compound { tokens } => {
            let compounded = converter.compound(&tokens);
            output::print_compound(&tokens, &compounded, colored, cli.format)
        }
    }
}

/// Positional inputs, or one identifier per non-empty stdin line.
fn read_inputs(inputs: Vec<String>) -> Result<Vec<String>> {
    if !inputs.is_empty() {
        return Ok(inputs);
    }

    let mut lines = Vec::new();
    for line in io::stdin().lock().lines() {
        let line = line.context("Failed to read from stdin")?;
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            lines.push(trimmed.to_string());
        }
    }

    if lines.is_empty() {
        warn!("no input given on the command line or stdin");
    }
    debug!("read {} identifiers from stdin", lines.len());
    Ok(lines)
}
