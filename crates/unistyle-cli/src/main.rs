//! `unistyle` - style text with Unicode mathematical letterforms.

mod commands;
mod config;

use std::io::{IsTerminal, Read};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Args, Parser, Subcommand};
use thiserror::Error;

#[derive(Debug, Parser)]
#[command(
    name = "unistyle",
    version,
    about = "Style text with Unicode mathematical letterforms"
)]
struct Cli {
    /// Extra style sheet (YAML). Defaults to <config dir>/unistyle/styles.yaml when present
    #[arg(long, value_name = "FILE", global = true)]
    styles: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Apply a style
    Encode(TextArgs),
    /// Remove a style
    Decode(TextArgs),
    /// Remove the style if the text has it, apply it otherwise
    Toggle(TextArgs),
    /// Report whether encoding or decoding would change the text
    Check(TextArgs),
    /// List available styles with a preview
    List {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Debug, Args)]
struct TextArgs {
    /// Style name or alias
    style: String,
    /// Text to convert; read from stdin when omitted
    text: Vec<String>,
}

#[derive(Debug, Error)]
enum CliError {
    #[error("no text given and stdin is a terminal")]
    NoInput,
    #[error("failed to read stdin")]
    Stdin(#[source] std::io::Error),
}

/// Raw input from arguments, or all of stdin.
///
/// Stdin is read as bytes so invalid UTF-8 reaches the library and is
/// reported with its position. Returns whether the text came from
/// arguments, which decides if a newline is printed after the result.
fn input_bytes(args: &TextArgs) -> Result<(Vec<u8>, bool), CliError> {
    if !args.text.is_empty() {
        return Ok((args.text.join(" ").into_bytes(), true));
    }
    let mut stdin = std::io::stdin();
    if stdin.is_terminal() {
        return Err(CliError::NoInput);
    }
    let mut input = Vec::new();
    stdin.read_to_end(&mut input).map_err(CliError::Stdin)?;
    Ok((input, false))
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn emit(output: &str, newline: bool) {
    if newline {
        println!("{}", output);
    } else {
        print!("{}", output);
    }
}

fn run(cli: Cli) -> Result<()> {
    let registry = config::load_registry(cli.styles.as_deref())?;

    match cli.command {
        Command::Encode(args) => {
            let (input, newline) = input_bytes(&args)?;
            emit(&registry.encode_utf8(&args.style, &input)?, newline);
        }
        Command::Decode(args) => {
            let (input, newline) = input_bytes(&args)?;
            emit(&registry.decode_utf8(&args.style, &input)?, newline);
        }
        Command::Toggle(args) => {
            let (input, newline) = input_bytes(&args)?;
            emit(&commands::toggle(&registry, &args.style, &input)?, newline);
        }
        Command::Check(args) => {
            let (input, _) = input_bytes(&args)?;
            println!("{}", commands::check(&registry, &args.style, &input)?);
        }
        Command::List { json: true } => {
            println!(
                "{}",
                commands::list_json(&registry).context("failed to serialize style list")?
            );
        }
        Command::List { json: false } => print!("{}", commands::list_text(&registry)),
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(err) = run(cli) {
        eprintln!("{} {:#}", console::style("error:").red().bold(), err);
        std::process::exit(1);
    }
}
