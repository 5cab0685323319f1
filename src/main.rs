//! sortpick - pick and order items from a checkbox list.
//!
//! Usage:
//!   sortpick -m "Load order" core ui net          Pick from arguments
//!   sortpick -m "Deploy" +api '!db' web            Pre-checked / disabled
//!   sortpick -f prompt.toml --format json         Prompt from a file
//!   sortpick --keys                               List key bindings

use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use clap::{Parser, ValueEnum};
use color_eyre::eyre::{Context, Result, eyre};
use serde::Deserialize;
use tracing_subscriber::EnvFilter;

use sortpick_core::{Choice, Instructions, Prompt, PromptConfig, PromptError, Validation, validator_fn};
use sortpick_tui::{Theme, ThemeVariant};

#[derive(Parser)]
#[command(
    name = "sortpick",
    version,
    about = "Pick and order items from a checkbox list",
    long_about = "sortpick shows an interactive checkbox list in the terminal.\n\n\
                  Check items with space, reorder them with ctrl+up/down, and press \
                  enter to print the checked values in their final order."
)]
struct Cli {
    /// Choices: `value`, `label=value`, `!value` (disabled) or `+value` (checked)
    choices: Vec<String>,

    /// Prompt message
    #[arg(short, long)]
    message: Option<String>,

    /// Load message, options and choices from a TOML or JSON file
    #[arg(short = 'f', long)]
    from_file: Option<PathBuf>,

    /// Refuse to submit an empty selection
    #[arg(long)]
    required: bool,

    /// Rotate items when moving past either end
    #[arg(long = "loop")]
    sorting_loop: bool,

    /// Number of visible rows
    #[arg(short, long)]
    page_size: Option<usize>,

    /// Hide the key help
    #[arg(long, conflicts_with = "instructions")]
    no_instructions: bool,

    /// Replace the key help
    #[arg(long)]
    instructions: Option<String>,

    /// Minimum number of checked items
    #[arg(long)]
    min: Option<usize>,

    /// Maximum number of checked items
    #[arg(long)]
    max: Option<usize>,

    /// Output format
    #[arg(long, default_value = "text")]
    format: OutputFormat,

    /// Color theme (dark or light)
    #[arg(long, default_value = "dark")]
    theme: ThemeVariant,

    /// Write logs to this file
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Print the key bindings and exit
    #[arg(long)]
    keys: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum, Default)]
enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Contents of a `--from-file` prompt file.
#[derive(Debug, Default, Deserialize)]
struct PromptFile {
    message: Option<String>,
    page_size: Option<usize>,
    instructions: Option<Instructions>,
    sorting_loop: Option<bool>,
    required: Option<bool>,
    #[serde(default)]
    choices: Vec<Choice<String>>,
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    if cli.keys {
        for binding in sortpick_tui::event::get_key_bindings() {
            println!("{:>10}  {}", binding.keys, binding.description);
        }
        return Ok(());
    }

    if let Some(path) = &cli.log_file {
        init_logging(path)?;
    }

    let file = match &cli.from_file {
        Some(path) => load_prompt_file(path)?,
        None => PromptFile::default(),
    };
    let (config, choices) = build_prompt(&cli, file)?;

    let mut prompt = Prompt::new(config);
    if cli.min.is_some() || cli.max.is_some() {
        let (min, max) = (cli.min, cli.max);
        prompt = prompt.with_validator(validator_fn(move |selection: &[&Choice<String>]| {
            check_count(selection.len(), min, max)
        }));
    }

    let theme = Theme::from_variant(cli.theme);
    match sortpick_tui::run_blocking(&prompt, choices, &theme) {
        Ok(answer) => {
            tracing::info!(selected = answer.len(), "prompt finished");
            print_answer(&answer, cli.format)?;
        }
        Err(err) if err.downcast_ref::<PromptError>() == Some(&PromptError::Aborted) => {
            std::process::exit(130);
        }
        Err(err) => return Err(err),
    }

    Ok(())
}

/// Send logs to a file, the terminal belongs to the prompt.
fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Cannot create log file {}", path.display()))?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();

    Ok(())
}

/// Load a prompt file, picking the format from the extension (TOML by default).
fn load_prompt_file(path: &Path) -> Result<PromptFile> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Cannot read {}", path.display()))?;

    let file = match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => serde_json::from_str(&text).context("Invalid JSON prompt file")?,
        _ => toml::from_str(&text).context("Invalid TOML prompt file")?,
    };
    Ok(file)
}

/// Merge the prompt file with command-line flags, flags win.
fn build_prompt(cli: &Cli, file: PromptFile) -> Result<(PromptConfig, Vec<Choice<String>>)> {
    let message = cli
        .message
        .clone()
        .or(file.message)
        .ok_or_else(|| eyre!("A message is required (--message or `message` in the prompt file)"))?;

    let mut builder = PromptConfig::builder();
    builder
        .message(message)
        .sorting_loop(cli.sorting_loop || file.sorting_loop.unwrap_or(false))
        .required(cli.required || file.required.unwrap_or(false));

    if let Some(page_size) = cli.page_size.or(file.page_size) {
        builder.page_size(page_size);
    }

    let instructions = if cli.no_instructions {
        Some(Instructions::Hidden)
    } else {
        cli.instructions.clone().map(Instructions::Custom).or(file.instructions)
    };
    if let Some(instructions) = instructions {
        builder.instructions(instructions);
    }

    let config = builder.build().map_err(PromptError::from)?;

    let mut choices = file.choices;
    choices.extend(cli.choices.iter().map(|arg| parse_choice(arg)));
    if choices.is_empty() {
        return Err(eyre!("No choices given"));
    }

    Ok((config, choices))
}

/// Parse `value`, `label=value`, `!value` or `+value`.
fn parse_choice(arg: &str) -> Choice<String> {
    let (disabled, rest) = match arg.strip_prefix('!') {
        Some(rest) => (true, rest),
        None => (false, arg),
    };
    let (checked, rest) = match rest.strip_prefix('+') {
        Some(rest) => (true, rest),
        None => (false, rest),
    };

    let choice = match rest.split_once('=') {
        Some((label, value)) => Choice::new(value.to_string()).with_label(label),
        None => Choice::new(rest.to_string()),
    };
    choice.checked(checked).with_disabled(disabled)
}

/// Validation for `--min` / `--max`.
fn check_count(count: usize, min: Option<usize>, max: Option<usize>) -> Validation {
    if let Some(min) = min.filter(|min| count < *min) {
        return Validation::Message(format!("Select at least {min} {}", choices_noun(min)));
    }
    if let Some(max) = max.filter(|max| count > *max) {
        return Validation::Message(format!("Select at most {max} {}", choices_noun(max)));
    }
    Validation::Valid
}

fn choices_noun(count: usize) -> &'static str {
    if count == 1 { "choice" } else { "choices" }
}

fn print_answer(answer: &[String], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => {
            for value in answer {
                println!("{value}");
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string(answer)?);
        }
    }
    Ok(())
}
