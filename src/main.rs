//! Text Guard CLI Application.
//!
//! Command-line front end for the textguard library: masks contact details
//! in text and runs the form validators against single values.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use textguard::obfuscate::ObfuscatedMailto;
use textguard::validation::MaxDigitsValidator;
use textguard::{Config, ContentReplacementModel, StringModel, TextModel};

/// Text Guard
///
/// Replace disguised email addresses, phone numbers, web links and WeChat
/// IDs in text, and validate names and email addresses.
#[derive(Parser)]
#[command(name = "textguard")]
#[command(version, about, long_about = None)]
struct Cli {
    /// TOML configuration file (defaults to the built-in setup)
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply the replacer chain to text
    Replace {
        /// Input text file (defaults to stdin)
        #[arg(short, long, value_name = "FILE")]
        input: Option<PathBuf>,

        /// Output text file (defaults to stdout)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// HTML-escape the text before replacing
        #[arg(long)]
        escape: bool,
    },

    /// Check that a first and family name look like a real name
    CheckName {
        first: String,
        family: String,
    },

    /// Check an email address against the per-domain user name rules
    CheckEmail { email: String },

    /// Check that free text stays within the digit limit
    CheckDigits {
        text: String,

        /// Maximum number of digits (overrides `max_digits` in the config)
        #[arg(long, value_name = "N")]
        max: Option<usize>,
    },

    /// Print the on-load script for a scraper-resistant mailto link
    Mailto {
        /// Id of the element receiving the link
        id: String,
        /// Element content; `${emailLink}` is replaced by the link
        verbiage: String,
        email: String,
        /// Link text
        text: String,
    },
}

/// Command handler holding the loaded configuration.
struct GuardHandler {
    config: Config,
    escape_by_default: bool,
    verbose: bool,
}

impl GuardHandler {
    /// Loads the configuration file, if any.
    ///
    /// The file's `escape` setting only applies when a file is given; the
    /// built-in setup leaves escaping to `--escape`.
    fn new(config_path: Option<&Path>, verbose: bool) -> Result<Self> {
        let (config, escape_by_default) = match config_path {
            Some(path) => {
                let config = Config::load(path)
                    .with_context(|| format!("Failed to load {}", path.display()))?;
                let escape = config.escape();
                (config, escape)
            }
            None => (Config::default(), false),
        };
        Ok(Self {
            config,
            escape_by_default,
            verbose,
        })
    }

    fn replace(&self, input: Option<&Path>, output: Option<&Path>, escape: bool) -> Result<()> {
        let text = match input {
            Some(path) => std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?,
            None => {
                let mut text = String::new();
                io::stdin()
                    .read_to_string(&mut text)
                    .context("Failed to read stdin")?;
                text
            }
        };

        let chain = self
            .config
            .build_chain()
            .context("Invalid replacer configuration")?;
        let escape = escape || self.escape_by_default;
        if self.verbose {
            eprintln!("Replacers: {}", chain.len());
            eprintln!("Escape:    {}", escape);
        }

        let model = ContentReplacementModel::new(StringModel::new(text), Arc::new(chain))
            .with_escape_model_string(escape);
        let replaced = model.get().unwrap_or_default();

        match output {
            Some(path) => {
                std::fs::write(path, &replaced)
                    .with_context(|| format!("Failed to write to {}", path.display()))?;
                if self.verbose {
                    eprintln!("✓ Wrote {} bytes → {}", replaced.len(), path.display());
                }
            }
            None => {
                let mut stdout = io::stdout().lock();
                stdout
                    .write_all(replaced.as_bytes())
                    .and_then(|()| stdout.flush())
                    .context("Failed to write to stdout")?;
            }
        }
        Ok(())
    }

    fn check_name(&self, first: &str, family: &str) -> Result<()> {
        let validator = self
            .config
            .build_name_validator()
            .context("Invalid name configuration")?;
        validator.validate(first, family)?;
        println!("✓ Name accepted");
        Ok(())
    }

    fn check_email(&self, email: &str) -> Result<()> {
        self.config.build_email_length_validator().validate(email)?;
        println!("✓ Email accepted");
        Ok(())
    }

    fn check_digits(&self, text: &str, max: Option<usize>) -> Result<()> {
        let validator = match max {
            Some(max) => Some(MaxDigitsValidator::new(max)?),
            None => self.config.build_max_digits_validator()?,
        };
        let validator = validator
            .context("No digit limit: pass --max or set max_digits in the config")?;
        validator.validate(text)?;
        println!("✓ Text accepted");
        Ok(())
    }

    fn mailto(&self, id: &str, verbiage: &str, email: &str, text: &str) -> Result<()> {
        println!(
            "{}",
            ObfuscatedMailto::new(id, verbiage, email, text).render_script()
        );
        Ok(())
    }
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let handler = GuardHandler::new(cli.config.as_deref(), cli.verbose)?;

    match &cli.command {
        Commands::Replace {
            input,
            output,
            escape,
        } => handler.replace(input.as_deref(), output.as_deref(), *escape)?,
        Commands::CheckName { first, family } => handler.check_name(first, family)?,
        Commands::CheckEmail { email } => handler.check_email(email)?,
        Commands::CheckDigits { text, max } => handler.check_digits(text, *max)?,
        Commands::Mailto {
            id,
            verbiage,
            email,
            text,
        } => handler.mailto(id, verbiage, email, text)?,
    }

    Ok(())
}
