use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, reload, util::SubscriberInitExt};
use vcardio_core::config::{Settings, load_config};
use vcardio_rfc::rfc::vcard::json::{datetime_to_json, property_to_json};
use vcardio_rfc::rfc::vcard::{CardError, parse_and_validate_file, write_file_with};

#[derive(Parser, Debug)]
#[command(name = "vcardio", version, about = "vCard 4.0 checker and converter")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Parse and validate a card, printing OK or the error code.
    Check {
        /// Card file (.vcf or .vcard).
        file: PathBuf,
    },
    /// Parse and validate a card, then write it to another file.
    Copy {
        input: PathBuf,
        output: PathBuf,
        /// Fold long lines in the output (overrides configuration).
        #[arg(long)]
        fold: bool,
    },
    /// Print the card's properties and date values as JSON, one per line.
    Json {
        /// Card file (.vcf or .vcard).
        file: PathBuf,
    },
}

fn main() -> anyhow::Result<ExitCode> {
    let args = Args::parse();

    let (filter_layer, filter_handle) = reload::Layer::new(EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_line_number(true),
        )
        .init();

    let config = load_config()?;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.logging.level.as_str()));
    match filter {
        Ok(filter) => {
            if let Err(e) = filter_handle.modify(|current| *current = filter) {
                tracing::warn!(error = %e, "Failed to update log filter from config");
            }
        }
        Err(e) => {
            tracing::warn!(level = %config.logging.level, error = %e, "Invalid log level in config, keeping warn");
        }
    }

    Ok(match run(&args.command, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => report(&err),
    })
}

fn run(command: &Command, config: &Settings) -> Result<(), CardError> {
    match command {
        Command::Check { file } => {
            parse_and_validate_file(file, &config.codec)?;
            println!("OK");
        }
        Command::Copy {
            input,
            output,
            fold,
        } => {
            let mut codec = config.codec.clone();
            codec.fold_output |= *fold;

            let card = parse_and_validate_file(input, &codec)?;
            write_file_with(output, &card, &codec)?;
            tracing::info!(input = %input.display(), output = %output.display(), "Card copied");
        }
        Command::Json { file } => {
            let card = parse_and_validate_file(file, &config.codec)?;
            if let Some(fn_prop) = &card.fn_prop {
                println!("{}", property_to_json(fn_prop));
            }
            for prop in &card.optional_properties {
                println!("{}", property_to_json(prop));
            }
            if let Some(birthday) = &card.birthday {
                println!("{}", datetime_to_json(birthday));
            }
            if let Some(anniversary) = &card.anniversary {
                println!("{}", datetime_to_json(anniversary));
            }
        }
    }

    Ok(())
}

fn report(err: &CardError) -> ExitCode {
    if err.line > 0 {
        println!("{} (line {}): {}", err.kind, err.line, err.message);
    } else {
        println!("{}: {}", err.kind, err.message);
    }
    ExitCode::FAILURE
}
