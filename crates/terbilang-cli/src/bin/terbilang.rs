use std::path::PathBuf;

use clap::{Parser, Subcommand};

use terbilang_cli::commands::{batch_ops, config_ops, convert_ops};
use terbilang_cli::trace_init::init_tracing;

#[derive(Parser)]
#[command(name = "terbilang", about = "Spell out numbers in Indonesian words")]
struct Cli {
    /// Path to a custom settings TOML file
    #[arg(long, global = true)]
    config: Option<String>,
    /// Write JSON trace logs to this directory (requires the `trace` feature)
    #[arg(long, global = true)]
    log_dir: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Spell out an integer
    Convert {
        /// Integer to convert
        #[arg(allow_negative_numbers = true)]
        number: i64,
    },

    /// Spell out a decimal number, reading each fractional digit
    Decimal {
        /// Number to convert
        #[arg(allow_negative_numbers = true)]
        number: f64,
        /// Fractional digits to read (defaults to decimal.default_precision)
        #[arg(short, long, allow_negative_numbers = true)]
        precision: Option<i32>,
    },

    /// Convert a file of numbers (one per line) to JSONL
    Batch {
        /// Path to the input file
        input_file: String,
        /// Path to the output JSONL file
        output_file: String,
        /// Fractional digits for decimal lines (defaults to decimal.default_precision)
        #[arg(short, long, allow_negative_numbers = true)]
        precision: Option<i32>,
    },

    /// Export or validate settings TOML
    Settings {
        #[command(subcommand)]
        action: SettingsAction,
    },
}

#[derive(Subcommand)]
enum SettingsAction {
    /// Print the embedded default settings
    Export,
    /// Check a settings file for errors
    Validate {
        /// Path to the settings TOML file
        file: String,
    },
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.log_dir.as_deref());

    if let Some(ref path) = cli.config {
        config_ops::load_custom(path);
    }

    match cli.command {
        Command::Convert { number } => convert_ops::convert_cmd(number),
        Command::Decimal { number, precision } => convert_ops::decimal_cmd(number, precision),
        Command::Batch {
            input_file,
            output_file,
            precision,
        } => batch_ops::batch_cmd(&input_file, &output_file, precision),
        Command::Settings { action } => match action {
            SettingsAction::Export => config_ops::settings_export(),
            SettingsAction::Validate { file } => config_ops::settings_validate(&file),
        },
    }
}
