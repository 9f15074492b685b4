use std::process;

use clap::{Parser, Subcommand};

use accent_cli::commands::{config_ops, load_romaji_table, load_settings, read_file, render_ops};

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

#[derive(Parser)]
#[command(name = "accentool", about = "Pitch-accent rendering tools")]
struct Cli {
    /// Settings TOML to use instead of the embedded defaults
    #[arg(long, global = true)]
    settings: Option<String>,
    /// Romaji table TOML to use instead of the embedded default
    #[arg(long, global = true)]
    romaji: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render an annotated word as accent markup
    Render {
        /// Word with ／ ・ ＝ markers
        word: String,
        /// Strip markers instead of rendering accents
        #[arg(long)]
        plain: bool,
        /// Output mode, spans and markup as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show how a word is split into moras
    Moras {
        word: String,
        /// Output as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Print a word with all markers removed
    Strip { word: String },

    /// Transcribe a word to romaji
    Romanize { word: String },

    /// Check marker placement, exit 1 on a malformed word
    Check { word: String },

    /// Render a file of words, one per line
    Batch {
        file: String,
        /// Strip markers instead of rendering accents
        #[arg(long)]
        plain: bool,
        /// Reject malformed words instead of rendering them leniently
        #[arg(long)]
        strict: bool,
    },

    /// Print the default settings TOML
    SettingsExport,

    /// Validate a settings TOML file
    SettingsValidate { file: String },

    /// Print the default romaji table TOML
    RomajiExport,

    /// Validate a romaji table TOML file
    RomajiValidate { file: String },
}

fn main() {
    let cli = Cli::parse();
    let settings = die!(load_settings(cli.settings.as_deref()), "Error: {}");

    match cli.command {
        Command::Render { word, plain, json } => {
            let out = die!(render_ops::render(&settings, &word, plain, json), "Error: {}");
            println!("{out}");
        }
        Command::Moras { word, json } => {
            let out = die!(render_ops::moras(&settings, &word, json), "Error: {}");
            print!("{out}");
            if json {
                println!();
            }
        }
        Command::Strip { word } => println!("{}", render_ops::strip(&settings, &word)),
        Command::Romanize { word } => {
            let table = die!(load_romaji_table(cli.romaji.as_deref()), "Error: {}");
            println!("{}", render_ops::romanize(&settings, &table, &word));
        }
        Command::Check { word } => {
            die!(render_ops::check(&settings, &word), "Malformed: {}");
            println!("OK");
        }
        Command::Batch {
            file,
            plain,
            strict,
        } => {
            let input = die!(read_file(&file), "Error: {}");
            let (out, errors) = render_ops::batch(&settings, &input, plain, strict);
            print!("{out}");
            for (line, e) in &errors {
                eprintln!("{file}:{line}: {e}");
            }
            if !errors.is_empty() {
                process::exit(1);
            }
        }
        Command::SettingsExport => print!("{}", config_ops::settings_export()),
        Command::SettingsValidate { file } => {
            println!("{}", die!(config_ops::settings_validate(&file), "Error: {}"));
        }
        Command::RomajiExport => print!("{}", config_ops::romaji_export()),
        Command::RomajiValidate { file } => {
            println!("{}", die!(config_ops::romaji_validate(&file), "Error: {}"));
        }
    }
}
