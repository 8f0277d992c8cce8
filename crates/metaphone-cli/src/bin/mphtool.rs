use clap::{Parser, Subcommand};

use metaphone_cli::commands::{codec_ops, config_ops, encode_ops};

#[derive(Parser)]
#[command(name = "mphtool", about = "Double Metaphone key tool")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the keys of one or more words
    Encode {
        /// Words to encode
        #[arg(required = true)]
        words: Vec<String>,
        /// Print packed 16-bit keys instead of strings
        #[arg(long)]
        short: bool,
        /// Print one JSON object per word
        #[arg(long)]
        json: bool,
        /// Custom settings TOML file
        #[arg(long)]
        config: Option<String>,
    },
    /// Compare the keys of two words
    Compare {
        a: String,
        b: String,
        /// Custom settings TOML file
        #[arg(long)]
        config: Option<String>,
    },
    /// Pack a key into its 16-bit form
    Pack {
        /// Key made of A F H J K L M N P S T R X 0
        key: String,
    },
    /// Unpack a 16-bit key given in hex
    Unpack {
        /// Packed key, e.g. 0x019C
        packed: String,
    },
    /// Encode a word list into JSON Lines
    Batch {
        /// Input file, one word per line
        input: String,
        /// Output file (.jsonl)
        output: String,
        /// Write packed keys
        #[arg(long)]
        short: bool,
        /// Custom settings TOML file
        #[arg(long)]
        config: Option<String>,
    },
    /// Export default settings as TOML
    SettingsExport,
    /// Validate a custom settings TOML file
    SettingsValidate {
        /// Path to the TOML file
        file: String,
    },
}

fn main() {
    metaphone_cli::init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Command::Encode {
            words,
            short,
            json,
            config,
        } => encode_ops::encode_cmd(&words, short, json, config.as_deref()),
        Command::Compare { a, b, config } => encode_ops::compare_cmd(&a, &b, config.as_deref()),
        Command::Pack { key } => codec_ops::pack_cmd(&key),
        Command::Unpack { packed } => codec_ops::unpack_cmd(&packed),
        Command::Batch {
            input,
            output,
            short,
            config,
        } => encode_ops::batch_cmd(&input, &output, short, config.as_deref()),
        Command::SettingsExport => config_ops::settings_export(),
        Command::SettingsValidate { file } => config_ops::settings_validate(&file),
    }
}
