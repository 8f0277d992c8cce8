use std::io::{self, Write};
use std::path::Path;

use metaphone_core::settings::settings;
use metaphone_core::{compare, Encoder, ShortEncoder};

use crate::batch::{self, BatchMode, KeyRecord, ShortKeyRecord};

use super::config_ops;

fn encoders(config: Option<&str>) -> (Encoder, ShortEncoder) {
    if let Some(file) = config {
        config_ops::load_custom(file);
    }
    let s = &settings().encoder;
    (Encoder::from_settings(s), ShortEncoder::from_settings(s))
}

pub fn encode_cmd(words: &[String], short: bool, json: bool, config: Option<&str>) {
    let (encoder, short_encoder) = encoders(config);
    let stdout = io::stdout();
    let mut out = stdout.lock();

    for word in words {
        let line = match (short, json) {
            (false, false) => {
                let keys = encoder.encode(word);
                format!(
                    "{word}\t{}\t{}",
                    keys.primary(),
                    keys.alternate().unwrap_or("-")
                )
            }
            (true, false) => {
                let keys = short_encoder.encode(word);
                let alternate = if keys.has_alternate() {
                    format!("{:#06X}", keys.alternate())
                } else {
                    "-".to_string()
                };
                format!("{word}\t{:#06X}\t{alternate}", keys.primary())
            }
            (false, true) => die!(
                serde_json::to_string(&KeyRecord::encode(&encoder, word)),
                "Error: {}"
            ),
            (true, true) => die!(
                serde_json::to_string(&ShortKeyRecord::encode(&short_encoder, word)),
                "Error: {}"
            ),
        };
        die!(writeln!(out, "{line}"), "Error writing output: {}");
    }
}

pub fn compare_cmd(a: &str, b: &str, config: Option<&str>) {
    let (encoder, _) = encoders(config);
    let ka = encoder.encode(a);
    let kb = encoder.encode(b);
    println!("{a}: {} / {}", ka.primary(), ka.alternate().unwrap_or("-"));
    println!("{b}: {} / {}", kb.primary(), kb.alternate().unwrap_or("-"));
    println!("match: {:?}", compare(&ka, &kb));
}

pub fn batch_cmd(input: &str, output: &str, short: bool, config: Option<&str>) {
    let (encoder, short_encoder) = encoders(config);
    let mode = if short {
        BatchMode::Short(short_encoder)
    } else {
        BatchMode::Full(encoder)
    };
    let stats = die!(
        batch::encode_file(Path::new(input), Path::new(output), mode),
        "Error encoding {input}: {}"
    );
    eprintln!(
        "{} words encoded, {} blank lines skipped -> {output}",
        stats.words, stats.skipped
    );
}
