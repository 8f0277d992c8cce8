//! Line-oriented bulk encoding: one word per input line, one JSON object per
//! output line.

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use metaphone_core::{Encoder, ShortEncoder, NO_ALTERNATE};
use serde::Serialize;

#[derive(Debug, thiserror::Error)]
pub enum BatchError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error at line {line}: {source}")]
    Json {
        line: usize,
        #[source]
        source: serde_json::Error,
    },
}

/// Full keys for one word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeyRecord {
    pub word: String,
    pub primary: String,
    pub alternate: Option<String>,
}

impl KeyRecord {
    pub fn encode(encoder: &Encoder, word: &str) -> Self {
        let (primary, alternate) = encoder.encode(word).into_keys();
        Self {
            word: word.to_string(),
            primary,
            alternate,
        }
    }
}

/// Packed keys for one word. A missing alternate serializes as `null`
/// rather than as the in-memory sentinel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShortKeyRecord {
    pub word: String,
    pub primary: u16,
    pub alternate: Option<u16>,
}

impl ShortKeyRecord {
    pub fn encode(encoder: &ShortEncoder, word: &str) -> Self {
        let keys = encoder.encode(word);
        Self {
            word: word.to_string(),
            primary: keys.primary(),
            alternate: (keys.alternate() != NO_ALTERNATE).then_some(keys.alternate()),
        }
    }
}

/// Which keys a batch run writes.
#[derive(Debug, Clone, Copy)]
pub enum BatchMode {
    Full(Encoder),
    Short(ShortEncoder),
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BatchStats {
    pub words: usize,
    pub skipped: usize,
}

/// Encode every non-blank line of `input`. Surrounding whitespace is trimmed
/// before encoding.
pub fn encode_lines<R: BufRead, W: Write>(
    input: R,
    mut output: W,
    mode: BatchMode,
) -> Result<BatchStats, BatchError> {
    let mut stats = BatchStats::default();
    for (idx, line) in input.lines().enumerate() {
        let line = line?;
        let word = line.trim();
        if word.is_empty() {
            stats.skipped += 1;
            continue;
        }
        let written = match mode {
            BatchMode::Full(ref encoder) => {
                serde_json::to_writer(&mut output, &KeyRecord::encode(encoder, word))
            }
            BatchMode::Short(ref encoder) => {
                serde_json::to_writer(&mut output, &ShortKeyRecord::encode(encoder, word))
            }
        };
        written.map_err(|source| BatchError::Json {
            line: idx + 1,
            source,
        })?;
        output.write_all(b"\n")?;
        stats.words += 1;
    }
    output.flush()?;
    Ok(stats)
}

pub fn encode_file(input: &Path, output: &Path, mode: BatchMode) -> Result<BatchStats, BatchError> {
    let reader = BufReader::new(File::open(input)?);
    let writer = BufWriter::new(File::create(output)?);
    encode_lines(reader, writer, mode)
}
