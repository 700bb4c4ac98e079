//! File input and output around the normalization pipeline.

use crate::config::Config;
use crate::error::{NormalizeError, NormalizeResult};
use crate::models::ResultSet;
use crate::normalize_with;
use crate::pipeline::Normalizer;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Read the whole input file, decoding invalid UTF-8 lossily.
///
/// # Errors
///
/// Returns `NormalizeError::FileAccess` if the file cannot be opened or read.
pub fn read_input(path: &Path) -> NormalizeResult<String> {
    let bytes = std::fs::read(path).map_err(|source| NormalizeError::FileAccess {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Serialize `result` to `path` as JSON.
pub fn write_output(path: &Path, result: &ResultSet, pretty: bool) -> NormalizeResult<()> {
    let output_err = |source: std::io::Error| NormalizeError::OutputWrite {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(output_err)?;
    let mut writer = BufWriter::new(file);

    if pretty {
        serde_json::to_writer_pretty(&mut writer, result)?;
    } else {
        serde_json::to_writer(&mut writer, result)?;
    }

    writer.flush().map_err(output_err)?;
    Ok(())
}

/// Read `input`, normalize every line, and write the result set to `output`.
///
/// Nothing is written if the input cannot be read.
pub fn run(input: &Path, output: &Path, config: &Config) -> NormalizeResult<ResultSet> {
    tracing::info!(
        input = %input.display(),
        output = %output.display(),
        order_rule = %config.order_rule,
        "Starting normalization run"
    );

    let contents = read_input(input)?;
    let normalizer = Normalizer::new(config.order_rule);
    let result = normalize_with(&normalizer, &contents);

    write_output(output, &result, config.pretty_output)?;
    normalizer.metrics().log_summary();

    Ok(result)
}
