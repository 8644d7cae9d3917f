use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use anyhow::Context;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use warodai_config::output::OutputConfig;
use warodai_core::Dictionary;

/// Serialize the dictionary as one JSON document; non-ASCII stays literal
pub fn write_json<W: Write>(
    dictionary: &Dictionary,
    config: &OutputConfig,
    mut writer: W,
) -> anyhow::Result<()> {
    if config.pretty {
        let indent = " ".repeat(config.indent);
        let formatter = PrettyFormatter::with_indent(indent.as_bytes());
        let mut serializer = serde_json::Serializer::with_formatter(&mut writer, formatter);
        dictionary.serialize(&mut serializer)?;
    } else {
        serde_json::to_writer(&mut writer, dictionary)?;
    }

    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}

/// Write to `path`, or stdout when no path is given
pub fn write_output(
    dictionary: &Dictionary,
    config: &OutputConfig,
    path: Option<&Path>,
) -> anyhow::Result<()> {
    match path {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            write_json(dictionary, config, BufWriter::new(file))?;
            tracing::info!("Wrote {} entries to {}", dictionary.entry_count(), path.display());
        }
        None => write_json(dictionary, config, io::stdout().lock())?,
    }

    Ok(())
}
