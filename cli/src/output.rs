use crate::config::OutputFormat;
use crate::errors::CliError;
use crate::input::ScoredItem;
use serde::Serialize;
use std::io::Write;

#[derive(Serialize)]
struct OutputItem<'a> {
    label: &'a str,
    score: f64,
}

pub fn write_items<W: Write>(
    writer: &mut W,
    items: &[ScoredItem],
    format: OutputFormat,
) -> Result<(), CliError> {
    match format {
        OutputFormat::Text => {
            for (label, score) in items {
                writeln!(writer, "{label}\t{score}")?;
            }
        }
        OutputFormat::Json => {
            let items: Vec<_> = items
                .iter()
                .map(|(label, score)| OutputItem {
                    label,
                    score: *score,
                })
                .collect();
            serde_json::to_writer_pretty(&mut *writer, &items)?;
            writeln!(writer)?;
        }
    }
    writer.flush()?;
    Ok(())
}
