use crate::errors::CliError;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

pub type ScoredItem = (String, f64);

/// Parses a single input line, `Ok(None)` for blank lines and `#` comments.
/// `line` is 1-based and only used for error reporting.
pub fn parse_line(line: usize, content: &str) -> Result<Option<ScoredItem>, CliError> {
    let content = content.trim();
    if content.is_empty() || content.starts_with('#') {
        return Ok(None);
    }

    let mut fields = content.split_whitespace();
    let label = match fields.next() {
        Some(label) => label,
        None => return Ok(None),
    };
    let score = fields.next().ok_or(CliError::MissingScore { line })?;
    if let Some(extra) = fields.next() {
        return Err(CliError::Parse {
            line,
            reason: format!("unexpected field `{extra}` after score"),
        });
    }

    let score: f64 = score.parse().map_err(|err| CliError::Parse {
        line,
        reason: format!("invalid score `{score}`: {err}"),
    })?;
    if score.is_nan() {
        return Err(CliError::Parse {
            line,
            reason: "score cannot be NaN".to_string(),
        });
    }
    Ok(Some((label.to_string(), score)))
}

pub fn read_items<R: BufRead>(reader: R) -> Result<Vec<ScoredItem>, CliError> {
    let mut items = Vec::new();
    for (index, content) in reader.lines().enumerate() {
        if let Some(item) = parse_line(index + 1, &content?)? {
            items.push(item);
        }
    }
    tracing::debug!("Parsed {} items", items.len());
    Ok(items)
}

/// Reads from `location`, or stdin when it is `None`
pub fn read_input(location: Option<&Path>) -> Result<Vec<ScoredItem>, CliError> {
    match location {
        Some(path) => {
            tracing::debug!("Reading items from {}", path.display());
            read_items(BufReader::new(File::open(path)?))
        }
        None => read_items(std::io::stdin().lock()),
    }
}
