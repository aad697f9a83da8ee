use anyhow::{bail, Context};
use csv::StringRecord;
use log::{debug, info};
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::turn_log::TurnLog;

/// Header of the first player's column in a game log.
pub const FIRST_PLAYER_COLUMN: &str = "red_player_cards";
/// Header of the second player's column in a game log.
pub const SECOND_PLAYER_COLUMN: &str = "blue_player_cards";

/// Names of the two columns holding the players' card counts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnNames {
    pub first: String,
    pub second: String,
}

impl Default for ColumnNames {
    fn default() -> Self {
        ColumnNames {
            first: FIRST_PLAYER_COLUMN.to_string(),
            second: SECOND_PLAYER_COLUMN.to_string(),
        }
    }
}

/// # File reader
/// * `path` - The location of the game log
/// * `columns` - The columns holding the card counts
pub fn read<P: AsRef<Path>>(path: P, columns: &ColumnNames) -> anyhow::Result<TurnLog> {
    let path = path.as_ref();
    let file = File::open(path).with_context(|| format!("Could not open {:?}", path))?;
    let log = read_from(file, columns).with_context(|| format!("Could not read {:?}", path))?;
    info!("Loaded {} turns from {:?}", log.turns(), path);
    Ok(log)
}

/// Reads a game log from any CSV source. The first row must be a header,
/// columns other than the two named ones are ignored.
pub fn read_from<R: Read>(reader: R, columns: &ColumnNames) -> anyhow::Result<TurnLog> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    let first_idx = column_index(&headers, &columns.first)?;
    let second_idx = column_index(&headers, &columns.second)?;
    debug!(
        "Using column {} for '{}' and column {} for '{}'",
        first_idx, columns.first, second_idx, columns.second
    );

    let mut first = Vec::new();
    let mut second = Vec::new();
    for (row, result) in rdr.records().enumerate() {
        let record = result?;
        first.push(parse_count(&record, first_idx, &columns.first, row)?);
        second.push(parse_count(&record, second_idx, &columns.second, row)?);
    }

    TurnLog::new(first, second)
}

fn column_index(headers: &StringRecord, name: &str) -> anyhow::Result<usize> {
    match headers.iter().position(|h| h == name) {
        Some(idx) => Ok(idx),
        None => bail!(
            "Column '{}' not found, available columns: {}",
            name,
            headers.iter().collect::<Vec<&str>>().join(", ")
        ),
    }
}

fn parse_count(record: &StringRecord, idx: usize, column: &str, row: usize) -> anyhow::Result<u32> {
    let Some(cell) = record.get(idx) else {
        bail!("Row {} has no value for '{}'", row + 1, column);
    };
    cell.parse::<u32>().with_context(|| {
        format!(
            "Row {} has an invalid card count '{}' in column '{}'",
            row + 1,
            cell,
            column
        )
    })
}
