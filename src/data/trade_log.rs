//! Session trade log, stored as a plain JSON file.

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use anyhow::Result;

use crate::config::{DF, PERSISTENCE};
use crate::models::TradeRecord;

pub(crate) fn save_trade_log(records: &[TradeRecord]) -> Result<()> {
    save_to(Path::new(PERSISTENCE.app.trade_log_path), records)
}

pub(crate) fn load_trade_log() -> Result<Vec<TradeRecord>> {
    load_from(Path::new(PERSISTENCE.app.trade_log_path))
}

fn save_to(path: &Path, records: &[TradeRecord]) -> Result<()> {
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, records)?;
    if DF.log_trade_log {
        log::info!("Saved {} trade records to {}", records.len(), path.display());
    }
    Ok(())
}

fn load_from(path: &Path) -> Result<Vec<TradeRecord>> {
    if !path.exists() {
        // First run: nothing logged yet.
        return Ok(Vec::new());
    }
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let records = serde_json::from_reader(reader)?;
    Ok(records)
}
