use std::fs::{self, File};
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use serde::Serialize;

use crate::model::ImplementationRecord;
use crate::sim::SchedulerState;

const ACTIVE_FILE: &str = "active.jsonl";
const HISTORY_FILE: &str = "history.jsonl";

/// Write an iterator of serializable items to a JSONL file (one JSON object per line).
fn write_jsonl<T: Serialize>(path: &Path, items: impl Iterator<Item = T>) -> io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    for item in items {
        serde_json::to_writer(&mut writer, &item)?;
        writer.write_all(b"\n")?;
    }
    writer.flush()
}

fn read_jsonl(path: &Path) -> io::Result<Vec<ImplementationRecord>> {
    if !path.exists() {
        return Ok(Vec::new());
    }
    let mut records = Vec::new();
    for line in BufReader::new(File::open(path)?).lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        records.push(serde_json::from_str(&line)?);
    }
    Ok(records)
}

/// Flush the scheduler state to JSONL files in the given output directory.
///
/// Creates the output directory if it does not exist. Writes 2 files:
/// - `active.jsonl` — one in-flight ImplementationRecord per line
/// - `history.jsonl` — one completed or cancelled record per line
pub fn flush_to_jsonl(state: &SchedulerState, output_dir: &Path) -> io::Result<()> {
    fs::create_dir_all(output_dir)?;

    write_jsonl(&output_dir.join(ACTIVE_FILE), state.active.iter())?;
    write_jsonl(&output_dir.join(HISTORY_FILE), state.history.iter())?;

    tracing::debug!(
        active = state.active.len(),
        history = state.history.len(),
        dir = %output_dir.display(),
        "flushed scheduler state"
    );
    Ok(())
}

/// Read back every record written by [`flush_to_jsonl`], active first, ready
/// for `ImplementationScheduler::restore`. Missing files read as empty.
pub fn load_from_jsonl(input_dir: &Path) -> io::Result<Vec<ImplementationRecord>> {
    let mut records = read_jsonl(&input_dir.join(ACTIVE_FILE))?;
    records.extend(read_jsonl(&input_dir.join(HISTORY_FILE))?);
    Ok(records)
}
