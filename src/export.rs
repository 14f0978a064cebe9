use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::{Result, SimError};
use crate::ranking::RankingEntry;
use crate::sampler::SimulationRecord;

pub const DEFAULT_OUTPUT_DIR: &str = "outputs";

pub const DETAIL_COLUMNS: [&str; 8] = [
    "player",
    "distance",
    "x",
    "z",
    "p_teorica",
    "tiros",
    "goles",
    "p_empirica",
];

pub const RANKING_COLUMNS: [&str; 5] = [
    "player",
    "goles_totales",
    "tiros_totales",
    "tasa_empirica",
    "tasa_teorica_prom",
];

#[derive(Debug)]
pub struct ReportPaths {
    pub detail: PathBuf,
    pub ranking: PathBuf,
}

/// Local-time stamp shared by both files of one run.
pub fn run_timestamp() -> String {
    chrono::Local::now().format("%Y%m%d_%H%M%S").to_string()
}

pub fn detail_file_name(timestamp: &str) -> String {
    format!("detalle_{timestamp}.csv")
}

pub fn ranking_file_name(timestamp: &str) -> String {
    format!("ranking_{timestamp}.csv")
}

pub fn save_reports(
    dir: &Path,
    timestamp: &str,
    records: &[SimulationRecord],
    ranking: &[RankingEntry],
) -> Result<ReportPaths> {
    fs::create_dir_all(dir).map_err(|e| SimError::io(dir, e))?;

    let detail = dir.join(detail_file_name(timestamp));
    write_detail_csv(&detail, records)?;
    let ranking_path = dir.join(ranking_file_name(timestamp));
    write_ranking_csv(&ranking_path, ranking)?;

    Ok(ReportPaths {
        detail,
        ranking: ranking_path,
    })
}

pub fn write_detail_csv(path: &Path, records: &[SimulationRecord]) -> Result<()> {
    write_rows(path, records)
}

pub fn write_ranking_csv(path: &Path, ranking: &[RankingEntry]) -> Result<()> {
    write_rows(path, ranking)
}

pub fn read_detail_csv(path: &Path) -> Result<Vec<SimulationRecord>> {
    read_rows(path, &DETAIL_COLUMNS)
}

pub fn read_ranking_csv(path: &Path) -> Result<Vec<RankingEntry>> {
    read_rows(path, &RANKING_COLUMNS)
}

fn write_rows<T: Serialize>(path: &Path, rows: &[T]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path).map_err(|e| SimError::csv(path, e))?;
    for row in rows {
        writer.serialize(row).map_err(|e| SimError::csv(path, e))?;
    }
    writer.flush().map_err(|e| SimError::io(path, e))?;
    log::debug!("wrote {} rows to {}", rows.len(), path.display());
    Ok(())
}

fn read_rows<T: DeserializeOwned>(path: &Path, columns: &[&str]) -> Result<Vec<T>> {
    let mut reader = csv::Reader::from_path(path).map_err(|e| SimError::csv(path, e))?;

    let headers = reader.headers().map_err(|e| SimError::csv(path, e))?;
    if headers.iter().ne(columns.iter().copied()) {
        return Err(SimError::InvariantViolation(format!(
            "{} has columns [{}], expected [{}]",
            path.display(),
            headers.iter().collect::<Vec<_>>().join(", "),
            columns.join(", ")
        )));
    }

    let mut rows = Vec::new();
    for row in reader.deserialize() {
        rows.push(row.map_err(|e| SimError::csv(path, e))?);
    }
    Ok(rows)
}
