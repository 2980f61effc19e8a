use crate::labels::Labels;
use crate::model::{Schedule, SelectionCounts};
use anyhow::Context;
use chrono::NaiveDate;
use csv::WriterBuilder;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Dump compact : `[[0,2,5,6],[1,3,4,6]]`, `[]` pour un planning vide.
pub fn schedule_to_json(schedule: &Schedule) -> anyhow::Result<String> {
    Ok(serde_json::to_string(schedule)?)
}

/// Plan exporté : planning accompagné de sa date et des compteurs par indice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanExport {
    pub generated_on: NaiveDate,
    pub day_count: usize,
    pub plan: Schedule,
    pub picks: SelectionCounts,
}

impl PlanExport {
    pub fn new(schedule: &Schedule, universe: &[usize], generated_on: NaiveDate) -> Self {
        Self {
            generated_on,
            day_count: schedule.len(),
            plan: schedule.clone(),
            picks: schedule.selection_counts(universe),
        }
    }
}

/// Export JSON du plan (jolie mise en forme)
pub fn export_schedule_json<P: AsRef<Path>>(
    path: P,
    schedule: &Schedule,
    universe: &[usize],
    generated_on: NaiveDate,
) -> anyhow::Result<()> {
    let export = PlanExport::new(schedule, universe, generated_on);
    let json = serde_json::to_vec_pretty(&export)?;
    write_atomic(path, &json)
}

/// Export CSV: header `day,index,label` (jours numérotés à partir de 1)
pub fn export_schedule_csv<P: AsRef<Path>>(
    path: P,
    schedule: &Schedule,
    labels: Option<&Labels>,
) -> anyhow::Result<()> {
    let mut w = WriterBuilder::new().has_headers(true).from_writer(Vec::new());
    w.write_record(["day", "index", "label"])?;
    for (day, selection) in schedule.days().iter().enumerate() {
        let day = (day + 1).to_string();
        for index in selection.iter() {
            let label = match labels {
                Some(l) => l.get(index)?,
                None => "",
            };
            w.write_record([day.as_str(), index.to_string().as_str(), label])?;
        }
    }
    let bytes = w
        .into_inner()
        .map_err(|e| anyhow::anyhow!("flushing csv buffer: {}", e.error()))?;
    write_atomic(path, &bytes)
}

/// Écriture atomique : fichier temporaire dans le même répertoire puis renommage.
pub fn write_atomic<P: AsRef<Path>>(path: P, bytes: &[u8]) -> anyhow::Result<()> {
    let path = path.as_ref();
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
    let mut tmp = NamedTempFile::new_in(dir).with_context(|| "creating temp file")?;
    tmp.write_all(bytes)?;
    tmp.flush()?;
    tmp.as_file().sync_all()?;
    tmp.persist(path)
        .with_context(|| format!("atomic rename to {}", path.display()))?;
    Ok(())
}
