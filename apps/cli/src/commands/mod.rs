//! Subcommand handlers. Each one loads through the core services and prints
//! through `render`.

pub mod budgets;
pub mod expenses;
pub mod goals;
pub mod notifications;
pub mod prefs;
pub mod profile;
pub mod ui;

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use anyhow::Context;
use gastu_core::export::ReportKind;
use gastu_core::utils::time_utils::local_today;

/// Opens the CSV destination: the given path or the dated default file name.
pub(crate) fn report_file(
    output: Option<PathBuf>,
    kind: ReportKind,
) -> anyhow::Result<(PathBuf, BufWriter<File>)> {
    let path = output.unwrap_or_else(|| PathBuf::from(kind.file_name(local_today())));
    let file = File::create(&path)
        .with_context(|| format!("Failed to create {}", path.display()))?;
    Ok((path, BufWriter::new(file)))
}

pub(crate) fn report_written(path: &Path, rows: usize) {
    println!("{} fila(s) escritas en {}", rows, path.display());
}
