//! CLI command implementations
//!
//! Each submodule implements a specific CLI command.

pub mod check;
pub mod fund_figures;
pub mod timeseries;

use randomize_generators::export::CsvExport;
use randomize_generators::rng::SeededRng;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::Result;

/// Where a command writes its export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    /// Standard output
    Stdout,
    /// A file path
    File(PathBuf),
}

impl Destination {
    /// Resolve the destination from the `--output`/`--stdout` flags, falling
    /// back to `<output_dir>/<file_name>`.
    pub fn resolve(output: Option<&Path>, stdout: bool, output_dir: &Path, file_name: &str) -> Self {
        match (stdout, output) {
            (true, _) => Destination::Stdout,
            (false, Some(path)) => Destination::File(path.to_path_buf()),
            (false, None) => Destination::File(output_dir.join(file_name)),
        }
    }
}

/// Seeded random source for a run; the seed is logged so the run can be replayed.
pub fn seeded_rng(seed: Option<u64>) -> SeededRng {
    let rng = match seed {
        Some(seed) => SeededRng::from_seed(seed),
        None => SeededRng::from_entropy(),
    };
    info!(seed = rng.seed(), "Random source ready");
    rng
}

/// Write a CSV export to its destination.
pub fn write_csv<E: CsvExport + ?Sized>(export: &E, destination: &Destination) -> Result<()> {
    match destination {
        Destination::Stdout => export.write_csv(std::io::stdout().lock())?,
        Destination::File(path) => {
            create_parent_dir(path)?;
            export.write_to_file(path)?;
        }
    }
    Ok(())
}

/// Write arbitrary text to a destination.
pub fn write_text(text: &str, destination: &Destination) -> Result<()> {
    match destination {
        Destination::Stdout => println!("{}", text),
        Destination::File(path) => {
            create_parent_dir(path)?;
            std::fs::write(path, text)?;
            info!(path = %path.display(), "Output written");
        }
    }
    Ok(())
}

fn create_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_destination_resolution() {
        let dir = Path::new("exports");
        assert_eq!(
            Destination::resolve(None, false, dir, "timeseries.csv"),
            Destination::File(PathBuf::from("exports/timeseries.csv"))
        );
        assert_eq!(
            Destination::resolve(Some(Path::new("a.csv")), false, dir, "timeseries.csv"),
            Destination::File(PathBuf::from("a.csv"))
        );
        assert_eq!(
            Destination::resolve(Some(Path::new("a.csv")), true, dir, "timeseries.csv"),
            Destination::Stdout
        );
    }

    #[test]
    fn test_write_text_creates_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("out.json");
        write_text("[]", &Destination::File(path.clone())).unwrap();
        assert_eq!(std::fs::read_to_string(path).unwrap(), "[]");
    }

    #[test]
    fn test_seeded_rng_keeps_seed() {
        assert_eq!(seeded_rng(Some(5)).seed(), 5);
    }
}
