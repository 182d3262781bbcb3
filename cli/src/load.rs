use std::path::{Path, PathBuf};

use csr_graph_core::{Graph, LoadStats};
use tracing::debug;

use crate::config::Settings;
use crate::error::CliError;

/// Resolve the edge-list path: explicit argument > configured dataset > error.
pub fn resolve_dataset(file: Option<&Path>, settings: &Settings) -> Result<PathBuf, CliError> {
    file.map(Path::to_path_buf)
        .or_else(|| settings.dataset.clone())
        .ok_or(CliError::NoDataset)
}

/// Load the graph and enforce the configured memory cap.
pub fn load_graph(
    file: Option<&Path>,
    settings: &Settings,
) -> Result<(Graph, LoadStats), CliError> {
    let path = resolve_dataset(file, settings)?;
    debug!(path = %path.display(), "loading edge list");
    let (graph, stats) = Graph::load_with_stats(&path)?;
    check_memory(&stats, settings)?;
    Ok((graph, stats))
}

/// Reject a loaded graph whose estimated size is over `max_memory_mb`.
pub fn check_memory(stats: &LoadStats, settings: &Settings) -> Result<(), CliError> {
    let max_bytes = settings.max_memory_mb.saturating_mul(1024 * 1024);
    if stats.memory_bytes as u64 > max_bytes {
        return Err(CliError::MemoryLimit {
            used_mb: (stats.memory_bytes as u64).div_ceil(1024 * 1024),
            max_mb: settings.max_memory_mb,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    const MIB: usize = 1024 * 1024;

    fn stats_with_memory(memory_bytes: usize) -> LoadStats {
        LoadStats {
            node_count: 0,
            edge_count: 0,
            memory_bytes,
            skipped_lines: 0,
            load_time: Duration::ZERO,
        }
    }

    fn capped_at_64mb() -> Settings {
        Settings {
            max_memory_mb: 64,
            ..Settings::default()
        }
    }

    #[test]
    fn test_memory_under_cap_accepted() {
        assert!(check_memory(&stats_with_memory(64 * MIB - 1), &capped_at_64mb()).is_ok());
        assert!(check_memory(&stats_with_memory(64 * MIB), &capped_at_64mb()).is_ok());
    }

    #[test]
    fn test_memory_over_cap_rejected() {
        let err = check_memory(&stats_with_memory(64 * MIB + 1), &capped_at_64mb()).unwrap_err();
        assert!(matches!(
            err,
            CliError::MemoryLimit {
                used_mb: 65,
                max_mb: 64
            }
        ));
    }

    #[test]
    fn test_explicit_file_wins() {
        let settings = Settings {
            dataset: Some(PathBuf::from("configured.txt")),
            ..Settings::default()
        };
        let path = resolve_dataset(Some(Path::new("given.txt")), &settings).unwrap();
        assert_eq!(path, PathBuf::from("given.txt"));
    }

    #[test]
    fn test_configured_dataset_fallback() {
        let settings = Settings {
            dataset: Some(PathBuf::from("configured.txt")),
            ..Settings::default()
        };
        let path = resolve_dataset(None, &settings).unwrap();
        assert_eq!(path, PathBuf::from("configured.txt"));
    }

    #[test]
    fn test_no_dataset() {
        let err = resolve_dataset(None, &Settings::default()).unwrap_err();
        assert!(matches!(err, CliError::NoDataset));
    }

    #[test]
    fn test_unreadable_file_is_graph_error() {
        let err = load_graph(Some(Path::new("/nonexistent/edges.txt")), &Settings::default())
            .unwrap_err();
        assert!(matches!(err, CliError::Graph(_)));
    }
}
