//! # File I/O Module
//!
//! Saving and loading design reports and search settings:
//! - **Atomic saves**: write to a `.tmp` sibling, fsync, rename into place
//! - **Version validation**: reject reports written by a newer schema
//!
//! ## Example
//!
//! ```rust,no_run
//! use beam_core::file_io::{load_report, save_report};
//! use beam_core::report::DesignReport;
//! use beam_core::search::search;
//! use beam_core::settings::SearchSettings;
//! use std::path::Path;
//!
//! let settings = SearchSettings::default();
//! let result = search(1_250.0, &settings)?;
//! let report = DesignReport::new(1_250.0, settings, result);
//!
//! save_report(&report, Path::new("design.json"))?;
//! let loaded = load_report(Path::new("design.json"))?;
//! assert_eq!(loaded.meta.run_id, report.meta.run_id);
//! # Ok::<(), beam_core::errors::DesignError>(())
//! ```

use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use crate::errors::{DesignError, DesignResult};
use crate::report::{DesignReport, SCHEMA_VERSION};
use crate::settings::SearchSettings;

/// Temporary sibling path used during an atomic save
fn tmp_path_for(path: &Path) -> PathBuf {
    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    PathBuf::from(tmp)
}

fn read_to_string(path: &Path) -> DesignResult<String> {
    let mut file = File::open(path)
        .map_err(|e| DesignError::file_error("open", path.display().to_string(), e.to_string()))?;

    let mut contents = String::new();
    file.read_to_string(&mut contents)
        .map_err(|e| DesignError::file_error("read", path.display().to_string(), e.to_string()))?;
    Ok(contents)
}

/// Save a report with atomic write semantics.
///
/// The report is serialized, written to `<path>.tmp`, synced to disk and then
/// renamed over `path`, so an interrupted save never leaves a partial file.
pub fn save_report(report: &DesignReport, path: &Path) -> DesignResult<()> {
    let json = report.to_json()?;
    let tmp_path = tmp_path_for(path);

    let mut tmp_file = File::create(&tmp_path).map_err(|e| {
        DesignError::file_error("create temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    if let Err(e) = tmp_file.write_all(json.as_bytes()) {
        let _ = fs::remove_file(&tmp_path);
        return Err(DesignError::file_error(
            "write temp file",
            tmp_path.display().to_string(),
            e.to_string(),
        ));
    }

    if let Err(e) = tmp_file.sync_all() {
        let _ = fs::remove_file(&tmp_path);
        return Err(DesignError::file_error(
            "sync temp file",
            tmp_path.display().to_string(),
            e.to_string(),
        ));
    }
    drop(tmp_file);

    fs::rename(&tmp_path, path).map_err(|e| {
        let _ = fs::remove_file(&tmp_path);
        DesignError::file_error("rename to final", path.display().to_string(), e.to_string())
    })?;

    Ok(())
}

/// Load a report from a file.
///
/// # Returns
///
/// * `Ok(DesignReport)` - Successfully loaded report
/// * `Err(DesignError::VersionMismatch)` - Written by an incompatible schema
/// * `Err(DesignError::SerializationError)` - Invalid JSON
/// * `Err(DesignError::FileError)` - I/O error
pub fn load_report(path: &Path) -> DesignResult<DesignReport> {
    let contents = read_to_string(path)?;

    let report: DesignReport =
        serde_json::from_str(&contents).map_err(|e| DesignError::SerializationError {
            reason: format!("Invalid JSON in {}: {}", path.display(), e),
        })?;

    validate_version(&report.meta.version)?;
    Ok(report)
}

/// Load search settings from a JSON file and validate them.
///
/// Fields missing from the file take their default values.
pub fn load_settings(path: &Path) -> DesignResult<SearchSettings> {
    let contents = read_to_string(path)?;

    let settings: SearchSettings =
        serde_json::from_str(&contents).map_err(|e| DesignError::SerializationError {
            reason: format!("Invalid settings in {}: {}", path.display(), e),
        })?;

    settings.validate()?;
    Ok(settings)
}

/// Check that a report version can be read by this build.
///
/// Major versions must match. While the schema is 0.x, a newer minor version
/// is also rejected.
fn validate_version(file_version: &str) -> DesignResult<()> {
    let mismatch = || DesignError::VersionMismatch {
        file_version: file_version.to_string(),
        expected_version: SCHEMA_VERSION.to_string(),
    };

    let file_parts: Vec<u32> = file_version.split('.').filter_map(|p| p.parse().ok()).collect();
    let current_parts: Vec<u32> = SCHEMA_VERSION.split('.').filter_map(|p| p.parse().ok()).collect();

    if file_parts.is_empty() || current_parts.is_empty() {
        return Err(mismatch());
    }
    if file_parts[0] != current_parts[0] {
        return Err(mismatch());
    }
    if current_parts[0] == 0
        && file_parts.len() > 1
        && current_parts.len() > 1
        && file_parts[1] > current_parts[1]
    {
        return Err(mismatch());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::{analyze, Configuration, CrossSection};
    use crate::materials::{MaterialAssignment, Species};
    use crate::search::SearchResult;
    use std::env::temp_dir;

    fn temp_path(name: &str) -> PathBuf {
        temp_dir().join(format!("beam_core_test_{}.json", name))
    }

    fn sample_report() -> DesignReport {
        let configuration = Configuration::new(MaterialAssignment::uniform(Species::Oak), 0.25, 0.3125, 0.375);
        let section = CrossSection::new(2.5, 0.75, configuration);
        let analysis = analyze(&section).unwrap();
        let result = SearchResult {
            section,
            analysis,
            residual: analysis.loads.residual(1_250.0),
            converged: true,
            enumeration_index: 7,
            evaluated: 5_832,
        };
        DesignReport::new(1_250.0, SearchSettings::default(), result)
    }

    #[test]
    fn test_tmp_path_generation() {
        assert_eq!(tmp_path_for(Path::new("/out/design.json")), Path::new("/out/design.json.tmp"));
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let path = temp_path("roundtrip");
        let report = sample_report();
        save_report(&report, &path).unwrap();

        let loaded = load_report(&path).unwrap();
        assert_eq!(loaded.meta.run_id, report.meta.run_id);
        assert_eq!(loaded.result.materials(), MaterialAssignment::uniform(Species::Oak));
        assert_eq!(loaded.target_lb, 1_250.0);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_atomic_save_creates_no_tmp_file() {
        let path = temp_path("atomic");
        save_report(&sample_report(), &path).unwrap();

        assert!(!tmp_path_for(&path).exists());
        assert!(path.exists());

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_report(&temp_path("does_not_exist")).unwrap_err();
        assert_eq!(err.error_code(), "FILE_ERROR");
    }

    #[test]
    fn test_load_invalid_json() {
        let path = temp_path("invalid_json");
        fs::write(&path, "{ not json").unwrap();

        let err = load_report(&path).unwrap_err();
        assert!(matches!(err, DesignError::SerializationError { .. }));

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_newer_schema_rejected() {
        let path = temp_path("newer_schema");
        let mut report = sample_report();
        report.meta.version = "0.9.0".to_string();
        save_report(&report, &path).unwrap();

        let err = load_report(&path).unwrap_err();
        assert!(matches!(err, DesignError::VersionMismatch { .. }));

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_validate_version() {
        assert!(validate_version("0.1.0").is_ok());
        assert!(validate_version("0.0.3").is_ok());
        assert!(validate_version("1.0.0").is_err());
        assert!(validate_version("0.2.0").is_err());
        assert!(validate_version("garbage").is_err());
    }

    #[test]
    fn test_load_settings_partial_file() {
        let path = temp_path("settings_partial");
        fs::write(&path, r#"{ "max_iterations": 25, "initial_height_in": 1.5 }"#).unwrap();

        let settings = load_settings(&path).unwrap();
        assert_eq!(settings.max_iterations, 25);
        assert_eq!(settings.initial_height_in, 1.5);
        assert_eq!(settings.initial_span_in, 0.5);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_load_settings_rejects_invalid_values() {
        let path = temp_path("settings_invalid");
        fs::write(&path, r#"{ "initial_height_in": 9.0 }"#).unwrap();

        let err = load_settings(&path).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");

        let _ = fs::remove_file(&path);
    }
}
