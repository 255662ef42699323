//! Organizer report models and mutable report builder.

use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;

/// Aggregate counters and diagnostics for one organizer run.
#[derive(Debug, Default, Clone)]
pub struct ReportOrganize {
    /// Number of destination folders ensured.
    pub cnt_dirs_ensured: u64,
    /// Entries seen while listing bulk-copy source folders.
    pub cnt_scanned: u64,
    /// Scanned entries whose name matched the rule pattern.
    pub cnt_matched: u64,
    /// Files copied (explicit + bulk).
    pub cnt_copied: u64,
    /// Explicit sources that were not found.
    pub missing: Vec<PathBuf>,
    /// Non-fatal warnings collected during the run.
    pub warnings: Vec<String>,
}

impl ReportOrganize {
    /// Number of explicit mappings skipped for a missing source.
    pub fn missing_count(&self) -> usize {
        self.missing.len()
    }

    /// Number of collected warnings.
    pub fn warning_count(&self) -> usize {
        self.warnings.len()
    }

    /// Machine-readable counters.
    pub fn to_dict(&self) -> BTreeMap<String, u64> {
        let mut dict_counts = BTreeMap::new();
        dict_counts.insert("cnt_dirs_ensured".to_string(), self.cnt_dirs_ensured);
        dict_counts.insert("cnt_scanned".to_string(), self.cnt_scanned);
        dict_counts.insert("cnt_matched".to_string(), self.cnt_matched);
        dict_counts.insert("cnt_copied".to_string(), self.cnt_copied);
        dict_counts.insert("cnt_missing".to_string(), self.missing_count() as u64);
        dict_counts.insert("cnt_warnings".to_string(), self.warning_count() as u64);
        dict_counts
    }

    /// Human-readable one-line summary.
    pub fn format(&self, prefix: &str) -> String {
        let dict_counts = self.to_dict();
        format!(
            "{prefix} dirs={} scanned={} matched={} copied={} missing={} warnings={}",
            dict_counts["cnt_dirs_ensured"],
            dict_counts["cnt_scanned"],
            dict_counts["cnt_matched"],
            dict_counts["cnt_copied"],
            dict_counts["cnt_missing"],
            dict_counts["cnt_warnings"]
        )
    }
}

impl fmt::Display for ReportOrganize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format("[ORGANIZE]"))
    }
}

/// Mutable accumulator for organizer statistics.
#[derive(Debug, Default, Clone)]
pub struct ReportOrganizeBuilder {
    /// See [`ReportOrganize::cnt_dirs_ensured`].
    pub cnt_dirs_ensured: u64,
    /// See [`ReportOrganize::cnt_scanned`].
    pub cnt_scanned: u64,
    /// See [`ReportOrganize::cnt_matched`].
    pub cnt_matched: u64,
    /// See [`ReportOrganize::cnt_copied`].
    pub cnt_copied: u64,
    /// See [`ReportOrganize::missing`].
    pub missing: Vec<PathBuf>,
    /// See [`ReportOrganize::warnings`].
    pub warnings: Vec<String>,
}

impl ReportOrganizeBuilder {
    /// Increment one or more named counters by `value`.
    ///
    /// Unknown names are ignored.
    pub fn add_counts(&mut self, field_names: &[&str], value: u64) {
        for field_name in field_names {
            match *field_name {
                "cnt_dirs_ensured" => self.cnt_dirs_ensured += value,
                "cnt_scanned" => self.cnt_scanned += value,
                "cnt_matched" => self.cnt_matched += value,
                "cnt_copied" => self.cnt_copied += value,
                _ => {}
            }
        }
    }

    pub fn add_dir_ensured(&mut self) {
        self.cnt_dirs_ensured += 1;
    }

    pub fn add_scanned(&mut self) {
        self.cnt_scanned += 1;
    }

    pub fn add_matched(&mut self) {
        self.cnt_matched += 1;
    }

    pub fn add_copied(&mut self) {
        self.cnt_copied += 1;
    }

    /// Record an explicit source that did not exist.
    pub fn add_missing(&mut self, path: PathBuf) {
        self.missing.push(path);
    }

    pub fn add_warning(&mut self, warning: String) {
        self.warnings.push(warning);
    }

    /// Finalize builder into immutable report.
    pub fn build(self) -> ReportOrganize {
        ReportOrganize {
            cnt_dirs_ensured: self.cnt_dirs_ensured,
            cnt_scanned: self.cnt_scanned,
            cnt_matched: self.cnt_matched,
            cnt_copied: self.cnt_copied,
            missing: self.missing,
            warnings: self.warnings,
        }
    }
}
