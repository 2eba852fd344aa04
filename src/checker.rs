use std::path::Path;
use tracing::info;

use crate::config::{Config, FilterConfig};
use crate::duplicates::remove_conflicts;
use crate::eligibility::EligibilityFilter;
use crate::error::CheckError;
use crate::loader::{load_rows, RawRow};
use crate::record::RouterRecord;
use crate::report::{CheckStats, Report};

/// Runs the whole check: load, drop duplicates, drop ineligible routers,
/// render.
pub struct RouterPatchChecker {
    filter: FilterConfig,
    delimiter: char,
}

impl RouterPatchChecker {
    pub fn new(filter: FilterConfig, delimiter: char) -> Self {
        Self { filter, delimiter }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.filter.clone(), config.input.delimiter)
    }

    /// Checks the router list at `path`. An unreadable file is logged and
    /// checked as if it held only the rows read before the failure.
    pub fn check_file(&self, path: &Path) -> Report {
        let loaded = load_rows(path, self.delimiter);
        if let Some(error) = &loaded.error {
            error.log();
            info!("Continuing with the {} rows read", loaded.rows.len());
        }
        self.check_rows(loaded.rows)
    }

    pub fn check_rows(&self, rows: Vec<RawRow>) -> Report {
        let skip = usize::from(self.filter.header_row);
        let mut stats = CheckStats {
            rows_checked: rows.len().saturating_sub(skip),
            ..CheckStats::default()
        };

        let mut diagnostics: Vec<CheckError> = Vec::new();
        let mut records: Vec<RouterRecord> = Vec::with_capacity(rows.len());
        for row in rows.into_iter().skip(skip) {
            match RouterRecord::from_fields(row.line, &row.fields) {
                Ok(record) => records.push(record),
                Err(e) => {
                    e.log();
                    stats.malformed_rows += 1;
                    diagnostics.push(e);
                }
            }
        }

        stats.duplicates_removed = remove_conflicts(&mut records);

        // Short rows only needed their identity for the duplicate scans
        records.retain(|record| match record.check_complete() {
            Ok(()) => true,
            Err(e) => {
                e.log();
                stats.malformed_rows += 1;
                diagnostics.push(e);
                false
            }
        });

        let outcome = EligibilityFilter::new(self.filter.minimum_os_version).apply(&mut records);
        stats.already_patched = outcome.already_patched;
        stats.below_minimum = outcome.below_minimum;
        stats.eligible = records.len();
        diagnostics.extend(outcome.diagnostics);

        info!(
            "Checked {} rows: {} malformed, {} duplicates, {} already patched, {} below minimum, {} eligible",
            stats.rows_checked,
            stats.malformed_rows,
            stats.duplicates_removed,
            stats.already_patched,
            stats.below_minimum,
            stats.eligible
        );

        let diagnostics = diagnostics.iter().map(CheckError::diagnostic).collect();
        Report::new(diagnostics, &records, stats)
    }
}

impl Default for RouterPatchChecker {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

/// Checks the router list at `path` with default settings and returns the
/// rendered report.
pub fn check_routers<P: AsRef<Path>>(path: P) -> String {
    RouterPatchChecker::default().check_file(path.as_ref()).render()
}
