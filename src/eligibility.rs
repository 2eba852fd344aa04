use tracing::debug;

use crate::error::CheckError;
use crate::record::{OsVersion, PatchStatus, RouterRecord};

#[derive(Debug, Default)]
pub struct FilterOutcome {
    pub diagnostics: Vec<CheckError>,
    pub already_patched: usize,
    pub below_minimum: usize,
}

/// Drops routers that are already patched or run an OS older than
/// `minimum_os_version`.
#[derive(Debug, Clone, Copy)]
pub struct EligibilityFilter {
    pub minimum_os_version: f64,
}

impl EligibilityFilter {
    pub fn new(minimum_os_version: f64) -> Self {
        Self { minimum_os_version }
    }

    /// Filters `records` in place, visiting them last to first.
    ///
    /// Routers with an indefinite patch status or an unparseable OS version
    /// are kept and reported; diagnostics come back in visit order.
    pub fn apply(&self, records: &mut Vec<RouterRecord>) -> FilterOutcome {
        let mut outcome = FilterOutcome::default();

        for i in (0..records.len()).rev() {
            let record = &records[i];
            let ineligible = match (&record.patched, record.os_version) {
                (PatchStatus::Yes, _) => {
                    debug!("{} is already patched", record.hostname);
                    outcome.already_patched += 1;
                    true
                }
                (PatchStatus::Invalid(raw), _) => {
                    debug!("{} has indefinite patch status '{}'", record.hostname, raw);
                    outcome.diagnostics.push(CheckError::IndefinitePatchStatus {
                        hostname: record.hostname.clone(),
                        ip_address: record.ip_address.clone(),
                    });
                    false
                }
                (PatchStatus::No, OsVersion::Parsed(version)) if version < self.minimum_os_version => {
                    debug!(
                        "{} runs OS version {} below {}",
                        record.hostname, version, self.minimum_os_version
                    );
                    outcome.below_minimum += 1;
                    true
                }
                (PatchStatus::No, OsVersion::Parsed(_)) => false,
                (PatchStatus::No, OsVersion::Malformed) => {
                    outcome.diagnostics.push(CheckError::InvalidOsVersion {
                        hostname: record.hostname.clone(),
                        ip_address: record.ip_address.clone(),
                        minimum: self.minimum_os_version,
                    });
                    false
                }
            };

            if ineligible {
                records.remove(i);
            }
        }

        outcome
    }
}
