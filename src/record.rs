use crate::constants::*;
use crate::error::CheckError;

#[derive(Debug, Clone, PartialEq)]
pub enum PatchStatus {
    Yes,
    No,
    Invalid(String),
}

impl PatchStatus {
    pub fn parse(raw: &str) -> Self {
        if raw.eq_ignore_ascii_case(PATCHED_YES) {
            PatchStatus::Yes
        } else if raw.eq_ignore_ascii_case(PATCHED_NO) {
            PatchStatus::No
        } else {
            PatchStatus::Invalid(raw.to_string())
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OsVersion {
    Parsed(f64),
    Malformed,
}

impl OsVersion {
    /// Accepts finite decimal numbers, optionally with a `d`/`f` type suffix.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        let number = trimmed
            .strip_suffix(VERSION_TYPE_SUFFIXES)
            .filter(|rest| !rest.is_empty())
            .unwrap_or(trimmed);

        match number.parse::<f64>() {
            Ok(value) if value.is_finite() => OsVersion::Parsed(value),
            _ => OsVersion::Malformed,
        }
    }
}

/// One router row from the inventory.
#[derive(Debug, Clone)]
pub struct RouterRecord {
    pub line: usize,
    pub hostname: String,
    pub ip_address: String,
    pub patched: PatchStatus,
    pub os_version_raw: String,
    pub os_version: OsVersion,
    pub note: Option<String>,
    pub field_count: usize,
}

impl RouterRecord {
    /// Builds a record from split CSV fields. `line` is the 1-based file line.
    ///
    /// Only the hostname and IP address are required here, so short rows
    /// still take part in duplicate detection. Missing status and version
    /// fields read as empty; see [`RouterRecord::check_complete`].
    pub fn from_fields(line: usize, fields: &[String]) -> Result<Self, CheckError> {
        if fields.len() < IDENTITY_FIELD_COUNT {
            return Err(CheckError::MalformedRow {
                line,
                fields: fields.len(),
            });
        }

        let field = |index: usize| fields.get(index).cloned().unwrap_or_default();
        let os_version_raw = field(OS_VERSION_FIELD);
        // Only a row of exactly five fields carries a note
        let note = if fields.len() == NOTE_FIELD_COUNT {
            Some(fields[NOTE_FIELD].clone())
        } else {
            None
        };

        Ok(Self {
            line,
            hostname: fields[HOSTNAME_FIELD].clone(),
            ip_address: fields[IP_ADDRESS_FIELD].clone(),
            patched: PatchStatus::parse(&field(PATCHED_FIELD)),
            os_version: OsVersion::parse(&os_version_raw),
            os_version_raw,
            note,
            field_count: fields.len(),
        })
    }

    /// Fails for rows without a patch status and OS version.
    pub fn check_complete(&self) -> Result<(), CheckError> {
        if self.field_count < REQUIRED_FIELD_COUNT {
            return Err(CheckError::MalformedRow {
                line: self.line,
                fields: self.field_count,
            });
        }
        Ok(())
    }

    pub fn hostname_key(&self) -> String {
        self.hostname.to_lowercase()
    }

    pub fn ip_key(&self) -> String {
        self.ip_address.to_lowercase()
    }
}
