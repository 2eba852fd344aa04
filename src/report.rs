use std::fmt;

use crate::record::RouterRecord;

/// Counters for a single run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CheckStats {
    pub rows_checked: usize,
    pub malformed_rows: usize,
    pub duplicates_removed: usize,
    pub already_patched: usize,
    pub below_minimum: usize,
    pub eligible: usize,
}

/// The rendered outcome of a check: diagnostics, then one line per router
/// that can be patched.
#[derive(Debug, Clone, Default)]
pub struct Report {
    pub diagnostics: Vec<String>,
    pub routers: Vec<String>,
    pub stats: CheckStats,
}

pub fn format_router(record: &RouterRecord) -> String {
    let mut line = format!(
        "{} ({}), OS Version {}",
        record.hostname, record.ip_address, record.os_version_raw
    );
    if let Some(note) = &record.note {
        line.push_str(&format!(" [{}]", note));
    }
    line
}

impl Report {
    pub fn new(diagnostics: Vec<String>, eligible: &[RouterRecord], stats: CheckStats) -> Self {
        Self {
            diagnostics,
            routers: eligible.iter().map(format_router).collect(),
            stats,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty() && self.routers.is_empty()
    }

    /// Each diagnostic ends with a newline; router lines are newline
    /// separated with nothing after the last one.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for diagnostic in &self.diagnostics {
            out.push_str(diagnostic);
            out.push('\n');
        }
        out.push_str(&self.routers.join("\n"));
        out
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
