pub const CSV_FIELD_SEPARATOR: char = ',';
pub const CSV_QUOTE_CHAR: char = '"';
pub const BLANK_ROW_SEPARATOR_COUNT: usize = 4;

pub const DEFAULT_MINIMUM_OS_VERSION: f64 = 12.0;

pub const IDENTITY_FIELD_COUNT: usize = 2;
pub const REQUIRED_FIELD_COUNT: usize = 4;
pub const NOTE_FIELD_COUNT: usize = 5;

pub const HOSTNAME_FIELD: usize = 0;
pub const IP_ADDRESS_FIELD: usize = 1;
pub const PATCHED_FIELD: usize = 2;
pub const OS_VERSION_FIELD: usize = 3;
pub const NOTE_FIELD: usize = 4;

pub const PATCHED_YES: &str = "yes";
pub const PATCHED_NO: &str = "no";

pub const VERSION_TYPE_SUFFIXES: &[char] = &['d', 'D', 'f', 'F'];

pub const VERBOSITY_SILENT: &str = "silent";
pub const VERBOSITY_NORMAL: &str = "normal";
pub const VERBOSITY_VERBOSE: &str = "verbose";

