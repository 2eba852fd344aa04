pub mod checker;
pub mod config;
pub mod constants;
pub mod duplicates;
pub mod eligibility;
pub mod error;
pub mod loader;
pub mod record;
pub mod report;
pub mod utils;

// Re-export main types for convenience
pub use checker::{check_routers, RouterPatchChecker};
pub use config::Config;
pub use error::CheckError;
pub use report::{CheckStats, Report};
