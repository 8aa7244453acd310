// common helpers
pub mod report;
pub mod errors;
pub mod config;
pub mod observe;
pub(crate) mod signs;

// algorithm
pub mod regula_falsi;

pub use config::RegulaFalsiCfg;
pub use errors::RootFindingError;
pub use observe::Observer;
pub use regula_falsi::{find_root, regula_falsi, regula_falsi_observed, RegulaFalsiError};
pub use report::{IterationRecord, RegulaFalsiReport, Termination, Trace};
