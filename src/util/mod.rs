// Utility Module
// Configuration shared by the RSA routines

pub mod config;

pub use config::{FactorConfig, KeyConfig, ScanOrder, DEFAULT_MAX_STEPS};
