// src/config/consts.rs

// Match results API
pub const API_BASE: &str = "https://frc-api.firstinspires.org/v3.0";
pub const DEFAULT_SEASON: u16 = 2024;
pub const DEFAULT_EVENT: &str = "ONWAT";
pub const ENV_USERNAME: &str = "API_USERNAME";
pub const ENV_KEY: &str = "API_KEY";
pub const USER_AGENT: &str = concat!("frc_scout/", env!("CARGO_PKG_VERSION"));
pub const REQUEST_TIMEOUT_SECS: u64 = 30;

// Logging
pub const LOG_FILE: &str = ".store/debug.log";

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const DEFAULT_REPORT_FILE: &str = "report";
pub const DEFAULT_TEAMS_FILE: &str = "teams";
pub const DEFAULT_TRAINING_SUBDIR: &str = "model";
pub const FEATURES_FILE: &str = "feats.csv";
pub const LABELS_FILE: &str = "labels.csv";
