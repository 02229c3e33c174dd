use std::time::Duration;

use crate::lead::SignupMode;

/// Google Analytics 4 measurement id, baked in at build time.
/// An empty value disables analytics entirely.
pub fn ga_measurement_id() -> &'static str {
    option_env!("GA_MEASUREMENT_ID").unwrap_or("")
}

/// Which offer the pricing section runs: `free-trial`, `beta-access` or `waitlist`.
pub fn signup_mode() -> SignupMode {
    option_env!("SIGNUP_MODE")
        .and_then(|mode| mode.parse().ok())
        .unwrap_or_default()
}

#[cfg(debug_assertions)]
pub fn log_level() -> log::Level {
    log::Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> log::Level {
    log::Level::Info
}

// Stand-in for a real lead endpoint.
pub const SIMULATED_SUBMIT_LATENCY: Duration = Duration::from_millis(1000);

pub const FORM_LOCATION: &str = "pricing-cta";

pub const APP_STORE_URL: &str = "https://apps.apple.com/us/app/onlybulls/id6746166943";
pub const PLAY_STORE_URL: &str =
    "https://play.google.com/store/apps/details?id=com.askroi.onlybulls&pli=1";
pub const ASK_ROI_URL: &str = "https://askroi.com";
pub const AULT_NODES_URL: &str = "https://aultnodes.com/";
