use serde::{Deserialize, Serialize};
use strum_macros::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
pub enum BundleStatus {
    #[strum(to_string = "ready")]
    Ready,
    #[strum(to_string = "running")]
    Running,
    #[strum(to_string = "completed")]
    Completed,
}

/// A saved multi-wallet execution preset on the bundles screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BundleConfig {
    pub id: String,
    pub name: String,
    pub wallet_count: usize,
    pub amount_per_wallet: String,
    pub delay_ms: (u32, u32),
    pub status: BundleStatus,
    pub anti_detection: bool,
}
