use serde::{Deserialize, Serialize};
use strum_macros::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
pub enum CheckStatus {
    #[strum(to_string = "pass")]
    Pass,
    #[strum(to_string = "warning")]
    Warning,
    #[strum(to_string = "fail")]
    Fail,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SecurityCheck {
    pub id: String,
    pub name: String,
    pub description: String,
    pub status: CheckStatus,
}
