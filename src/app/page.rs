use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};

/// Top-level screens reachable from the sidebar.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumIter, ValueEnum, Default,
)]
pub enum Page {
    #[default]
    Trading,
    Wallets,
    Bundles,
    Monitor,
    Holdings,
    Deploy,
    Security,
    Settings,
}

impl Page {
    /// Sidebar glyph (default egui fonts, no icon font required).
    pub fn icon(&self) -> &'static str {
        match self {
            Self::Trading => "📈",
            Self::Wallets => "💰",
            Self::Bundles => "📦",
            Self::Monitor => "📊",
            Self::Holdings => "💼",
            Self::Deploy => "🚀",
            Self::Security => "🛡",
            Self::Settings => "⚙",
        }
    }
}
