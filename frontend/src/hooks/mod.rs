pub mod use_adaptivity;
pub mod use_leaderboard;
pub mod use_settings;
pub mod use_spin;

pub use use_adaptivity::use_adaptivity;
pub use use_leaderboard::{use_leaderboard, LeaderboardState};
pub use use_settings::{use_settings, SettingsContext, SettingsProvider};
pub use use_spin::{use_spin, SpinHandle};
