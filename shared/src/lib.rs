pub mod adaptivity;
pub mod constants;
pub mod init_data;
pub mod invoice;
pub mod leaderboard;
pub mod prize_catalog;
pub mod spin;
pub mod theme;
pub mod weighted_selector;
