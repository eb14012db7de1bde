pub mod gifts;
pub mod leaderboard;
pub mod profile;
