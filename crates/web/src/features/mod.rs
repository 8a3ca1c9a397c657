pub mod leaderboards;
pub mod scores;
pub mod wods;
