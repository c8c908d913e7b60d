// Ranking: the leaderboard of tracked users that every widget is scoped to.

pub mod loader;
pub mod models;
