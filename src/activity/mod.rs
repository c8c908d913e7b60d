// Activity: per-user social-proof events from the reputation API.

pub mod client;
pub mod extract;
pub mod models;
pub mod traits;
