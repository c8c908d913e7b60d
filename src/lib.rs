// Vouchboard: social-proof widgets for a ranked set of Ethos users.
//
// This is the library root. Each module corresponds to one stage of the
// widget pipeline: ranking -> activity -> aggregation -> output.

pub mod activity;
pub mod config;
pub mod error;
pub mod output;
pub mod pipeline;
pub mod ranking;
