// Widget pipeline: load the ranking, aggregate activity, render.

pub mod aggregate;
pub mod load;
pub mod models;
pub mod widget;
