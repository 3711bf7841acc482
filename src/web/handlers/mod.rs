// HTTP handlers, one module per route group.

pub mod documents;
pub mod search;
pub mod summarize;
pub mod upload;
pub mod visualize;
