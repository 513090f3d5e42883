pub mod config;
pub mod logging;

pub mod model;
pub mod phone;
pub mod pipeline;
pub mod scheduler;
pub mod sink;
pub mod source;
pub mod topk;
pub mod walker;
