//! Quiz surface — question banks, progress math, and results export.

pub mod banks;
pub mod export;
pub mod handlers;
pub mod progress;
