pub mod metrics;
pub mod progress;
pub mod reconcile;
pub mod stats;
