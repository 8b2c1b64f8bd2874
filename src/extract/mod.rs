pub mod activity;
pub mod input;
pub mod metrics;
pub mod readme;
