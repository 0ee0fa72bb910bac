pub mod availability;
pub mod config;
pub mod schedule;
pub mod strategy;
pub mod task;
