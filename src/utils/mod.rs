pub mod tags;
pub mod tracing;
