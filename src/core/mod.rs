pub mod allocator;
pub mod consistency;
pub mod counters;
pub mod generator;
pub mod regenerate;
pub mod reports;
pub mod store;
