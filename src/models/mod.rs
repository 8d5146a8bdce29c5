pub mod assignment;
pub mod report;
pub mod slot_type;
pub mod worker;
