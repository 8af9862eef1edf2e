//! Domain Services - Read-only views across shelters

pub mod directory;
pub mod statistics;
