pub mod analyze;
pub mod export;
pub mod publishers;
pub mod summary;
