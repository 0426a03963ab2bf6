pub mod palette;
pub mod types;
