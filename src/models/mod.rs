pub mod location;
pub mod resolution;
