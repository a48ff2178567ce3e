pub mod query;
pub mod transform;
