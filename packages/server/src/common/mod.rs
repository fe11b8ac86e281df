// Common types shared across domains and the HTTP layer

pub mod entity_ids;
pub mod errors;

pub use entity_ids::*;
pub use errors::{ManagerError, ManagerResult};
