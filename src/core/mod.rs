pub mod cage;
pub mod intersection;

pub use crate::domain::model::{Bird, BirdKind};
pub use crate::domain::ports::Animal;
pub use crate::utils::error::Result;
