pub mod climate;
mod error;
pub mod home;

pub use climate::*;
pub use error::{ApiError, ErrorBody};
pub use home::*;
