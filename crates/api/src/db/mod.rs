mod records;
pub mod sqlite;
mod store;

pub use records::{Observation, Station};
pub use sqlite::{load_store, Database, Error};
pub use store::{MemoryStore, ObservationStore};
