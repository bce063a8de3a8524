mod store;

pub use store::{EnvEntry, EnvStore};
