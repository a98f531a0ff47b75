mod loader;

pub use loader::{FixtureLoader, FixtureLoaderError, FixtureRecord};
