mod cache;
mod library;

pub use cache::MoodInferenceCache;
pub use library::{InMemoryLibrary, LibraryStore};

#[cfg(test)]
pub use library::MockLibraryStore;
