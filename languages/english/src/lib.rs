pub mod contractions;

pub use contractions::EnglishContractions;
