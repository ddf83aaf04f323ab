pub mod filter;
pub mod game;

pub use filter::{Filter, MANDATORY_TAG};
pub use game::{GameDetail, GamePage, GameSummary, Genre, PlatformEntry};
