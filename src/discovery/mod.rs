pub mod random;
pub mod similar;

pub use random::{RandomGameSelector, RANDOM_ORDERINGS, RANDOM_PAGE_COUNT};
pub use similar::{fallback_genre_clause, SimilarGameResolver};
