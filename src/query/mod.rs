pub mod translator;

pub use translator::{date_clause, genre_clause, QueryTranslator, RANDOM_POOL_PAGE_SIZE};
