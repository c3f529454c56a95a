mod types;

pub use types::{ComicRequest, Interpretation, Language, ParseLanguageError, SearchResult};
