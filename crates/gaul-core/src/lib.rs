pub mod comic;
pub mod error;
pub mod interpret;
pub mod messages;
pub mod preprocess;
pub mod related;
pub mod schema;
pub mod search;
