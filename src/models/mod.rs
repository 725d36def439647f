//! Data models for the book library

pub mod author;
pub mod book;
pub mod genre;
pub mod page;
pub mod reader;
pub mod record;
pub mod specification;

// Re-export commonly used types
pub use author::Author;
pub use book::{Book, BookForm, NewBook};
pub use genre::Genre;
pub use page::PageRequest;
pub use reader::Reader;
pub use record::{BorrowRecord, RecordStatus};
pub use specification::{BookQuery, BookSpecification};
