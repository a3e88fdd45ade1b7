mod book_service;
mod errors;

pub use book_service::{
    ServiceDependencies, create_book, delete_book, id_exists, list_books, update_book,
};
pub use errors::{BookApplicationError, Operation, Result};
