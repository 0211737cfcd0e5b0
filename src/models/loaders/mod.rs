pub mod document_loader;

pub use document_loader::list_documents;
