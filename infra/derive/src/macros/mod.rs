pub mod error;
pub mod vocabulary;
