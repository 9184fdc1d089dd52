//! History store implementations.

pub mod csv_store;

pub use csv_store::CsvHistoryStore;
