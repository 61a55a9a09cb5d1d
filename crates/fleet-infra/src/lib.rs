//! Infrastructure layer - catalog loaders and file-backed repositories

pub mod catalog_csv;
pub mod catalog_loader;
pub mod persistence;
