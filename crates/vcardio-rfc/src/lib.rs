//! vCard 4.0 text-format engine: parsing, validation, serialization and JSON.

pub mod rfc;
