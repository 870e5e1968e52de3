//! # Conveyor Ledger Domain Models
//!
//! Shared types for turning configurator export files into destination rows.
//!
//! ## Key Models
//!
//! - **DocumentNumber / DocumentKind**: identity of an export and the table it belongs to
//! - **AttributeKey**: the closed set of key tokens the extractor looks up
//! - **ModuleRecord**: one extracted product module, serialized as a 33-column row

pub mod document;
pub mod record;
pub mod schema;


pub use document::*;
pub use record::*;
pub use schema::*;
