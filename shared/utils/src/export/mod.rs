//! Configurator Export Processing Module
//!
//! Turns semicolon-delimited exports into module records: parse the file,
//! classify it by its first cell, scan for module rows and resolve each
//! module's attributes by forward keyed lookup.

pub mod classifier;
pub mod extractor;
pub mod length;
pub mod loader;
pub mod lookup;
pub mod parser;
pub mod source;

pub use classifier::{classify, Classification};
pub use extractor::{extract_records, scan_modules, ExtractionContext, ModuleRow, MODULE_PREFIX};
pub use length::{resolve_length, ANGLED_MODULE_CODE};
pub use loader::LoadedExport;
pub use lookup::{find_key, key_hits, lookup, KeyHit};
pub use parser::{ExportParser, ParsedFile};
pub use source::{creation_date, customer_from_file_name};
