//! Repository module for destination tables
//!
//! Provides record store implementations backed by a workbook or by memory.

pub mod memory;
pub mod workbook;

pub use memory::MemoryRepository;
pub use workbook::WorkbookRepository;
