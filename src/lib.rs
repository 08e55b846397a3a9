//! # relicense
//!
//! Replaces a fixed MIT license comment block with a fixed Apache 2.0 block in
//! Go source files, either in a single file or across a directory tree.
//!
//! Matching is exact and literal: the MIT block must appear character for
//! character, whitespace and line breaks included. Files without it are never
//! written. Every occurrence in a file is replaced.
//!
//! ## Usage as a Library
//!
//! ```rust,no_run
//! use relicense::processor::Processor;
//! use std::path::Path;
//!
//! let processor = Processor::default();
//!
//! // One file
//! let replaced = processor.replace(Path::new("cmd/admin/main.go"));
//! println!("replaced: {replaced}");
//!
//! // A whole tree
//! let summary = processor.process_directory(Path::new("internal"));
//! println!("checked {} files, replaced {}", summary.checked, summary.replaced);
//! ```
//!
//! ## Modules
//!
//! * [`processor`] - Single-file replacement and directory processing
//! * [`license`] - The license blocks and the source/target pair
//! * [`file_filter`] - Extension allow-list
//! * [`report`] - Per-file outcomes and run summaries
//! * [`logging`] - Diagnostic logging setup
//! * [`output`] - User-facing status lines
//!
//! [`processor`]: crate::processor
//! [`license`]: crate::license
//! [`file_filter`]: crate::file_filter
//! [`report`]: crate::report
//! [`logging`]: crate::logging
//! [`output`]: crate::output

pub mod error;
pub mod file_filter;
pub mod license;
pub mod logging;
pub mod output;
pub mod processor;
pub mod report;
