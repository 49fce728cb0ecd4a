//! Shardline Hint
//!
//! This crate parses and renders the routing hints that clients embed in SQL
//! comments to steer the Shardline middleware: force a query to the master
//! or a replica, allow a full scan, attach tracing, or supply a custom route.
//!
//! # Overview
//!
//! A hint is a type name followed by an optional argument list:
//!
//! - `MASTER` or `MASTER()` - no inputs
//! - `SLAVE(r1,r2)` - positional inputs
//! - `ROUTE(db=0,tbl=3)` - keyed inputs
//!
//! Type names are case-insensitive. Blank inputs are dropped and surrounding
//! whitespace is trimmed, so the rendered form is canonical rather than a copy
//! of the source text.
//!
//! # Example
//!
//! ```
//! use shardline_hint::{contains, parse, HintType, KeyValue};
//!
//! let hint = parse("master(a=1, b=2)").unwrap();
//! assert_eq!(hint.kind, HintType::Master);
//! assert_eq!(hint.inputs, vec![KeyValue::keyed("a", "1"), KeyValue::keyed("b", "2")]);
//! assert_eq!(hint.to_string(), "MASTER(a=1,b=2)");
//!
//! let hints = vec![hint, parse("TRACE").unwrap()];
//! assert!(contains(HintType::Trace, &hints));
//! ```
//!
//! # Modules
//!
//! - [`hint`] - Hint types ([`HintType`]) and values ([`Hint`], [`KeyValue`])
//! - [`parser`] - Hint text parser ([`parse`], [`HintParser`])
//! - [`lookup`] - Membership helpers ([`contains`], [`find`])
//! - [`config`] - Parser configuration ([`ParserConfig`])
//! - [`error`] - Error types ([`HintError`])

// Deny unwrap in library code to ensure proper error handling
#![deny(clippy::unwrap_used)]

pub mod config;
pub mod error;
pub mod hint;
pub mod lookup;
pub mod parser;


// Re-export commonly used items at the crate root
pub use config::ParserConfig;
pub use error::{HintError, HintResult};
pub use hint::{Hint, HintType, KeyValue};
pub use lookup::{contains, find};
pub use parser::{parse, parse_all, HintParser};
