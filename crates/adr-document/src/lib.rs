//! ADR Document
//!
//! Text normalizer for Architecture Decision Records. Raw text (already
//! extracted from its source format) is parsed exactly once into a
//! [`Document`]: an ordered, de-duplicated section index plus plain-text and
//! lowercased views of the content. Every analysis phase reads this form and
//! never re-parses raw text.
//!
//! # Example
//!
//! ```
//! use adr_document::Document;
//!
//! let doc = Document::parse("# ADR-7: Use Kafka\n\n## Status\nAccepted\n").unwrap();
//! assert_eq!(doc.title.as_deref(), Some("ADR-7: Use Kafka"));
//! assert!(doc.section("status").is_some());
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

mod document;
mod error;
pub mod text;

pub use document::{Document, Section};
pub use error::DocumentError;
