//! Line-local automatic semicolon insertion
//!
//! This crate appends a statement terminator (`;`) to source lines whose last
//! token looks like the end of a statement, the way whitespace-insensitive
//! grammars insert semicolons automatically. It is a purely lexical heuristic:
//! every line is classified on its own, without building a syntax tree.
//!
//! # Architecture
//!
//! - [`rules`]: the named structural-suffix and trailing-token rules
//! - [`classifier`]: the per-line decision built on those rules
//! - [`lines`] and [`transform`]: splitting text and folding lines into output
//! - [`parallel`]: order-preserving parallel rendering (feature `parallel`)
//! - [`input`] and [`config`]: input sources and transformer configuration
//!
//! # Example
//!
//! ```rust
//! use autosemi_core::{classify, transform};
//!
//! assert!(classify("x := 5"));
//! assert!(!classify("if x > 0 {"));
//! assert_eq!(transform("i++\nfor {\n"), "i++;\nfor {\n");
//! ```

pub mod classifier;
pub mod config;
pub mod error;
pub mod input;
pub mod lines;
#[cfg(feature = "parallel")]
pub mod parallel;
pub mod rules;
pub mod transform;

pub use classifier::{
    classify, decide, trailing_token, Decision, LineTerminationClassifier, Reason, TERMINATOR,
};
pub use config::{ExecutionMode, TransformConfig, TransformConfigBuilder};
pub use error::{CoreError, Result};
pub use input::Input;
pub use lines::{split_lines, Lines};
pub use rules::{StructuralSuffix, TokenRule, RESERVED_WORDS};
pub use transform::{
    terminate_line, terminated_lines, transform, Output, ProcessingMetadata, TerminatedLine,
    TerminatedLines, TransformStats, Transformer,
};
