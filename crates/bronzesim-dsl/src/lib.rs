//! The `.bronze` DSL front-end for the Bronzesim simulation.
//!
//! A `.bronze` program declares the world (`world`/`sim` blocks), the
//! population (`agents`/`settlements`), resource renewal rates
//! (`resources`), and the behavior programs (`vocations` with tasks and
//! weighted rules). This crate tokenizes and parses that format into a
//! [`SimConfig`] the simulator consumes.
//!
//! # Modules
//!
//! - [`lexer`] -- Whitespace- and comment-skipping tokenizer.
//! - [`ast`] -- Parsed program types and the [`SimConfig`] defaults.
//! - [`parser`] -- Recursive-descent block parser with parse-time rule
//!   repair.
//! - [`error`] -- [`ParseError`].

pub mod ast;
pub mod error;
pub mod lexer;
pub mod parser;

// Re-export the primary surface at crate root.
pub use ast::{Condition, InvClause, Op, Rule, SimConfig, Task, Vocation, VocationTable};
pub use error::ParseError;
pub use parser::parse_str;
