//! Error types for the `bronzesim-dsl` crate.
//!
//! Parse failures are fatal: the binary reports the message on stderr
//! and exits non-zero. Every variant renders as a single human-readable
//! line.

/// Errors produced while parsing a `.bronze` program.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// The source ended in the middle of a construct.
    #[error("unexpected end of input while parsing {context}")]
    UnexpectedEof {
        /// The construct being parsed.
        context: &'static str,
    },

    /// A token of the wrong kind appeared.
    #[error("expected {expected}, found '{found}'")]
    UnexpectedToken {
        /// What the parser required.
        expected: &'static str,
        /// The offending token text.
        found: String,
    },

    /// A symbolic name did not resolve against its enumeration.
    #[error("unknown {kind} '{name}'")]
    UnknownName {
        /// The name space ("tag", "resource", "item").
        kind: &'static str,
        /// The unresolved name.
        name: String,
    },

    /// An op keyword inside a task body was not recognized.
    #[error("unknown op '{name}' in task '{task}'")]
    UnknownOp {
        /// The unknown keyword.
        name: String,
        /// The enclosing task.
        task: String,
    },

    /// A condition clause keyword was not recognized.
    #[error("unknown condition clause '{name}'")]
    UnknownClause {
        /// The unknown keyword.
        name: String,
    },

    /// An `inv` clause used a comparison symbol outside `> < >= <=`.
    #[error("unknown comparison '{symbol}' in inv clause")]
    UnknownComparator {
        /// The offending symbol.
        symbol: String,
    },

    /// A needs/season clause used a comparator other than its only
    /// supported form.
    #[error("only '{clause} {allowed} x' is supported, found '{found}'")]
    UnsupportedComparator {
        /// The clause keyword.
        clause: &'static str,
        /// The single permitted comparator.
        allowed: &'static str,
        /// The comparator actually written.
        found: String,
    },

    /// A condition carried more than the bounded number of `inv` clauses.
    #[error("too many inv clauses in one condition (max {max})")]
    TooManyInvClauses {
        /// The clause cap.
        max: usize,
    },

    /// A numeric literal failed to parse.
    #[error("invalid number '{text}'")]
    InvalidNumber {
        /// The literal text.
        text: String,
    },
}
