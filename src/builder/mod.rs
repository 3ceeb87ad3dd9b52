//! Builder API for ergonomic automaton construction.
//!
//! This module provides a fluent builder and the `rules!` macro for creating
//! automata with minimal boilerplate, checking the result on `build`.

pub mod automaton;
pub mod error;
pub mod macros;

pub use automaton::AutomatonBuilder;
pub use error::BuildError;
