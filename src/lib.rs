#![warn(clippy::disallowed_types)]

//! Canonical forms of single-output boolean functions given as truth tables:
//! a minimized sum of products (Quine–McCluskey with a greedy cover) and the
//! reduced ordered binary decision diagram.

pub use config::Config;
pub use cover::Solution;
pub use error::{Error, FormatError, Result};
pub use symbols::*;
pub use term::{Minterm, Term};
pub use truth_table::{TruthTable, TruthTableEntry};

pub mod bdd;
pub mod bdd_io;
pub mod builder;
pub mod config;
pub mod cover;
pub mod error;
pub mod minimize;
pub mod observer;
pub mod parser;
pub mod pla_io;
pub mod qm;
pub mod reduce;
pub mod term;

mod truth_table;

mod symbols;
