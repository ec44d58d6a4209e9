//! flowtype analysis: expression AST and dependency information.
//!
//! This crate provides:
//! - `ast` - the Expression/Definition AST
//! - `refs` - lazy extraction of referenced names
//! - `deps` - dependency graph, cycle detection and evaluation order
//! - `config` - dependency analysis settings

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod ast;
pub mod config;
pub mod def_id;
pub mod deps;
pub mod refs;

#[cfg(test)]
pub mod test_utils;


pub use ast::{Definition, Expression, MatchArm, Node, Underlying};
pub use config::Config;
pub use def_id::DefId;
pub use deps::DependencyGraph;
pub use refs::{References, contains_ref, get_references, ref_names};

/// A set of definitions that depend on each other.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("cyclic dependency between definitions: {}", .names.join(", "))]
pub struct CycleError {
    /// Names in the cycle, in definition order.
    pub names: Vec<String>,
}
