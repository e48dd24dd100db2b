//! Terminal torus renderer (workspace facade crate).
//!
//! This package keeps the `tui_torus::{core,term,types}` public API stable
//! while the implementation lives in dedicated crates under `crates/`.

pub use tui_torus_core as core;
pub use tui_torus_term as term;
pub use tui_torus_types as types;
