//! Stubwire Test-Double Stub Loader
//!
//! This crate loads "stubs" - substitute data sources standing in for real
//! dependencies during automated tests. A stub is either a static JSON
//! document or an executable script; [`load`] picks the strategy from the
//! file name and produces a value of the caller's shape.
//!
//! # Overview
//!
//! Two stub kinds are recognized, by file-name suffix only:
//!
//! - **`.json`** - direct mode: the file's contents are parsed as JSON
//! - **`.py`** - interpreted mode: the file is run under `python`, the input
//!   value is fed to its stdin as JSON, and its stdout is parsed as JSON
//!
//! # Architecture
//!
//! Two components compose linearly:
//!
//! 1. **Interpreter resolver** ([`interpreter`]) - maps a stub file name to
//!    an [`ExecutionStrategy`] using only the file-name suffix
//! 2. **Stub executor** ([`loader`]) - parses the file directly, or spawns
//!    the runtime in the script's directory, pipes JSON through the child's
//!    stdin/stdout, and blocks until it exits
//!
//! # Subprocess Protocol
//!
//! Interpreted stubs are invoked as `<runtime> <script-file-name>` with the
//! script's containing directory as working directory. The serialized input
//! arrives on stdin, which is closed after the write. On exit code 0 the
//! script's stdout must hold a single JSON document of the expected shape;
//! a non-zero exit yields `Ok(None)` rather than an error, so scripts can
//! signal "no output" as an expected outcome. Stderr is inherited from the
//! parent and never parsed.
//!
//! # Example
//!
//! ```ignore
//! use serde_json::json;
//! use std::path::Path;
//!
//! let input = json!({ "a": 1, "b": 2 });
//! let output: Option<serde_json::Value> =
//!     stubwire::load(Path::new("stubs/sum.py"), &input)?;
//! ```
//!
//! # Crate Structure
//!
//! - [`interpreter`] - file-name suffix to execution strategy
//! - [`loader`] - direct parse and subprocess execution
//! - [`error`] - error types

pub mod error;
pub mod interpreter;
pub mod loader;

// Re-export main types at crate root
pub use error::{StubError, StubResult};
pub use interpreter::{resolve, runtime_available, ExecutionStrategy};
pub use loader::{load, load_value};
