//! Maps stub file names to execution strategies.
//!
//! Resolution is purely syntactic: only the file-name suffix is consulted,
//! never the file contents.

use std::path::Path;

use crate::error::{StubError, StubResult};

/// How a stub file is turned into output data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionStrategy {
    /// Parse the file's bytes as JSON; nothing is executed.
    Direct,
    /// Run the file as a script under the named runtime and parse its stdout.
    Interpreted(&'static str),
}

impl ExecutionStrategy {
    /// Returns the runtime identifier for interpreted stubs.
    pub fn runtime(&self) -> Option<&'static str> {
        match self {
            ExecutionStrategy::Direct => None,
            ExecutionStrategy::Interpreted(runtime) => Some(runtime),
        }
    }
}

/// Suffix table consulted by [`resolve`]. Supporting a new interpreter is a
/// single entry here.
const STRATEGIES: &[(&str, ExecutionStrategy)] = &[
    (".json", ExecutionStrategy::Direct),
    (".py", ExecutionStrategy::Interpreted("python")),
];

/// Resolves a stub file to its execution strategy from the file-name suffix.
///
/// Matching is case-sensitive and suffix-exact; multi-dot names such as
/// `orders.sample.py` resolve by their final suffix. The strategy is computed
/// fresh on every call and never cached.
pub fn resolve(path: &Path) -> StubResult<ExecutionStrategy> {
    let name = path
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| StubError::unrecognized(path))?;

    STRATEGIES
        .iter()
        .find(|(suffix, _)| name.ends_with(suffix))
        .map(|&(_, strategy)| strategy)
        .ok_or_else(|| StubError::unrecognized(path))
}

/// Returns true when the strategy's runtime can be launched on this host.
///
/// Direct stubs need no runtime and always report available.
pub fn runtime_available(strategy: ExecutionStrategy) -> bool {
    match strategy {
        ExecutionStrategy::Direct => true,
        ExecutionStrategy::Interpreted(runtime) => which::which(runtime).is_ok(),
    }
}
