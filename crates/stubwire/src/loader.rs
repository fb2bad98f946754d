//! Stub execution: direct JSON parse or interpreter subprocess.
//!
//! The interpreted branch follows a fixed shell-out-and-wait sequence: spawn
//! the runtime in the script's directory, write the serialized input to its
//! stdin and close it, block until the script exits, then parse its stdout.
//! Child stderr is inherited from the parent so script diagnostics stay
//! visible without being captured.

use std::io;
use std::path::Path;
use std::process::{Child, Command, Stdio};

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{StubError, StubResult};
use crate::interpreter::{self, ExecutionStrategy};

/// Loads a stub file, producing a value of the caller's shape.
///
/// `.json` stubs are parsed directly and always yield `Some`; the `input`
/// argument is not consulted. Script stubs are executed with `input`
/// serialized as JSON to their stdin; an exit code of 0 yields the parsed
/// stdout, while a non-zero exit yields `Ok(None)` - a stub declining to
/// produce output is an ordinary outcome, not an error.
///
/// No timeout is enforced: a script that never exits blocks the call.
pub fn load<T, I>(stub_path: &Path, input: &I) -> StubResult<Option<T>>
where
    T: DeserializeOwned,
    I: Serialize + ?Sized,
{
    match interpreter::resolve(stub_path)? {
        ExecutionStrategy::Direct => load_direct(stub_path).map(Some),
        ExecutionStrategy::Interpreted(runtime) => exec_script(runtime, stub_path, input),
    }
}

/// Loads a stub file into an untyped [`serde_json::Value`].
pub fn load_value<I>(stub_path: &Path, input: &I) -> StubResult<Option<serde_json::Value>>
where
    I: Serialize + ?Sized,
{
    load(stub_path, input)
}

fn load_direct<T: DeserializeOwned>(stub_path: &Path) -> StubResult<T> {
    let bytes =
        std::fs::read(stub_path).map_err(|source| StubError::stub_not_found(stub_path, source))?;
    serde_json::from_slice(&bytes).map_err(|source| StubError::malformed(stub_path, source))
}

fn exec_script<T, I>(runtime: &'static str, script_path: &Path, input: &I) -> StubResult<Option<T>>
where
    T: DeserializeOwned,
    I: Serialize + ?Sized,
{
    let mut child = build_script_command(runtime, script_path)?
        .spawn()
        .map_err(|source| StubError::spawn_failed(runtime, source))?;

    feed_input(&mut child, input)?;

    // Collects stdout to completion and reaps the process in one step, so
    // streams and the process handle are released on every path.
    let output = child.wait_with_output().map_err(|source| {
        if source.kind() == io::ErrorKind::Interrupted {
            StubError::Interrupted
        } else {
            StubError::Io(source)
        }
    })?;

    if output.status.success() {
        let value = serde_json::from_slice(&output.stdout)
            .map_err(|source| StubError::malformed(script_path, source))?;
        Ok(Some(value))
    } else {
        // The script declined to answer; whatever it wrote to stdout is
        // discarded.
        Ok(None)
    }
}

/// Builds the `<runtime> <script-file-name>` command.
///
/// The script is addressed by bare file name with the child's working
/// directory set to the script's parent, so relative references inside the
/// script resolve against its own directory. An empty parent (a bare file
/// name) means the current directory.
fn build_script_command(runtime: &str, script_path: &Path) -> StubResult<Command> {
    let script_name = script_path
        .file_name()
        .ok_or_else(|| StubError::unrecognized(script_path))?;

    let script_dir = match script_path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };

    let mut cmd = Command::new(runtime);
    cmd.arg(script_name)
        .current_dir(script_dir)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::inherit());

    Ok(cmd)
}

/// Writes the serialized input to the child's stdin, then closes it so the
/// child observes end-of-input.
fn feed_input<I: Serialize + ?Sized>(child: &mut Child, input: &I) -> StubResult<()> {
    if let Some(mut stdin) = child.stdin.take() {
        if let Err(source) = serde_json::to_writer(&mut stdin, input) {
            // A pipe-level failure means the script exited without draining
            // stdin; its exit code is the authoritative signal then.
            if source.classify() != serde_json::error::Category::Io {
                return Err(StubError::InputSerializeFailed(source));
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_load_direct_parses_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stub.json");
        std::fs::write(&path, r#"{"x": true}"#).unwrap();

        let value = load_value(&path, &json!(null)).unwrap();
        assert_eq!(value, Some(json!({"x": true})));
    }

    #[test]
    fn test_load_direct_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.json");

        let err = load_value(&path, &json!(null)).unwrap_err();
        assert!(matches!(err, StubError::StubNotFound { .. }));
    }

    #[test]
    fn test_load_direct_malformed_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "not json").unwrap();

        let err = load_value(&path, &json!(null)).unwrap_err();
        assert!(matches!(err, StubError::MalformedStubData { .. }));
    }

    #[test]
    fn test_unrecognized_suffix_rejected_before_any_io() {
        // The path does not exist: resolution fails on the name alone,
        // before any read or spawn.
        let err = load_value(Path::new("does-not-exist.sh"), &json!(null)).unwrap_err();
        assert!(matches!(err, StubError::UnrecognizedStubKind { .. }));
    }

    #[test]
    fn test_build_script_command_uses_file_name_and_parent_dir() {
        let cmd = build_script_command("python", Path::new("stubs/sample.py")).unwrap();
        assert_eq!(cmd.get_program(), "python");

        let args: Vec<_> = cmd.get_args().collect();
        assert_eq!(args.len(), 1);
        assert_eq!(args[0], "sample.py");
        assert_eq!(cmd.get_current_dir(), Some(Path::new("stubs")));
    }

    #[test]
    fn test_build_script_command_bare_name_runs_in_current_dir() {
        let cmd = build_script_command("python", Path::new("sample.py")).unwrap();
        assert_eq!(cmd.get_current_dir(), Some(Path::new(".")));
    }
}
