//! Naming rules for caller-supplied run names, file names, and script
//! arguments.
//!
//! Every value checked here arrives untrusted from a query string. Run names
//! and file names become path components under the run-workspace root, so
//! they are restricted to a conservative character set. Script arguments are
//! passed as separate argv entries (never through a shell), but are still
//! required to be single whitespace-free tokens so that each query parameter
//! maps to exactly one positional parameter of the script.

use crate::error::CoreError;

/// Maximum length in bytes of a run name or staged file name.
pub const MAX_NAME_LEN: usize = 128;

/// Maximum length in bytes of a single script argument.
pub const MAX_ARG_LEN: usize = 4096;

/// Validate a run name so that `<run_dir>/<name>` stays directly below the
/// run-workspace root.
///
/// Allowed: ASCII letters, digits, `-`, `_`, `.`; not `.` or `..`; at most
/// [`MAX_NAME_LEN`] bytes.
///
/// # Examples
///
/// ```
/// use pfred_core::naming::validate_run_name;
///
/// assert!(validate_run_name("job-42_a.b").is_ok());
/// assert!(validate_run_name("../etc").is_err());
/// ```
pub fn validate_run_name(name: &str) -> Result<(), CoreError> {
    validate_path_component("run name", name)
}

/// Validate a file name to be created or read inside a run directory.
pub fn validate_file_name(name: &str) -> Result<(), CoreError> {
    validate_path_component("file name", name)
}

/// Validate one script argument taken from the query parameter `param`.
pub fn validate_script_arg(param: &str, value: &str) -> Result<(), CoreError> {
    if value.is_empty() {
        return Err(CoreError::Validation(format!("{param} must not be empty")));
    }
    if value.len() > MAX_ARG_LEN {
        return Err(CoreError::Validation(format!(
            "{param} exceeds {MAX_ARG_LEN} bytes"
        )));
    }
    if value.chars().any(|c| c.is_whitespace() || c.is_control()) {
        return Err(CoreError::Validation(format!(
            "{param} must not contain whitespace or control characters"
        )));
    }
    Ok(())
}

fn validate_path_component(what: &str, name: &str) -> Result<(), CoreError> {
    if name.is_empty() {
        return Err(CoreError::Validation(format!("{what} must not be empty")));
    }
    if name.len() > MAX_NAME_LEN {
        return Err(CoreError::Validation(format!(
            "{what} exceeds {MAX_NAME_LEN} bytes"
        )));
    }
    if name == "." || name == ".." {
        return Err(CoreError::Validation(format!("{what} '{name}' is reserved")));
    }
    if let Some(bad) = name
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.')))
    {
        return Err(CoreError::Validation(format!(
            "{what} contains invalid character {bad:?}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn accepts_typical_run_names() {
        assert!(validate_run_name("demo").is_ok());
        assert!(validate_run_name("run_2024-01-01.1").is_ok());
        assert!(validate_run_name("ABC123").is_ok());
    }

    #[test]
    fn rejects_traversal() {
        assert_matches!(validate_run_name(".."), Err(CoreError::Validation(_)));
        assert_matches!(validate_run_name("."), Err(CoreError::Validation(_)));
        assert_matches!(validate_run_name("a/b"), Err(CoreError::Validation(_)));
        assert_matches!(validate_run_name("../x"), Err(CoreError::Validation(_)));
    }

    #[test]
    fn rejects_empty_and_oversized() {
        assert_matches!(validate_run_name(""), Err(CoreError::Validation(_)));
        let long = "a".repeat(MAX_NAME_LEN + 1);
        assert_matches!(validate_run_name(&long), Err(CoreError::Validation(_)));
        assert!(validate_run_name(&"a".repeat(MAX_NAME_LEN)).is_ok());
    }

    #[test]
    fn rejects_shell_metacharacters_in_names() {
        for name in ["a;b", "a b", "$(id)", "a|b", "a\0b"] {
            assert!(validate_run_name(name).is_err(), "{name:?} should be rejected");
        }
    }

    #[test]
    fn file_names_follow_run_name_rules() {
        assert!(validate_file_name("result.csv").is_ok());
        assert!(validate_file_name("../result.csv").is_err());
    }

    #[test]
    fn script_args_are_single_tokens() {
        assert!(validate_script_arg("IDs", "ENSG0001,ENSG0002").is_ok());
        assert!(validate_script_arg("Species", "human").is_ok());
        assert_matches!(
            validate_script_arg("IDs", "a b"),
            Err(CoreError::Validation(msg)) if msg.contains("IDs")
        );
        assert!(validate_script_arg("IDs", "a\nb").is_err());
        assert!(validate_script_arg("IDs", "").is_err());
    }

    #[test]
    fn script_args_may_contain_metacharacters() {
        // Passed as argv, so these reach the script verbatim.
        assert!(validate_script_arg("IDs", "x;rm").is_ok());
        assert!(validate_script_arg("IDs", "$(id)").is_ok());
    }
}
