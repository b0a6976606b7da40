use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// Distinguishes a bad invocation from a run that failed part-way.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - the interface document was written
    Success = 0,
    /// Input file flag missing, or the source description cannot be read
    InvocationError = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (parse error, config error, aborted prompt, write failure, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::InvocationError => write!(f, "Invocation Error (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for interface generation.
///
/// Uses thiserror to derive Display and Error traits automatically,
/// reducing boilerplate while maintaining user-friendly error messages.
#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error("Source description not found: {path}\n\n💡 Hint: Pass an existing port list with -i <path>")]
    SourceNotFound { path: PathBuf },

    #[error("Failed to read source description: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file is a readable text file")]
    SourceReadError { path: PathBuf, details: String },

    #[error("Failed to parse line {line_number}: `{line}`\nReason: {reason}\n\n💡 Hint: Declarations look like `logic [7:0] data;` or `logic [7:0] data; i!`")]
    ParseError {
        line_number: usize,
        line: String,
        reason: String,
    },

    #[error("Source description contains no port declarations: {path}\n\n💡 Hint: Add at least one declaration (lines starting with // are comments)")]
    EmptySource { path: PathBuf },

    #[error("Port `{identifier}` has no direction\n\n💡 Hint: Every port must be resolved to i, o or io before generation")]
    UnresolvedDirection { identifier: String },

    #[error("Input closed while waiting for: {label}\n\n💡 Hint: The run was aborted and no file was written")]
    InputClosed { label: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Invalid configuration: {reason}\n\n💡 Hint: Check the values in sv-ifgen.config.yml")]
    InvalidConfig { reason: String },
}

impl GeneratorError {
    /// Whether the error belongs to the invocation family (bad `-i` argument or source file).
    pub fn is_invocation_error(&self) -> bool {
        matches!(
            self,
            GeneratorError::SourceNotFound { .. } | GeneratorError::SourceReadError { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_exit_code_values() {
        assert_eq!(ExitCode::Success.as_i32(), 0);
        assert_eq!(ExitCode::InvocationError.as_i32(), 1);
        assert_eq!(ExitCode::InvalidArguments.as_i32(), 2);
        assert_eq!(ExitCode::ApplicationError.as_i32(), 3);
    }

    #[test]
    fn test_exit_code_display() {
        assert_eq!(format!("{}", ExitCode::Success), "Success (0)");
        assert_eq!(
            format!("{}", ExitCode::InvocationError),
            "Invocation Error (1)"
        );
        assert_eq!(
            format!("{}", ExitCode::ApplicationError),
            "Application Error (3)"
        );
    }

    #[test]
    fn test_parse_error_display() {
        let error = GeneratorError::ParseError {
            line_number: 4,
            line: "data;".to_string(),
            reason: "missing type or size before identifier".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Failed to parse line 4"));
        assert!(display.contains("`data;`"));
        assert!(display.contains("missing type or size"));
        assert!(display.contains("💡 Hint:"));
    }

    #[test]
    fn test_source_not_found_display() {
        let error = GeneratorError::SourceNotFound {
            path: PathBuf::from("/test/ports.txt"),
        };
        let display = format!("{}", error);
        assert!(display.contains("Source description not found"));
        assert!(display.contains("/test/ports.txt"));
    }

    #[test]
    fn test_input_closed_display() {
        let error = GeneratorError::InputClosed {
            label: "Clock signal name: ".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Clock signal name"));
        assert!(display.contains("no file was written"));
    }

    #[test]
    fn test_is_invocation_error() {
        assert!(GeneratorError::SourceNotFound {
            path: PathBuf::from("x")
        }
        .is_invocation_error());
        assert!(GeneratorError::SourceReadError {
            path: PathBuf::from("x"),
            details: "denied".to_string(),
        }
        .is_invocation_error());
        assert!(!GeneratorError::InvalidConfig {
            reason: "bad".to_string()
        }
        .is_invocation_error());
    }
}
