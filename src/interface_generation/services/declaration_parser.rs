use crate::interface_generation::domain::{DirectionToken, Port};
use crate::shared::error::GeneratorError;
use crate::shared::Result;

/// Lines whose non-whitespace content starts with this marker are ignored
pub const COMMENT_MARKER: &str = "//";

/// Ports parsed from a whole source description
#[derive(Debug, Clone, Default)]
pub struct ParsedSource {
    /// Ports in source order; some may still be unresolved
    pub ports: Vec<Port>,
    /// Non-fatal findings, e.g. direction tokens that were not recognised
    pub warnings: Vec<String>,
}

/// DeclarationParser - turns loosely formatted declaration lines into ports
///
/// Grammar of one line, consumed right to left:
///
/// ```text
/// [<type-tokens>...] [<size>] <identifier>[;] [<direction-token>]
/// ```
///
/// An identifier without a direction token must be terminated with `;`.
pub struct DeclarationParser;

impl DeclarationParser {
    /// Parses every declaration in `lines`, skipping blanks and comments.
    ///
    /// # Errors
    /// Fails on the first malformed line with a `ParseError` carrying its
    /// 1-based line number; no ports are returned in that case.
    pub fn parse_lines<S: AsRef<str>>(lines: &[S]) -> Result<ParsedSource> {
        let mut parsed = ParsedSource::default();

        for (index, line) in lines.iter().enumerate() {
            let line = line.as_ref();
            if Self::is_skipped(line) {
                continue;
            }

            let (port, unknown_token) =
                Self::parse_declaration(line).map_err(|reason| GeneratorError::ParseError {
                    line_number: index + 1,
                    line: line.trim().to_string(),
                    reason,
                })?;

            if let Some(token) = unknown_token {
                parsed.warnings.push(format!(
                    "Line {}: direction token '{}' of '{}' is not one of i, o, io (with optional !); it will be asked for",
                    index + 1,
                    token,
                    port.identifier()
                ));
            }
            parsed.ports.push(port);
        }

        Ok(parsed)
    }

    /// Parses a single declaration line.
    ///
    /// # Errors
    /// Returns the reason as a string when the line has fewer tokens than the
    /// grammar requires.
    pub fn parse_line(line: &str) -> std::result::Result<Port, String> {
        Self::parse_declaration(line).map(|(port, _)| port)
    }

    /// True for empty lines and comment lines
    pub fn is_skipped(line: &str) -> bool {
        let compact: String = line.split_whitespace().collect();
        compact.is_empty() || compact.starts_with(COMMENT_MARKER)
    }

    /// Removes whitespace after `[` and `:` and before `]` and `:` so a
    /// spaced range such as `[ 7 : 0 ]` becomes the single token `[7:0]`.
    pub fn normalize(line: &str) -> String {
        let mut out = String::with_capacity(line.len());
        for c in line.chars() {
            if c.is_whitespace() && matches!(out.chars().last(), Some('[') | Some(':')) {
                continue;
            }
            if c == ']' || c == ':' {
                let trimmed_len = out.trim_end().len();
                out.truncate(trimmed_len);
            }
            out.push(c);
        }
        out
    }

    /// Returns the port and, if present, a direction token that could not be decoded
    fn parse_declaration(line: &str) -> std::result::Result<(Port, Option<String>), String> {
        let normalized = Self::normalize(line);
        let mut tokens: Vec<&str> = normalized.split_whitespace().collect();

        let last = tokens
            .pop()
            .ok_or_else(|| "empty declaration".to_string())?;

        let (identifier_token, direction_token) = if last.ends_with(';') {
            (last, None)
        } else {
            let identifier = tokens.pop().ok_or_else(|| {
                format!(
                    "missing identifier before '{}' (terminate identifiers without a direction with ';')",
                    last
                )
            })?;
            (identifier, Some(last))
        };

        let identifier = identifier_token
            .strip_suffix(';')
            .unwrap_or(identifier_token);
        if identifier.is_empty() {
            return Err("missing identifier before ';'".to_string());
        }

        let size = match tokens.last() {
            Some(token) if token.starts_with('[') => tokens.pop().unwrap_or_default(),
            _ => "",
        };

        if tokens.is_empty() && size.is_empty() {
            return Err(format!(
                "missing type or size before identifier '{}'",
                identifier
            ));
        }

        let data_type = tokens.join(" ");
        let port = Port::new(data_type, size.to_string(), identifier.to_string())
            .map_err(|e| e.to_string())?;

        match direction_token {
            None => Ok((port, None)),
            Some(token) => match token.parse::<DirectionToken>() {
                Ok(decoded) => Ok((port.resolved(decoded), None)),
                Err(_) => Ok((port, Some(token.to_string()))),
            },
        }
    }
}
