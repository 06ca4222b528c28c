//! YAML error diagnostics with source-located messages for content authors

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// YAML syntax or shape error with source location
#[derive(Debug, Error, Diagnostic)]
#[error("YAML error in {filename}: {message}")]
#[diagnostic(code(imslc::yaml::syntax))]
pub struct YamlSyntaxError {
    #[source_code]
    src: NamedSource<String>,

    #[label("error here")]
    span: SourceSpan,

    #[help]
    help: Option<String>,

    filename: String,

    /// The underlying error message
    message: String,
}

impl YamlSyntaxError {
    /// Create a syntax error from a serde_yml error
    pub fn from_serde_error(err: &serde_yml::Error, source: &str, filename: &str) -> Self {
        let (line, column) = err
            .location()
            .map(|loc| (loc.line(), loc.column()))
            .unwrap_or((1, 1));

        let message = err.to_string();
        let help = generate_help(&message);
        Self::at_location(message, source, filename, line, column, help)
    }

    /// Create a syntax error at a specific location
    pub fn at_location(
        message: impl Into<String>,
        source: &str,
        filename: &str,
        line: usize,
        column: usize,
        help: Option<String>,
    ) -> Self {
        let offset = line_col_to_offset(source, line, column);
        let len = source[offset..].chars().next().map_or(0, char::len_utf8);

        Self {
            src: NamedSource::new(filename, source.to_string()),
            span: SourceSpan::from(offset..offset + len),
            help,
            filename: filename.to_string(),
            message: message.into(),
        }
    }
}

/// Generic YAML error wrapper
#[derive(Debug, Error, Diagnostic)]
pub enum YamlError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Syntax(#[from] YamlSyntaxError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convert a 1-based line/column (columns counted in characters) to a byte
/// offset that always lies on a character boundary
fn line_col_to_offset(source: &str, line: usize, column: usize) -> usize {
    let mut line_start = 0;
    let mut current_line = 1;

    if line > 1 {
        let mut found = false;
        for (i, ch) in source.char_indices() {
            if ch == '\n' {
                current_line += 1;
                if current_line == line {
                    line_start = i + 1;
                    found = true;
                    break;
                }
            }
        }
        if !found {
            // Past the end: point at the last character
            return source
                .char_indices()
                .last()
                .map_or(0, |(i, _)| i);
        }
    }

    let rest = &source[line_start..];
    let mut offset = line_start;
    for (col, (i, ch)) in rest.char_indices().enumerate() {
        if col + 1 == column || ch == '\n' {
            return line_start + i;
        }
        offset = line_start + i;
    }
    offset
}

/// Generate helpful suggestions based on error message
fn generate_help(message: &str) -> Option<String> {
    let msg_lower = message.to_lowercase();

    if msg_lower.contains("tab") {
        return Some(
            "YAML requires spaces for indentation, not tabs. Replace tabs with spaces.".to_string(),
        );
    }

    if msg_lower.contains("duplicate key") {
        return Some("Each key can only appear once. Remove or rename the duplicate key.".to_string());
    }

    if msg_lower.contains("expected block end") {
        return Some("Check your indentation - it may be inconsistent.".to_string());
    }

    if msg_lower.contains("mapping values are not allowed") {
        return Some("You may be missing a space after ':' or have incorrect indentation.".to_string());
    }

    if msg_lower.contains("unknown variant") {
        return Some(
            "Probability must be Низкая/Средняя/Высокая; impact must be Низкое/Среднее/Высокое/Критическое."
                .to_string(),
        );
    }

    if msg_lower.contains("missing field") {
        return Some("Every entry needs all of its fields; see the neighbouring entries.".to_string());
    }

    None
}
