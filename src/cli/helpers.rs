//! Shared helper functions for CLI commands

use miette::Result;

use crate::cli::GlobalOpts;
use crate::core::{Catalog, Config};

/// Load the layered config with command-line overrides applied, then the catalog
pub fn load_catalog(global: &GlobalOpts) -> Result<(Config, Catalog)> {
    let mut config = Config::load();
    if let Some(ref dir) = global.content {
        config.content_dir = Some(dir.clone());
    }
    let catalog = Catalog::load(config.content_dir.as_deref())?;
    Ok((config, catalog))
}

/// Truncate a string to `max_chars` characters, adding "..." if truncated
///
/// Counts characters rather than bytes so Cyrillic text is never split
/// inside a code point.
pub fn truncate_str(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

/// Wrap text at word boundaries so no line exceeds `max_chars` characters
/// (a single longer word is kept whole on its own line)
pub fn wrap_text(text: &str, max_chars: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let needed = if current.is_empty() {
            word.chars().count()
        } else {
            current.chars().count() + 1 + word.chars().count()
        };
        if needed > max_chars && !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }

    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_str() {
        assert_eq!(truncate_str("hello", 10), "hello");
        assert_eq!(truncate_str("hello world", 8), "hello...");
        assert_eq!(truncate_str("hi", 2), "hi");
    }

    #[test]
    fn test_truncate_str_cyrillic() {
        assert_eq!(truncate_str("Проектирование", 8), "Проек...");
        assert_eq!(truncate_str("ГОСТ", 4), "ГОСТ");
    }

    #[test]
    fn test_wrap_text() {
        assert_eq!(
            wrap_text("Анализ рынка и аналогов", 12),
            vec!["Анализ рынка", "и аналогов"]
        );
        assert_eq!(wrap_text("", 10), vec![""]);
        assert_eq!(wrap_text("сверхдлинноеслово ok", 5), vec!["сверхдлинноеслово", "ok"]);
    }
}
