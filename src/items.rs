use crate::error::AppError;

/// Filter raw file content down to the item pool: one item per line,
/// trimmed, with blank lines and `#` comment lines dropped. Duplicate
/// lines are kept as-is; the pool is not deduplicated.
pub fn parse_items(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(String::from)
        .collect()
}

/// Load the item pool from a plain-text file.
pub fn load_items(path: &str) -> Result<Vec<String>, AppError> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| AppError::InputNotFound(format!("{}: {}", path, e)))?;

    let items = parse_items(&content);
    if items.is_empty() {
        return Err(AppError::EmptyPool(path.to_string()));
    }
    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skips_blanks_and_comments() {
        let content = "# header\n\nItem A\n   \n# comment\nItem B\n";
        assert_eq!(parse_items(content), vec!["Item A", "Item B"]);
    }

    #[test]
    fn trims_whitespace() {
        assert_eq!(parse_items("  spaced out  \n\titem\n"), vec!["spaced out", "item"]);
    }

    #[test]
    fn comment_marker_after_indent() {
        // A comment is any line whose first non-whitespace char is '#'.
        assert_eq!(parse_items("   # indented comment\nkeep\n"), vec!["keep"]);
    }

    #[test]
    fn hash_inside_item_is_kept() {
        assert_eq!(parse_items("Table #4 wins\n"), vec!["Table #4 wins"]);
    }

    #[test]
    fn duplicates_are_not_removed() {
        assert_eq!(parse_items("twice\ntwice\n"), vec!["twice", "twice"]);
    }

    #[test]
    fn empty_content_yields_empty_pool() {
        assert!(parse_items("# only a comment\n\n   \n").is_empty());
    }

    #[test]
    fn missing_file_is_input_error() {
        let err = load_items("no-such-file.txt").unwrap_err();
        assert!(matches!(err, AppError::InputNotFound(_)));
    }
}
