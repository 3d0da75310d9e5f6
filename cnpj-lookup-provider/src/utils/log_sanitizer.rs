//! Log sanitization utilities
//!
//! Registry responses carry full partner rosters and addresses; debug logs
//! only keep the head of each body.

/// Maximum number of bytes of a body kept in log output.
const TRUNCATE_LIMIT: usize = 256;

/// Truncate a string for logging.
///
/// Bodies within the limit are returned unchanged. Longer bodies are cut at
/// the last character boundary at or before `TRUNCATE_LIMIT` and suffixed
/// with the total length.
pub fn truncate_for_log(s: &str) -> String {
    if s.len() <= TRUNCATE_LIMIT {
        return s.to_string();
    }
    let cut = s
        .char_indices()
        .map(|(index, _)| index)
        .take_while(|index| *index <= TRUNCATE_LIMIT)
        .last()
        .unwrap_or(0);
    format!("{}... [truncated, total {} bytes]", &s[..cut], s.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_body_unchanged() {
        let s = r#"{"cnpj":"11222333000181"}"#;
        assert_eq!(truncate_for_log(s), s);
    }

    #[test]
    fn exactly_at_limit() {
        let s = "a".repeat(TRUNCATE_LIMIT);
        assert_eq!(truncate_for_log(&s), s);
    }

    #[test]
    fn long_body_truncated() {
        let s = "a".repeat(TRUNCATE_LIMIT + 100);
        let result = truncate_for_log(&s);
        assert!(result.starts_with(&"a".repeat(TRUNCATE_LIMIT)));
        assert!(result.ends_with(&format!("total {} bytes]", TRUNCATE_LIMIT + 100)));
    }

    #[test]
    fn accented_text_not_split() {
        // 'ç' and 'ã' are two bytes each
        let s = "Sócio-Administrador, Comércio e Participações ".repeat(20);
        let result = truncate_for_log(&s);
        assert!(result.contains("... [truncated, total"));
    }
}
