/// Minimum characters for a token to enter the vocabulary
pub const MIN_TOKEN_CHARS: usize = 2;

/// Split text into lowercase word tokens.
///
/// Word characters are alphanumerics and `_`; everything else separates
/// tokens. Tokens shorter than [`MIN_TOKEN_CHARS`] are dropped.
pub fn tokenize(text: &str) -> Vec<String> {
    text.split(|c: char| !(c.is_alphanumeric() || c == '_'))
        .filter(|word| word.chars().count() >= MIN_TOKEN_CHARS)
        .map(|word| word.to_lowercase())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_lowercases_and_splits() {
        assert_eq!(
            tokenize("Rock-Climbing  Board_Games"),
            vec!["rock", "climbing", "board_games"]
        );
    }

    #[test]
    fn test_tokenize_drops_short_tokens() {
        assert_eq!(tokenize("a go x ai"), vec!["go", "ai"]);
        assert!(tokenize("").is_empty());
        assert!(tokenize("  ,, ").is_empty());
    }

    #[test]
    fn test_tokenize_unicode() {
        assert_eq!(tokenize("Café Ünïcode"), vec!["café", "ünïcode"]);
    }
}
