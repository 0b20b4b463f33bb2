//! Query Parser & Preprocessor
//!
//! Case-folds queries and haystacks and splits them into whitespace
//! tokens. Stages only ever see the output of this module.

/// Parsed and normalized search query
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedQuery {
    /// Original unmodified query
    pub original: String,
    /// Lowercased query, untrimmed
    pub folded: String,
    /// Non-empty whitespace tokens of `folded`
    pub tokens: Vec<String>,
}

impl ParsedQuery {
    pub fn is_empty(&self) -> bool {
        self.folded.is_empty()
    }
}

/// Query parser and preprocessor
pub struct QueryParser;

impl QueryParser {
    /// Parse a search query into its normalized components
    pub fn parse(query: &str) -> ParsedQuery {
        let folded = fold_case(query);
        let tokens = tokenize(&folded).map(str::to_string).collect();

        ParsedQuery {
            original: query.to_string(),
            folded,
            tokens,
        }
    }
}

/// Lowercase `text`. No trimming and no Unicode normalization.
pub fn fold_case(text: &str) -> String {
    text.to_lowercase()
}

/// Split on whitespace, discarding empty tokens.
pub fn tokenize(text: &str) -> impl Iterator<Item = &str> {
    text.split_whitespace()
}

/// Build the case-folded haystack for token matching by joining `fields`
/// with single spaces.
pub fn fold_haystack(fields: &[&str]) -> String {
    fold_case(&fields.join(" "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_parsing() {
        let parsed = QueryParser::parse("Hello World");
        assert_eq!(parsed.original, "Hello World");
        assert_eq!(parsed.folded, "hello world");
        assert_eq!(parsed.tokens, vec!["hello", "world"]);
    }

    #[test]
    fn test_whitespace_is_not_trimmed() {
        let parsed = QueryParser::parse("  Fam  ");
        assert_eq!(parsed.folded, "  fam  ");
        assert_eq!(parsed.tokens, vec!["fam"]);
        assert!(!parsed.is_empty());
    }

    #[test]
    fn test_empty_query() {
        let parsed = QueryParser::parse("");
        assert!(parsed.is_empty());
        assert!(parsed.tokens.is_empty());
    }

    #[test]
    fn test_whitespace_only_has_no_tokens() {
        let parsed = QueryParser::parse(" \t ");
        assert!(!parsed.is_empty());
        assert!(parsed.tokens.is_empty());
    }

    #[test]
    fn test_mixed_whitespace_tokens() {
        let parsed = QueryParser::parse("fam\teng\n rov");
        assert_eq!(parsed.tokens, vec!["fam", "eng", "rov"]);
    }

    #[test]
    fn test_unicode_case_folding() {
        assert_eq!(fold_case("CITROËN"), "citroën");
    }

    #[test]
    fn test_fold_haystack() {
        let haystack = fold_haystack(&["Vinicius", "Famous Engine", "Rovio"]);
        assert_eq!(haystack, "vinicius famous engine rovio");
        assert_eq!(
            tokenize(&haystack).collect::<Vec<_>>(),
            vec!["vinicius", "famous", "engine", "rovio"]
        );
    }
}
