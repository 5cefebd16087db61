//! Text tokenization and keyword extraction

use std::collections::HashSet;
use unicode_segmentation::UnicodeSegmentation;

pub struct TextProcessor {
    stop_words: HashSet<String>,
}

impl Default for TextProcessor {
    fn default() -> Self {
        Self::new()
    }
}

impl TextProcessor {
    pub fn new() -> Self {
        Self {
            stop_words: Self::create_stop_words(),
        }
    }

    /// Tokenize text into lowercase words using Unicode segmentation,
    /// dropping stop words and single characters.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let mut tokens = Vec::new();

        for word in text.unicode_words() {
            let normalized = word.to_lowercase();

            if !self.stop_words.contains(&normalized) && normalized.len() > 1 {
                if normalized.chars().any(|c| c.is_alphabetic()) {
                    tokens.push(normalized);
                }
            }
        }

        tokens
    }

    /// Extract the most frequent tokens. Ties break alphabetically so results
    /// are stable across runs.
    pub fn extract_keywords(&self, text: &str, max_keywords: usize) -> Vec<String> {
        let mut word_freq = std::collections::HashMap::new();

        for token in self.tokenize(text) {
            if token.len() > 2 {
                *word_freq.entry(token).or_insert(0usize) += 1;
            }
        }

        let mut keywords: Vec<(String, usize)> = word_freq.into_iter().collect();
        keywords.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

        keywords
            .into_iter()
            .take(max_keywords)
            .map(|(word, _)| word)
            .collect()
    }

    /// Jaccard similarity over the token sets of both texts.
    pub fn text_similarity(&self, text1: &str, text2: &str) -> f32 {
        let tokens1 = self.tokenize(text1);
        let tokens2 = self.tokenize(text2);

        let set1: HashSet<&String> = tokens1.iter().collect();
        let set2: HashSet<&String> = tokens2.iter().collect();

        let intersection = set1.intersection(&set2).count();
        let union = set1.union(&set2).count();

        if union == 0 {
            0.0
        } else {
            intersection as f32 / union as f32
        }
    }

    fn create_stop_words() -> HashSet<String> {
        let stop_words = [
            "a", "an", "and", "are", "as", "at", "be", "by", "for", "from", "has", "have", "in",
            "is", "it", "its", "of", "on", "or", "our", "that", "the", "their", "them", "they",
            "this", "to", "was", "we", "will", "with", "you", "your", "but", "not", "all", "any",
            "can", "do", "if", "into", "more", "most", "other", "out", "over", "so", "some",
            "such", "than", "then", "these", "those", "through", "up", "what", "when", "which",
            "who", "would", "about", "after", "also", "been", "before", "being", "between",
            "each", "how", "may", "must", "new", "no", "only", "should", "using", "well", "work",
            "years", "able", "strong", "experience", "required", "preferred", "plus", "including",
        ];

        stop_words.iter().map(|&s| s.to_string()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenization() {
        let processor = TextProcessor::new();
        let tokens = processor.tokenize("Rust programming language is awesome!");

        assert!(tokens.contains(&"rust".to_string()));
        assert!(tokens.contains(&"programming".to_string()));
        assert!(tokens.contains(&"language".to_string()));
        assert!(tokens.contains(&"awesome".to_string()));

        // Stop words should be filtered out
        assert!(!tokens.contains(&"is".to_string()));
    }

    #[test]
    fn test_keyword_extraction() {
        let processor = TextProcessor::new();
        let text = "Rust Rust programming language. Rust is memory safe. Programming with Rust is fun.";

        let keywords = processor.extract_keywords(text, 5);

        assert!(keywords.len() <= 5);
        assert_eq!(keywords[0], "rust");
        assert!(keywords.contains(&"programming".to_string()));
    }

    #[test]
    fn test_keyword_extraction_is_stable() {
        let processor = TextProcessor::new();
        let text = "alpha beta gamma delta alpha beta gamma delta";

        let first = processor.extract_keywords(text, 4);
        let second = processor.extract_keywords(text, 4);
        assert_eq!(first, second);
    }

    #[test]
    fn test_text_similarity() {
        let processor = TextProcessor::new();

        let similarity = processor.text_similarity("Rust programming language", "Programming language called Rust");
        assert!(similarity > 0.0);
        assert!(similarity <= 1.0);

        assert_eq!(processor.text_similarity("", ""), 0.0);
    }
}
