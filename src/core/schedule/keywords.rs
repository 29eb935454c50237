use regex::Regex;

/// A configurable list of words matched as case-insensitive substrings.
/// An empty list never matches.
#[derive(Debug, Clone)]
pub struct KeywordSet {
    words: Vec<String>,
    pattern: Option<Regex>,
}

impl KeywordSet {
    pub fn new<S: AsRef<str>>(words: &[S]) -> Self {
        let words: Vec<String> = words
            .iter()
            .map(|w| w.as_ref().trim().to_string())
            .filter(|w| !w.is_empty())
            .collect();

        let pattern = if words.is_empty() {
            None
        } else {
            let alternation = words
                .iter()
                .map(|w| regex::escape(w))
                .collect::<Vec<_>>()
                .join("|");
            Regex::new(&format!("(?i)(?:{alternation})")).ok()
        };

        Self { words, pattern }
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn matches(&self, text: &str) -> bool {
        match &self.pattern {
            Some(re) => re.is_match(text),
            None => {
                let lower = text.to_lowercase();
                self.words.iter().any(|w| lower.contains(&w.to_lowercase()))
            }
        }
    }
}
