//! Language resources: stopwords, lemma exceptions and the English stemmer.
//!
//! Loaded once per process behind a `LazyLock`: the first caller builds the
//! tables, concurrent first callers wait on that single initialization, and
//! nothing mutates the tables after load.

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

use rust_stemmers::{Algorithm, Stemmer};

/// English stopword list (NLTK corpus).
const ENGLISH_STOPWORDS: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "you're", "you've",
    "you'll", "you'd", "your", "yours", "yourself", "yourselves", "he", "him", "his", "himself",
    "she", "she's", "her", "hers", "herself", "it", "it's", "its", "itself", "they", "them",
    "their", "theirs", "themselves", "what", "which", "who", "whom", "this", "that", "that'll",
    "these", "those", "am", "is", "are", "was", "were", "be", "been", "being", "have", "has",
    "had", "having", "do", "does", "did", "doing", "a", "an", "the", "and", "but", "if", "or",
    "because", "as", "until", "while", "of", "at", "by", "for", "with", "about", "against",
    "between", "into", "through", "during", "before", "after", "above", "below", "to", "from",
    "up", "down", "in", "out", "on", "off", "over", "under", "again", "further", "then", "once",
    "here", "there", "when", "where", "why", "how", "all", "any", "both", "each", "few", "more",
    "most", "other", "some", "such", "no", "nor", "not", "only", "own", "same", "so", "than",
    "too", "very", "s", "t", "can", "will", "just", "don", "don't", "should", "should've", "now",
    "d", "ll", "m", "o", "re", "ve", "y", "ain", "aren", "aren't", "couldn", "couldn't", "didn",
    "didn't", "doesn", "doesn't", "hadn", "hadn't", "hasn", "hasn't", "haven", "haven't", "isn",
    "isn't", "ma", "mightn", "mightn't", "mustn", "mustn't", "needn", "needn't", "shan", "shan't",
    "shouldn", "shouldn't", "wasn", "wasn't", "weren", "weren't", "won", "won't", "wouldn",
    "wouldn't",
];

/// Irregular noun forms that suffix rules cannot recover.
const LEMMA_EXCEPTIONS: &[(&str, &str)] = &[
    ("analyses", "analysis"),
    ("bases", "basis"),
    ("children", "child"),
    ("criteria", "criterion"),
    ("feet", "foot"),
    ("geese", "goose"),
    ("indices", "index"),
    ("lives", "life"),
    ("matrices", "matrix"),
    ("media", "medium"),
    ("men", "man"),
    ("mice", "mouse"),
    ("people", "person"),
    ("phenomena", "phenomenon"),
    ("salesmen", "salesman"),
    ("teeth", "tooth"),
    ("theses", "thesis"),
    ("vertices", "vertex"),
    ("wives", "wife"),
    ("women", "woman"),
];

/// Endings that look plural but belong to singular nouns.
const SINGULAR_ENDINGS: &[&str] = &["ss", "us", "is"];

/// Read-only tables shared by every request.
pub struct LanguageResources {
    stopwords: HashSet<&'static str>,
    lemma_exceptions: HashMap<&'static str, &'static str>,
    stemmer: Stemmer,
}

static RESOURCES: LazyLock<LanguageResources> = LazyLock::new(LanguageResources::load);

/// Returns the process-wide language resources, loading them on first use.
pub fn language_resources() -> &'static LanguageResources {
    &RESOURCES
}

impl LanguageResources {
    fn load() -> Self {
        Self {
            stopwords: ENGLISH_STOPWORDS.iter().copied().collect(),
            lemma_exceptions: LEMMA_EXCEPTIONS.iter().copied().collect(),
            stemmer: Stemmer::create(Algorithm::English),
        }
    }

    pub fn is_stopword(&self, word: &str) -> bool {
        self.stopwords.contains(word)
    }

    pub fn stopword_count(&self) -> usize {
        self.stopwords.len()
    }

    /// Reduces a lowercase noun to its base form.
    ///
    /// Irregular forms come from the exception table; regular plurals go
    /// through WordNet-style detachment rules. Words of three letters or fewer
    /// are returned unchanged.
    pub fn lemmatize(&self, word: &str) -> String {
        if let Some(base) = self.lemma_exceptions.get(word) {
            return (*base).to_string();
        }
        if word.chars().count() <= 3 || SINGULAR_ENDINGS.iter().any(|e| word.ends_with(e)) {
            return word.to_string();
        }

        if let Some(stem) = word.strip_suffix("ies") {
            return format!("{stem}y");
        }
        for ending in ["sses", "ches", "shes", "xes", "zes"] {
            if word.ends_with(ending) {
                return word[..word.len() - 2].to_string();
            }
        }
        match word.strip_suffix('s') {
            Some(stem) => stem.to_string(),
            None => word.to_string(),
        }
    }

    /// Snowball (Porter2) English stem.
    pub fn stem(&self, word: &str) -> String {
        self.stemmer.stem(word).into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resources_are_shared() {
        let a = language_resources() as *const LanguageResources;
        let b = language_resources() as *const LanguageResources;
        assert_eq!(a, b);
    }

    #[test]
    fn test_common_stopwords_present() {
        let res = language_resources();
        for word in ["the", "a", "with", "of", "i", "am"] {
            assert!(res.is_stopword(word), "{word} should be a stopword");
        }
        assert!(!res.is_stopword("python"));
        assert!(!res.is_stopword("experience"));
    }

    #[test]
    fn test_lemmatize_regular_plurals() {
        let res = language_resources();
        assert_eq!(res.lemmatize("systems"), "system");
        assert_eq!(res.lemmatize("companies"), "company");
        assert_eq!(res.lemmatize("boxes"), "box");
        assert_eq!(res.lemmatize("branches"), "branch");
        assert_eq!(res.lemmatize("processes"), "process");
    }

    #[test]
    fn test_lemmatize_keeps_singulars() {
        let res = language_resources();
        assert_eq!(res.lemmatize("analysis"), "analysis");
        assert_eq!(res.lemmatize("class"), "class");
        assert_eq!(res.lemmatize("status"), "status");
        assert_eq!(res.lemmatize("yrs"), "yrs");
        assert_eq!(res.lemmatize("python"), "python");
    }

    #[test]
    fn test_lemmatize_irregulars() {
        let res = language_resources();
        assert_eq!(res.lemmatize("children"), "child");
        assert_eq!(res.lemmatize("people"), "person");
        assert_eq!(res.lemmatize("indices"), "index");
    }

    #[test]
    fn test_stem_english() {
        let res = language_resources();
        assert_eq!(res.stem("experience"), "experi");
        assert_eq!(res.stem("developer"), "develop");
        assert_eq!(res.stem("looking"), "look");
        assert_eq!(res.stem("python"), "python");
    }

    #[test]
    fn test_rule_based_lemma_strips_plain_s() {
        // No dictionary lookup: "news" is treated as a plural.
        let res = language_resources();
        assert_eq!(res.lemmatize("news"), "new");
        assert_eq!(res.stem(&res.lemmatize("news")), "new");
    }
}
