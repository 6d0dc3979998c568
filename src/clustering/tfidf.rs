//! TF-IDF vectors over article titles.
//!
//! Tokens are runs of two or more word characters, lowercased, with English
//! stop words removed. Weights use raw term counts and a smoothed idf,
//! `ln((1 + n) / (1 + df)) + 1`, and each vector is L2-normalized.

use lazy_static::lazy_static;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::{BTreeMap, HashMap, HashSet};

static TOKEN_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b\w\w+\b").expect("valid regex"));

lazy_static! {
    static ref ENGLISH_STOP_WORDS: HashSet<&'static str> = [
        "a", "about", "above", "across", "after", "afterwards", "again", "against", "all",
        "almost", "alone", "along", "already", "also", "although", "always", "am", "among",
        "amongst", "amoungst", "amount", "an", "and", "another", "any", "anyhow", "anyone",
        "anything", "anyway", "anywhere", "are", "around", "as", "at", "back", "be", "became",
        "because", "become", "becomes", "becoming", "been", "before", "beforehand", "behind",
        "being", "below", "beside", "besides", "between", "beyond", "bill", "both", "bottom",
        "but", "by", "call", "can", "cannot", "cant", "co", "con", "could", "couldnt", "cry",
        "de", "describe", "detail", "do", "done", "down", "due", "during", "each", "eg",
        "eight", "either", "eleven", "else", "elsewhere", "empty", "enough", "etc", "even",
        "ever", "every", "everyone", "everything", "everywhere", "except", "few", "fifteen",
        "fifty", "fill", "find", "fire", "first", "five", "for", "former", "formerly", "forty",
        "found", "four", "from", "front", "full", "further", "get", "give", "go", "had", "has",
        "hasnt", "have", "he", "hence", "her", "here", "hereafter", "hereby", "herein",
        "hereupon", "hers", "herself", "him", "himself", "his", "how", "however", "hundred",
        "i", "ie", "if", "in", "inc", "indeed", "interest", "into", "is", "it", "its", "itself",
        "keep", "last", "latter", "latterly", "least", "less", "ltd", "made", "many", "may",
        "me", "meanwhile", "might", "mill", "mine", "more", "moreover", "most", "mostly",
        "move", "much", "must", "my", "myself", "name", "namely", "neither", "never",
        "nevertheless", "next", "nine", "no", "nobody", "none", "noone", "nor", "not",
        "nothing", "now", "nowhere", "of", "off", "often", "on", "once", "one", "only", "onto",
        "or", "other", "others", "otherwise", "our", "ours", "ourselves", "out", "over", "own",
        "part", "per", "perhaps", "please", "put", "rather", "re", "same", "see", "seem",
        "seemed", "seeming", "seems", "serious", "several", "she", "should", "show", "side",
        "since", "sincere", "six", "sixty", "so", "some", "somehow", "someone", "something",
        "sometime", "sometimes", "somewhere", "still", "such", "system", "take", "ten", "than",
        "that", "the", "their", "them", "themselves", "then", "thence", "there", "thereafter",
        "thereby", "therefore", "therein", "thereupon", "these", "they", "thick", "thin",
        "third", "this", "those", "though", "three", "through", "throughout", "thru", "thus",
        "to", "together", "too", "top", "toward", "towards", "twelve", "twenty", "two", "un",
        "under", "until", "up", "upon", "us", "very", "via", "was", "we", "well", "were",
        "what", "whatever", "when", "whence", "whenever", "where", "whereafter", "whereas",
        "whereby", "wherein", "whereupon", "wherever", "whether", "which", "while", "whither",
        "who", "whoever", "whole", "whom", "whose", "why", "will", "with", "within", "without",
        "would", "yet", "you", "your", "yours", "yourself", "yourselves",
    ]
    .into_iter()
    .collect();
}

/// Sparse L2-normalized vector keyed by vocabulary index.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SparseVector {
    entries: BTreeMap<usize, f64>,
}

impl SparseVector {
    pub fn is_zero(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn dot(&self, other: &SparseVector) -> f64 {
        let (small, large) = if self.entries.len() <= other.entries.len() {
            (self, other)
        } else {
            (other, self)
        };
        small
            .entries
            .iter()
            .filter_map(|(term, weight)| large.entries.get(term).map(|w| weight * w))
            .sum()
    }

    /// Cosine distance in `[0, 1]`.
    ///
    /// A zero vector (a title made only of stop words) is at distance 1 from
    /// everything, itself included. Identical non-zero vectors are at exactly 0.
    pub fn cosine_distance(&self, other: &SparseVector) -> f64 {
        if self.is_zero() || other.is_zero() {
            return 1.0;
        }
        if self == other {
            return 0.0;
        }
        (1.0 - self.dot(other)).clamp(0.0, 1.0)
    }
}

/// Split text into lowercase tokens, dropping stop words.
pub fn tokenize(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    TOKEN_PATTERN
        .find_iter(&lower)
        .map(|m| m.as_str())
        .filter(|token| !ENGLISH_STOP_WORDS.contains(*token))
        .map(str::to_string)
        .collect()
}

/// Fit the vocabulary on `documents` and return one vector per document.
pub fn fit_transform<S: AsRef<str>>(documents: &[S]) -> Vec<SparseVector> {
    let tokenized: Vec<Vec<String>> = documents.iter().map(|d| tokenize(d.as_ref())).collect();

    let mut vocabulary: HashMap<&str, usize> = HashMap::new();
    let mut document_frequency: Vec<usize> = Vec::new();
    for tokens in &tokenized {
        let distinct: HashSet<&str> = tokens.iter().map(String::as_str).collect();
        for token in distinct {
            let next = vocabulary.len();
            let index = *vocabulary.entry(token).or_insert(next);
            if index == document_frequency.len() {
                document_frequency.push(0);
            }
            document_frequency[index] += 1;
        }
    }

    let n = documents.len() as f64;
    let idf: Vec<f64> = document_frequency
        .iter()
        .map(|&df| ((1.0 + n) / (1.0 + df as f64)).ln() + 1.0)
        .collect();

    tokenized
        .iter()
        .map(|tokens| {
            let mut entries: BTreeMap<usize, f64> = BTreeMap::new();
            for token in tokens {
                let index = vocabulary[token.as_str()];
                *entries.entry(index).or_insert(0.0) += 1.0;
            }
            for (index, weight) in entries.iter_mut() {
                *weight *= idf[*index];
            }
            let norm = entries.values().map(|w| w * w).sum::<f64>().sqrt();
            if norm > 0.0 {
                for weight in entries.values_mut() {
                    *weight /= norm;
                }
            }
            SparseVector { entries }
        })
        .collect()
}
