use std::collections::{BTreeMap, HashMap};

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use super::stop_words::is_stop_word;

/// Tokens of two or more word characters, matched after case folding.
static RE_TOKEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b\w\w+\b").unwrap());

#[derive(Debug, Error, PartialEq)]
pub enum TfidfError {
    #[error("empty corpus")]
    EmptyCorpus,
    #[error("empty vocabulary; the documents only contain stop words or short tokens")]
    EmptyVocabulary,
    #[error("max_features must be at least 1")]
    ZeroFeatureCap,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TfidfConfig {
    /// Vocabulary cap; the most frequent terms across the corpus are kept.
    pub max_features: usize,
    /// Inclusive n-gram range over stop-word-filtered tokens.
    pub ngram_range: (usize, usize),
    pub remove_stop_words: bool,
}

impl Default for TfidfConfig {
    fn default() -> Self {
        Self {
            max_features: 500,
            ngram_range: (1, 2),
            remove_stop_words: true,
        }
    }
}

/// Term-frequency / inverse-document-frequency vectorizer fitted per corpus.
///
/// Weights are raw counts times the smoothed idf `ln((1 + n) / (1 + df)) + 1`,
/// and each row is L2-normalized, so the dot product of two rows is their cosine.
#[derive(Debug, Clone)]
pub struct TfidfVectorizer {
    config: TfidfConfig,
}

impl TfidfVectorizer {
    pub fn new(config: TfidfConfig) -> Self {
        Self { config }
    }

    /// Case-fold, tokenize, drop stop words and expand to n-grams.
    pub fn analyze(&self, text: &str) -> Vec<String> {
        let lowered = text.to_lowercase();
        let tokens: Vec<&str> = RE_TOKEN
            .find_iter(&lowered)
            .map(|m| m.as_str())
            .filter(|t| !(self.config.remove_stop_words && is_stop_word(t)))
            .collect();

        let (min_n, max_n) = self.config.ngram_range;
        let mut terms = Vec::new();
        for n in min_n.max(1)..=max_n {
            if n > tokens.len() {
                break;
            }
            terms.extend(tokens.windows(n).map(|w| w.join(" ")));
        }
        terms
    }

    /// Fit the vocabulary on `documents` and return one normalized row per document.
    pub fn fit_transform(&self, documents: &[&str]) -> Result<Vec<Vec<f64>>, TfidfError> {
        if documents.is_empty() {
            return Err(TfidfError::EmptyCorpus);
        }
        if self.config.max_features == 0 {
            return Err(TfidfError::ZeroFeatureCap);
        }

        let counts: Vec<HashMap<String, usize>> = documents
            .iter()
            .map(|doc| {
                let mut tf = HashMap::new();
                for term in self.analyze(doc) {
                    *tf.entry(term).or_insert(0) += 1;
                }
                tf
            })
            .collect();

        let vocabulary = self.build_vocabulary(&counts);
        if vocabulary.is_empty() {
            return Err(TfidfError::EmptyVocabulary);
        }

        let n_docs = documents.len() as f64;
        let idf: Vec<f64> = vocabulary
            .iter()
            .map(|term| {
                let df = counts.iter().filter(|tf| tf.contains_key(term)).count() as f64;
                ((1.0 + n_docs) / (1.0 + df)).ln() + 1.0
            })
            .collect();

        Ok(counts
            .iter()
            .map(|tf| {
                let mut row: Vec<f64> = vocabulary
                    .iter()
                    .zip(idf.iter())
                    .map(|(term, idf)| tf.get(term).copied().unwrap_or(0) as f64 * idf)
                    .collect();
                l2_normalize(&mut row);
                row
            })
            .collect())
    }

    /// Alphabetical vocabulary, truncated to the `max_features` most frequent terms
    /// (ties broken alphabetically so the cut is deterministic).
    fn build_vocabulary(&self, counts: &[HashMap<String, usize>]) -> Vec<String> {
        let mut totals: BTreeMap<&str, usize> = BTreeMap::new();
        for tf in counts {
            for (term, count) in tf {
                *totals.entry(term.as_str()).or_insert(0) += count;
            }
        }

        let mut ranked: Vec<(&str, usize)> = totals.into_iter().collect();
        if ranked.len() > self.config.max_features {
            ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
            ranked.truncate(self.config.max_features);
            ranked.sort_by(|a, b| a.0.cmp(b.0));
        }
        ranked.into_iter().map(|(term, _)| term.to_string()).collect()
    }
}

fn l2_normalize(row: &mut [f64]) {
    let norm = row.iter().map(|x| x * x).sum::<f64>().sqrt();
    if norm > 0.0 {
        for v in row.iter_mut() {
            *v /= norm;
        }
    }
}
