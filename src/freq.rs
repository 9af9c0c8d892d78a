use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use crate::{
    database::dictionary_database::{DictionaryDatabaseError, DictionarySet},
    dictionary_data::{GenericFreqData, MetaDataMatchType},
    translator::Translator,
};

/// One dictionary's contribution to a [`FrequencyRanking`]: the raw numeric frequency
/// plus whatever display string the dictionary author supplied for it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DictionaryFrequency {
    pub dictionary: String,
    pub frequency: i128,
    pub display_value: Option<String>,
}

/// The aggregated frequency of a single term across every dictionary that ranks it,
/// reduced to one number via the harmonic mean of its per-dictionary frequencies.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FrequencyRanking {
    pub term: String,
    pub frequencies: Vec<DictionaryFrequency>,
    pub harmonic_mean: i128,
}

/// A term-meta row carried no frequency a caller can rank with (e.g. a pitch/IPA row
/// that was returned alongside frequency rows, or a frequency payload whose value isn't
/// numeric).
fn numeric_frequency(data: &GenericFreqData) -> Option<i128> {
    match data {
        GenericFreqData::Integer(n) => Some(*n as i128),
        GenericFreqData::Object { value, .. } => Some(*value as i128),
        GenericFreqData::String(s) => s.parse::<i128>().ok(),
    }
}

/// The harmonic mean of a set of positive frequencies, rounded to the nearest integer.
/// `n / sum(1/f_i)`. Matches the scenario in §8: `harmonicMean([10, 1000]) == 20`.
fn harmonic_mean(values: &[i128]) -> i128 {
    let positive: Vec<f64> = values
        .iter()
        .copied()
        .filter(|v| *v > 0)
        .map(|v| v as f64)
        .collect();
    if positive.is_empty() {
        return 0;
    }
    let reciprocal_sum: f64 = positive.iter().map(|v| 1.0 / v).sum();
    (positive.len() as f64 / reciprocal_sum).round() as i128
}

impl<'a> Translator<'a> {
    /// Aggregates a term's per-dictionary frequency rows into one [`FrequencyRanking`],
    /// restricted to the given dictionary allowlist.
    ///
    /// Returns `None` if no enabled dictionary ranks the term at all.
    pub fn get_frequency_ranking(
        &self,
        term: &str,
        dictionaries: &(impl DictionarySet + Sync),
    ) -> Result<Option<FrequencyRanking>, Box<DictionaryDatabaseError>> {
        let mut term_list: IndexSet<String> = IndexSet::new();
        term_list.insert(term.to_string());

        let rows = self.db.find_term_meta_bulk(&term_list, dictionaries)?;
        let mut frequencies = Vec::new();
        for row in rows {
            if row.term != term {
                continue;
            }
            let MetaDataMatchType::Frequency(freq_data) = &row.data else {
                continue;
            };
            let generic = match freq_data {
                crate::dictionary_data::TermMetaFreqDataMatchType::Generic(g) => g,
                crate::dictionary_data::TermMetaFreqDataMatchType::WithReading(w) => {
                    &w.frequency
                }
            };
            let Some(frequency) = numeric_frequency(generic) else {
                continue;
            };
            frequencies.push(DictionaryFrequency {
                dictionary: row.dictionary,
                frequency,
                display_value: generic.try_get_reading().cloned(),
            });
        }

        if frequencies.is_empty() {
            return Ok(None);
        }

        let values: Vec<i128> = frequencies.iter().map(|f| f.frequency).collect();
        Ok(Some(FrequencyRanking {
            term: term.to_string(),
            harmonic_mean: harmonic_mean(&values),
            frequencies,
        }))
    }
}

#[cfg(test)]
mod freq_tests {
    use super::harmonic_mean;

    #[test]
    fn harmonic_mean_of_two_dictionaries() {
        // 2 / (1/10 + 1/1000) == 20, per the frequency-ranking scenario.
        assert_eq!(harmonic_mean(&[10, 1000]), 20);
    }

    #[test]
    fn harmonic_mean_ignores_non_positive() {
        assert_eq!(harmonic_mean(&[0, 10, -5]), 10);
    }

    #[test]
    fn harmonic_mean_empty_is_zero() {
        assert_eq!(harmonic_mean(&[]), 0);
    }
}
