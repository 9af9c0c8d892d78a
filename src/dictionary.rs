//! In-memory result types produced by a lookup: headwords, definitions, frequencies,
//! pronunciations and the tags that decorate them. These are assembled by
//! [`crate::translator::Translator`] from rows returned by the dictionary store and are
//! never persisted themselves.

use crate::database::dictionary_database::Pronunciation;
use crate::dictionary_data::TermGlossaryContent;
use crate::language::transformer::InflectionRuleChainCandidate;
use crate::translation_internal::TextProcessorRuleChainCandidate;
use serde::{Deserialize, Serialize};

/// Either a scalar byte or a list of bytes, used for term-meta payloads (e.g. pitch
/// accent `nasal`/`devoice` positions) that Yomitan dictionaries encode as either a
/// single number or an array of numbers.
#[allow(dead_code)]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum NumOrStr {
    Num(u64),
    Str(String),
}

/// Same ambiguity as [`NumOrStr`], but for the `position`/`nasal`/`devoice` fields of a
/// pitch accent, which are bytes rather than arbitrary integers.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum VecNumOrNum {
    Vec(Vec<u8>),
    Num(u8),
}

/// Discriminates which store table an in-memory entry was assembled from. Used where a
/// caller holds a mixed list of term and kanji results (e.g. the tag aggregator) and
/// needs to recover which bulk query produced a given entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DictionaryEntryType {
    Term,
    Kanji,
}

/// How a term row matched the query that produced it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TermSourceMatchType {
    Exact,
    Prefix,
    Suffix,
}

/// Which index of a term row the match was made against.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TermSourceMatchSource {
    Term,
    Reading,
    Sequence,
}

/// Deduplication key for the unordered-equality comparison used when merging
/// `inflectionRuleChainCandidates`/`textProcessorRuleChainCandidates` during entry
/// merging: the chain's rule names, order-independent.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct EntryInflectionRuleChainCandidatesKey(pub Vec<String>);

impl EntryInflectionRuleChainCandidatesKey {
    pub fn from_chain(rules: &[String]) -> Self {
        let mut sorted = rules.to_vec();
        sorted.sort_unstable();
        Self(sorted)
    }
}

/// A single source occurrence of a headword: the text as it appeared, as it was
/// transformed by text processors, and as it was deinflected, plus how the match
/// was made.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TermSource {
    pub original_text: String,
    pub transformed_text: String,
    pub deinflected_text: String,
    pub match_type: TermSourceMatchType,
    pub match_source: TermSourceMatchSource,
    /// True iff this source was derived from the original search text, as opposed to
    /// related-dictionary expansion.
    pub is_primary: bool,
}

/// A distinct `(term, reading)` pair within a dictionary entry, carrying every source
/// occurrence and word-class/tag data attached to that pair.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TermHeadword {
    pub index: usize,
    pub term: String,
    pub reading: String,
    pub sources: Vec<TermSource>,
    pub tags: Vec<DictionaryTag>,
    /// Part-of-speech rule identifiers carried by the originating term row.
    pub word_classes: Vec<String>,
}

/// One glossary definition, scoped to a subset of an entry's headwords via
/// `headword_indices`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TermDefinition {
    pub id: String,
    pub index: usize,
    pub headword_indices: Vec<usize>,
    pub dictionary: String,
    pub dictionary_index: usize,
    pub dictionary_alias: String,
    pub score: i128,
    /// Populated by sort-frequency injection; 0 until then.
    pub frequency_order: i128,
    pub sequences: Vec<i128>,
    pub is_primary: bool,
    pub tags: Vec<DictionaryTag>,
    pub entries: Vec<TermGlossaryContent>,
}

/// A frequency record attached to one headword of an entry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TermFrequency {
    pub index: usize,
    pub headword_index: usize,
    pub dictionary: String,
    pub dictionary_index: usize,
    pub dictionary_alias: String,
    /// Whether the frequency row specified a reading that matched this headword's
    /// reading (rows without a reading match any headword).
    pub has_reading: bool,
    pub frequency: i128,
    pub display_value: Option<String>,
    pub display_value_parsed: bool,
}

/// Pronunciation data attached to one headword of an entry: every pitch-accent or IPA
/// transcription contributed by a dictionary.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TermPronunciation {
    pub index: usize,
    pub headword_index: usize,
    pub dictionary: String,
    pub dictionary_index: usize,
    pub dictionary_alias: String,
    pub pronunciations: Vec<Pronunciation>,
}

/// A composite result for a single looked-up term: one or more headwords, the
/// definitions that apply to them, and the frequency/pronunciation data collected for
/// each headword.
///
/// Invariants: every `headword_indices`/`headword_index` value is `< headwords.len()`;
/// `index` fields on headwords/definitions/frequencies/pronunciations are stable
/// positional indices into their owning `Vec`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TermDictionaryEntry {
    /// Always [`TermSourceMatchSource::Term`]; carried for symmetry with the internal
    /// representation and to let generic code distinguish term from kanji results.
    pub entry_type: TermSourceMatchSource,
    pub is_primary: bool,
    pub text_processor_rule_chain_candidates: Vec<TextProcessorRuleChainCandidate>,
    pub inflection_rule_chain_candidates: Vec<InflectionRuleChainCandidate>,
    pub score: i128,
    pub frequency_order: i128,
    pub dictionary_alias: String,
    pub dictionary_index: usize,
    pub source_term_exact_match_count: usize,
    pub match_primary_reading: bool,
    pub max_original_text_length: usize,
    pub headwords: Vec<TermHeadword>,
    pub definitions: Vec<TermDefinition>,
    pub pronunciations: Vec<TermPronunciation>,
    pub frequencies: Vec<TermFrequency>,
}

/// A tag attached to a headword, definition, or pronunciation: a display name backed
/// by category/ordering/scoring metadata resolved from the dictionary's tag bank.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DictionaryTag {
    pub name: String,
    pub category: String,
    pub order: usize,
    pub score: usize,
    /// Notes describing the tag, one per contributing dictionary after merging.
    pub content: Vec<String>,
    /// Every dictionary that contributed this (possibly merged) tag.
    pub dictionaries: Vec<String>,
    /// Set when a later definition's part-of-speech tag set duplicates the previous
    /// one within the same dictionary.
    pub redundant: bool,
}

impl DictionaryTag {
    /// Placeholder used when no matching row exists in the tag bank: category
    /// `default`, order and score 0.
    pub fn new_default(name: String, dictionary: String) -> Self {
        Self {
            name,
            category: String::from("default"),
            order: 0,
            score: 0,
            content: vec![],
            dictionaries: vec![dictionary],
            redundant: false,
        }
    }
}

/// One stat entry attached to a kanji lookup result, resolved from a kanji-meta row's
/// `stats` map whose key is really a tag reference (`name[:query]`).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct KanjiStatGroup {
    pub name: String,
    pub category: String,
    pub content: Vec<String>,
    pub order: usize,
    pub score: usize,
    pub dictionary: String,
    pub value: String,
}

/// A frequency record attached to a kanji lookup result.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct KanjiFrequency {
    pub index: usize,
    pub dictionary: String,
    pub dictionary_index: usize,
    pub dictionary_alias: String,
    pub character: String,
    pub frequency: i128,
    pub display_value: Option<String>,
    pub display_value_parsed: bool,
}

/// A composite result for a single looked-up kanji character: much simpler than
/// [`TermDictionaryEntry`] since there is no deinflection or headword merging.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct KanjiDictionaryEntry {
    pub index: usize,
    pub character: String,
    pub dictionary: String,
    pub dictionary_index: usize,
    pub dictionary_alias: String,
    pub onyomi: Vec<String>,
    pub kunyomi: Vec<String>,
    pub tags: Vec<DictionaryTag>,
    pub definitions: Vec<String>,
    pub stats: Vec<KanjiStatGroup>,
    pub frequencies: Vec<KanjiFrequency>,
}
