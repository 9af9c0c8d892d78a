use std::collections::VecDeque;

use fancy_regex::Regex;

use crate::language::transformer::LanguageTransformDescriptor;

/// `export type TextProcessorFunction<T = unknown> = (str: string, setting: T) => string;` in yomitan.
pub trait TextProcessable<T> {
    fn process(str: &str, options: Vec<T>) -> String;
}

/// The union of every option shape a text processor in this crate can be configured with.
/// Yomitan types each processor's options independently; collapsing them into one enum lets
/// every processor share a single non-generic [`TextProcessor`] shape and live in the same `Vec`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextProcessorSetting {
    Bool(bool),
    BiDirectional(BidirectionalPreProcessorOptions),
    Emphatic(bool, bool),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BidirectionalPreProcessorOptions {
    Off,
    Direct,
    Inverse,
}

/// Text `pre-` & `post-`processors are used during the translation process to
/// create alternate versions of the input text to search for.
///
/// This can be helpful when the input text doesn't exactly
/// match the term or expression found in the database.
///
/// When a language has multiple processors, the translator generates
/// variants of the text by applying all combinations of the processors.
#[derive(Debug, Clone, Copy)]
pub struct TextProcessor {
    pub name: &'static str,
    pub description: &'static str,
    pub options: &'static [TextProcessorSetting],
    pub process: fn(&str, TextProcessorSetting) -> String,
}

/// A processor whose meaningful variants are `{off, direct, inverse}` of the same conversion.
pub type BidirectionalConversionPreProcessor = TextProcessor;
/// Alias kept for call sites that don't care whether a processor happens to be bidirectional.
pub type AnyTextProcessor = TextProcessor;

/// Helper function to normalize readings for grouping purposes.
pub type ReadingNormalizer = fn(&str) -> String;

pub struct LanguageAndProcessors {
    pub iso: &'static str,
    pub text_preprocessors: Option<Vec<TextProcessorWithId>>,
    pub text_postprocessors: Option<Vec<TextProcessorWithId>>,
}

pub struct LanguageAndReadingNormalizer {
    pub iso: &'static str,
    pub reading_normalizer: ReadingNormalizer,
}

pub struct LanguageAndTransforms {
    pub iso: &'static str,
    pub language_transforms: LanguageTransformDescriptor,
}

#[derive(Debug, Clone, Copy)]
pub struct TextProcessorWithId {
    pub id: &'static str,
    pub processor: TextProcessor,
}

/// A single compiled find/replace pair from a [`TranslationTextReplacementGroup`](crate::settings::TranslationTextReplacementGroup).
#[derive(Debug, Clone)]
pub struct FindTermsTextReplacement {
    pub pattern: Regex,
    pub replacement: String,
    pub is_global: bool,
}

/// One candidate variant of the search text per replacement group, `None` standing in for
/// "search the original text unmodified".
pub type FindTermsTextReplacements = VecDeque<Option<Vec<FindTermsTextReplacement>>>;

#[derive(Debug, Clone)]
pub struct LanguageSummary {
    pub name: &'static str,
    pub iso: &'static str,
    pub iso639_3: &'static str,
    pub example_text: &'static str,
}
