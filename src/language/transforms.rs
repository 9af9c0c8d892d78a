use crate::language::transformer::{DeinflectFnType, Rule, RuleType, SuffixRule};
use fancy_regex::Regex;

pub fn inflection(
    inflected: &str,
    deinflected: &'static str,
    conditions_in: &'static [&'static str],
    conditions_out: &'static [&'static str],
    rule_type: RuleType,
) -> Rule {
    let regx = match rule_type {
        RuleType::Prefix => format!("^{inflected}"),
        RuleType::Suffix => format!("{inflected}$"),
        RuleType::WholeWord => format!("^{inflected}$"),
        _ => panic!(
            "{rule_type:?} is invalid, only RuleType Suffix, Prefix && WholeWord work with this fn"
        ),
    };
    let deinflect_fn = match rule_type {
        RuleType::Suffix => DeinflectFnType::GenericSuffix,
        RuleType::Prefix => DeinflectFnType::GenericPrefix,
        RuleType::WholeWord => DeinflectFnType::GenericWholeWord,
        _ => panic!(
            "{rule_type:?} is invalid, only RuleType Suffix, Prefix && WholeWord work with this fn"
        ),
    };
    let is_inflected = Regex::new(&regx).unwrap();
    let deinflected = if deinflected.is_empty() {
        None
    } else {
        Some(deinflected)
    };
    Rule {
        rule_type,
        is_inflected,
        deinflected,
        deinflect_fn,
        inflected_str: Some(inflected.to_string()),
        conditions_in,
        conditions_out,
    }
}

/// Builds a [`SuffixRule`] matching `inflected_suffix$` and deinflecting back to
/// `deinflected_suffix` via regex substitution.
pub fn suffix_inflection(
    inflected_suffix: &str,
    deinflected_suffix: &'static str,
    conditions_in: &'static [&'static str],
    conditions_out: &'static [&'static str],
) -> SuffixRule {
    let reg_str = format!("{inflected_suffix}$");
    SuffixRule {
        rule_type: RuleType::Suffix,
        is_inflected: Regex::new(&reg_str).unwrap(),
        inflected_str: Some(inflected_suffix.to_string()),
        deinflected: deinflected_suffix,
        deinflect_fn: DeinflectFnType::GenericSuffix,
        conditions_in,
        conditions_out,
    }
}

/// Builds a [`Rule`] matching `^inflected_prefix` and deinflecting back to `deinflected_prefix`.
pub fn prefix_inflection(
    inflected_prefix: &str,
    deinflected_prefix: &'static str,
    conditions_in: &'static [&'static str],
    conditions_out: &'static [&'static str],
) -> Rule {
    inflection(
        inflected_prefix,
        deinflected_prefix,
        conditions_in,
        conditions_out,
        RuleType::Prefix,
    )
}

pub fn whole_word_inflection(
    inflected_word: &str,
    deinflected_word: &'static str,
    conditions_in: &'static [&'static str],
    conditions_out: &'static [&'static str],
) -> Rule {
    inflection(
        inflected_word,
        deinflected_word,
        conditions_in,
        conditions_out,
        RuleType::WholeWord,
    )
}

/// A stem-changing verb rule (e.g. Spanish `contar` -> `cuent-`): the stem is substituted,
/// then the remaining ending is rewritten via `ending_re` -> `ending_to`.
pub fn generic_stem_change_rule(
    stem_from: &'static str,
    stem_to: &'static str,
    ending_re: &'static str,
    ending_to: &'static str,
    conditions_in: &'static [&'static str],
    conditions_out: &'static [&'static str],
) -> Rule {
    let pattern = format!("{stem_from}{ending_re}$");
    Rule {
        rule_type: RuleType::Other,
        is_inflected: Regex::new(&pattern).unwrap(),
        inflected_str: None,
        deinflected: None,
        deinflect_fn: DeinflectFnType::GenericStemChange {
            stem_from,
            stem_to,
            ending_re,
            ending_to,
        },
        conditions_in,
        conditions_out,
    }
}

/// Like [`generic_stem_change_rule`], but the stem substitution differs depending on whether
/// `special_case_prefix` precedes the stem (e.g. Spanish `jugar` vs. `contar`).
pub fn special_cased_stem_change_rule(
    special_case_prefix: &'static str,
    special_stem_from: &'static str,
    special_stem_to: &'static str,
    default_stem_from: &'static str,
    default_stem_to: &'static str,
    ending_re: &'static str,
    ending_to: &'static str,
    conditions_in: &'static [&'static str],
    conditions_out: &'static [&'static str],
) -> Rule {
    let pattern = format!("({special_stem_from}|{default_stem_from}){ending_re}$");
    Rule {
        rule_type: RuleType::Other,
        is_inflected: Regex::new(&pattern).unwrap(),
        inflected_str: None,
        deinflected: None,
        deinflect_fn: DeinflectFnType::SpecialCasedStemChange {
            prefix: special_case_prefix,
            special_stem_from,
            special_stem_to,
            default_stem_from,
            default_stem_to,
            ending_re,
            ending_to,
        },
        conditions_in,
        conditions_out,
    }
}
