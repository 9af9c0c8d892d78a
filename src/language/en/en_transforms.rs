use std::{collections::HashSet, sync::LazyLock};

use fancy_regex::Regex;
use indexmap::IndexMap;

use crate::language::{
    transformer::{
        Condition, ConditionMap, DeinflectFnType, LanguageTransformDescriptor, Rule, RuleType,
        SuffixRule, Transform, TransformMap,
    },
    transforms::{inflection, suffix_inflection},
};

fn doubled_consonant_inflection(
    consonants: &'static str,
    suffix: &'static str,
    conditions_in: &'static [&'static str],
    conditions_out: &'static [&'static str],
) -> Vec<SuffixRule> {
    consonants
        .chars()
        .map(|csn| {
            let inflected: &'static str = format!("{csn}{csn}{suffix}").leak();
            let deinflected: &'static str = csn.to_string().leak();
            suffix_inflection(inflected, deinflected, conditions_in, conditions_out)
        })
        .collect()
}

fn past_suffix_inflections() -> Vec<SuffixRule> {
    [
        suffix_inflection("ed", "", &["v"], &["v"]),
        suffix_inflection("ed", "e", &["v"], &["v"]),
        suffix_inflection("ied", "y", &["v"], &["v"]),
        suffix_inflection("cked", "c", &["v"], &["v"]),
        suffix_inflection("laid", "lay", &["v"], &["v"]),
        suffix_inflection("paid", "pay", &["v"], &["v"]),
        suffix_inflection("said", "say", &["v"], &["v"]),
    ]
    .into_iter()
    .chain(doubled_consonant_inflection(
        "bdgklmnprstz",
        "ed",
        &["v"],
        &["v"],
    ))
    .collect()
}

fn ing_suffix_inflections() -> Vec<SuffixRule> {
    [
        suffix_inflection("ing", "", &["v"], &["v"]),
        suffix_inflection("ing", "e", &["v"], &["v"]),
        suffix_inflection("ying", "ie", &["v"], &["v"]),
        suffix_inflection("cking", "c", &["v"], &["v"]),
    ]
    .into_iter()
    .chain(doubled_consonant_inflection(
        "bdgklmnprstz",
        "ing",
        &["v"],
        &["v"],
    ))
    .collect()
}

fn third_person_sg_present_suffix_inflections() -> Vec<SuffixRule> {
    vec![
        suffix_inflection("s", "", &["v"], &["v"]),
        suffix_inflection("es", "", &["v"], &["v"]),
        suffix_inflection("ies", "y", &["v"], &["v"]),
    ]
}

#[rustfmt::skip]
const PHRASAL_VERB_PARTICLES: [&str; 57] = ["aboard", "about", "above", "across", "ahead", "alongside", "apart", "around", "aside", "astray", "away", "back", "before", "behind", "below", "beneath", "besides", "between", "beyond", "by", "close", "down", "east", "west", "north", "south", "eastward", "westward", "northward", "southward", "forward", "backward", "backwards", "forwards", "home", "in", "inside", "instead", "near", "off", "on", "opposite", "out", "outside", "over", "overhead", "past", "round", "since", "through", "throughout", "together", "under", "underneath", "up", "within", "without"];
#[rustfmt::skip]
const PHRASAL_VERB_PREPOSITIONS: [&str; 50] = ["aback", "about", "above", "across", "after", "against", "ahead", "along", "among", "apart", "around", "as", "aside", "at", "away", "back", "before", "behind", "below", "between", "beyond", "by", "down", "even", "for", "forth", "forward", "from", "in", "into", "of", "off", "on", "onto", "open", "out", "over", "past", "round", "through", "to", "together", "toward", "towards", "under", "up", "upon", "way", "with", "without"];

pub static PARTICLES_DISJUNCTION: LazyLock<String> =
    LazyLock::new(|| PHRASAL_VERB_PARTICLES.join("|"));

static PHRASAL_VERB_WORD_SET: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    HashSet::from_iter(
        PHRASAL_VERB_PARTICLES
            .into_iter()
            .chain(PHRASAL_VERB_PREPOSITIONS),
    )
});

pub static PHRASAL_VERB_WORD_DISJUNCTION: LazyLock<String> = LazyLock::new(|| {
    PHRASAL_VERB_WORD_SET
        .iter()
        .copied()
        .collect::<Vec<&str>>()
        .join("|")
});

fn create_phrasal_verb_inflections_from_suffix_inflections(
    suffix_rules: Vec<SuffixRule>,
) -> Vec<Rule> {
    suffix_rules
        .into_iter()
        .map(|rule| {
            let inflected = rule.inflected_str.clone().unwrap_or_default();
            let pattern = format!(
                r"(?<=){}(?= (?:{}))",
                fancy_regex::escape(&inflected),
                &*PHRASAL_VERB_WORD_DISJUNCTION
            );
            Rule {
                rule_type: RuleType::Other,
                is_inflected: Regex::new(&pattern).unwrap(),
                inflected_str: Some(inflected),
                deinflected: Some(rule.deinflected),
                deinflect_fn: DeinflectFnType::EnCreatePhrasalVerbInflection,
                conditions_in: rule.conditions_in,
                conditions_out: rule.conditions_out,
            }
        })
        .collect()
}

fn phrasal_verb_interposed_object_rule() -> Rule {
    let pattern = format!(
        r"(?<=\w) (?:(?!\b({})\b).)+ (?=(?:{}))",
        &*PHRASAL_VERB_WORD_DISJUNCTION, &*PARTICLES_DISJUNCTION
    );
    Rule {
        rule_type: RuleType::Other,
        is_inflected: Regex::new(&pattern).unwrap(),
        inflected_str: None,
        deinflected: None,
        deinflect_fn: DeinflectFnType::EnPhrasalVerbInterposedObjectRule,
        conditions_in: &["v_phr"],
        conditions_out: &["v_phr"],
    }
}

static EN_CONDITIONS: LazyLock<ConditionMap> = LazyLock::new(|| {
    ConditionMap(IndexMap::from([
        (
            "v",
            Condition {
                name: "Verb",
                is_dictionary_form: true,
                sub_conditions: Some(&["v_phr"]),
                i18n: None,
            },
        ),
        (
            "v_phr",
            Condition {
                name: "Phrasal verb",
                is_dictionary_form: true,
                sub_conditions: None,
                i18n: None,
            },
        ),
        (
            "n",
            Condition {
                name: "Noun",
                is_dictionary_form: true,
                sub_conditions: Some(&["np", "ns"]),
                i18n: None,
            },
        ),
        (
            "np",
            Condition {
                name: "Noun plural",
                is_dictionary_form: true,
                sub_conditions: None,
                i18n: None,
            },
        ),
        (
            "ns",
            Condition {
                name: "Noun singular",
                is_dictionary_form: true,
                sub_conditions: None,
                i18n: None,
            },
        ),
        (
            "adj",
            Condition {
                name: "Adjective",
                is_dictionary_form: true,
                sub_conditions: None,
                i18n: None,
            },
        ),
        (
            "adv",
            Condition {
                name: "Adverb",
                is_dictionary_form: true,
                sub_conditions: None,
                i18n: None,
            },
        ),
    ]))
});

static EN_TRANSFORMS: LazyLock<TransformMap> = LazyLock::new(|| {
    TransformMap(IndexMap::from([
        (
            "plural",
            Transform {
                name: "plural",
                description: Some("Plural form of a noun"),
                i18n: None,
                rules: vec![suffix_inflection("s", "", &["np"], &["ns"]).into()],
            },
        ),
        (
            "possessive",
            Transform {
                name: "possessive",
                description: Some("Possessive form of a noun"),
                i18n: None,
                rules: vec![
                    suffix_inflection("'s", "", &["n"], &["n"]).into(),
                    suffix_inflection("s'", "s", &["n"], &["n"]).into(),
                ],
            },
        ),
        (
            "past",
            Transform {
                name: "past",
                description: Some("Simple past tense of a verb"),
                i18n: None,
                rules: past_suffix_inflections()
                    .into_iter()
                    .map(Rule::from)
                    .chain(create_phrasal_verb_inflections_from_suffix_inflections(
                        past_suffix_inflections(),
                    ))
                    .collect(),
            },
        ),
        (
            "ing",
            Transform {
                name: "ing",
                description: Some("Present participle of a verb"),
                i18n: None,
                rules: ing_suffix_inflections()
                    .into_iter()
                    .map(Rule::from)
                    .chain(create_phrasal_verb_inflections_from_suffix_inflections(
                        ing_suffix_inflections(),
                    ))
                    .collect(),
            },
        ),
        (
            "3rd pers. sing. pres",
            Transform {
                name: "3rd pers. sing. pres",
                description: Some("Third person singular present tense of a verb"),
                i18n: None,
                rules: third_person_sg_present_suffix_inflections()
                    .into_iter()
                    .map(Rule::from)
                    .chain(create_phrasal_verb_inflections_from_suffix_inflections(
                        third_person_sg_present_suffix_inflections(),
                    ))
                    .collect(),
            },
        ),
        (
            "interposed object",
            Transform {
                name: "interposed object",
                description: Some("Phrasal verb with interposed object"),
                i18n: None,
                rules: vec![phrasal_verb_interposed_object_rule()],
            },
        ),
        (
            "archaic",
            Transform {
                name: "archaic",
                description: Some("Archaic form of a word"),
                i18n: None,
                rules: vec![suffix_inflection("'d", "ed", &["v"], &["v"]).into()],
            },
        ),
        (
            "adverb",
            Transform {
                name: "adverb",
                description: Some("Adverb form of an adjective"),
                i18n: None,
                rules: vec![
                    suffix_inflection("ly", "", &["adv"], &["adj"]).into(),
                    suffix_inflection("ily", "y", &["adv"], &["adj"]).into(),
                    suffix_inflection("ly", "le", &["adv"], &["adj"]).into(),
                ],
            },
        ),
        (
            "comparative",
            Transform {
                name: "comparative",
                description: Some("Comparative form of an adjective"),
                i18n: None,
                rules: [
                    suffix_inflection("er", "", &["adj"], &["adj"]),
                    suffix_inflection("er", "e", &["adj"], &["adj"]),
                    suffix_inflection("ier", "y", &["adj"], &["adj"]),
                ]
                .into_iter()
                .chain(doubled_consonant_inflection(
                    "bdgmnt",
                    "er",
                    &["adj"],
                    &["adj"],
                ))
                .map(Rule::from)
                .collect(),
            },
        ),
        (
            "superlative",
            Transform {
                name: "superlative",
                description: Some("Superlative form of an adjective"),
                i18n: None,
                rules: [
                    suffix_inflection("est", "", &["adj"], &["adj"]),
                    suffix_inflection("est", "e", &["adj"], &["adj"]),
                    suffix_inflection("iest", "y", &["adj"], &["adj"]),
                ]
                .into_iter()
                .chain(doubled_consonant_inflection(
                    "bdgmnt",
                    "est",
                    &["adj"],
                    &["adj"],
                ))
                .map(Rule::from)
                .collect(),
            },
        ),
        (
            "dropped g",
            Transform {
                name: "dropped g",
                description: Some("Dropped g in -ing form of a verb"),
                i18n: None,
                rules: vec![suffix_inflection("in'", "ing", &["v"], &["v"]).into()],
            },
        ),
        (
            "-y",
            Transform {
                name: "-y",
                description: Some("Adjective formed from a verb or noun"),
                i18n: None,
                rules: [
                    suffix_inflection("y", "", &["adj"], &["n", "v"]),
                    suffix_inflection("y", "e", &["adj"], &["n", "v"]),
                ]
                .into_iter()
                .chain(doubled_consonant_inflection(
                    "glmnprst",
                    "y",
                    &[],
                    &["n", "v"],
                ))
                .map(Rule::from)
                .collect(),
            },
        ),
        (
            "un-",
            Transform {
                name: "un-",
                description: Some("Negative form of an adjective, adverb, or verb"),
                i18n: None,
                rules: vec![inflection(
                    "un",
                    "",
                    &["adj", "adv", "v"],
                    &["adj", "adv", "v"],
                    RuleType::Prefix,
                )],
            },
        ),
        (
            "going-to future",
            Transform {
                name: "going-to future",
                description: Some("Going-to future tense of a verb"),
                i18n: None,
                rules: vec![inflection(
                    "going to ",
                    "",
                    &["v"],
                    &["v"],
                    RuleType::Prefix,
                )],
            },
        ),
        (
            "will future",
            Transform {
                name: "will future",
                description: Some("Will-future tense of a verb"),
                i18n: None,
                rules: vec![inflection("will ", "", &["v"], &["v"], RuleType::Prefix)],
            },
        ),
        (
            "imperative negative",
            Transform {
                name: "imperative negative",
                description: Some("Negative imperative form of a verb"),
                i18n: None,
                rules: vec![
                    inflection("don't ", "", &["v"], &["v"], RuleType::Prefix),
                    inflection("do not ", "", &["v"], &["v"], RuleType::Prefix),
                ],
            },
        ),
        (
            "-able",
            Transform {
                name: "-able",
                description: Some("Adjective formed from a verb"),
                i18n: None,
                rules: [
                    suffix_inflection("able", "", &["v"], &["adj"]),
                    suffix_inflection("able", "e", &["v"], &["adj"]),
                    suffix_inflection("iable", "y", &["v"], &["adj"]),
                ]
                .into_iter()
                .chain(doubled_consonant_inflection(
                    "bdgklmnprstz",
                    "able",
                    &["v"],
                    &["adj"],
                ))
                .map(Rule::from)
                .collect(),
            },
        ),
    ]))
});

pub static ENGLISH_TRANSFORMS_DESCRIPTOR: LazyLock<LanguageTransformDescriptor> =
    LazyLock::new(|| LanguageTransformDescriptor {
        language: "en",
        conditions: &EN_CONDITIONS,
        transforms: &EN_TRANSFORMS,
    });

#[cfg(test)]
mod en_transforms_tests {
    use super::*;

    #[test]
    fn past_tense_walked() {
        let rules = past_suffix_inflections();
        let walked = rules.iter().find(|r| r.is_inflected.is_match("walked").unwrap());
        assert!(walked.is_some());
    }

    #[test]
    fn descriptor_has_core_transforms() {
        assert!(EN_TRANSFORMS.0.contains_key("past"));
        assert!(EN_TRANSFORMS.0.contains_key("ing"));
        assert!(EN_TRANSFORMS.0.contains_key("plural"));
    }
}
