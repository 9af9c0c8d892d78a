use super::{
    descriptors::LANGUAGE_DESCRIPTOR_MAP,
    language_d::{
        LanguageAndProcessors, LanguageAndReadingNormalizer, LanguageAndTransforms, LanguageSummary,
    },
};

pub fn get_language_summaries() -> Vec<LanguageSummary> {
    LANGUAGE_DESCRIPTOR_MAP
        .values()
        .map(|entry| LanguageSummary {
            name: entry.name,
            iso: entry.iso,
            iso639_3: entry.iso639_3,
            example_text: entry.example_text,
        })
        .collect::<Vec<LanguageSummary>>()
}

pub fn get_all_language_text_processors() -> Vec<LanguageAndProcessors> {
    LANGUAGE_DESCRIPTOR_MAP
        .values()
        .map(|entry| LanguageAndProcessors {
            iso: entry.iso,
            text_preprocessors: (!entry.text_processors.pre.is_empty())
                .then(|| entry.text_processors.pre.clone()),
            text_postprocessors: (!entry.text_processors.post.is_empty())
                .then(|| entry.text_processors.post.clone()),
        })
        .collect()
}

pub fn get_all_language_reading_normalizers() -> Vec<LanguageAndReadingNormalizer> {
    LANGUAGE_DESCRIPTOR_MAP
        .values()
        .filter_map(|entry| {
            if let Some(reading_normalizer) = entry.reading_normalizer {
                return Some(LanguageAndReadingNormalizer {
                    iso: entry.iso,
                    reading_normalizer,
                });
            };
            None
        })
        .collect::<Vec<LanguageAndReadingNormalizer>>()
}

pub fn is_text_lookup_worthy(text: &str, language: &str) -> bool {
    if let Some(descriptor) = LANGUAGE_DESCRIPTOR_MAP.get(language) {
        if let Some(itlw_fn) = descriptor.is_text_lookup_worthy {
            return itlw_fn(text);
        }
    }
    false
}

pub fn get_all_language_transform_descriptors() -> Vec<LanguageAndTransforms> {
    let mut results: Vec<LanguageAndTransforms> = Vec::new();
    for entry in LANGUAGE_DESCRIPTOR_MAP.values() {
        if let Some(language_transforms) = entry.language_transforms {
            let item = LanguageAndTransforms {
                iso: entry.iso,
                language_transforms: language_transforms.clone(),
            };
            results.push(item);
        }
    }
    results
}
