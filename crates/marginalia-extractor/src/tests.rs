//! End-to-end tests for the EntityExtractor

#[cfg(test)]
mod tests {
    use crate::{classify_entities, EntityExtractor, ExtractorConfig, ExtractorError};
    use marginalia_domain::{ClassifiedResult, EntityLabel, EntitySpan};
    use marginalia_nlp::{
        english_pronouns, GazetteerEntry, GazetteerRecognizer, MockRecognizer, NlpError,
        StopwordList,
    };
    use proptest::prelude::*;
    use std::sync::Arc;

    fn repeat(paragraph: &str, times: usize) -> String {
        vec![paragraph; times].join("\n\n")
    }

    fn all_entries(result: &ClassifiedResult) -> Vec<&String> {
        result.iter_buckets().flat_map(|(_, set)| set.iter()).collect()
    }

    #[test]
    fn test_character_scenario_excludes_author() {
        let mut recognizer = MockRecognizer::new();
        recognizer.add_spans(
            "Gandalf knocked.",
            vec![EntitySpan::new("Gandalf", EntityLabel::Person)],
        );

        let content = repeat("Gandalf knocked.", 3);
        let result = classify_entities(&recognizer, &content, "J.R.R. Tolkien").unwrap();

        assert!(result.characters.contains("Gandalf"));
        for entry in all_entries(&result) {
            let lower = entry.to_lowercase();
            assert_ne!(lower, "j.r.r.");
            assert_ne!(lower, "tolkien");
        }
    }

    #[test]
    fn test_author_mentions_never_surface() {
        let mut recognizer = MockRecognizer::new();
        recognizer.add_spans(
            "Tolkien wrote of Gandalf.",
            vec![
                EntitySpan::new("Tolkien", EntityLabel::Person),
                EntitySpan::new("Gandalf", EntityLabel::Person),
            ],
        );

        let content = repeat("Tolkien wrote of Gandalf.", 4);
        let result = classify_entities(&recognizer, &content, "J.R.R. Tolkien").unwrap();

        assert!(result.characters.contains("Gandalf"));
        assert!(!result.contains("Tolkien"));
    }

    #[test]
    fn test_fellowship_is_a_group() {
        let mut recognizer = MockRecognizer::new();
        let paragraphs = [
            "They joined the Fellowship.",
            "Boromir left the Fellowship.",
            "Sam served the Fellowship.",
        ];
        for paragraph in paragraphs {
            recognizer.add_spans(
                paragraph,
                vec![EntitySpan::new("the Fellowship", EntityLabel::Org)],
            );
        }

        let result =
            classify_entities(&recognizer, &paragraphs.join("\n\n"), "Mary Shelley").unwrap();

        assert!(result.groups.contains("Fellowship"));
        assert!(!result.characters.contains("Fellowship"));
        assert!(!result.locations.contains("Fellowship"));
    }

    #[test]
    fn test_rare_determiner_org_stays_a_location() {
        let mut recognizer = MockRecognizer::new();
        recognizer.add_spans(
            "Frodo reached the Prancing Pony near Bree.",
            vec![
                EntitySpan::new("the Prancing Pony", EntityLabel::Org),
                EntitySpan::new("Bree", EntityLabel::Gpe),
            ],
        );
        let content = "Frodo reached the Prancing Pony near Bree.";

        for config in [ExtractorConfig::default(), ExtractorConfig::strict()] {
            let extractor = EntityExtractor::new(&recognizer, config);
            let result = extractor.extract(content, "").unwrap();
            assert!(result.locations.contains("Prancing pony"));
            assert!(result.locations.contains("Bree"));
            assert!(result.groups.is_empty());
        }
    }

    #[test]
    fn test_group_below_threshold_stays_a_location() {
        let mut recognizer = MockRecognizer::new();
        let paragraphs = ["They joined the Fellowship.", "Boromir left the Fellowship."];
        for paragraph in paragraphs {
            recognizer.add_spans(
                paragraph,
                vec![EntitySpan::new("the Fellowship", EntityLabel::Org)],
            );
        }

        let result =
            classify_entities(&recognizer, &paragraphs.join("\n\n"), "Mary Shelley").unwrap();

        assert!(result.locations.contains("Fellowship"));
        assert!(result.groups.is_empty());
        assert!(result.characters.is_empty());
    }

    #[test]
    fn test_empty_content() {
        let recognizer = MockRecognizer::new();
        let result = classify_entities(&recognizer, "", "J.R.R. Tolkien").unwrap();

        assert!(result.characters.is_empty());
        assert!(result.groups.is_empty());
        assert!(result.locations.is_empty());
        assert!(result.events.is_empty());
        assert_eq!(recognizer.call_count(), 0);
    }

    #[test]
    fn test_threshold_boundary() {
        let recognizer = MockRecognizer::new();

        let twice = classify_entities(&recognizer, &repeat("Bilbo laughed.", 2), "").unwrap();
        assert!(!twice.characters.contains("Bilbo"));
        assert!(twice.is_empty());

        let thrice = classify_entities(&recognizer, &repeat("Bilbo laughed.", 3), "").unwrap();
        assert!(thrice.characters.contains("Bilbo"));
    }

    #[test]
    fn test_sensitive_config_lowers_threshold() {
        let recognizer = MockRecognizer::new();
        let extractor = EntityExtractor::new(&recognizer, ExtractorConfig::sensitive());

        let result = extractor.extract(&repeat("Bilbo laughed.", 2), "").unwrap();
        assert!(result.characters.contains("Bilbo"));
    }

    #[test]
    fn test_character_beats_location() {
        let mut recognizer = MockRecognizer::new();
        recognizer.add_spans(
            "Bree was quiet near Mordor.",
            vec![
                EntitySpan::new("Bree", EntityLabel::Gpe),
                EntitySpan::new("Mordor", EntityLabel::Loc),
            ],
        );

        let content = "Bree was quiet near Mordor.\n\nBree slept.\n\nBree woke.";
        let result = classify_entities(&recognizer, content, "").unwrap();

        assert!(result.characters.contains("Bree"));
        assert!(!result.locations.contains("Bree"));
        // Locations skip the threshold: one mention is enough.
        assert!(result.locations.contains("Mordor"));
        assert!(!result.characters.contains("Mordor"));
    }

    #[test]
    fn test_normalization_collapses_group_variants() {
        let mut recognizer = MockRecognizer::new();
        recognizer.add_spans(
            "The Shire slept.",
            vec![EntitySpan::new("The Shire", EntityLabel::Org)],
        );
        recognizer.add_spans(
            "All of the shire woke.",
            vec![EntitySpan::new("the shire", EntityLabel::Org)],
        );

        let content = format!(
            "{}\n\n{}",
            repeat("The Shire slept.", 3),
            repeat("All of the shire woke.", 3)
        );
        let result = classify_entities(&recognizer, &content, "").unwrap();

        assert_eq!(result.groups.len(), 1);
        assert!(result.groups.contains("Shire"));
        assert!(!result.characters.contains("Shire"));
        assert!(result.locations.is_empty());
    }

    #[test]
    fn test_events_skip_threshold() {
        let mut recognizer = MockRecognizer::new();
        recognizer.add_spans(
            "The Long Party began.",
            vec![EntitySpan::new("Long Party", EntityLabel::Event)],
        );

        let result = classify_entities(&recognizer, "The Long Party began.", "").unwrap();
        assert_eq!(
            result.events.iter().collect::<Vec<_>>(),
            vec![&"Long party".to_string()]
        );
        assert!(result.characters.is_empty());
    }

    #[test]
    fn test_extraction_is_idempotent() {
        let mut recognizer = MockRecognizer::new();
        recognizer.add_spans(
            "Aragorn rode to Rohan.",
            vec![
                EntitySpan::new("Aragorn", EntityLabel::Person),
                EntitySpan::new("Rohan", EntityLabel::Gpe),
            ],
        );
        let content = repeat("Aragorn rode to Rohan.", 3);
        let extractor = EntityExtractor::new(&recognizer, ExtractorConfig::default());

        let first = extractor.extract(&content, "").unwrap();
        let second = extractor.extract(&content, "").unwrap();
        assert_eq!(first, second);
        assert!(first.characters.contains("Aragorn"));
    }

    #[test]
    fn test_recognizer_failure_propagates() {
        let mut recognizer = MockRecognizer::new();
        recognizer.add_failure("The Nazgul came.");

        let content = "Frodo hid.\n\nThe Nazgul came.\n\nFrodo ran.";
        let result = classify_entities(&recognizer, content, "");
        assert!(matches!(result, Err(NlpError::Recognition(_))));
        // The third paragraph is never reached.
        assert_eq!(recognizer.call_count(), 2);
    }

    #[test]
    fn test_gazetteer_end_to_end() {
        let recognizer = GazetteerRecognizer::new(vec![
            GazetteerEntry::new("Samwise Gamgee", EntityLabel::Person),
            GazetteerEntry::new("Hobbiton", EntityLabel::Gpe),
            GazetteerEntry::new("the Rangers", EntityLabel::Org),
        ])
        .unwrap();

        let content = [
            "Samwise Gamgee left Hobbiton with the Rangers.",
            "Samwise Gamgee thought of Hobbiton.",
            "Samwise Gamgee trusted the Rangers.",
            "Later the Rangers returned.",
        ]
        .join("\n\n");

        let result = classify_entities(&recognizer, &content, "J.R.R. Tolkien").unwrap();
        assert!(result.characters.contains("Samwise gamgee"));
        assert!(result.groups.contains("Rangers"));
        assert!(result.locations.contains("Hobbiton"));
        assert!(!result.characters.contains("Rangers"));
        assert!(!result.locations.contains("Rangers"));
    }

    #[tokio::test]
    async fn test_parallel_matches_sequential() {
        let mut recognizer = MockRecognizer::new();
        recognizer.add_spans(
            "Frodo met the Rangers in Bree.",
            vec![
                EntitySpan::new("Frodo", EntityLabel::Person),
                EntitySpan::new("the Rangers", EntityLabel::Org),
                EntitySpan::new("Bree", EntityLabel::Gpe),
            ],
        );
        recognizer.add_spans(
            "The Battle of Bywater ended it far from Mordor.",
            vec![
                EntitySpan::new("Battle of Bywater", EntityLabel::Event),
                EntitySpan::new("Mordor", EntityLabel::Loc),
            ],
        );
        let content = format!(
            "{}\n\n{}\n\nSam waited.\n\nSam slept.\n\nSam woke.",
            repeat("Frodo met the Rangers in Bree.", 3),
            "The Battle of Bywater ended it far from Mordor."
        );

        let config = ExtractorConfig {
            max_concurrent_paragraphs: 2,
            ..ExtractorConfig::default()
        };
        let extractor = EntityExtractor::new(recognizer, config);

        let sequential = extractor.extract(&content, "").unwrap();
        let parallel = extractor.extract_parallel(&content, "").await.unwrap();

        assert_eq!(sequential, parallel);
        assert!(parallel.characters.contains("Frodo"));
        assert!(parallel.characters.contains("Sam"));
        assert!(parallel.groups.contains("Rangers"));
        // Bree is also counted as a proper-noun token three times.
        assert!(parallel.characters.contains("Bree"));
        assert!(!parallel.locations.contains("Bree"));
        assert!(parallel.locations.contains("Mordor"));
        assert!(parallel.events.contains("Battle of bywater"));
    }

    #[tokio::test]
    async fn test_parallel_shared_recognizer_and_failure() {
        let mut recognizer = MockRecognizer::new();
        recognizer.add_failure("Smaug burned it.");
        let shared = Arc::new(recognizer);
        let extractor = EntityExtractor::new(Arc::clone(&shared), ExtractorConfig::default());

        let result = extractor
            .extract_parallel("Bard aimed.\n\nSmaug burned it.", "")
            .await;
        assert!(matches!(
            result,
            Err(ExtractorError::Recognizer(NlpError::Recognition(_)))
        ));

        let empty = extractor.extract_parallel("", "").await.unwrap();
        assert!(empty.is_empty());
    }

    const VOCABULARY: [&str; 18] = [
        "Gandalf", "Frodo", "the", "The", "Shire", "he", "She", "Tolkien", "J.R.R.", "ran", "A",
        "x", "Bree", "Mordor", "hobbits", "Fellowship", "it", "Long Party",
    ];

    fn gazetteer() -> GazetteerRecognizer {
        GazetteerRecognizer::new(vec![
            GazetteerEntry::new("Gandalf", EntityLabel::Person),
            GazetteerEntry::new("Tolkien", EntityLabel::Person),
            GazetteerEntry::new("Bree", EntityLabel::Gpe),
            GazetteerEntry::new("Mordor", EntityLabel::Loc),
            GazetteerEntry::new("the Shire", EntityLabel::Org),
            GazetteerEntry::new("the Fellowship", EntityLabel::Org),
            GazetteerEntry::new("Long Party", EntityLabel::Event),
            GazetteerEntry::new("A", EntityLabel::Person),
            GazetteerEntry::new("x", EntityLabel::Gpe),
        ])
        .unwrap()
    }

    fn build_content(words: &[&str]) -> String {
        words
            .chunks(6)
            .map(|chunk| format!("{}.", chunk.join(" ")))
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    proptest! {
        #[test]
        fn prop_invariants_hold(
            words in prop::collection::vec(prop::sample::select(VOCABULARY.to_vec()), 0..60)
        ) {
            let recognizer = gazetteer();
            let content = build_content(&words);
            let author = "J.R.R. Tolkien";

            let result = classify_entities(&recognizer, &content, author).unwrap();
            let again = classify_entities(&recognizer, &content, author).unwrap();
            prop_assert_eq!(&result, &again);

            let stopwords = StopwordList::english();
            let pronouns = english_pronouns();
            for entry in all_entries(&result) {
                let lower = entry.to_lowercase();
                prop_assert!(entry.chars().count() > 1);
                let bare = lower.trim_end_matches('.');
                prop_assert!(bare != "tolkien" && bare != "j.r.r");
                prop_assert!(!stopwords.contains(&lower));
                prop_assert!(!pronouns.contains(&lower));
            }
            prop_assert!(result.characters.is_disjoint(&result.locations));
            prop_assert!(result.characters.is_disjoint(&result.groups));
            prop_assert!(result.groups.is_disjoint(&result.locations));
        }

        #[test]
        fn prop_threshold_boundary(times in 0usize..7) {
            let recognizer = MockRecognizer::new();
            let result =
                classify_entities(&recognizer, &repeat("Bilbo laughed.", times), "").unwrap();
            prop_assert_eq!(result.characters.contains("Bilbo"), times >= 3);
        }
    }
}
