use dictionary::{LexicalEntry, Meaning};

use crate::config::{AudioTrigger, WidgetConfig};
use crate::view::{Container, DefinitionBlock, Node};

/// Appends the nodes for `entry` to `container`. Nodes already in the container are kept.
pub fn render(entry: &LexicalEntry, container: &mut Container, config: &WidgetConfig) {
    container.append(Node::Heading {
        level: 3,
        text: entry.word.clone(),
    });

    if let Some(text) = entry.pronunciation() {
        container.append(Node::Paragraph(format!("Pronunciation: {text}")));
    }
    if let Some(src) = entry.audio() {
        let src = src.to_owned();
        container.append(match config.audio {
            AudioTrigger::Controls => Node::Audio { src },
            AudioTrigger::Button => Node::PlayButton { src },
        });
    }

    for meaning in &entry.meanings {
        render_meaning(meaning, container, config);
    }

    if let Some(origin) = entry.origin.as_deref().filter(|origin| !origin.is_empty()) {
        container.append(Node::Paragraph(format!("Origin: {origin}")));
    }
}

fn render_meaning(meaning: &Meaning, container: &mut Container, config: &WidgetConfig) {
    container.append(Node::Heading {
        level: 4,
        text: format!("Part of Speech: {}", meaning.part_of_speech),
    });
    for definition in &meaning.definitions {
        container.append(Node::Definition(DefinitionBlock {
            definition: definition.definition.clone(),
            example: definition
                .example
                .clone()
                .filter(|example| !example.is_empty()),
            synonyms: definition.synonyms.clone(),
            antonyms: definition.antonyms.clone(),
        }));
    }
    if config.meaning_synonyms {
        if !meaning.synonyms.is_empty() {
            container.append(Node::Paragraph(format!(
                "Synonyms: {}",
                meaning.synonyms.join(", ")
            )));
        }
        if !meaning.antonyms.is_empty() {
            container.append(Node::Paragraph(format!(
                "Antonyms: {}",
                meaning.antonyms.join(", ")
            )));
        }
    }
}

#[cfg(test)]
mod tests {
    use dictionary::{Definition, Phonetic};

    use super::*;

    fn definition(text: &str) -> Definition {
        Definition {
            definition: text.to_owned(),
            example: None,
            synonyms: Vec::new(),
            antonyms: Vec::new(),
        }
    }

    fn meaning(part_of_speech: &str, definitions: &[&str]) -> Meaning {
        Meaning {
            part_of_speech: part_of_speech.to_owned(),
            definitions: definitions.iter().copied().map(definition).collect(),
            synonyms: Vec::new(),
            antonyms: Vec::new(),
        }
    }

    fn entry(phonetics: Vec<Phonetic>, meanings: Vec<Meaning>) -> LexicalEntry {
        LexicalEntry {
            word: "run".to_owned(),
            phonetic: None,
            phonetics,
            origin: None,
            meanings,
        }
    }

    fn rendered(entry: &LexicalEntry, config: &WidgetConfig) -> Vec<Node> {
        let mut container = Container::new();
        render(entry, &mut container, config);
        container.nodes().to_vec()
    }

    #[test]
    fn renders_hello_entry() {
        let entry = LexicalEntry {
            word: "hello".to_owned(),
            phonetic: None,
            phonetics: vec![Phonetic {
                text: Some("/həˈloʊ/".to_owned()),
                audio: Some("a.mp3".to_owned()),
            }],
            origin: None,
            meanings: vec![Meaning {
                part_of_speech: "exclamation".to_owned(),
                definitions: vec![Definition {
                    definition: "A greeting.".to_owned(),
                    example: Some("Hello there!".to_owned()),
                    synonyms: Vec::new(),
                    antonyms: Vec::new(),
                }],
                synonyms: Vec::new(),
                antonyms: Vec::new(),
            }],
        };
        let nodes = rendered(&entry, &WidgetConfig::default());
        assert_eq!(
            nodes,
            vec![
                Node::Heading {
                    level: 3,
                    text: "hello".to_owned()
                },
                Node::Paragraph("Pronunciation: /həˈloʊ/".to_owned()),
                Node::Audio {
                    src: "a.mp3".to_owned()
                },
                Node::Heading {
                    level: 4,
                    text: "Part of Speech: exclamation".to_owned()
                },
                Node::Definition(DefinitionBlock {
                    definition: "A greeting.".to_owned(),
                    example: Some("Hello there!".to_owned()),
                    synonyms: Vec::new(),
                    antonyms: Vec::new(),
                }),
            ]
        );
        let Node::Definition(block) = &nodes[4] else {
            panic!("expected a definition block");
        };
        assert_eq!(
            block.lines(),
            vec!["Definition: A greeting.", "Example: Hello there!"]
        );
    }

    #[test]
    fn one_block_per_definition_in_order() {
        let entry = entry(
            Vec::new(),
            vec![
                meaning("verb", &["Move fast.", "Manage.", "Flow."]),
                meaning("noun", &["An act of running."]),
                meaning("adjective", &[]),
            ],
        );
        let nodes = rendered(&entry, &WidgetConfig::default());
        let headings: Vec<&str> = nodes
            .iter()
            .filter_map(|node| match node {
                Node::Heading { level: 4, text } => Some(text.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(
            headings,
            vec![
                "Part of Speech: verb",
                "Part of Speech: noun",
                "Part of Speech: adjective"
            ]
        );
        let definitions: Vec<&str> = nodes
            .iter()
            .filter_map(|node| match node {
                Node::Definition(block) => Some(block.definition.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(
            definitions,
            vec!["Move fast.", "Manage.", "Flow.", "An act of running."]
        );
    }

    #[test]
    fn no_pronunciation_without_text() {
        let entry = entry(
            vec![
                Phonetic {
                    text: None,
                    audio: None,
                },
                Phonetic {
                    text: Some(String::new()),
                    audio: None,
                },
            ],
            Vec::new(),
        );
        let nodes = rendered(&entry, &WidgetConfig::default());
        assert_eq!(
            nodes,
            vec![Node::Heading {
                level: 3,
                text: "run".to_owned()
            }]
        );
    }

    #[test]
    fn audio_from_later_phonetic() {
        let entry = entry(
            vec![
                Phonetic {
                    text: Some("/ɹʌn/".to_owned()),
                    audio: Some(String::new()),
                },
                Phonetic {
                    text: None,
                    audio: Some("https://audio/run-us.mp3".to_owned()),
                },
                Phonetic {
                    text: None,
                    audio: Some("https://audio/run-uk.mp3".to_owned()),
                },
            ],
            Vec::new(),
        );
        let nodes = rendered(&entry, &WidgetConfig::default());
        let audio: Vec<&Node> = nodes
            .iter()
            .filter(|node| matches!(node, Node::Audio { .. } | Node::PlayButton { .. }))
            .collect();
        assert_eq!(
            audio,
            vec![&Node::Audio {
                src: "https://audio/run-us.mp3".to_owned()
            }]
        );
        assert!(nodes.contains(&Node::Paragraph("Pronunciation: /ɹʌn/".to_owned())));
    }

    #[test]
    fn play_button_when_configured() {
        let entry = entry(
            vec![Phonetic {
                text: None,
                audio: Some("run.mp3".to_owned()),
            }],
            Vec::new(),
        );
        let config = WidgetConfig {
            audio: AudioTrigger::Button,
            ..WidgetConfig::default()
        };
        assert_eq!(
            rendered(&entry, &config)[1],
            Node::PlayButton {
                src: "run.mp3".to_owned()
            }
        );
    }

    #[test]
    fn meaning_level_lists_follow_definitions() {
        let mut verb = meaning("verb", &["Move fast."]);
        verb.synonyms = vec!["sprint".to_owned(), "dash".to_owned()];
        verb.antonyms = vec!["walk".to_owned()];
        verb.definitions[0].synonyms = vec!["jog".to_owned()];
        let mut entry = entry(Vec::new(), vec![verb]);
        entry.origin = Some("Old English rinnan".to_owned());

        let nodes = rendered(&entry, &WidgetConfig::default());
        assert_eq!(
            &nodes[2..],
            &[
                Node::Definition(DefinitionBlock {
                    definition: "Move fast.".to_owned(),
                    example: None,
                    synonyms: vec!["jog".to_owned()],
                    antonyms: Vec::new(),
                }),
                Node::Paragraph("Synonyms: sprint, dash".to_owned()),
                Node::Paragraph("Antonyms: walk".to_owned()),
                Node::Paragraph("Origin: Old English rinnan".to_owned()),
            ]
        );

        let config = WidgetConfig {
            meaning_synonyms: false,
            ..WidgetConfig::default()
        };
        let nodes = rendered(&entry, &config);
        assert!(!nodes.contains(&Node::Paragraph("Synonyms: sprint, dash".to_owned())));
        assert_eq!(nodes.len(), 4);
    }

    #[test]
    fn empty_example_is_dropped() {
        let mut noun = meaning("noun", &["A race."]);
        noun.definitions[0].example = Some(String::new());
        let nodes = rendered(&entry(Vec::new(), vec![noun]), &WidgetConfig::default());
        let Node::Definition(block) = &nodes[2] else {
            panic!("expected a definition block");
        };
        assert_eq!(block.example, None);
    }
}
