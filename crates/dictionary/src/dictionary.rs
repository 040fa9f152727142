/// One dictionary record for a word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexicalEntry {
    pub word: String,
    pub phonetic: Option<String>,
    pub phonetics: Vec<Phonetic>,
    pub origin: Option<String>,
    pub meanings: Vec<Meaning>,
}

impl LexicalEntry {
    /// First non-empty phonetic transcription, in sequence order.
    pub fn pronunciation(&self) -> Option<&str> {
        self.phonetics
            .iter()
            .filter_map(|phonetic| phonetic.text.as_deref())
            .find(|text| !text.is_empty())
    }

    /// First non-empty audio URL, in sequence order. It does not have to come
    /// from the same phonetic as [`LexicalEntry::pronunciation`].
    pub fn audio(&self) -> Option<&str> {
        self.phonetics
            .iter()
            .filter_map(|phonetic| phonetic.audio.as_deref())
            .find(|audio| !audio.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Phonetic {
    pub text: Option<String>,
    pub audio: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Meaning {
    pub part_of_speech: String,
    pub definitions: Vec<Definition>,
    pub synonyms: Vec<String>,
    pub antonyms: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Definition {
    pub definition: String,
    pub example: Option<String>,
    pub synonyms: Vec<String>,
    pub antonyms: Vec<String>,
}
