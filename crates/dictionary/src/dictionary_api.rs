// https://dictionaryapi.dev/ - free dictionary api, no key, english entries only

use reqwest::Url;
use serde::{Deserialize, Deserializer};
use tracing::debug;

use crate::{Definition, DictionaryError, LexicalEntry, Meaning, Phonetic};

pub const DICTIONARY_API_URL: &str = "https://api.dictionaryapi.dev/api/v2/entries/en";

#[derive(Debug, Deserialize)]
struct ApiEntry {
    word: String,
    #[serde(default)]
    phonetic: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    phonetics: Vec<ApiPhonetic>,
    #[serde(default)]
    origin: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    meanings: Vec<ApiMeaning>,
}

#[derive(Debug, Deserialize)]
struct ApiPhonetic {
    #[serde(default)]
    text: Option<String>,
    #[serde(default)]
    audio: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ApiMeaning {
    #[serde(default, deserialize_with = "null_as_default")]
    part_of_speech: String,
    #[serde(default, deserialize_with = "null_as_default")]
    definitions: Vec<ApiDefinition>,
    #[serde(default, deserialize_with = "null_as_default")]
    synonyms: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    antonyms: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct ApiDefinition {
    definition: String,
    #[serde(default)]
    example: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    synonyms: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    antonyms: Vec<String>,
}

/// Treats an explicit `null` the same as a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Body the api sends along with a 404.
#[derive(Debug, Deserialize)]
struct ApiNotFound {
    #[serde(default)]
    title: String,
    #[serde(default)]
    message: String,
}

impl From<ApiEntry> for LexicalEntry {
    fn from(entry: ApiEntry) -> Self {
        Self {
            word: entry.word,
            phonetic: entry.phonetic,
            phonetics: entry
                .phonetics
                .into_iter()
                .map(|phonetic| Phonetic {
                    text: phonetic.text,
                    audio: phonetic.audio,
                })
                .collect(),
            origin: entry.origin,
            meanings: entry.meanings.into_iter().map(Meaning::from).collect(),
        }
    }
}

impl From<ApiMeaning> for Meaning {
    fn from(meaning: ApiMeaning) -> Self {
        Self {
            part_of_speech: meaning.part_of_speech,
            definitions: meaning
                .definitions
                .into_iter()
                .map(|definition| Definition {
                    definition: definition.definition,
                    example: definition.example,
                    synonyms: definition.synonyms,
                    antonyms: definition.antonyms,
                })
                .collect(),
            synonyms: meaning.synonyms,
            antonyms: meaning.antonyms,
        }
    }
}

/// Builds `{base_url}/{word}` with the word as a single percent-encoded path segment.
///
/// `.` and `..` are dot segments in any spelling (`%2E` included) and would be
/// resolved away, so they can never name an entry.
pub(crate) fn entry_url(base_url: &str, word: &str) -> Result<Url, DictionaryError> {
    if word == "." || word == ".." {
        return Err(DictionaryError::NotFound {
            word: word.to_owned(),
        });
    }
    let invalid = || DictionaryError::InvalidUrl(base_url.to_owned());
    let mut url = Url::parse(base_url).map_err(|_| invalid())?;
    url.path_segments_mut()
        .map_err(|_| invalid())?
        .pop_if_empty()
        .push(word);
    Ok(url)
}

pub(crate) async fn get_entry(
    client: &reqwest::Client,
    base_url: &str,
    word: &str,
) -> Result<LexicalEntry, DictionaryError> {
    let url = entry_url(base_url, word)?;
    debug!(%url, "requesting dictionary entry");
    let res: reqwest::Response = client.get(url).send().await.map_err(DictionaryError::Fetch)?;
    let status = res.status();
    if !status.is_success() {
        let reason = res
            .bytes()
            .await
            .ok()
            .and_then(|body| serde_json::from_slice::<ApiNotFound>(&body).ok());
        if let Some(reason) = reason {
            debug!(%status, title = %reason.title, message = %reason.message, "dictionary rejected lookup");
        }
        return Err(DictionaryError::Status(status));
    }
    let body = res.bytes().await.map_err(DictionaryError::Fetch)?;
    parse_entry(word, &body)
}

/// Parses a response body and keeps the first entry.
pub(crate) fn parse_entry(word: &str, body: &[u8]) -> Result<LexicalEntry, DictionaryError> {
    let entries: Vec<ApiEntry> = serde_json::from_slice(body)?;
    debug!(word, entries = entries.len(), "parsed dictionary response");
    entries
        .into_iter()
        .next()
        .map(LexicalEntry::from)
        .ok_or_else(|| DictionaryError::NotFound {
            word: word.to_owned(),
        })
}
