use std::future::Future;

use dictionary::{Dictionary, DictionaryError, LexicalEntry};
use tracing::{debug, warn};

use crate::config::{ErrorDisplay, InputClearing, WidgetConfig};
use crate::render::render;
use crate::view::{Container, ErrorMessage, InputField, Node};

pub const EMPTY_INPUT_MESSAGE: &str = "Please enter a word.";

/// Source of lexical entries for the widget.
pub trait Lookup {
    fn lookup(&self, word: &str) -> impl Future<Output = Result<LexicalEntry, DictionaryError>>;
}

impl Lookup for Dictionary {
    fn lookup(&self, word: &str) -> impl Future<Output = Result<LexicalEntry, DictionaryError>> {
        Dictionary::lookup(self, word)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Input was blank; nothing was looked up.
    Invalid,
    Rendered,
    Failed,
}

/// Form, results region and error element of the lookup widget.
#[derive(Debug)]
pub struct Widget<L> {
    lookup: L,
    config: WidgetConfig,
    input: InputField,
    results: Container,
    error: ErrorMessage,
}

impl<L: Lookup> Widget<L> {
    pub fn new(lookup: L, config: WidgetConfig) -> Self {
        Self {
            lookup,
            config,
            input: InputField::default(),
            results: Container::new(),
            error: ErrorMessage::default(),
        }
    }

    pub fn input_mut(&mut self) -> &mut InputField {
        &mut self.input
    }

    pub fn input(&self) -> &InputField {
        &self.input
    }

    pub fn results(&self) -> &Container {
        &self.results
    }

    pub fn error(&self) -> &ErrorMessage {
        &self.error
    }

    /// Handles a form submission. Errors are shown in the widget, never returned.
    pub async fn submit(&mut self) -> SubmitOutcome {
        let word = self.input.value().trim().to_owned();
        self.results.clear();
        self.error.clear();

        if word.is_empty() {
            self.display_error(EMPTY_INPUT_MESSAGE);
            return SubmitOutcome::Invalid;
        }

        let outcome = match self.lookup.lookup(&word).await {
            Ok(entry) => {
                debug!(word = %word, meanings = entry.meanings.len(), "rendering entry");
                render(&entry, &mut self.results, &self.config);
                SubmitOutcome::Rendered
            }
            Err(error) => {
                warn!(word = %word, %error, "lookup failed");
                self.display_error(error.user_message());
                SubmitOutcome::Failed
            }
        };

        match (self.config.clear_input, outcome) {
            (InputClearing::Always, _) | (InputClearing::OnSuccess, SubmitOutcome::Rendered) => {
                self.input.clear()
            }
            _ => {}
        }
        outcome
    }

    fn display_error(&mut self, message: &str) {
        match self.config.errors {
            ErrorDisplay::Banner => self.error.show(message),
            ErrorDisplay::Inline => self.results.append(Node::Notice(message.to_owned())),
        }
    }
}
