use std::time::Duration;

use clap::{Parser, ValueEnum};

/// How a pronunciation recording is offered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum AudioTrigger {
    /// Inline player with its own controls.
    #[default]
    Controls,
    /// A button that starts playback.
    Button,
}

/// Where lookup and validation errors are shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ErrorDisplay {
    /// Dedicated error element that is hidden while empty.
    #[default]
    Banner,
    /// Error text placed in the results container.
    Inline,
}

/// When the input field is emptied after a lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum InputClearing {
    #[default]
    Always,
    OnSuccess,
    Never,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetConfig {
    pub audio: AudioTrigger,
    pub errors: ErrorDisplay,
    pub clear_input: InputClearing,
    /// Render meaning-level synonyms and antonyms after the definitions.
    pub meaning_synonyms: bool,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            audio: AudioTrigger::default(),
            errors: ErrorDisplay::default(),
            clear_input: InputClearing::default(),
            meaning_synonyms: true,
        }
    }
}

#[derive(Debug, Parser)]
#[command(about = "Look words up in the free dictionary api")]
pub struct Args {
    /// How pronunciation audio is presented
    #[arg(long, value_enum, default_value_t = AudioTrigger::Controls)]
    pub audio: AudioTrigger,

    /// Where errors are shown
    #[arg(long, value_enum, default_value_t = ErrorDisplay::Banner)]
    pub errors: ErrorDisplay,

    /// When the input is cleared after a lookup; a kept value is shown in the prompt
    #[arg(long, value_enum, default_value_t = InputClearing::Always)]
    pub clear_input: InputClearing,

    /// Skip meaning-level synonyms and antonyms
    #[arg(long)]
    pub no_meaning_synonyms: bool,

    /// Base url that words are appended to
    #[arg(long)]
    pub api_url: Option<String>,

    /// Give up on a lookup after this many seconds
    #[arg(long)]
    pub timeout_secs: Option<u64>,
}

impl Args {
    pub fn widget_config(&self) -> WidgetConfig {
        WidgetConfig {
            audio: self.audio,
            errors: self.errors,
            clear_input: self.clear_input,
            meaning_synonyms: !self.no_meaning_synonyms,
        }
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_flags_match_default_config() {
        let args = Args::parse_from(["word-lookup"]);
        assert_eq!(args.widget_config(), WidgetConfig::default());
        assert_eq!(args.api_url, None);
        assert_eq!(args.timeout(), None);
    }

    #[test]
    fn flags_select_variants() {
        let args = Args::parse_from([
            "word-lookup",
            "--audio",
            "button",
            "--errors",
            "inline",
            "--clear-input",
            "on-success",
            "--no-meaning-synonyms",
            "--timeout-secs",
            "5",
        ]);
        let config = args.widget_config();
        assert_eq!(config.audio, AudioTrigger::Button);
        assert_eq!(config.errors, ErrorDisplay::Inline);
        assert_eq!(config.clear_input, InputClearing::OnSuccess);
        assert!(!config.meaning_synonyms);
        assert_eq!(args.timeout(), Some(Duration::from_secs(5)));
    }
}
