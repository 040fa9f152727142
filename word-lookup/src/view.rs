use std::fmt::{self, Display, Formatter, Write};

/// A single element in the results region. Every string is plain text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Heading { level: u8, text: String },
    Paragraph(String),
    /// Inline audio player with controls.
    Audio { src: String },
    /// Button that plays `src` when pressed.
    PlayButton { src: String },
    Definition(DefinitionBlock),
    /// Error text shown in place of results.
    Notice(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefinitionBlock {
    pub definition: String,
    pub example: Option<String>,
    pub synonyms: Vec<String>,
    pub antonyms: Vec<String>,
}

impl DefinitionBlock {
    pub fn lines(&self) -> Vec<String> {
        let mut lines = vec![format!("Definition: {}", self.definition)];
        if let Some(example) = &self.example {
            lines.push(format!("Example: {example}"));
        }
        if !self.synonyms.is_empty() {
            lines.push(format!("Synonyms: {}", self.synonyms.join(", ")));
        }
        if !self.antonyms.is_empty() {
            lines.push(format!("Antonyms: {}", self.antonyms.join(", ")));
        }
        lines
    }
}

/// Writes text with control characters removed so api content can't drive the terminal.
struct Plain<'a>(&'a str);

impl Display for Plain<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for c in self.0.chars().filter(|c| !c.is_control()) {
            f.write_char(c)?;
        }
        Ok(())
    }
}

impl Display for Node {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Node::Heading { level, text } if *level <= 3 => write!(f, "{}", Plain(text)),
            Node::Heading { text, .. } => write!(f, "  {}", Plain(text)),
            Node::Paragraph(text) => write!(f, "  {}", Plain(text)),
            Node::Audio { src } => write!(f, "  [audio] {}", Plain(src)),
            Node::PlayButton { src } => write!(f, "  [play] {}", Plain(src)),
            Node::Definition(block) => {
                for (index, line) in block.lines().iter().enumerate() {
                    if index != 0 {
                        f.write_char('\n')?;
                    }
                    let bullet = if index == 0 { "-" } else { " " };
                    write!(f, "    {bullet} {}", Plain(line))?;
                }
                Ok(())
            }
            Node::Notice(text) => write!(f, "{}", Plain(text)),
        }
    }
}

/// Region that holds the nodes of the latest submission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Container {
    nodes: Vec<Node>,
}

impl Container {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, node: Node) {
        self.nodes.push(node);
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl Display for Container {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for node in &self.nodes {
            writeln!(f, "{node}")?;
        }
        Ok(())
    }
}

/// Error element with a show/hide toggle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorMessage {
    text: String,
    hidden: bool,
}

impl ErrorMessage {
    pub fn show(&mut self, message: impl Into<String>) {
        self.text = message.into();
        self.hidden = false;
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.hidden = true;
    }

    #[cfg(test)]
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_visible(&self) -> bool {
        !self.hidden
    }
}

impl Default for ErrorMessage {
    fn default() -> Self {
        Self {
            text: String::new(),
            hidden: true,
        }
    }
}

impl Display for ErrorMessage {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.is_visible() {
            write!(f, "{}", Plain(&self.text))?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputField {
    value: String,
}

impl InputField {
    pub fn set(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn clear(&mut self) {
        self.value.clear();
    }
}
