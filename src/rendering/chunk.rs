use serde::Serialize;
use std::fmt;

/// Width of the dash rule under every chunk title.
pub const RULE_WIDTH: usize = 40;

/// Kind of chunk, in output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Section {
    Artwork,
    HistoricalFigure,
    Film,
    Museum,
    ModernCharacter,
}

impl Section {
    pub fn name(self) -> &'static str {
        match self {
            Section::Artwork => "artwork",
            Section::HistoricalFigure => "historical figure",
            Section::Film => "film",
            Section::Museum => "museum",
            Section::ModernCharacter => "modern character",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One rendered text block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Chunk {
    pub section: Section,
    /// Subject label the chunk was rendered from
    pub subject: String,
    pub text: String,
}

impl Chunk {
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for Chunk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Line-oriented builder for chunk text.
#[derive(Debug)]
pub(crate) struct ChunkText {
    lines: Vec<String>,
}

impl ChunkText {
    pub fn titled(title: &str) -> Self {
        Self { lines: vec![title.to_string(), "-".repeat(RULE_WIDTH)] }
    }

    pub fn field(mut self, key: &str, value: &str) -> Self {
        self.lines.push(format!("{}: {}", key, value));
        self
    }

    /// Blank line, `heading:`, then one line per item. Empty lists are omitted.
    pub fn list(mut self, heading: &str, items: &[String]) -> Self {
        if !items.is_empty() {
            self.lines.push(String::new());
            self.lines.push(format!("{}:", heading));
            self.lines.extend(items.iter().cloned());
        }
        self
    }

    /// Like [`ChunkText::list`], with `- ` bullets.
    pub fn bullets(self, heading: &str, items: &[String]) -> Self {
        let bulleted: Vec<String> = items.iter().map(|item| format!("- {}", item)).collect();
        self.list(heading, &bulleted)
    }

    pub fn finish(self, section: Section, subject: &str) -> Chunk {
        Chunk { section, subject: subject.to_string(), text: self.lines.join("\n") }
    }
}
