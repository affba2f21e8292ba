//! Knowledge-base artifact: header, generation time and chunks separated by `###`.

use chrono::{Local, NaiveDateTime};
use std::fs;
use std::path::Path;

use crate::error::{Error, Result};
use crate::rendering::Chunk;

pub const HEADER: &str = "БАЗА ЗНАНИЙ RDF";
pub const TIMESTAMP_PREFIX: &str = "Дата создания: ";
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
pub const CHUNK_SEPARATOR: &str = "\n\n###\n\n";
const BANNER_WIDTH: usize = 50;

/// A parsed artifact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub generated_at: NaiveDateTime,
    pub chunks: Vec<String>,
}

/// Full artifact text for `chunks`, stamped with `generated_at`.
pub fn render_artifact(chunks: &[Chunk], generated_at: NaiveDateTime) -> String {
    let body: Vec<&str> = chunks.iter().map(Chunk::text).collect();
    format!(
        "{}\n{}{}\n{}\n\n{}",
        HEADER,
        TIMESTAMP_PREFIX,
        generated_at.format(TIMESTAMP_FORMAT),
        "=".repeat(BANNER_WIDTH),
        body.join(CHUNK_SEPARATOR)
    )
}

/// Write the artifact to `path`, replacing any previous content. Returns the byte count.
pub fn write_artifact(chunks: &[Chunk], path: impl AsRef<Path>) -> Result<usize> {
    write_artifact_at(chunks, path, Local::now().naive_local())
}

pub fn write_artifact_at(
    chunks: &[Chunk],
    path: impl AsRef<Path>,
    generated_at: NaiveDateTime,
) -> Result<usize> {
    let content = render_artifact(chunks, generated_at);
    fs::write(path.as_ref(), &content)?;
    Ok(content.len())
}

/// Split artifact text back into its timestamp and trimmed chunks.
pub fn parse_artifact(content: &str) -> Result<Artifact> {
    let mut parts = content.splitn(4, '\n');

    match parts.next() {
        Some(HEADER) => {}
        other => {
            return Err(Error::Artifact(format!(
                "expected header '{}', found {:?}",
                HEADER,
                other.unwrap_or_default()
            )))
        }
    }

    let stamp = parts
        .next()
        .and_then(|line| line.strip_prefix(TIMESTAMP_PREFIX))
        .ok_or_else(|| Error::Artifact("missing generation timestamp".to_string()))?;
    let generated_at = NaiveDateTime::parse_from_str(stamp, TIMESTAMP_FORMAT)
        .map_err(|e| Error::Artifact(format!("bad timestamp '{}': {}", stamp, e)))?;

    match parts.next() {
        Some(banner) if !banner.is_empty() && banner.chars().all(|c| c == '=') => {}
        _ => return Err(Error::Artifact("missing banner line".to_string())),
    }

    let body = parts.next().unwrap_or_default();
    let chunks = body
        .split(CHUNK_SEPARATOR)
        .map(str::trim)
        .filter(|chunk| !chunk.is_empty())
        .map(str::to_string)
        .collect();

    Ok(Artifact { generated_at, chunks })
}

pub fn read_artifact(path: impl AsRef<Path>) -> Result<Artifact> {
    let content = fs::read_to_string(path.as_ref())?;
    parse_artifact(&content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rendering::Section;
    use chrono::NaiveDate;

    fn stamp() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 5, 17).unwrap().and_hms_opt(9, 3, 7).unwrap()
    }

    fn chunk(text: &str) -> Chunk {
        Chunk { section: Section::Museum, subject: "Louvre".to_string(), text: text.to_string() }
    }

    #[test]
    fn test_render_layout() {
        let text = render_artifact(&[chunk("A\nB"), chunk("C")], stamp());
        let expected = format!(
            "БАЗА ЗНАНИЙ RDF\nДата создания: 2024-05-17 09:03:07\n{}\n\nA\nB\n\n###\n\nC",
            "=".repeat(50)
        );
        assert_eq!(text, expected);
    }

    #[test]
    fn test_render_without_chunks() {
        let text = render_artifact(&[], stamp());
        assert!(text.ends_with("=\n\n"));
        let parsed = parse_artifact(&text).unwrap();
        assert!(parsed.chunks.is_empty());
    }

    #[test]
    fn test_parse_restores_chunks_and_time() {
        let chunks = vec![chunk("МУЗЕЙ\n---\nНАЗВАНИЕ: Лувр"), chunk("ФИЛЬМ")];
        let parsed = parse_artifact(&render_artifact(&chunks, stamp())).unwrap();

        assert_eq!(parsed.generated_at, stamp());
        assert_eq!(parsed.chunks, vec!["МУЗЕЙ\n---\nНАЗВАНИЕ: Лувр", "ФИЛЬМ"]);
    }

    #[test]
    fn test_hashes_inside_a_chunk_survive() {
        let chunks = vec![chunk("ОПИСАНИЕ: тег ###важно### внутри"), chunk("C")];
        let parsed = parse_artifact(&render_artifact(&chunks, stamp())).unwrap();

        assert_eq!(parsed.chunks, vec!["ОПИСАНИЕ: тег ###важно### внутри", "C"]);
    }

    #[test]
    fn test_parse_rejects_foreign_text() {
        assert!(matches!(parse_artifact("hello"), Err(Error::Artifact(_))));
        assert!(matches!(
            parse_artifact("БАЗА ЗНАНИЙ RDF\nДата создания: вчера\n===\n\nx"),
            Err(Error::Artifact(_))
        ));
        assert!(matches!(
            parse_artifact("БАЗА ЗНАНИЙ RDF\nДата создания: 2024-05-17 09:03:07\nx\n\ny"),
            Err(Error::Artifact(_))
        ));
    }
}
