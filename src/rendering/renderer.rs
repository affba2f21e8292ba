//! Renders grouped projected records into per-entity text chunks.
//!
//! Sections come out in a fixed order: the artwork, the historical figure,
//! the film, the museum, then one chunk per modern character. A section with
//! no matching subject is left out.

use crate::core::{EntityKind, ProjectedRecord};
use crate::pipeline::observer::{NoopObserver, PipelineObserver};

use super::chunk::{Chunk, ChunkText, Section};
use super::config::RenderConfig;
use super::subjects::{SkipReason, SubjectIndex};

#[derive(Debug, Clone, Default)]
pub struct ChunkRenderer {
    config: RenderConfig,
}

/// Subjects that other sections refer to.
struct Scene<'a, 'r> {
    index: &'r SubjectIndex<'a>,
    config: &'r RenderConfig,
    observer: &'r dyn PipelineObserver,
    painting: Option<&'a str>,
}

impl ChunkRenderer {
    pub fn new(config: RenderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    pub fn render(&self, records: &[ProjectedRecord]) -> Vec<Chunk> {
        self.render_observed(records, &NoopObserver)
    }

    pub fn render_observed(
        &self,
        records: &[ProjectedRecord],
        observer: &dyn PipelineObserver,
    ) -> Vec<Chunk> {
        let index = SubjectIndex::build(records);
        for (subject, reason) in index.skipped() {
            observer.on_subject_skipped(subject, reason);
        }

        let scene = Scene {
            index: &index,
            config: &self.config,
            observer,
            painting: index.first_of(EntityKind::Painting),
        };

        let mut chunks = Vec::new();
        chunks.extend(scene.painting.map(|subject| scene.artwork(subject)));
        chunks.extend(scene.historical_figure().map(|subject| scene.biography(subject)));
        chunks.extend(index.first_of(EntityKind::Movie).map(|subject| scene.film(subject)));
        chunks.extend(index.first_of(EntityKind::Museum).map(|subject| scene.museum(subject)));
        for subject in scene.modern_characters() {
            chunks.push(scene.modern_character(subject));
        }

        for chunk in &chunks {
            observer.on_chunk_rendered(chunk);
        }
        chunks
    }
}

/// Render `records` with the seed-dataset configuration.
pub fn render_chunks(records: &[ProjectedRecord]) -> Vec<Chunk> {
    ChunkRenderer::default().render(records)
}

impl<'a, 'r> Scene<'a, 'r> {
    fn value(&self, subject: &str, attribute: &str) -> &'a str {
        self.index.value(subject, attribute).unwrap_or_default()
    }

    /// Display name of a referenced subject, or of the raw label if it has no group.
    fn display_name(&self, label: &'a str) -> String {
        let name = self.index.name(label).unwrap_or(label);
        self.config.translate(name).to_string()
    }

    /// Title of a referenced subject, or the raw label.
    fn title_of(&self, label: &'a str) -> &'a str {
        self.index.value(label, "title").unwrap_or(label)
    }

    fn historical_figure(&self) -> Option<&'a str> {
        let wanted = self.config.historical_figure.as_str();
        self.index
            .of_kind(EntityKind::Person)
            .find(|subject| self.index.values(subject, "name").any(|name| name == wanted))
    }

    fn modern_characters(&self) -> Vec<&'a str> {
        self.index
            .of_kind(EntityKind::Person)
            .filter(|subject| {
                self.index
                    .values(subject, "name")
                    .any(|name| self.config.is_modern_character(name))
            })
            .collect()
    }

    /// Sorted display names of persons with an `attribute` record pointing at `target`.
    fn audience(&self, attribute: &str, target: &str) -> Vec<String> {
        let mut names = Vec::new();
        for person in self.index.of_kind(EntityKind::Person) {
            for record in self.index.records(person).iter().copied() {
                if record.attribute() != attribute || record.object != target {
                    continue;
                }
                match self.index.name(person) {
                    Some(name) => names.push(self.config.translate(name).to_string()),
                    None => self.observer.on_subject_skipped(person, &SkipReason::Unnamed),
                }
            }
        }
        names.sort();
        names
    }

    /// `<museum title>, <city>` for a museum subject, the raw value otherwise.
    fn place(&self, location: &'a str) -> String {
        if !self.index.contains(location) {
            return location.to_string();
        }
        let title = self.title_of(location);
        match self.index.value(location, "location") {
            Some(address) => {
                let city = address.split(',').next().unwrap_or(address).trim();
                format!("{}, {}", title, city)
            }
            None => title.to_string(),
        }
    }

    fn artwork(&self, subject: &'a str) -> Chunk {
        let title = self
            .index
            .value(subject, "title")
            .or_else(|| self.index.value(subject, "prefLabel"))
            .unwrap_or_default();
        let title = match self.index.value(subject, "altLabel") {
            Some(alt) => format!("{} ({})", title, alt),
            None => title.to_string(),
        };
        let author = self.index.value(subject, "creator").map(|c| self.display_name(c));
        let location = self.index.value(subject, "location").map(|l| self.place(l));

        ChunkText::titled("ПРОИЗВЕДЕНИЕ ИСКУССТВА")
            .field("НАЗВАНИЕ", &title)
            .field("АВТОР", author.as_deref().unwrap_or_default())
            .field("ПЕРИОД СОЗДАНИЯ", self.value(subject, "date"))
            .field("ИСТОРИЧЕСКАЯ ЭПОХА", self.value(subject, "period"))
            .field("ТЕХНИКА", self.value(subject, "technique"))
            .field("МАТЕРИАЛ", self.value(subject, "medium"))
            .field("РАЗМЕРЫ", self.value(subject, "dimensions"))
            .field("МЕСТОНАХОЖДЕНИЕ", location.as_deref().unwrap_or_default())
            .field("ОПИСАНИЕ", self.value(subject, "description"))
            .finish(Section::Artwork, subject)
    }

    fn biography(&self, subject: &'a str) -> Chunk {
        let life = life_span(
            self.index.value(subject, "birthDate"),
            self.index.value(subject, "deathDate"),
        );

        ChunkText::titled("ИСТОРИЧЕСКАЯ ЛИЧНОСТЬ")
            .field("ИМЯ", self.value(subject, "name"))
            .field("ГОДЫ ЖИЗНИ", &life)
            .field("МЕСТО РОЖДЕНИЯ", self.value(subject, "birthPlace"))
            .field("НАЦИОНАЛЬНОСТЬ", self.value(subject, "nationality"))
            .field("ПРОФЕССИЯ", self.value(subject, "profession"))
            .field("ОПИСАНИЕ", self.value(subject, "description"))
            .finish(Section::HistoricalFigure, subject)
    }

    fn film(&self, subject: &'a str) -> Chunk {
        let about = self.index.value(subject, "subject").and_then(|s| self.index.name(s));
        let heading = match about {
            Some(about) => format!("ФИЛЬМ О {}", about.to_uppercase()),
            None => "ФИЛЬМ".to_string(),
        };
        let title =
            self.index.value(subject, "title").unwrap_or(self.config.default_film_title.as_str());
        let year =
            self.index.value(subject, "date").unwrap_or(self.config.default_film_year.as_str());

        ChunkText::titled(&heading)
            .field("НАЗВАНИЕ", title)
            .field("ГОД ВЫПУСКА", year)
            .field("РЕЖИССЁР", self.value(subject, "director"))
            .field("В ГЛАВНОЙ РОЛИ", self.value(subject, "starring"))
            .field("ОПИСАНИЕ", self.value(subject, "description"))
            .bullets("ФИЛЬМ ПОСМОТРЕЛИ", &self.audience("hasWatched", subject))
            .finish(Section::Film, subject)
    }

    fn museum(&self, subject: &'a str) -> Chunk {
        ChunkText::titled("МУЗЕЙ")
            .field("НАЗВАНИЕ", self.value(subject, "title"))
            .field("МЕСТОПОЛОЖЕНИЕ", self.value(subject, "location"))
            .field("ГОД ОСНОВАНИЯ", self.value(subject, "founded"))
            .field("ОПИСАНИЕ", self.value(subject, "description"))
            .bullets("ПОСЕТИТЕЛИ МУЗЕЯ", &self.audience("hasVisited", subject))
            .finish(Section::Museum, subject)
    }

    fn modern_character(&self, subject: &'a str) -> Chunk {
        let mut activities = Vec::new();
        let mut relations = Vec::new();
        for record in self.index.records(subject).iter().copied() {
            let object = record.object.as_str();
            match record.attribute() {
                "topic_interest" if Some(object) == self.painting => activities
                    .push(format!("Интересуется картиной «{}»", self.title_of(object))),
                "hasWatched" => {
                    activities.push(format!("Смотрел(а) фильм «{}»", self.title_of(object)))
                }
                "hasVisited" => activities.push(format!("Посещал(а) {}", self.title_of(object))),
                "knows" => relations.push(format!("Знаком(а) с {}", self.display_name(object))),
                "collaboratesWith" => {
                    relations.push(format!("Сотрудничает с {}", self.display_name(object)))
                }
                "mentors" => relations
                    .push(format!("Является наставником для {}", self.display_name(object))),
                _ => {}
            }
        }
        activities.sort();
        relations.sort();

        ChunkText::titled("СОВРЕМЕННЫЙ ПЕРСОНАЖ")
            .field("ИМЯ", self.index.name(subject).unwrap_or_default())
            .field("ДАТА РОЖДЕНИЯ", self.value(subject, "birthDate"))
            .field("ПРОФЕССИЯ", self.value(subject, "occupation"))
            .field("ОБРАЗОВАНИЕ", self.value(subject, "education"))
            .field("ОПИСАНИЕ", self.value(subject, "description"))
            .list("ИНТЕРЕСЫ И АКТИВНОСТИ", &activities)
            .list("ОТНОШЕНИЯ", &relations)
            .finish(Section::ModernCharacter, subject)
    }
}

/// `YYYY-YYYY` from two ISO dates; a missing end leaves just the start year.
fn life_span(birth: Option<&str>, death: Option<&str>) -> String {
    let year = |date: &str| date.split('-').next().unwrap_or(date).to_string();
    match (birth, death) {
        (Some(b), Some(d)) => format!("{}-{}", year(b), year(d)),
        (Some(b), None) => year(b),
        (None, Some(d)) => format!("?-{}", year(d)),
        (None, None) => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::TYPE_PREDICATE_LABEL;

    fn person(subject: &str, name: &str) -> Vec<ProjectedRecord> {
        vec![
            ProjectedRecord::new(subject, TYPE_PREDICATE_LABEL, "Человек"),
            ProjectedRecord::new(subject, "name", name),
        ]
    }

    #[test]
    fn test_life_span() {
        assert_eq!(life_span(Some("1452-04-15"), Some("1519-05-02")), "1452-1519");
        assert_eq!(life_span(Some("1990-01-15"), None), "1990");
        assert_eq!(life_span(None, None), "");
    }

    #[test]
    fn test_empty_records_render_nothing() {
        assert!(render_chunks(&[]).is_empty());
    }

    #[test]
    fn test_untyped_subject_is_ignored() {
        let records = vec![ProjectedRecord::new("Bob", "name", "Боб")];
        assert!(render_chunks(&records).is_empty());
    }

    #[test]
    fn test_film_defaults_when_fields_missing() {
        let records = vec![ProjectedRecord::new("Film", TYPE_PREDICATE_LABEL, "Фильм")];
        let chunks = render_chunks(&records);

        assert_eq!(chunks.len(), 1);
        let text = &chunks[0].text;
        assert!(text.starts_with("ФИЛЬМ\n"));
        assert!(text.contains("НАЗВАНИЕ: Leonardo"));
        assert!(text.contains("ГОД ВЫПУСКА: 2023"));
        assert!(text.contains("РЕЖИССЁР: \n"));
        assert!(!text.contains("ФИЛЬМ ПОСМОТРЕЛИ"));
    }

    #[test]
    fn test_modern_character_without_activities() {
        let records = person("Eve", "Боб");
        let chunks = render_chunks(&records);

        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].section, Section::ModernCharacter);
        assert!(chunks[0].text.contains("ИМЯ: Боб"));
        assert!(chunks[0].text.contains("ДАТА РОЖДЕНИЯ: \n"));
        assert!(!chunks[0].text.contains("ИНТЕРЕСЫ"));
        assert!(!chunks[0].text.contains("ОТНОШЕНИЯ"));
    }

    #[test]
    fn test_unknown_person_is_not_a_modern_character() {
        let records = person("Eve", "Ева");
        assert!(render_chunks(&records).is_empty());

        let config = RenderConfig { modern_characters: vec!["Ева".to_string()], ..Default::default() };
        let chunks = ChunkRenderer::new(config).render(&records);
        assert_eq!(chunks.len(), 1);
    }

    #[test]
    fn test_any_name_record_selects_the_person() {
        let mut records = person("Bob", "Bobby");
        records.push(ProjectedRecord::new("Bob", "name", "Боб"));
        records.extend(person("Leo", "Leonardo"));
        records.push(ProjectedRecord::new("Leo", "name", "Леонардо да Винчи"));
        records.sort();

        let chunks = render_chunks(&records);
        let sections: Vec<Section> = chunks.iter().map(|chunk| chunk.section).collect();
        assert_eq!(sections, vec![Section::HistoricalFigure, Section::ModernCharacter]);
        assert_eq!(chunks[0].subject, "Leo");
        assert_eq!(chunks[1].subject, "Bob");
    }

    #[test]
    fn test_relations_use_translated_names() {
        let mut records = person("Bob", "Боб");
        records.push(ProjectedRecord::new("Bob", "knows", "Alice"));
        records.push(ProjectedRecord::new("Bob", "mentors", "Zed"));

        let chunks = render_chunks(&records);
        assert!(chunks[0].text.ends_with(
            "ОТНОШЕНИЯ:\nЗнаком(а) с Алиса\nЯвляется наставником для Zed"
        ));
    }

    #[test]
    fn test_interest_requires_the_painting() {
        let mut records = person("Bob", "Боб");
        records.push(ProjectedRecord::new("Bob", "topic_interest", "Sunflowers"));

        let chunks = render_chunks(&records);
        assert!(!chunks[0].text.contains("Интересуется"));
    }
}
