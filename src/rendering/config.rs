use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Settings that tie the generic renderer to a particular dataset.
///
/// `Default` describes the seed knowledge graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// `name` of the person rendered as the historical figure
    pub historical_figure: String,
    /// `name`s of the persons rendered as modern characters
    pub modern_characters: Vec<String>,
    /// Display forms for raw names in cross-reference lists
    pub name_translations: BTreeMap<String, String>,
    /// Film title when the film has no `title` record
    pub default_film_title: String,
    /// Film year when the film has no `date` record
    pub default_film_year: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            historical_figure: "Леонардо да Винчи".to_string(),
            modern_characters: vec!["Боб".to_string(), "Алиса".to_string(), "Чарли".to_string()],
            name_translations: [("Alice", "Алиса"), ("Bob", "Боб"), ("Charlie", "Чарли")]
                .into_iter()
                .map(|(raw, display)| (raw.to_string(), display.to_string()))
                .collect(),
            default_film_title: "Leonardo".to_string(),
            default_film_year: "2023".to_string(),
        }
    }
}

impl RenderConfig {
    /// Display form of a raw name; unknown names pass through.
    pub fn translate<'a>(&'a self, name: &'a str) -> &'a str {
        self.name_translations.get(name).map_or(name, String::as_str)
    }

    pub fn is_modern_character(&self, name: &str) -> bool {
        self.modern_characters.iter().any(|candidate| candidate == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translate() {
        let config = RenderConfig::default();
        assert_eq!(config.translate("Alice"), "Алиса");
        assert_eq!(config.translate("Charlie"), "Чарли");
        assert_eq!(config.translate("Leonardo"), "Leonardo");
        assert_eq!(config.translate("Боб"), "Боб");
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config: RenderConfig =
            serde_json::from_str(r#"{"modern_characters": ["Ева"]}"#).unwrap();
        assert_eq!(config.modern_characters, vec!["Ева".to_string()]);
        assert_eq!(config.historical_figure, "Леонардо да Винчи");
        assert!(config.is_modern_character("Ева"));
        assert!(!config.is_modern_character("Боб"));
    }
}
