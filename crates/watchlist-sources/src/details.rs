use serde::{Deserialize, Serialize};
use watchlist_models::OutputEntry;

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct MainPicture {
    #[serde(default)]
    pub medium: Option<String>,
    #[serde(default)]
    pub large: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AlternativeTitles {
    #[serde(default)]
    pub en: Option<String>,
    #[serde(default)]
    pub ja: Option<String>,
    #[serde(default)]
    pub synonyms: Vec<String>,
}

/// Anime record as returned by `/anime/{id}?fields=title,main_picture,alternative_titles`.
///
/// `title` is required; a record without it is treated as malformed. Pictures and
/// alternative titles are optional on the catalog side and map to empty strings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AnimeDetails {
    #[serde(default)]
    pub id: Option<u64>,
    pub title: String,
    #[serde(default)]
    pub main_picture: Option<MainPicture>,
    #[serde(default)]
    pub alternative_titles: Option<AlternativeTitles>,
}

impl AnimeDetails {
    /// Build the enriched entry. The catalog's primary `title` is the romanized
    /// Japanese name on MAL, so it becomes `name_jp`; the English alternative title
    /// becomes `name_en`. `link` is left empty for the caller.
    pub fn into_entry(self, mal_id: u64) -> OutputEntry {
        OutputEntry {
            name_en: self.alternative_titles.and_then(|t| t.en).unwrap_or_default(),
            name_jp: self.title,
            mal_id,
            link: String::new(),
            image_url: self.main_picture.and_then(|p| p.medium).unwrap_or_default(),
        }
    }
}
