use crate::de::null_as_empty;
use serde::{Deserialize, Serialize};

/// One user-authored watchlist row. `name` and `link` never come from the catalog.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct InputEntry {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub link: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
    pub mal_id: u64,
    #[serde(rename = "watchListType", default)]
    pub list_type: i32,
}

/// Raw watchlist as exported by the user, one list per watch status.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct WatchlistInput {
    #[serde(rename = "Watching", default)]
    pub watching: Vec<InputEntry>,
    #[serde(rename = "Completed", default)]
    pub completed: Vec<InputEntry>,
    #[serde(rename = "Plan to Watch", default)]
    pub plan_to_watch: Vec<InputEntry>,
    #[serde(rename = "Dropped", default)]
    pub dropped: Vec<InputEntry>,
}

impl WatchlistInput {
    pub fn total_entries(&self) -> usize {
        self.watching.len() + self.completed.len() + self.plan_to_watch.len() + self.dropped.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_raw_watchlist() {
        let raw = r#"{
            "Watching": [{"link": "https://myanimelist.net/anime/1", "name": "Cowboy Bebop", "mal_id": 1, "watchListType": 1}],
            "Completed": [],
            "Plan to Watch": [{"link": "https://myanimelist.net/anime/5", "name": "Bebop Movie", "mal_id": 5, "watchListType": 6}],
            "Dropped": []
        }"#;

        let input: WatchlistInput = serde_json::from_str(raw).unwrap();
        assert_eq!(input.watching.len(), 1);
        assert_eq!(input.watching[0].mal_id, 1);
        assert_eq!(input.watching[0].name, "Cowboy Bebop");
        assert_eq!(input.plan_to_watch[0].list_type, 6);
        assert_eq!(input.total_entries(), 2);
    }

    #[test]
    fn test_missing_sections_default_to_empty() {
        let input: WatchlistInput =
            serde_json::from_str(r#"{"Completed": [{"mal_id": 20}]}"#).unwrap();
        assert!(input.watching.is_empty());
        assert!(input.dropped.is_empty());
        assert_eq!(input.completed[0].link, "");
        assert_eq!(input.completed[0].mal_id, 20);
    }

    #[test]
    fn test_entry_without_id_is_rejected() {
        let result = serde_json::from_str::<WatchlistInput>(r#"{"Watching": [{"name": "x"}]}"#);
        assert!(result.is_err());
    }
}
