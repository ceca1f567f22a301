use async_trait::async_trait;
use std::collections::HashMap;
use std::io;
use std::sync::{Arc, Mutex};
use tracing_subscriber::fmt::MakeWriter;
use watchlist_models::{InputEntry, OutputEntry};
use watchlist_sources::details::{AlternativeTitles, MainPicture};
use watchlist_sources::{AnimeDetails, CatalogSource, SourceError};

pub fn input_entry(mal_id: u64, name: &str) -> InputEntry {
    InputEntry {
        link: format!("https://myanimelist.net/anime/{}", mal_id),
        name: name.to_string(),
        mal_id,
        list_type: 1,
    }
}

pub fn output_entry(mal_id: u64, name_jp: &str) -> OutputEntry {
    OutputEntry {
        name_en: format!("{} (EN)", name_jp),
        name_jp: name_jp.to_string(),
        mal_id,
        link: format!("https://old.example/{}", mal_id),
        image_url: format!("https://cdn.example/{}.jpg", mal_id),
    }
}

/// In-memory catalog. Ids without a record always fail; `failing` makes the first
/// N calls for an id fail before the record is served.
#[derive(Default)]
pub struct FakeCatalog {
    records: HashMap<u64, String>,
    failures: HashMap<u64, u32>,
    calls: Mutex<HashMap<u64, u32>>,
}

impl FakeCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_anime(mut self, mal_id: u64, title: &str) -> Self {
        self.records.insert(mal_id, title.to_string());
        self
    }

    pub fn failing(mut self, mal_id: u64, times: u32) -> Self {
        self.failures.insert(mal_id, times);
        self
    }

    pub fn calls_for(&self, mal_id: u64) -> u32 {
        self.calls.lock().unwrap().get(&mal_id).copied().unwrap_or(0)
    }

    pub fn total_calls(&self) -> u32 {
        self.calls.lock().unwrap().values().sum()
    }
}

#[async_trait]
impl CatalogSource for FakeCatalog {
    fn source_name(&self) -> &str {
        "fake"
    }

    async fn get_anime_details(&self, mal_id: u64) -> Result<AnimeDetails, SourceError> {
        let call = {
            let mut calls = self.calls.lock().unwrap();
            let count = calls.entry(mal_id).or_insert(0);
            *count += 1;
            *count
        };
        if call <= self.failures.get(&mal_id).copied().unwrap_or(0) {
            return Err(SourceError::new(format!("connection reset ({})", call)));
        }
        let title = self
            .records
            .get(&mal_id)
            .ok_or_else(|| SourceError::Status { mal_id, status: 404, body: "not_found".to_string() })?;
        Ok(AnimeDetails {
            id: Some(mal_id),
            title: title.clone(),
            main_picture: Some(MainPicture {
                medium: Some(format!("https://cdn.example/{}m.jpg", mal_id)),
                large: Some(format!("https://cdn.example/{}l.jpg", mal_id)),
            }),
            alternative_titles: Some(AlternativeTitles {
                en: Some(format!("{} (EN)", title)),
                ja: None,
                synonyms: Vec::new(),
            }),
        })
    }
}

/// Collects formatted log lines for assertions.
#[derive(Clone, Default)]
pub struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl LogBuffer {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for LogBuffer {
    type Writer = LogBuffer;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}
