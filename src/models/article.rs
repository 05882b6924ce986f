use crate::types::{TickerSymbol, UnixTimestamp};
use crate::Error;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::io::Read;

/// Identifier assigned by the upstream news source; some sources use numbers, others strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ArticleId {
    Number(serde_json::Number),
    Text(String),
}

impl From<i64> for ArticleId {
    fn from(id: i64) -> Self {
        ArticleId::Number(id.into())
    }
}

impl From<&str> for ArticleId {
    fn from(id: &str) -> Self {
        ArticleId::Text(id.to_string())
    }
}

impl From<String> for ArticleId {
    fn from(id: String) -> Self {
        ArticleId::Text(id)
    }
}

/// A news article as handed over by the news-fetching layer.
///
/// Only the fields used for detection and summaries are typed; anything else the upstream
/// source sent is kept in `extra` so it survives a round-trip to JSON.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Article {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ArticleId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub headline: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub datetime: Option<UnixTimestamp>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Article {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_id<I: Into<ArticleId>>(mut self, id: I) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_headline(mut self, headline: &str) -> Self {
        self.headline = Some(headline.to_string());
        self
    }

    pub fn with_title(mut self, title: &str) -> Self {
        self.title = Some(title.to_string());
        self
    }

    pub fn with_summary(mut self, summary: &str) -> Self {
        self.summary = Some(summary.to_string());
        self
    }

    pub fn with_datetime(mut self, datetime: UnixTimestamp) -> Self {
        self.datetime = Some(datetime);
        self
    }

    /// The text symbol detection runs over: headline, title and summary joined by spaces.
    /// Missing fields count as empty.
    pub fn detection_text(&self) -> String {
        [&self.headline, &self.title, &self.summary]
            .iter()
            .filter_map(|field| field.as_deref())
            .filter(|field| !field.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// The headline if present, otherwise the title, otherwise an empty string.
    pub fn display_headline(&self) -> &str {
        self.headline
            .as_deref()
            .or(self.title.as_deref())
            .unwrap_or("")
    }

    /// Parses a JSON array of articles.
    pub fn list_from_json_str(json: &str) -> Result<Vec<Article>, Error> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parses a JSON array of articles from a reader.
    pub fn list_from_reader<R: Read>(reader: R) -> Result<Vec<Article>, Error> {
        Ok(serde_json::from_reader(reader)?)
    }
}

/// An article with the symbols detected in it attached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArticleWithSymbols {
    #[serde(flatten)]
    pub article: Article,
    pub symbols: Vec<TickerSymbol>,
}

impl ArticleWithSymbols {
    pub fn new(mut article: Article, symbols: Vec<TickerSymbol>) -> Self {
        // A stale upstream `symbols` field would otherwise serialize twice
        article.extra.remove("symbols");

        ArticleWithSymbols { article, symbols }
    }
}
