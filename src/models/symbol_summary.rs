use crate::models::ArticleId;
use crate::types::{ExchangeName, LogoUrl, TickerSymbol, UnixTimestamp};
use serde::Serialize;

/// The slice of an article listed under a symbol in a [`SymbolSummary`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryArticle {
    pub id: Option<ArticleId>,
    pub headline: String,
    pub datetime: Option<UnixTimestamp>,
}

/// Per-symbol rollup over a batch of articles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SymbolSummary {
    pub symbol: TickerSymbol,
    /// Resolved like [`TrendingEntry::name`](crate::TrendingEntry::name): reference `fullSymbol`,
    /// then the first company alias, then the symbol.
    pub name: String,
    pub exchange: ExchangeName,
    pub logo_url: Option<LogoUrl>,
    pub articles: Vec<SummaryArticle>,
    pub mention_count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_with_camel_case_keys() {
        let summary = SymbolSummary {
            symbol: "AAPL".to_string(),
            name: "NASDAQ:AAPL".to_string(),
            exchange: "NASDAQ".to_string(),
            logo_url: None,
            articles: vec![SummaryArticle {
                id: Some(ArticleId::from(1)),
                headline: "Apple hits new high".to_string(),
                datetime: Some(1700000000),
            }],
            mention_count: 1,
        };

        let value = serde_json::to_value(&summary).unwrap();

        assert_eq!(value["mentionCount"], 1);
        assert!(value["logoUrl"].is_null());
        assert_eq!(value["articles"][0]["headline"], "Apple hits new high");
    }
}
