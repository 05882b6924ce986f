use news_symbol_sniffer::{
    Article, ArticleId, StockReferenceTable, SummaryArticle, SymbolDetector, TrendingEntry,
};
use test_utils::constants::TEST_SYMBOLS_CSV_FILE_PATH;

fn load_test_detector() -> SymbolDetector {
    let (reference_table, _) = StockReferenceTable::load_from_path(&*TEST_SYMBOLS_CSV_FILE_PATH);

    SymbolDetector::new(reference_table).expect("Failed to build detector")
}

fn sample_articles() -> Vec<Article> {
    vec![
        Article::new()
            .with_id(1)
            .with_headline("Apple and Microsoft rally")
            .with_datetime(100),
        Article::new()
            .with_id(2)
            .with_title("$MSFT cloud revenue jumps")
            .with_datetime(200),
        Article::new()
            .with_id("set-3")
            .with_headline("กสิกรไทย posts record profit")
            .with_datetime(300),
        Article::new()
            .with_id(4)
            .with_headline("Netflix subscriber growth slows"),
        Article::new()
            .with_id(5)
            .with_headline("Markets were quiet on Friday"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_end_to_end_scenario() {
        let (reference_table, _) =
            StockReferenceTable::from_csv_str("symbol,logo\nNASDAQ:AAPL,\n");

        let detector = SymbolDetector::builder()
            .reference_table(reference_table)
            .company_aliases([("Apple", "AAPL")])
            .popular_symbols(["TSLA"])
            .build()
            .expect("Failed to build detector");

        let articles = vec![
            Article::new().with_id(1).with_title("Apple hits new high"),
            Article::new().with_id(2).with_title("$TSLA soars 10%"),
            Article::new().with_id(3).with_title("THE market was quiet"),
        ];

        let detected: Vec<Vec<String>> = detector
            .detect_symbols_for_articles(&articles)
            .into_iter()
            .map(|article| article.symbols)
            .collect();

        assert_eq!(
            detected,
            vec![vec!["AAPL".to_string()], vec!["TSLA".to_string()], vec![]]
        );

        assert_eq!(
            detector.get_trending_symbols(&articles, 2),
            vec![
                TrendingEntry {
                    symbol: "AAPL".to_string(),
                    count: 1,
                    name: "NASDAQ:AAPL".to_string(),
                },
                TrendingEntry {
                    symbol: "TSLA".to_string(),
                    count: 1,
                    name: "TSLA".to_string(),
                },
            ]
        );
    }

    #[test]
    fn test_filter_returns_exact_matching_subset() {
        let detector = load_test_detector();
        let articles = sample_articles();

        let filtered = detector.filter_articles_by_symbol(&articles, "msft");

        let ids: Vec<Option<ArticleId>> =
            filtered.iter().map(|article| article.id.clone()).collect();
        assert_eq!(ids, vec![Some(ArticleId::from(1)), Some(ArticleId::from(2))]);

        for article in &articles {
            let mentions = detector
                .detect_symbols(article)
                .contains(&"MSFT".to_string());
            let kept = filtered.iter().any(|kept| *kept == article);
            assert_eq!(mentions, kept);
        }
    }

    #[test]
    fn test_filter_with_unknown_or_blank_symbol() {
        let detector = load_test_detector();
        let articles = sample_articles();

        assert!(detector
            .filter_articles_by_symbol(&articles, "ZZZZ")
            .is_empty());
        assert!(detector.filter_articles_by_symbol(&articles, "  ").is_empty());
        assert!(detector.filter_articles_by_symbol(&[], "AAPL").is_empty());
    }

    #[test]
    fn test_trending_counts_articles_not_mentions() {
        let detector = load_test_detector();
        let articles = vec![
            Article::new().with_title("$NVDA NVDA Nvidia (NVDA)"),
            Article::new().with_title("Nvidia and AMD"),
            Article::new().with_title("AMD outlook"),
            Article::new().with_title("IBM beats"),
        ];

        let trending = detector.get_trending_symbols(&articles, 10);

        let ranked: Vec<(&str, usize)> = trending
            .iter()
            .map(|entry| (entry.symbol.as_str(), entry.count))
            .collect();

        // NVDA and AMD tie; NVDA was detected first
        assert_eq!(ranked, vec![("NVDA", 2), ("AMD", 2), ("IBM", 1)]);
        assert_eq!(trending[0].name, "NASDAQ:NVDA");
    }

    #[test]
    fn test_trending_limit() {
        let detector = load_test_detector();
        let articles = sample_articles();

        assert_eq!(detector.get_trending_symbols(&articles, 1).len(), 1);
        assert_eq!(detector.get_trending_symbols(&articles, 1)[0].symbol, "MSFT");
        assert!(detector.get_trending_symbols(&articles, 0).is_empty());
        assert_eq!(detector.get_trending_symbols(&articles, 100).len(), 4);
    }

    #[test]
    fn test_trending_monotonicity() {
        let detector = load_test_detector();
        let mut articles = sample_articles();

        let count_of = |articles: &[Article], symbol: &str| {
            detector
                .get_trending_symbols(articles, usize::MAX)
                .into_iter()
                .find(|entry| entry.symbol == symbol)
                .map_or(0, |entry| entry.count)
        };

        let before = count_of(&articles, "AAPL");
        articles.push(Article::new().with_headline("Apple unveils new chip"));
        let after = count_of(&articles, "AAPL");

        assert_eq!(after, before + 1);
    }

    #[test]
    fn test_count_symbol_mentions() {
        let detector = load_test_detector();

        let counts = detector.count_symbol_mentions(&sample_articles());

        assert_eq!(counts.get("MSFT"), Some(&2));
        assert_eq!(counts.get("AAPL"), Some(&1));
        assert_eq!(counts.get("IBM"), None);
    }

    #[test]
    fn test_generate_symbol_summary() {
        let detector = load_test_detector();
        let articles = sample_articles();

        let summaries = detector.generate_symbol_summary(&articles);

        let order: Vec<&str> = summaries
            .iter()
            .map(|summary| summary.symbol.as_str())
            .collect();
        assert_eq!(order, vec!["MSFT", "AAPL", "KBANK", "NFLX"]);

        let msft = &summaries[0];
        assert_eq!(msft.mention_count, 2);
        assert_eq!(msft.name, "NASDAQ:MSFT");
        assert_eq!(msft.exchange, "NASDAQ");
        assert_eq!(
            msft.logo_url.as_deref(),
            Some("https://s3-symbol-logo.tradingview.com/microsoft.svg")
        );
        assert_eq!(
            msft.articles,
            vec![
                SummaryArticle {
                    id: Some(ArticleId::from(1)),
                    headline: "Apple and Microsoft rally".to_string(),
                    datetime: Some(100),
                },
                SummaryArticle {
                    id: Some(ArticleId::from(2)),
                    headline: "$MSFT cloud revenue jumps".to_string(),
                    datetime: Some(200),
                },
            ]
        );

        let kbank = &summaries[2];
        assert_eq!(kbank.exchange, "SET");
        assert_eq!(kbank.logo_url, None);
        assert_eq!(kbank.articles[0].id, Some(ArticleId::from("set-3")));

        // Not in the reference table
        let nflx = &summaries[3];
        assert_eq!(nflx.name, "Netflix");
        assert_eq!(nflx.exchange, "UNKNOWN");
        assert_eq!(nflx.logo_url, None);
        assert_eq!(nflx.articles[0].datetime, None);
    }

    #[test]
    fn test_summary_covers_every_detected_symbol_once() {
        let detector = load_test_detector();
        let articles = sample_articles();

        let summaries = detector.generate_symbol_summary(&articles);

        for summary in &summaries {
            let expected_count = articles
                .iter()
                .filter(|article| detector.detect_symbols(article).contains(&summary.symbol))
                .count();

            assert_eq!(summary.mention_count, expected_count);
            assert_eq!(summary.articles.len(), expected_count);
            assert_eq!(
                summaries
                    .iter()
                    .filter(|other| other.symbol == summary.symbol)
                    .count(),
                1
            );
        }

        for article in &articles {
            for symbol in detector.detect_symbols(article) {
                assert!(summaries.iter().any(|summary| summary.symbol == symbol));
            }
        }
    }

    #[test]
    fn test_summary_names_match_trending_names() {
        let detector = load_test_detector();
        let articles = sample_articles();

        let trending = detector.get_trending_symbols(&articles, usize::MAX);

        for summary in detector.generate_symbol_summary(&articles) {
            let entry = trending
                .iter()
                .find(|entry| entry.symbol == summary.symbol)
                .unwrap();

            assert_eq!(summary.name, entry.name);
        }
    }

    #[test]
    fn test_empty_batch() {
        let detector = load_test_detector();

        assert!(detector.detect_symbols_for_articles(&[]).is_empty());
        assert!(detector.get_trending_symbols(&[], 10).is_empty());
        assert!(detector.generate_symbol_summary(&[]).is_empty());
    }
}
