use news_symbol_sniffer::{load_default_detector, Article};

fn main() {
    env_logger::init();

    let (detector, diagnostics) = load_default_detector().unwrap();
    if diagnostics.is_degraded() {
        println!("Reference data unavailable: {:?}", diagnostics.source);
    }

    let articles = vec![
        Article::new().with_id(1).with_title("Berkshire Hathaway and Apple"),
        Article::new().with_id(2).with_title("$TSLA soars 10%"),
        Article::new().with_id(3).with_title("หุ้น PTT ปรับตัวขึ้น"),
    ];

    for article in &articles {
        println!(
            "{:?}: {:?}",
            article.display_headline(),
            detector.detect_symbols(article)
        );
    }

    println!("Trending:");
    for entry in detector.get_trending_symbols(&articles, 5) {
        println!("{} ({}): {}", entry.symbol, entry.name, entry.count);
    }
}
