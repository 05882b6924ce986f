/// Exchange name recorded for reference rows which carry no `EXCHANGE:` prefix.
pub const UNKNOWN_EXCHANGE: &str = "UNKNOWN";

/// Location of the reference file relative to the working directory.
pub const DEFAULT_REFERENCE_FILE_PATH: &str = "data/stock_symbols.csv";

/// Free-text company names and the symbol each one maps to.
///
/// Order matters: name resolution returns the first alias listed for a symbol, so the
/// formal name of a company precedes its short forms.
pub const COMPANY_ALIASES: &[(&str, &str)] = &[
    ("Apple Inc.", "AAPL"),
    ("Apple", "AAPL"),
    ("Microsoft Corporation", "MSFT"),
    ("Microsoft", "MSFT"),
    ("Alphabet Inc.", "GOOGL"),
    ("Alphabet", "GOOGL"),
    ("Google", "GOOGL"),
    ("Amazon.com", "AMZN"),
    ("Amazon", "AMZN"),
    ("Meta Platforms", "META"),
    ("Facebook", "META"),
    ("Tesla, Inc.", "TSLA"),
    ("Tesla", "TSLA"),
    ("NVIDIA Corporation", "NVDA"),
    ("Nvidia", "NVDA"),
    ("Netflix", "NFLX"),
    ("Advanced Micro Devices", "AMD"),
    ("Intel Corporation", "INTC"),
    ("Intel", "INTC"),
    ("Oracle", "ORCL"),
    ("Salesforce", "CRM"),
    ("Adobe", "ADBE"),
    ("PayPal", "PYPL"),
    ("Uber Technologies", "UBER"),
    ("Alibaba", "BABA"),
    ("Taiwan Semiconductor", "TSM"),
    ("TSMC", "TSM"),
    ("Broadcom", "AVGO"),
    ("Qualcomm", "QCOM"),
    ("Palantir", "PLTR"),
    ("JPMorgan Chase", "JPM"),
    ("JPMorgan", "JPM"),
    ("Bank of America", "BAC"),
    ("Wells Fargo", "WFC"),
    ("Goldman Sachs", "GS"),
    ("Berkshire Hathaway", "BRK"),
    ("Walmart", "WMT"),
    ("Costco", "COST"),
    ("Nike", "NKE"),
    ("Starbucks", "SBUX"),
    ("Walt Disney", "DIS"),
    ("Disney", "DIS"),
    ("Coca-Cola", "KO"),
    ("Pfizer", "PFE"),
    ("Moderna", "MRNA"),
    ("Johnson & Johnson", "JNJ"),
    ("Exxon Mobil", "XOM"),
    ("ExxonMobil", "XOM"),
    ("Chevron", "CVX"),
    ("Boeing", "BA"),
    ("Ford Motor", "F"),
    ("General Motors", "GM"),
    ("Coinbase", "COIN"),
    ("Shopify", "SHOP"),
    ("Snowflake", "SNOW"),
    ("PTT Public Company", "PTT"),
    ("ปตท.", "PTT"),
    ("Kasikornbank", "KBANK"),
    ("กสิกรไทย", "KBANK"),
    ("Siam Commercial Bank", "SCB"),
    ("ไทยพาณิชย์", "SCB"),
    ("Airports of Thailand", "AOT"),
    ("ท่าอากาศยานไทย", "AOT"),
    ("CP All", "CPALL"),
    ("ซีพี ออลล์", "CPALL"),
    ("Delta Electronics", "DELTA"),
];

/// Tickers trusted to match as a bare word, in any case, without a reference table entry.
///
/// Every entry must stay clear of ordinary English words since the match is case-insensitive.
pub const POPULAR_SYMBOLS: &[&str] = &[
    "AAPL", "MSFT", "GOOGL", "GOOG", "AMZN", "META", "TSLA", "NVDA", "NFLX", "AMD", "INTC", "ORCL",
    "CRM", "ADBE", "PYPL", "UBER", "BABA", "TSM", "AVGO", "QCOM", "ASML", "PLTR", "JPM", "BAC",
    "WFC", "NKE", "SBUX", "PFE", "MRNA", "JNJ", "XOM", "CVX", "WMT", "QQQ", "PTT", "KBANK",
    "CPALL", "AOT", "SCB",
];

/// Uppercase words which are never treated as tickers by the bare-word heuristic, even when the
/// reference table happens to list them.
pub const COMMON_WORD_BLOCK_LIST: &[&str] = &[
    // Two letters
    "A", "AI", "AM", "AN", "AS", "AT", "BE", "BY", "DO", "EU", "GO", "HE", "IF", "IN", "IS", "IT",
    "ME", "MY", "NO", "OF", "OK", "ON", "OR", "SO", "TO", "TV", "UK", "UP", "US", "WE",
    // Three letters
    "ALL", "AND", "ANY", "ARE", "BUT", "BUY", "CAN", "CEO", "CFO", "CTO", "DAY", "DID", "ETF",
    "EPS", "FED", "FOR", "GDP", "GET", "HAS", "HER", "HIM", "HIS", "HOW", "IPO", "ITS", "LET",
    "LOW", "MAN", "NEW", "NOT", "NOW", "OLD", "ONE", "OUR", "OUT", "PUT", "SAY", "SEC", "SEE",
    "SET", "MAI", "SHE", "THE", "TOO", "TWO", "USA", "USD", "THB", "USE", "WAS", "WAY", "WHO",
    "WHY", "YOU", "YOY", "QOQ",
    // Four letters
    "ALSO", "BEEN", "DOWN", "EACH", "FROM", "HAVE", "HIGH", "HOLD", "INTO", "JUST", "LIKE", "MORE",
    "MOST", "NEWS", "NYSE", "OVER", "RATE", "RISE", "SELL", "SOME", "THAN", "THAT", "THEM", "THEN",
    "THEY", "THIS", "WERE", "WHAT", "WHEN", "WILL", "WITH", "YEAR",
    // Five letters
    "ABOUT", "AFTER", "BANKS", "INDEX", "OTHER", "PRICE", "SHARE", "STOCK", "THEIR", "THERE",
    "THESE", "TRADE", "WHICH", "WORLD",
];
