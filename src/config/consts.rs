// src/config/consts.rs

// Source page
pub const DEFAULT_URL: &str = "https://coinmarketcap.com/";
pub const ROW_SELECTOR: &str = "table tbody tr";
pub const DEFAULT_TOP_N: usize = 10;

// Browser session
pub const TIMEOUT_SECS: u64 = 20;
pub const SETTLE_MS: u64 = 2_000; // let dynamic content settle after rows appear
pub const POLL_MS: u64 = 250;
pub const WINDOW_W: u32 = 1920;
pub const WINDOW_H: u32 = 1080;
pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
    AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";
pub const CHROME_ARGS: &[&str] = &[
    "--no-sandbox",
    "--disable-dev-shm-usage",
    "--disable-gpu",
    "--disable-blink-features=AutomationControlled",
];

// Extraction
pub const NOT_AVAILABLE: &str = "N/A";
pub const UNKNOWN_PREFIX: &str = "Unknown-";
pub const MAX_CHANGE_LEN: usize = 10; // "12.34%" fits, "$1,234.56%" style noise doesn't
pub const TIMESTAMP_FMT: &str = "%Y-%m-%d %H:%M:%S";

// Export
pub const DEFAULT_FILE: &str = "crypto_data";
