// src/config/consts.rs

// Site
pub const SITE: &str = "https://www.mlb.com";
pub const STATS_PATH: &str = "/stats/team/";

// Page structure
pub const STATS_XPATH: &str = "/html/body/main/div[2]/section/section/div[3]";
pub const PITCHING_BUTTON_XPATH: &str = "/html/body/main/div[2]/section/div[2]/div/div[2]/button";

// Header lines at the top of each rendered block
pub const HITTING_HEADER_ROWS: usize = 18;
pub const PITCHING_HEADER_ROWS: usize = 21;

// Browser
pub const DEFAULT_WEBDRIVER_URL: &str = "http://localhost:9515";
pub const LOAD_TIMEOUT_SECS: u64 = 5;
pub const POLL_INTERVAL_MS: u64 = 250;
pub const PITCHING_CLICKS: u32 = 2; // first click doesn't always register

// Local files
pub const STORE_DIR: &str = ".store";
pub const LOG_FILE: &str = "debug.log";
pub const CONFIG_FILE: &str = "mlb_scrape.toml";
