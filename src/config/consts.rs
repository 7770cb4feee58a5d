// src/config/consts.rs

// Net config
pub const AUTH_URL: &str = "https://open.feishu.cn/open-apis/auth/v3/tenant_access_token/internal";
pub const API_BASE: &str = "https://open.feishu.cn/open-apis";
pub const USER_AGENT: &str = concat!("member_lookup/", env!("CARGO_PKG_VERSION"));
pub const HTTP_TIMEOUT_SECS: u64 = 15;

// Pagination
pub const PAGE_SIZE: u32 = 500;
pub const MAX_PAGES: usize = 25;
pub const REQUEST_PAUSE_MS: u64 = 100; // be polite

// Normalize
pub const UNKNOWN_DATE: &str = "未知日期";
pub const DEFAULT_UTC_OFFSET_HOURS: i32 = 8;

// Local files
pub const CONFIG_FILE: &str = "member_lookup.toml";
pub const STORE_DIR: &str = ".store";
pub const LOG_FILE: &str = "debug.log";

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const EXPORT_LABEL: &str = "活动记录";
pub const EXPORT_EXT: &str = "csv";

// Env overrides
pub const ENV_APP_ID: &str = "FEISHU_APP_ID";
pub const ENV_APP_SECRET: &str = "FEISHU_APP_SECRET";
pub const ENV_APP_TOKEN: &str = "FEISHU_APP_TOKEN";
pub const ENV_TABLE_ID: &str = "FEISHU_TABLE_ID";
