/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Minimum accepted password length for register / reset.
    pub password_min_length: usize,
    /// External spreadsheet settings (source rows).
    pub sheet: SheetConfig,
}

/// Settings for the spreadsheet source-row provider.
///
/// Both `sheet_id` and `api_key` must be present for live fetches; otherwise
/// the client serves fixed sample rows.
#[derive(Debug, Clone, Default)]
pub struct SheetConfig {
    pub sheet_id: Option<String>,
    pub api_key: Option<String>,
    /// A1-notation range to read (default: `Sheet1`).
    pub range: String,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `3000`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `PASSWORD_MIN_LENGTH`  | `4`                        |
    /// | `SHEET_ID`             | unset (sample rows)        |
    /// | `SHEET_API_KEY`        | unset (sample rows)        |
    /// | `SHEET_RANGE`          | `Sheet1`                   |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let password_min_length: usize = std::env::var("PASSWORD_MIN_LENGTH")
            .unwrap_or_else(|_| "4".into())
            .parse()
            .expect("PASSWORD_MIN_LENGTH must be a valid usize");

        let sheet = SheetConfig {
            sheet_id: std::env::var("SHEET_ID").ok().filter(|s| !s.is_empty()),
            api_key: std::env::var("SHEET_API_KEY").ok().filter(|s| !s.is_empty()),
            range: std::env::var("SHEET_RANGE").unwrap_or_else(|_| "Sheet1".into()),
        };

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            password_min_length,
            sheet,
        }
    }
}
