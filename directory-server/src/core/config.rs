/// Server configuration
///
/// # Environment variables
///
/// Every setting can be overridden through the environment:
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | WORK_DIR | /var/lib/staffdir | database and log location |
/// | HTTP_PORT | 5000 | HTTP listen port |
/// | CORS_ORIGIN | http://localhost:3000 | allowed browser origin |
/// | MEDIA_UPLOAD_URL | http://localhost:9000/upload | media service upload endpoint |
/// | REQUEST_TIMEOUT_MS | 30000 | outbound media request timeout |
///
/// # Example
///
/// ```ignore
/// WORK_DIR=/data/staffdir HTTP_PORT=8080 cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Working directory for the embedded database
    pub work_dir: String,
    /// HTTP API port
    pub http_port: u16,
    /// Browser origin allowed by CORS
    pub cors_origin: String,
    /// Media service upload endpoint
    pub media_upload_url: String,
    /// Outbound request timeout (milliseconds)
    pub request_timeout_ms: u64,
}

impl Config {
    /// Load configuration from environment variables, falling back to
    /// defaults for anything unset.
    pub fn from_env() -> Self {
        Self {
            work_dir: std::env::var("WORK_DIR").unwrap_or_else(|_| "/var/lib/staffdir".into()),
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(5000),
            cors_origin: std::env::var("CORS_ORIGIN")
                .unwrap_or_else(|_| "http://localhost:3000".into()),
            media_upload_url: std::env::var("MEDIA_UPLOAD_URL")
                .unwrap_or_else(|_| "http://localhost:9000/upload".into()),
            request_timeout_ms: std::env::var("REQUEST_TIMEOUT_MS")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(30000),
        }
    }

    /// Override the filesystem and network touchpoints.
    ///
    /// Mostly used by tests.
    pub fn with_overrides(work_dir: impl Into<String>, http_port: u16) -> Self {
        let mut config = Self::from_env();
        config.work_dir = work_dir.into();
        config.http_port = http_port;
        config
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
