use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use shopfront_core::config::{AppConfig, LoadOptions};
use toml::Value;

pub fn run() -> String {
    let config = match AppConfig::load(LoadOptions::default()) {
        Ok(config) => config,
        Err(error) => return format!("config validation failed: {error}"),
    };

    let config_file_path = detect_config_path();
    let config_file_doc = load_config_file_doc(config_file_path.as_deref());
    let sources =
        Sources { doc: config_file_doc.as_ref(), path: config_file_path.as_deref() };

    let lines = vec![
        "effective config (source precedence: env > file > default):".to_string(),
        sources.line("catalog.base_url", &config.catalog.base_url, &["SHOPFRONT_CATALOG_BASE_URL"]),
        sources.line(
            "catalog.page_size",
            &config.catalog.page_size.to_string(),
            &["SHOPFRONT_CATALOG_PAGE_SIZE"],
        ),
        sources.line("catalog.sort", config.catalog.sort.as_str(), &["SHOPFRONT_CATALOG_SORT"]),
        sources.line(
            "catalog.timeout_secs",
            &config.catalog.timeout_secs.to_string(),
            &["SHOPFRONT_CATALOG_TIMEOUT_SECS"],
        ),
        sources.line("storage.url", &config.storage.url, &["SHOPFRONT_STORAGE_URL"]),
        sources.line(
            "storage.max_connections",
            &config.storage.max_connections.to_string(),
            &["SHOPFRONT_STORAGE_MAX_CONNECTIONS"],
        ),
        sources.line(
            "storage.timeout_secs",
            &config.storage.timeout_secs.to_string(),
            &["SHOPFRONT_STORAGE_TIMEOUT_SECS"],
        ),
        sources.line(
            "storage.state_key",
            &config.storage.state_key,
            &["SHOPFRONT_STORAGE_STATE_KEY"],
        ),
        sources.line(
            "search.debounce_ms",
            &config.search.debounce_ms.to_string(),
            &["SHOPFRONT_SEARCH_DEBOUNCE_MS"],
        ),
        sources.line(
            "server.bind_address",
            &config.server.bind_address,
            &["SHOPFRONT_SERVER_BIND_ADDRESS"],
        ),
        sources.line("server.port", &config.server.port.to_string(), &["SHOPFRONT_SERVER_PORT"]),
        sources.line(
            "server.graceful_shutdown_secs",
            &config.server.graceful_shutdown_secs.to_string(),
            &["SHOPFRONT_SERVER_GRACEFUL_SHUTDOWN_SECS"],
        ),
        sources.line(
            "logging.level",
            &config.logging.level,
            &["SHOPFRONT_LOGGING_LEVEL", "SHOPFRONT_LOG_LEVEL"],
        ),
        sources.line(
            "logging.format",
            &format!("{:?}", config.logging.format).to_ascii_lowercase(),
            &["SHOPFRONT_LOGGING_FORMAT", "SHOPFRONT_LOG_FORMAT"],
        ),
    ];

    lines.join("\n")
}

struct Sources<'a> {
    doc: Option<&'a Value>,
    path: Option<&'a Path>,
}

impl Sources<'_> {
    fn line(&self, key: &str, value: &str, env_keys: &[&str]) -> String {
        render_line(key, value, field_source(key, env_keys, self.doc, self.path))
    }
}

fn detect_config_path() -> Option<PathBuf> {
    let root = PathBuf::from("shopfront.toml");
    if root.exists() {
        return Some(root);
    }

    let nested = PathBuf::from("config/shopfront.toml");
    if nested.exists() {
        return Some(nested);
    }

    None
}

fn load_config_file_doc(path: Option<&Path>) -> Option<Value> {
    let path = path?;
    let raw = fs::read_to_string(path).ok()?;
    raw.parse::<Value>().ok()
}

fn field_source(
    key_path: &str,
    env_keys: &[&str],
    config_file_doc: Option<&Value>,
    config_file_path: Option<&Path>,
) -> String {
    if let Some(env_key) = env_keys.iter().find(|key| env::var_os(key).is_some()) {
        return format!("env ({env_key})");
    }

    if let Some(doc) = config_file_doc {
        if contains_path(doc, key_path) {
            let file_path = config_file_path
                .map(|path| path.display().to_string())
                .unwrap_or_else(|| "config file".to_string());
            return format!("file ({file_path})");
        }
    }

    "default".to_string()
}

fn contains_path(root: &Value, key_path: &str) -> bool {
    let mut current = root;
    for key in key_path.split('.') {
        let Some(next) = current.get(key) else {
            return false;
        };
        current = next;
    }
    true
}

fn render_line(key: &str, value: &str, source: String) -> String {
    format!("- {key} = {value} (source: {source})")
}
