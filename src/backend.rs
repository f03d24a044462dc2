use axum::{
    extract::{Request, State},
    http::{header, HeaderMap, HeaderValue},
    middleware::{self, Next},
    response::Response,
    Router,
};
use std::{
    path::{Path, PathBuf},
    sync::atomic::{AtomicU64, Ordering as AtomicOrdering},
    sync::Arc,
    time::{Instant, SystemTime, UNIX_EPOCH},
};
use tower_http::services::{ServeDir, ServeFile};

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_DIST_DIR: &str = "dist";
const DEFAULT_STATIC_CACHE_MAX_AGE_SECONDS: u64 = 3_600;
const DEFAULT_LOG_LEVEL: LogLevel = LogLevel::Info;

const STATIC_CACHE_MAX_AGE_SECONDS_BOUNDS: (u64, u64) = (0, 365 * 24 * 60 * 60);
const REQUEST_ID_HEADER: &str = "x-request-id";
const INDEX_FILE: &str = "index.html";

static REQUEST_ID_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Variants are ordered by severity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
enum LogLevel {
    Debug,
    Info,
}

impl LogLevel {
    fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
        }
    }
}

#[derive(Clone, Debug)]
struct HostConfig {
    port: u16,
    dist_dir: PathBuf,
    static_cache_max_age_seconds: u64,
    log_level: LogLevel,
}

impl HostConfig {
    fn from_env() -> Self {
        let port = parse_env_non_empty_string("PORT")
            .and_then(|value| value.parse::<u16>().ok())
            .unwrap_or(DEFAULT_PORT);
        let dist_dir = parse_env_non_empty_string("SITE_DIST_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DIST_DIR));
        let static_cache_max_age_seconds = parse_env_u64_with_bounds(
            "STATIC_CACHE_MAX_AGE_SECONDS",
            DEFAULT_STATIC_CACHE_MAX_AGE_SECONDS,
            STATIC_CACHE_MAX_AGE_SECONDS_BOUNDS,
        );
        let log_level = parse_log_level("LOG_LEVEL", DEFAULT_LOG_LEVEL);

        Self {
            port,
            dist_dir,
            static_cache_max_age_seconds,
            log_level,
        }
    }
}

/// Serves the built single-page bundle. Paths without a matching file fall
/// back to `index.html`; the client decides what to render.
pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = Arc::new(HostConfig::from_env());
    let bind_address = format!("0.0.0.0:{}", config.port);

    if !config.dist_dir.join(INDEX_FILE).is_file() {
        log_event(
            &config,
            LogLevel::Info,
            "dist_missing",
            serde_json::json!({
                "dist": config.dist_dir.display().to_string(),
                "hint": "run `trunk build --release` first",
            }),
        );
    }

    let app = build_router(Arc::clone(&config));
    let listener = tokio::net::TcpListener::bind(&bind_address).await?;
    log_event(
        &config,
        LogLevel::Info,
        "server_listening",
        serde_json::json!({
            "url": format!("http://127.0.0.1:{}", config.port),
            "dist": config.dist_dir.display().to_string(),
        }),
    );
    axum::serve(listener, app).await?;
    Ok(())
}

fn build_router(config: Arc<HostConfig>) -> Router {
    let static_service = ServeDir::new(&config.dist_dir)
        .fallback(ServeFile::new(config.dist_dir.join(INDEX_FILE)));

    Router::new()
        .fallback_service(static_service)
        .layer(middleware::from_fn_with_state(config, observe_request))
}

async fn observe_request(
    State(config): State<Arc<HostConfig>>,
    request: Request,
    next: Next,
) -> Response {
    let request_id = resolve_request_id(request.headers());
    let method = request.method().to_string();
    let path = request.uri().path().to_string();
    let started = Instant::now();

    let mut response = next.run(request).await;
    let status = response.status();
    let headers = response.headers_mut();

    if let Ok(request_id_header) = HeaderValue::from_str(&request_id) {
        headers.insert(REQUEST_ID_HEADER, request_id_header);
    }

    if status.is_success() && !headers.contains_key(header::CACHE_CONTROL) {
        let served_html = headers
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .is_some_and(|value| value.trim_start().starts_with("text/html"));
        headers.insert(
            header::CACHE_CONTROL,
            cache_control_for(&path, served_html, config.static_cache_max_age_seconds),
        );
    }

    log_event(
        &config,
        LogLevel::Info,
        "request",
        serde_json::json!({
            "requestId": request_id,
            "method": method,
            "path": path,
            "status": status.as_u16(),
            "elapsedMs": started.elapsed().as_millis() as u64,
        }),
    );

    response
}

/// Documents and client routes must revalidate so a new deploy is picked up.
/// An HTML body is a document whatever the path says: a stale asset URL
/// answered by the `index.html` fallback must not be cached as an asset.
fn cache_control_for(path: &str, served_html: bool, max_age_seconds: u64) -> HeaderValue {
    let is_document = served_html
        || match Path::new(path).extension() {
            None => true,
            Some(extension) => extension == "html",
        };

    if is_document || max_age_seconds == 0 {
        return HeaderValue::from_static("no-cache");
    }

    cache_control(&format!("public, max-age={max_age_seconds}"))
}

fn cache_control(value: &str) -> HeaderValue {
    HeaderValue::from_str(value).unwrap_or_else(|_| HeaderValue::from_static("no-store"))
}

fn parse_env_u64_with_bounds(name: &str, default: u64, bounds: (u64, u64)) -> u64 {
    std::env::var(name)
        .ok()
        .and_then(|value| value.trim().parse::<u64>().ok())
        .filter(|value| (bounds.0..=bounds.1).contains(value))
        .unwrap_or(default)
}

fn parse_env_non_empty_string(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn parse_log_level(name: &str, default: LogLevel) -> LogLevel {
    match parse_env_non_empty_string(name)
        .unwrap_or_else(|| default.as_str().to_string())
        .to_ascii_lowercase()
        .as_str()
    {
        "debug" => LogLevel::Debug,
        "info" => LogLevel::Info,
        _ => default,
    }
}

fn now_unix_millis() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|value| value.as_millis())
        .unwrap_or(0)
}

fn now_unix_seconds() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|value| value.as_secs())
        .unwrap_or(0)
}

fn generate_request_id() -> String {
    let counter = REQUEST_ID_COUNTER.fetch_add(1, AtomicOrdering::Relaxed);
    format!("req-{}-{counter}", now_unix_millis())
}

fn resolve_request_id(headers: &HeaderMap) -> String {
    let value = headers
        .get(REQUEST_ID_HEADER)
        .and_then(|raw| raw.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(ToString::to_string);

    value.unwrap_or_else(generate_request_id)
}

fn log_event(config: &HostConfig, level: LogLevel, event: &str, fields: serde_json::Value) {
    if level < config.log_level {
        return;
    }

    let mut line = serde_json::json!({
        "ts": now_unix_seconds(),
        "level": level.as_str(),
        "event": event,
    });
    if let (Some(line), serde_json::Value::Object(extra)) = (line.as_object_mut(), fields) {
        line.extend(extra);
    }

    println!("{line}");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};

    fn test_config(dist_dir: PathBuf) -> HostConfig {
        HostConfig {
            port: 0,
            dist_dir,
            static_cache_max_age_seconds: DEFAULT_STATIC_CACHE_MAX_AGE_SECONDS,
            log_level: DEFAULT_LOG_LEVEL,
        }
    }

    fn scratch_dist(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "wondrous-{name}-{}-{}",
            std::process::id(),
            now_unix_millis()
        ));
        fs::create_dir_all(&dir).expect("create scratch dist");
        fs::write(dir.join(INDEX_FILE), "<div id=\"app\"></div>").expect("write index");
        fs::write(dir.join("app.js"), "console.log('ok');").expect("write asset");
        dir
    }

    async fn get(address: std::net::SocketAddr, path: &str, request_id: Option<&str>) -> String {
        let mut stream = tokio::net::TcpStream::connect(address)
            .await
            .expect("connect to test server");
        let id_header = request_id
            .map(|id| format!("{REQUEST_ID_HEADER}: {id}\r\n"))
            .unwrap_or_default();
        let request = format!(
            "GET {path} HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n{id_header}\r\n"
        );
        stream
            .write_all(request.as_bytes())
            .await
            .expect("send request");

        let mut raw = Vec::new();
        stream.read_to_end(&mut raw).await.expect("read response");
        String::from_utf8_lossy(&raw).to_ascii_lowercase()
    }

    #[test]
    fn documents_revalidate_and_assets_cache() {
        assert_eq!(cache_control_for("/", false, 3_600), "no-cache");
        assert_eq!(cache_control_for("/index.html", false, 3_600), "no-cache");
        assert_eq!(cache_control_for("/changelog", false, 3_600), "no-cache");
        assert_eq!(
            cache_control_for("/wondrous-3f9a.wasm", false, 3_600),
            "public, max-age=3600"
        );
        assert_eq!(cache_control_for("/app.js", false, 0), "no-cache");
    }

    #[test]
    fn html_body_under_asset_path_revalidates() {
        assert_eq!(cache_control_for("/wondrous-old.wasm", true, 3_600), "no-cache");
    }

    #[test]
    fn inbound_request_id_is_reused_when_present() {
        let mut headers = HeaderMap::new();
        headers.insert(REQUEST_ID_HEADER, HeaderValue::from_static("  abc-123 "));
        assert_eq!(resolve_request_id(&headers), "abc-123");

        headers.insert(REQUEST_ID_HEADER, HeaderValue::from_static("   "));
        assert!(resolve_request_id(&headers).starts_with("req-"));
    }

    #[test]
    fn out_of_range_cache_age_falls_back_to_default() {
        std::env::set_var("WONDROUS_TEST_CACHE_AGE_HIGH", "999999999999");
        std::env::set_var("WONDROUS_TEST_CACHE_AGE_OK", " 60 ");

        assert_eq!(
            parse_env_u64_with_bounds(
                "WONDROUS_TEST_CACHE_AGE_HIGH",
                DEFAULT_STATIC_CACHE_MAX_AGE_SECONDS,
                STATIC_CACHE_MAX_AGE_SECONDS_BOUNDS,
            ),
            DEFAULT_STATIC_CACHE_MAX_AGE_SECONDS
        );
        assert_eq!(
            parse_env_u64_with_bounds(
                "WONDROUS_TEST_CACHE_AGE_OK",
                DEFAULT_STATIC_CACHE_MAX_AGE_SECONDS,
                STATIC_CACHE_MAX_AGE_SECONDS_BOUNDS,
            ),
            60
        );
    }

    #[test]
    fn unknown_log_level_keeps_default() {
        std::env::set_var("WONDROUS_TEST_LOG_LEVEL", "TRACE");
        assert_eq!(parse_log_level("WONDROUS_TEST_LOG_LEVEL", LogLevel::Info), LogLevel::Info);

        std::env::set_var("WONDROUS_TEST_LOG_LEVEL_DEBUG", "Debug");
        assert_eq!(
            parse_log_level("WONDROUS_TEST_LOG_LEVEL_DEBUG", LogLevel::Info),
            LogLevel::Debug
        );
        assert!(LogLevel::Debug < LogLevel::Info);
    }

    #[tokio::test]
    async fn client_routes_fall_back_to_index_and_assets_are_served() {
        let dist = scratch_dist("router");
        let app = build_router(Arc::new(test_config(dist.clone())));
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind test listener");
        let address = listener.local_addr().expect("listener address");
        tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        let route = get(address, "/changelog", Some("trace-42")).await;
        assert!(route.starts_with("http/1.1 200"));
        assert!(route.contains("<div id=\"app\"></div>"));
        assert!(route.contains("x-request-id: trace-42"));
        assert!(route.contains("cache-control: no-cache"));

        let asset = get(address, "/app.js", None).await;
        assert!(asset.starts_with("http/1.1 200"));
        assert!(asset.contains("cache-control: public, max-age=3600"));
        assert!(asset.contains("x-request-id: req-"));

        let stale = get(address, "/wondrous-old.wasm", None).await;
        assert!(stale.starts_with("http/1.1 200"));
        assert!(stale.contains("content-type: text/html"));
        assert!(stale.contains("cache-control: no-cache"));
        assert!(!stale.contains("max-age"));

        let _ = fs::remove_dir_all(dist);
    }
}
