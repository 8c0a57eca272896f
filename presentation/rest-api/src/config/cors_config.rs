use poem::middleware::Cors;

const DEFAULT_ALLOWED_ORIGINS: &str = "http://localhost:5173,http://localhost:8080";

/// Initialize CORS middleware for cross-origin requests
///
/// Environment variables:
/// - CORS_ALLOWED_ORIGINS: Comma-separated list of allowed origins
///   (default: "http://localhost:5173,http://localhost:8080")
///
/// Configuration:
/// - Methods: GET, POST, PUT, DELETE, OPTIONS
/// - Headers: content-type
pub fn init_cors() -> Cors {
    init_cors_from_lookup(|name| std::env::var(name).ok())
}

pub fn init_cors_from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Cors {
    Cors::new()
        .allow_origins(allowed_origins(lookup))
        .allow_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
        .allow_headers(vec!["content-type"])
}

fn allowed_origins(lookup: impl Fn(&str) -> Option<String>) -> Vec<String> {
    let raw =
        lookup("CORS_ALLOWED_ORIGINS").unwrap_or_else(|| DEFAULT_ALLOWED_ORIGINS.to_string());
    parse_origins(&raw)
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use poem::http::header;
    use poem::test::TestClient;
    use poem::{EndpointExt, Route, handler};

    #[test]
    fn should_split_and_trim_origins() {
        let origins = parse_origins("http://a.test, http://b.test ,,");
        assert_eq!(origins, vec!["http://a.test", "http://b.test"]);
    }

    #[test]
    fn should_fall_back_to_local_dev_origins() {
        let origins = allowed_origins(|_| None);

        assert_eq!(origins, vec!["http://localhost:5173", "http://localhost:8080"]);
    }

    #[test]
    fn should_read_origins_from_lookup() {
        let origins = allowed_origins(|name| match name {
            "CORS_ALLOWED_ORIGINS" => Some("https://shop.test".to_string()),
            _ => None,
        });

        assert_eq!(origins, vec!["https://shop.test"]);
    }

    #[handler]
    fn ping() -> &'static str {
        "pong"
    }

    #[tokio::test]
    async fn should_allow_default_origin_on_preflight() {
        let app = Route::new()
            .at("/ping", ping)
            .with(init_cors_from_lookup(|_| None));
        let client = TestClient::new(app);

        let resp = client
            .options("/ping")
            .header(header::ORIGIN, "http://localhost:5173")
            .header(header::ACCESS_CONTROL_REQUEST_METHOD, "GET")
            .send()
            .await;

        resp.assert_status_is_ok();
        resp.assert_header(header::ACCESS_CONTROL_ALLOW_ORIGIN, "http://localhost:5173");
    }
}
