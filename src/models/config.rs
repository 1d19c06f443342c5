use crate::db::AppEnv;

/// Configuration options specific to the storefront service.
#[derive(Clone)]
pub struct ServerConfig {
    /// Absolute base URL used when rendering sitemap/robots documents.
    pub base_url: String,
    /// Bind address for the HTTP server.
    pub bind_address: String,
}

impl ServerConfig {
    /// Reads the configuration from the environment.
    pub fn from_env(env: AppEnv) -> Self {
        let base_url = resolve_base_url(
            std::env::var("APP_URL").ok().as_deref(),
            std::env::var("HOST_URL").ok().as_deref(),
            env,
        );
        let bind_address =
            std::env::var("BIND_ADDRESS").unwrap_or_else(|_| "127.0.0.1:3000".to_string());
        Self {
            base_url,
            bind_address,
        }
    }
}

/// Resolves the public base URL: explicit override, then the
/// platform-provided hostname (scheme added), then a localhost fallback.
pub fn resolve_base_url(
    app_url: Option<&str>,
    platform_host: Option<&str>,
    env: AppEnv,
) -> String {
    if let Some(url) = app_url.filter(|url| !url.trim().is_empty()) {
        return url.trim_end_matches('/').to_string();
    }
    if let Some(host) = platform_host.filter(|host| !host.trim().is_empty()) {
        return format!("https://{host}");
    }
    match env {
        AppEnv::Production => "https://localhost:3000".to_string(),
        AppEnv::Development => "http://localhost:3000".to_string(),
    }
}
