/// Route paths under the service base URL. The service versions its API,
/// so the paths carry the version segment.
pub struct ApiRoutes {
    pub trade_path: &'static str,
    pub health_path: &'static str,
}

/// Per-request client constraints: timeout, retry budget, fixed backoff.
pub struct ClientDefaults {
    pub timeout_ms: u64,
    pub retries: u32,
    pub backoff_ms: u64,
}

pub struct ApiConfig {
    /// Default base URL; override at startup with --api-url.
    pub base_url: &'static str,
    pub routes: ApiRoutes,
    pub client: ClientDefaults,
}

pub const API: ApiConfig = ApiConfig {
    base_url: "http://127.0.0.1:8080",
    routes: ApiRoutes {
        trade_path: "/api/v1/trade",
        health_path: "/api/v1/health",
    },
    client: ClientDefaults {
        timeout_ms: 5000,
        retries: 3,
        backoff_ms: 1000,
    },
};
