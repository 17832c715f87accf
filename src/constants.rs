//! Crate-wide constants for the football-data.org v1 API client.

/// Base domain for the football-data.org v1 API.
pub const DEFAULT_API_DOMAIN: &str = "https://api.football-data.org/v1";

/// Header carrying the API key on every request.
pub const AUTH_HEADER: &str = "X-Auth-Token";

/// Environment variable consulted for the API key when none is passed
/// explicitly.
pub const API_KEY_ENV_VAR: &str = "FOOTDATA_API_KEY";

/// Environment variable overriding the API domain.
pub const API_DOMAIN_ENV_VAR: &str = "FOOTDATA_API_DOMAIN";

/// Environment variable overriding the HTTP timeout (seconds).
pub const HTTP_TIMEOUT_ENV_VAR: &str = "FOOTDATA_HTTP_TIMEOUT";

/// Default HTTP timeout in seconds for API requests.
pub const DEFAULT_HTTP_TIMEOUT_SECONDS: u64 = 30;

/// Maximum idle connections kept per host in the connection pool.
pub const HTTP_POOL_MAX_IDLE_PER_HOST: usize = 5;

/// Response header reporting how many requests remain in the current
/// rate-limit window.
pub const REQUESTS_AVAILABLE_HEADER: &str = "X-Requests-Available-Minute";

/// Response header reporting the seconds until the rate-limit counter
/// resets.
pub const COUNTER_RESET_HEADER: &str = "X-RequestCounter-Reset";

/// Minimum length accepted for a team name query. Shorter queries match
/// far too broadly on the API side, so they are rejected client-side.
pub const MIN_TEAM_NAME_QUERY_LEN: usize = 3;
