//! Network constants for the exchange rates API.

/// Default REST API base URL.
pub const DEFAULT_API_URL: &str = "https://api.exchangeratesapi.io";

/// Default base currency for rate queries.
pub const DEFAULT_BASE_CURRENCY: &str = "USD";
