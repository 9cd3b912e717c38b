/// Configuration constants for the application
pub struct Config;

impl Config {
    /// Backend used when `API_URL` is not set at build time
    pub const DEFAULT_API_URL: &'static str = "http://localhost:8000";

    /// Upper bound on a single backend request (15 seconds)
    pub const REQUEST_TIMEOUT_MS: u32 = 15_000;

    /// Charging duration requested on first load, in hours
    pub const DEFAULT_CHARGE_HOURS: u8 = 3;

    pub const MIN_CHARGE_HOURS: u8 = 1;
    pub const MAX_CHARGE_HOURS: u8 = 6;

    /// Shown in place of the dashboard when the forecast cannot be loaded
    pub const FORECAST_ERROR_MESSAGE: &'static str =
        "Failed to fetch data. Please check if the backend is running.";

    /// Shown inside the optimizer panel when a recomputation fails
    pub const OPTIMAL_WINDOW_ERROR_MESSAGE: &'static str =
        "Could not calculate the optimal charging window. Please try again.";
}
