pub mod use_forecast;
pub mod use_optimal_window;
