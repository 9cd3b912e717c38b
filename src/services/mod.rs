pub mod api;
pub mod theme;
pub mod timeout;
