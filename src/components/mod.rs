pub mod dashboard;
pub mod day_card;
pub mod mix_chart;
pub mod optimizer;
pub mod status;

pub use dashboard::Dashboard;
