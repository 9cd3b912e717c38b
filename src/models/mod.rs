pub mod charging;
pub mod chart;
pub mod energy;
pub mod error;
pub mod palette;
