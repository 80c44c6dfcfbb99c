//! Reusable widget components.

pub mod detail;
pub mod gauge;
pub mod status;

pub use detail::DetailPanel;
pub use gauge::WeightGauge;
pub use status::StatusIndicator;
