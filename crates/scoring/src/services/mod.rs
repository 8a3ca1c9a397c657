pub mod breakdown;
pub mod ranking;
pub mod standings;
pub mod validation;
