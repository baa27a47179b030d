pub mod histogram;
pub mod stats;
