pub mod cli;
pub mod ctx;
pub mod dashboard;
pub mod dataset;
pub mod derive;
pub mod error;
pub mod events;
pub mod input;
pub mod io;
pub mod math;
pub mod palette;
pub mod pipeline;
pub mod schema;
pub mod surface;
pub mod views;
