pub mod api;
pub mod generator;
pub mod options;

pub use api::*;
pub use generator::*;
pub use options::*;
