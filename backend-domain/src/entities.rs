// Domain entities

pub mod location;
pub mod model;
pub mod report;
pub mod visit;

pub use location::*;
pub use model::*;
pub use report::*;
pub use visit::*;
