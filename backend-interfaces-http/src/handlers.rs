pub mod admin_handlers;
pub mod location_handlers;
pub mod ops_handlers;
pub mod participate_handlers;

pub use admin_handlers::*;
pub use location_handlers::*;
pub use ops_handlers::*;
pub use participate_handlers::*;
