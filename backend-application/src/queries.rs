// Read-only use cases

pub mod location_queries;
pub mod report_queries;
