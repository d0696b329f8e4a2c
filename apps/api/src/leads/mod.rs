pub mod handlers;
pub mod ingest;
pub mod pipeline;
pub mod report;
