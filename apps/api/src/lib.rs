pub mod config;
pub mod errors;
pub mod evaluation;
pub mod leads;
pub mod llm_client;
pub mod models;
pub mod outreach;
pub mod routes;
pub mod scoring;
pub mod state;
