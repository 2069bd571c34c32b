pub mod report;
pub mod server;
