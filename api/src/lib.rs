// API handler library surface, exposed for integration tests

pub mod handler;
