pub mod connections;
pub mod options;
pub mod schema;
