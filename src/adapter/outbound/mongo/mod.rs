//! MongoDB adapters built on the official driver.

pub mod admin;
pub mod client;
pub mod document;
pub mod settings;
pub mod store;

pub use admin::MongoAdmin;
pub use settings::MongoConfig;
pub use store::MongoProductStore;
