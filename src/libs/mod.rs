pub mod category;
pub mod config;
pub mod dataset;
pub mod error;
pub mod http;
pub mod matcher;
pub mod middleware;
pub mod normalizer;
pub mod recommend;
pub mod resolver;
pub mod source;
pub mod store;
pub mod variable;
pub mod version;
