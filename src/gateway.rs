pub mod catalog;
pub mod factory;
pub mod http;
