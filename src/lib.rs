pub mod chain;
pub mod config;
pub mod content;
pub mod errors;
pub mod models;
pub mod resolvers;
pub mod services;
