pub mod auction;
pub mod bidding;
pub mod config;
pub mod event_consumer;
pub mod handlers;
pub mod query;
pub mod scheduler;
pub mod store;
