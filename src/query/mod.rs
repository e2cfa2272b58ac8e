pub mod handlers;
pub mod view;
