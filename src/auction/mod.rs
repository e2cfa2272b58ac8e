pub mod events;
pub mod seed;
