pub mod app;
pub mod config;
pub mod error;
pub mod extract;
pub mod health;
pub mod ingredients;
pub mod recipes;
pub mod state;
pub mod store;

#[cfg(test)]
mod testing;
