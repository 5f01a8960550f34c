pub mod board;
pub mod bot;
pub mod error;
pub mod grid;
pub mod rules;
pub mod session;
