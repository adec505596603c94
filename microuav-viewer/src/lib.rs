pub mod draw;
pub mod input;
pub mod layout;
