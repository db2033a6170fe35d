pub mod keys;
pub mod tfl;
