pub mod use_arrow_key_down;
pub mod use_random;
