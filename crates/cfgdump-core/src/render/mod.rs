pub mod inspect;

pub use inspect::{format_number, quote_string, render, Renderer};
