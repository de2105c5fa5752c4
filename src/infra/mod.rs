//! Инфраструктура вокруг движка:
//! - RNG-реализации для колоды;
//! - консоль для человека (stdin/stdout и скриптовая).

pub mod console;
pub mod rng;

pub use console::*;
pub use rng::*;
