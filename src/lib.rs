pub mod components;

pub mod theme;

pub mod catalog;

mod utils;
pub use utils::*;

mod assets;
pub use assets::*;
