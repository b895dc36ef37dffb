mod button;
pub use button::*;

mod icon;
pub use icon::*;
