mod class_list;
pub use class_list::*;

mod html;
pub use html::*;
