pub mod presentation;
pub mod selection;
pub mod view;

pub use presentation::*;
pub use selection::*;
pub use view::*;
