pub mod components;
pub mod content;
pub mod display;
pub mod error;
pub mod model;
pub mod state;
pub mod util;
