pub mod config;
pub mod driver;
pub mod error;
pub mod field;
pub mod line;
pub mod palette;
pub mod star;
pub mod state;

pub static STARFIELD_WGSL: &str = include_str!("../shaders/starfield.wgsl");

pub use config::*;
pub use driver::*;
pub use error::*;
pub use field::*;
pub use line::*;
pub use palette::*;
pub use star::*;
pub use state::*;
