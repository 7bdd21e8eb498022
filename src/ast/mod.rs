pub mod json;
pub mod label;
pub mod logic;
pub mod value;

pub use label::*;
pub use logic::*;
pub use value::*;
