pub mod pointer;
pub mod wheel;

pub use pointer::{wire_input_handlers, InputWiring};
pub use wheel::wire_wheel;
