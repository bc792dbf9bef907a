pub mod channel;
pub mod model;
pub mod parse;

pub use model::Color;
pub use parse::{
    array_to_color, hex_to_color, is_color_string, is_hex_string, string_to_color,
    structured_to_color, to_color, ArrayItem, ColorInput, Rgb,
};
