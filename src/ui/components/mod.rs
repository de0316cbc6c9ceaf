pub mod atoms;
pub mod spinner_line;
