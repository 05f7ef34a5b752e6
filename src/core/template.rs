use crate::utils::error::Result;
use std::io::Write;

pub const WELCOME: &str = "Welcome to the C++ Project!";
pub const MESSAGE: &str = "This is a basic C++ project template.";

pub const LEFT_OPERAND: i32 = 5;
pub const RIGHT_OPERAND: i32 = 3;

pub fn print_welcome<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "{}", WELCOME)?;
    Ok(())
}

/// Two's-complement addition; wraps instead of panicking on overflow.
pub fn add(a: i32, b: i32) -> i32 {
    a.wrapping_add(b)
}

pub fn get_message() -> &'static str {
    MESSAGE
}
