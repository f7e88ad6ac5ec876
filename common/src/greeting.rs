/// The one line this program exists to print, without its line terminator.
pub const GREETING: &str = "Hello world!";

/// Returns the greeting text.
pub fn greeting() -> &'static str {
    GREETING
}
