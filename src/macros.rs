/// Compile a literal pattern once and hand out a `&'static Regex`.
///
/// Only used with literal patterns from this crate; the unwrap cannot fire at
/// runtime unless a literal is broken, which the unit tests catch.
#[macro_export]
macro_rules! regex {
    ($pat:literal) => {{
        static RE: once_cell::sync::Lazy<regex::Regex> =
            once_cell::sync::Lazy::new(|| regex::Regex::new($pat).unwrap());
        &*RE
    }};
}
