//! Console formatting helpers.

/// A horizontal rule of `width` repetitions of `ch`.
#[must_use]
pub fn rule(ch: char, width: usize) -> String {
    ch.to_string().repeat(width)
}

/// Print `title` framed by `=` rules.
pub fn banner(title: &str) {
    println!("{}", rule('=', 60));
    println!("{title}");
    println!("{}", rule('=', 60));
}
