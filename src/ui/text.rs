//! Whitespace normalization for multi-line templates.
//!
//! Help screens are written as indented raw string literals so they read
//! well next to the code that owns them. [`dedent`] strips the shared
//! indentation before display. Whitespace only; it never touches content.

/// Strip the common leading indentation from every line of `template`.
///
/// Leading and trailing blank lines are removed and interior blank lines
/// are emptied of stray spaces. The result has no trailing newline; callers
/// that print it add their own.
pub fn dedent(template: &str) -> String {
    let lines: Vec<&str> = template.lines().collect();

    // Common indentation is measured across non-blank lines only.
    let indent = lines
        .iter()
        .filter(|line| !line.trim().is_empty())
        .map(|line| line.len() - line.trim_start().len())
        .min()
        .unwrap_or(0);

    let mut out: Vec<&str> = lines
        .iter()
        .map(|line| {
            if line.trim().is_empty() {
                ""
            } else {
                &line[indent..]
            }
        })
        .collect();

    while out.first().is_some_and(|line| line.is_empty()) {
        out.remove(0);
    }
    while out.last().is_some_and(|line| line.is_empty()) {
        out.pop();
    }

    out.join("\n")
}
