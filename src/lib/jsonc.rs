//! Best-effort `//` line-comment stripping for editor-style JSON.

/// Remove `//` line comments from `input` before structural parsing.
///
/// This is a textual strip: everything from the first `//` on a line to the
/// end of that line is dropped. String literals are not respected, so a `//`
/// inside a quoted value (for example a URL) is truncated as well. Known
/// limitation, kept to match how editors' launch files are commonly handled.
pub fn strip_line_comments(input: &str) -> String {
    input
        .lines()
        .map(|line| match line.find("//") {
            Some(index) => &line[..index],
            None => line,
        })
        .collect::<Vec<_>>()
        .join("\n")
}
