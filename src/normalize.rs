/// Canonical line sequence for comparing program output.
///
/// Each physical line is trimmed and given a single `\n` terminator. Trailing
/// lines that are blank after trimming are dropped, so a missing or extra final
/// newline never decides a comparison. Leading and interior blank lines count.
pub fn normalize_lines(text: &str) -> Vec<String> {
    let mut lines: Vec<String> = text
        .lines()
        .map(|line| {
            let mut out = line.trim().to_string();
            out.push('\n');
            out
        })
        .collect();
    while lines.last().is_some_and(|l| l == "\n") {
        lines.pop();
    }
    lines
}
