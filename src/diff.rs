//! Unified diff over two line sequences.
//!
//! Pure text rendering, no file access. Output follows the classic
//! `diff -u` layout: `---`/`+++` headers, `@@ -a,b +c,d @@` hunks and
//! ` `/`-`/`+` prefixed lines.

use std::fmt::Write;

/// Lines of unchanged context around each change.
pub const DEFAULT_CONTEXT: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tag {
    Equal,
    Delete,
    Insert,
}

#[derive(Debug, Clone, Copy)]
struct Edit {
    tag: Tag,
    /// Position in the old sequence (insertion point for inserts).
    old: usize,
    /// Position in the new sequence (insertion point for deletes).
    new: usize,
}

fn edit_script<S: AsRef<str>>(old: &[S], new: &[S]) -> Vec<Edit> {
    let prefix = old
        .iter()
        .zip(new)
        .take_while(|(a, b)| a.as_ref() == b.as_ref())
        .count();
    let suffix = old[prefix..]
        .iter()
        .rev()
        .zip(new[prefix..].iter().rev())
        .take_while(|(a, b)| a.as_ref() == b.as_ref())
        .count();
    let a = &old[prefix..old.len() - suffix];
    let b = &new[prefix..new.len() - suffix];

    let mut edits = Vec::with_capacity(old.len() + new.len());
    for k in 0..prefix {
        edits.push(Edit { tag: Tag::Equal, old: k, new: k });
    }
    align(a, b, prefix, &mut edits);
    for k in 0..suffix {
        edits.push(Edit {
            tag: Tag::Equal,
            old: old.len() - suffix + k,
            new: new.len() - suffix + k,
        });
    }
    edits
}

/// Upper bound on LCS table cells (about 32 MiB). Larger middles are
/// rendered as one block of deletions followed by one block of insertions.
const MAX_TABLE_CELLS: usize = 4 << 20;

/// Aligns the differing middles `a` and `b`, which start at `offset` in both
/// full sequences.
fn align<S: AsRef<str>>(a: &[S], b: &[S], offset: usize, edits: &mut Vec<Edit>) {
    let w = b.len() + 1;
    let cells = (a.len() + 1).checked_mul(w);
    if cells.is_none_or(|c| c > MAX_TABLE_CELLS) {
        for i in 0..a.len() {
            edits.push(Edit { tag: Tag::Delete, old: offset + i, new: offset });
        }
        for j in 0..b.len() {
            edits.push(Edit { tag: Tag::Insert, old: offset + a.len(), new: offset + j });
        }
        return;
    }

    // lcs[i * w + j] = length of the longest common subsequence of a[i..] and b[j..]
    let mut lcs = vec![0usize; (a.len() + 1) * w];
    for i in (0..a.len()).rev() {
        for j in (0..b.len()).rev() {
            lcs[i * w + j] = if a[i].as_ref() == b[j].as_ref() {
                lcs[(i + 1) * w + j + 1] + 1
            } else {
                lcs[(i + 1) * w + j].max(lcs[i * w + j + 1])
            };
        }
    }

    let (mut i, mut j) = (0, 0);
    while i < a.len() || j < b.len() {
        let (tag, di, dj) = if i < a.len() && j < b.len() && a[i].as_ref() == b[j].as_ref() {
            (Tag::Equal, 1, 1)
        } else if j == b.len() || (i < a.len() && lcs[(i + 1) * w + j] >= lcs[i * w + j + 1]) {
            (Tag::Delete, 1, 0)
        } else {
            (Tag::Insert, 0, 1)
        };
        edits.push(Edit { tag, old: offset + i, new: offset + j });
        i += di;
        j += dj;
    }
}

/// Groups changes into hunks as index ranges into the edit script.
fn hunks(edits: &[Edit], context: usize) -> Vec<(usize, usize)> {
    let changes: Vec<usize> = edits
        .iter()
        .enumerate()
        .filter(|(_, e)| e.tag != Tag::Equal)
        .map(|(idx, _)| idx)
        .collect();
    let mut out: Vec<(usize, usize)> = Vec::new();
    for idx in changes {
        let start = idx.saturating_sub(context);
        let end = (idx + context + 1).min(edits.len());
        match out.last_mut() {
            Some(last) if start <= last.1 => last.1 = end,
            _ => out.push((start, end)),
        }
    }
    out
}

fn format_range(start: usize, len: usize) -> String {
    match len {
        0 => format!("{start},0"),
        1 => format!("{}", start + 1),
        _ => format!("{},{}", start + 1, len),
    }
}

fn push_line(out: &mut String, prefix: char, line: &str) {
    out.push(prefix);
    out.push_str(line);
    if !line.ends_with('\n') {
        out.push('\n');
    }
}

/// Renders a unified diff from `old` to `new`. Returns an empty string when
/// the sequences are equal.
pub fn unified_diff<S: AsRef<str>>(
    old: &[S],
    new: &[S],
    from_file: &str,
    to_file: &str,
    context: usize,
) -> String {
    let edits = edit_script(old, new);
    let groups = hunks(&edits, context);
    let mut out = String::new();
    if groups.is_empty() {
        return out;
    }
    let _ = writeln!(out, "--- {from_file}");
    let _ = writeln!(out, "+++ {to_file}");
    for (start, end) in groups {
        let span = &edits[start..end];
        let old_len = span.iter().filter(|e| e.tag != Tag::Insert).count();
        let new_len = span.iter().filter(|e| e.tag != Tag::Delete).count();
        let _ = writeln!(
            out,
            "@@ -{} +{} @@",
            format_range(span[0].old, old_len),
            format_range(span[0].new, new_len)
        );
        for e in span {
            match e.tag {
                Tag::Equal => push_line(&mut out, ' ', old[e.old].as_ref()),
                Tag::Delete => push_line(&mut out, '-', old[e.old].as_ref()),
                Tag::Insert => push_line(&mut out, '+', new[e.new].as_ref()),
            }
        }
    }
    out
}
