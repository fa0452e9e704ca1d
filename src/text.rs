//! Shared text helpers for escape-aware width math and compact previews.

/// One unit of terminal output: a printable char or a whole escape sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Segment<'a> {
    Char(char),
    Escape(&'a str),
}

/// Split `s` into printable chars and escape sequences.
///
/// Recognizes CSI (`ESC [ ... final`), OSC (`ESC ] ... BEL` or `ESC ] ... ESC \`)
/// and two-byte `ESC x` sequences. A trailing lone `ESC` is reported as an
/// escape so it never counts toward width.
pub(crate) fn segments(s: &str) -> Vec<Segment<'_>> {
    let mut out = Vec::new();
    let mut iter = s.char_indices().peekable();

    while let Some((start, c)) = iter.next() {
        if c != '\x1b' {
            out.push(Segment::Char(c));
            continue;
        }

        let end = match iter.peek().copied() {
            Some((_, '[')) => {
                iter.next();
                let mut end = s.len();
                for (idx, ch) in iter.by_ref() {
                    if ('\x40'..='\x7e').contains(&ch) {
                        end = idx + ch.len_utf8();
                        break;
                    }
                }
                end
            }
            Some((_, ']')) => {
                iter.next();
                let mut end = s.len();
                while let Some((idx, ch)) = iter.next() {
                    if ch == '\x07' {
                        end = idx + 1;
                        break;
                    }
                    if ch == '\x1b' {
                        if let Some((next_idx, '\\')) = iter.peek().copied() {
                            iter.next();
                            end = next_idx + 1;
                            break;
                        }
                    }
                }
                end
            }
            Some((idx, ch)) => {
                iter.next();
                idx + ch.len_utf8()
            }
            None => s.len(),
        };
        out.push(Segment::Escape(&s[start..end]));
    }
    out
}

/// Remove every escape sequence from `s`.
pub fn strip_escapes(s: &str) -> String {
    segments(s)
        .into_iter()
        .filter_map(|segment| match segment {
            Segment::Char(c) => Some(c),
            Segment::Escape(_) => None,
        })
        .collect()
}

/// Count visible character width (single-cell approximation, escapes ignored).
pub fn visible_width(s: &str) -> usize {
    segments(s)
        .into_iter()
        .filter(|segment| matches!(segment, Segment::Char(_)))
        .count()
}

/// Truncate text for single-line display and make control chars visible.
pub fn truncate_single_line(s: &str, max_len: usize) -> String {
    let flat: String = s
        .chars()
        .flat_map(|c| c.escape_debug())
        .collect::<String>()
        .replace("\\u{1b}", "^[");
    if flat.chars().count() > max_len {
        let clipped: String = flat.chars().take(max_len).collect();
        format!("{clipped}...")
    } else {
        flat
    }
}
