//! Heuristic sentence segmentation.
//!
//! A sentence ends where a period, semicolon, or newline is followed by a run
//! of whitespace; the whole run is consumed as the separator. Pieces are
//! trimmed and empty pieces dropped.
//!
//! This is not grammar-aware. Abbreviations ("Sr. Pérez") and decimals
//! followed by whitespace split the text where a reader would not. A newline
//! immediately followed by text does not split, so "línea\nsiguiente" stays
//! one sentence.

/// Split `text` into trimmed, non-empty sentences in document order.
pub fn segment(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0;
    let mut prev: Option<char> = None;
    let mut chars = text.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        if c.is_whitespace() && prev.is_some_and(is_terminator) {
            let mut end = i + c.len_utf8();
            let mut last = c;
            while let Some(&(j, w)) = chars.peek() {
                if !w.is_whitespace() {
                    break;
                }
                end = j + w.len_utf8();
                last = w;
                chars.next();
            }
            push_trimmed(&mut sentences, &text[start..i]);
            start = end;
            prev = Some(last);
            continue;
        }
        prev = Some(c);
    }
    push_trimmed(&mut sentences, &text[start..]);

    sentences
}

fn is_terminator(c: char) -> bool {
    matches!(c, '.' | ';' | '\n')
}

fn push_trimmed<'a>(out: &mut Vec<&'a str>, piece: &'a str) {
    let piece = piece.trim();
    if !piece.is_empty() {
        out.push(piece);
    }
}
