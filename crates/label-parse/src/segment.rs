//! Splitting a care label into `Label: content` segments.

use label_model::Segment;
use tracing::{debug, trace};

use crate::patterns::{LABEL_TOKEN, SEPARATORS};

/// Splits `text` into ordered segments.
///
/// Each label token owns the text up to the next label token (or the end of
/// the input). Text not covered by a label becomes an `Unknown` segment in
/// its positional place; leftovers that strip to nothing are dropped.
pub fn segment(text: &str) -> Vec<Segment> {
    let tokens: Vec<_> = LABEL_TOKEN.find_iter(text).collect();
    let mut segments = Vec::with_capacity(tokens.len() + 1);
    let mut cursor = 0;

    for (idx, token) in tokens.iter().enumerate() {
        push_leftover(&mut segments, &text[cursor..token.start()]);

        let content_end = tokens
            .get(idx + 1)
            .map_or(text.len(), |next| next.start());
        let label = token.as_str().trim_end_matches(':').trim_end();
        let content = text[token.end()..content_end].trim_matches(SEPARATORS);
        trace!(label, content, "labeled segment");
        segments.push(Segment::new(label, content));
        cursor = content_end;
    }
    push_leftover(&mut segments, &text[cursor..]);

    segments
}

fn push_leftover(segments: &mut Vec<Segment>, span: &str) {
    let leftover = span.trim_matches(SEPARATORS);
    if leftover.is_empty() {
        return;
    }
    debug!(leftover, "unlabeled care-label text");
    segments.push(Segment::unknown(leftover));
}
