//! Separates a reasoning trace (`<think>…</think>`) from the answer text.
//!
//! Reasoning-style models emit their trace inline at the start of the
//! response. While the closing tag has not arrived yet the trace is still
//! in progress.

const OPEN_TAG: &str = "<think>";
const CLOSE_TAG: &str = "</think>";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Thinking<'a> {
    None,
    /// Opening tag seen, closing tag not yet received
    InProgress(&'a str),
    Complete(&'a str),
}

impl Thinking<'_> {
    pub fn is_present(&self) -> bool {
        !matches!(self, Thinking::None)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThinkingSplit<'a> {
    pub thinking: Thinking<'a>,
    pub answer: String,
}

/// Split the first thinking block out of `content`.
pub fn split_thinking(content: &str) -> ThinkingSplit<'_> {
    let Some(start) = content.find(OPEN_TAG) else {
        return ThinkingSplit {
            thinking: Thinking::None,
            answer: content.to_string(),
        };
    };

    let inner_start = start + OPEN_TAG.len();
    match content[inner_start..].find(CLOSE_TAG) {
        Some(len) => {
            let inner_end = inner_start + len;
            let mut answer = String::with_capacity(content.len());
            answer.push_str(&content[..start]);
            answer.push_str(&content[inner_end + CLOSE_TAG.len()..]);
            ThinkingSplit {
                thinking: Thinking::Complete(&content[inner_start..inner_end]),
                answer,
            }
        }
        None => ThinkingSplit {
            thinking: Thinking::InProgress(&content[inner_start..]),
            answer: content[..start].to_string(),
        },
    }
}
