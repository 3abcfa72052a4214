//! Instruction prompt construction.
//!
//! The specification text a function is wrapped with becomes the
//! instruction message: a fixed preamble, the dedented specification,
//! and a suffix describing the expected answer shape. Built once per
//! wrap; immutable for the callable's lifetime.

use gptfn_types::error::Error;

use crate::wrap::ReturnKind;

const PREAMBLE: &str = "You should answer to inputs according to the following specification:\n\n";

const ANSWER_ONLY_SUFFIX: &str =
    "\n\nAnswer with only what was requested without including any other text.";

const TRUE_FALSE_SUFFIX: &str = "\n\nAnswer with either true or false without including any \
                                 other text. If no definitive answer can be given, answer false.";

/// Strip the whitespace prefix common to all non-blank lines.
///
/// Blank lines are ignored when computing the prefix and emptied in the
/// output, so indented multi-line specifications read naturally.
pub fn dedent(text: &str) -> String {
    let indent = text
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| line.chars().take_while(|c| c.is_whitespace()).count())
        .min()
        .unwrap_or(0);

    text.lines()
        .map(|line| {
            if line.trim().is_empty() {
                ""
            } else {
                let start = line
                    .char_indices()
                    .nth(indent)
                    .map(|(i, _)| i)
                    .unwrap_or(line.len());
                &line[start..]
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Build the instruction prompt for a specification and answer shape.
///
/// Fails with [`Error::MissingSpecification`] when the specification is
/// empty after dedenting and trimming -- this surfaces at wrap time,
/// before any call is made.
pub fn build_instructions(spec: &str, kind: ReturnKind) -> Result<String, Error> {
    let dedented = dedent(spec);
    let body = dedented.trim();
    if body.is_empty() {
        return Err(Error::MissingSpecification);
    }

    let suffix = match kind {
        ReturnKind::Boolean => TRUE_FALSE_SUFFIX,
        ReturnKind::Text | ReturnKind::Stream => ANSWER_ONLY_SUFFIX,
    };

    Ok(format!("{PREAMBLE}{body}{suffix}"))
}
