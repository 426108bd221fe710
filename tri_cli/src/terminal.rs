//! Terminal side of the form: where field text comes from and how the
//! display region is printed.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::io::{self, BufRead, Write};

use serde::Serialize;
use tri_core::input::{InputSource, SIDE_FIELDS};
use tri_core::{Message, Submission};

/// Fields filled from command-line arguments, in order.
///
/// Only as many fields exist as arguments were given, so a short argument
/// list fails to bind the same way a page missing an input element would.
pub fn argument_fields(sides: &[String]) -> BTreeMap<String, String> {
    SIDE_FIELDS
        .iter()
        .zip(sides)
        .map(|(field, value)| (field.to_string(), value.clone()))
        .collect()
}

/// How a round of prompting ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fill {
    /// All three sides were answered
    Complete,
    /// Input ended after `answered` of the three sides
    Ended { answered: usize },
}

/// Fields re-filled from stdin before every submission.
#[derive(Debug)]
pub struct PromptFields {
    values: RefCell<BTreeMap<String, String>>,
}

impl PromptFields {
    pub fn new() -> Self {
        let values = SIDE_FIELDS
            .iter()
            .map(|field| (field.to_string(), String::new()))
            .collect();
        PromptFields {
            values: RefCell::new(values),
        }
    }

    /// Prompt for each side in turn, stopping at end of input.
    pub fn fill<R: BufRead, W: Write>(&self, input: &mut R, prompt: &mut W) -> io::Result<Fill> {
        for (index, field) in SIDE_FIELDS.iter().enumerate() {
            write!(prompt, "Side {}: ", index + 1)?;
            prompt.flush()?;

            let mut line = String::new();
            if input.read_line(&mut line)? == 0 {
                return Ok(Fill::Ended { answered: index });
            }
            self.values.borrow_mut().insert(field.to_string(), line);
        }
        Ok(Fill::Complete)
    }
}

impl Default for PromptFields {
    fn default() -> Self {
        Self::new()
    }
}

impl InputSource for PromptFields {
    fn value(&self, field: &str) -> Option<String> {
        self.values.borrow().get(field).cloned()
    }
}

#[derive(Serialize)]
struct JsonOut<'a> {
    ok: bool,
    submission: &'a Submission,
    messages: &'a [Message],
}

/// Print the display region for one submission.
pub fn render<W: Write>(
    out: &mut W,
    json: bool,
    submission: &Submission,
    messages: &[Message],
) -> anyhow::Result<()> {
    if json {
        let body = JsonOut {
            ok: submission.report().is_some(),
            submission,
            messages,
        };
        writeln!(out, "{}", serde_json::to_string_pretty(&body)?)?;
    } else {
        for message in messages {
            if message.is_error() {
                writeln!(out, "Error: {}", message)?;
            } else {
                writeln!(out, "{}", message)?;
            }
        }
    }
    Ok(())
}
