//! Collecting and validating run parameters, from the command line or interactively.

use std::io::{BufRead, Write};

use log::warn;

use crate::error::{Error, Result};

pub const CODON_LENGTH: i64 = 3;

/// Characters that cannot appear in a file name on common platforms.
const INVALID_ID_CHARS: [char; 9] = ['<', '>', ':', '"', '/', '\\', '|', '?', '*'];

/// Trim the id and replace spaces and file-name-hostile characters with `_`.
pub fn sanitize_id(raw: &str) -> Result<String> {
    let id: String = raw
        .trim()
        .chars()
        .map(|c| if c == ' ' || INVALID_ID_CHARS.contains(&c) { '_' } else { c })
        .collect();
    if id.is_empty() {
        return Err(Error::EmptyId);
    }
    Ok(id)
}

/// Descriptions hold letters and whitespace only.
pub fn validate_description(raw: &str) -> Result<String> {
    let description = raw.trim();
    if description.chars().all(|c| c.is_alphabetic() || c.is_whitespace()) {
        Ok(description.to_string())
    } else {
        Err(Error::InvalidDescription { description: description.to_string() })
    }
}

/// Round a length down to a whole number of codons, refusing to reach zero.
fn round_to_codons(length: i64) -> Option<i64> {
    let adjusted = length - length % CODON_LENGTH;
    if adjusted > 0 {
        Some(adjusted)
    } else {
        None
    }
}

/// Length policy for values given up front: positive, and a multiple of 3
/// unless `adjust` allows rounding down to one.
pub fn check_length(length: i64, adjust: bool) -> Result<usize> {
    if length <= 0 {
        return Err(Error::InvalidLength { reason: format!("{} is not a positive integer", length) });
    }
    if length % CODON_LENGTH == 0 {
        return Ok(length as usize);
    }
    if !adjust {
        return Err(Error::InvalidLength {
            reason: format!("{} is not divisible by {}; pass --adjust-length to round down", length, CODON_LENGTH),
        });
    }
    match round_to_codons(length) {
        Some(adjusted) => {
            warn!("Adjusting length from {} to {}", length, adjusted);
            Ok(adjusted as usize)
        }
        None => Err(Error::InvalidLength {
            reason: format!("{} rounds down to zero codons", length),
        }),
    }
}

/// Line-oriented question/answer session over any reader and writer.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Prompter { input, output }
    }

    fn say(&mut self, message: &str) -> Result<()> {
        writeln!(self.output, "{}", message)?;
        Ok(())
    }

    fn ask(&mut self, question: &str, what: &'static str) -> Result<String> {
        write!(self.output, "{}", question)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(Error::InputClosed { what });
        }
        Ok(line.trim().to_string())
    }

    /// Ask until a positive length divisible by 3 is given, offering to round
    /// other positive values down.
    pub fn ask_length(&mut self) -> Result<usize> {
        loop {
            let answer = self.ask("Enter the sequence length: ", "the sequence length")?;
            let length: i64 = match answer.parse() {
                Ok(n) => n,
                Err(_) => {
                    self.say("Invalid input. Please enter a numeric value.")?;
                    continue;
                }
            };

            if length <= 0 {
                self.say("Length must be a positive integer.")?;
            } else if length % CODON_LENGTH != 0 {
                self.say("For biological accuracy, the sequence length should be divisible by 3.")?;
                let adjust = self.ask(
                    "Would you like to adjust the length to the nearest multiple of 3? (y/n): ",
                    "the adjustment answer",
                )?;
                if adjust.to_lowercase() == "y" {
                    match round_to_codons(length) {
                        Some(adjusted) => {
                            self.say(&format!("Adjusting length to {}.", adjusted))?;
                            return Ok(adjusted as usize);
                        }
                        None => self.say("Adjusting would leave no bases. Please enter a larger length.")?,
                    }
                }
            } else {
                return Ok(length as usize);
            }
        }
    }

    pub fn ask_id(&mut self) -> Result<String> {
        loop {
            let answer = self.ask("Enter the sequence ID: ", "the sequence ID")?;
            match sanitize_id(&answer) {
                Ok(id) => return Ok(id),
                Err(_) => self.say("The sequence ID cannot be empty.")?,
            }
        }
    }

    pub fn ask_description(&mut self) -> Result<String> {
        loop {
            let answer = self.ask("Provide a description of the sequence: ", "the description")?;
            match validate_description(&answer) {
                Ok(description) => return Ok(description),
                Err(_) => self.say("Invalid description. Please use letters and spaces only.")?,
            }
        }
    }

    pub fn ask_marker(&mut self) -> Result<String> {
        self.ask("Enter your name: ", "the name")
    }
}
