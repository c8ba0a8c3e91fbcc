//! Per-question answer collection.
//!
//! One question at a time, in the order the service defines, each under
//! the input discipline its `answer_type` demands. The returned map has
//! exactly one answer per question; anything the collector cannot handle
//! fails fast instead of skipping a question.

use std::collections::HashMap;

use colored::Colorize;
use geekbot_sdk::{Answer, AnswerType, Question, StandupError};

use crate::error::CliError;
use crate::terminal::Terminal;

/// Collect one answer per question
pub fn collect_answers<T: Terminal>(
    term: &mut T,
    questions: &[Question],
) -> Result<HashMap<i64, Answer>, CliError> {
    let mut answers = HashMap::new();

    for question in questions {
        term.say(&format!(
            "{}{}",
            tinted("| ", &question.color),
            question.text.bold()
        ))?;

        let text = match question.answer_type {
            AnswerType::Text => read_text(term, &question.color)?,
            AnswerType::Numeric => read_numeric(term, &question.color)?,
            AnswerType::MultipleChoice => read_choice(term, question)?,
            AnswerType::Unknown => {
                return Err(StandupError::validation(format!(
                    "question {} has an answer type this client does not handle",
                    question.id
                ))
                .into());
            }
        };

        answers.insert(question.id, Answer { text });
    }

    Ok(answers)
}

/// Free text: lines until an empty one, joined with newlines.
/// Entering nothing at all is a valid (empty) answer.
fn read_text<T: Terminal>(term: &mut T, color: &str) -> Result<String, CliError> {
    let mut lines = Vec::new();
    loop {
        let line = term.prompt(&tinted("> ", color))?;
        if line.is_empty() {
            break;
        }
        lines.push(line);
    }
    Ok(lines.join("\n"))
}

/// Numeric: re-prompt until the line is a non-empty run of decimal
/// digits, then keep it verbatim.
fn read_numeric<T: Terminal>(term: &mut T, color: &str) -> Result<String, CliError> {
    loop {
        let line = term.prompt(&tinted("> ", color))?;
        if !line.is_empty() && line.chars().all(|c| c.is_ascii_digit()) {
            return Ok(line);
        }
        term.say(&"Please input a number".red().to_string())?;
    }
}

/// Single choice: numbered list once, then prompt until an ordinal in
/// range is entered. The answer is the chosen option's literal text.
fn read_choice<T: Terminal>(term: &mut T, question: &Question) -> Result<String, CliError> {
    let choices = &question.answer_choices;
    if choices.is_empty() {
        return Err(StandupError::validation(format!(
            "question {} offers no answer choices",
            question.id
        ))
        .into());
    }

    for (index, choice) in choices.iter().enumerate() {
        term.say(&format!("  ({}) {}", index + 1, choice))?;
    }

    loop {
        let line = term.prompt(&format!("Choose one (1-{}): ", choices.len()))?;
        if let Ok(n) = line.trim().parse::<usize>() {
            if (1..=choices.len()).contains(&n) {
                return Ok(choices[n - 1].clone());
            }
        }
        term.say(&format!(
            "Invalid selection: enter a number between 1 and {}.",
            choices.len()
        ))?;
    }
}

/// Tint a prompt marker with the question's dashboard color. Falls back
/// to the plain marker when the color string is not 6-digit hex.
fn tinted(marker: &str, color: &str) -> String {
    match parse_hex_color(color) {
        Some((r, g, b)) => marker.truecolor(r, g, b).to_string(),
        None => marker.to_string(),
    }
}

fn parse_hex_color(color: &str) -> Option<(u8, u8, u8)> {
    let hex = color.strip_prefix('#').unwrap_or(color);
    if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some((r, g, b))
}
