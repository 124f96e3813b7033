//! Interactive console: reads questions line by line and prints answers

use std::io::{BufRead, Write};

use crate::answer::Answer;
use crate::error::Result;
use crate::qa::{QaSystem, SAMPLE_QUESTIONS};

const RULE: &str = "============================================================";
const THIN_RULE: &str = "------------------------------------------------------------";

/// Runs the prompt loop until `quit`, `exit`, `q` or end of input
pub fn run<R: BufRead, W: Write>(system: &QaSystem, input: R, mut output: W) -> Result<()> {
    writeln!(output, "{}", RULE)?;
    writeln!(output, "Agricultural & Climate Data Q&A System")?;
    writeln!(output, "Data sources: data.gov.in (Ministry of Agriculture & IMD)")?;
    writeln!(output, "{}", RULE)?;
    writeln!(output)?;
    writeln!(output, "Sample Questions:")?;
    for (i, question) in SAMPLE_QUESTIONS.iter().enumerate() {
        writeln!(output, "{}. {}", i + 1, question)?;
    }

    let mut lines = input.lines();
    loop {
        write!(output, "\nYour question (or 'quit' to exit): ")?;
        output.flush()?;

        let Some(line) = lines.next() else {
            writeln!(output)?;
            break;
        };
        let line = line?;
        let question = line.trim();

        if is_quit(question) {
            writeln!(output, "Thank you for using the system!")?;
            break;
        }
        if question.is_empty() {
            continue;
        }

        writeln!(output, "\nProcessing...")?;
        let answer = system.answer(question);
        write_answer(&mut output, &answer)?;
    }

    Ok(())
}

fn is_quit(input: &str) -> bool {
    ["quit", "exit", "q"]
        .iter()
        .any(|word| input.eq_ignore_ascii_case(word))
}

/// Prints an answer block: text, optional data, sources
pub fn write_answer<W: Write>(output: &mut W, answer: &Answer) -> Result<()> {
    writeln!(output, "\n{}", RULE)?;
    writeln!(output, "ANSWER:")?;
    writeln!(output, "{}", RULE)?;
    writeln!(output, "{}", answer.answer)?;

    if answer.has_data() {
        writeln!(output, "\n{}", THIN_RULE)?;
        writeln!(output, "DATA:")?;
        writeln!(output, "{}", THIN_RULE)?;
        writeln!(output, "{}", serde_json::to_string_pretty(&answer.data)?)?;
    }

    writeln!(output, "\n{}", THIN_RULE)?;
    writeln!(output, "SOURCES:")?;
    writeln!(output, "{}", THIN_RULE)?;
    for source in &answer.sources {
        writeln!(output, "• {}", source)?;
    }
    writeln!(output, "{}", RULE)?;

    Ok(())
}
