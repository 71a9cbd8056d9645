//! Interactive confirmation between report blocks.

use crate::core::templates::{render_template, TemplateContext, TEMPLATES};
use std::io::{self, BufRead, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptAnswer {
    Continue,
    /// Input was closed or interrupted
    Abort,
}

/// Print the continue prompt to `out` and wait for a line on `input`
pub fn wait_for_enter<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> PromptAnswer {
    let prompt = render_template(&TEMPLATES.prompt, &TemplateContext::default());
    if writeln!(out, "{prompt}").and_then(|_| out.flush()).is_err() {
        return PromptAnswer::Abort;
    }

    let mut line = String::new();
    match input.read_line(&mut line) {
        Ok(0) => PromptAnswer::Abort,
        Ok(_) => PromptAnswer::Continue,
        Err(e) => {
            log::debug!("Prompt input interrupted: {e}");
            PromptAnswer::Abort
        }
    }
}

/// Prompt on the terminal; an interrupted or closed stdin ends the process
/// quietly with a success status
pub fn question() {
    let stdin = io::stdin();
    let stdout = io::stdout();
    if wait_for_enter(&mut stdin.lock(), &mut stdout.lock()) == PromptAnswer::Abort {
        println!();
        std::process::exit(0);
    }
}
