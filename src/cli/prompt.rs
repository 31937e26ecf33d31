//! Line-mode wizard
//!
//! Walks the step registry with plain stdin/stdout prompts, for terminals
//! where the full-screen interface is unwanted (CI, screen readers, pipes).
//! Same state machine underneath as the TUI.

use std::io::{self, Write};
use std::path::Path;

use crate::error::{IntakeError, IntakeResult};
use crate::export::write_lead_json;
use crate::wizard::{Advance, ContactPart, StepDescriptor, StepKind, Wizard};

/// Run the wizard as a sequence of prompts
pub fn run_prompt_wizard(output: Option<&Path>) -> IntakeResult<()> {
    let mut wizard = Wizard::new();

    println!();
    println!("===========================================");
    println!("  Microcement Project Intake");
    println!("===========================================");
    println!();
    println!("Answer a few questions about your project.");
    println!("Enter 'b' at any prompt to go back a step.");

    while let Some(step) = wizard.current_step() {
        println!();
        println!(
            "{}  (step {} of {})",
            step.question,
            wizard.step_index() + 1,
            wizard.step_count()
        );

        match step.kind {
            StepKind::MultiChoice => run_multi_choice(&mut wizard, step)?,
            StepKind::SingleChoice => run_single_choice(&mut wizard, step)?,
            StepKind::Number => run_number(&mut wizard, step)?,
            StepKind::ContactTriplet => run_contact(&mut wizard)?,
        }
    }

    println!();
    println!("Thank you!");
    println!("We've received your information and will be in touch soon.");

    if let Some(path) = output {
        let lead = write_lead_json(&wizard, path)?;
        println!();
        println!("Lead {} written to {}", lead.id, path.display());
    }

    Ok(())
}

/// Toggle options by number until a confirming empty line
fn run_multi_choice(wizard: &mut Wizard, step: &StepDescriptor) -> IntakeResult<()> {
    loop {
        for (i, option) in step.options.iter().enumerate() {
            let marker = if wizard.answers().is_selected(step.field, option) {
                "[x]"
            } else {
                "[ ]"
            };
            println!("  {} {} {}", i + 1, marker, option);
        }

        let input = prompt_string("Toggle by number, empty line to continue: ")?;
        match input.as_str() {
            "" => {
                if wizard.advance() != Advance::Rejected {
                    return Ok(());
                }
                println!("Select at least one option.");
            }
            "b" => {
                wizard.retreat();
                return Ok(());
            }
            _ => match parse_option_index(&input, step.options.len()) {
                Some(i) => wizard.toggle_option(step.options[i]),
                None => println!("Enter a number between 1 and {}.", step.options.len()),
            },
        }
    }
}

/// Pick exactly one option; the selection advances immediately
fn run_single_choice(wizard: &mut Wizard, step: &StepDescriptor) -> IntakeResult<()> {
    loop {
        for (i, option) in step.options.iter().enumerate() {
            println!("  {} {}", i + 1, option);
        }

        let input = prompt_string(&format!("Select [1-{}]: ", step.options.len()))?;
        match input.as_str() {
            "b" => {
                wizard.retreat();
                return Ok(());
            }
            _ => match parse_option_index(&input, step.options.len()) {
                Some(i) => {
                    wizard.select_option(step.options[i]);
                    return Ok(());
                }
                None => println!("Enter a number between 1 and {}.", step.options.len()),
            },
        }
    }
}

/// Free-form numeric text; the value is stored as entered
fn run_number(wizard: &mut Wizard, step: &StepDescriptor) -> IntakeResult<()> {
    let placeholder = step.placeholder.unwrap_or("Value");
    loop {
        let input = prompt_string(&format!("{}: ", placeholder))?;
        if input == "b" {
            wizard.retreat();
            return Ok(());
        }
        wizard.set_current_text(input);
        if wizard.advance() != Advance::Rejected {
            return Ok(());
        }
        println!("Enter a value.");
    }
}

/// Three prompts; name and email gate the final submit
fn run_contact(wizard: &mut Wizard) -> IntakeResult<()> {
    loop {
        for part in ContactPart::ALL {
            let current = wizard.answers().text(part.field());
            let prompt = if current.is_empty() {
                format!("{}: ", part.placeholder())
            } else {
                format!("{} [{}]: ", part.placeholder(), current)
            };
            let input = prompt_string(&prompt)?;
            if input == "b" {
                wizard.retreat();
                return Ok(());
            }
            if !input.is_empty() {
                wizard.set_contact(part, input);
            }
        }

        if wizard.advance() != Advance::Rejected {
            return Ok(());
        }
        println!("Name and email are required.");
    }
}

/// Parse a 1-based option number
fn parse_option_index(input: &str, count: usize) -> Option<usize> {
    input
        .parse::<usize>()
        .ok()
        .filter(|&n| n >= 1 && n <= count)
        .map(|n| n - 1)
}

/// Prompt for a line of input
fn prompt_string(prompt: &str) -> IntakeResult<String> {
    print!("{}", prompt);
    io::stdout()
        .flush()
        .map_err(|e| IntakeError::Io(e.to_string()))?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| IntakeError::Io(e.to_string()))?;

    Ok(input.trim().to_string())
}
