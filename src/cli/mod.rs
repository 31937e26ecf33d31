//! CLI command handlers
//!
//! Bridges clap argument parsing with the wizard core for the non-TUI
//! surfaces: the plain prompt mode and the registry listing.

pub mod prompt;

use crate::wizard::images::option_image_path;
use crate::wizard::registry;

pub use prompt::run_prompt_wizard;

/// Print the step registry
///
/// With `images` set, each option also shows the asset path the web front
/// end derives from its label.
pub fn handle_steps_command(images: bool) {
    let steps = registry::steps();
    println!("Intake wizard steps ({} total)", steps.len());
    println!();

    for step in steps {
        println!("{} [{}]", step.question, step.kind);
        for option in step.options {
            if images {
                println!("  - {} ({})", option, option_image_path(option));
            } else {
                println!("  - {}", option);
            }
        }
        if let Some(placeholder) = step.placeholder {
            println!("  ({})", placeholder);
        }
        if step.kind == registry::StepKind::ContactTriplet {
            for (_, label) in registry::CONTACT_FIELDS {
                println!("  - {}", label);
            }
        }
        println!();
    }
}
