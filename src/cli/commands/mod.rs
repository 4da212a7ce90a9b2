//! Command execution functions coordinating both pipelines.
//!
//! One file per subcommand; this module owns dispatch and argument
//! validation feedback.

mod dmg;
mod icons;

use crate::cli::{Args, Command, OutputManager};
use crate::error::Result;

/// Execute the main command based on parsed arguments
pub async fn execute_command(args: Args) -> Result<i32> {
    // Validate arguments
    if let Err(validation_error) = args.validate() {
        // Create output for validation errors (never quiet)
        let output = OutputManager::new(false);
        output.error(&format!("Invalid arguments: {}", validation_error));
        return Ok(1);
    }

    let output = OutputManager::new(false);

    match &args.command {
        Command::Icons { source, project } => {
            icons::execute_icons(source, project.as_deref(), &output).await
        }
        Command::Dmg { app } => dmg::execute_dmg(app.as_deref(), &output).await,
    }
}
