//! `ldpc show <target>` – display a cached resource.

use anyhow::{bail, Result};
use ldpc_core::command::{CommandContext, CommandProcessor, ShowCommand};
use ldpc_core::config::ClientConfig;
use ldpc_core::console::StdConsole;
use ldpc_core::repository::FileRepository;

pub fn run_show(cfg: &ClientConfig, target: String) -> Result<()> {
    let context = CommandContext {
        target: Some(target),
        content_type: None,
        entity: None,
    };
    let mut console = StdConsole::new();
    let mut command = ShowCommand::new();
    if !command.can_execute(&context, &mut console) {
        bail!("command cannot execute");
    }

    let mut repository = FileRepository::load_or_default(&FileRepository::default_path()?)?;
    if !command.execute(&context, &mut repository, &mut console, cfg) {
        bail!("command failed");
    }
    Ok(())
}
