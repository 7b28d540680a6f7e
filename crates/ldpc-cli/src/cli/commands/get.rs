//! `ldpc get <target>` – retrieve and cache a resource.

use anyhow::{bail, Result};
use ldpc_core::command::{CommandContext, CommandProcessor, GetCommand};
use ldpc_core::config::ClientConfig;
use ldpc_core::console::StdConsole;
use ldpc_core::repository::FileRepository;

pub fn run_get(
    cfg: &ClientConfig,
    target: String,
    content_type: Option<String>,
    output: Option<String>,
) -> Result<()> {
    let context = CommandContext {
        target: Some(target),
        content_type,
        entity: output,
    };
    let mut console = StdConsole::new();
    let mut command = GetCommand::new();
    if !command.can_execute(&context, &mut console) {
        bail!("command cannot execute");
    }

    let mut repository = FileRepository::load_or_default(&FileRepository::default_path()?)?;
    let ok = command.execute(&context, &mut repository, &mut console, cfg);
    repository.save()?;
    if !ok {
        bail!("command failed");
    }
    Ok(())
}
