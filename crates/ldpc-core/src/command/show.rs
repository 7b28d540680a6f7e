//! `show` command: display a cached resource without touching the network.

use crate::command::{CommandContext, CommandProcessor};
use crate::config::ClientConfig;
use crate::console::{show_resource_content, show_resource_metadata, Console};
use crate::repository::ResourceRepository;

#[derive(Debug, Default)]
pub struct ShowCommand;

impl ShowCommand {
    pub fn new() -> Self {
        Self
    }
}

impl CommandProcessor for ShowCommand {
    fn can_execute<C: Console>(&mut self, context: &CommandContext, console: &mut C) -> bool {
        if !context.has_target() {
            console.error("ERROR: No target resource specified\n");
            false
        } else if context.has_options() {
            console.error("ERROR: No command options allowed\n");
            false
        } else {
            true
        }
    }

    fn execute<C: Console, R: ResourceRepository>(
        &mut self,
        context: &CommandContext,
        repository: &mut R,
        console: &mut C,
        _config: &ClientConfig,
    ) -> bool {
        let target = context.target.as_deref().unwrap_or_default();
        match repository.resolve_resource(target) {
            None => {
                console
                    .error("ERROR: Unknown resource '")
                    .metadata(target)
                    .error("'\n");
                false
            }
            Some(resource) => {
                console
                    .message("Cached resource [")
                    .metadata(target)
                    .message("]\n");
                show_resource_metadata(console, &resource);
                show_resource_content(console, &resource);
                true
            }
        }
    }
}
