//! `get` command: retrieve a resource, refresh the cache, persist the body.

use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

use crate::command::{
    next_resource_file, report_command_error, unexpected_response, CommandContext, CommandError,
    CommandProcessor,
};
use crate::config::ClientConfig;
use crate::console::{show_links, show_resource_content, show_resource_metadata, Console};
use crate::link::{Links, LDP_RESOURCE};
use crate::repository::ResourceRepository;
use crate::transport::{self, HttpResponse};

/// Single synchronous GET against an LDP server.
///
/// The response must declare itself an LDP resource through a
/// `Link: <...ldp#Resource>; rel="type"` header; anything else is rejected
/// without touching the cache. A 200 refreshes (or creates) the cached
/// record and writes the entity body to the resolved output file.
#[derive(Debug, Default)]
pub struct GetCommand {
    location: String,
    entity_path: Option<PathBuf>,
}

impl GetCommand {
    pub fn new() -> Self {
        Self::default()
    }

    fn resolve_requirements(&mut self, context: &CommandContext) -> Result<(), CommandError> {
        let target = context
            .target
            .as_deref()
            .filter(|t| !t.is_empty())
            .ok_or(CommandError::MissingTargetResource)?;
        self.location = target.to_string();

        self.entity_path = Some(match &context.entity {
            Some(path) => PathBuf::from(path),
            None => {
                let dir =
                    std::env::current_dir().map_err(|_| CommandError::MissingEntityPath)?;
                next_resource_file(&dir).ok_or(CommandError::MissingEntityPath)?
            }
        });
        Ok(())
    }

    fn accept_header(context: &CommandContext, config: &ClientConfig) -> String {
        let content_type = context
            .content_type
            .as_deref()
            .unwrap_or(&config.default_content_type);
        format!("{content_type}; charset=utf-8")
    }

    fn process_response<C: Console, R: ResourceRepository>(
        &self,
        response: &HttpResponse,
        repository: &mut R,
        console: &mut C,
    ) -> Result<(), CommandError> {
        let links = Links::from_response(response);
        if !links.has_link("type", LDP_RESOURCE) {
            return Err(CommandError::NotLdpResource(links));
        }

        if response.status != 200 {
            return Err(unexpected_response(response, "Cannot retrieve resource"));
        }

        let mut resource = match repository.resolve_resource(&self.location) {
            Some(resource) => resource,
            None => repository.create_resource(&self.location),
        };
        resource.refresh_from(response);
        repository.update_resource(resource.clone());

        console.message("Resource retrieved:\n");
        show_resource_metadata(console, &resource);
        show_links(console, &links);
        show_resource_content(console, &resource);

        if let Some(entity) = &resource.entity {
            self.persist(console, entity);
        }
        Ok(())
    }

    /// Write `content` to the resolved output file, truncating any previous
    /// content. Failures are reported and absorbed; the cache update above
    /// already completed.
    fn persist<C: Console>(&self, console: &mut C, content: &str) {
        let Some(path) = &self.entity_path else {
            report_command_error(console, &CommandError::MissingEntityPath);
            return;
        };
        let written = File::options()
            .write(true)
            .create(true)
            .truncate(true)
            .open(path)
            .and_then(|mut file| file.write_all(content.as_bytes()));
        match written {
            Ok(()) => {
                console
                    .message("Content persisted to ")
                    .metadata(&path.display().to_string())
                    .message("\n");
            }
            Err(e) => {
                report_command_error(console, &CommandError::PersistenceFailure { source: e });
            }
        }
    }
}

impl CommandProcessor for GetCommand {
    fn can_execute<C: Console>(&mut self, context: &CommandContext, console: &mut C) -> bool {
        match self.resolve_requirements(context) {
            Ok(()) => true,
            Err(e) => {
                report_command_error(console, &e);
                false
            }
        }
    }

    fn execute<C: Console, R: ResourceRepository>(
        &mut self,
        context: &CommandContext,
        repository: &mut R,
        console: &mut C,
        config: &ClientConfig,
    ) -> bool {
        let accept = Self::accept_header(context, config);
        console.message("Retrieving resource...\n");
        tracing::debug!("GET {} accept={}", self.location, accept);

        let response = match transport::get(&self.location, &accept, config) {
            Ok(response) => response,
            Err(e) => {
                console.error(&format!("ERROR: {e:#}\n"));
                return false;
            }
        };
        tracing::debug!("GET {} returned HTTP {}", self.location, response.status);

        match self.process_response(&response, repository, console) {
            Ok(()) => true,
            Err(e) => {
                report_command_error(console, &e);
                false
            }
        }
    }
}
