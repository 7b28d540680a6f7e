//! Command processors.
//!
//! Each command is a stateless request/respond unit: `can_execute` checks
//! the context preconditions (reporting any violation), `execute` runs the
//! command against the repository and console. Failures are reported and
//! absorbed; the only caller-visible signal is the returned bool.

mod get;
mod show;

pub use get::GetCommand;
pub use show::ShowCommand;

use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::ClientConfig;
use crate::console::Console;
use crate::link::Links;
use crate::repository::ResourceRepository;
use crate::transport::HttpResponse;

/// Options supplied by the invoking shell: the target resource location,
/// an optional Accept content type, and an optional output file path.
#[derive(Debug, Clone, Default)]
pub struct CommandContext {
    pub target: Option<String>,
    pub content_type: Option<String>,
    pub entity: Option<String>,
}

impl CommandContext {
    pub fn has_target(&self) -> bool {
        self.target.as_deref().map_or(false, |t| !t.is_empty())
    }

    /// True when any option beyond the target is present.
    pub fn has_options(&self) -> bool {
        self.content_type.is_some() || self.entity.is_some()
    }
}

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("No target resource specified")]
    MissingTargetResource,
    #[error("No output file available for the retrieved entity")]
    MissingEntityPath,
    #[error("Not a LDP resource")]
    NotLdpResource(Links),
    #[error("{message} ({status})")]
    UnexpectedResponseStatus { status: u32, message: String },
    #[error("Could not persist entity ({source})")]
    PersistenceFailure {
        #[from]
        source: std::io::Error,
    },
}

pub trait CommandProcessor {
    /// Validate the context, reporting violations on the console.
    /// No side effects beyond validation.
    fn can_execute<C: Console>(&mut self, context: &CommandContext, console: &mut C) -> bool;

    /// Run the command. Returns false when the command could not complete
    /// as requested; details have already been reported on the console.
    fn execute<C: Console, R: ResourceRepository>(
        &mut self,
        context: &CommandContext,
        repository: &mut R,
        console: &mut C,
        config: &ClientConfig,
    ) -> bool;
}

/// Generic reporter for a failed response or command step.
pub fn report_command_error<C: Console>(console: &mut C, error: &CommandError) {
    match error {
        CommandError::NotLdpResource(links) => {
            console.error("Not a LDP resource\n");
            crate::console::show_links(console, links);
        }
        other => {
            console.error(&format!("ERROR: {other}\n"));
        }
    }
}

/// Build the unexpected-response condition for a non-200 reply.
pub fn unexpected_response(response: &HttpResponse, message: &str) -> CommandError {
    CommandError::UnexpectedResponseStatus {
        status: response.status,
        message: message.to_string(),
    }
}

/// First `resource_<n>.out` name in `dir` that is not already taken.
/// Returns None when the namespace is exhausted.
pub fn next_resource_file(dir: &Path) -> Option<PathBuf> {
    (0..10_000)
        .map(|n| dir.join(format!("resource_{n}.out")))
        .find(|candidate| !candidate.exists())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::{RecordingConsole, Tag};

    #[test]
    fn context_target_predicate() {
        assert!(!CommandContext::default().has_target());
        let empty = CommandContext {
            target: Some(String::new()),
            ..Default::default()
        };
        assert!(!empty.has_target());
        let ctx = CommandContext {
            target: Some("http://x/r1".to_string()),
            ..Default::default()
        };
        assert!(ctx.has_target());
        assert!(!ctx.has_options());
    }

    #[test]
    fn unexpected_response_renders_status() {
        let response = HttpResponse {
            status: 404,
            headers: vec![],
            body: None,
            content_type: None,
        };
        let err = unexpected_response(&response, "Cannot retrieve resource");
        let mut console = RecordingConsole::new();
        report_command_error(&mut console, &err);
        let out = console.rendered(Tag::Error);
        assert!(out.contains("Cannot retrieve resource"));
        assert!(out.contains("404"));
    }

    #[test]
    fn next_resource_file_skips_existing_names() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("resource_0.out"), "taken").unwrap();
        let next = next_resource_file(dir.path()).unwrap();
        assert_eq!(next, dir.path().join("resource_1.out"));
    }
}
