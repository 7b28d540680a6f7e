//! User-facing output sink.
//!
//! Commands report through a single sink with semantic tags instead of
//! printing directly; the messages chain fluently for multi-part lines
//! ("Content persisted to " + path + newline). `StdConsole` maps tags to
//! stdout/stderr; `RecordingConsole` captures output for assertions.

use crate::link::Links;
use crate::resource::Resource;

/// Semantic tag for one chunk of output. Text is written raw (no implied
/// newline); callers terminate lines explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
    /// Plain user-facing message.
    Message,
    /// Emphasized metadata (locations, tags, dates).
    Metadata,
    /// Raw payload data (entity bodies).
    Data,
    /// Error reporting.
    Error,
}

pub trait Console {
    fn write(&mut self, tag: Tag, text: &str);

    fn message(&mut self, text: &str) -> &mut Self {
        self.write(Tag::Message, text);
        self
    }

    fn metadata(&mut self, text: &str) -> &mut Self {
        self.write(Tag::Metadata, text);
        self
    }

    fn data(&mut self, text: &str) -> &mut Self {
        self.write(Tag::Data, text);
        self
    }

    fn error(&mut self, text: &str) -> &mut Self {
        self.write(Tag::Error, text);
        self
    }
}

/// Console writing messages to stdout and errors to stderr.
#[derive(Debug, Default)]
pub struct StdConsole;

impl StdConsole {
    pub fn new() -> Self {
        Self
    }
}

impl Console for StdConsole {
    fn write(&mut self, tag: Tag, text: &str) {
        match tag {
            Tag::Error => eprint!("{text}"),
            _ => print!("{text}"),
        }
    }
}

/// Console that records every write, for tests.
#[derive(Debug, Default)]
pub struct RecordingConsole {
    entries: Vec<(Tag, String)>,
}

impl RecordingConsole {
    pub fn new() -> Self {
        Self::default()
    }

    /// All text written under `tag`, concatenated.
    pub fn rendered(&self, tag: Tag) -> String {
        self.entries
            .iter()
            .filter(|(t, _)| *t == tag)
            .map(|(_, s)| s.as_str())
            .collect()
    }

    /// Everything written, regardless of tag.
    pub fn rendered_all(&self) -> String {
        self.entries.iter().map(|(_, s)| s.as_str()).collect()
    }
}

impl Console for RecordingConsole {
    fn write(&mut self, tag: Tag, text: &str) {
        self.entries.push((tag, text.to_string()));
    }
}

/// Print every link relation of a response.
pub fn show_links<C: Console>(console: &mut C, links: &Links) {
    if links.is_empty() {
        console.message("No links present\n");
        return;
    }
    console.message("Links:\n");
    for link in links.iter() {
        console
            .message("- ")
            .metadata(&link.rel)
            .message(" : ")
            .metadata(&link.target)
            .message("\n");
    }
}

/// Print the cache-validation metadata of a resource.
pub fn show_resource_metadata<C: Console>(console: &mut C, resource: &Resource) {
    show_field(console, "- Location......", Some(&resource.location));
    show_field(console, "- Content type..", resource.content_type.as_deref());
    show_field(console, "- Entity tag....", resource.entity_tag.as_deref());
    show_field(console, "- Last modified.", resource.last_modified.as_deref());
}

fn show_field<C: Console>(console: &mut C, label: &str, value: Option<&str>) {
    console.message(label).message(": ");
    match value {
        Some(v) => console.metadata(v),
        None => console.metadata("<unknown>"),
    };
    console.message("\n");
}

/// Print the entity body of a resource, if any.
pub fn show_resource_content<C: Console>(console: &mut C, resource: &Resource) {
    match &resource.entity {
        Some(entity) => {
            console.message("Content:\n").data(entity);
            if !entity.ends_with('\n') {
                console.data("\n");
            }
        }
        None => {
            console.message("No content available\n");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fluent_chain_records_tags_in_order() {
        let mut console = RecordingConsole::new();
        console
            .message("Content persisted to ")
            .metadata("/tmp/resource_0.out")
            .data("\n");
        assert_eq!(console.rendered(Tag::Message), "Content persisted to ");
        assert_eq!(console.rendered(Tag::Metadata), "/tmp/resource_0.out");
        assert_eq!(
            console.rendered_all(),
            "Content persisted to /tmp/resource_0.out\n"
        );
    }

    #[test]
    fn metadata_display_marks_missing_fields() {
        let mut console = RecordingConsole::new();
        let mut resource = Resource::new("http://x/r1");
        resource.entity_tag = Some("v1".to_string());
        show_resource_metadata(&mut console, &resource);

        let out = console.rendered_all();
        assert!(out.contains("http://x/r1"));
        assert!(out.contains("v1"));
        assert!(out.contains("<unknown>"));
    }

    #[test]
    fn content_display_handles_missing_entity() {
        let mut console = RecordingConsole::new();
        show_resource_content(&mut console, &Resource::new("http://x/r1"));
        assert!(console.rendered_all().contains("No content available"));
    }

    #[test]
    fn content_display_terminates_line() {
        let mut console = RecordingConsole::new();
        let mut resource = Resource::new("http://x/r1");
        resource.entity = Some("abc".to_string());
        show_resource_content(&mut console, &resource);
        assert_eq!(console.rendered(Tag::Data), "abc\n");
    }
}
