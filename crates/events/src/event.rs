//! Event and comment records.

use serde::{Deserialize, Serialize};

/// A comment attached to an event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    author: String,
    text: String,
}

impl Comment {
    /// Creates a new comment.
    pub fn new(author: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            author: author.into(),
            text: text.into(),
        }
    }

    /// Returns the comment author.
    pub fn author(&self) -> &str {
        &self.author
    }

    /// Returns the comment text.
    pub fn text(&self) -> &str {
        &self.text
    }
}

/// One calendar event.
///
/// Events carry no identity beyond their position within a bucket, and
/// there is no de-duplication: repeated identical titles are allowed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    title: String,
    author: String,
    description: String,
    /// Absent in older stored documents, so it defaults to empty.
    #[serde(default)]
    comments: Vec<Comment>,
}

impl Event {
    /// Creates a new event with no comments.
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            description: description.into(),
            comments: Vec::new(),
        }
    }

    /// Replaces the comment sequence.
    pub fn with_comments(mut self, comments: Vec<Comment>) -> Self {
        self.comments = comments;
        self
    }

    /// Returns the event title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the event author.
    pub fn author(&self) -> &str {
        &self.author
    }

    /// Returns the event description.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the comments in insertion order.
    pub fn comments(&self) -> &[Comment] {
        &self.comments
    }

    /// Appends a comment.
    pub fn push_comment(&mut self, comment: Comment) {
        self.comments.push(comment);
    }
}
