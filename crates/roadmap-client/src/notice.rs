use std::fmt;

pub const TOPIC_REQUIRED_TITLE: &str = "Topic required";
pub const TOPIC_REQUIRED_DESCRIPTION: &str = "Please enter what you want to learn";
pub const SUCCESS_TITLE: &str = "Success!";
pub const SUCCESS_DESCRIPTION: &str = "Your personalized roadmap is ready";
pub const FAILURE_TITLE: &str = "Error";
pub const GENERIC_FAILURE_DESCRIPTION: &str = "Failed to generate roadmap. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Failure,
    Validation,
}

/// A transient user-facing message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
    pub description: String,
}

impl Notice {
    pub fn topic_required() -> Self {
        Self {
            kind: NoticeKind::Validation,
            title: TOPIC_REQUIRED_TITLE.to_string(),
            description: TOPIC_REQUIRED_DESCRIPTION.to_string(),
        }
    }

    pub fn roadmap_ready() -> Self {
        Self {
            kind: NoticeKind::Success,
            title: SUCCESS_TITLE.to_string(),
            description: SUCCESS_DESCRIPTION.to_string(),
        }
    }

    pub fn failure(description: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Failure,
            title: FAILURE_TITLE.to_string(),
            description: description.into(),
        }
    }

    pub fn generic_failure() -> Self {
        Self::failure(GENERIC_FAILURE_DESCRIPTION)
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.title, self.description)
    }
}
