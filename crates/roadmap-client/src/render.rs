use colored::Colorize;

use crate::controller::FormState;
use crate::notice::{Notice, NoticeKind};

pub const ROADMAP_HEADING: &str = "Your Personalized Roadmap";
pub const SUBMIT_LABEL: &str = "Generate Roadmap";
pub const SUBMIT_LABEL_BUSY: &str = "Generating Your Roadmap...";

pub fn submit_label(state: &FormState) -> &'static str {
    if state.is_loading {
        SUBMIT_LABEL_BUSY
    } else {
        SUBMIT_LABEL
    }
}

/// The roadmap section, or `None` when there is nothing to show.
///
/// The roadmap text is emitted exactly as received; markdown is not
/// interpreted.
pub fn render_roadmap(state: &FormState) -> Option<String> {
    let roadmap = state.roadmap.as_deref()?;
    if roadmap.is_empty() {
        return None;
    }

    let rule = "─".repeat(ROADMAP_HEADING.chars().count());
    Some(format!("{ROADMAP_HEADING}\n{rule}\n{roadmap}"))
}

pub fn render_notice(notice: &Notice) -> String {
    let text = notice.to_string();
    match notice.kind {
        NoticeKind::Success => format!("✅ {}", text.green()),
        NoticeKind::Failure | NoticeKind::Validation => format!("❌ {}", text.red()),
    }
}
