use roadmap_llm::ChatMessage;

pub const SYSTEM_PROMPT: &str = "You are an expert learning advisor who creates structured, practical learning roadmaps for students. Focus on free resources and hands-on learning.";

/// Substituted when the learner leaves their prior knowledge blank.
pub const DEFAULT_KNOWLEDGE: &str = "Beginner with no prior experience";

pub fn build_roadmap_prompt(topic: &str, current_knowledge: Option<&str>) -> String {
    let knowledge = current_knowledge
        .filter(|knowledge| !knowledge.trim().is_empty())
        .unwrap_or(DEFAULT_KNOWLEDGE);

    format!(
        "Create a detailed 5-6 month learning roadmap for someone who wants to learn {topic}.

Current knowledge level: {knowledge}

Please structure the roadmap as follows:
- Month-by-month breakdown (5-6 months)
- Weekly goals for each month
- Specific topics to cover
- Recommended free resources (courses, documentation, tutorials, YouTube channels)
- Practice projects for each month
- Milestones to track progress

Make it practical, actionable, and suitable for self-paced learning. Include both theoretical concepts and hands-on projects."
    )
}

pub fn build_roadmap_messages(topic: &str, current_knowledge: Option<&str>) -> Vec<ChatMessage> {
    vec![
        ChatMessage::system(SYSTEM_PROMPT),
        ChatMessage::user(build_roadmap_prompt(topic, current_knowledge)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use roadmap_llm::Role;

    #[test]
    fn prompt_contains_topic_and_default_knowledge_when_empty() {
        let prompt = build_roadmap_prompt("Machine Learning", Some(""));

        assert!(prompt.contains("learn Machine Learning"));
        assert!(prompt.contains("Current knowledge level: Beginner with no prior experience"));
    }

    #[test]
    fn prompt_uses_default_knowledge_when_absent_or_blank() {
        for knowledge in [None, Some("   "), Some("\n\t")] {
            let prompt = build_roadmap_prompt("Rust", knowledge);
            assert!(prompt.contains(DEFAULT_KNOWLEDGE), "knowledge: {knowledge:?}");
        }
    }

    #[test]
    fn prompt_embeds_supplied_knowledge() {
        let prompt = build_roadmap_prompt("Rust", Some("I know basic HTML/CSS"));

        assert!(prompt.contains("Current knowledge level: I know basic HTML/CSS"));
        assert!(!prompt.contains(DEFAULT_KNOWLEDGE));
    }

    #[test]
    fn prompt_keeps_supplied_knowledge_untrimmed() {
        let supplied = "  I know Python\n";
        let prompt = build_roadmap_prompt("Rust", Some(supplied));

        assert!(prompt.contains(supplied));
        assert!(prompt.contains("Current knowledge level:   I know Python\n"));
    }

    #[test]
    fn prompt_asks_for_month_by_month_plan() {
        let prompt = build_roadmap_prompt("Go", None);

        assert!(prompt.starts_with("Create a detailed 5-6 month learning roadmap"));
        assert!(prompt.contains("Month-by-month breakdown"));
        assert!(prompt.contains("Practice projects for each month"));
    }

    #[test]
    fn prompt_is_deterministic() {
        assert_eq!(
            build_roadmap_prompt("Go", Some("some")),
            build_roadmap_prompt("Go", Some("some"))
        );
    }

    #[test]
    fn messages_are_system_then_user() {
        let messages = build_roadmap_messages("Rust", None);

        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].role, Role::System);
        assert_eq!(messages[0].content, SYSTEM_PROMPT);
        assert_eq!(messages[1].role, Role::User);
        assert!(messages[1].content.contains("learn Rust"));
    }
}
