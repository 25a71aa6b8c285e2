//! Keyword-matching stand-in for an AI assistant.

const PREVIEW_CHARS: usize = 50;

/// Picks the canned assistant reply for a user message. First match wins.
pub fn respond(message: &str) -> String {
    let lowered = message.to_lowercase();

    if lowered.contains("button") {
        "I've added a button component to your App.tsx file. The button uses our design system with the primary blue color.".to_string()
    } else if lowered.contains("navbar") || lowered.contains("navigation") {
        "I've created a responsive navigation bar with your brand colors. It includes mobile menu support.".to_string()
    } else if lowered.contains("deploy") {
        "To deploy your project, click the Deploy button in the top right corner.".to_string()
    } else {
        let preview: String = message.chars().take(PREVIEW_CHARS).collect();
        format!(
            "I understand you want to {}. Let me help you build that component.",
            preview
        )
    }
}

/// Reply used by the `/messages` resource.
pub fn echo(content: &str) -> String {
    format!("This is a mock response to: {}", content)
}
