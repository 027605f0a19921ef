//! Canned assistant replies selected by keyword match.

pub const DESIGN_RESPONSE: &str = "Looking at the Jira data, Design tasks are currently averaging 60 hours, which is 25% slower than the previous sprint. This is largely due to three complex UI components still in 'Peer Review' status.";

pub const BOTTLENECK_RESPONSE: &str = "The primary bottleneck right now is the Implementation phase of the 'Auth Redesign' epic. Code review response times in GitHub have increased to an average of 14 hours over the last 3 days.";

pub const DEFAULT_RESPONSE: &str = "I've analyzed the recent trends. Overall velocity is up, but error density in implementation is slightly above the threshold. I recommend prioritizing bug squashing for the next 24 hours.";

/// Checked in order; the first keyword found in the lowercased query wins.
const RULES: &[(&str, &str)] = &[
    ("design", DESIGN_RESPONSE),
    ("bottleneck", BOTTLENECK_RESPONSE),
];

pub fn classify(query: &str) -> &'static str {
    let lower = query.to_lowercase();
    RULES
        .iter()
        .find(|(keyword, _)| lower.contains(keyword))
        .map(|(_, response)| *response)
        .unwrap_or(DEFAULT_RESPONSE)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Suggestion {
    pub label: &'static str,
    pub prompt: &'static str,
}

pub const SUGGESTIONS: [Suggestion; 3] = [
    Suggestion {
        label: "Compare phases",
        prompt: "Can you compare the velocity of the last 3 phases?",
    },
    Suggestion {
        label: "Analyze bottlenecks",
        prompt: "What are the main bottlenecks in our current sprint?",
    },
    Suggestion {
        label: "High error density",
        prompt: "Why is the error density high in implementation?",
    },
];

#[cfg(test)]
#[path = "tests/classifier_tests.rs"]
mod tests;
