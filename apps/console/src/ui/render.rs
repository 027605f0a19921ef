use std::io::{self, Write};

use app_core::{
    ConnectionPhase, ConversationLog, DashboardSnapshot, IntegrationRegistry, View,
    ViewCoordinator, SUGGESTIONS,
};
use chrono::{DateTime, Local, Utc};
use serde_json::json;
use shared::{
    domain::{IntegrationId, Role, Section, Trend},
    protocol::{ChatMessage, IntegrationStatus, Notification},
};

use crate::{
    backend_bridge::commands::HELP,
    controller::events::{UiError, UiEvent},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Default)]
pub struct Renderer {
    format: OutputFormat,
}

impl Renderer {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    pub fn write_events<W: Write>(
        &self,
        out: &mut W,
        coordinator: &ViewCoordinator,
        events: &[UiEvent],
    ) -> io::Result<()> {
        for event in events {
            let rendered = match self.format {
                OutputFormat::Text => text_event(coordinator, event),
                OutputFormat::Json => Some(json_event(coordinator, event)),
            };
            if let Some(rendered) = rendered {
                writeln!(out, "{rendered}")?;
            }
        }
        Ok(())
    }
}

fn text_event(coordinator: &ViewCoordinator, event: &UiEvent) -> Option<String> {
    match event {
        UiEvent::Core(notification) => text_notification(notification),
        UiEvent::Redraw => Some(render_view(coordinator)),
        UiEvent::Status(status) => Some(render_status(status)),
        UiEvent::Help => Some(HELP.to_string()),
        UiEvent::Error(err) => Some(render_error(err)),
    }
}

fn json_event(coordinator: &ViewCoordinator, event: &UiEvent) -> String {
    let value = match event {
        UiEvent::Core(notification) => json!(notification),
        UiEvent::Redraw => json!({
            "type": "view",
            "payload": {
                "active": coordinator.is_active(),
                "section": coordinator.section(),
                "title": coordinator.header_title(),
            },
        }),
        UiEvent::Status(status) => json!({ "type": "status", "payload": status }),
        UiEvent::Help => json!({ "type": "help", "payload": HELP }),
        UiEvent::Error(err) => json!({
            "type": "error",
            "payload": {
                "code": err.code(),
                "message": err.message(),
                "hint": err.hint(),
            },
        }),
    };
    value.to_string()
}

fn text_notification(notification: &Notification) -> Option<String> {
    match notification {
        Notification::SessionChanged { active: true } => Some("signed in".into()),
        Notification::SessionChanged { active: false } => Some("signed out".into()),
        Notification::SectionSelected { .. } => None,
        Notification::MessageAppended { message } => Some(render_message(message)),
        Notification::ReplyPending => Some("co-pilot is typing...".into()),
        Notification::DraftUpdated { text: Some(text) } => {
            Some(format!("draft: {text} (`send` to ask)"))
        }
        Notification::DraftUpdated { text: None } => Some("draft cleared".into()),
        Notification::IntegrationPending {
            id,
            target_connected,
        } => {
            let verb = if *target_connected {
                "connecting"
            } else {
                "disconnecting"
            };
            Some(format!("{verb} {}...", id.title()))
        }
        Notification::IntegrationUpdated { id, connected } => Some(format!(
            "{} {}",
            id.title(),
            if *connected { "connected" } else { "disconnected" }
        )),
        Notification::IntegrationCancelled { id, connected } => Some(format!(
            "{} verification cancelled (still {})",
            id.title(),
            if *connected { "connected" } else { "disconnected" }
        )),
    }
}

fn render_error(err: &UiError) -> String {
    match err.hint() {
        Some(hint) => format!("! {} ({hint})", err.message()),
        None => format!("! {}", err.message()),
    }
}

pub fn render_view(coordinator: &ViewCoordinator) -> String {
    let body = match coordinator.view() {
        View::Landing => return render_landing(),
        View::Dashboard(snapshot) => render_dashboard(snapshot),
        View::Integrations(registry) => render_integrations(registry),
        View::Chat(log) => render_chat(log),
    };
    format!(
        "{}\n== {} ==\n{body}",
        render_sidebar(coordinator.section()),
        coordinator.header_title()
    )
}

fn render_landing() -> String {
    [
        "DevProd AI",
        "Measure engineering productivity across every SDLC phase.",
        "Connect Jira, GitHub, and Monday.com, then ask the co-pilot where work gets stuck.",
        "",
        "type `start` to get started",
    ]
    .join("\n")
}

fn render_sidebar(current: Section) -> String {
    Section::SIDEBAR_ORDER
        .iter()
        .map(|section| {
            if *section == current {
                format!("[{}]", section.sidebar_label())
            } else {
                section.sidebar_label().to_string()
            }
        })
        .collect::<Vec<_>>()
        .join("  ")
}

fn render_dashboard(snapshot: &DashboardSnapshot) -> String {
    let mut lines = Vec::new();
    for kpi in snapshot.kpis {
        let arrow = match kpi.trend {
            Trend::Up => "^",
            Trend::Down => "v",
            Trend::Stable => "-",
        };
        lines.push(format!(
            "{:<22} {:>8}  {arrow} {}",
            kpi.title, kpi.value, kpi.change
        ));
    }
    lines.push(String::new());
    lines.push(format!(
        "{:<16} {:>6} {:>7} {:>8}",
        "phase", "hours", "errors", "quality"
    ));
    for metrics in snapshot.phases {
        lines.push(format!(
            "{:<16} {:>6} {:>7} {:>8}",
            metrics.phase.label(),
            metrics.completion_hours,
            metrics.errors,
            metrics.quality
        ));
    }
    lines.push(String::new());
    let trend = snapshot
        .trend
        .iter()
        .map(|point| format!("{} {}/{}", point.month, point.velocity, point.quality))
        .collect::<Vec<_>>()
        .join("  ");
    lines.push(format!("velocity/quality: {trend}"));
    if let Some(slowest) = snapshot.slowest_phase() {
        lines.push(format!(
            "slowest phase: {} ({}h)",
            slowest.phase.label(),
            slowest.completion_hours
        ));
    }
    lines.push(String::new());
    lines.push("AI Insights Engine".into());
    lines.push(format!("  {}", snapshot.insight.headline));
    lines.push(format!("  {}", snapshot.insight.recommendation));
    lines.join("\n")
}

fn render_integrations(registry: &IntegrationRegistry) -> String {
    registry
        .entries()
        .map(|entry| {
            let phase = match entry.phase() {
                ConnectionPhase::Disconnected => "not connected",
                ConnectionPhase::Connecting => "connecting...",
                ConnectionPhase::Connected => "connected",
                ConnectionPhase::Disconnecting => "disconnecting...",
            };
            format!(
                "{} ({}): {phase}\n    {}",
                entry.id.title(),
                entry.id,
                entry.id.description()
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_chat(log: &ConversationLog) -> String {
    let mut lines: Vec<String> = log.messages().iter().map(render_message).collect();
    if log.is_responding() {
        lines.push("co-pilot is typing...".into());
    }
    lines.push(String::new());
    if let Some(draft) = log.draft() {
        lines.push(format!("> {draft}"));
    }
    for (index, suggestion) in SUGGESTIONS.iter().enumerate() {
        lines.push(format!("suggest {}: {}", index + 1, suggestion.label));
    }
    lines.join("\n")
}

fn render_message(message: &ChatMessage) -> String {
    let speaker = match message.role {
        Role::User => "you",
        Role::Assistant => "co-pilot",
    };
    format!(
        "[{}] {speaker}: {}",
        clock_label(message.created_at),
        message.content
    )
}

fn clock_label(at: DateTime<Utc>) -> String {
    at.with_timezone(&Local).format("%H:%M").to_string()
}

fn render_status(status: &IntegrationStatus) -> String {
    IntegrationId::ALL
        .iter()
        .map(|id| {
            let connected = status.get(id).copied().unwrap_or(false);
            format!("{id}: {}", if connected { "connected" } else { "off" })
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signed_out_view_is_landing() {
        let coordinator = ViewCoordinator::default();
        let view = render_view(&coordinator);
        assert!(view.starts_with("DevProd AI"));
        assert!(view.contains("`start`"));
    }

    #[test]
    fn sidebar_brackets_current_section() {
        let mut coordinator = ViewCoordinator::default();
        coordinator.set_session(true);
        coordinator.select_section(Section::Chat);

        let view = render_view(&coordinator);
        assert!(view.starts_with("Dashboard  [AI Assistant]  Integrations"));
        assert!(view.contains("== Chat =="));
        assert!(view.contains("co-pilot: Hi Jane!"));
        assert!(view.contains("suggest 2: Analyze bottlenecks"));
    }

    #[test]
    fn dashboard_lists_kpis_and_phases() {
        let mut coordinator = ViewCoordinator::default();
        coordinator.set_session(true);

        let view = render_view(&coordinator);
        assert!(view.contains("== Analytics Overview =="));
        assert!(view.contains("PR Velocity"));
        assert!(view.contains("Implementation"));
        assert!(view.contains("Jun 70/94"));
        assert!(view.contains("slowest phase: Implementation (85h)"));
    }

    #[test]
    fn dashboard_shows_insight_panel() {
        let mut coordinator = ViewCoordinator::default();
        coordinator.set_session(true);

        let view = render_view(&coordinator);
        assert!(view.contains("AI Insights Engine"));
        assert!(view.contains(
            "Your team's Design velocity is improving, but implementation error density has ticked up in the last 48 hours."
        ));
        assert!(view.contains(
            "Our agents suggest conducting a quick technical peer review on current Implementation tasks to avoid rework later in the sprint."
        ));
    }

    #[test]
    fn chat_view_shows_pending_draft() {
        let mut coordinator = ViewCoordinator::default();
        coordinator.set_session(true);
        coordinator.select_section(Section::Chat);
        coordinator.draft_chat(SUGGESTIONS[2].prompt).expect("draft");

        let view = render_view(&coordinator);
        assert!(view.contains(&format!("> {}", SUGGESTIONS[2].prompt)));
    }

    #[test]
    fn json_errors_carry_code_and_hint() {
        let coordinator = ViewCoordinator::default();
        let renderer = Renderer::new(OutputFormat::Json);
        let err = UiError::from_core(
            crate::controller::events::UiErrorContext::Chat,
            &shared::error::CoreError::SessionInactive,
        );
        let mut out = Vec::new();
        renderer
            .write_events(&mut out, &coordinator, &[UiEvent::Error(err)])
            .expect("write");

        let value: serde_json::Value = serde_json::from_slice(&out).expect("one json line");
        assert_eq!(value["type"], "error");
        assert_eq!(value["payload"]["code"], "session_inactive");
        assert_eq!(value["payload"]["hint"], "type `start` to sign in first");
    }

    #[test]
    fn section_selection_prints_nothing_in_text_mode() {
        assert_eq!(
            text_notification(&Notification::SectionSelected {
                section: Section::Chat
            }),
            None
        );
    }
}
