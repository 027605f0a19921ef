//! Applies console commands to the coordinator and pumps its clock.

use std::io::Write;

use app_core::ViewCoordinator;
use shared::{error::CoreError, protocol::UserAction};
use tokio::{
    sync::mpsc::Receiver,
    time::{self, Duration, Instant, MissedTickBehavior},
};
use tracing::debug;

use crate::{
    backend_bridge::commands::{parse_line, ConsoleCommand},
    controller::events::{UiError, UiErrorContext, UiEvent},
    ui::render::Renderer,
};

pub fn dispatch_command(coordinator: &mut ViewCoordinator, cmd: ConsoleCommand) -> Vec<UiEvent> {
    match &cmd {
        ConsoleCommand::Status => return vec![UiEvent::Status(coordinator.integration_status())],
        ConsoleCommand::Show => return vec![UiEvent::Redraw],
        ConsoleCommand::Help => return vec![UiEvent::Help],
        // Only `start` is offered on the landing page.
        ConsoleCommand::Go(_) if !coordinator.is_active() => {
            return vec![UiEvent::Error(UiError::from_core(
                UiErrorContext::Session,
                &CoreError::SessionInactive,
            ))];
        }
        _ => {}
    }
    let Some(action) = cmd.action() else {
        return Vec::new();
    };
    let context = error_context(&action);
    let redraw = matches!(
        action,
        UserAction::StartSession | UserAction::EndSession | UserAction::SelectSection { .. }
    );

    debug!(?action, "applying console action");
    let mut events = match coordinator.apply(action) {
        Ok(()) => coordinator
            .take_notifications()
            .into_iter()
            .map(UiEvent::Core)
            .collect(),
        Err(err) => vec![UiEvent::Error(UiError::from_core(context, &err))],
    };
    if redraw {
        events.push(UiEvent::Redraw);
    }
    events
}

fn error_context(action: &UserAction) -> UiErrorContext {
    match action {
        UserAction::StartSession | UserAction::EndSession | UserAction::SelectSection { .. } => {
            UiErrorContext::Session
        }
        UserAction::SendChat { .. }
        | UserAction::DraftChat { .. }
        | UserAction::SendDraft
        | UserAction::CancelReply => UiErrorContext::Chat,
        UserAction::ToggleIntegration { .. } | UserAction::CancelToggle { .. } => {
            UiErrorContext::Integrations
        }
    }
}

/// Parses one input line into events. `None` means the user asked to quit.
pub fn dispatch_line(coordinator: &mut ViewCoordinator, line: &str) -> Option<Vec<UiEvent>> {
    match parse_line(line) {
        Ok(Some(ConsoleCommand::Quit)) => None,
        Ok(Some(cmd)) => Some(dispatch_command(coordinator, cmd)),
        Ok(None) => Some(Vec::new()),
        Err(message) => Some(vec![UiEvent::Error(UiError::bad_command(message))]),
    }
}

/// Runs until the input closes or the user quits. When input closes, pending
/// replies and verifications are fast-forwarded so scripted runs see them.
pub async fn run<W: Write>(
    coordinator: &mut ViewCoordinator,
    mut line_rx: Receiver<String>,
    tick: Duration,
    renderer: &Renderer,
    out: &mut W,
) -> anyhow::Result<()> {
    let mut interval = time::interval(tick);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
    let mut last_tick = Instant::now();

    renderer.write_events(out, coordinator, &[UiEvent::Redraw])?;

    loop {
        tokio::select! {
            line = line_rx.recv() => {
                let Some(line) = line else {
                    flush_pending(coordinator, renderer, out)?;
                    break;
                };
                let Some(events) = dispatch_line(coordinator, &line) else {
                    break;
                };
                renderer.write_events(out, coordinator, &events)?;
            }
            _ = interval.tick() => {
                let now = Instant::now();
                let notifications = coordinator.advance(now - last_tick);
                last_tick = now;
                if !notifications.is_empty() {
                    let events: Vec<UiEvent> =
                        notifications.into_iter().map(UiEvent::Core).collect();
                    renderer.write_events(out, coordinator, &events)?;
                }
            }
        }
    }
    out.flush()?;
    Ok(())
}

fn flush_pending<W: Write>(
    coordinator: &mut ViewCoordinator,
    renderer: &Renderer,
    out: &mut W,
) -> anyhow::Result<()> {
    while let Some(due) = coordinator.next_due() {
        let elapsed = due.saturating_sub(coordinator.now());
        let events: Vec<UiEvent> = coordinator
            .advance(elapsed)
            .into_iter()
            .map(UiEvent::Core)
            .collect();
        renderer.write_events(out, coordinator, &events)?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "tests/orchestration_tests.rs"]
mod tests;
