//! Console commands parsed from stdin lines.

use app_core::SUGGESTIONS;
use shared::{domain::Section, protocol::UserAction};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleCommand {
    Start,
    SignOut,
    Go(Section),
    Say(String),
    Send,
    Suggest(usize),
    Toggle(String),
    CancelReply,
    CancelToggle(String),
    Status,
    Show,
    Help,
    Quit,
}

pub const HELP: &str = "\
commands:
  start | signin                     start a session
  signout                            end the session
  go <dashboard|integrations|chat>   switch section
  say <text>                         ask the co-pilot
  suggest <1-3>                      put a suggested question in the input
  send | say                         send the input
  toggle <jira|github|monday>        connect or disconnect a tool
  cancel <reply|jira|github|monday>  abort pending work
  status                             integration status
  show                               redraw the current view
  help | quit";

/// Returns `Ok(None)` for blank lines.
pub fn parse_line(line: &str) -> Result<Option<ConsoleCommand>, String> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    let (verb, rest) = match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (line, ""),
    };

    let command = match verb.to_ascii_lowercase().as_str() {
        "start" | "signin" => ConsoleCommand::Start,
        "signout" => ConsoleCommand::SignOut,
        "go" => ConsoleCommand::Go(rest.parse()?),
        "say" if rest.is_empty() => ConsoleCommand::Send,
        "say" => ConsoleCommand::Say(rest.to_string()),
        "send" => ConsoleCommand::Send,
        "suggest" => {
            let index: usize = rest
                .parse()
                .map_err(|_| format!("expected a suggestion number, got '{rest}'"))?;
            if index == 0 || index > SUGGESTIONS.len() {
                return Err(format!(
                    "suggestion must be between 1 and {}",
                    SUGGESTIONS.len()
                ));
            }
            ConsoleCommand::Suggest(index - 1)
        }
        "toggle" => ConsoleCommand::Toggle(required(rest, "toggle")?),
        "cancel" => match required(rest, "cancel")?.as_str() {
            "reply" => ConsoleCommand::CancelReply,
            id => ConsoleCommand::CancelToggle(id.to_string()),
        },
        "status" => ConsoleCommand::Status,
        "show" => ConsoleCommand::Show,
        "help" | "?" => ConsoleCommand::Help,
        "quit" | "exit" => ConsoleCommand::Quit,
        other => return Err(format!("unknown command '{other}' (try `help`)")),
    };
    Ok(Some(command))
}

fn required(rest: &str, verb: &str) -> Result<String, String> {
    if rest.is_empty() {
        Err(format!("`{verb}` needs an argument"))
    } else {
        Ok(rest.to_ascii_lowercase())
    }
}

impl ConsoleCommand {
    /// The core action this command maps to, if any.
    pub fn action(&self) -> Option<UserAction> {
        match self {
            ConsoleCommand::Start => Some(UserAction::StartSession),
            ConsoleCommand::SignOut => Some(UserAction::EndSession),
            ConsoleCommand::Go(section) => Some(UserAction::SelectSection { section: *section }),
            ConsoleCommand::Say(text) => Some(UserAction::SendChat { text: text.clone() }),
            ConsoleCommand::Send => Some(UserAction::SendDraft),
            ConsoleCommand::Suggest(index) => SUGGESTIONS.get(*index).map(|s| {
                UserAction::DraftChat {
                    text: s.prompt.to_string(),
                }
            }),
            ConsoleCommand::Toggle(id) => Some(UserAction::ToggleIntegration { id: id.clone() }),
            ConsoleCommand::CancelReply => Some(UserAction::CancelReply),
            ConsoleCommand::CancelToggle(id) => Some(UserAction::CancelToggle { id: id.clone() }),
            ConsoleCommand::Status
            | ConsoleCommand::Show
            | ConsoleCommand::Help
            | ConsoleCommand::Quit => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_navigation_and_chat() {
        assert_eq!(parse_line("  "), Ok(None));
        assert_eq!(
            parse_line("go Integrations"),
            Ok(Some(ConsoleCommand::Go(Section::Integrations)))
        );
        assert_eq!(
            parse_line("say What is the  Design status?"),
            Ok(Some(ConsoleCommand::Say("What is the  Design status?".into())))
        );
        assert_eq!(parse_line("say"), Ok(Some(ConsoleCommand::Send)));
        assert_eq!(parse_line("send"), Ok(Some(ConsoleCommand::Send)));
    }

    #[test]
    fn suggestions_are_one_based() {
        assert_eq!(parse_line("suggest 2"), Ok(Some(ConsoleCommand::Suggest(1))));
        assert!(parse_line("suggest 0").is_err());
        assert!(parse_line("suggest 4").is_err());
        assert!(parse_line("suggest two").is_err());
    }

    #[test]
    fn toggle_and_cancel_need_targets() {
        assert_eq!(
            parse_line("toggle GitHub"),
            Ok(Some(ConsoleCommand::Toggle("github".into())))
        );
        assert_eq!(parse_line("cancel reply"), Ok(Some(ConsoleCommand::CancelReply)));
        assert_eq!(
            parse_line("cancel jira"),
            Ok(Some(ConsoleCommand::CancelToggle("jira".into())))
        );
        assert!(parse_line("toggle").is_err());
        assert!(parse_line("dance").is_err());
    }

    #[test]
    fn suggestion_only_fills_the_draft() {
        assert_eq!(
            ConsoleCommand::Suggest(1).action(),
            Some(UserAction::DraftChat {
                text: SUGGESTIONS[1].prompt.to_string()
            })
        );
        assert_eq!(ConsoleCommand::Send.action(), Some(UserAction::SendDraft));
        assert_eq!(ConsoleCommand::Status.action(), None);
    }
}
