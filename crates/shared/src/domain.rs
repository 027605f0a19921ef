use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

macro_rules! id_newtype {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        pub struct $name(pub u64);
    };
}

id_newtype!(MessageId);
id_newtype!(TaskId);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    #[default]
    Dashboard,
    Integrations,
    Chat,
}

impl Section {
    pub const SIDEBAR_ORDER: [Section; 3] =
        [Section::Dashboard, Section::Chat, Section::Integrations];

    pub fn as_str(self) -> &'static str {
        match self {
            Section::Dashboard => "dashboard",
            Section::Integrations => "integrations",
            Section::Chat => "chat",
        }
    }

    /// Label shown in the navigation sidebar.
    pub fn sidebar_label(self) -> &'static str {
        match self {
            Section::Dashboard => "Dashboard",
            Section::Integrations => "Integrations",
            Section::Chat => "AI Assistant",
        }
    }

    /// Title shown in the page header while the section is current.
    pub fn header_title(self) -> &'static str {
        match self {
            Section::Dashboard => "Analytics Overview",
            Section::Integrations => "Integrations",
            Section::Chat => "Chat",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Section {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let lower = raw.trim().to_ascii_lowercase();
        match lower.as_str() {
            "dashboard" => Ok(Section::Dashboard),
            "integrations" => Ok(Section::Integrations),
            "chat" | "assistant" => Ok(Section::Chat),
            _ => Err(format!("unknown section '{raw}'")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntegrationId {
    Jira,
    Github,
    Monday,
}

impl IntegrationId {
    pub const ALL: [IntegrationId; 3] = [
        IntegrationId::Jira,
        IntegrationId::Github,
        IntegrationId::Monday,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            IntegrationId::Jira => "jira",
            IntegrationId::Github => "github",
            IntegrationId::Monday => "monday",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            IntegrationId::Jira => "Atlassian Jira",
            IntegrationId::Github => "GitHub",
            IntegrationId::Monday => "Monday.com",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            IntegrationId::Jira => {
                "Analyze sprint velocity, task completion times, and phase distribution across your projects."
            }
            IntegrationId::Github => {
                "Track PR lead times, merge rates, defect density, and code review participation metrics."
            }
            IntegrationId::Monday => {
                "Sync high-level roadmap items and planning metrics to correlate with implementation effort."
            }
        }
    }
}

impl fmt::Display for IntegrationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IntegrationId {
    type Err = CoreError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        IntegrationId::ALL
            .into_iter()
            .find(|id| id.as_str() == raw)
            .ok_or_else(|| CoreError::InvalidIntegration(raw.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    User,
    Assistant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SdlcPhase {
    Ideation,
    Planning,
    Design,
    Implementation,
}

impl SdlcPhase {
    pub fn label(self) -> &'static str {
        match self {
            SdlcPhase::Ideation => "Ideation",
            SdlcPhase::Planning => "Planning",
            SdlcPhase::Design => "Design",
            SdlcPhase::Implementation => "Implementation",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Trend {
    Up,
    Down,
    Stable,
}
