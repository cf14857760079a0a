use serde::{Deserialize, Serialize};

/// One roster row, as the backend returns it.
///
/// Field names follow the backend's wire vocabulary (Portuguese) so the
/// structs serialize straight into the API contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    pub nome: String,
    pub email: String,
    pub faixa: String,
    pub data_nascimento: String,
}

/// Request body for creating or fully replacing a student record.
#[derive(Debug, Clone, Serialize)]
pub struct StudentPayload {
    pub nome: String,
    pub email: String,
    pub faixa: String,
    pub data_nascimento: String,
}

/// Request body for logging attended classes.
#[derive(Debug, Clone, Serialize)]
pub struct AttendancePayload {
    pub qtd: i64,
    pub email_aluno: String,
}

/// Belt-progression summary for one student.
#[derive(Debug, Clone, Deserialize)]
pub struct Progress {
    pub nome: String,
    pub email: String,
    pub faixa: String,
    pub total_aulas: i64,
    pub aulas_necessarias_para_proxima_faixa: i64,
}

/// Validation error body the backend returns on rejected input.
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub detail: Vec<ErrorDetail>,
}

#[derive(Debug, Deserialize)]
pub struct ErrorDetail {
    #[serde(rename = "type")]
    pub kind: String,

    #[serde(default)]
    pub msg: String,
}

/// Lifecycle of a single tab action: idle -> busy -> done or failed.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ActionState {
    #[default]
    Idle,
    Busy,
    Done(String),
    Failed(String),
}

impl ActionState {
    pub fn is_busy(&self) -> bool {
        matches!(self, ActionState::Busy)
    }

    /// The text to show (and yank) for this state, if any.
    pub fn text(&self) -> &str {
        match self {
            ActionState::Idle | ActionState::Busy => "",
            ActionState::Done(text) | ActionState::Failed(text) => text,
        }
    }
}

/// The five screens of the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Create,
    Roster,
    Attendance,
    Progress,
    Update,
}

impl Tab {
    pub const ALL: [Tab; 5] = [
        Tab::Create,
        Tab::Roster,
        Tab::Attendance,
        Tab::Progress,
        Tab::Update,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Tab::Create => "Create Student",
            Tab::Roster => "Roster",
            Tab::Attendance => "Log Class",
            Tab::Progress => "Progress",
            Tab::Update => "Update Student",
        }
    }

    pub fn next(self) -> Tab {
        let idx = Tab::ALL.iter().position(|t| *t == self).unwrap_or(0);
        Tab::ALL[(idx + 1) % Tab::ALL.len()]
    }

    pub fn prev(self) -> Tab {
        let idx = Tab::ALL.iter().position(|t| *t == self).unwrap_or(0);
        Tab::ALL[(idx + Tab::ALL.len() - 1) % Tab::ALL.len()]
    }
}
