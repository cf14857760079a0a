use crate::types::{ActionState, AttendancePayload, Student, StudentPayload, Tab};

/// View-model for the create-student tab.
#[derive(Debug, Clone)]
pub struct CreateForm {
    pub name: String,
    pub email: String,
    pub belt: String,
    pub birth_date: String,
    pub focus: usize,
    pub status: ActionState,
}

impl CreateForm {
    pub const LABELS: [&'static str; 4] = ["Name", "Email", "Belt", "Birth date (YYYY-MM-DD)"];

    pub fn values(&self) -> [&str; 4] {
        [&self.name, &self.email, &self.belt, &self.birth_date]
    }

    pub fn value_mut(&mut self, idx: usize) -> Option<&mut String> {
        match idx {
            0 => Some(&mut self.name),
            1 => Some(&mut self.email),
            2 => Some(&mut self.belt),
            3 => Some(&mut self.birth_date),
            _ => None,
        }
    }

    pub fn payload(&self) -> StudentPayload {
        StudentPayload {
            nome: self.name.clone(),
            email: self.email.clone(),
            faixa: self.belt.clone(),
            data_nascimento: self.birth_date.clone(),
        }
    }
}

impl Default for CreateForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            belt: String::new(),
            birth_date: String::new(),
            focus: 0,
            status: ActionState::Idle,
        }
    }
}

/// View-model for the roster tab. Rows are replaced wholesale per fetch.
#[derive(Debug, Clone, Default)]
pub struct RosterView {
    pub rows: Vec<Student>,
    pub status: ActionState,
}

/// View-model for the log-class tab.
#[derive(Debug, Clone)]
pub struct AttendanceForm {
    pub email: String,
    pub count: String,
    pub focus: usize,
    pub status: ActionState,
}

impl AttendanceForm {
    pub const LABELS: [&'static str; 2] = ["Student email", "Number of classes"];

    pub fn values(&self) -> [&str; 2] {
        [&self.email, &self.count]
    }

    pub fn value_mut(&mut self, idx: usize) -> Option<&mut String> {
        match idx {
            0 => Some(&mut self.email),
            1 => Some(&mut self.count),
            _ => None,
        }
    }

    /// Local validation: the class count must parse as an integer before
    /// anything goes on the wire.
    pub fn payload(&self) -> Result<AttendancePayload, String> {
        let qtd = self
            .count
            .trim()
            .parse::<i64>()
            .map_err(|_| "Class count must be a whole number.".to_string())?;

        Ok(AttendancePayload {
            qtd,
            email_aluno: self.email.clone(),
        })
    }
}

impl Default for AttendanceForm {
    fn default() -> Self {
        Self {
            email: String::new(),
            count: "1".to_string(),
            focus: 0,
            status: ActionState::Idle,
        }
    }
}

/// View-model for the progress tab.
#[derive(Debug, Clone)]
pub struct ProgressForm {
    pub email: String,
    pub status: ActionState,
}

impl ProgressForm {
    pub const LABELS: [&'static str; 1] = ["Student email"];

    pub fn values(&self) -> [&str; 1] {
        [&self.email]
    }
}

impl Default for ProgressForm {
    fn default() -> Self {
        Self {
            email: String::new(),
            status: ActionState::Idle,
        }
    }
}

/// View-model for the update-student tab.
#[derive(Debug, Clone)]
pub struct UpdateForm {
    pub id: String,
    pub name: String,
    pub email: String,
    pub belt: String,
    pub birth_date: String,
    pub focus: usize,
    pub status: ActionState,
}

impl UpdateForm {
    pub const LABELS: [&'static str; 5] = [
        "Student id",
        "New name",
        "New email",
        "New belt",
        "New birth date (YYYY-MM-DD)",
    ];

    pub fn values(&self) -> [&str; 5] {
        [
            &self.id,
            &self.name,
            &self.email,
            &self.belt,
            &self.birth_date,
        ]
    }

    pub fn value_mut(&mut self, idx: usize) -> Option<&mut String> {
        match idx {
            0 => Some(&mut self.id),
            1 => Some(&mut self.name),
            2 => Some(&mut self.email),
            3 => Some(&mut self.belt),
            4 => Some(&mut self.birth_date),
            _ => None,
        }
    }

    pub fn payload(&self) -> StudentPayload {
        StudentPayload {
            nome: self.name.clone(),
            email: self.email.clone(),
            faixa: self.belt.clone(),
            data_nascimento: self.birth_date.clone(),
        }
    }
}

impl Default for UpdateForm {
    fn default() -> Self {
        Self {
            id: String::new(),
            name: String::new(),
            email: String::new(),
            belt: String::new(),
            birth_date: String::new(),
            focus: 0,
            status: ActionState::Idle,
        }
    }
}

/// Shared application state. One record per tab; drawing is a pure function
/// of this struct.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub active_tab: Tab,
    pub create: CreateForm,
    pub roster: RosterView,
    pub attendance: AttendanceForm,
    pub progress: ProgressForm,
    pub update: UpdateForm,
}

impl AppState {
    pub fn next_tab(&mut self) {
        self.active_tab = self.active_tab.next();
    }

    pub fn prev_tab(&mut self) {
        self.active_tab = self.active_tab.prev();
    }

    /// Number of editable fields on the active tab.
    pub fn field_count(&self) -> usize {
        match self.active_tab {
            Tab::Create => CreateForm::LABELS.len(),
            Tab::Roster => 0,
            Tab::Attendance => AttendanceForm::LABELS.len(),
            Tab::Progress => ProgressForm::LABELS.len(),
            Tab::Update => UpdateForm::LABELS.len(),
        }
    }

    /// Field focus of the active tab. Focus is kept per tab, so switching
    /// away and back lands on the same field.
    pub fn focus(&self) -> usize {
        match self.active_tab {
            Tab::Create => self.create.focus,
            Tab::Roster => 0,
            Tab::Attendance => self.attendance.focus,
            Tab::Progress => 0,
            Tab::Update => self.update.focus,
        }
    }

    pub fn focus_next(&mut self) {
        let count = self.field_count();
        if count == 0 {
            return;
        }
        match self.active_tab {
            Tab::Create => self.create.focus = (self.create.focus + 1) % count,
            Tab::Attendance => self.attendance.focus = (self.attendance.focus + 1) % count,
            Tab::Update => self.update.focus = (self.update.focus + 1) % count,
            Tab::Roster | Tab::Progress => {}
        }
    }

    pub fn focus_prev(&mut self) {
        let count = self.field_count();
        if count == 0 {
            return;
        }
        match self.active_tab {
            Tab::Create => self.create.focus = (self.create.focus + count - 1) % count,
            Tab::Attendance => self.attendance.focus = (self.attendance.focus + count - 1) % count,
            Tab::Update => self.update.focus = (self.update.focus + count - 1) % count,
            Tab::Roster | Tab::Progress => {}
        }
    }

    /// Mutable access to the focused field of the active tab, if it has one.
    pub fn focused_value_mut(&mut self) -> Option<&mut String> {
        match self.active_tab {
            Tab::Create => {
                let focus = self.create.focus;
                self.create.value_mut(focus)
            }
            Tab::Roster => None,
            Tab::Attendance => {
                let focus = self.attendance.focus;
                self.attendance.value_mut(focus)
            }
            Tab::Progress => Some(&mut self.progress.email),
            Tab::Update => {
                let focus = self.update.focus;
                self.update.value_mut(focus)
            }
        }
    }

    /// Status of the active tab's action.
    pub fn active_status(&self) -> &ActionState {
        match self.active_tab {
            Tab::Create => &self.create.status,
            Tab::Roster => &self.roster.status,
            Tab::Attendance => &self.attendance.status,
            Tab::Progress => &self.progress.status,
            Tab::Update => &self.update.status,
        }
    }

    pub fn status_for(&self, tab: Tab) -> &ActionState {
        match tab {
            Tab::Create => &self.create.status,
            Tab::Roster => &self.roster.status,
            Tab::Attendance => &self.attendance.status,
            Tab::Progress => &self.progress.status,
            Tab::Update => &self.update.status,
        }
    }
}
