//! HTTP layer: one async function per tab action, plus the background
//! submit wrappers the event handlers call.
//!
//! Each action issues a single request and resolves to an [`ActionState`]
//! carrying the final status text. The submit wrappers own the busy guard
//! and the local validation that short-circuits before anything goes on the
//! wire (empty update id, non-numeric class count).

use crate::state::AppState;
use crate::types::{ActionState, AttendancePayload, ErrorBody, Progress, Student, StudentPayload};
use crate::ui::events::log_debug;
use std::sync::{Arc, RwLock};
use url::Url;

/// Local-validation message for an empty update id.
pub const MISSING_ID_MESSAGE: &str = "Please enter the student id.";

/// Shown instead of the raw validation body when the backend rejects the
/// birth date format on update.
pub const DATE_HINT_MESSAGE: &str = "Please enter the birth date in YYYY-MM-DD format";

/// Backend marker for a birth date that failed to parse.
const DATE_PARSING_KIND: &str = "date_from_datetime_parsing";

/// Join the configured base URL with an endpoint path.
fn join_url(base_url: &str, path: &str) -> Result<Url, String> {
    let full = format!("{}{}", base_url.trim_end_matches('/'), path);
    Url::parse(&full).map_err(|e| format!("Invalid URL: {e}"))
}

/// Read the response body as text, folding read failures into the text.
async fn read_body(response: reqwest::Response) -> String {
    match response.text().await {
        Ok(body) => body,
        Err(e) => format!("Failed to read response body: {e}"),
    }
}

/// POST `/` - create a student record.
pub async fn create_student(base_url: &str, payload: &StudentPayload) -> ActionState {
    let url = match join_url(base_url, "/") {
        Ok(url) => url,
        Err(e) => return ActionState::Failed(e),
    };

    let client = reqwest::Client::new();
    match client.post(url).json(payload).send().await {
        Ok(response) if response.status().is_success() => {
            match response.json::<serde_json::Value>().await {
                Ok(student) => ActionState::Done(format!("Student created: {student}")),
                Err(e) => ActionState::Failed(format!("Parse error: {e}")),
            }
        }
        Ok(response) => ActionState::Failed(format!("Error: {}", read_body(response).await)),
        Err(e) => ActionState::Failed(format!("Request failed: {e}")),
    }
}

/// GET `/alunos/` - fetch the full roster.
///
/// Returns the new rows on success; `None` leaves the previous rows in place.
pub async fn fetch_roster(base_url: &str) -> (Option<Vec<Student>>, ActionState) {
    let url = match join_url(base_url, "/alunos/") {
        Ok(url) => url,
        Err(e) => return (None, ActionState::Failed(e)),
    };

    match reqwest::get(url).await {
        Ok(response) if response.status().is_success() => {
            match response.json::<Vec<Student>>().await {
                Ok(rows) => {
                    let status = ActionState::Done(format!("{} students found.", rows.len()));
                    (Some(rows), status)
                }
                Err(e) => (None, ActionState::Failed(format!("Parse error: {e}"))),
            }
        }
        Ok(response) => {
            let status = ActionState::Failed(format!("Error: {}", read_body(response).await));
            (None, status)
        }
        Err(e) => (None, ActionState::Failed(format!("Request failed: {e}"))),
    }
}

/// POST `/aula_realizada/` - log attended classes for a student.
pub async fn log_classes(base_url: &str, payload: &AttendancePayload) -> ActionState {
    let url = match join_url(base_url, "/aula_realizada/") {
        Ok(url) => url,
        Err(e) => return ActionState::Failed(e),
    };

    let client = reqwest::Client::new();
    match client.post(url).json(payload).send().await {
        Ok(response) if response.status().is_success() => {
            match response.json::<serde_json::Value>().await {
                Ok(confirmation) => ActionState::Done(format!("Success: {confirmation}")),
                Err(e) => ActionState::Failed(format!("Parse error: {e}")),
            }
        }
        Ok(response) => ActionState::Failed(format!("Error: {}", read_body(response).await)),
        Err(e) => ActionState::Failed(format!("Request failed: {e}")),
    }
}

/// GET `/progresso_aluno/?email_aluno=` - belt-progression summary.
pub async fn fetch_progress(base_url: &str, email: &str) -> ActionState {
    let mut url = match join_url(base_url, "/progresso_aluno/") {
        Ok(url) => url,
        Err(e) => return ActionState::Failed(e),
    };
    url.query_pairs_mut().append_pair("email_aluno", email);

    match reqwest::get(url).await {
        Ok(response) if response.status().is_success() => {
            match response.json::<Progress>().await {
                Ok(progress) => ActionState::Done(format_progress(&progress)),
                Err(e) => ActionState::Failed(format!("Parse error: {e}")),
            }
        }
        Ok(response) => ActionState::Failed(format!("Error: {}", read_body(response).await)),
        Err(e) => ActionState::Failed(format!("Request failed: {e}")),
    }
}

/// PUT `/alunos/{id}` - replace a student record.
pub async fn update_student(base_url: &str, id: &str, payload: &StudentPayload) -> ActionState {
    let url = match join_url(base_url, &format!("/alunos/{id}")) {
        Ok(url) => url,
        Err(e) => return ActionState::Failed(e),
    };

    let client = reqwest::Client::new();
    match client.put(url).json(payload).send().await {
        Ok(response) if response.status().is_success() => {
            match response.json::<serde_json::Value>().await {
                Ok(student) => ActionState::Done(format!("Student updated: {student}")),
                Err(e) => ActionState::Failed(format!("Parse error: {e}")),
            }
        }
        Ok(response) => ActionState::Failed(classify_update_error(&read_body(response).await)),
        Err(e) => ActionState::Failed(format!("Request failed: {e}")),
    }
}

/// Decode an update error body into the small set of shapes we know.
///
/// A date-parsing failure on the first validation detail gets a readable
/// hint; anything unrecognized falls back to the raw text.
pub fn classify_update_error(body: &str) -> String {
    if let Ok(parsed) = serde_json::from_str::<ErrorBody>(body) {
        if let Some(first) = parsed.detail.first() {
            if first.kind == DATE_PARSING_KIND {
                return DATE_HINT_MESSAGE.to_string();
            }
        }
    }
    format!("Error updating student: {body}")
}

/// Fixed five-line summary over the server-provided progression fields.
pub fn format_progress(progress: &Progress) -> String {
    format!(
        "Name: {}\nEmail: {}\nBelt: {}\nTotal classes: {}\nClasses until next belt: {}",
        progress.nome,
        progress.email,
        progress.faixa,
        progress.total_aulas,
        progress.aulas_necessarias_para_proxima_faixa
    )
}

// ---------------------------------------------------------------------------
// Background submit wrappers
//
// Same shape as spawning a fetch in the background: mark the tab busy under
// the write lock, run the request on a task, commit the result under the
// write lock. A tab that is already busy refuses to dispatch again.
// ---------------------------------------------------------------------------

pub fn submit_create(state: Arc<RwLock<AppState>>, base_url: String) {
    let payload = {
        let mut s = state.write().unwrap();
        if s.create.status.is_busy() {
            return;
        }
        s.create.status = ActionState::Busy;
        s.create.payload()
    };

    log_debug(&format!("POST create student: {}", payload.email));
    tokio::spawn(async move {
        let result = create_student(&base_url, &payload).await;
        let mut s = state.write().unwrap();
        s.create.status = result;
    });
}

pub fn submit_roster(state: Arc<RwLock<AppState>>, base_url: String) {
    {
        let mut s = state.write().unwrap();
        if s.roster.status.is_busy() {
            return;
        }
        s.roster.status = ActionState::Busy;
    }

    log_debug("GET roster");
    tokio::spawn(async move {
        let (rows, status) = fetch_roster(&base_url).await;
        let mut s = state.write().unwrap();
        if let Some(rows) = rows {
            s.roster.rows = rows;
        }
        s.roster.status = status;
    });
}

pub fn submit_attendance(state: Arc<RwLock<AppState>>, base_url: String) {
    let payload = {
        let mut s = state.write().unwrap();
        if s.attendance.status.is_busy() {
            return;
        }
        match s.attendance.payload() {
            Ok(payload) => {
                s.attendance.status = ActionState::Busy;
                payload
            }
            Err(message) => {
                // Rejected locally, nothing goes on the wire
                s.attendance.status = ActionState::Failed(message);
                return;
            }
        }
    };

    log_debug(&format!(
        "POST attendance: {} x{}",
        payload.email_aluno, payload.qtd
    ));
    tokio::spawn(async move {
        let result = log_classes(&base_url, &payload).await;
        let mut s = state.write().unwrap();
        s.attendance.status = result;
    });
}

pub fn submit_progress(state: Arc<RwLock<AppState>>, base_url: String) {
    let email = {
        let mut s = state.write().unwrap();
        if s.progress.status.is_busy() {
            return;
        }
        s.progress.status = ActionState::Busy;
        s.progress.email.clone()
    };

    log_debug(&format!("GET progress: {email}"));
    tokio::spawn(async move {
        let result = fetch_progress(&base_url, &email).await;
        let mut s = state.write().unwrap();
        s.progress.status = result;
    });
}

pub fn submit_update(state: Arc<RwLock<AppState>>, base_url: String) {
    let (id, payload) = {
        let mut s = state.write().unwrap();
        if s.update.status.is_busy() {
            return;
        }
        if s.update.id.trim().is_empty() {
            // Rejected locally, nothing goes on the wire
            s.update.status = ActionState::Failed(MISSING_ID_MESSAGE.to_string());
            return;
        }
        s.update.status = ActionState::Busy;
        (s.update.id.clone(), s.update.payload())
    };

    log_debug(&format!("PUT update student: {id}"));
    tokio::spawn(async move {
        let result = update_student(&base_url, &id, &payload).await;
        let mut s = state.write().unwrap();
        s.update.status = result;
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_url_basic() {
        let url = join_url("http://localhost:8000/api", "/alunos/").unwrap();
        assert_eq!(url.as_str(), "http://localhost:8000/api/alunos/");
    }

    #[test]
    fn test_join_url_trailing_slash_in_base() {
        let url = join_url("http://localhost:8000/api/", "/alunos/").unwrap();
        assert_eq!(url.as_str(), "http://localhost:8000/api/alunos/");
    }

    #[test]
    fn test_join_url_root_path() {
        let url = join_url("http://localhost:8000/api", "/").unwrap();
        assert_eq!(url.as_str(), "http://localhost:8000/api/");
    }

    #[test]
    fn test_join_url_invalid_base() {
        let err = join_url("not a valid url", "/alunos/").unwrap_err();
        assert!(err.contains("Invalid URL"));
    }

    #[test]
    fn test_classify_update_error_date_parsing() {
        let body = r#"{"detail":[{"type":"date_from_datetime_parsing","msg":"invalid date"}]}"#;
        assert_eq!(classify_update_error(body), DATE_HINT_MESSAGE);
    }

    #[test]
    fn test_classify_update_error_other_validation() {
        let body = r#"{"detail":[{"type":"missing","msg":"field required"}]}"#;
        let message = classify_update_error(body);
        assert!(message.starts_with("Error updating student:"));
        assert!(message.contains(body));
    }

    #[test]
    fn test_classify_update_error_unrecognized_body() {
        let body = "Internal Server Error";
        assert_eq!(
            classify_update_error(body),
            "Error updating student: Internal Server Error"
        );
    }

    #[test]
    fn test_classify_update_error_empty_detail() {
        let body = r#"{"detail":[]}"#;
        assert!(classify_update_error(body).contains(body));
    }

    #[test]
    fn test_format_progress_field_order() {
        let progress = Progress {
            nome: "Ana".to_string(),
            email: "ana@mail.com".to_string(),
            faixa: "azul".to_string(),
            total_aulas: 42,
            aulas_necessarias_para_proxima_faixa: 18,
        };

        let text = format_progress(&progress);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], "Name: Ana");
        assert_eq!(lines[1], "Email: ana@mail.com");
        assert_eq!(lines[2], "Belt: azul");
        assert_eq!(lines[3], "Total classes: 42");
        assert_eq!(lines[4], "Classes until next belt: 18");
    }
}
