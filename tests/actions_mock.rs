//! Mocked-HTTP tests for the five tab actions.
//!
//! The UI is not driven here; these exercise the api layer the event
//! handlers dispatch to, plus the submit wrappers' local guards.

use std::sync::{Arc, RwLock};
use std::time::Duration;

use tatame_tui::api;
use tatame_tui::state::AppState;
use tatame_tui::types::{ActionState, AttendancePayload, Student, StudentPayload};
use wiremock::matchers::{any, body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn student_payload() -> StudentPayload {
    StudentPayload {
        nome: "Ana Souza".to_string(),
        email: "ana@mail.com".to_string(),
        faixa: "azul".to_string(),
        data_nascimento: "1999-04-12".to_string(),
    }
}

/// Poll the shared state until the action leaves the busy state.
async fn wait_until_settled<F>(state: &Arc<RwLock<AppState>>, read: F) -> ActionState
where
    F: Fn(&AppState) -> ActionState,
{
    for _ in 0..200 {
        {
            let s = state.read().unwrap();
            let status = read(&s);
            if status != ActionState::Busy {
                return status;
            }
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    panic!("action never settled");
}

#[tokio::test]
async fn create_success_shows_decoded_response() {
    let mock_server = MockServer::start().await;

    let created = serde_json::json!({
        "id": 1,
        "nome": "Ana Souza",
        "email": "ana@mail.com",
        "faixa": "azul",
        "data_nascimento": "1999-04-12"
    });

    Mock::given(method("POST"))
        .and(path("/"))
        .and(body_json(serde_json::json!({
            "nome": "Ana Souza",
            "email": "ana@mail.com",
            "faixa": "azul",
            "data_nascimento": "1999-04-12"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(created.clone()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let status = api::create_student(&mock_server.uri(), &student_payload()).await;
    assert_eq!(status, ActionState::Done(format!("Student created: {created}")));
}

#[tokio::test]
async fn create_failure_shows_raw_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(409).set_body_string("email already registered"))
        .mount(&mock_server)
        .await;

    let status = api::create_student(&mock_server.uri(), &student_payload()).await;
    assert_eq!(
        status,
        ActionState::Failed("Error: email already registered".to_string())
    );
}

#[tokio::test]
async fn roster_lists_students_in_server_order() {
    let mock_server = MockServer::start().await;

    let body = serde_json::json!([
        {"nome": "Ana", "email": "ana@mail.com", "faixa": "azul", "data_nascimento": "1999-04-12"},
        {"nome": "Bruno", "email": "bruno@mail.com", "faixa": "branca", "data_nascimento": "2001-01-30"},
        {"nome": "Carla", "email": "carla@mail.com", "faixa": "roxa", "data_nascimento": "1994-11-02"}
    ]);

    Mock::given(method("GET"))
        .and(path("/alunos/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(&mock_server)
        .await;

    let (rows, status) = api::fetch_roster(&mock_server.uri()).await;
    let rows = rows.expect("rows should be replaced on success");

    assert_eq!(status, ActionState::Done("3 students found.".to_string()));
    assert_eq!(rows.len(), 3);
    assert_eq!(
        rows[0],
        Student {
            nome: "Ana".to_string(),
            email: "ana@mail.com".to_string(),
            faixa: "azul".to_string(),
            data_nascimento: "1999-04-12".to_string(),
        }
    );
    assert_eq!(rows[1].nome, "Bruno");
    assert_eq!(rows[2].nome, "Carla");
}

#[tokio::test]
async fn roster_failure_keeps_rows_and_shows_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/alunos/"))
        .respond_with(ResponseTemplate::new(500).set_body_string("database offline"))
        .mount(&mock_server)
        .await;

    let (rows, status) = api::fetch_roster(&mock_server.uri()).await;
    assert!(rows.is_none());
    assert_eq!(
        status,
        ActionState::Failed("Error: database offline".to_string())
    );
}

#[tokio::test]
async fn log_class_success_shows_confirmation() {
    let mock_server = MockServer::start().await;

    let confirmation = serde_json::json!({"email": "ana@mail.com", "total_aulas": 45});

    Mock::given(method("POST"))
        .and(path("/aula_realizada/"))
        .and(body_json(serde_json::json!({
            "qtd": 3,
            "email_aluno": "ana@mail.com"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(confirmation.clone()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let payload = AttendancePayload {
        qtd: 3,
        email_aluno: "ana@mail.com".to_string(),
    };
    let status = api::log_classes(&mock_server.uri(), &payload).await;
    assert_eq!(status, ActionState::Done(format!("Success: {confirmation}")));
}

#[tokio::test]
async fn log_class_failure_shows_raw_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/aula_realizada/"))
        .respond_with(ResponseTemplate::new(404).set_body_string("student not found"))
        .mount(&mock_server)
        .await;

    let payload = AttendancePayload {
        qtd: 1,
        email_aluno: "ghost@mail.com".to_string(),
    };
    let status = api::log_classes(&mock_server.uri(), &payload).await;
    assert_eq!(
        status,
        ActionState::Failed("Error: student not found".to_string())
    );
}

#[tokio::test]
async fn progress_renders_labeled_summary() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/progresso_aluno/"))
        .and(query_param("email_aluno", "ana@mail.com"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "nome": "Ana",
            "email": "ana@mail.com",
            "faixa": "azul",
            "total_aulas": 42,
            "aulas_necessarias_para_proxima_faixa": 18
        })))
        .mount(&mock_server)
        .await;

    let status = api::fetch_progress(&mock_server.uri(), "ana@mail.com").await;
    assert_eq!(
        status,
        ActionState::Done(
            "Name: Ana\nEmail: ana@mail.com\nBelt: azul\nTotal classes: 42\nClasses until next belt: 18"
                .to_string()
        )
    );
}

#[tokio::test]
async fn progress_failure_shows_raw_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/progresso_aluno/"))
        .respond_with(ResponseTemplate::new(404).set_body_string("student not found"))
        .mount(&mock_server)
        .await;

    let status = api::fetch_progress(&mock_server.uri(), "ghost@mail.com").await;
    assert_eq!(
        status,
        ActionState::Failed("Error: student not found".to_string())
    );
}

#[tokio::test]
async fn update_success_shows_decoded_response() {
    let mock_server = MockServer::start().await;

    let updated = serde_json::json!({
        "id": 7,
        "nome": "Ana Souza",
        "email": "ana@mail.com",
        "faixa": "azul",
        "data_nascimento": "1999-04-12"
    });

    Mock::given(method("PUT"))
        .and(path("/alunos/7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(updated.clone()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let status = api::update_student(&mock_server.uri(), "7", &student_payload()).await;
    assert_eq!(status, ActionState::Done(format!("Student updated: {updated}")));
}

#[tokio::test]
async fn update_date_validation_shows_fixed_hint() {
    let mock_server = MockServer::start().await;

    // The rest of the body must not leak into the hint
    Mock::given(method("PUT"))
        .and(path("/alunos/7"))
        .respond_with(ResponseTemplate::new(422).set_body_json(serde_json::json!({
            "detail": [{
                "type": "date_from_datetime_parsing",
                "loc": ["body", "data_nascimento"],
                "msg": "Input should be a valid date or datetime",
                "input": "12/04/1999"
            }]
        })))
        .mount(&mock_server)
        .await;

    let status = api::update_student(&mock_server.uri(), "7", &student_payload()).await;
    assert_eq!(
        status,
        ActionState::Failed(api::DATE_HINT_MESSAGE.to_string())
    );
}

#[tokio::test]
async fn update_other_error_shows_raw_body() {
    let mock_server = MockServer::start().await;

    let body = r#"{"detail":[{"type":"missing","msg":"field required"}]}"#;

    Mock::given(method("PUT"))
        .and(path("/alunos/7"))
        .respond_with(ResponseTemplate::new(422).set_body_string(body))
        .mount(&mock_server)
        .await;

    let status = api::update_student(&mock_server.uri(), "7", &student_payload()).await;
    match status {
        ActionState::Failed(message) => {
            assert!(message.starts_with("Error updating student:"));
            assert!(message.contains(body));
        }
        other => panic!("expected failure, got {other:?}"),
    }
}

#[tokio::test]
async fn update_with_empty_id_sends_no_request() {
    let mock_server = MockServer::start().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let state = Arc::new(RwLock::new(AppState::default()));
    api::submit_update(Arc::clone(&state), mock_server.uri());

    assert_eq!(
        state.read().unwrap().update.status,
        ActionState::Failed(api::MISSING_ID_MESSAGE.to_string())
    );
    mock_server.verify().await;
}

#[tokio::test]
async fn non_numeric_class_count_sends_no_request() {
    let mock_server = MockServer::start().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let state = Arc::new(RwLock::new(AppState::default()));
    state.write().unwrap().attendance.count = "three".to_string();
    api::submit_attendance(Arc::clone(&state), mock_server.uri());

    assert_eq!(
        state.read().unwrap().attendance.status,
        ActionState::Failed("Class count must be a whole number.".to_string())
    );
    mock_server.verify().await;
}

#[tokio::test]
async fn busy_tab_does_not_dispatch_twice() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/alunos/"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!([]))
                .set_delay(Duration::from_millis(100)),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let state = Arc::new(RwLock::new(AppState::default()));
    api::submit_roster(Arc::clone(&state), mock_server.uri());
    // Second submit while the first is still in flight must be ignored
    api::submit_roster(Arc::clone(&state), mock_server.uri());

    let status = wait_until_settled(&state, |s| s.roster.status.clone()).await;
    assert_eq!(status, ActionState::Done("0 students found.".to_string()));
    mock_server.verify().await;
}

#[tokio::test]
async fn submit_create_commits_result_into_state() {
    let mock_server = MockServer::start().await;

    let created = serde_json::json!({"id": 1, "nome": "Ana"});

    Mock::given(method("POST"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(created.clone()))
        .mount(&mock_server)
        .await;

    let state = Arc::new(RwLock::new(AppState::default()));
    {
        let mut s = state.write().unwrap();
        s.create.name = "Ana".to_string();
        s.create.email = "ana@mail.com".to_string();
    }

    api::submit_create(Arc::clone(&state), mock_server.uri());

    let status = wait_until_settled(&state, |s| s.create.status.clone()).await;
    assert_eq!(status, ActionState::Done(format!("Student created: {created}")));
}
