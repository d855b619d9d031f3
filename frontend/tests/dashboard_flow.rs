//! Drives the dashboard and the API client together against an in-memory
//! server, the same way the browser runtime does.

use http::{Method, Response};
use shared::format::{action_class, format_updated_content};
use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use taskboard_frontend::api::{ApiRequest, ApiResponse};
use taskboard_frontend::{
    ApiClient, ApiError, ClientConfig, Dashboard, Effect, Msg, Tab, Transport,
};

const PAGE_ONE: &str = r#"{
    "tasks": [
        {"id": "t1", "title": "Buy milk", "description": "2 litres", "createdAt": "2024-03-01T09:00:00"},
        {"id": "t2", "title": "Walk dog", "description": "Around the park", "createdAt": "2024-03-01T08:00:00"}
    ],
    "currentPage": 0,
    "totalItems": 7,
    "totalPages": 2
}"#;

const PAGE_TWO: &str = r#"{
    "tasks": [
        {"id": "t6", "title": "Call Sam", "description": "About the trip", "createdAt": "2024-02-20T12:00:00"}
    ],
    "currentPage": 1,
    "totalItems": 7,
    "totalPages": 2
}"#;

const LOGS: &str = r#"[
    {"id": "l2", "timestamp": "2024-03-01T09:05:00", "action": "Update Task", "taskId": "t1",
     "updatedContent": {"title": "Buy oat milk"}, "notes": null},
    {"id": "l1", "timestamp": "2024-03-01T09:00:00", "action": "Create Task", "taskId": "t1",
     "updatedContent": {"title": "Buy milk", "description": "2 litres"}, "notes": null}
]"#;

#[derive(Default)]
struct FakeServer {
    requests: RefCell<Vec<(Method, String)>>,
    auth_headers: RefCell<Vec<String>>,
    down: Cell<bool>,
}

impl FakeServer {
    fn requests(&self) -> Vec<(Method, String)> {
        self.requests.borrow().clone()
    }

    fn forget(&self) {
        self.requests.borrow_mut().clear();
    }

    fn route(method: &Method, path: &str, query: Option<&str>) -> (u16, String) {
        match (method.as_str(), path) {
            ("GET", "/api/tasks") if query.is_some_and(|q| q.starts_with("page=1")) => {
                (200, PAGE_TWO.to_string())
            }
            ("GET", "/api/tasks") => (200, PAGE_ONE.to_string()),
            ("POST", "/api/tasks") => (
                201,
                r#"{"id":"t9","title":"Buy milk","description":"2 litres","createdAt":"2024-03-02T10:00:00"}"#
                    .to_string(),
            ),
            ("PUT", p) if p.starts_with("/api/tasks/") => (
                200,
                r#"{"id":"t1","title":"Buy oat milk","description":"2 litres"}"#.to_string(),
            ),
            ("DELETE", p) if p.starts_with("/api/tasks/") => {
                (200, r#"{"message":"Task deleted successfully"}"#.to_string())
            }
            ("GET", "/api/logs") => (200, LOGS.to_string()),
            _ => (404, r#"{"error":"not found"}"#.to_string()),
        }
    }
}

impl Transport for FakeServer {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        let uri = request.uri();
        let target = uri
            .path_and_query()
            .map(|pq| pq.as_str().to_string())
            .unwrap_or_default();
        self.requests
            .borrow_mut()
            .push((request.method().clone(), target));
        if let Some(auth) = request.headers().get(http::header::AUTHORIZATION) {
            self.auth_headers
                .borrow_mut()
                .push(auth.to_str().unwrap_or_default().to_string());
        }

        if self.down.get() {
            return Ok(Response::builder()
                .status(500)
                .body(r#"{"error":"Failed to fetch tasks"}"#.to_string())
                .unwrap());
        }

        let (status, body) = Self::route(request.method(), uri.path(), uri.query());
        Ok(Response::builder().status(status).body(body).unwrap())
    }
}

struct Harness {
    dashboard: Dashboard,
    client: ApiClient<FakeServer>,
    confirm: bool,
    alerts: Vec<String>,
}

impl Harness {
    fn new() -> Self {
        let config = ClientConfig::new("http://tasks.test", "dashboard", "s3cret").with_page_size(5);
        Self {
            dashboard: Dashboard::new(config.page_size),
            client: ApiClient::new(config, FakeServer::default()),
            confirm: true,
            alerts: Vec::new(),
        }
    }

    async fn started() -> Self {
        let mut harness = Self::new();
        let effects = harness.dashboard.init(Tab::Tasks);
        harness.run(effects).await;
        harness.client.transport().forget();
        harness
    }

    fn server(&self) -> &FakeServer {
        self.client.transport()
    }

    async fn send(&mut self, msg: Msg) {
        let effects = self.dashboard.update(msg);
        self.run(effects).await;
    }

    async fn run(&mut self, effects: Vec<Effect>) {
        let mut pending: VecDeque<Effect> = effects.into();
        while let Some(effect) = pending.pop_front() {
            let next = match effect {
                Effect::Api(call) => Some(call.perform(&self.client).await),
                Effect::Confirm { on_confirm, .. } => self.confirm.then_some(on_confirm),
                Effect::Alert(message) => {
                    self.alerts.push(message);
                    None
                }
                Effect::PushRoute(_) => None,
            };
            if let Some(msg) = next {
                pending.extend(self.dashboard.update(msg));
            }
        }
    }
}

fn get(target: &str) -> (Method, String) {
    (Method::GET, target.to_string())
}

#[tokio::test]
async fn start_up_loads_the_first_page() {
    let harness = Harness::started().await;

    assert_eq!(harness.dashboard.tasks.len(), 2);
    assert_eq!(harness.dashboard.total_pages, 2);
    assert_eq!(harness.dashboard.total_items, 7);
    assert_eq!(
        harness.server().auth_headers.borrow()[0],
        "Basic ZGFzaGJvYXJkOnMzY3JldA=="
    );
}

#[tokio::test]
async fn delete_without_confirmation_sends_nothing() {
    let mut harness = Harness::started().await;
    harness.confirm = false;
    let target = harness.dashboard.tasks[0].clone();

    harness.send(Msg::DeleteTask(target)).await;

    assert!(harness.server().requests().is_empty());
}

#[tokio::test]
async fn confirmed_delete_sends_one_delete_then_one_list() {
    let mut harness = Harness::started().await;
    let target = harness.dashboard.tasks[0].clone();

    harness.send(Msg::DeleteTask(target)).await;

    assert_eq!(
        harness.server().requests(),
        vec![
            (Method::DELETE, "/api/tasks/t1".to_string()),
            get("/api/tasks?page=0&size=5"),
        ]
    );
    assert!(harness.alerts.is_empty());
}

#[tokio::test]
async fn empty_description_never_reaches_the_server() {
    let mut harness = Harness::started().await;

    harness.send(Msg::OpenCreate).await;
    harness.send(Msg::TitleInput("Buy milk".into())).await;
    harness.send(Msg::Save).await;

    assert!(harness.server().requests().is_empty());
    assert!(harness.dashboard.modal_open);
    assert_eq!(
        harness
            .dashboard
            .errors
            .description
            .map(|e| e.to_string())
            .as_deref(),
        Some("Description is required")
    );
}

#[tokio::test]
async fn create_posts_then_refreshes_and_closes_the_modal() {
    let mut harness = Harness::started().await;

    harness.send(Msg::OpenCreate).await;
    harness
        .send(Msg::TitleInput("<script>alert(1)</script>Buy milk".into()))
        .await;
    harness.send(Msg::DescriptionInput("2 litres".into())).await;
    harness.send(Msg::Save).await;

    assert_eq!(
        harness.server().requests(),
        vec![
            (Method::POST, "/api/tasks".to_string()),
            get("/api/tasks?page=0&size=5"),
        ]
    );
    assert!(!harness.dashboard.modal_open);
    assert!(harness.dashboard.errors.is_empty());
}

#[tokio::test]
async fn edit_puts_to_the_task_and_keeps_the_page() {
    let mut harness = Harness::started().await;
    harness.send(Msg::GotoPage(1)).await;
    harness.client.transport().forget();
    let target = harness.dashboard.tasks[0].clone();

    harness.send(Msg::OpenEdit(target)).await;
    harness.send(Msg::TitleInput("Call Sam today".into())).await;
    harness.send(Msg::Save).await;

    assert_eq!(
        harness.server().requests(),
        vec![
            (Method::PUT, "/api/tasks/t6".to_string()),
            get("/api/tasks?page=1&size=5"),
        ]
    );
}

#[tokio::test]
async fn paging_respects_bounds() {
    let mut harness = Harness::started().await;

    harness.send(Msg::GotoPage(-1)).await;
    harness.send(Msg::GotoPage(2)).await;
    assert!(harness.server().requests().is_empty());

    harness.send(Msg::GotoPage(1)).await;
    assert_eq!(harness.server().requests(), vec![get("/api/tasks?page=1&size=5")]);
    assert_eq!(harness.dashboard.current_page, 1);
    assert_eq!(harness.dashboard.tasks[0].id, "t6");
}

#[tokio::test]
async fn search_goes_back_to_the_first_page() {
    let mut harness = Harness::started().await;
    harness.send(Msg::GotoPage(1)).await;
    harness.client.transport().forget();

    harness.send(Msg::SearchInput("milk".into())).await;
    harness.send(Msg::Search).await;

    assert_eq!(
        harness.server().requests(),
        vec![get("/api/tasks?page=0&size=5&search=milk")]
    );
    assert_eq!(harness.dashboard.current_page, 0);
}

#[tokio::test]
async fn failed_refresh_alerts_and_keeps_what_is_shown() {
    let mut harness = Harness::started().await;
    let shown = harness.dashboard.tasks.clone();
    harness.server().down.set(true);

    harness.send(Msg::GotoPage(1)).await;

    assert_eq!(
        harness.alerts,
        vec!["Failed to load tasks. Please check your connection.".to_string()]
    );
    assert_eq!(harness.dashboard.tasks, shown);
}

#[tokio::test]
async fn failed_save_leaves_the_modal_open() {
    let mut harness = Harness::started().await;
    harness.send(Msg::OpenCreate).await;
    harness.send(Msg::TitleInput("Buy milk".into())).await;
    harness.send(Msg::DescriptionInput("2 litres".into())).await;
    harness.server().down.set(true);

    harness.send(Msg::Save).await;

    assert_eq!(harness.alerts, vec!["Failed to create task".to_string()]);
    assert!(harness.dashboard.modal_open);
    assert_eq!(harness.dashboard.form.title, "Buy milk");
}

#[tokio::test]
async fn logs_tab_loads_the_audit_trail() {
    let mut harness = Harness::started().await;

    harness.send(Msg::SwitchTab(Tab::Logs)).await;

    assert_eq!(harness.server().requests(), vec![get("/api/logs")]);
    let logs = &harness.dashboard.audit_logs;
    assert_eq!(logs.len(), 2);
    assert_eq!(action_class(&logs[0].action), "action-update");
    assert_eq!(
        format_updated_content(logs[0].updated_content.as_ref()),
        "title: \"Buy oat milk\""
    );
}
