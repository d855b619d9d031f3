//! View state and message handling for the dashboard.
//!
//! `Dashboard::update` never touches the network or the DOM. It returns the
//! effects the runtime has to carry out; API results come back in as new
//! messages.

use crate::api::{ApiClient, Transport};
use shared::{AuditLog, FormErrors, Task, TaskForm, TaskPage, TaskRequest};
use tracing::{debug, error};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Tasks,
    Logs,
}

impl Tab {
    pub fn to_path(&self) -> &'static str {
        match self {
            Tab::Tasks => "/",
            Tab::Logs => "/logs",
        }
    }

    pub fn from_path(path: &str) -> Self {
        match path.trim_end_matches('/') {
            "/logs" => Tab::Logs,
            _ => Tab::Tasks,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum FormMode {
    Create,
    Edit(Task),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    LoadTasks,
    CreateTask,
    UpdateTask,
    DeleteTask,
    LoadAuditLogs,
}

impl Operation {
    pub fn alert_message(&self) -> &'static str {
        match self {
            Operation::LoadTasks => "Failed to load tasks. Please check your connection.",
            Operation::CreateTask => "Failed to create task",
            Operation::UpdateTask => "Failed to update task",
            Operation::DeleteTask => "Failed to delete task",
            Operation::LoadAuditLogs => "Failed to load audit logs",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    SwitchTab(Tab),

    // Task list
    LoadTasks,
    TasksLoaded(TaskPage),
    SearchInput(String),
    Search,
    GotoPage(i64),

    // Modal
    OpenCreate,
    OpenEdit(Task),
    CloseModal,
    TitleInput(String),
    DescriptionInput(String),
    Save,
    TaskSaved(Task),

    // Deletion
    DeleteTask(Task),
    DeleteConfirmed(String),
    TaskDeleted(String),

    // Audit log
    LoadAuditLogs,
    AuditLogsLoaded(Vec<AuditLog>),

    Failed(Operation, String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum ApiCall {
    ListTasks { page: u32, size: u32, search: String },
    CreateTask(TaskRequest),
    UpdateTask { id: String, payload: TaskRequest },
    DeleteTask { id: String },
    ListAuditLogs,
}

impl ApiCall {
    /// Runs the call and folds the outcome into the message that reports it.
    pub async fn perform<T: Transport>(self, client: &ApiClient<T>) -> Msg {
        match self {
            ApiCall::ListTasks { page, size, search } => {
                match client.list_tasks(page, size, &search).await {
                    Ok(page) => Msg::TasksLoaded(page),
                    Err(e) => Msg::Failed(Operation::LoadTasks, e.to_string()),
                }
            }
            ApiCall::CreateTask(payload) => match client.create_task(&payload).await {
                Ok(task) => Msg::TaskSaved(task),
                Err(e) => Msg::Failed(Operation::CreateTask, e.to_string()),
            },
            ApiCall::UpdateTask { id, payload } => match client.update_task(&id, &payload).await {
                Ok(task) => Msg::TaskSaved(task),
                Err(e) => Msg::Failed(Operation::UpdateTask, e.to_string()),
            },
            ApiCall::DeleteTask { id } => match client.delete_task(&id).await {
                Ok(()) => Msg::TaskDeleted(id),
                Err(e) => Msg::Failed(Operation::DeleteTask, e.to_string()),
            },
            ApiCall::ListAuditLogs => match client.list_audit_logs().await {
                Ok(logs) => Msg::AuditLogsLoaded(logs),
                Err(e) => Msg::Failed(Operation::LoadAuditLogs, e.to_string()),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    Api(ApiCall),
    Alert(String),
    /// Ask the user; `on_confirm` is dispatched only on a yes.
    Confirm { message: String, on_confirm: Msg },
    PushRoute(&'static str),
}

#[derive(Debug, Clone)]
pub struct Dashboard {
    pub tab: Tab,

    pub tasks: Vec<Task>,
    pub current_page: u32,
    pub total_pages: u32,
    pub total_items: u64,
    pub page_size: u32,
    pub search_query: String,

    pub audit_logs: Vec<AuditLog>,

    pub modal_open: bool,
    pub mode: FormMode,
    pub form: TaskForm,
    pub errors: FormErrors,
}

impl Dashboard {
    pub fn new(page_size: u32) -> Self {
        Self {
            tab: Tab::Tasks,
            tasks: Vec::new(),
            current_page: 0,
            total_pages: 0,
            total_items: 0,
            page_size: page_size.max(1),
            search_query: String::new(),
            audit_logs: Vec::new(),
            modal_open: false,
            mode: FormMode::Create,
            form: TaskForm::default(),
            errors: FormErrors::default(),
        }
    }

    /// Effects to run on start-up for the given tab.
    pub fn init(&mut self, tab: Tab) -> Vec<Effect> {
        self.tab = tab;
        let mut effects = vec![self.list_current()];
        if tab == Tab::Logs {
            effects.push(Effect::Api(ApiCall::ListAuditLogs));
        }
        effects
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.mode, FormMode::Edit(_))
    }

    pub fn has_previous_page(&self) -> bool {
        self.current_page > 0
    }

    pub fn has_next_page(&self) -> bool {
        self.current_page + 1 < self.total_pages
    }

    pub fn update(&mut self, msg: Msg) -> Vec<Effect> {
        match msg {
            Msg::SwitchTab(tab) => {
                self.tab = tab;
                let mut effects = vec![Effect::PushRoute(tab.to_path())];
                if tab == Tab::Logs {
                    effects.push(Effect::Api(ApiCall::ListAuditLogs));
                }
                effects
            }
            Msg::LoadTasks => vec![self.list_current()],
            Msg::TasksLoaded(page) => {
                debug!(
                    tasks = page.tasks.len(),
                    current_page = page.current_page,
                    total_pages = page.total_pages,
                    "tasks loaded"
                );
                if page.total_pages > 0 && page.current_page >= page.total_pages {
                    // The page we asked for vanished, e.g. its last task was deleted.
                    self.current_page = page.total_pages - 1;
                    self.total_pages = page.total_pages;
                    self.total_items = page.total_items;
                    return vec![self.list_current()];
                }
                self.tasks = page.tasks;
                self.current_page = page.current_page;
                self.total_pages = page.total_pages;
                self.total_items = page.total_items;
                Vec::new()
            }
            Msg::SearchInput(query) => {
                self.search_query = query;
                Vec::new()
            }
            Msg::Search => {
                self.current_page = 0;
                vec![self.list_current()]
            }
            Msg::GotoPage(page) => match u32::try_from(page) {
                Ok(page) if page < self.total_pages => {
                    self.current_page = page;
                    vec![self.list_current()]
                }
                _ => Vec::new(),
            },
            Msg::OpenCreate => {
                self.mode = FormMode::Create;
                self.form = TaskForm::default();
                self.errors = FormErrors::default();
                self.modal_open = true;
                Vec::new()
            }
            Msg::OpenEdit(task) => {
                self.form = TaskForm::new(task.title.clone(), task.description.clone());
                self.mode = FormMode::Edit(task);
                self.errors = FormErrors::default();
                self.modal_open = true;
                Vec::new()
            }
            Msg::CloseModal => {
                self.close_modal();
                Vec::new()
            }
            Msg::TitleInput(title) => {
                self.form.title = title;
                Vec::new()
            }
            Msg::DescriptionInput(description) => {
                self.form.description = description;
                Vec::new()
            }
            Msg::Save => match self.form.validate() {
                Err(errors) => {
                    debug!(?errors, "task form rejected");
                    self.errors = errors;
                    Vec::new()
                }
                Ok(payload) => {
                    self.errors = FormErrors::default();
                    let call = match &self.mode {
                        FormMode::Create => ApiCall::CreateTask(payload),
                        FormMode::Edit(task) => ApiCall::UpdateTask {
                            id: task.id.clone(),
                            payload,
                        },
                    };
                    vec![Effect::Api(call)]
                }
            },
            Msg::TaskSaved(task) => {
                debug!(id = %task.id, "task saved");
                let effects = vec![self.list_current()];
                self.close_modal();
                effects
            }
            Msg::DeleteTask(task) => vec![Effect::Confirm {
                message: format!("Are you sure you want to delete \"{}\"?", task.title),
                on_confirm: Msg::DeleteConfirmed(task.id),
            }],
            Msg::DeleteConfirmed(id) => vec![Effect::Api(ApiCall::DeleteTask { id })],
            Msg::TaskDeleted(id) => {
                debug!(%id, "task deleted");
                vec![self.list_current()]
            }
            Msg::LoadAuditLogs => vec![Effect::Api(ApiCall::ListAuditLogs)],
            Msg::AuditLogsLoaded(logs) => {
                debug!(entries = logs.len(), "audit logs loaded");
                self.audit_logs = logs;
                Vec::new()
            }
            Msg::Failed(operation, reason) => {
                error!(?operation, %reason, "request failed");
                vec![Effect::Alert(operation.alert_message().to_string())]
            }
        }
    }

    fn list_current(&self) -> Effect {
        Effect::Api(ApiCall::ListTasks {
            page: self.current_page,
            size: self.page_size,
            search: self.search_query.clone(),
        })
    }

    fn close_modal(&mut self) {
        self.modal_open = false;
        self.form = TaskForm::default();
        self.errors = FormErrors::default();
    }
}
