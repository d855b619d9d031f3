use crate::browser::locale_timestamp;
use crate::dashboard::{Dashboard, Msg, Tab};
use sauron::{
    html::{attributes::*, *},
    prelude::*,
};
use shared::format::{action_class, format_updated_content, page_summary, EMPTY_CONTENT};
use shared::validate::{DESCRIPTION_MAX_CHARS, TITLE_MAX_CHARS};
use shared::{AuditLog, FieldError, Task};

impl Dashboard {
    pub fn view(&self) -> Node<Msg> {
        div(
            [class("min-h-screen bg-ctp-base text-ctp-text")],
            [
                self.view_header(),
                div(
                    [class("max-w-6xl mx-auto px-6 py-8")],
                    [match self.tab {
                        Tab::Tasks => self.view_tasks_tab(),
                        Tab::Logs => self.view_logs_tab(),
                    }],
                ),
                if self.modal_open {
                    self.view_modal()
                } else {
                    span([], [])
                },
            ],
        )
    }

    fn view_header(&self) -> Node<Msg> {
        header([class("bg-ctp-mantle shadow-lg border-b border-ctp-surface0")], [
            div([class("max-w-6xl mx-auto px-6 py-4")], [
                div([class("flex items-center justify-between")], [
                    h1([class("text-2xl font-bold text-ctp-text")], [text("Task Manager Dashboard")]),
                    nav([class("flex space-x-4")], [
                        self.tab_link("Tasks", Tab::Tasks),
                        self.tab_link("Audit Logs", Tab::Logs),
                    ]),
                ]),
            ]),
        ])
    }

    fn tab_link(&self, caption: &str, tab: Tab) -> Node<Msg> {
        let is_active = self.tab == tab;
        a([
            href(tab.to_path()),
            on_click(move |event| {
                event.prevent_default();
                Msg::SwitchTab(tab)
            }),
            class(&format!(
                "px-3 py-2 rounded-md text-sm font-medium transition-colors duration-200 {}",
                if is_active {
                    "bg-ctp-blue text-ctp-base"
                } else {
                    "text-ctp-subtext0 hover:text-ctp-text hover:bg-ctp-surface0"
                }
            )),
        ], [text(caption)])
    }

    fn view_tasks_tab(&self) -> Node<Msg> {
        div([class("bg-ctp-surface0 rounded-lg shadow-lg p-6 border border-ctp-surface1 space-y-6")], [
            div([class("flex flex-wrap items-center gap-3")], [
                input([
                    r#type("text"),
                    placeholder("Search tasks..."),
                    value(&self.search_query),
                    on_input(|event| Msg::SearchInput(event.value())),
                    class("flex-1 px-3 py-2 bg-ctp-surface1 border border-ctp-surface2 rounded-md text-ctp-text placeholder-ctp-subtext0 focus:outline-none focus:ring-2 focus:ring-ctp-blue"),
                ], []),
                button([
                    on_click(|_| Msg::Search),
                    class("bg-ctp-surface2 hover:bg-ctp-overlay0 text-ctp-text font-medium px-4 py-2 rounded-md"),
                ], [text("Search")]),
                button([
                    on_click(|_| Msg::OpenCreate),
                    class("bg-ctp-blue hover:bg-ctp-sapphire text-ctp-base font-medium px-4 py-2 rounded-md"),
                ], [text("New Task")]),
            ]),
            if self.tasks.is_empty() {
                div([class("text-center py-12 text-ctp-subtext0")], [text("No tasks found.")])
            } else {
                table([class("w-full text-left")], [
                    thead([], [tr([class("text-ctp-subtext0 text-sm border-b border-ctp-surface2")], [
                        th([class("py-2")], [text("Title")]),
                        th([class("py-2")], [text("Description")]),
                        th([class("py-2")], [text("Created")]),
                        th([class("py-2")], [text("Actions")]),
                    ])]),
                    tbody([], self.tasks.iter().map(|task| self.view_task_row(task)).collect::<Vec<_>>()),
                ])
            },
            self.view_pagination(),
        ])
    }

    fn view_task_row(&self, task: &Task) -> Node<Msg> {
        let created = task
            .created_at
            .as_ref()
            .map(locale_timestamp)
            .unwrap_or_else(|| EMPTY_CONTENT.to_string());

        tr([key(task.id.clone()), class("border-b border-ctp-surface1 align-top")], [
            td([class("py-3 pr-4 font-semibold")], [text(&task.title)]),
            td([class("py-3 pr-4 text-ctp-subtext1 break-words")], [text(&task.description)]),
            td([class("py-3 pr-4 text-sm text-ctp-subtext0 whitespace-nowrap")], [text(&created)]),
            td([class("py-3 whitespace-nowrap space-x-2")], [
                button([
                    on_click({
                        let captured = task.clone();
                        move |_| Msg::OpenEdit(captured.clone())
                    }),
                    class("px-3 py-1 rounded-md bg-ctp-blue/20 text-ctp-blue hover:bg-ctp-blue/30 text-sm"),
                ], [text("Edit")]),
                button([
                    on_click({
                        let captured = task.clone();
                        move |_| Msg::DeleteTask(captured.clone())
                    }),
                    class("px-3 py-1 rounded-md bg-ctp-red/20 text-ctp-red hover:bg-ctp-red/30 text-sm"),
                ], [text("Delete")]),
            ]),
        ])
    }

    fn view_pagination(&self) -> Node<Msg> {
        let current = i64::from(self.current_page);
        let page_buttons = (0..self.total_pages).map(|page| {
            let is_current = page == self.current_page;
            button([
                on_click(move |_| Msg::GotoPage(i64::from(page))),
                class(&format!(
                    "w-8 h-8 rounded-md text-sm {}",
                    if is_current {
                        "bg-ctp-blue text-ctp-base"
                    } else {
                        "bg-ctp-surface1 text-ctp-text hover:bg-ctp-surface2"
                    }
                )),
            ], [text(&(page + 1).to_string())])
        });

        div([class("flex items-center justify-between")], [
            span([class("text-sm text-ctp-subtext0")], [
                text(&page_summary(self.current_page, self.total_pages, self.total_items)),
            ]),
            div(
                [class("flex items-center gap-1")],
                std::iter::once(button([
                    on_click(move |_| Msg::GotoPage(current - 1)),
                    disabled(!self.has_previous_page()),
                    class("px-3 h-8 rounded-md bg-ctp-surface1 text-sm disabled:opacity-50"),
                ], [text("Previous")]))
                .chain(page_buttons)
                .chain(std::iter::once(button([
                    on_click(move |_| Msg::GotoPage(current + 1)),
                    disabled(!self.has_next_page()),
                    class("px-3 h-8 rounded-md bg-ctp-surface1 text-sm disabled:opacity-50"),
                ], [text("Next")])))
                .collect::<Vec<_>>(),
            ),
        ])
    }

    fn view_modal(&self) -> Node<Msg> {
        let heading = if self.is_editing() { "Edit Task" } else { "Create Task" };

        div([class("fixed inset-0 bg-black/50 flex items-center justify-center")], [
            div([class("bg-ctp-surface0 rounded-lg shadow-xl p-6 w-full max-w-lg border border-ctp-surface1 space-y-4")], [
                h2([class("text-xl font-semibold pb-2 border-b border-ctp-surface2")], [text(heading)]),
                div([], [
                    input([
                        r#type("text"),
                        placeholder("Task title"),
                        value(&self.form.title),
                        on_input(|event| Msg::TitleInput(event.value())),
                        class("w-full px-3 py-2 bg-ctp-surface1 border border-ctp-surface2 rounded-md text-ctp-text focus:outline-none focus:ring-2 focus:ring-ctp-blue"),
                    ], []),
                    char_counter(&self.form.title, TITLE_MAX_CHARS),
                    field_error(self.errors.title),
                ]),
                div([], [
                    textarea([
                        placeholder("Task description"),
                        value(&self.form.description),
                        on_input(|event| Msg::DescriptionInput(event.value())),
                        class("w-full px-3 py-2 bg-ctp-surface1 border border-ctp-surface2 rounded-md text-ctp-text focus:outline-none focus:ring-2 focus:ring-ctp-blue h-28 resize-y"),
                    ], []),
                    char_counter(&self.form.description, DESCRIPTION_MAX_CHARS),
                    field_error(self.errors.description),
                ]),
                div([class("flex justify-end gap-2")], [
                    button([
                        on_click(|_| Msg::CloseModal),
                        class("bg-ctp-overlay0 hover:bg-ctp-overlay1 text-ctp-text font-medium px-4 py-2 rounded-md"),
                    ], [text("Cancel")]),
                    button([
                        on_click(|_| Msg::Save),
                        class("bg-ctp-green hover:bg-ctp-teal text-ctp-base font-medium px-4 py-2 rounded-md"),
                    ], [text(if self.is_editing() { "Update" } else { "Create" })]),
                ]),
            ]),
        ])
    }

    fn view_logs_tab(&self) -> Node<Msg> {
        div([class("bg-ctp-surface0 rounded-lg shadow-lg p-6 border border-ctp-surface1")], [
            div([class("flex items-center justify-between mb-4")], [
                h2([class("text-2xl font-bold")], [text("Audit Logs")]),
                button([
                    on_click(|_| Msg::LoadAuditLogs),
                    class("bg-ctp-surface2 hover:bg-ctp-overlay0 text-ctp-text px-4 py-2 rounded-md text-sm"),
                ], [text("Refresh")]),
            ]),
            if self.audit_logs.is_empty() {
                div([class("text-center py-12 text-ctp-subtext0")], [text("No audit entries yet.")])
            } else {
                table([class("w-full text-left")], [
                    thead([], [tr([class("text-ctp-subtext0 text-sm border-b border-ctp-surface2")], [
                        th([class("py-2")], [text("Timestamp")]),
                        th([class("py-2")], [text("Action")]),
                        th([class("py-2")], [text("Task ID")]),
                        th([class("py-2")], [text("Changes")]),
                        th([class("py-2")], [text("Notes")]),
                    ])]),
                    tbody([], self.audit_logs.iter().map(view_log_row).collect::<Vec<_>>()),
                ])
            },
        ])
    }
}

fn view_log_row(log: &AuditLog) -> Node<Msg> {
    let recorded = log
        .recorded_at()
        .map(|at| locale_timestamp(&at))
        .unwrap_or_else(|| log.timestamp.clone());

    tr([key(log.id.clone()), class("border-b border-ctp-surface1 align-top text-sm")], [
        td([class("py-2 pr-4 whitespace-nowrap")], [text(&recorded)]),
        td([class("py-2 pr-4")], [
            span([class(&format!("px-2 py-1 rounded-full text-xs font-medium {}", action_class(&log.action)))], [
                text(&log.action),
            ]),
        ]),
        td([class("py-2 pr-4 font-mono text-xs")], [text(&log.task_id)]),
        td([class("py-2 pr-4 break-words")], [text(&format_updated_content(log.updated_content.as_ref()))]),
        td([class("py-2 text-ctp-subtext1")], [text(log.notes.as_deref().unwrap_or(EMPTY_CONTENT))]),
    ])
}

fn field_error(error: Option<FieldError>) -> Node<Msg> {
    match error {
        Some(error) => p([class("mt-1 text-sm text-ctp-red")], [text(&error.to_string())]),
        None => span([], []),
    }
}

fn char_counter(content: &str, max: usize) -> Node<Msg> {
    let used = content.chars().count();
    p([class(&format!(
        "mt-1 text-xs text-right {}",
        if used > max { "text-ctp-red" } else { "text-ctp-subtext0" }
    ))], [text(&format!("{}/{}", used, max))])
}
