use crate::api::ApiClient;
use crate::browser;
use crate::config::ClientConfig;
use crate::dashboard::{Dashboard, Effect, Msg};
use crate::fetch::FetchTransport;
use sauron::prelude::*;
use std::rc::Rc;

pub struct App {
    dashboard: Dashboard,
    client: Rc<ApiClient<FetchTransport>>,
}

impl App {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            dashboard: Dashboard::new(config.page_size),
            client: Rc::new(ApiClient::new(config, FetchTransport)),
        }
    }

    fn run(&mut self, effects: Vec<Effect>) -> Cmd<Msg> {
        let cmds = effects
            .into_iter()
            .map(|effect| self.run_effect(effect))
            .collect::<Vec<_>>();
        Cmd::batch(cmds)
    }

    fn run_effect(&mut self, effect: Effect) -> Cmd<Msg> {
        match effect {
            Effect::Api(call) => {
                let client = Rc::clone(&self.client);
                Cmd::new(async move { call.perform(&client).await })
            }
            Effect::Alert(message) => {
                browser::alert(&message);
                Cmd::none()
            }
            Effect::Confirm { message, on_confirm } => {
                if browser::confirm(&message) {
                    self.update(on_confirm)
                } else {
                    Cmd::none()
                }
            }
            Effect::PushRoute(path) => {
                browser::push_route(path);
                Cmd::none()
            }
        }
    }
}

impl Application for App {
    type MSG = Msg;

    fn init(&mut self) -> Cmd<Msg> {
        let effects = self.dashboard.init(browser::current_tab());
        self.run(effects)
    }

    fn update(&mut self, msg: Msg) -> Cmd<Msg> {
        let effects = self.dashboard.update(msg);
        self.run(effects)
    }

    fn view(&self) -> Node<Msg> {
        self.dashboard.view()
    }
}
