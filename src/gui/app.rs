use std::sync::Arc;

use anyhow::Context;
use iced::{Element, Task};

use super::{AppState, Message, screens::Screens, widgets};
use crate::{Advisor, AppConfig, GeminiClient, ViewController};

#[derive(Debug, Clone)]
pub struct DashboardApp {
    state: AppState,
    screens: Screens,
}

impl DashboardApp {
    pub fn new(config: &AppConfig, session: ViewController) -> anyhow::Result<Self> {
        let client = GeminiClient::new(&config.advisory)
            .context("Failed to set up the advisory client")?;
        Ok(Self {
            state: AppState {
                session,
                advisor: Arc::new(Advisor::new(client)),
                report_file_name: config.report.file_name.clone(),
            },
            screens: Screens::default(),
        })
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        self.screens.update(message, &mut self.state)
    }

    pub fn view(&self) -> Element<'_, Message> {
        widgets::layout(
            self.state.session.active_view(),
            self.screens.view(&self.state),
        )
    }
}

/// Opens the dashboard window and blocks until it is closed.
pub fn run(config: AppConfig, session: ViewController) -> anyhow::Result<()> {
    let app = DashboardApp::new(&config, session)?;
    tracing::info!("starting dashboard window");

    iced::application(move || app.clone(), DashboardApp::update, DashboardApp::view)
        .title("Konstruksi Pro Master")
        .run()
        .context("Dashboard window failed")
}
