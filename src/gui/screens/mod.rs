pub mod advisory;
pub mod dashboard;
pub mod inventory;
pub mod projects;

use iced::{Element, Task};

use crate::{
    core::ActiveView,
    gui::{AppState, Message},
};

#[derive(Debug, Clone)]
pub enum ScreenMessage<S: Screen> {
    ScreenMessage(S::Message),
    ParentMessage(S::ParentMessage),
}

pub trait Screen: Sized {
    type Message: std::fmt::Debug + Clone;
    type ParentMessage: std::fmt::Debug + Clone;
    fn view<'a>(&'a self, state: &'a AppState) -> Element<'a, ScreenMessage<Self>>;
    fn update(&mut self, message: Self::Message, state: &mut AppState)
    -> Task<ScreenMessage<Self>>;
}

/// One instance of every screen. Which one is shown is decided by the
/// session's active view, so screen state survives navigation.
#[derive(Debug, Clone, Default)]
pub struct Screens {
    pub dashboard: dashboard::DashboardScreen,
    pub projects: projects::ProjectsScreen,
    pub inventory: inventory::InventoryScreen,
    pub advisory: advisory::AdvisoryScreen,
}

impl Screens {
    pub fn view<'a>(&'a self, state: &'a AppState) -> Element<'a, Message> {
        match state.session.active_view() {
            ActiveView::Dashboard => self.dashboard.view(state).map(Message::Dashboard),
            ActiveView::Projects => self.projects.view(state).map(Message::Projects),
            ActiveView::Inventory => self.inventory.view(state).map(Message::Inventory),
            ActiveView::AdvisoryPanel => self.advisory.view(state).map(Message::Advisory),
        }
    }

    pub fn update(&mut self, message: Message, state: &mut AppState) -> Task<Message> {
        match message {
            Message::Navigate(view) => {
                state.session.set_active_view(view);
                Task::none()
            }
            Message::Dashboard(ScreenMessage::ScreenMessage(msg)) => {
                self.dashboard.update(msg, state).map(Message::Dashboard)
            }
            Message::Dashboard(ScreenMessage::ParentMessage(never)) => match never {},
            Message::Projects(ScreenMessage::ScreenMessage(msg)) => {
                self.projects.update(msg, state).map(Message::Projects)
            }
            Message::Projects(ScreenMessage::ParentMessage(never)) => match never {},
            Message::Inventory(ScreenMessage::ScreenMessage(msg)) => {
                self.inventory.update(msg, state).map(Message::Inventory)
            }
            Message::Inventory(ScreenMessage::ParentMessage(parent_msg)) => match parent_msg {
                inventory::ParentMessage::AskAdvisor => {
                    Task::done(Message::Navigate(ActiveView::AdvisoryPanel))
                }
            },
            Message::Advisory(ScreenMessage::ScreenMessage(msg)) => {
                self.advisory.update(msg, state).map(Message::Advisory)
            }
            Message::Advisory(ScreenMessage::ParentMessage(never)) => match never {},
        }
    }
}
