use crate::{
    core::ActiveView,
    gui::screens::{
        ScreenMessage, advisory::AdvisoryScreen, dashboard::DashboardScreen,
        inventory::InventoryScreen, projects::ProjectsScreen,
    },
};

#[derive(Debug, Clone)]
pub enum Message {
    Navigate(ActiveView),
    Dashboard(ScreenMessage<DashboardScreen>),
    Projects(ScreenMessage<ProjectsScreen>),
    Inventory(ScreenMessage<InventoryScreen>),
    Advisory(ScreenMessage<AdvisoryScreen>),
}
