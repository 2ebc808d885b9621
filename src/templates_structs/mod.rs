// Template context structures for Askama templates, organized by surface.

use crate::dashboard::notify::Toast;
use crate::dashboard::page::UiToggles;
use crate::dashboard::router::Route;

pub const APP_NAME: &str = "FleetDash";

/// One entry of the main navigation.
pub struct NavLink {
    pub label: &'static str,
    pub url: &'static str,
    pub is_active: bool,
}

/// Common context shared by all pages.
/// Templates access these as `ctx.title`, `ctx.nav`, etc.
pub struct PageContext {
    pub app_name: &'static str,
    pub title: &'static str,
    pub current_path: String,
    pub nav: Vec<NavLink>,
    pub flash: Option<String>,
    pub errors: Vec<String>,
    pub menu_open: bool,
    pub toasts: Vec<Toast>,
}

impl PageContext {
    pub fn build(current_path: &str, title: &'static str, toggles: UiToggles) -> Self {
        let nav = Route::ALL
            .iter()
            .map(|route| NavLink {
                label: route.title(),
                url: route.path(),
                is_active: route.path() == current_path,
            })
            .collect();
        Self {
            app_name: APP_NAME,
            title,
            current_path: current_path.to_string(),
            nav,
            flash: None,
            errors: Vec::new(),
            menu_open: toggles.menu_open,
            toasts: Vec::new(),
        }
    }

    /// Link that flips the mobile navigation overlay.
    pub fn menu_toggle_url(&self) -> String {
        if self.menu_open {
            self.current_path.clone()
        } else {
            format!("{}?menu=open", self.current_path)
        }
    }
}

mod api;
mod pages;
mod widgets;

pub use self::api::ApiErrorResponse;
pub use self::pages::{ClientFormView, NotFoundTemplate, PageTemplate, SelectOption};
pub use self::widgets::{
    FleetMapTemplate, ListTemplate, MetricCardsTemplate, TableTemplate, VehicleCardsTemplate,
};
