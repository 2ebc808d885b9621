//! Global error notifications.

use super::resource::FetchError;

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub message: String,
    pub detail: String,
}

impl Toast {
    pub fn fetch_failed(widget_title: &str, error: &FetchError) -> Self {
        Self {
            message: format!("No se pudo cargar «{widget_title}»"),
            detail: error.to_string(),
        }
    }
}

/// Receives every failure a widget could not display.
pub trait Notifier: Send + Sync {
    fn notify(&self, toast: &Toast);
}

/// Writes toasts to the application log.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, toast: &Toast) {
        log::error!("{}: {}", toast.message, toast.detail);
    }
}
