use askama::Template;

use super::PageContext;
use crate::dashboard::page::RenderedRegion;
use crate::models::{Client, ClientPatch, ClientType, NewClient, Priority};

#[derive(Template)]
#[template(path = "page.html")]
pub struct PageTemplate {
    pub ctx: PageContext,
    pub regions: Vec<RenderedRegion>,
    /// Only the clients page carries a form.
    pub client_form: Option<ClientFormView>,
}

#[derive(Template)]
#[template(path = "not_found.html")]
pub struct NotFoundTemplate {
    pub ctx: PageContext,
    pub path: String,
}

pub struct SelectOption {
    pub value: &'static str,
    pub label: &'static str,
    pub selected: bool,
}

const CLIENT_TYPES: [(ClientType, &str); 3] = [
    (ClientType::Customer, "customer"),
    (ClientType::Distributor, "distributor"),
    (ClientType::Supplier, "supplier"),
];

const PRIORITIES: [(Priority, &str); 4] = [
    (Priority::Low, "low"),
    (Priority::Normal, "normal"),
    (Priority::High, "high"),
    (Priority::Urgent, "urgent"),
];

/// Create or edit form for a client. Field names match the JSON schema.
pub struct ClientFormView {
    pub action: String,
    pub heading: &'static str,
    pub submit_label: &'static str,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub client_types: Vec<SelectOption>,
    pub priorities: Vec<SelectOption>,
}

impl ClientFormView {
    pub fn create() -> Self {
        Self::with_values(
            "/clients".to_string(),
            "Nuevo cliente",
            "Crear cliente",
            ("", "", "", ""),
            ClientType::default(),
            Priority::default(),
        )
    }

    pub fn edit(client: &Client) -> Self {
        Self::with_values(
            format!("/clients/{}", client.id),
            "Editar cliente",
            "Guardar cambios",
            (
                client.name.as_str(),
                client.email.as_str(),
                client.phone.as_str(),
                client.address.as_str(),
            ),
            client.client_type,
            client.priority,
        )
    }

    /// Create form refilled after a rejected submission.
    pub fn refill_create(client: &NewClient) -> Self {
        Self::with_values(
            "/clients".to_string(),
            "Nuevo cliente",
            "Crear cliente",
            (
                client.name.as_str(),
                client.email.as_str(),
                client.phone.as_str(),
                client.address.as_str(),
            ),
            client.client_type,
            client.priority,
        )
    }

    /// Edit form refilled after a rejected submission.
    pub fn refill_edit(id: i64, patch: &ClientPatch) -> Self {
        Self::with_values(
            format!("/clients/{id}"),
            "Editar cliente",
            "Guardar cambios",
            (
                patch.name.as_deref().unwrap_or_default(),
                patch.email.as_deref().unwrap_or_default(),
                patch.phone.as_deref().unwrap_or_default(),
                patch.address.as_deref().unwrap_or_default(),
            ),
            patch.client_type.unwrap_or_default(),
            patch.priority.unwrap_or_default(),
        )
    }

    fn with_values(
        action: String,
        heading: &'static str,
        submit_label: &'static str,
        (name, email, phone, address): (&str, &str, &str, &str),
        client_type: ClientType,
        priority: Priority,
    ) -> Self {
        Self {
            action,
            heading,
            submit_label,
            name: name.to_string(),
            email: email.to_string(),
            phone: phone.to_string(),
            address: address.to_string(),
            client_types: CLIENT_TYPES
                .iter()
                .map(|&(t, value)| SelectOption { value, label: t.label(), selected: t == client_type })
                .collect(),
            priorities: PRIORITIES
                .iter()
                .map(|&(p, value)| SelectOption { value, label: p.label(), selected: p == priority })
                .collect(),
        }
    }
}
