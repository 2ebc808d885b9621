//! URL path → page.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Dashboard,
    Fleet,
    Routes,
    Orders,
    Clients,
    Inventory,
    Drivers,
    Maintenance,
    Fuel,
    Suppliers,
    Finances,
    Reports,
}

impl Route {
    /// Every page, in navigation order.
    pub const ALL: [Route; 12] = [
        Route::Dashboard,
        Route::Fleet,
        Route::Routes,
        Route::Orders,
        Route::Clients,
        Route::Inventory,
        Route::Drivers,
        Route::Maintenance,
        Route::Fuel,
        Route::Suppliers,
        Route::Finances,
        Route::Reports,
    ];

    pub fn path(self) -> &'static str {
        match self {
            Route::Dashboard => "/",
            Route::Fleet => "/fleet",
            Route::Routes => "/routes",
            Route::Orders => "/orders",
            Route::Clients => "/clients",
            Route::Inventory => "/inventory",
            Route::Drivers => "/drivers",
            Route::Maintenance => "/maintenance",
            Route::Fuel => "/fuel",
            Route::Suppliers => "/suppliers",
            Route::Finances => "/finances",
            Route::Reports => "/reports",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Route::Dashboard => "Panel",
            Route::Fleet => "Flota",
            Route::Routes => "Rutas",
            Route::Orders => "Pedidos",
            Route::Clients => "Clientes",
            Route::Inventory => "Inventario",
            Route::Drivers => "Conductores",
            Route::Maintenance => "Mantenimiento",
            Route::Fuel => "Combustible",
            Route::Suppliers => "Proveedores",
            Route::Finances => "Finanzas",
            Route::Reports => "Reportes",
        }
    }

    /// Path segment used by the widget fragment URLs.
    pub fn slug(self) -> &'static str {
        match self {
            Route::Dashboard => "dashboard",
            other => other.path().trim_start_matches('/'),
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.slug() == slug)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    Page(Route),
    NotFound,
}

/// Ordered (path, page) table. The first exact match wins.
#[derive(Debug, Clone)]
pub struct RouteDispatcher {
    table: Vec<(&'static str, Route)>,
}

impl RouteDispatcher {
    pub fn new(table: Vec<(&'static str, Route)>) -> Self {
        Self { table }
    }

    /// One entry per page, at its canonical path.
    pub fn standard() -> Self {
        Self::new(Route::ALL.into_iter().map(|r| (r.path(), r)).collect())
    }

    pub fn dispatch(&self, path: &str) -> Dispatch {
        self.table
            .iter()
            .find(|(candidate, _)| *candidate == path)
            .map_or(Dispatch::NotFound, |(_, route)| Dispatch::Page(*route))
    }
}
