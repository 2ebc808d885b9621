//! Style tokens for the presentational components.
//!
//! Components never carry CSS class strings around; they pick a token and the
//! tables below turn it into a class.

use crate::models::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleToken {
    Primary,
    Success,
    Warning,
    Danger,
    Info,
    Muted,
}

const TONE_CLASSES: [(StyleToken, &str); 6] = [
    (StyleToken::Primary, "tone-primary"),
    (StyleToken::Success, "tone-success"),
    (StyleToken::Warning, "tone-warning"),
    (StyleToken::Danger, "tone-danger"),
    (StyleToken::Info, "tone-info"),
    (StyleToken::Muted, "tone-muted"),
];

impl StyleToken {
    pub fn class(self) -> &'static str {
        TONE_CLASSES
            .iter()
            .find(|(token, _)| *token == self)
            .map_or("tone-muted", |(_, class)| class)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Truck,
    Package,
    Clock,
    ShieldCheck,
    Wallet,
    TrendingDown,
    Scale,
    MapPin,
    AlertTriangle,
}

const ICON_CLASSES: [(Icon, &str); 9] = [
    (Icon::Truck, "icon-truck"),
    (Icon::Package, "icon-package"),
    (Icon::Clock, "icon-clock"),
    (Icon::ShieldCheck, "icon-shield-check"),
    (Icon::Wallet, "icon-wallet"),
    (Icon::TrendingDown, "icon-trending-down"),
    (Icon::Scale, "icon-scale"),
    (Icon::MapPin, "icon-map-pin"),
    (Icon::AlertTriangle, "icon-alert-triangle"),
];

impl Icon {
    pub fn class(self) -> &'static str {
        ICON_CLASSES
            .iter()
            .find(|(icon, _)| *icon == self)
            .map_or("icon-none", |(_, class)| class)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Up,
    Down,
    Flat,
}

impl Trend {
    pub fn class(self) -> &'static str {
        match self {
            Trend::Up => "trend-up",
            Trend::Down => "trend-down",
            Trend::Flat => "trend-flat",
        }
    }
}

/// Status-like values that render as a colored badge.
pub trait Toned {
    fn tone(&self) -> StyleToken;
    fn label(&self) -> &'static str;
}

macro_rules! toned {
    ($ty:ident { $($variant:ident => $token:ident),+ $(,)? }) => {
        impl Toned for $ty {
            fn tone(&self) -> StyleToken {
                match self {
                    $($ty::$variant => StyleToken::$token,)+
                }
            }

            fn label(&self) -> &'static str {
                $ty::label(*self)
            }
        }
    };
}

toned!(VehicleStatus {
    Active => Success,
    Warning => Warning,
    Inactive => Muted,
    Maintenance => Info,
});

toned!(OrderStatus {
    Pending => Warning,
    InTransit => Info,
    Delivered => Success,
    Cancelled => Muted,
});

toned!(RouteStatus {
    Planned => Info,
    Active => Primary,
    Completed => Success,
});

toned!(DriverStatus {
    Available => Success,
    OnRoute => Primary,
    OffDuty => Muted,
});

toned!(MaintenanceStatus {
    Scheduled => Info,
    InProgress => Primary,
    Done => Success,
    Overdue => Danger,
});

toned!(AlertSeverity {
    Info => Info,
    Warning => Warning,
    Critical => Danger,
});

toned!(Priority {
    Low => Muted,
    Normal => Info,
    High => Warning,
    Urgent => Danger,
});

toned!(ClientType {
    Customer => Primary,
    Distributor => Info,
    Supplier => Muted,
});

toned!(EntryKind {
    Income => Success,
    Expense => Danger,
});

toned!(ReportStatus {
    Ready => Success,
    Pending => Warning,
});
