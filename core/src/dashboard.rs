//! Seller dashboard navigation.

use std::fmt;

/// Sidebar tabs of the seller dashboard.
///
/// Switching tabs is pure client state; no data is refetched.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum DashboardTab {
    #[default]
    Dashboard,
    Properties,
    Insights,
    Messages,
}

impl DashboardTab {
    /// Sidebar order.
    pub const ALL: [DashboardTab; 4] = [
        DashboardTab::Dashboard,
        DashboardTab::Properties,
        DashboardTab::Insights,
        DashboardTab::Messages,
    ];

    /// Stable key, used for element ids.
    pub fn key(&self) -> &'static str {
        match self {
            DashboardTab::Dashboard => "dashboard",
            DashboardTab::Properties => "properties",
            DashboardTab::Insights => "insights",
            DashboardTab::Messages => "messages",
        }
    }

    /// Sidebar label.
    pub fn label(&self) -> &'static str {
        match self {
            DashboardTab::Dashboard => "Dashboard",
            DashboardTab::Properties => "My Properties",
            DashboardTab::Insights => "Insights",
            DashboardTab::Messages => "Messages",
        }
    }
}

impl fmt::Display for DashboardTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
