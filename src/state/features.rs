#[cfg(test)]
#[path = "features_test.rs"]
mod features_test;

/// A feature that exists in the navigation but is not built yet.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Feature {
    pub key: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub phase: &'static str,
}

/// Features that get the "not yet available" modal instead of navigating.
/// Live pages (invoices, payments, children) are deliberately absent so
/// their links keep working normally.
const CATALOG: [Feature; 5] = [
    Feature {
        key: "settings",
        name: "User Settings",
        description: "Customize your account preferences, notification settings, and configure email automation rules for invoice processing.",
        phase: "Phase 3",
    },
    Feature {
        key: "reports",
        name: "Advanced Reporting",
        description: "Generate detailed financial reports, payment analytics, and export data with customizable date ranges and filtering options.",
        phase: "Phase 4",
    },
    Feature {
        key: "email-automation",
        name: "Email Automation",
        description: "Automatically process emails from daycare providers, extract invoice PDFs, and streamline the invoice workflow.",
        phase: "Phase 3",
    },
    Feature {
        key: "bulk-actions",
        name: "Bulk Actions",
        description: "Select multiple invoices or payments to perform bulk operations like bulk payments, status updates, or export.",
        phase: "Phase 3",
    },
    Feature {
        key: "notifications",
        name: "Smart Notifications",
        description: "Automated reminders for overdue payments, upcoming due dates, and invoice processing notifications.",
        phase: "Phase 3",
    },
];

/// Look a `data-feature` key up in the catalog.
#[must_use]
pub fn lookup(key: &str) -> Option<&'static Feature> {
    CATALOG.iter().find(|f| f.key == key)
}

/// The full catalog, in navigation order.
#[must_use]
pub fn all() -> &'static [Feature] {
    &CATALOG
}
