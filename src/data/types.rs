//! Entity DTOs rendered by the table and dashboard views.
//!
//! DESIGN
//! ======
//! Every list in the app is a fixed in-memory inventory (see `seed`);
//! nothing here has a persisted lifecycle. Status enums carry their badge
//! styling rules so tables stay free of presentation branching.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Active/inactive flag shared by customers, agents, and routes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountStatus {
    Active,
    Inactive,
}

impl AccountStatus {
    pub fn label(self) -> &'static str {
        match self {
            AccountStatus::Active => "active",
            AccountStatus::Inactive => "inactive",
        }
    }

    pub fn badge_class(self) -> &'static str {
        match self {
            AccountStatus::Active => "badge--default",
            AccountStatus::Inactive => "badge--secondary",
        }
    }
}

/// Lifecycle state of an insurance policy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PolicyStatus {
    Active,
    Expired,
    Pending,
}

impl PolicyStatus {
    pub fn label(self) -> &'static str {
        match self {
            PolicyStatus::Active => "active",
            PolicyStatus::Expired => "expired",
            PolicyStatus::Pending => "pending",
        }
    }

    pub fn badge_class(self) -> &'static str {
        match self {
            PolicyStatus::Active => "badge--default",
            PolicyStatus::Expired => "badge--destructive",
            PolicyStatus::Pending => "badge--secondary",
        }
    }
}

/// Review state of a claim.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ClaimStatus {
    Pending,
    Approved,
    Rejected,
    InReview,
}

impl ClaimStatus {
    pub fn label(self) -> &'static str {
        match self {
            ClaimStatus::Pending => "pending",
            ClaimStatus::Approved => "approved",
            ClaimStatus::Rejected => "rejected",
            ClaimStatus::InReview => "in-review",
        }
    }

    pub fn badge_class(self) -> &'static str {
        match self {
            ClaimStatus::Approved => "badge--default",
            ClaimStatus::Rejected => "badge--destructive",
            ClaimStatus::InReview => "badge--secondary",
            ClaimStatus::Pending => "badge--outline",
        }
    }

    /// Approve/reject actions are offered only while a claim is pending.
    pub fn is_actionable(self) -> bool {
        self == ClaimStatus::Pending
    }
}

/// Coverage state of a customer assignment as seen by a field agent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CoverageStatus {
    Active,
    Pending,
    Expired,
}

impl CoverageStatus {
    pub fn label(self) -> &'static str {
        match self {
            CoverageStatus::Active => "active",
            CoverageStatus::Pending => "pending",
            CoverageStatus::Expired => "expired",
        }
    }

    pub fn badge_class(self) -> &'static str {
        match self {
            CoverageStatus::Active => "badge--default",
            CoverageStatus::Pending => "badge--secondary",
            CoverageStatus::Expired => "badge--destructive",
        }
    }
}

/// A policyholder record in the admin customers table.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub id: String,
    pub name: String,
    /// National identity card number.
    pub nic: String,
    pub phone: String,
    pub location: String,
    pub assigned_agent: String,
    pub status: AccountStatus,
}

/// A field agent record in the admin agents table.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Agent {
    pub id: String,
    pub name: String,
    /// Geographic zone the agent covers.
    pub zone: String,
    pub active_tasks: u32,
    pub phone: String,
    pub status: AccountStatus,
}

/// Workload badge for an agent's open task count: destructive above 10,
/// default above 5, secondary otherwise.
pub fn task_badge_class(active_tasks: u32) -> &'static str {
    if active_tasks > 10 {
        "badge--destructive"
    } else if active_tasks > 5 {
        "badge--default"
    } else {
        "badge--secondary"
    }
}

/// A service route covering a group of areas.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Route {
    pub id: String,
    pub route_name: String,
    pub area: String,
    pub assigned_agent: String,
    pub status: AccountStatus,
    pub customer_count: u32,
}

/// Coverage badge for a route's customer count: default above 30,
/// secondary when non-empty, outline when unserved.
pub fn route_badge_class(customer_count: u32) -> &'static str {
    if customer_count > 30 {
        "badge--default"
    } else if customer_count > 0 {
        "badge--secondary"
    } else {
        "badge--outline"
    }
}

/// An insurance policy row.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Policy {
    /// Business identifier (e.g. `POL001`).
    pub id: String,
    pub policy_type: String,
    pub customer: String,
    pub agent: String,
    /// Annual premium in whole rupees.
    pub premium: u64,
    /// Expiry date, ISO 8601.
    pub validity: String,
    pub status: PolicyStatus,
}

/// A claim row.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Claim {
    /// Business identifier (e.g. `CLM001`).
    pub id: String,
    pub policy_id: String,
    pub customer: String,
    /// Claimed amount in whole rupees.
    pub amount: u64,
    /// Filing date, ISO 8601.
    pub date: String,
    pub status: ClaimStatus,
}

/// A customer assignment as shown on a field agent's dashboard.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AssignedCustomer {
    pub id: String,
    pub customer_name: String,
    pub location: String,
    pub policy_type: String,
    pub contact: String,
    pub status: CoverageStatus,
    /// Free-text street address used for outbound navigation.
    pub address: String,
}

/// A static headline figure on the dashboard.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatCard {
    pub title: &'static str,
    pub value: &'static str,
    pub change: &'static str,
}

/// Category of a recent-activity entry, selecting its indicator color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActivityKind {
    Policy,
    Claim,
    Location,
    Alert,
}

impl ActivityKind {
    pub fn dot_class(self) -> &'static str {
        match self {
            ActivityKind::Policy => "dot--policy",
            ActivityKind::Claim => "dot--claim",
            ActivityKind::Location => "dot--location",
            ActivityKind::Alert => "dot--alert",
        }
    }
}

/// A recent-activity feed entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Activity {
    pub id: u32,
    pub action: &'static str,
    pub agent: &'static str,
    pub time: &'static str,
    pub kind: ActivityKind,
}

/// Priority of a scheduled task.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn label(self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }

    pub fn badge_class(self) -> &'static str {
        match self {
            Priority::High => "badge--destructive",
            Priority::Medium => "badge--default",
            Priority::Low => "badge--secondary",
        }
    }
}

/// A today's-tasks entry on the dashboard.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TaskItem {
    pub id: u32,
    pub task: &'static str,
    pub time: &'static str,
    pub priority: Priority,
}

/// Category of a bell-dropdown notification, selecting its indicator color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationKind {
    Claim,
    Policy,
    Location,
}

impl NotificationKind {
    pub fn dot_class(self) -> &'static str {
        match self {
            NotificationKind::Claim => "dot--alert",
            NotificationKind::Policy => "dot--pending",
            NotificationKind::Location => "dot--policy",
        }
    }
}

/// A fixed entry in the notification bell dropdown.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub id: u32,
    pub title: &'static str,
    pub message: &'static str,
    pub time: &'static str,
    pub kind: NotificationKind,
}

/// Render a rupee amount with thousands separators (`75000` → `75,000`).
pub fn format_lkr(amount: u64) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
