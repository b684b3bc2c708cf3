//! Fixed demo inventories backing every list view.
//!
//! SYSTEM CONTEXT
//! ==============
//! Constructed at view mount, never written back, discarded on unmount.
//! Rows are literal demo data; action buttons over them emit notification
//! commands without mutating anything.

#[cfg(test)]
#[path = "seed_test.rs"]
mod seed_test;

use super::types::*;

pub fn customers() -> Vec<Customer> {
    vec![
        Customer {
            id: "1".to_owned(),
            name: "John Silva".to_owned(),
            nic: "199012345678".to_owned(),
            phone: "+94 71 234 5678".to_owned(),
            location: "Colombo 07".to_owned(),
            assigned_agent: "Sarah Fernando".to_owned(),
            status: AccountStatus::Active,
        },
        Customer {
            id: "2".to_owned(),
            name: "Priya Perera".to_owned(),
            nic: "198523456789".to_owned(),
            phone: "+94 77 345 6789".to_owned(),
            location: "Kandy".to_owned(),
            assigned_agent: "Mike Jayasinghe".to_owned(),
            status: AccountStatus::Active,
        },
        Customer {
            id: "3".to_owned(),
            name: "Ravi Wickramasinghe".to_owned(),
            nic: "197734567890".to_owned(),
            phone: "+94 76 456 7890".to_owned(),
            location: "Galle".to_owned(),
            assigned_agent: "Anna De Silva".to_owned(),
            status: AccountStatus::Inactive,
        },
        Customer {
            id: "4".to_owned(),
            name: "Kamala Rajapaksa".to_owned(),
            nic: "199445678901".to_owned(),
            phone: "+94 70 567 8901".to_owned(),
            location: "Negombo".to_owned(),
            assigned_agent: "Sarah Fernando".to_owned(),
            status: AccountStatus::Active,
        },
    ]
}

pub fn agents() -> Vec<Agent> {
    vec![
        Agent {
            id: "1".to_owned(),
            name: "Sarah Fernando".to_owned(),
            zone: "Colombo Central".to_owned(),
            active_tasks: 12,
            phone: "+94 71 111 2222".to_owned(),
            status: AccountStatus::Active,
        },
        Agent {
            id: "2".to_owned(),
            name: "Mike Jayasinghe".to_owned(),
            zone: "Kandy".to_owned(),
            active_tasks: 8,
            phone: "+94 77 333 4444".to_owned(),
            status: AccountStatus::Active,
        },
        Agent {
            id: "3".to_owned(),
            name: "Anna De Silva".to_owned(),
            zone: "Galle".to_owned(),
            active_tasks: 15,
            phone: "+94 76 555 6666".to_owned(),
            status: AccountStatus::Active,
        },
        Agent {
            id: "4".to_owned(),
            name: "Rohan Wickrama".to_owned(),
            zone: "Negombo".to_owned(),
            active_tasks: 0,
            phone: "+94 70 777 8888".to_owned(),
            status: AccountStatus::Inactive,
        },
    ]
}

pub fn routes() -> Vec<Route> {
    vec![
        Route {
            id: "1".to_owned(),
            route_name: "Colombo Central Route".to_owned(),
            area: "Colombo 01-07".to_owned(),
            assigned_agent: "Sarah Fernando".to_owned(),
            status: AccountStatus::Active,
            customer_count: 45,
        },
        Route {
            id: "2".to_owned(),
            route_name: "Kandy Hills Route".to_owned(),
            area: "Kandy Central, Peradeniya".to_owned(),
            assigned_agent: "Mike Jayasinghe".to_owned(),
            status: AccountStatus::Active,
            customer_count: 32,
        },
        Route {
            id: "3".to_owned(),
            route_name: "Southern Coast Route".to_owned(),
            area: "Galle, Matara, Hambantota".to_owned(),
            assigned_agent: "Anna De Silva".to_owned(),
            status: AccountStatus::Active,
            customer_count: 28,
        },
        Route {
            id: "4".to_owned(),
            route_name: "Western Suburbs Route".to_owned(),
            area: "Negombo, Ja-Ela, Wattala".to_owned(),
            assigned_agent: "Unassigned".to_owned(),
            status: AccountStatus::Inactive,
            customer_count: 0,
        },
    ]
}

pub fn policies() -> Vec<Policy> {
    vec![
        Policy {
            id: "POL001".to_owned(),
            policy_type: "Auto Insurance".to_owned(),
            customer: "John Silva".to_owned(),
            agent: "Sarah Fernando".to_owned(),
            premium: 75_000,
            validity: "2025-06-15".to_owned(),
            status: PolicyStatus::Active,
        },
        Policy {
            id: "POL002".to_owned(),
            policy_type: "Health Insurance".to_owned(),
            customer: "Priya Perera".to_owned(),
            agent: "Mike Jayasinghe".to_owned(),
            premium: 120_000,
            validity: "2025-03-20".to_owned(),
            status: PolicyStatus::Active,
        },
        Policy {
            id: "POL003".to_owned(),
            policy_type: "Life Insurance".to_owned(),
            customer: "Ravi Wickramasinghe".to_owned(),
            agent: "Anna De Silva".to_owned(),
            premium: 200_000,
            validity: "2024-12-01".to_owned(),
            status: PolicyStatus::Expired,
        },
        Policy {
            id: "POL004".to_owned(),
            policy_type: "Property Insurance".to_owned(),
            customer: "Kamala Rajapaksa".to_owned(),
            agent: "Sarah Fernando".to_owned(),
            premium: 95_000,
            validity: "2025-08-10".to_owned(),
            status: PolicyStatus::Pending,
        },
    ]
}

pub fn claims() -> Vec<Claim> {
    vec![
        Claim {
            id: "CLM001".to_owned(),
            policy_id: "POL001".to_owned(),
            customer: "John Silva".to_owned(),
            amount: 45_000,
            date: "2024-05-15".to_owned(),
            status: ClaimStatus::Pending,
        },
        Claim {
            id: "CLM002".to_owned(),
            policy_id: "POL002".to_owned(),
            customer: "Priya Perera".to_owned(),
            amount: 25_000,
            date: "2024-05-10".to_owned(),
            status: ClaimStatus::Approved,
        },
        Claim {
            id: "CLM003".to_owned(),
            policy_id: "POL003".to_owned(),
            customer: "Ravi Wickramasinghe".to_owned(),
            amount: 150_000,
            date: "2024-05-08".to_owned(),
            status: ClaimStatus::InReview,
        },
        Claim {
            id: "CLM004".to_owned(),
            policy_id: "POL001".to_owned(),
            customer: "Kamala Rajapaksa".to_owned(),
            amount: 12_000,
            date: "2024-05-05".to_owned(),
            status: ClaimStatus::Rejected,
        },
    ]
}

pub fn assigned_customers() -> Vec<AssignedCustomer> {
    vec![
        AssignedCustomer {
            id: "1".to_owned(),
            customer_name: "John Silva".to_owned(),
            location: "Colombo 07".to_owned(),
            policy_type: "Auto Insurance".to_owned(),
            contact: "+94 71 234 5678".to_owned(),
            status: CoverageStatus::Active,
            address: "123 Galle Road, Colombo 07".to_owned(),
        },
        AssignedCustomer {
            id: "2".to_owned(),
            customer_name: "Kamala Rajapaksa".to_owned(),
            location: "Negombo".to_owned(),
            policy_type: "Health Insurance".to_owned(),
            contact: "+94 70 567 8901".to_owned(),
            status: CoverageStatus::Pending,
            address: "45 Beach Road, Negombo".to_owned(),
        },
        AssignedCustomer {
            id: "3".to_owned(),
            customer_name: "Pradeep Wickrama".to_owned(),
            location: "Colombo 05".to_owned(),
            policy_type: "Life Insurance".to_owned(),
            contact: "+94 77 123 4567".to_owned(),
            status: CoverageStatus::Active,
            address: "78 High Level Road, Colombo 05".to_owned(),
        },
        AssignedCustomer {
            id: "4".to_owned(),
            customer_name: "Nimal Fernando".to_owned(),
            location: "Mount Lavinia".to_owned(),
            policy_type: "Property Insurance".to_owned(),
            contact: "+94 76 987 6543".to_owned(),
            status: CoverageStatus::Expired,
            address: "22 Hotel Road, Mount Lavinia".to_owned(),
        },
    ]
}

pub fn dashboard_stats() -> Vec<StatCard> {
    vec![
        StatCard { title: "Active Policies", value: "1,247", change: "+12%" },
        StatCard { title: "Pending Claims", value: "38", change: "+5%" },
        StatCard { title: "Field Agents", value: "23", change: "+2%" },
        StatCard { title: "This Month Revenue", value: "LKR 2.4M", change: "+18%" },
    ]
}

pub fn recent_activities() -> Vec<Activity> {
    vec![
        Activity {
            id: 1,
            action: "New policy created",
            agent: "John Silva",
            time: "2 minutes ago",
            kind: ActivityKind::Policy,
        },
        Activity {
            id: 2,
            action: "Claim approved",
            agent: "Sarah Fernando",
            time: "15 minutes ago",
            kind: ActivityKind::Claim,
        },
        Activity {
            id: 3,
            action: "Agent check-in",
            agent: "Mike Perera",
            time: "1 hour ago",
            kind: ActivityKind::Location,
        },
        Activity {
            id: 4,
            action: "Policy expired",
            agent: "System",
            time: "2 hours ago",
            kind: ActivityKind::Alert,
        },
    ]
}

pub fn todays_tasks() -> Vec<TaskItem> {
    vec![
        TaskItem {
            id: 1,
            task: "Visit client - Auto Policy Renewal",
            time: "10:00 AM",
            priority: Priority::High,
        },
        TaskItem {
            id: 2,
            task: "Process pending claims",
            time: "2:00 PM",
            priority: Priority::Medium,
        },
        TaskItem {
            id: 3,
            task: "Team meeting - Weekly review",
            time: "4:00 PM",
            priority: Priority::Low,
        },
    ]
}

pub fn notifications() -> Vec<Notification> {
    vec![
        Notification {
            id: 1,
            title: "New claim submitted",
            message: "Auto insurance claim from John Silva",
            time: "5 minutes ago",
            kind: NotificationKind::Claim,
        },
        Notification {
            id: 2,
            title: "Policy expiring soon",
            message: "Health policy for Sarah Fernando expires in 3 days",
            time: "1 hour ago",
            kind: NotificationKind::Policy,
        },
        Notification {
            id: 3,
            title: "Agent check-in",
            message: "Mike Perera checked in at Colombo zone",
            time: "2 hours ago",
            kind: NotificationKind::Location,
        },
    ]
}
