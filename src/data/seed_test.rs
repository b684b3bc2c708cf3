use super::*;
use crate::data::types::{AccountStatus, ClaimStatus, CoverageStatus, PolicyStatus};

#[test]
fn customer_inventory_shape() {
    let rows = customers();
    assert_eq!(rows.len(), 4);
    assert_eq!(rows[0].name, "John Silva");
    assert_eq!(rows[2].status, AccountStatus::Inactive);
}

#[test]
fn agent_inventory_shape() {
    let rows = agents();
    assert_eq!(rows.len(), 4);
    assert_eq!(rows[0].zone, "Colombo Central");
    assert_eq!(rows[3].active_tasks, 0);
}

#[test]
fn route_inventory_shape() {
    let rows = routes();
    assert_eq!(rows.len(), 4);
    assert_eq!(rows[3].assigned_agent, "Unassigned");
    assert_eq!(rows[3].customer_count, 0);
}

#[test]
fn policy_inventory_shape() {
    let rows = policies();
    assert_eq!(rows.len(), 4);
    assert_eq!(rows[0].id, "POL001");
    assert_eq!(rows[2].status, PolicyStatus::Expired);
    assert_eq!(rows[1].premium, 120_000);
}

#[test]
fn claim_inventory_references_policies() {
    let rows = claims();
    assert_eq!(rows.len(), 4);
    let policy_ids: Vec<String> = policies().into_iter().map(|p| p.id).collect();
    for claim in &rows {
        assert!(policy_ids.contains(&claim.policy_id), "dangling policy {}", claim.policy_id);
    }
    assert_eq!(rows[0].status, ClaimStatus::Pending);
}

#[test]
fn assigned_customer_inventory_has_addresses() {
    let rows = assigned_customers();
    assert_eq!(rows.len(), 4);
    assert!(rows.iter().all(|c| !c.address.is_empty()));
    assert_eq!(rows[3].status, CoverageStatus::Expired);
}

#[test]
fn dashboard_fixtures_are_populated() {
    assert_eq!(dashboard_stats().len(), 4);
    assert_eq!(recent_activities().len(), 4);
    assert_eq!(todays_tasks().len(), 3);
    assert_eq!(notifications().len(), 3);
}
