//! End-to-end pipeline tests: raw JSON batches through parsing,
//! normalization, expansion, projection and gap analysis.

use std::collections::HashMap;

use chrono::NaiveDate;

use wcp_rust::parsing::record_parser::parse_record_batch_str;
use wcp_rust::preprocessing::lookup::Lookups;
use wcp_rust::preprocessing::normalizer::{normalize_logs, normalize_requirements};
use wcp_rust::services::planning::enrich;
use wcp_rust::transformations::filtering::{filter_by_dates, filter_by_membership};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

const REQUIREMENTS_JSON: &str = r#"[
    {
        "id": "reqA",
        "fields": {
            "Requirement": "Role A - Mission X",
            "Role": ["recRoleA"],
            "Capacity": 3,
            "_prob": [0.8],
            "_start_date": "2022-01-01",
            "_end_date": "2022-03-31"
        }
    },
    {
        "id": "reqB",
        "fields": {
            "Requirement": "Role A - Mission Y",
            "Role": ["recRoleA"],
            "Capacity": 1,
            "_prob": [0.5],
            "_start_date": "2022-02-01",
            "_end_date": "2022-02-28"
        }
    }
]"#;

const LOGS_JSON: &str = r#"[
    {
        "id": "log1",
        "fields": {
            "Mission Log": "Ada on Mission X",
            "Role": ["recRoleA"],
            "EXPLORER": ["exp1"],
            "Capacity": 2,
            "_start_date": "2022-01-01",
            "_end_date": "2022-02-28",
            "mission_requirement": ["reqA"]
        }
    }
]"#;

const ROLES_JSON: &str = r#"[
    { "id": "recRoleA", "fields": { "Role": "Role A" } }
]"#;

fn lookups() -> Lookups {
    let roles = parse_record_batch_str(ROLES_JSON).unwrap();
    Lookups::from_batches(&roles, &[], &[], &[], &[])
}

#[test]
fn staffing_gaps_by_month() {
    let lookups = lookups();
    let requirements = normalize_requirements(
        &parse_record_batch_str(REQUIREMENTS_JSON).unwrap(),
        &lookups,
    )
    .unwrap();
    let logs = normalize_logs(&parse_record_batch_str(LOGS_JSON).unwrap(), &lookups).unwrap();

    let tables = enrich(&requirements, &logs, &[]);

    // Two requirements, three months each.
    assert_eq!(tables.gaps.len(), 6);

    let mut gap_by_month: HashMap<NaiveDate, f64> = HashMap::new();
    for row in &tables.gaps {
        *gap_by_month.entry(row.month_end).or_insert(0.0) += row.gap;
    }

    assert_eq!(gap_by_month[&date(2022, 1, 31)], 1.0);
    assert_eq!(gap_by_month[&date(2022, 2, 28)], 2.0);
    assert_eq!(gap_by_month[&date(2022, 3, 31)], 3.0);
}

#[test]
fn gap_rows_resolve_role_names() {
    let lookups = lookups();
    let requirements = normalize_requirements(
        &parse_record_batch_str(REQUIREMENTS_JSON).unwrap(),
        &lookups,
    )
    .unwrap();
    let logs = normalize_logs(&parse_record_batch_str(LOGS_JSON).unwrap(), &lookups).unwrap();

    let tables = enrich(&requirements, &logs, &[]);
    assert!(tables
        .gaps
        .iter()
        .all(|g| g.role_name.as_deref() == Some("Role A")));
}

#[test]
fn filters_compose_over_the_gaps_table() {
    let lookups = lookups();
    let requirements = normalize_requirements(
        &parse_record_batch_str(REQUIREMENTS_JSON).unwrap(),
        &lookups,
    )
    .unwrap();
    let logs = normalize_logs(&parse_record_batch_str(LOGS_JSON).unwrap(), &lookups).unwrap();
    let tables = enrich(&requirements, &logs, &[]);

    let mut allowed = HashMap::new();
    allowed.insert("role".to_string(), vec!["Role A".to_string()]);

    let windowed = filter_by_dates(&tables.gaps, date(2022, 2, 1), date(2022, 2, 28));
    let filtered = filter_by_membership(&windowed, &allowed);

    assert_eq!(filtered.len(), 2);
    let total: f64 = filtered.iter().map(|g| g.gap).sum();
    assert_eq!(total, 2.0);

    // An unknown UI filter column never drops rows.
    let mut unknown = HashMap::new();
    unknown.insert("belt_colour".to_string(), vec!["Black".to_string()]);
    assert_eq!(filter_by_membership(&tables.gaps, &unknown), tables.gaps);
}

#[test]
fn requirements_project_probability_weighted_demand() {
    let lookups = lookups();
    let requirements = normalize_requirements(
        &parse_record_batch_str(REQUIREMENTS_JSON).unwrap(),
        &lookups,
    )
    .unwrap();

    let tables = enrich(&requirements, &[], &[]);
    let jan_a = tables
        .requirements
        .iter()
        .find(|r| r.record.id == "reqA" && r.bucket.month_end == date(2022, 1, 31))
        .unwrap();
    assert_eq!(jan_a.effective_capacity, 3.0);
    assert!((jan_a.projected_capacity - 2.4).abs() < 1e-9);
}

#[cfg(feature = "local-repo")]
mod repository {
    use super::*;
    use wcp_rust::db::local::{LocalRepository, LOGS, REQUIREMENTS};
    use wcp_rust::db::services::load_planning_tables;

    #[tokio::test]
    async fn load_via_local_repository() {
        let mut repo = LocalRepository::new();
        repo.insert_batch_json(REQUIREMENTS, REQUIREMENTS_JSON).unwrap();
        repo.insert_batch_json(LOGS, LOGS_JSON).unwrap();
        repo.insert_batch_json("Roles", ROLES_JSON).unwrap();

        let tables = load_planning_tables(&repo).await.unwrap();
        assert_eq!(tables.gaps.len(), 6);
        assert_eq!(
            tables.logs_by_requirement[&("reqA".to_string(), date(2022, 1, 31))],
            2.0
        );
    }
}
