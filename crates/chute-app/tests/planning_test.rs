//! Integration tests for ride planning against the built-in charts

use chute_app::app::{plan_ride, BarStatus, PlanOptions};
use chute_app::repository::open_catalog_at;
use chute_domain::model::{PassengerRole, VentMode};
use chute_domain::Catalog;
use chute_types::BarType;
use tempfile::tempdir;

fn catalog() -> Catalog {
    Catalog::builtin()
}

// ============================================================================
// Canopy selection
// ============================================================================

#[test]
fn test_every_recommendation_is_in_range_and_gated() {
    let catalog = catalog();
    for weight in [100.0, 250.0, 300.0, 450.0, 600.0] {
        for wind in [0.0, 8.0, 16.0, 17.0, 25.0, 30.0] {
            for rec in catalog.recommend(weight, wind, &[]) {
                let spec = rec.chute;
                assert!(weight >= spec.min_weight && weight <= spec.max_weight);
                match rec.am_zipper {
                    VentMode::Closed => assert!(wind <= spec.max_wind_closed),
                    VentMode::Open => {
                        assert!(wind > spec.max_wind_closed);
                        assert!(wind <= spec.max_wind_open);
                    }
                }
            }
        }
    }
}

#[test]
fn test_ranking_is_descending() {
    let recs = catalog().recommend(300.0, 12.0, &[]);
    assert!(recs.len() > 1);
    for pair in recs.windows(2) {
        assert!(pair[0].score >= pair[1].score);
    }
}

#[test]
fn test_owned_filter_is_subset_of_unfiltered() {
    let catalog = catalog();
    let all = catalog.recommend(300.0, 12.0, &[]);
    let owned = catalog.recommend(300.0, 12.0, &[35.0, 39.0, 60.0]);

    assert!(owned.len() <= all.len());
    for rec in &owned {
        assert!(rec.chute.size == 35.0 || rec.chute.size == 39.0);
        assert!(all.iter().any(|r| r.chute == rec.chute && r.am_zipper == rec.am_zipper));
    }
}

#[test]
fn test_35ft_switches_to_open_above_closed_limit() {
    let catalog = catalog();
    let closed = catalog.recommend(300.0, 10.0, &[]);
    assert!(closed
        .iter()
        .any(|r| r.chute.size == 35.0 && r.am_zipper == VentMode::Closed));

    let open = catalog.recommend(300.0, 17.0, &[]);
    assert!(open
        .iter()
        .any(|r| r.chute.size == 35.0 && r.am_zipper == VentMode::Open));
}

// ============================================================================
// Bar setup
// ============================================================================

#[test]
fn test_doubleizer_pair() {
    let setup = catalog().configure(&[150.0, 100.0], BarType::Doubleizer).unwrap();
    assert_eq!(setup.weight_difference, 50.0);
    assert_eq!(setup.fulcrum_position, 2);
    assert_eq!(setup.fulcrum(), None);

    let heavy = &setup.assignments[0];
    assert_eq!((heavy.passenger_index, heavy.role), (0, PassengerRole::Heavy));
    assert_eq!((heavy.straps.left.as_str(), heavy.straps.right.as_str()), ("B", "D"));

    let light = &setup.assignments[1];
    assert_eq!((light.passenger_index, light.role), (1, PassengerRole::Light));
    assert_eq!((light.straps.left.as_str(), light.straps.right.as_str()), ("F", "E"));
}

#[test]
fn test_multiflyer_triple() {
    let setup = catalog()
        .configure(&[150.0, 145.0, 100.0], BarType::Multiflyer)
        .unwrap();
    assert_eq!(setup.weight_difference, 5.0);
    assert_eq!(setup.fulcrum(), Some(0));

    let roles: Vec<_> = setup
        .assignments
        .iter()
        .map(|a| (a.role, a.passenger_index, a.weight))
        .collect();
    assert_eq!(
        roles,
        vec![
            (PassengerRole::Heavy, 0, 150.0),
            (PassengerRole::Middle, 2, 100.0),
            (PassengerRole::Light, 1, 145.0),
        ]
    );
}

#[test]
fn test_unsupported_counts_give_no_setup() {
    let catalog = catalog();
    for weights in [vec![], vec![150.0], vec![0.0, 150.0], vec![150.0, 140.0, 130.0, 120.0]] {
        for bar in BarType::ALL {
            assert!(catalog.configure(&weights, bar).is_none());
        }
    }
}

#[test]
fn test_doubleizer_sp_has_no_triples() {
    assert!(catalog()
        .configure(&[150.0, 145.0, 100.0], BarType::DoubleizerSp)
        .is_none());
}

#[test]
fn test_configure_is_idempotent() {
    let catalog = catalog();
    let first = catalog.configure(&[180.0, 165.0, 120.0], BarType::MultiflyerAdv);
    let second = catalog.configure(&[180.0, 165.0, 120.0], BarType::MultiflyerAdv);
    assert_eq!(first, second);
}

// ============================================================================
// Planning
// ============================================================================

#[test]
fn test_plan_runs_both_engines() {
    let options = PlanOptions::new()
        .with_bar(BarType::Multiflyer)
        .with_owned_chutes(vec![35.0, 39.0]);
    let plan = plan_ride(&catalog(), &[150.0, 145.0, 100.0], 10.0, &options).unwrap();

    assert_eq!(plan.total_weight_lbs, 395.0);
    assert_eq!(plan.bar_status, BarStatus::Configured);
    assert!(plan.recommendations.iter().all(|r| r.chute.size == 35.0 || r.chute.size == 39.0));
}

#[test]
fn test_plan_with_custom_reference_data() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("chart.toml");
    std::fs::write(
        &path,
        r#"
[[canopies]]
size = 40.0
max_wind_closed = 12.0
max_wind_open = 14.0
min_weight = 200.0
max_weight = 600.0
"#,
    )
    .unwrap();

    let catalog = open_catalog_at(Some(&path)).unwrap();
    let options = PlanOptions::new().with_bar(BarType::Doubleizer);
    let plan = plan_ride(&catalog, &[200.0, 150.0], 13.0, &options).unwrap();

    assert_eq!(plan.recommendations.len(), 1);
    assert_eq!(plan.recommendations[0].am_zipper, VentMode::Open);
    // Bars fall back to the built-in tables
    assert_eq!(plan.bar_status, BarStatus::Configured);
}
