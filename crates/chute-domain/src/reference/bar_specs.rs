//! Tow bar strap and fulcrum tables
//!
//! Bands are inclusive weight differences in lbs. Multiflyer tables run
//! positions 0-5 twice; the second run moves the heavy passenger to the
//! D strap and is kept exactly as charted.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use chute_types::BarType;

use crate::model::{BarPositionRule, StrapPair, TowBarSpec};

const GREEN: &str = "#22c55e";
const BLUE: &str = "#3b82f6";
const RED: &str = "#ef4444";
const BLACK: &str = "#000000";

type Straps = (&'static str, &'static str);

fn double(position: u8, min_diff: f64, max_diff: f64, heavy: Straps, light: Straps) -> BarPositionRule {
    BarPositionRule {
        position,
        min_diff,
        max_diff,
        heavy_straps: StrapPair::new(heavy.0, heavy.1),
        light_straps: StrapPair::new(light.0, light.1),
        middle_straps: None,
    }
}

fn triple(
    position: u8,
    min_diff: f64,
    max_diff: f64,
    heavy: Straps,
    middle: Straps,
    light: Straps,
) -> BarPositionRule {
    BarPositionRule {
        middle_straps: Some(StrapPair::new(middle.0, middle.1)),
        ..double(position, min_diff, max_diff, heavy, light)
    }
}

fn strap_colors(colors: &[(&str, &str)]) -> BTreeMap<String, String> {
    colors
        .iter()
        .map(|(strap, color)| (strap.to_string(), color.to_string()))
        .collect()
}

fn strap_labels(labels: &[&str]) -> Vec<String> {
    labels.iter().map(|s| s.to_string()).collect()
}

fn doubleizer() -> TowBarSpec {
    TowBarSpec {
        id: BarType::Doubleizer,
        name: "Doubleizer".to_string(),
        display_name: "Doubleizer".to_string(),
        has_fulcrum: false,
        strap_positions: strap_labels(&["A", "B", "C", "D", "E", "F"]),
        position_colors: strap_colors(&[
            ("A", GREEN),
            ("B", BLUE),
            ("C", GREEN),
            ("D", BLUE),
            ("E", RED),
            ("F", RED),
        ]),
        doubles_setup: vec![
            double(0, 0.0, 11.0, ("A", "C"), ("F", "E")),
            double(1, 12.0, 40.0, ("B", "D"), ("F", "D")),
            double(2, 41.0, 60.0, ("B", "D"), ("F", "E")),
            double(3, 61.0, 110.0, ("B", "E"), ("F", "E")),
        ],
        triples_setup: None,
    }
}

fn doubleizer_sp() -> TowBarSpec {
    let heavy = ("A", "B");
    let light = ("C", "D");
    TowBarSpec {
        id: BarType::DoubleizerSp,
        name: "Doubleizer SP".to_string(),
        display_name: "Doubleizer SP".to_string(),
        has_fulcrum: false,
        strap_positions: strap_labels(&["A", "B", "C", "D"]),
        position_colors: strap_colors(&[("A", GREEN), ("B", GREEN), ("C", RED), ("D", RED)]),
        doubles_setup: vec![
            double(0, 0.0, 10.0, heavy, light),
            double(1, 11.0, 35.0, heavy, light),
            double(2, 36.0, 60.0, heavy, light),
            double(3, 61.0, 85.0, heavy, light),
            double(4, 86.0, 110.0, heavy, light),
            double(5, 111.0, 135.0, heavy, light),
        ],
        triples_setup: None,
    }
}

fn multiflyer() -> TowBarSpec {
    let near = (("A", "C"), ("D", "F"));
    let far = (("A", "D"), ("E", "F"));
    let seats = (("A", "B"), ("C", "D"), ("E", "F"));
    TowBarSpec {
        id: BarType::Multiflyer,
        name: "Multiflyer".to_string(),
        display_name: "Multiflyer".to_string(),
        has_fulcrum: true,
        strap_positions: strap_labels(&["A", "B", "C", "D", "E", "F"]),
        position_colors: strap_colors(&[
            ("A", BLACK),
            ("B", BLACK),
            ("C", RED),
            ("D", RED),
            ("E", BLACK),
            ("F", BLACK),
        ]),
        doubles_setup: vec![
            double(0, 0.0, 7.0, near.0, near.1),
            double(1, 8.0, 22.0, near.0, near.1),
            double(2, 23.0, 37.0, near.0, near.1),
            double(3, 38.0, 52.0, near.0, near.1),
            double(4, 53.0, 67.0, near.0, near.1),
            double(5, 68.0, 82.0, near.0, near.1),
            double(0, 83.0, 97.0, far.0, far.1),
            double(1, 98.0, 112.0, far.0, far.1),
            double(2, 113.0, 127.0, far.0, far.1),
            double(3, 128.0, 142.0, far.0, far.1),
            double(4, 143.0, 157.0, far.0, far.1),
            double(5, 158.0, 172.0, far.0, far.1),
        ],
        triples_setup: Some(vec![
            triple(0, 0.0, 7.0, seats.0, seats.1, seats.2),
            triple(1, 8.0, 22.0, seats.0, seats.1, seats.2),
            triple(2, 23.0, 37.0, seats.0, seats.1, seats.2),
            triple(3, 38.0, 52.0, seats.0, seats.1, seats.2),
            triple(4, 53.0, 67.0, seats.0, seats.1, seats.2),
            triple(5, 68.0, 82.0, seats.0, seats.1, seats.2),
        ]),
    }
}

fn multiflyer_adv() -> TowBarSpec {
    let near = (("A", "C"), ("D", "F"));
    let far = (("A", "D"), ("E", "F"));
    let seats = (("A", "B"), ("C", "D"), ("E", "F"));
    TowBarSpec {
        id: BarType::MultiflyerAdv,
        name: "Multiflyer ADV".to_string(),
        display_name: "Multiflyer ADV".to_string(),
        has_fulcrum: true,
        strap_positions: strap_labels(&["A", "B", "C", "D", "E", "F"]),
        position_colors: strap_colors(&[
            ("A", GREEN),
            ("B", GREEN),
            ("C", BLUE),
            ("D", BLUE),
            ("E", RED),
            ("F", RED),
        ]),
        doubles_setup: vec![
            double(0, 0.0, 10.0, near.0, near.1),
            double(1, 11.0, 30.0, near.0, near.1),
            double(2, 31.0, 50.0, near.0, near.1),
            double(3, 51.0, 70.0, near.0, near.1),
            double(4, 71.0, 90.0, near.0, near.1),
            double(5, 91.0, 110.0, near.0, near.1),
            double(0, 111.0, 130.0, far.0, far.1),
            double(1, 131.0, 150.0, far.0, far.1),
            double(2, 151.0, 170.0, far.0, far.1),
            double(3, 171.0, 190.0, far.0, far.1),
            double(4, 191.0, 210.0, far.0, far.1),
            double(5, 211.0, 230.0, far.0, far.1),
        ],
        triples_setup: Some(vec![
            triple(0, 0.0, 10.0, seats.0, seats.1, seats.2),
            triple(1, 11.0, 30.0, seats.0, seats.1, seats.2),
            triple(2, 31.0, 50.0, seats.0, seats.1, seats.2),
            triple(3, 51.0, 70.0, seats.0, seats.1, seats.2),
            triple(4, 71.0, 90.0, seats.0, seats.1, seats.2),
            triple(5, 91.0, 110.0, seats.0, seats.1, seats.2),
        ]),
    }
}

/// Standard tow bar models
pub static BAR_SPECS: LazyLock<Vec<TowBarSpec>> =
    LazyLock::new(|| vec![doubleizer(), doubleizer_sp(), multiflyer(), multiflyer_adv()]);

/// Get bar spec by model
pub fn get_bar_spec(bar_type: BarType) -> Option<&'static TowBarSpec> {
    BAR_SPECS.iter().find(|bar| bar.id == bar_type)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_bar_type_has_a_spec() {
        for bar_type in BarType::ALL {
            assert!(get_bar_spec(bar_type).is_some(), "{}", bar_type);
        }
    }

    #[test]
    fn test_tables_validate() {
        for bar in BAR_SPECS.iter() {
            let issues = bar.validate();
            assert!(issues.is_empty(), "{}: {:?}", bar.id, issues);
        }
    }

    #[test]
    fn test_fulcrum_flags() {
        assert!(!get_bar_spec(BarType::Doubleizer).unwrap().has_fulcrum);
        assert!(!get_bar_spec(BarType::DoubleizerSp).unwrap().has_fulcrum);
        assert!(get_bar_spec(BarType::Multiflyer).unwrap().has_fulcrum);
        assert!(get_bar_spec(BarType::MultiflyerAdv).unwrap().has_fulcrum);
    }

    #[test]
    fn test_only_multiflyers_carry_triples() {
        assert!(!get_bar_spec(BarType::Doubleizer).unwrap().supports_triples());
        assert!(!get_bar_spec(BarType::DoubleizerSp).unwrap().supports_triples());
        assert!(get_bar_spec(BarType::Multiflyer).unwrap().supports_triples());
        assert!(get_bar_spec(BarType::MultiflyerAdv).unwrap().supports_triples());
    }

    #[test]
    fn test_multiflyer_positions_repeat() {
        let bar = get_bar_spec(BarType::Multiflyer).unwrap();
        let positions: Vec<u8> = bar.doubles_setup.iter().map(|r| r.position).collect();
        assert_eq!(positions, vec![0, 1, 2, 3, 4, 5, 0, 1, 2, 3, 4, 5]);
        assert_eq!(bar.doubles_setup[6].heavy_straps, StrapPair::new("A", "D"));
        assert_eq!(bar.max_doubles_diff(), Some(172.0));
    }

    #[test]
    fn test_position_colors_cover_strap_positions() {
        for bar in BAR_SPECS.iter() {
            for strap in &bar.strap_positions {
                assert!(bar.position_colors.contains_key(strap), "{} {}", bar.id, strap);
            }
        }
    }
}
