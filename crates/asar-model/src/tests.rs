//! Unit tests for asar-model.

use asar_core::{ClockTime, Profit};

fn t(s: &str) -> ClockTime {
    s.parse().unwrap()
}

const SMALL: &str = "\
A LPPT 0600 2300
A LPPR 0630 2200
C a320 0045
C a330 0100
P CS-TUA a320
P CS-TUB a330
L LPPT LPPR 0055 a320 100 a330 140
L LPPR LPPT 0055 a320 90
";

// ── Loader ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod loader {
    use std::io::Cursor;

    use asar_core::{AsarError, ClassId, LegId, LocationId, ProfitFormat, VehicleId};

    use super::*;
    use crate::{ModelError, load_domain, load_domain_reader, parse_domain};

    #[test]
    fn parses_all_record_kinds() {
        let d = parse_domain(SMALL).unwrap();
        assert_eq!(d.locations().len(), 2);
        assert_eq!(d.classes().len(), 2);
        assert_eq!(d.vehicle_count(), 2);
        assert_eq!(d.leg_count(), 2);

        let lppr = d.location_by_code("LPPR").unwrap();
        assert_eq!(d.location(lppr).opening, t("0630"));
        assert_eq!(d.location(lppr).closing, t("2200"));
        assert_eq!(d.class(ClassId(1)).turnaround, t("0100"));
        assert_eq!(d.vehicle(VehicleId(1)).name, "CS-TUB");
        assert_eq!(d.vehicle_class(VehicleId(1)).name, "a330");
        assert_eq!(d.class_by_name("a330"), Some(ClassId(1)));
        assert_eq!(d.class_by_name("b737"), None);
        assert_eq!(d.location_by_code("LIS"), None);

        let leg = d.leg(LegId(0));
        assert_eq!(leg.departure, LocationId(0));
        assert_eq!(leg.arrival, lppr);
        assert_eq!(leg.duration, t("0055"));
    }

    #[test]
    fn best_profit_is_max_over_classes() {
        let d = parse_domain(SMALL).unwrap();
        assert_eq!(d.leg(LegId(0)).best_profit(), Profit::whole(140));
        assert_eq!(d.leg(LegId(1)).best_profit(), Profit::whole(90));
        assert_eq!(d.max_best_profit(), Profit::whole(140));
    }

    #[test]
    fn missing_class_entry_means_not_flyable() {
        let d = parse_domain(SMALL).unwrap();
        assert_eq!(d.profit(LegId(1), VehicleId(0)), Some(Profit::whole(90)));
        assert_eq!(d.profit(LegId(1), VehicleId(1)), None);
    }

    #[test]
    fn profit_follows_the_vehicle_class() {
        let d = parse_domain(SMALL).unwrap();
        assert_eq!(d.profit(LegId(0), VehicleId(0)), Some(Profit::whole(100)));
        assert_eq!(d.profit(LegId(0), VehicleId(1)), Some(Profit::whole(140)));
        let a330 = d.class_by_name("a330").unwrap();
        assert_eq!(d.leg(LegId(1)).profit(a330), None);
    }

    #[test]
    fn extreme_profits_are_rejected() {
        let text = "\
A A 0600 2200
A B 0600 2200
C k 0030
C j 0030
P V1 k
L A B 0100 k 900000000000000000 j -900000000000000000
L B A 0100 k 1
";
        match parse_domain(text) {
            Err(ModelError::ProfitRange { min, max, legs }) => {
                assert_eq!(min, Profit::whole(-900_000_000_000_000_000));
                assert_eq!(max, Profit::whole(900_000_000_000_000_000));
                assert_eq!(legs, 2);
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn records_may_come_in_any_order() {
        let text = "L X Y 0100 k 5\nP v k\nC k 0010\nA Y 0500 2000\nA X 0500 2000\n";
        let d = parse_domain(text).unwrap();
        assert_eq!(d.leg_count(), 1);
        assert_eq!(d.leg(LegId(0)).departure, d.location_by_code("X").unwrap());
    }

    #[test]
    fn unknown_codes_and_blank_lines_are_skipped() {
        let text = format!("# comment\n\nZ anything goes here\n   \n{SMALL}");
        let d = parse_domain(&text).unwrap();
        assert_eq!(d.leg_count(), 2);
    }

    #[test]
    fn reader_and_file_agree_with_str() {
        let from_reader = load_domain_reader(Cursor::new(SMALL)).unwrap();
        assert_eq!(from_reader.legs(), parse_domain(SMALL).unwrap().legs());

        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("small.txt");
        std::fs::write(&path, SMALL).unwrap();
        let from_file = load_domain(&path).unwrap();
        assert_eq!(from_file.vehicles(), from_reader.vehicles());
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = load_domain(std::path::Path::new("/definitely/not/here.txt")).unwrap_err();
        assert!(matches!(err, ModelError::Io(_)));
    }

    #[test]
    fn malformed_time_reports_line() {
        let err = parse_domain("C a320 0045\nA LPPT 06h0 2300\n").unwrap_err();
        match err {
            ModelError::Value { line, source } => {
                assert_eq!(line, 2);
                assert_eq!(source, AsarError::InvalidClock("06h0".into()));
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn malformed_profit_is_fatal() {
        let text = "A X 0500 2000\nA Y 0500 2000\nC k 0010\nL X Y 0100 k 1.25\n";
        assert!(matches!(parse_domain(text), Err(ModelError::Value { line: 4, .. })));
    }

    #[test]
    fn wrong_field_counts() {
        assert!(matches!(parse_domain("A X 0500\n"), Err(ModelError::Arity { code: "A", got: 2, .. })));
        assert!(matches!(parse_domain("P v\n"), Err(ModelError::Arity { code: "P", .. })));
        assert!(matches!(parse_domain("L X Y 0100\n"), Err(ModelError::Arity { code: "L", .. })));
        assert!(matches!(parse_domain("L X Y 0100 k\n"), Err(ModelError::Arity { code: "L", .. })));
        assert!(matches!(parse_domain("L X Y 0100 k 5 j\n"), Err(ModelError::Arity { code: "L", .. })));
    }

    #[test]
    fn fractional_profits_switch_format() {
        assert_eq!(parse_domain(SMALL).unwrap().profit_format(), ProfitFormat::Integer);
        let text = "A X 0500 2000\nA Y 0500 2000\nC k 0010\nL X Y 0100 k 12.5\n";
        assert_eq!(parse_domain(text).unwrap().profit_format(), ProfitFormat::OneDecimal);
    }
}

// ── DomainBuilder validation ──────────────────────────────────────────────────

#[cfg(test)]
mod builder {
    use super::*;
    use crate::{DomainBuilder, ModelError};

    fn base() -> DomainBuilder {
        let mut b = DomainBuilder::new();
        b.add_location("X", t("0500"), t("2000"))
            .add_location("Y", t("0500"), t("2000"))
            .add_class("k", t("0030"));
        b
    }

    #[test]
    fn empty_domain_builds() {
        let d = DomainBuilder::new().build().unwrap();
        assert_eq!(d.leg_count(), 0);
        assert_eq!(d.max_best_profit(), Profit::ZERO);
    }

    #[test]
    fn unknown_location() {
        let mut b = base();
        b.add_leg("X", "Z", t("0100"), vec![("k".into(), Profit::whole(1))]);
        match b.build() {
            Err(ModelError::UnknownLocation { code, .. }) => assert_eq!(code, "Z"),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn unknown_class_on_vehicle_and_leg() {
        let mut b = base();
        b.add_vehicle("v", "nope");
        assert!(matches!(b.build(), Err(ModelError::UnknownClass { .. })));

        let mut b = base();
        b.add_leg("X", "Y", t("0100"), vec![("nope".into(), Profit::whole(1))]);
        assert!(matches!(b.build(), Err(ModelError::UnknownClass { .. })));
    }

    #[test]
    fn duplicates_are_rejected() {
        let mut b = base();
        b.add_location("X", t("0600"), t("2100"));
        assert!(matches!(b.build(), Err(ModelError::Duplicate { kind: "location", .. })));

        let mut b = base();
        b.add_class("k", t("0010"));
        assert!(matches!(b.build(), Err(ModelError::Duplicate { kind: "vehicle class", .. })));

        let mut b = base();
        b.add_vehicle("v", "k").add_vehicle("v", "k");
        assert!(matches!(b.build(), Err(ModelError::Duplicate { kind: "vehicle", .. })));

        let mut b = base();
        b.add_leg("X", "Y", t("0100"), vec![("k".into(), Profit::whole(1)), ("k".into(), Profit::whole(2))]);
        assert!(matches!(b.build(), Err(ModelError::Duplicate { kind: "leg profit class", .. })));
    }

    #[test]
    fn inverted_window_is_rejected() {
        let mut b = DomainBuilder::new();
        b.add_location("X", t("2000"), t("0500"));
        assert!(matches!(b.build(), Err(ModelError::InvalidWindow { .. })));
    }

    #[test]
    fn profit_range_scales_with_leg_count() {
        let big = || -> Vec<(String, Profit)> { vec![("k".into(), Profit::whole(100_000_000_000_000_000))] };

        let mut b = base();
        for _ in 0..9 {
            b.add_leg("X", "Y", t("0100"), big());
        }
        let d = b.build().unwrap();
        assert_eq!(d.max_best_profit(), Profit::whole(100_000_000_000_000_000));

        let mut b = base();
        for _ in 0..10 {
            b.add_leg("X", "Y", t("0100"), big());
        }
        assert!(matches!(b.build(), Err(ModelError::ProfitRange { legs: 10, .. })));
    }

    #[test]
    fn leg_without_profits_is_rejected() {
        let mut b = base();
        b.add_leg("X", "Y", t("0100"), vec![]);
        assert!(matches!(b.build(), Err(ModelError::NoProfits { index: 0 })));
    }
}

// ── Generator ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod generator {
    use crate::{InstanceGenConfig, InstanceGenerator};

    #[test]
    fn same_seed_same_instance() {
        let cfg = InstanceGenConfig { seed: 99, ..Default::default() };
        let a = InstanceGenerator::new(cfg.clone()).generate().unwrap();
        let b = InstanceGenerator::new(cfg).generate().unwrap();
        assert_eq!(a.legs(), b.legs());
        assert_eq!(a.locations(), b.locations());
    }

    #[test]
    fn respects_size_limits() {
        let cfg = InstanceGenConfig::default();
        let mut g = InstanceGenerator::from(cfg.clone());
        for _ in 0..200 {
            let d = g.generate().unwrap();
            assert!((1..=cfg.max_legs).contains(&d.leg_count()));
            assert!((1..=cfg.max_vehicles).contains(&d.vehicle_count()));
            assert!((2..=cfg.max_locations).contains(&d.locations().len()));
            for leg in d.legs() {
                assert_ne!(leg.departure, leg.arrival);
                assert!(leg.profits().count() >= 1);
            }
        }
    }
}
