//! Unit tests for asar-core primitives.

#[cfg(test)]
mod ids {
    use crate::{ClassId, LegId, LocationId, VehicleId};

    #[test]
    fn index_roundtrip() {
        let id = LegId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(LegId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn class_id_rejects_overflow() {
        assert!(ClassId::try_from(70_000usize).is_err());
    }

    #[test]
    fn ordering() {
        assert!(VehicleId(0) < VehicleId(1));
        assert!(LocationId(100) > LocationId(99));
    }

    #[test]
    fn display() {
        assert_eq!(VehicleId(7).to_string(), "VehicleId(7)");
    }
}

#[cfg(test)]
mod clock {
    use rand::rngs::SmallRng;
    use rand::{Rng, SeedableRng};

    use crate::{AsarError, ClockTime};

    fn t(s: &str) -> ClockTime {
        s.parse().unwrap()
    }

    #[test]
    fn parse_and_display() {
        assert_eq!(t("0830").hours(), 8);
        assert_eq!(t("0830").minutes(), 30);
        assert_eq!(t("0005").to_string(), "0005");
        assert_eq!(t("2359").to_string(), "2359");
    }

    #[test]
    fn parse_rejects_malformed() {
        for bad in ["830", "08300", "08:3", "ab30", "0860", "", "-030"] {
            assert_eq!(ClockTime::parse_hhmm(bad), Err(AsarError::InvalidClock(bad.to_owned())));
        }
    }

    #[test]
    fn add_carries_minutes_into_hours() {
        assert_eq!((t("0830") + t("1240")).to_string(), "2110");
        assert_eq!((t("0045") + t("0015")).to_string(), "0100");
        assert_eq!((t("0959") + t("0001")).to_string(), "1000");
    }

    #[test]
    fn hours_are_not_wrapped() {
        assert_eq!((t("2300") + t("0145")).to_string(), "2445");
        assert_eq!((t("9930") + t("0130")).to_string(), "10100");
    }

    #[test]
    fn subtract_borrows_an_hour() {
        assert_eq!(t("0700").checked_sub(t("0130")), Some(t("0530")));
        assert_eq!(t("0600").checked_sub(t("0600")), Some(ClockTime::ZERO));
    }

    #[test]
    fn subtract_below_zero_is_none() {
        assert_eq!(t("0100").checked_sub(t("0101")), None);
    }

    #[test]
    fn ordering_matches_hhmm_text() {
        assert!(t("0959") < t("1000"));
        assert!(t("2200") > t("0630"));
    }

    #[test]
    fn add_then_subtract_returns_original() {
        let mut rng = SmallRng::seed_from_u64(7);
        for _ in 0..2_000 {
            let a = ClockTime::from_hm(rng.gen_range(0..100), rng.gen_range(0..60)).unwrap();
            let b = ClockTime::from_hm(rng.gen_range(0..100), rng.gen_range(0..60)).unwrap();
            assert_eq!((a + b).checked_sub(b), Some(a), "{a} + {b} - {b}");
        }
    }

    #[test]
    fn carry_and_borrow_move_the_hour_by_at_most_one() {
        let mut rng = SmallRng::seed_from_u64(11);
        for _ in 0..2_000 {
            let a = ClockTime::from_hm(rng.gen_range(0..48), rng.gen_range(0..60)).unwrap();
            let b = ClockTime::from_hm(rng.gen_range(0..48), rng.gen_range(0..60)).unwrap();

            let sum = a + b;
            let carry = sum.hours() - a.hours() - b.hours();
            assert_eq!(carry, u32::from(a.minutes() + b.minutes() >= 60));

            let (hi, lo) = if a >= b { (a, b) } else { (b, a) };
            let diff = hi.checked_sub(lo).unwrap();
            let borrow = hi.hours() - lo.hours() - diff.hours();
            assert_eq!(borrow, u32::from(hi.minutes() < lo.minutes()));
        }
    }
}

#[cfg(test)]
mod profit {
    use crate::{AsarError, Profit, ProfitFormat};

    #[test]
    fn parse_integers_and_tenths() {
        assert_eq!(Profit::parse("100").unwrap(), Profit::whole(100));
        assert_eq!(Profit::parse("87.5").unwrap(), Profit::from_tenths(875));
        assert_eq!(Profit::parse("-4").unwrap(), Profit::whole(-4));
        assert_eq!(Profit::parse("+3.0").unwrap(), Profit::whole(3));
    }

    #[test]
    fn parse_rejects_malformed() {
        for bad in ["", "-", "1.25", "1.", ".5", "12a", "1e3"] {
            assert_eq!(Profit::parse(bad), Err(AsarError::InvalidProfit(bad.to_owned())));
        }
    }

    #[test]
    fn arithmetic() {
        let total: Profit = [Profit::whole(100), Profit::from_tenths(5)].into_iter().sum();
        assert_eq!(total.tenths(), 1005);
        assert_eq!(Profit::whole(3) - Profit::ONE, Profit::whole(2));
    }

    #[test]
    fn format_selection() {
        let integral = [Profit::whole(1), Profit::whole(20)];
        assert_eq!(ProfitFormat::for_profits(integral), ProfitFormat::Integer);
        let mixed = [Profit::whole(1), Profit::from_tenths(15)];
        assert_eq!(ProfitFormat::for_profits(mixed), ProfitFormat::OneDecimal);
    }

    #[test]
    fn rendering() {
        assert_eq!(ProfitFormat::Integer.render(Profit::whole(200)), "200");
        assert_eq!(ProfitFormat::OneDecimal.render(Profit::whole(200)), "200.0");
        assert_eq!(ProfitFormat::OneDecimal.render(Profit::from_tenths(-5)), "-0.5");
        assert_eq!(Profit::from_tenths(1234).to_string(), "123.4");
    }
}
