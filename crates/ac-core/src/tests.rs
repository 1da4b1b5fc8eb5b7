//! Unit tests for ac-core primitives.

#[cfg(test)]
mod ids {
    use crate::{AgentId, DirectoryId, ResourceId};

    #[test]
    fn index_roundtrip() {
        let id = AgentId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(AgentId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn invalid_sentinels_are_max() {
        assert_eq!(AgentId::INVALID.0, u32::MAX);
        assert_eq!(DirectoryId::INVALID.0, u32::MAX);
        assert_eq!(ResourceId::default(), ResourceId::INVALID);
    }

    #[test]
    fn display() {
        assert_eq!(AgentId(7).to_string(), "AgentId(7)");
        assert_eq!(DirectoryId(2).to_string(), "DirectoryId(2)");
    }
}

#[cfg(test)]
mod geo {
    use crate::{Bounds, Position};

    #[test]
    fn distance_is_euclidean() {
        let a = Position::new(0.0, 0.0);
        let b = Position::new(3.0, 4.0);
        assert_eq!(a.distance(b), 5.0);
        assert_eq!(a.distance_2(b), 25.0);
    }

    #[test]
    fn step_moves_by_speed() {
        let (p, arrived) = Position::new(0.0, 0.0).step_toward(Position::new(10.0, 0.0), 3.0);
        assert!(!arrived);
        assert!((p.x - 3.0).abs() < 1e-6);
        assert_eq!(p.y, 0.0);
    }

    #[test]
    fn step_snaps_when_close() {
        let target = Position::new(1.0, 1.0);
        let (p, arrived) = Position::new(0.0, 0.0).step_toward(target, 3.0);
        assert!(arrived);
        assert_eq!(p, target);
    }

    #[test]
    fn step_on_target_arrives() {
        let target = Position::new(5.0, 5.0);
        let (p, arrived) = target.step_toward(target, 3.0);
        assert!(arrived);
        assert_eq!(p, target);
    }

    #[test]
    fn bounds_contains_half_open() {
        let b = Bounds::new(10.0, 10.0, 20.0, 10.0);
        assert!(b.contains(Position::new(10.0, 10.0)));
        assert!(b.contains(Position::new(29.9, 19.9)));
        assert!(!b.contains(Position::new(30.0, 15.0)));
        assert!(!b.contains(Position::new(15.0, 20.0)));
    }

    #[test]
    fn bottom_center_is_entrance_point() {
        let b = Bounds::new(50.0, 50.0, 60.0, 80.0);
        assert_eq!(b.bottom_center(), Position::new(80.0, 130.0));
    }

    #[test]
    fn inset_shrinks_or_fails() {
        let b = Bounds::new(0.0, 0.0, 60.0, 80.0);
        assert_eq!(b.inset(10.0), Some(Bounds::new(10.0, 10.0, 40.0, 60.0)));
        assert_eq!(Bounds::sized(15.0, 15.0).inset(10.0), None);
    }

    #[test]
    fn overlap_detection() {
        let a = Bounds::new(0.0, 0.0, 10.0, 10.0);
        assert!(a.overlaps(&Bounds::new(5.0, 5.0, 10.0, 10.0)));
        assert!(!a.overlaps(&Bounds::new(10.0, 0.0, 10.0, 10.0)));
    }
}

#[cfg(test)]
mod time {
    use crate::{SimClock, SimConfig, Tick, TimeOfDay};

    #[test]
    fn tick_arithmetic() {
        let t = Tick(10);
        assert_eq!(t + 5, Tick(15));
        assert!(t + 1 > t);
    }

    #[test]
    fn time_of_day_boundaries() {
        assert_eq!(TimeOfDay::from_hour(5), TimeOfDay::Night);
        assert_eq!(TimeOfDay::from_hour(6), TimeOfDay::Morning);
        assert_eq!(TimeOfDay::from_hour(11), TimeOfDay::Morning);
        assert_eq!(TimeOfDay::from_hour(12), TimeOfDay::Afternoon);
        assert_eq!(TimeOfDay::from_hour(17), TimeOfDay::Evening);
        assert_eq!(TimeOfDay::from_hour(22), TimeOfDay::Night);
        assert_eq!(TimeOfDay::Evening.to_string(), "evening");
    }

    #[test]
    fn clock_starts_at_six_on_day_one() {
        let clock = SimClock::new(60, 6);
        assert_eq!(clock.day(), 1);
        assert_eq!(clock.hour(), 6);
        assert_eq!(clock.time_of_day(), TimeOfDay::Morning);
        assert_eq!(clock.to_string(), "Day 1 - 06:00 (morning)");
    }

    #[test]
    fn clock_rolls_over_midnight() {
        let mut clock = SimClock::new(1, 22);
        for _ in 0..3 {
            clock.advance();
        }
        assert_eq!(clock.hour(), 1);
        assert_eq!(clock.day(), 2);
        assert!(clock.is_night());
    }

    #[test]
    fn delta_hours_matches_resolution() {
        let clock = SimClock::new(60, 0);
        assert!((clock.delta_hours() - 1.0 / 60.0).abs() < 1e-9);
        assert_eq!(clock.ticks_for_hours(2.0), 120);
    }

    #[test]
    fn minutes_within_hour() {
        let mut clock = SimClock::new(60, 6);
        for _ in 0..30 {
            clock.advance();
        }
        assert_eq!(clock.minute(), 30);
        assert!(!clock.is_hour_boundary());
    }

    #[test]
    fn tick_info_carries_label() {
        let clock = SimClock::new(4, 12);
        let info = clock.tick_info();
        assert_eq!(info.tick, Tick(0));
        assert_eq!(info.delta_hours, 0.25);
        assert_eq!(info.time_of_day, TimeOfDay::Afternoon);
    }

    #[test]
    fn config_validation() {
        assert!(SimConfig::default().validate().is_ok());
        let bad = SimConfig { ticks_per_hour: 0, ..SimConfig::default() };
        assert!(bad.validate().is_err());
        let bad = SimConfig { start_hour: 24, ..SimConfig::default() };
        assert!(bad.validate().is_err());
    }
}

#[cfg(test)]
mod rng {
    use crate::{AgentId, AgentRng, RandomSource, SimRng};

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = AgentRng::new(12345, AgentId(0));
        let mut r2 = AgentRng::new(12345, AgentId(0));
        for _ in 0..100 {
            assert_eq!(r1.next_unit(), r2.next_unit());
        }
    }

    #[test]
    fn different_agents_differ() {
        let mut r0 = AgentRng::new(1, AgentId(0));
        let mut r1 = AgentRng::new(1, AgentId(1));
        let a = r0.next_unit();
        let b = r1.next_unit();
        assert_ne!(a, b, "seeds for adjacent agents should diverge");
    }

    #[test]
    fn gen_range_in_bounds() {
        let mut rng = SimRng::new(0);
        for _ in 0..1000 {
            let v = rng.gen_range_f32(10.0, 20.0);
            assert!((10.0..=20.0).contains(&v));
            let i = rng.gen_int_inclusive(-3, 3);
            assert!((-3..=3).contains(&i));
        }
    }

    #[test]
    fn gen_bool_extremes() {
        let mut rng = AgentRng::new(0, AgentId(0));
        assert!(!rng.gen_bool(0.0));
        assert!(rng.gen_bool(1.0));
    }

    /// Always returns the same draw.
    struct Fixed(f64);

    impl RandomSource for Fixed {
        fn next_unit(&mut self) -> f64 {
            self.0
        }
    }

    #[test]
    fn derived_methods_follow_next_unit() {
        let mut low = Fixed(0.05);
        assert!(low.gen_bool(0.1));
        let mut high = Fixed(0.5);
        assert!(!high.gen_bool(0.1));
        assert_eq!(Fixed(0.5).gen_range_f32(0.0, 10.0), 5.0);
        assert_eq!(Fixed(0.999).gen_int_inclusive(1, 4), 4);
        assert_eq!(Fixed(0.0).gen_int_inclusive(1, 4), 1);
    }
}
