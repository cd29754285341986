//! Unit tests for dt-core primitives.

#[cfg(test)]
mod ids {
    use crate::{AgentId, NodeId};

    #[test]
    fn index_roundtrip() {
        let id = AgentId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(AgentId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn ordering() {
        assert!(AgentId(0) < AgentId(1));
        assert!(NodeId(100) > NodeId(99));
    }

    #[test]
    fn invalid_sentinels_are_max() {
        assert_eq!(AgentId::INVALID.0, u32::MAX);
        assert_eq!(NodeId::INVALID.0, u32::MAX);
    }

    #[test]
    fn display() {
        assert_eq!(AgentId(7).to_string(), "AgentId(7)");
    }
}

#[cfg(test)]
mod point {
    use crate::Point;

    #[test]
    fn zero_distance() {
        let p = Point::new(30.0, -88.0);
        assert!(p.distance(p) < 0.01);
    }

    #[test]
    fn pythagorean_distance() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(3.0, 4.0);
        assert_eq!(a.distance(b), 5.0);
        assert_eq!(a.distance_sq(b), 25.0);
    }

    #[test]
    fn bbox_check() {
        let center = Point::new(100.0, 100.0);
        let nearby = Point::new(105.0, 98.0);
        let far = Point::new(500.0, 100.0);
        assert!(nearby.within_bbox(center, 10.0));
        assert!(!far.within_bbox(center, 10.0));
    }
}

#[cfg(test)]
mod time {
    use crate::Tick;

    #[test]
    fn tick_arithmetic() {
        let t = Tick(10);
        assert_eq!(t + 5, Tick(15));
        assert_eq!(t.offset(3), Tick(13));
        assert_eq!(Tick(15) - Tick(10), 5u64);
    }
}

#[cfg(test)]
mod rng {
    use crate::{AgentId, AgentRng};

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = AgentRng::new(12345, AgentId(0));
        let mut r2 = AgentRng::new(12345, AgentId(0));
        for _ in 0..100 {
            let a: f32 = r1.random();
            let b: f32 = r2.random();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn different_agents_differ() {
        let mut r0 = AgentRng::new(1, AgentId(0));
        let mut r1 = AgentRng::new(1, AgentId(1));
        let a: u64 = r0.random();
        let b: u64 = r1.random();
        assert_ne!(a, b, "seeds for adjacent agents should diverge");
    }

    #[test]
    fn gen_range_in_bounds() {
        let mut rng = AgentRng::new(0, AgentId(0));
        for _ in 0..1000 {
            let v = rng.gen_range(0.0f32..1.0);
            assert!((0.0..1.0).contains(&v));
        }
    }

    #[test]
    fn gen_bool_extremes() {
        let mut rng = AgentRng::new(0, AgentId(0));
        assert!(!rng.gen_bool(0.0));
        assert!(rng.gen_bool(1.0));
    }
}
