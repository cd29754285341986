//! Unit tests for dt-schedule.

#[cfg(test)]
mod cycle_schedule {
    use crate::{CycleClock, CycleDescriptor, CycleSchedule};

    fn two_cycles() -> CycleSchedule {
        CycleSchedule::new(vec![
            CycleDescriptor::new(3, 10),
            CycleDescriptor::new(1, 5),
        ])
    }

    #[test]
    fn wraps_on_index() {
        let s = two_cycles();
        assert_eq!(s.at(0), CycleDescriptor::new(3, 10));
        assert_eq!(s.at(1), CycleDescriptor::new(1, 5));
        assert_eq!(s.at(2), CycleDescriptor::new(3, 10));
    }

    #[test]
    fn clock_advances_within_cycle() {
        let s = two_cycles();
        let mut clock = CycleClock::new();
        clock.start_cycle();
        for _ in 0..9 {
            clock.advance_step(&s);
        }
        assert_eq!(clock.step, 9);
        assert_eq!(clock.cycle_index, 0);
        assert!(!clock.needs_cycle_start);
    }

    #[test]
    fn clock_rolls_to_next_cycle() {
        let s = two_cycles();
        let mut clock = CycleClock::new();
        clock.start_cycle();
        for _ in 0..10 {
            clock.advance_step(&s);
        }
        assert_eq!(clock.cycle_index, 1);
        assert!(clock.needs_cycle_start);
    }

    #[test]
    fn as_tick_accumulates_prior_cycles() {
        let s = two_cycles();
        let mut clock = CycleClock::new();
        clock.start_cycle();
        for _ in 0..10 {
            clock.advance_step(&s);
        }
        clock.start_cycle();
        for _ in 0..2 {
            clock.advance_step(&s);
        }
        // 10 steps of cycle 0 + 2 steps of cycle 1 = tick 12.
        assert_eq!(clock.as_tick(&s).0, 12);
    }
}

#[cfg(test)]
mod media {
    use dt_core::Point;

    use crate::media::active_events;
    use crate::MediaEvent;

    fn event() -> MediaEvent {
        MediaEvent {
            step: 5,
            duration: 2,
            acquisition: 0.5,
            size: 1.0,
            kind: "drone".into(),
            positions: vec![Point::new(0.0, 0.0), Point::new(1.0, 1.0)],
        }
    }

    #[test]
    fn inactive_before_step() {
        assert!(!event().is_active_at(4));
    }

    #[test]
    fn active_across_duration() {
        let e = event();
        assert!(e.is_active_at(5));
        assert!(e.is_active_at(6));
        assert!(e.is_active_at(7));
        assert!(!e.is_active_at(8));
    }

    #[test]
    fn position_cycles_through_list() {
        let e = event();
        assert_eq!(e.position_at(5), Some(Point::new(0.0, 0.0)));
        assert_eq!(e.position_at(6), Some(Point::new(1.0, 1.0)));
        assert_eq!(e.position_at(7), Some(Point::new(0.0, 0.0)));
    }

    #[test]
    fn active_events_filters_table() {
        let events = vec![event(), MediaEvent { step: 100, ..event() }];
        let active = active_events(&events, 6);
        assert_eq!(active.len(), 1);
    }
}

#[cfg(test)]
mod loader {
    use std::io::Cursor;

    use crate::loader::load_cycle_schedule_reader;

    const CSV: &[u8] = b"\
announce_step,step_count\n\
3,48\n\
5,72\n";

    #[test]
    fn loads_rows_in_order() {
        let schedule = load_cycle_schedule_reader(Cursor::new(CSV)).unwrap();
        assert_eq!(schedule.len(), 2);
        assert_eq!(schedule.at(0).announce_step, 3);
        assert_eq!(schedule.at(1).step_count, 72);
    }

    #[test]
    fn invalid_row_is_skipped() {
        let bad: &[u8] = b"\
announce_step,step_count\n\
50,10\n\
3,48\n";
        let schedule = load_cycle_schedule_reader(Cursor::new(bad)).unwrap();
        // First row violates announce_step <= step_count and is dropped.
        assert_eq!(schedule.len(), 1);
        assert_eq!(schedule.at(0).announce_step, 3);
    }
}
