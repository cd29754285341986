#[cfg(test)]
mod transport {
    use crate::transport::{InProcessBus, Transport};

    #[test]
    fn publish_then_subscribe_misses_earlier_messages() {
        let bus = InProcessBus::new();
        bus.publish("aria/cycle/u1", b"too-early").unwrap();
        let sub = bus.subscribe("aria/cycle/u1").unwrap();
        assert_eq!(sub.try_recv().unwrap(), None);
    }

    #[test]
    fn subscribe_then_publish_delivers() {
        let bus = InProcessBus::new();
        let sub = bus.subscribe("aria/cycle/u1").unwrap();
        bus.publish("aria/cycle/u1", b"hello").unwrap();
        assert_eq!(sub.try_recv().unwrap(), Some(b"hello".to_vec()));
        assert_eq!(sub.try_recv().unwrap(), None);
    }

    #[test]
    fn fan_out_to_multiple_subscribers() {
        let bus = InProcessBus::new();
        let a = bus.subscribe("aria/media/u1").unwrap();
        let b = bus.subscribe("aria/media/u1").unwrap();
        bus.publish("aria/media/u1", b"event").unwrap();
        assert_eq!(a.try_recv().unwrap(), Some(b"event".to_vec()));
        assert_eq!(b.try_recv().unwrap(), Some(b"event".to_vec()));
    }

    #[test]
    fn distinct_topics_do_not_cross_talk() {
        let bus = InProcessBus::new();
        let flood = bus.subscribe("/camera/flood/cam1").unwrap();
        bus.publish("/camera/antenna/cam1", b"antenna-event").unwrap();
        assert_eq!(flood.try_recv().unwrap(), None);
    }

    #[test]
    fn publish_with_no_subscribers_is_not_an_error() {
        let bus = InProcessBus::new();
        assert!(bus.publish("/stat/send", b"{}").is_ok());
    }
}

#[cfg(test)]
mod topics {
    use crate::topics;

    #[test]
    fn builders_substitute_variable_segments() {
        assert_eq!(topics::attend("u1"), "aria/attend/u1");
        assert_eq!(topics::registered("u1", "w0"), "aria/registered/u1/w0");
        assert_eq!(topics::cycle("u1"), "aria/cycle/u1");
        assert_eq!(topics::route_request("42"), "/person/send/start2target/42");
        assert_eq!(topics::camera_flood("cam1"), "/camera/flood/cam1");
    }

    #[test]
    fn literal_topics_have_no_placeholders() {
        assert_eq!(topics::flood_count(), "/flood/count");
        assert_eq!(topics::stat_send(), "/stat/send");
        assert_eq!(topics::person_send_all(), "/person/send/all");
    }
}

#[cfg(all(test, feature = "serde"))]
mod payload {
    use crate::payload::{AllEntity, CycleEntity, MediaEntity, StatEntity};

    #[test]
    fn cycle_entity_serializes_to_single_letter_key() {
        let c = CycleEntity { announce_step: 7 };
        let json = serde_json::to_string(&c).unwrap();
        assert_eq!(json, r#"{"a":7}"#);
    }

    #[test]
    fn all_entity_preserves_mixed_casing() {
        let e = AllEntity {
            simulation_time: 12,
            id: 3,
            x: 1.5,
            y: 2.5,
            status: 1,
            info_access: 1,
        };
        let json = serde_json::to_value(&e).unwrap();
        assert_eq!(json["Simulationtime"], 12);
        assert_eq!(json["X"], 1.5);
        assert_eq!(json["Y"], 2.5);
        assert_eq!(json["status"], 1);
        assert_eq!(json["infoAccess"], 1);
    }

    #[test]
    fn media_entity_round_trips_type_keyword() {
        let m = MediaEntity {
            x: 1.0,
            y: 2.0,
            size: 3.0,
            acquisition: 0.5,
            kind: "flood".into(),
        };
        let json = serde_json::to_string(&m).unwrap();
        assert!(json.contains(r#""type":"flood""#));
        let back: MediaEntity = serde_json::from_str(&json).unwrap();
        assert_eq!(back, m);
    }

    #[test]
    fn stat_entity_uses_pascal_case_keys() {
        let s = StatEntity {
            affected_person: 2,
            evacuated_person: 5,
            total_flood: 10.0,
            max_flood: 0.9,
        };
        let json = serde_json::to_value(&s).unwrap();
        assert_eq!(json["AffectedPerson"], 2);
        assert_eq!(json["EvacuatedPerson"], 5);
    }
}
