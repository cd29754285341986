//! Topic string builders.
//!
//! Every topic in the catalogue has at most one variable segment (a universe
//! id, a worker id, a camera tag, or an agent id). Building the final topic
//! string here — rather than formatting ad hoc at each call site — keeps the
//! literal topic shapes in one place and makes a typo a compile error at the
//! call site instead of a silently-unmatched subscription at runtime.

/// `W→C`: a worker announcing itself and the size of its agent population.
pub fn attend(universe: &str) -> String {
    format!("aria/attend/{universe}")
}

/// `C→W`: the coordinator's reply assigning a worker its agent-id range.
pub fn registered(universe: &str, worker_id: &str) -> String {
    format!("aria/registered/{universe}/{worker_id}")
}

/// `C→W`: the coordinator announcing the current cycle's announce_step.
pub fn cycle(universe: &str) -> String {
    format!("aria/cycle/{universe}")
}

/// `W→C`: a worker confirming it has prepared for the announced cycle.
pub fn prepared(universe: &str) -> String {
    format!("aria/prepared/{universe}")
}

/// `C→*`: the flood step counter driving the media broadcaster.
pub fn flood_count() -> &'static str {
    "/flood/count"
}

/// `W→C`: a worker's per-step agent snapshot batch.
pub fn persons(universe: &str) -> String {
    format!("aria/persons/{universe}")
}

/// `W↔W`: the graph-mover peer gossip overlay.
pub fn intra_persons(universe: &str) -> String {
    format!("aria/intra/persons/{universe}")
}

/// `W→?`: a route request for a single agent.
pub fn route_request(agent_id: &str) -> String {
    format!("/person/send/start2target/{agent_id}")
}

/// `?→W`: a route reply for a single agent.
pub fn route_reply(agent_id: &str) -> String {
    format!("/person/recv/start2target/{agent_id}")
}

/// `*→W`: an externally injected flood event tagged by camera/sensor id.
pub fn camera_flood(tag: &str) -> String {
    format!("/camera/flood/{tag}")
}

/// `*→W`: an externally injected antenna (info-loss) event tagged by sensor id.
pub fn camera_antenna(tag: &str) -> String {
    format!("/camera/antenna/{tag}")
}

/// Broadcast: a scripted media event for the current step.
pub fn media(universe: &str) -> String {
    format!("aria/media/{universe}")
}

/// `C→*`: the coordinator's per-step aggregate statistics.
pub fn stat_send() -> &'static str {
    "/stat/send"
}

/// `C→*`: the coordinator's merged per-step agent set.
pub fn person_send_all() -> &'static str {
    "/person/send/all"
}
