//! Graph-agent status — a single named state machine instead of scattered
//! integer literals, per the framework's "enforce transitions in one place"
//! convention.

/// A graph-bound agent's status. The wire encoding (used by `dt-bus`
/// payloads and `dt-output` rows) is the discriminant value itself, 1..=7.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum GraphStatus {
    /// Idle, or has reached a shelter route's end without evacuating
    /// (non-terminal — distinct from `Evacuated`, which requires the route
    /// to have actually emptied at a shelter node).
    Idle = 1,
    /// A route request has been published; awaiting a reply.
    Requesting = 2,
    /// Following a route returned by the route server.
    Following = 3,
    /// Climbing toward the highest-elevation node within influence radius.
    Climbing = 4,
    /// Following a leader's adopted route.
    LeaderFollowing = 5,
    /// Terminal: the agent has been claimed by the flood.
    Victim = 6,
    /// Terminal: the agent has reached a shelter.
    Evacuated = 7,
}

impl GraphStatus {
    /// `true` for the two terminal states (6, 7); a terminal agent's status
    /// never changes again (invariant 1, SPEC_FULL.md §8).
    #[inline]
    pub fn is_terminal(self) -> bool {
        matches!(self, GraphStatus::Victim | GraphStatus::Evacuated)
    }

    /// Decode the wire integer. Unrecognized values fall back to `Idle`,
    /// matching the original source's zero-valued-field tolerance for
    /// malformed payloads (see the Error Handling section).
    pub fn from_u8(v: u8) -> Self {
        match v {
            2 => GraphStatus::Requesting,
            3 => GraphStatus::Following,
            4 => GraphStatus::Climbing,
            5 => GraphStatus::LeaderFollowing,
            6 => GraphStatus::Victim,
            7 => GraphStatus::Evacuated,
            _ => GraphStatus::Idle,
        }
    }
}

impl Default for GraphStatus {
    fn default() -> Self {
        GraphStatus::Idle
    }
}

impl std::fmt::Display for GraphStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            GraphStatus::Idle => "idle",
            GraphStatus::Requesting => "requesting",
            GraphStatus::Following => "following",
            GraphStatus::Climbing => "climbing",
            GraphStatus::LeaderFollowing => "leader_following",
            GraphStatus::Victim => "victim",
            GraphStatus::Evacuated => "evacuated",
        };
        f.write_str(s)
    }
}
