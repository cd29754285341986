//! Field-agent status — the grid counterpart to `dt_agent::GraphStatus`.

/// A field-bound agent's status. The wire encoding is the discriminant
/// itself: 0, 2, 3, 7 (SPEC_FULL.md §3). Unlike the graph-agent status
/// range, 1/4/5/6 are never used here — they are reserved by the Graph
/// Mover's own status machine, not by this one.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum FieldStatus {
    /// Has not yet acquired awareness of the disaster; immobile.
    Unaware = 0,
    /// Acquired awareness; counting down `prepare_timer` before moving.
    Preparing = 2,
    /// Advancing across the grid toward lower potential.
    Moving = 3,
    /// Terminal: the agent's cell is a shelter cell.
    Evacuated = 7,
}

impl FieldStatus {
    /// `true` for the one terminal state (7).
    #[inline]
    pub fn is_terminal(self) -> bool {
        matches!(self, FieldStatus::Evacuated)
    }

    /// Decode the wire integer. Unrecognized values fall back to `Unaware`,
    /// matching the payload-parsing discipline used elsewhere in the
    /// framework (see the Error Handling section).
    pub fn from_u8(v: u8) -> Self {
        match v {
            2 => FieldStatus::Preparing,
            3 => FieldStatus::Moving,
            7 => FieldStatus::Evacuated,
            _ => FieldStatus::Unaware,
        }
    }
}

impl Default for FieldStatus {
    fn default() -> Self {
        FieldStatus::Unaware
    }
}

impl std::fmt::Display for FieldStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            FieldStatus::Unaware => "unaware",
            FieldStatus::Preparing => "preparing",
            FieldStatus::Moving => "moving",
            FieldStatus::Evacuated => "evacuated",
        };
        f.write_str(s)
    }
}
