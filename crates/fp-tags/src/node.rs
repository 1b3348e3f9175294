//! Node profiles: barriers and street crossings.

use fp_core::Tags;

use crate::{access_level, AccessLevel, TagError};

/// Barriers that can stop someone on foot.  Bollards, kerbs and the like only
/// block motor traffic and are folded into [`Barrier::Other`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Barrier {
    /// gate, sliding_gate, wicket_gate: assumed openable unless locked.
    Gate,
    /// barrier_board: assumed closed unless explicitly open or unlocked.
    Board,
    Other,
}

impl Barrier {
    pub fn parse(value: &str) -> Barrier {
        match value {
            "gate" | "sliding_gate" | "wicket_gate" => Barrier::Gate,
            "barrier_board" => Barrier::Board,
            _ => Barrier::Other,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Crossing {
    No,
    Zebra,
    TrafficSignals,
    Uncontrolled,
    Unmarked,
    Informal,
}

impl Crossing {
    pub fn parse(value: &str) -> Result<Crossing, TagError> {
        match value {
            "no" => Ok(Crossing::No),
            "zebra" => Ok(Crossing::Zebra),
            "traffic_signals" => Ok(Crossing::TrafficSignals),
            "uncontrolled" => Ok(Crossing::Uncontrolled),
            "unmarked" => Ok(Crossing::Unmarked),
            "informal" => Ok(Crossing::Informal),
            other => Err(TagError::UnknownValue { key: "crossing", value: other.to_owned() }),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Kerb {
    Lowered,
    Flush,
    Other,
}

/// Facts about a `highway=crossing` node.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CrossingInfo {
    /// `None` when `crossing` is absent or unrecognised.
    pub kind: Option<Crossing>,
    /// `crossing_ref=zebra`.
    pub zebra_ref: bool,
    /// Truthy `crossing:markings`.
    pub markings: bool,
    /// Truthy `traffic_signals`.
    pub traffic_signals: bool,
    /// `traffic_calming=table`.
    pub raised_table: bool,
    /// `crossing:continuous=yes`.
    pub continuous: bool,
    /// `crossing:island=yes`.
    pub island: bool,
    /// `traffic_signals:sound` yes / no.
    pub sound: Option<bool>,
    pub kerb: Option<Kerb>,
    /// `tactile_paving` yes / no.
    pub tactile_paving: Option<bool>,
}

impl CrossingInfo {
    pub fn interpret(tags: &Tags) -> CrossingInfo {
        let yes_no = |key: &str| match tags.get(key) {
            Some("yes") => Some(true),
            Some("no") => Some(false),
            _ => None,
        };
        let kind = tags.get("crossing").and_then(|v| match Crossing::parse(v) {
            Ok(kind) => Some(kind),
            Err(e) => {
                log::warn!("{e}");
                None
            }
        });

        CrossingInfo {
            kind,
            zebra_ref: tags.is("crossing_ref", "zebra"),
            markings: tags.is_truthy("crossing:markings"),
            traffic_signals: tags.is_truthy("traffic_signals"),
            raised_table: tags.is("traffic_calming", "table"),
            continuous: tags.is("crossing:continuous", "yes"),
            island: tags.is("crossing:island", "yes"),
            sound: yes_no("traffic_signals:sound"),
            kerb: tags.get("kerb").map(|v| match v {
                "lowered" => Kerb::Lowered,
                "flush" => Kerb::Flush,
                _ => Kerb::Other,
            }),
            tactile_paving: yes_no("tactile_paving"),
        }
    }

    /// Zebra or signalised, or carrying road markings.
    pub fn is_marked(&self) -> bool {
        matches!(self.kind, Some(Crossing::Zebra | Crossing::TrafficSignals))
            || self.zebra_ref
            || self.markings
    }

    pub fn has_traffic_lights(&self) -> bool {
        self.kind == Some(Crossing::TrafficSignals) || self.traffic_signals
    }
}

/// Typed facts about one node.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NodeProfile {
    /// `false` for a node with no tags at all; such nodes cost nothing.
    pub tagged: bool,
    pub access: Option<AccessLevel>,
    pub barrier: Option<Barrier>,
    /// `locked` yes / no.
    pub locked: Option<bool>,
    /// `open` yes / partial.
    pub open: bool,
    /// Present only for `highway=crossing`.
    pub crossing: Option<CrossingInfo>,
}

impl NodeProfile {
    pub fn interpret(tags: &Tags) -> NodeProfile {
        if tags.is_empty() {
            return NodeProfile::default();
        }
        NodeProfile {
            tagged: true,
            access: access_level(tags),
            barrier: tags.get("barrier").map(Barrier::parse),
            locked: match tags.get("locked") {
                Some("yes") => Some(true),
                Some("no") => Some(false),
                _ => None,
            },
            open: tags.is_any("open", &["yes", "partial"]),
            crossing: tags
                .is("highway", "crossing")
                .then(|| CrossingInfo::interpret(tags)),
        }
    }

    /// Whether the barrier on this node stops a pedestrian outright.
    pub fn barrier_blocks(&self) -> bool {
        match self.barrier {
            Some(Barrier::Gate) => self.locked == Some(true),
            Some(Barrier::Board) => !(self.locked == Some(false) || self.open),
            Some(Barrier::Other) | None => false,
        }
    }
}
