//! Way profiles: every fact the cost model needs about a way, interpreted once.

use fp_core::Tags;

use crate::{
    access_level, incline, lanes, maxspeed_mph, report, sidewalk, width_m, AccessLevel, Incline,
    Sidewalk, TagError,
};

// ── Highway classification ────────────────────────────────────────────────────

/// Carriageway classes, most to least trafficked.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RoadClass {
    Motorway,
    Trunk,
    Primary,
    Secondary,
    Tertiary,
    Unclassified,
    Residential,
    LivingStreet,
    Service,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PathClass {
    Footway,
    Bridleway,
    Steps,
    Corridor,
    Path,
    Cycleway,
    Track,
    Pedestrian,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Highway {
    /// `link` is set for `*_link` slip roads.
    Road { class: RoadClass, link: bool },
    Path(PathClass),
    /// `highway=road`: a road whose class was never surveyed.
    Incomplete,
    /// Absent or not routable on foot (construction, platform, …).
    Other,
}

impl Highway {
    pub fn parse(value: &str) -> Highway {
        let (base, link) = match value.strip_suffix("_link") {
            Some(base) => (base, true),
            None => (value, false),
        };
        let road = |class| Highway::Road { class, link };
        match (base, link) {
            ("motorway", _) => road(RoadClass::Motorway),
            ("trunk", _) => road(RoadClass::Trunk),
            ("primary", _) => road(RoadClass::Primary),
            ("secondary", _) => road(RoadClass::Secondary),
            ("tertiary", _) => road(RoadClass::Tertiary),
            ("unclassified", false) => road(RoadClass::Unclassified),
            ("residential", false) => road(RoadClass::Residential),
            ("living_street", false) => road(RoadClass::LivingStreet),
            ("service", false) => road(RoadClass::Service),
            ("footway", false) => Highway::Path(PathClass::Footway),
            ("bridleway", false) => Highway::Path(PathClass::Bridleway),
            ("steps", false) => Highway::Path(PathClass::Steps),
            ("corridor", false) => Highway::Path(PathClass::Corridor),
            ("path", false) => Highway::Path(PathClass::Path),
            ("cycleway", false) => Highway::Path(PathClass::Cycleway),
            ("track", false) => Highway::Path(PathClass::Track),
            ("pedestrian", false) => Highway::Path(PathClass::Pedestrian),
            ("road", false) => Highway::Incomplete,
            _ => Highway::Other,
        }
    }

    /// Classes whose sidewalk is assumed present when untagged.  Slip roads
    /// are deliberately excluded.
    pub fn usually_has_sidewalk(self) -> bool {
        matches!(
            self,
            Highway::Road {
                class: RoadClass::Trunk
                    | RoadClass::Primary
                    | RoadClass::Secondary
                    | RoadClass::Tertiary
                    | RoadClass::Residential
                    | RoadClass::Unclassified,
                link: false,
            }
        )
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ServiceKind {
    Driveway,
    ParkingAisle,
    Parking,
    Alley,
    DriveThrough,
    Slipway,
    Layby,
    EmergencyAccess,
    Bus,
    Other,
}

impl ServiceKind {
    pub fn parse(value: &str) -> ServiceKind {
        match value {
            "driveway" => ServiceKind::Driveway,
            "parking_aisle" => ServiceKind::ParkingAisle,
            "parking" => ServiceKind::Parking,
            "alley" => ServiceKind::Alley,
            "drive_through" => ServiceKind::DriveThrough,
            "slipway" => ServiceKind::Slipway,
            "layby" => ServiceKind::Layby,
            "emergency_access" => ServiceKind::EmergencyAccess,
            "bus" => ServiceKind::Bus,
            _ => ServiceKind::Other,
        }
    }
}

// ── Path character ────────────────────────────────────────────────────────────

/// SAC hiking difficulty scale.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum SacScale {
    Strolling,
    Hiking,
    MountainHiking,
    DemandingMountainHiking,
    AlpineHiking,
    DemandingAlpineHiking,
    DifficultAlpineHiking,
}

impl SacScale {
    pub fn parse(value: &str) -> Result<SacScale, TagError> {
        match value {
            "strolling" => Ok(SacScale::Strolling),
            "hiking" => Ok(SacScale::Hiking),
            "mountain_hiking" => Ok(SacScale::MountainHiking),
            "demanding_mountain_hiking" => Ok(SacScale::DemandingMountainHiking),
            "alpine_hiking" => Ok(SacScale::AlpineHiking),
            "demanding_alpine_hiking" => Ok(SacScale::DemandingAlpineHiking),
            "difficult_alpine_hiking" => Ok(SacScale::DifficultAlpineHiking),
            other => Err(TagError::UnknownValue { key: "sac_scale", value: other.to_owned() }),
        }
    }

    /// Strolling and hiking are walkable without special skill.
    pub fn is_easy(self) -> bool {
        matches!(self, SacScale::Strolling | SacScale::Hiking)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TrailVisibility {
    Excellent,
    Good,
    /// intermediate, bad, horrible or no.
    Poor,
}

impl TrailVisibility {
    pub fn parse(value: &str) -> Result<TrailVisibility, TagError> {
        match value {
            "excellent" => Ok(TrailVisibility::Excellent),
            "good" => Ok(TrailVisibility::Good),
            "intermediate" | "bad" | "horrible" | "no" => Ok(TrailVisibility::Poor),
            other => Err(TagError::UnknownValue { key: "trail_visibility", value: other.to_owned() }),
        }
    }
}

/// Legal designation of a path, mostly rights-of-way families.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Designation {
    PublicFootpath,
    PublicBridleway,
    RestrictedByway,
    BywayOpenToAllTraffic,
    PublicRightOfWay,
    /// Scottish core path network.
    CorePath,
    Other,
}

impl Designation {
    pub fn parse(value: &str) -> Designation {
        match value {
            "public_footpath" => Designation::PublicFootpath,
            "public_bridleway" => Designation::PublicBridleway,
            "restricted_byway" => Designation::RestrictedByway,
            "byway_open_to_all_traffic" => Designation::BywayOpenToAllTraffic,
            "public_right_of_way" => Designation::PublicRightOfWay,
            "core_path" => Designation::CorePath,
            _ => Designation::Other,
        }
    }
}

/// Whether a path looks officially looked after.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Maintenance {
    Maintained,
    Unknown,
    /// `informal=yes`: a desire line.
    Informal,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Wheelchair {
    Yes,
    No,
    Limited,
    Designated,
}

impl Wheelchair {
    pub fn parse(value: &str) -> Result<Wheelchair, TagError> {
        match value {
            "yes" => Ok(Wheelchair::Yes),
            "no" => Ok(Wheelchair::No),
            "limited" => Ok(Wheelchair::Limited),
            "designated" => Ok(Wheelchair::Designated),
            other => Err(TagError::UnknownValue { key: "wheelchair", value: other.to_owned() }),
        }
    }
}

// ── Surface & condition ───────────────────────────────────────────────────────

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SurfaceClass {
    /// Asphalt, concrete, paving stones, bricks.
    NicePaved,
    /// Setts, cobbles, wood, metal and other hard but uneven surfaces.
    Paved,
    /// Compacted, gravel and similar.
    NiceUnpaved,
    /// Dirt, grass, sand, snow, earth.
    BareGround,
    Mud,
}

impl SurfaceClass {
    /// `None` for surfaces outside the known families.
    pub fn parse(value: &str) -> Option<SurfaceClass> {
        match value {
            "asphalt" | "chipseal" | "paving_stones:lanes" | "paving_stones" | "bricks"
            | "concrete:plates" | "concrete:lanes" | "concrete" => Some(SurfaceClass::NicePaved),
            "grass_paver" | "sett" | "unhewn_cobblestone" | "metal" | "metal_grid" | "wood"
            | "rubber" | "tiles" | "paved" | "cobblestone" | "cobblestone:flattened" => {
                Some(SurfaceClass::Paved)
            }
            "compacted" | "fine_gravel" | "gravel" | "shells" | "rock" | "pebblestone"
            | "woodchips" => Some(SurfaceClass::NiceUnpaved),
            "dirt" | "grass" | "sand" | "snow" | "earth" => Some(SurfaceClass::BareGround),
            "mud" => Some(SurfaceClass::Mud),
            _ => None,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Smoothness {
    /// excellent, good or intermediate.
    Good,
    Bad,
    /// very_bad, horrible or very_horrible.
    VeryBad,
    Impassable,
}

impl Smoothness {
    pub fn parse(value: &str) -> Result<Smoothness, TagError> {
        match value {
            "excellent" | "good" | "intermediate" => Ok(Smoothness::Good),
            "bad" => Ok(Smoothness::Bad),
            "very_bad" | "horrible" | "very_horrible" => Ok(Smoothness::VeryBad),
            "impassable" => Ok(Smoothness::Impassable),
            other => Err(TagError::UnknownValue { key: "smoothness", value: other.to_owned() }),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Ford {
    Yes,
    SteppingStones,
}

// ── Implicit defaults ─────────────────────────────────────────────────────────

/// Copy of `tags` with the way-level defaults implied by OSM conventions.
///
/// Defaults are only inserted for absent keys; explicit tags always win.
pub fn with_implicit_defaults(tags: &Tags) -> Tags {
    let mut tags = tags.clone();
    if tags.is_any("highway", &["motorway", "motorway_link"]) {
        tags.insert_default("foot", "no");
    }
    let service = tags.get("service").map(str::to_owned);
    match service.as_deref() {
        Some("driveway") => tags.insert_default("access", "private"),
        Some("parking_aisle") => {
            if tags.get("access").is_none_or(|a| a.is_empty() || a == "yes") {
                tags.insert_default("foot", "yes");
            }
        }
        Some("emergency_access") => tags.insert_default("access", "no"),
        Some("bus") => tags.insert_default("foot", "no"),
        _ => {}
    }
    tags
}

// ── WayProfile ────────────────────────────────────────────────────────────────

/// Typed facts about one way.
///
/// Build with [`WayProfile::interpret`]; implicit defaults are already
/// applied to `access`.
#[derive(Clone, Debug, PartialEq)]
pub struct WayProfile {
    pub highway: Highway,
    pub service: Option<ServiceKind>,
    pub access: Option<AccessLevel>,
    /// `foot=use_sidepath`: walking on the carriageway is forbidden.
    pub foot_use_sidepath: bool,
    pub foot_designated: bool,

    // Road facts.
    pub sidewalk: Option<Sidewalk>,
    pub maxspeed_mph: Option<f64>,
    pub lanes: Option<u32>,
    pub shoulder: bool,
    pub verge: bool,

    // Path facts.
    pub footway_sidewalk: bool,
    pub segregated: Option<bool>,
    pub sac_scale: Option<SacScale>,
    pub trail_visibility: Option<TrailVisibility>,
    pub trailblazed: bool,
    pub width_m: Option<f64>,
    pub designation: Option<Designation>,
    pub has_operator: bool,
    pub informal: bool,
    pub obstacle_vegetation: bool,
    pub wheelchair: Option<Wheelchair>,

    // Condition facts.
    pub surface: Option<SurfaceClass>,
    /// Explicit `smoothness`, else `Good` for asphalt and chipseal.
    pub smoothness: Option<Smoothness>,
    pub incline: Option<Incline>,
    pub ford: Option<Ford>,
    /// `Some(true)` lit, `Some(false)` explicitly unlit.
    pub lit: Option<bool>,
    pub indoor: bool,
    /// Covered, tunnel, sheltered, or indoor.
    pub covered: bool,
}

impl WayProfile {
    pub fn interpret(raw: &Tags) -> WayProfile {
        let tags = with_implicit_defaults(raw);
        let highway = tags.get("highway").map_or(Highway::Other, Highway::parse);

        let surface_value = tags.get("surface");
        let assumed_smoothness = surface_value
            .filter(|s| matches!(*s, "asphalt" | "chipseal"))
            .map(|_| Smoothness::Good);
        let smoothness = match tags.get("smoothness") {
            Some(v) => report(Smoothness::parse(v).map(Some)).or(assumed_smoothness),
            None => assumed_smoothness,
        };

        let indoor = tags.is_any("indoor", &["yes", "corridor"])
            || highway == Highway::Path(PathClass::Corridor);
        let covered = tags.is_truthy("covered")
            || tags.is_truthy("tunnel")
            || tags.is_truthy("shelter")
            || indoor;

        WayProfile {
            highway,
            service: tags.get("service").map(ServiceKind::parse),
            access: access_level(&tags),
            foot_use_sidepath: tags.is("foot", "use_sidepath"),
            foot_designated: tags.is("foot", "designated"),

            sidewalk: sidewalk(&tags),
            maxspeed_mph: maxspeed_mph(&tags),
            lanes: lanes(&tags),
            shoulder: tags.is_truthy("shoulder"),
            verge: tags.is_truthy("verge"),

            footway_sidewalk: tags.is("footway", "sidewalk"),
            segregated: match tags.get("segregated") {
                Some("yes") => Some(true),
                Some("no") => Some(false),
                _ => None,
            },
            sac_scale: tags
                .get("sac_scale")
                .and_then(|v| report(SacScale::parse(v).map(Some))),
            trail_visibility: tags
                .get("trail_visibility")
                .and_then(|v| report(TrailVisibility::parse(v).map(Some))),
            trailblazed: tags.is_truthy("trailblazed"),
            width_m: width_m(&tags),
            designation: tags.get("designation").map(Designation::parse),
            has_operator: tags.contains_key("operator"),
            informal: tags.is("informal", "yes"),
            obstacle_vegetation: tags.is("obstacle", "vegetation"),
            wheelchair: tags
                .get("wheelchair")
                .and_then(|v| report(Wheelchair::parse(v).map(Some))),

            surface: surface_value.and_then(SurfaceClass::parse),
            smoothness,
            incline: incline(&tags),
            ford: match tags.get("ford") {
                Some("yes") => Some(Ford::Yes),
                Some("stepping_stones") => Some(Ford::SteppingStones),
                _ => None,
            },
            lit: match tags.get("lit") {
                Some("yes" | "24/7" | "automatic" | "limited") => Some(true),
                Some("no" | "disused") => Some(false),
                _ => None,
            },
            indoor,
            covered,
        }
    }

    /// Maintenance inferred from path class, designation, operator and
    /// `informal`.  `informal=yes` overrides every positive signal.
    pub fn maintenance(&self) -> Maintenance {
        if self.informal {
            return Maintenance::Informal;
        }
        let official_class = matches!(
            self.highway,
            Highway::Path(PathClass::Footway | PathClass::Cycleway | PathClass::Pedestrian)
        );
        if official_class || self.designation.is_some() || self.has_operator {
            Maintenance::Maintained
        } else {
            Maintenance::Unknown
        }
    }

    /// Tagged visibility, else `Excellent` for maintained paths.
    pub fn effective_trail_visibility(&self) -> Option<TrailVisibility> {
        self.trail_visibility.or(match self.maintenance() {
            Maintenance::Maintained => Some(TrailVisibility::Excellent),
            _ => None,
        })
    }

    /// Whether the path would suit a wheelchair when the `wheelchair` tag is
    /// absent.  Steps never do; footways, cycleways, pedestrian areas and
    /// strolling paths do; mountain scales never do.
    pub fn assumed_wheelchair_suitable(&self) -> bool {
        let mut suitable = matches!(
            self.highway,
            Highway::Path(PathClass::Footway | PathClass::Cycleway | PathClass::Pedestrian)
        );
        match self.sac_scale {
            Some(SacScale::Strolling) => suitable = true,
            Some(SacScale::Hiking) | None => {}
            Some(_) => suitable = false,
        }
        suitable
    }

    /// Tagged wheelchair suitability, else the assumption above.
    pub fn effective_wheelchair(&self) -> Wheelchair {
        self.wheelchair.unwrap_or(if self.assumed_wheelchair_suitable() {
            Wheelchair::Yes
        } else {
            Wheelchair::No
        })
    }
}
