//! Unit tests for fp-tags interpreters.

#[cfg(test)]
mod sidewalk {
    use fp_core::Tags;

    use crate::{sidewalk, Sidewalk};

    #[test]
    fn combined_tag() {
        assert_eq!(sidewalk(&Tags::from([("sidewalk", "both")])), Some(Sidewalk::Both));
        assert_eq!(sidewalk(&Tags::from([("sidewalk", "right")])), Some(Sidewalk::Right));
        assert_eq!(sidewalk(&Tags::from([("sidewalk", "separate")])), Some(Sidewalk::No));
        assert_eq!(sidewalk(&Tags::from([("sidewalk", "none")])), Some(Sidewalk::No));
    }

    #[test]
    fn side_specific_wins_over_combined() {
        let tags = Tags::from([("sidewalk", "no"), ("sidewalk:left", "yes")]);
        assert_eq!(sidewalk(&tags), Some(Sidewalk::Left));
    }

    #[test]
    fn sides_consulted_left_right_both() {
        let tags = Tags::from([("sidewalk:right", "yes"), ("sidewalk:both", "no")]);
        assert_eq!(sidewalk(&tags), Some(Sidewalk::Right));
        let tags = Tags::from([("sidewalk:left", "separate"), ("sidewalk:right", "yes")]);
        assert_eq!(sidewalk(&tags), Some(Sidewalk::No));
    }

    #[test]
    fn unknown_side_value_falls_through() {
        let tags = Tags::from([("sidewalk:left", "maybe"), ("sidewalk", "both")]);
        assert_eq!(sidewalk(&tags), Some(Sidewalk::Both));
    }

    #[test]
    fn absent_or_unknown_is_none() {
        assert_eq!(sidewalk(&Tags::new()), None);
        assert_eq!(sidewalk(&Tags::from([("sidewalk", "sometimes")])), None);
    }
}

#[cfg(test)]
mod quantity {
    use approx::assert_relative_eq;
    use fp_core::Tags;

    use crate::quantity::{parse_incline, parse_maxspeed_mph, parse_width_m};
    use crate::{incline, lanes, maxspeed_mph, width_m, Incline, TagError};

    #[test]
    fn maxspeed_bare_number_is_kmh() {
        assert_relative_eq!(parse_maxspeed_mph("50").unwrap(), 31.0686, epsilon = 1e-3);
    }

    #[test]
    fn maxspeed_units() {
        assert_relative_eq!(parse_maxspeed_mph("30 mph").unwrap(), 30.0);
        assert_relative_eq!(parse_maxspeed_mph(" 80 KM/H ").unwrap(), 49.7097, epsilon = 1e-3);
        assert_relative_eq!(parse_maxspeed_mph("10 knots").unwrap(), 11.5078, epsilon = 1e-4);
    }

    #[test]
    fn maxspeed_rejects_malformed() {
        assert!(matches!(
            parse_maxspeed_mph("fast"),
            Err(TagError::InvalidNumber { key: "maxspeed", .. })
        ));
        assert!(matches!(parse_maxspeed_mph("30 furlongs"), Err(TagError::UnknownUnit { .. })));
        assert!(matches!(parse_maxspeed_mph("30 mph zone"), Err(TagError::InvalidFormat { .. })));
        assert_eq!(maxspeed_mph(&Tags::from([("maxspeed", "signals")])), None);
    }

    #[test]
    fn width_metre_family_only() {
        assert_relative_eq!(parse_width_m("width", "1.5").unwrap(), 1.5);
        assert_relative_eq!(parse_width_m("width", "3 metres").unwrap(), 3.0);
        assert!(matches!(parse_width_m("width", "4 ft"), Err(TagError::UnknownUnit { .. })));
    }

    #[test]
    fn width_falls_back_to_est_width() {
        let tags = Tags::from([("est_width", "0.5")]);
        assert_eq!(width_m(&tags), Some(0.5));
        let tags = Tags::from([("width", "2"), ("est_width", "0.5")]);
        assert_eq!(width_m(&tags), Some(2.0));
    }

    #[test]
    fn lane_count() {
        assert_eq!(lanes(&Tags::from([("lanes", "2")])), Some(2));
        assert_eq!(lanes(&Tags::from([("lanes", "two")])), None);
    }

    #[test]
    fn incline_forms() {
        assert_eq!(parse_incline("up").unwrap(), Incline::Up);
        assert_eq!(parse_incline("no").unwrap(), Incline::Grade(0.0));
        assert_relative_eq!(parse_incline("10%").unwrap().grade().unwrap(), 0.1);
        assert_relative_eq!(parse_incline("-4").unwrap().grade().unwrap(), -0.04);
        assert_relative_eq!(parse_incline("45°").unwrap().grade().unwrap(), 1.0, epsilon = 1e-9);
        assert!(parse_incline("steep").is_err());
    }

    #[test]
    fn flat_only_for_explicit_zero() {
        assert!(Incline::Grade(0.0).is_flat());
        assert!(!Incline::Unspecified.is_flat());
        assert!(!Incline::Down.is_flat());
        assert_eq!(incline(&Tags::from([("incline", "0%")])), Some(Incline::Grade(0.0)));
    }
}

#[cfg(test)]
mod access {
    use fp_core::Tags;

    use crate::{access_level, AccessLevel};

    #[test]
    fn foot_overrides_access() {
        let tags = Tags::from([("access", "no"), ("foot", "yes")]);
        assert_eq!(access_level(&tags), Some(AccessLevel::Allowed));
    }

    #[test]
    fn falls_back_to_access() {
        let tags = Tags::from([("access", "private")]);
        assert_eq!(access_level(&tags), Some(AccessLevel::Private));
    }

    #[test]
    fn restricted_families() {
        assert_eq!(AccessLevel::parse("permit"), AccessLevel::Customers);
        assert_eq!(AccessLevel::parse("forestry"), AccessLevel::NonPedestrian);
        assert_eq!(AccessLevel::parse("permissive"), AccessLevel::Allowed);
        assert_eq!(access_level(&Tags::new()), None);
    }
}

#[cfg(test)]
mod way {
    use fp_core::Tags;

    use crate::{
        with_implicit_defaults, AccessLevel, Highway, Maintenance, PathClass, RoadClass,
        Smoothness, SurfaceClass, TrailVisibility, WayProfile, Wheelchair,
    };

    #[test]
    fn highway_classes() {
        assert_eq!(
            Highway::parse("primary_link"),
            Highway::Road { class: RoadClass::Primary, link: true }
        );
        assert_eq!(Highway::parse("steps"), Highway::Path(PathClass::Steps));
        assert_eq!(Highway::parse("road"), Highway::Incomplete);
        assert_eq!(Highway::parse("residential_link"), Highway::Other);
        assert_eq!(Highway::parse("construction"), Highway::Other);
    }

    #[test]
    fn guessed_sidewalk_excludes_links() {
        assert!(Highway::parse("tertiary").usually_has_sidewalk());
        assert!(!Highway::parse("tertiary_link").usually_has_sidewalk());
        assert!(!Highway::parse("motorway").usually_has_sidewalk());
        assert!(!Highway::parse("living_street").usually_has_sidewalk());
    }

    #[test]
    fn motorway_implies_foot_no() {
        let tags = with_implicit_defaults(&Tags::from([("highway", "motorway")]));
        assert_eq!(tags.get("foot"), Some("no"));
        let tags = with_implicit_defaults(&Tags::from([("highway", "motorway"), ("foot", "yes")]));
        assert_eq!(tags.get("foot"), Some("yes"));
    }

    #[test]
    fn service_defaults() {
        let driveway = Tags::from([("highway", "service"), ("service", "driveway")]);
        assert_eq!(with_implicit_defaults(&driveway).get("access"), Some("private"));

        let aisle = Tags::from([("highway", "service"), ("service", "parking_aisle")]);
        assert_eq!(with_implicit_defaults(&aisle).get("foot"), Some("yes"));
        let private_aisle = Tags::from([
            ("highway", "service"),
            ("service", "parking_aisle"),
            ("access", "private"),
        ]);
        assert_eq!(with_implicit_defaults(&private_aisle).get("foot"), None);

        let emergency = Tags::from([("highway", "service"), ("service", "emergency_access")]);
        assert_eq!(with_implicit_defaults(&emergency).get("access"), Some("no"));
    }

    #[test]
    fn profile_applies_defaults() {
        let profile = WayProfile::interpret(&Tags::from([("highway", "motorway")]));
        assert_eq!(profile.access, Some(AccessLevel::No));
    }

    #[test]
    fn asphalt_implies_good_smoothness() {
        let profile =
            WayProfile::interpret(&Tags::from([("highway", "footway"), ("surface", "asphalt")]));
        assert_eq!(profile.surface, Some(SurfaceClass::NicePaved));
        assert_eq!(profile.smoothness, Some(Smoothness::Good));

        let explicit = WayProfile::interpret(&Tags::from([
            ("highway", "footway"),
            ("surface", "asphalt"),
            ("smoothness", "horrible"),
        ]));
        assert_eq!(explicit.smoothness, Some(Smoothness::VeryBad));
    }

    #[test]
    fn maintenance_inference() {
        let footway = WayProfile::interpret(&Tags::from([("highway", "footway")]));
        assert_eq!(footway.maintenance(), Maintenance::Maintained);
        assert_eq!(footway.effective_trail_visibility(), Some(TrailVisibility::Excellent));

        let path = WayProfile::interpret(&Tags::from([("highway", "path")]));
        assert_eq!(path.maintenance(), Maintenance::Unknown);
        assert_eq!(path.effective_trail_visibility(), None);

        let operated = WayProfile::interpret(&Tags::from([("highway", "path"), ("operator", "NT")]));
        assert_eq!(operated.maintenance(), Maintenance::Maintained);

        let informal = WayProfile::interpret(&Tags::from([
            ("highway", "footway"),
            ("informal", "yes"),
        ]));
        assert_eq!(informal.maintenance(), Maintenance::Informal);
    }

    #[test]
    fn wheelchair_assumptions() {
        let footway = WayProfile::interpret(&Tags::from([("highway", "footway")]));
        assert_eq!(footway.effective_wheelchair(), Wheelchair::Yes);

        let steps = WayProfile::interpret(&Tags::from([("highway", "steps")]));
        assert_eq!(steps.effective_wheelchair(), Wheelchair::No);

        let stroll = WayProfile::interpret(&Tags::from([
            ("highway", "path"),
            ("sac_scale", "strolling"),
        ]));
        assert_eq!(stroll.effective_wheelchair(), Wheelchair::Yes);

        let mountain = WayProfile::interpret(&Tags::from([
            ("highway", "footway"),
            ("sac_scale", "mountain_hiking"),
        ]));
        assert_eq!(mountain.effective_wheelchair(), Wheelchair::No);

        let tagged = WayProfile::interpret(&Tags::from([
            ("highway", "steps"),
            ("wheelchair", "limited"),
        ]));
        assert_eq!(tagged.effective_wheelchair(), Wheelchair::Limited);
    }

    #[test]
    fn indoor_implies_covered() {
        let corridor = WayProfile::interpret(&Tags::from([("highway", "corridor")]));
        assert!(corridor.indoor);
        assert!(corridor.covered);

        let tunnel = WayProfile::interpret(&Tags::from([("highway", "footway"), ("tunnel", "yes")]));
        assert!(!tunnel.indoor);
        assert!(tunnel.covered);

        let open = WayProfile::interpret(&Tags::from([("highway", "footway"), ("covered", "no")]));
        assert!(!open.covered);
    }

    #[test]
    fn unknown_values_are_absent() {
        let profile = WayProfile::interpret(&Tags::from([
            ("highway", "path"),
            ("sac_scale", "extreme"),
            ("trail_visibility", "great"),
            ("surface", "lava"),
        ]));
        assert_eq!(profile.sac_scale, None);
        assert_eq!(profile.trail_visibility, None);
        assert_eq!(profile.surface, None);
    }
}

#[cfg(test)]
mod node {
    use fp_core::Tags;

    use crate::{Barrier, Crossing, Kerb, NodeProfile};

    #[test]
    fn untagged_node() {
        let profile = NodeProfile::interpret(&Tags::new());
        assert!(!profile.tagged);
        assert!(profile.crossing.is_none());
    }

    #[test]
    fn gates_block_only_when_locked() {
        let open = NodeProfile::interpret(&Tags::from([("barrier", "wicket_gate")]));
        assert_eq!(open.barrier, Some(Barrier::Gate));
        assert!(!open.barrier_blocks());

        let locked = NodeProfile::interpret(&Tags::from([("barrier", "gate"), ("locked", "yes")]));
        assert!(locked.barrier_blocks());
    }

    #[test]
    fn boards_block_unless_open() {
        assert!(NodeProfile::interpret(&Tags::from([("barrier", "barrier_board")])).barrier_blocks());
        let unlocked =
            NodeProfile::interpret(&Tags::from([("barrier", "barrier_board"), ("locked", "no")]));
        assert!(!unlocked.barrier_blocks());
        let partial =
            NodeProfile::interpret(&Tags::from([("barrier", "barrier_board"), ("open", "partial")]));
        assert!(!partial.barrier_blocks());
    }

    #[test]
    fn bollards_never_block() {
        let profile = NodeProfile::interpret(&Tags::from([("barrier", "bollard"), ("locked", "yes")]));
        assert!(!profile.barrier_blocks());
    }

    #[test]
    fn crossing_facts() {
        let profile = NodeProfile::interpret(&Tags::from([
            ("highway", "crossing"),
            ("crossing", "uncontrolled"),
            ("crossing:markings", "zebra"),
            ("kerb", "lowered"),
        ]));
        let crossing = profile.crossing.expect("crossing info");
        assert_eq!(crossing.kind, Some(Crossing::Uncontrolled));
        assert!(crossing.is_marked());
        assert!(!crossing.has_traffic_lights());
        assert_eq!(crossing.kerb, Some(Kerb::Lowered));
    }

    #[test]
    fn signals_tag_counts_as_traffic_lights() {
        let profile = NodeProfile::interpret(&Tags::from([
            ("highway", "crossing"),
            ("traffic_signals", "yes"),
        ]));
        let crossing = profile.crossing.expect("crossing info");
        assert_eq!(crossing.kind, None);
        assert!(crossing.has_traffic_lights());
        assert!(!crossing.is_marked());
    }

    #[test]
    fn crossing_tags_ignored_off_crossings() {
        let profile = NodeProfile::interpret(&Tags::from([("crossing", "zebra")]));
        assert!(profile.tagged);
        assert!(profile.crossing.is_none());
    }
}
