//! Unit tests for fp-prefs.

#[cfg(test)]
mod options {
    use crate::{OptionKind, OptionName, PreferenceError, Slider};

    #[test]
    fn names_roundtrip() {
        for &name in OptionName::ALL {
            assert_eq!(name.as_str().parse::<OptionName>().unwrap(), name);
        }
        assert_eq!(OptionName::COUNT, 21);
    }

    #[test]
    fn kinds() {
        assert_eq!(OptionName::WheelchairAccessible.kind(), OptionKind::Toggle);
        assert_eq!(OptionName::TreacherousPaths.kind(), OptionKind::Slider);
        let toggles = OptionName::ALL.iter().filter(|n| n.kind() == OptionKind::Toggle).count();
        assert_eq!(toggles, 10);
    }

    #[test]
    fn unknown_name() {
        let err = "wheelchair".parse::<OptionName>().unwrap_err();
        assert!(matches!(err, PreferenceError::UnknownOption(ref s) if s == "wheelchair"));
    }

    #[test]
    fn slider_values() {
        assert_eq!(Slider::Avoid.value(), -1.0);
        assert_eq!(Slider::Neutral.value(), 0.0);
        assert_eq!(Slider::Prefer.value(), 1.0);
        assert_eq!(Slider::from_i64(2), None);
    }
}

#[cfg(test)]
mod preferences {
    use crate::{OptionName, PreferenceError, PreferenceValue, Preferences, RawValue, Slider};

    #[test]
    fn defaults() {
        let prefs = Preferences::default();
        assert!(!prefs.is_enabled(OptionName::AllowPrivateAccess).unwrap());
        assert!(prefs.is_neutral(OptionName::Pavements).unwrap());
        assert_eq!(prefs.non_default().count(), 0);
    }

    #[test]
    fn kind_checked_accessors() {
        let prefs = Preferences::default();
        assert!(matches!(
            prefs.is_enabled(OptionName::Steps),
            Err(PreferenceError::NotAToggle(OptionName::Steps))
        ));
        assert!(matches!(
            prefs.slider(OptionName::WheelchairAccessible),
            Err(PreferenceError::NotASlider(OptionName::WheelchairAccessible))
        ));
        assert!(prefs.is_preferred(OptionName::AllowWalkingOnRoads).is_err());
    }

    #[test]
    fn builder_sets_values() {
        let prefs = Preferences::builder()
            .toggle(OptionName::WheelchairAccessible, true)
            .slider(OptionName::Steps, Slider::Avoid)
            .build()
            .unwrap();
        assert!(prefs.enabled(OptionName::WheelchairAccessible));
        assert!(prefs.is_avoided(OptionName::Steps).unwrap());
        assert_eq!(prefs.level(OptionName::Steps), -1.0);
        assert_eq!(prefs.non_default().count(), 2);
    }

    #[test]
    fn builder_rejects_wrong_kind() {
        let result = Preferences::builder()
            .slider(OptionName::AllowPrivateAccess, Slider::Prefer)
            .build();
        assert!(matches!(result, Err(PreferenceError::WrongKind { name: OptionName::AllowPrivateAccess, .. })));
    }

    #[test]
    fn from_values() {
        let prefs = Preferences::from_values([
            ("allow_customer_access", RawValue::Bool(true)),
            ("lit_paths", RawValue::Int(1)),
        ])
        .unwrap();
        assert_eq!(prefs.get(OptionName::AllowCustomerAccess), PreferenceValue::Toggle(true));
        assert_eq!(prefs.get(OptionName::LitPaths), PreferenceValue::Slider(Slider::Prefer));
    }

    #[test]
    fn from_values_validates() {
        assert!(matches!(
            Preferences::from_values([("lit_paths", RawValue::Bool(true))]),
            Err(PreferenceError::WrongKind { .. })
        ));
        assert!(matches!(
            Preferences::from_values([("wheelchair_accessible", RawValue::Int(1))]),
            Err(PreferenceError::WrongKind { .. })
        ));
        assert!(matches!(
            Preferences::from_values([("steps", RawValue::Int(-2))]),
            Err(PreferenceError::OutOfRange { value: -2, .. })
        ));
        assert!(matches!(
            Preferences::from_values([("shortcuts", RawValue::Int(0))]),
            Err(PreferenceError::UnknownOption(_))
        ));
    }

    #[test]
    fn from_json() {
        let json = r#"{ "wheelchair_accessible": true, "steps": -1, "pavements": 1 }"#;
        let prefs = Preferences::from_json_str(json).unwrap();
        assert!(prefs.enabled(OptionName::WheelchairAccessible));
        assert!(prefs.is_avoided(OptionName::Steps).unwrap());
        assert!(prefs.is_preferred(OptionName::Pavements).unwrap());

        let prefs = Preferences::from_json_reader(json.as_bytes()).unwrap();
        assert!(prefs.enabled(OptionName::WheelchairAccessible));
    }

    #[test]
    fn from_json_rejects_bad_input() {
        assert!(matches!(Preferences::from_json_str("[1, 2]"), Err(PreferenceError::Json(_))));
        assert!(matches!(
            Preferences::from_json_str(r#"{ "steps": "avoid" }"#),
            Err(PreferenceError::Json(_))
        ));
        assert!(matches!(
            Preferences::from_json_str(r#"{ "steps": true }"#),
            Err(PreferenceError::WrongKind { .. })
        ));
    }
}
