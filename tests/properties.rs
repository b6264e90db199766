use dds_security_config::engine_core::constants::logging;
use dds_security_config::profiles;
use dds_security_config::{Property, PropertySeq};
use proptest::prelude::*;
use std::collections::HashMap;

proptest! {
    #[test]
    fn test_upsert_keeps_names_unique_and_last_value(
        ops in prop::collection::vec(("[a-e]", "[a-z0-9]{0,6}"), 0..40)
    ) {
        let mut seq = PropertySeq::new();
        let mut expected: HashMap<String, String> = HashMap::new();
        let mut first_seen: Vec<String> = Vec::new();

        for (name, value) in &ops {
            seq.upsert(Property::new(name.clone(), value.clone()));
            if expected.insert(name.clone(), value.clone()).is_none() {
                first_seen.push(name.clone());
            }
        }

        let names: Vec<String> = seq.iter().map(|p| p.name.clone()).collect();
        prop_assert_eq!(names, first_seen);
        for property in &seq {
            prop_assert_eq!(Some(&property.value), expected.get(&property.name));
        }
    }

    #[test]
    fn test_upsert_existing_name_does_not_grow(
        names in prop::collection::hash_set("[a-z]{1,8}", 1..10),
        pick in any::<prop::sample::Index>(),
        value in "\\PC*"
    ) {
        let names: Vec<String> = names.into_iter().collect();
        let mut seq: PropertySeq = names
            .iter()
            .map(|n| Property::new(n.clone(), "initial"))
            .collect();
        let before = seq.len();
        let target = pick.get(&names).clone();

        seq.upsert(Property::new(target.clone(), value.clone()));

        prop_assert_eq!(seq.len(), before);
        prop_assert_eq!(seq.value_of(&target), Some(value.as_str()));
    }

    #[test]
    fn test_unknown_profile_names_never_resolve(name in "\\PC*") {
        let known = profiles::supported_profile_names().any(|n| n == name);
        prop_assert_eq!(profiles::resolve(&name).is_some(), known);
    }
}

#[cfg(feature = "security")]
proptest! {
    #[test]
    fn test_explicit_depth_always_wins(
        profile in prop::sample::select(profiles::supported_profile_names().collect::<Vec<_>>()),
        depth in 1u32..100_000
    ) {
        let xml = format!(
            "<security_log><qos><profile>{}</profile><depth>{}</depth></qos></security_log>",
            profile, depth
        );
        let properties = dds_security_config::parse_logging_xml(&xml).unwrap();
        let depth_text = depth.to_string();
        prop_assert_eq!(properties.len(), 2);
        prop_assert_eq!(
            properties.value_of(logging::DISTRIBUTE_DEPTH_PROPERTY),
            Some(depth_text.as_str())
        );
    }

    #[test]
    fn test_leaf_text_is_copied_verbatim(text in "[A-Za-z0-9_./-]{1,32}") {
        let xml = format!("<security_log><file>{}</file></security_log>", text);
        let properties = dds_security_config::parse_logging_xml(&xml).unwrap();
        prop_assert_eq!(
            properties.value_of(logging::LOG_FILE_PROPERTY),
            Some(text.as_str())
        );
    }
}
