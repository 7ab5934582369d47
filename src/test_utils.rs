//! Test utilities for property-based testing
//!
//! This module provides generators and helpers for proptest.

#[cfg(test)]
pub mod generators {
    use proptest::prelude::*;

    /// Generate a non-empty solution path
    ///
    /// Covers Unix and Windows separators, drive letters, spaces, and
    /// non-ASCII directory names.
    pub fn solution_path() -> impl Strategy<Value = String> {
        let segment = prop_oneof![
            "[A-Za-z0-9_.-]{1,12}",
            "[a-z]{1,6} [a-z]{1,6}",
            Just("Ünïcødé".to_string()),
            Just("проект".to_string()),
            Just("ゲーム".to_string()),
        ];
        (
            prop_oneof![Just(String::from("/")), Just(String::from("C:\\")), Just(String::new())],
            prop::collection::vec(segment, 0..6),
            prop_oneof![Just("/"), Just("\\")],
            "[A-Za-z][A-Za-z0-9 ]{0,15}",
        )
            .prop_map(|(root, segments, sep, name)| {
                let mut path = root;
                for segment in segments {
                    path.push_str(&segment);
                    path.push_str(sep);
                }
                path.push_str(&name);
                path.push_str(".sln");
                path
            })
    }

    /// Generate a build configuration name
    pub fn configuration_name() -> impl Strategy<Value = String> {
        prop_oneof![
            Just("Debug".to_string()),
            Just("Release".to_string()),
            Just("ExportDebug".to_string()),
            Just("ExportRelease".to_string()),
            "[A-Z][A-Za-z0-9]{0,15}",
        ]
    }

    /// Generate a list of build targets
    pub fn target_list() -> impl Strategy<Value = Vec<String>> {
        prop::collection::vec(
            prop_oneof![
                Just("Build".to_string()),
                Just("Restore".to_string()),
                Just("Rebuild".to_string()),
                Just("Clean".to_string()),
                "[A-Z][A-Za-z]{0,10}",
            ],
            0..4,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::generators::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn test_solution_path_generator(path in solution_path()) {
            prop_assert!(!path.is_empty());
            prop_assert!(path.ends_with(".sln"));
        }

        #[test]
        fn test_configuration_name_generator(name in configuration_name()) {
            prop_assert!(!name.is_empty());
            prop_assert!(name.chars().all(|c| c.is_ascii_alphanumeric()));
        }
    }
}
