use crate::judge::languages;
use crate::judge::profile::LanguageProfile;
use std::sync::OnceLock;

/// Language profile registry.
///
/// Profiles are registered in tag-match priority order: the "script"
/// family must be checked before "java" so that "javascript" never
/// resolves to the Java profile. Resolution is pure and total; an
/// unmatched tag yields the JS-like default instead of an error.
pub struct ProfileRegistry {
    profiles: Vec<LanguageProfile>,
    default_index: usize,
}

impl ProfileRegistry {
    fn new() -> Self {
        let profiles = vec![
            languages::javascript::profile(),
            languages::java::profile(),
            languages::python::profile(),
            languages::csharp::profile(),
            languages::cpp::profile(),
            languages::c::profile(),
            languages::kotlin::profile(),
            languages::swift::profile(),
            languages::go::profile(),
            languages::rust::profile(),
            languages::php::profile(),
            languages::ruby::profile(),
            languages::dart::profile(),
        ];

        // The JS-like profile is the catch-all default.
        let default_index = profiles
            .iter()
            .position(|p| p.id() == "javascript")
            .unwrap_or(0);

        Self {
            profiles,
            default_index,
        }
    }

    /// Resolve a free-form language tag to a profile. Case-insensitive,
    /// deterministic, never fails.
    pub fn resolve(&self, tag: &str) -> &LanguageProfile {
        let normalized = tag.trim().to_lowercase();
        self.profiles
            .iter()
            .find(|profile| profile.matches_tag(&normalized))
            .unwrap_or(&self.profiles[self.default_index])
    }

    pub fn get(&self, id: &str) -> Option<&LanguageProfile> {
        self.profiles.iter().find(|profile| profile.id() == id)
    }

    pub fn profiles(&self) -> &[LanguageProfile] {
        &self.profiles
    }
}

/// Get the global profile registry.
pub fn get_registry() -> &'static ProfileRegistry {
    static REGISTRY: OnceLock<ProfileRegistry> = OnceLock::new();
    REGISTRY.get_or_init(ProfileRegistry::new)
}

/// Resolve a language tag against the global registry.
pub fn resolve_profile(tag: &str) -> &'static LanguageProfile {
    get_registry().resolve(tag)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_has_all_builtin_profiles() {
        let ids: Vec<&str> = get_registry().profiles().iter().map(|p| p.id()).collect();
        for id in [
            "javascript",
            "java",
            "python",
            "csharp",
            "cpp",
            "c",
            "kotlin",
            "swift",
            "go",
            "rust",
            "php",
            "ruby",
            "dart",
        ] {
            assert!(ids.contains(&id), "missing profile: {}", id);
        }
    }

    #[test]
    fn test_resolve_is_case_insensitive() {
        assert_eq!(resolve_profile("Python 3").id(), "python");
        assert_eq!(resolve_profile("JAVA").id(), "java");
        assert_eq!(resolve_profile("  Rust  ").id(), "rust");
    }

    #[test]
    fn test_javascript_wins_over_java_for_script_tags() {
        assert_eq!(resolve_profile("javascript").id(), "javascript");
        assert_eq!(resolve_profile("typescript").id(), "javascript");
        assert_eq!(resolve_profile("java").id(), "java");
        assert_eq!(resolve_profile("java se 17").id(), "java");
    }

    #[test]
    fn test_bare_c_matches_by_equality() {
        assert_eq!(resolve_profile("c").id(), "c");
        assert_eq!(resolve_profile("C").id(), "c");
        assert_eq!(resolve_profile("c++").id(), "cpp");
        assert_eq!(resolve_profile("c#").id(), "csharp");
    }

    #[test]
    fn test_unknown_tag_falls_back_to_default() {
        assert_eq!(resolve_profile("brainfuck").id(), "javascript");
        assert_eq!(resolve_profile("").id(), "javascript");
    }

    #[test]
    fn test_get_by_id() {
        assert!(get_registry().get("kotlin").is_some());
        assert!(get_registry().get("cobol").is_none());
    }
}
