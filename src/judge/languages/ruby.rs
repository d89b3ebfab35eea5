use crate::judge::profile::{LanguageProfile, OutputRecognizer, TagRule};

pub(crate) fn profile() -> LanguageProfile {
    LanguageProfile::new(
        "ruby",
        "Ruby",
        vec![TagRule::Contains("ruby"), TagRule::Equals("rb")],
        vec![OutputRecognizer::expression(
            r"(?m)^\s*(?:puts|print)\s+(.+?)\s*$",
        )],
        vec!["$ ruby {file}"],
        "main.rb",
    )
}
