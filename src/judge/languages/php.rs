use crate::judge::profile::{LanguageProfile, OutputRecognizer, TagRule};

pub(crate) fn profile() -> LanguageProfile {
    LanguageProfile::new(
        "php",
        "PHP",
        vec![TagRule::Contains("php")],
        vec![OutputRecognizer::expression(r"(?:echo|print)\s+(.+?)\s*;")],
        vec!["$ php {file}"],
        "main.php",
    )
}
