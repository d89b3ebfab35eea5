use crate::judge::profile::{LanguageProfile, OutputRecognizer, TagRule};

/// JS-like profile. Doubles as the registry default for unrecognized
/// tags, and catches every "script" family tag (javascript, typescript,
/// ecmascript) ahead of the Java profile.
pub(crate) fn profile() -> LanguageProfile {
    LanguageProfile::new(
        "javascript",
        "JavaScript",
        vec![
            TagRule::Contains("script"),
            TagRule::Contains("node"),
            TagRule::Contains("ecma"),
            TagRule::Equals("js"),
            TagRule::Equals("ts"),
        ],
        vec![
            OutputRecognizer::expression(r"console\.log\s*\(\s*(.+?)\s*\)\s*;?"),
            OutputRecognizer::expression(r"document\.write\s*\(\s*(.+?)\s*\)\s*;?"),
        ],
        vec!["$ node {file}"],
        "main.js",
    )
}
