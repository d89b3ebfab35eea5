use crate::judge::profile::{LanguageProfile, OutputRecognizer, TagRule};

pub(crate) fn profile() -> LanguageProfile {
    LanguageProfile::new(
        "c",
        "C",
        vec![TagRule::Equals("c"), TagRule::Equals("ansi c")],
        vec![
            // String-only printf: capture the literal minus trailing \n escapes.
            OutputRecognizer::literal(r#"printf\s*\(\s*"([^"%]*?)(?:\\n)*"\s*\)\s*;?"#),
            // Single-argument format printf: the argument is the prediction.
            OutputRecognizer::expression(r#"printf\s*\(\s*"%[sd](?:\\n)*"\s*,\s*(.+?)\s*\)\s*;?"#),
            OutputRecognizer::expression(r"puts\s*\(\s*(.+?)\s*\)\s*;?"),
        ],
        vec!["$ gcc {file} -o main", "$ ./main"],
        "main.c",
    )
}
