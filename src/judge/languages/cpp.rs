use crate::judge::profile::{LanguageProfile, OutputRecognizer, TagRule};

pub(crate) fn profile() -> LanguageProfile {
    LanguageProfile::new(
        "cpp",
        "C++",
        vec![
            TagRule::Contains("c++"),
            TagRule::Contains("cpp"),
            TagRule::Contains("cplus"),
            TagRule::Equals("cxx"),
        ],
        vec![
            // First stream operand only; chained << segments are ignored.
            OutputRecognizer::expression(r"(?:std::)?cout\s*<<\s*([^;<\n]+)"),
            OutputRecognizer::literal(r#"printf\s*\(\s*"([^"%]*?)(?:\\n)*"\s*\)\s*;?"#),
            OutputRecognizer::expression(r"puts\s*\(\s*(.+?)\s*\)\s*;?"),
        ],
        vec!["$ g++ {file} -o main", "$ ./main"],
        "main.cpp",
    )
}
