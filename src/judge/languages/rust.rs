use crate::judge::profile::{LanguageProfile, OutputRecognizer, TagRule};

pub(crate) fn profile() -> LanguageProfile {
    LanguageProfile::new(
        "rust",
        "Rust",
        vec![TagRule::Contains("rust"), TagRule::Equals("rs")],
        vec![
            // Plain string literal: println!("42")
            OutputRecognizer::literal(r#"println!\s*\(\s*"([^"{]*)"\s*\)\s*;?"#),
            // Single-placeholder format: println!("{}", x)
            OutputRecognizer::expression(r#"println!\s*\(\s*"\{\}"\s*,\s*(.+?)\s*\)\s*;?"#),
            OutputRecognizer::expression(r"print(?:ln)?!\s*\(\s*(.+?)\s*\)\s*;?"),
        ],
        vec!["$ rustc {file} -o main", "$ ./main"],
        "main.rs",
    )
}
