// crates/engine/tests/properties.rs
use proptest::prelude::*;

use c2ps_engine::lexer::{ClassifiedRun, Lexer, is_suppressed};
use c2ps_engine::lookahead::looks_like_function_start;
use c2ps_engine::{Document, DocumentOptions, InputSource, Language, LineSource, RecordingRenderer};

fn any_language() -> impl Strategy<Value = Language> {
    prop::sample::select(Language::ALL.to_vec())
}

/// 字句的に意味のある文字を多めに含む行
fn source_text() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            "[a-z_]{1,8}",
            Just("if".to_string()),
            Just("module".to_string()),
            Just("endmodule".to_string()),
            "[ \\t(){}\\[\\];,#!\"'\\\\/*\\r\\x0c\\x00\\n]",
        ],
        0..80,
    )
    .prop_map(|parts| parts.concat())
}

proptest! {
    #[test]
    fn test_runs_conserve_line_characters(lang in any_language(), text in source_text()) {
        let profile = lang.profile();
        let lexer = Lexer::new(&profile);
        let mut state = lexer.initial_state();
        for line in text.split('\n') {
            let mut runs: Vec<ClassifiedRun> = Vec::new();
            lexer.scan_line(&mut state, line, true, &mut runs, |_| false);
            let emitted: String = runs.iter().map(|r| r.text.as_str()).collect();
            let expected: String = line.chars().filter(|&c| !is_suppressed(c)).collect();
            prop_assert_eq!(emitted, expected);
            prop_assert!(runs.iter().all(|r| !r.text.is_empty()));
        }
    }

    #[test]
    fn test_annotation_is_deterministic(lang in any_language(), text in source_text()) {
        let render = || {
            let mut doc = Document::new(RecordingRenderer::new(), DocumentOptions::default());
            let summary = doc.annotate(&mut LineSource::from_bytes(text.clone()), &lang.profile()).unwrap();
            (doc.renderer().events().to_vec(), summary)
        };
        prop_assert_eq!(render(), render());
    }

    #[test]
    fn test_lookahead_restores_position(
        lang in any_language(),
        rest in "[ (),;a-z/*]{0,20}",
        text in source_text(),
        skip in 0usize..4,
    ) {
        let profile = lang.profile();
        let mut src = LineSource::from_bytes(text);
        let mut buf = String::new();
        for _ in 0..skip {
            src.read_line(&mut buf).unwrap();
        }
        let before = src.position().unwrap();
        let _ = looks_like_function_start(&profile, &rest, &mut src);
        prop_assert_eq!(src.position().unwrap(), before);
    }
}
