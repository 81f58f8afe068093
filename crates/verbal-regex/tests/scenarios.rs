//! End-to-end matching through both engines.
#![expect(clippy::expect_used, reason = "tests assert the matching path")]

use rstest::{fixture, rstest};
use verbal_regex::{
    BuilderConfig, Engine, ExpressionBuilder, FancyEngine, Flag, FlagSet, PatternError,
    RegexEngine,
};

#[fixture]
fn config() -> BuilderConfig {
    BuilderConfig::default()
}

fn build<E: Engine>(
    engine: E,
    config: BuilderConfig,
    chain: impl FnOnce(&mut ExpressionBuilder<E>),
) -> ExpressionBuilder<E> {
    let mut expr = ExpressionBuilder::with_engine(engine, config);
    chain(&mut expr);
    expr
}

fn matches_text<E: Engine>(expr: &ExpressionBuilder<E>, text: &str) -> bool {
    expr.test(text).expect("assembled pattern should compile")
}

#[rstest]
fn literal_matches_inside_word(config: BuilderConfig) {
    let expr = build(FancyEngine::new(), config, |e| {
        e.literal("apple");
    });
    assert!(matches_text(&expr, "pineapple"));
}

#[rstest]
fn start_anchor_rejects_inner_match(config: BuilderConfig) {
    let expr = build(RegexEngine, config, |e| {
        e.anchor_start(true).literal("apple");
    });
    assert!(!matches_text(&expr, "pineapple"));
    assert!(matches_text(&expr, "apple pie"));
}

#[rstest]
fn one_of_builds_character_class(config: BuilderConfig) {
    let expr = build(FancyEngine::new(), config, |e| {
        e.one_of(["a", "b", "c"]);
    });
    assert!(expr.body().contains("[abc]"));
    assert!(matches_text(&expr, "b"));
    assert!(!matches_text(&expr, "d"));
}

#[rstest]
fn range_builds_combined_class(config: BuilderConfig) {
    let expr = build(RegexEngine, config, |e| {
        e.range(["a", "z", "0", "9"]);
    });
    assert_eq!(expr.as_str(), "[a-z0-9]");
    assert!(matches_text(&expr, "k"));
    assert!(matches_text(&expr, "5"));
    assert!(!matches_text(&expr, "!"));
}

#[rstest]
fn capture_yields_group(config: BuilderConfig) {
    let expr = build(FancyEngine::new(), config, |e| {
        e.begin_capture().literal("id").end_capture();
    });
    let captures = expr
        .captures("id123")
        .expect("assembled pattern should compile");
    assert_eq!(captures, Some(vec!["id".to_string()]));
}

#[rstest]
fn alternation_matches_either_branch(config: BuilderConfig) {
    let expr = build(RegexEngine, config, |e| {
        e.alternate().literal("cat").alternate().literal("dog");
    });
    assert!(matches_text(&expr, "cat"));
    assert!(matches_text(&expr, "dog"));
    assert!(!matches_text(&expr, "bird"));
}

#[rstest]
fn anchors_apply_to_every_branch(config: BuilderConfig) {
    let expr = build(FancyEngine::new(), config, |e| {
        e.anchor_start(true)
            .literal("cat")
            .alternate_with("dog")
            .anchor_end(true);
    });
    assert!(matches_text(&expr, "dog"));
    assert!(!matches_text(&expr, "hotdog"));
    assert!(!matches_text(&expr, "cats"));
}

#[rstest]
fn alternation_inside_capture_is_captured(config: BuilderConfig) {
    let expr = build(FancyEngine::new(), config, |e| {
        e.literal("pet: ")
            .begin_capture()
            .literal("cat")
            .alternate_with("dog")
            .end_capture()
            .literal("!");
    });
    assert_eq!(
        expr.captures("pet: dog!").expect("pattern compiles"),
        Some(vec!["dog".to_string()])
    );
    assert!(!matches_text(&expr, "dog!"));
}

#[rstest]
fn url_chain(config: BuilderConfig) {
    let expr = build(RegexEngine, config.with_flags(FlagSet::EMPTY), |e| {
        e.anchor_start(true)
            .then("http")
            .optional("s")
            .then("://")
            .optional("www.")
            .any_character_except(" ")
            .anchor_end(true);
    });
    assert!(matches_text(&expr, "https://www.example.com/path?q=1"));
    assert!(matches_text(&expr, "http://example.com"));
    assert!(!matches_text(&expr, "https://exa mple.com"));
    assert!(!matches_text(&expr, "htp://example.com"));
}

#[rstest]
fn not_followed_by_needs_lookaround(config: BuilderConfig) {
    let fancy = build(FancyEngine::new(), config, |e| {
        e.literal("q").not_followed_by("u");
    });
    assert!(matches_text(&fancy, "Iraq"));
    assert!(!matches_text(&fancy, "queen"));

    let standard = build(RegexEngine, config, |e| {
        e.literal("q").not_followed_by("u");
    });
    assert!(matches!(standard.test("Iraq"), Err(PatternError::Regex(_))));
}

#[rstest]
fn replace_swaps_captured_parts(config: BuilderConfig) {
    let expr = build(FancyEngine::new(), config, |e| {
        e.begin_capture()
            .word()
            .end_capture()
            .literal("@")
            .begin_capture()
            .word()
            .end_capture();
    });
    let replaced = expr
        .replace("a@b and c@d", "$2@$1")
        .expect("pattern compiles");
    assert_eq!(replaced, "b@a and d@c");
}

#[rstest]
fn first_match_only_limits_matches_and_replace(config: BuilderConfig) {
    let mut expr = build(RegexEngine, config, |e| {
        e.digit().one_or_more();
    });
    assert_eq!(
        expr.matches("1 22 333").expect("pattern compiles"),
        vec!["1", "22", "333"]
    );
    expr.first_match_only(true);
    assert_eq!(expr.matches("1 22 333").expect("pattern compiles"), vec!["1"]);
    assert_eq!(expr.replace("1 22", "#").expect("pattern compiles"), "# 22");
}

#[rstest]
fn case_insensitive_matching(config: BuilderConfig) {
    let mut expr = build(FancyEngine::new(), config, |e| {
        e.literal("Hello");
    });
    assert!(!matches_text(&expr, "HELLO"));
    expr.case_insensitive(true);
    assert!(matches_text(&expr, "HELLO"));
}

#[rstest]
fn single_line_anchors_at_input_ends(config: BuilderConfig) {
    let mut expr = build(RegexEngine, config, |e| {
        e.anchor_start(true).literal("b").anchor_end(true);
    });
    assert!(matches_text(&expr, "a\nb\nc"));
    expr.single_line(true);
    assert!(!matches_text(&expr, "a\nb\nc"));
    assert!(matches_text(&expr, "b"));
}

#[rstest]
fn line_break_matches_every_convention(config: BuilderConfig) {
    let expr = build(FancyEngine::new(), config, |e| {
        e.literal("a").line_break().literal("b");
    });
    for text in ["a\r\nb", "a\rb", "a\nb"] {
        assert!(matches_text(&expr, text), "expected a line break in {text:?}");
    }
    assert!(!matches_text(&expr, "a b"));
}

#[rstest]
fn bounded_repetition(config: BuilderConfig) {
    let expr = build(RegexEngine, config, |e| {
        e.anchor_start(true)
            .digit()
            .repeat_exactly_or_between(&[2, 3])
            .anchor_end(true);
    });
    assert!(!matches_text(&expr, "1"));
    assert!(matches_text(&expr, "12"));
    assert!(matches_text(&expr, "123"));
    assert!(!matches_text(&expr, "1234"));
}

#[rstest]
fn escaped_literal_matches_only_itself(config: BuilderConfig) {
    let expr = build(FancyEngine::new(), config, |e| {
        e.literal("a.b*c");
    });
    assert!(matches_text(&expr, "xa.b*cx"));
    assert!(!matches_text(&expr, "aXbbbc"));
}

fn assert_sticky_digits<E: Engine>(engine: E, config: BuilderConfig) {
    let expr = build(engine, config, |e| {
        e.digit().add_flag(Flag::Sticky);
    });
    assert_eq!(expr.flags().to_string(), "gmy");
    assert_eq!(
        expr.matches("123a4").expect("pattern compiles"),
        vec!["1", "2", "3"]
    );
    assert_eq!(expr.replace("123a4", "#").expect("pattern compiles"), "###a4");
    assert!(!matches_text(&expr, "a4"));
}

#[rstest]
fn sticky_global_matches_consecutive_runs(config: BuilderConfig) {
    assert_sticky_digits(FancyEngine::new(), config);
    assert_sticky_digits(RegexEngine, config);
}

fn assert_empty_classes<E: Engine + Clone>(engine: E, config: BuilderConfig) {
    let anything = build(engine.clone(), config, |e| {
        e.anchor_start(true)
            .find("a")
            .any_character_except("")
            .anchor_end(true);
    });
    assert!(matches_text(&anything, "a\nb"));
    assert!(matches_text(&anything, "a"));

    let something = build(engine.clone(), config, |e| {
        e.find("a").at_least_one_character_except("");
    });
    assert!(matches_text(&something, "a\n"));
    assert!(!matches_text(&something, "a"));

    let nothing = build(engine, config, |e| {
        e.one_of("");
    });
    assert!(!matches_text(&nothing, "abc 123\n"));
}

#[rstest]
fn empty_character_classes_still_compile(config: BuilderConfig) {
    assert_empty_classes(FancyEngine::new(), config);
    assert_empty_classes(RegexEngine, config);
}
