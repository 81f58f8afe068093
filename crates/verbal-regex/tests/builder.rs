//! Assembly invariants and misuse handling through the public API.

use rstest::rstest;
use verbal_regex::{
    BuilderConfig, ExpressionBuilder, Flag, FlagSet, MisuseError, MisusePolicy, PatternError,
    Raw, sanitize,
};

type Step = fn(&mut ExpressionBuilder);

const STEPS: [Step; 14] = [
    |e| {
        e.anchor_start(true);
    },
    |e| {
        e.anchor_end(true);
    },
    |e| {
        e.find("a.b");
    },
    |e| {
        e.optional('x');
    },
    |e| {
        e.alternate_with("or");
    },
    |e| {
        e.begin_capture();
    },
    |e| {
        e.end_capture();
    },
    |e| {
        e.one_of(["1", "2"]);
    },
    |e| {
        e.range(['a', 'c']);
    },
    |e| {
        e.repeat_exactly_or_between(&[1, 2]);
    },
    |e| {
        e.add_flag(Flag::CaseInsensitive);
    },
    |e| {
        e.first_match_only(true);
    },
    |e| {
        e.anchor_end(false);
    },
    |e| {
        e.whitespace().one_or_more();
    },
];

fn assert_in_sync(expr: &ExpressionBuilder) {
    let expected = format!("{}{}{}", expr.prefix(), expr.body(), expr.suffix());
    assert_eq!(expr.compiled().pattern(), expected);
    assert_eq!(expr.as_str(), expected);
    assert_eq!(expr.compiled().flags(), expr.flags());
}

#[rstest]
#[case(&[0, 2, 5, 2, 4, 6, 1])]
#[case(&[5, 5, 2, 4, 3, 6, 8, 6, 6])]
#[case(&[1, 4, 2, 4, 13, 12, 11, 9, 0])]
#[case(&[6, 6, 3, 9, 10, 1, 5, 4, 7])]
fn compiled_pattern_tracks_every_step(#[case] sequence: &[usize]) {
    let mut expr = ExpressionBuilder::new();
    assert_in_sync(&expr);
    for &index in sequence {
        let Some(step) = STEPS.get(index) else {
            panic!("step {index} is out of range");
        };
        step(&mut expr);
        assert_in_sync(&expr);
    }
}

#[rstest]
#[case(&[0, 2, 5, 2, 4, 6, 1])]
#[case(&[5, 2, 5, 4, 3, 6, 8, 6])]
#[case(&[1, 5, 2, 4, 13])]
fn balanced_chains_compile(#[case] sequence: &[usize]) {
    let mut expr = ExpressionBuilder::new();
    for &index in sequence {
        if let Some(step) = STEPS.get(index) {
            step(&mut expr);
        }
    }
    assert!(
        expr.to_matcher().is_ok(),
        "pattern {} should compile",
        expr.compiled()
    );
}

#[test]
fn flags_stay_within_vocabulary() {
    let mut expr = ExpressionBuilder::new();
    for modifier in "gimsuyxgimz!".chars() {
        expr.add_modifier(modifier);
    }
    assert_eq!(expr.flags().to_string(), "gimsuy");
    assert_eq!(expr.flags().len(), Flag::ALL.len());
    for modifier in "gq".chars() {
        expr.remove_modifier(modifier);
    }
    assert_eq!(expr.flags().to_string(), "imsuy");
}

#[test]
fn default_flags_come_from_config() {
    let flags = FlagSet::EMPTY.with(Flag::CaseInsensitive);
    let expr = ExpressionBuilder::with_config(BuilderConfig::new().with_flags(flags));
    assert_eq!(expr.flags(), flags);
    assert_eq!(ExpressionBuilder::new().flags().to_string(), "gm");
}

#[test]
fn unbalanced_raw_fragment_fails_only_at_match_time() {
    let mut expr = ExpressionBuilder::new();
    expr.add("(").find("a");
    assert_eq!(expr.as_str(), "((?:a)");
    assert!(matches!(expr.test("a"), Err(PatternError::FancyRegex(_))));
}

#[test]
fn reject_policy_surfaces_misuse_when_matching() {
    let mut expr = ExpressionBuilder::with_config(
        BuilderConfig::new().with_misuse_policy(MisusePolicy::Reject),
    );
    expr.find("a").end_capture().find("b");
    assert_eq!(expr.as_str(), "(?:a)(?:b)");
    let Err(err) = expr.test("ab") else {
        panic!("recorded misuse should fail matching");
    };
    assert!(matches!(
        err,
        PatternError::Misuse(MisuseError::EndCaptureWithoutBegin)
    ));
}

#[test]
fn ignore_policy_keeps_matching() {
    let mut expr = ExpressionBuilder::new();
    expr.find("a").end_capture().repeat_exactly_or_between(&[1, 2, 3]);
    assert!(matches!(expr.test("a"), Ok(true)));
}

#[test]
#[should_panic(expected = "bounded repetition expects one or two counts")]
fn panic_policy_fails_loudly() {
    let mut expr = ExpressionBuilder::with_config(
        BuilderConfig::new().with_misuse_policy(MisusePolicy::Panic),
    );
    expr.digit().repeat_exactly_or_between(&[]);
}

#[test]
fn pending_capture_is_closed_by_suffix() {
    let mut expr = ExpressionBuilder::new();
    expr.begin_capture().digit().one_or_more();
    assert_eq!(expr.as_str(), r"(\d+)");
    assert!(matches!(
        expr.captures("ab 12"),
        Ok(Some(ref groups)) if groups == &["12"]
    ));
}

#[test]
fn sanitize_surprises_are_documented() {
    // Absent values sanitize to nothing rather than failing.
    assert_eq!(sanitize(None::<String>), "");
    // Numbers are never escaped, even when they contain a `.`.
    assert_eq!(sanitize(0.5_f64), "0.5");
    // Raw fragments are trusted as written.
    assert_eq!(sanitize(Raw("a|b")), "a|b");
}

#[test]
fn builders_compose_as_raw_fragments() {
    let mut year = ExpressionBuilder::new();
    year.digit().repeat_exactly_or_between(&[4]);
    let mut date = ExpressionBuilder::new();
    date.anchor_start(true)
        .find(&year)
        .find("-")
        .digit()
        .repeat_exactly_or_between(&[2]);
    assert_eq!(date.as_str(), r"^(?:\d{4})(?:-)\d{2}");
    assert!(matches!(date.test("2024-05"), Ok(true)));
}
