//! Scenario tests for the full rewrite
//!
//! Inputs are written in token notation, the way the lexer's output reads; expected outputs
//! are the rewritten stream rendered back to notation.

use brew_rewriter::brew::loader::TokenLoader;
use brew_rewriter::brew::rewriting::{rewrite, Pass, RewriteError, Rewriter};
use brew_rewriter::brew::token::{
    parse_notation, to_notation, to_tag_line, Location, Position, Tag,
};
use rstest::rstest;

fn rewritten(source: &str) -> String {
    let mut tokens = parse_notation(source).expect("valid notation");
    rewrite(&mut tokens).expect("rewrite to succeed");
    to_notation(&tokens)
}

#[rstest]
#[case::terminator_after_block(
    "a -> INDENT b OUTDENT c",
    "a -> INDENT b OUTDENT TERMINATOR+explicit c"
)]
#[case::no_terminator_before_else(
    "if a INDENT b OUTDENT else INDENT c OUTDENT",
    "if a INDENT b OUTDENT else INDENT c OUTDENT"
)]
#[case::no_terminator_before_operator(
    "x = f -> INDENT a OUTDENT . call",
    "x = f -> INDENT a OUTDENT . call"
)]
#[case::no_terminator_before_comma(
    "f CALL_START -> INDENT a OUTDENT , b )",
    "f CALL_START -> INDENT a OUTDENT , b CALL_END"
)]
#[case::nested_outdents(
    "a -> INDENT b -> INDENT c OUTDENT OUTDENT d",
    "a -> INDENT b -> INDENT c OUTDENT OUTDENT TERMINATOR+explicit d"
)]
#[case::leading_terminators("TERMINATOR TERMINATOR a", "a")]
#[case::only_terminators("TERMINATOR TERMINATOR", "")]
#[case::empty("", "")]
#[case::explicit_call("f CALL_START a , b )", "f CALL_START a , b CALL_END")]
#[case::call_closed_by_outdent(
    "x -> INDENT f CALL_START a OUTDENT",
    "x -> INDENT f CALL_START a CALL_END+gen OUTDENT"
)]
#[case::call_closed_by_end_of_stream("f CALL_START a", "f CALL_START a CALL_END+gen")]
#[case::nested_calls_closed_by_end_of_stream(
    "f CALL_START g CALL_START x",
    "f CALL_START g CALL_START x CALL_END+gen CALL_END+gen"
)]
#[case::nested_calls_closed_by_outdent(
    "a -> INDENT f CALL_START g CALL_START x OUTDENT",
    "a -> INDENT f CALL_START g CALL_START x CALL_END+gen CALL_END+gen OUTDENT"
)]
#[case::explicit_inner_call_before_outdent(
    "a -> INDENT f CALL_START g CALL_START x ) OUTDENT b",
    "a -> INDENT f CALL_START g CALL_START x CALL_END CALL_END+gen OUTDENT TERMINATOR+explicit b"
)]
#[case::group_argument_closed_by_outdent(
    "a -> INDENT f CALL_START ( x ) OUTDENT",
    "a -> INDENT f CALL_START ( x ) CALL_END+gen OUTDENT"
)]
#[case::index("a INDEX_START 0 ]", "a INDEX_START 0 INDEX_END")]
#[case::index_closed_implicitly(
    "x -> INDENT a INDEX_START b OUTDENT",
    "x -> INDENT a INDEX_START b INDEX_END+gen OUTDENT"
)]
#[case::postfix_if("a if b", "a POST_IF b")]
#[case::postfix_if_before_terminator("a if b TERMINATOR c", "a POST_IF b TERMINATOR c")]
#[case::leading_if("if b INDENT a OUTDENT", "if b INDENT a OUTDENT")]
#[case::postfix_unless("a unless b", "a POST_UNLESS b")]
#[case::empty_mapping(r#"x = INDENT"{" : OUTDENT"}""#, "x = { }")]
#[case::mapping(
    r#"x = INDENT"{" a : 1 OUTDENT"}""#,
    "x = { a : 1 }"
)]
#[case::class_body(
    r#"class a INDENT"{" b : 1 OUTDENT"}""#,
    "class a INDENT+gen { b : 1 } OUTDENT+gen"
)]
#[case::mapping_already_tagged("x = { a : 1 }", "x = { a : 1 }")]
fn test_rewrite(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(rewritten(input), expected);
}

#[rstest]
#[case::unclosed_group_in_call("f CALL_START ( a")]
#[case::unclosed_group_in_condition("a if ( b")]
fn test_unclosed_regions(#[case] input: &str) {
    let mut tokens = parse_notation(input).unwrap();
    let err = rewrite(&mut tokens).unwrap_err();
    assert_eq!(
        err,
        RewriteError::Unclosed {
            tag: Tag::ParenStart,
            location: Location::point(Position::new(0, input.find('(').unwrap())),
        }
    );
}

#[rstest]
#[case::colon_outside_braces("a : 1", "UnmatchedMappingOpen")]
#[case::mapping_never_closed(r#"x = INDENT"{" a : 1"#, "UnmatchedMappingClose")]
#[case::stray_closer("a ]", "Unbalanced")]
fn test_rewrite_errors(#[case] input: &str, #[case] kind: &str) {
    let mut tokens = parse_notation(input).unwrap();
    let err = rewrite(&mut tokens).unwrap_err();
    let actual = match err {
        RewriteError::Unclosed { .. } => "Unclosed",
        RewriteError::UnmatchedMappingOpen { .. } => "UnmatchedMappingOpen",
        RewriteError::UnmatchedMappingClose { .. } => "UnmatchedMappingClose",
        RewriteError::Unbalanced { .. } => "Unbalanced",
    };
    assert_eq!(actual, kind);
}

#[test]
fn test_error_message_points_at_colon() {
    let mut tokens = parse_notation("a\n  b : 1").unwrap();
    let err = rewrite(&mut tokens).unwrap_err();
    assert_eq!(err.to_string(), "':' at 1:4 is not inside any block or mapping");
}

#[test]
fn test_class_wrapper_locations() {
    let mut tokens = parse_notation("class a INDENT\"{\" b : 1 OUTDENT\"}\"").unwrap();
    rewrite(&mut tokens).unwrap();
    // INDENT sits at the end of the class name, OUTDENT at the end of the closing brace
    assert_eq!(tokens[2].location, Some(Location::point(Position::new(0, 6))));
    let last = tokens.last().unwrap();
    assert_eq!(last.tag, Tag::Outdent);
    assert_eq!(last.location, Some(Location::point(Position::new(0, 33))));
}

#[test]
fn test_tag_line_snapshot() {
    let tokens = TokenLoader::from_string("TERMINATOR f CALL_START a , -> INDENT b OUTDENT")
        .rewrite()
        .unwrap();
    insta::assert_snapshot!(
        to_tag_line(&tokens, false),
        @"IDENTIFIER CALL_START IDENTIFIER , -> INDENT IDENTIFIER OUTDENT CALL_END"
    );
}

#[test]
fn test_tag_line_with_locations_snapshot() {
    let tokens = TokenLoader::from_string("f CALL_START a").rewrite().unwrap();
    insta::assert_snapshot!(
        to_tag_line(&tokens, true),
        @"IDENTIFIER@0:0 CALL_START@0:2..0:11 IDENTIFIER@0:13 CALL_END@0:13"
    );
}

#[test]
fn test_stop_after_each_pass() {
    let source = "TERMINATOR f CALL_START a if b";
    let expectations = [
        (Pass::LeadingNewlines, "f CALL_START a if b"),
        (Pass::CloseCalls, "f CALL_START a if b CALL_END+gen"),
        (Pass::CloseIndexes, "f CALL_START a if b CALL_END+gen"),
        (Pass::PostfixConditionals, "f CALL_START a POST_IF b CALL_END+gen"),
    ];
    for (pass, expected) in expectations {
        let mut tokens = parse_notation(source).unwrap();
        Rewriter::new().stop_after(pass).run(&mut tokens).unwrap();
        assert_eq!(to_notation(&tokens), expected, "after {pass}");
    }
}
