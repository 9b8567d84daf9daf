//! Operator-precedence behaviour of the binary rule over every operator pair

mod common;

use common::*;
use jsparens::ast::{BinaryOperator, LogicalOperator, Node};
use jsparens::{needs_parens, precedence};

/// Every binary and logical token
fn all_tokens() -> Vec<&'static str> {
    BinaryOperator::ALL
        .iter()
        .map(|op| op.as_str())
        .chain(LogicalOperator::ALL.iter().map(|op| op.as_str()))
        .collect()
}

fn is_logical(token: &str) -> bool {
    token.parse::<LogicalOperator>().is_ok()
}

#[test]
fn test_every_pair_in_left_slot() {
    for outer in all_tokens() {
        for inner in all_tokens() {
            let parent = infix(infix(id("a"), inner, id("b")), outer, id("c"));
            let expected =
                precedence::of_token(outer).unwrap() > precedence::of_token(inner).unwrap();

            assert_eq!(
                needs_parens(left(&parent), Some(&parent)),
                expected,
                "`a {inner} b` as left operand of `{outer}`"
            );
        }
    }
}

#[test]
fn test_every_pair_in_right_slot() {
    for outer in all_tokens() {
        for inner in all_tokens() {
            let parent = infix(id("a"), outer, infix(id("b"), inner, id("c")));
            let outer_prec = precedence::of_token(outer).unwrap();
            let inner_prec = precedence::of_token(inner).unwrap();
            let expected =
                outer_prec > inner_prec || (outer_prec == inner_prec && !is_logical(outer));

            assert_eq!(
                needs_parens(right(&parent), Some(&parent)),
                expected,
                "`b {inner} c` as right operand of `{outer}`"
            );
        }
    }
}

#[test]
fn test_add_under_multiply() {
    // (a + b) * c
    let parent = binary(binary(id("a"), "+", id("b")), "*", id("c"));
    assert!(needs_parens(left(&parent), Some(&parent)));

    // a * (b + c)
    let parent = binary(id("a"), "*", binary(id("b"), "+", id("c")));
    assert!(needs_parens(right(&parent), Some(&parent)));
}

#[test]
fn test_chained_logicals_print_flat() {
    // a && (b && c) reads the same as a && b && c
    let parent = logical(
        id("a"),
        LogicalOperator::And,
        logical(id("b"), LogicalOperator::And, id("c")),
    );
    assert!(!needs_parens(right(&parent), Some(&parent)));

    // a || (b && c) binds tighter already
    let parent = logical(
        id("a"),
        LogicalOperator::Or,
        logical(id("b"), LogicalOperator::And, id("c")),
    );
    assert!(!needs_parens(right(&parent), Some(&parent)));

    // (a || b) && c
    let parent = logical(
        logical(id("a"), LogicalOperator::Or, id("b")),
        LogicalOperator::And,
        id("c"),
    );
    assert!(needs_parens(left(&parent), Some(&parent)));
}

#[test]
fn test_equal_precedence_right_operand() {
    // a + (b + c): not reassociated even though + is associative
    let parent = binary(id("a"), "+", binary(id("b"), "+", id("c")));
    assert!(needs_parens(right(&parent), Some(&parent)));

    // a - b - c
    let parent = binary(binary(id("a"), "-", id("b")), "-", id("c"));
    assert!(!needs_parens(left(&parent), Some(&parent)));
}

#[test]
fn test_exponent_is_treated_like_any_other_operator() {
    // a ** (b ** c) keeps its parentheses and (a ** b) ** c loses them;
    // right associativity is not modelled
    let parent = binary(id("a"), "**", binary(id("b"), "**", id("c")));
    assert!(needs_parens(right(&parent), Some(&parent)));

    let parent = binary(binary(id("a"), "**", id("b")), "**", id("c"));
    assert!(!needs_parens(left(&parent), Some(&parent)));
}

#[test]
fn test_binary_operand_of_non_binary_parent() {
    // f(a + b)
    let parent = call(id("f"), vec![binary(id("a"), "+", id("b"))]);
    assert!(!needs_parens(first_argument(&parent), Some(&parent)));

    // (a + b)()
    let parent = call(binary(id("a"), "+", id("b")), vec![]);
    assert!(needs_parens(callee(&parent), Some(&parent)));

    // (a + b).c
    let parent = member(binary(id("a"), "+", id("b")), "c");
    assert!(needs_parens(object_of(&parent), Some(&parent)));

    // -(a * b)
    let parent = unary("-", binary(id("a"), "*", id("b")));
    assert!(needs_parens(argument(&parent), Some(&parent)));
}

#[test]
fn test_unknown_tokens_have_no_precedence() {
    for token in ["=", "??", "|>", ""] {
        let err = precedence::of_token(token).unwrap_err();
        assert_eq!(err.kind, jsparens::ErrorKind::UnknownOperator, "token {token:?}");
    }
}

#[test]
fn test_verdicts_are_stable() {
    let parent = binary(binary(id("a"), "in", id("b")), "<", id("c"));
    let child: &Node = left(&parent);
    let first = needs_parens(child, Some(&parent));
    for _ in 0..10 {
        assert_eq!(needs_parens(child, Some(&parent)), first);
    }
}
