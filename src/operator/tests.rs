use crate::operator::Operator;

#[test]
fn test_operator_symbols_round_trip() {
    for op in Operator::ALL {
        assert_eq!(Operator::from_symbol(op.symbol()), Some(op));
    }
    assert_eq!(Operator::from_symbol('/'), None);
    assert_eq!(Operator::from_symbol('a'), None);
}

#[test]
fn test_emission_order() {
    let symbols: String = Operator::ALL.iter().map(|op| op.symbol()).collect();
    assert_eq!(symbols, "-+*");
}

#[test]
fn test_subtraction_guard() {
    assert!(Operator::Sub.admits("a", "x"));
    assert!(Operator::Sub.admits("x", "a"));
    assert!(!Operator::Sub.admits("ab+", "ab+"));
}

#[test]
fn test_addition_guard_is_strict() {
    assert!(Operator::Add.admits("a", "x"));
    assert!(!Operator::Add.admits("x", "a"));
    assert!(!Operator::Add.admits("a", "a"));
}

#[test]
fn test_multiplication_guard_allows_equal_operands() {
    assert!(Operator::Mul.admits("a", "x"));
    assert!(Operator::Mul.admits("a", "a"));
    assert!(!Operator::Mul.admits("x", "a"));
}

#[test]
fn test_guards_compare_whole_strings() {
    // "aa*" < "b" lexicographically even though it is longer
    assert!(Operator::Add.admits("aa*", "b"));
    assert!(!Operator::Add.admits("b", "aa*"));
}

#[test]
fn test_commutativity() {
    assert!(!Operator::Sub.is_commutative());
    assert!(Operator::Add.is_commutative());
    assert!(Operator::Mul.is_commutative());
}

#[test]
fn test_display() {
    assert_eq!(format!("{}", Operator::Mul), "*");
}
