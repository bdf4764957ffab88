use super::*;

#[test]
fn display_includes_kind_and_position() {
    let err = LexicalError::duplicate_exponent('E', 3, 0);
    assert_eq!(
        err.to_string(),
        "invalid or unexpected token: second exponent marker `E` in numeric literal at byte 3"
    );
}

#[test]
fn display_of_each_kind() {
    assert_eq!(
        LexicalErrorKind::InvalidExponent { found: 'g' }.to_string(),
        "expected digit or `-` after exponent marker, found `g`"
    );
    assert_eq!(
        LexicalErrorKind::IncompleteExponent.to_string(),
        "input ends after exponent marker"
    );
    assert_eq!(
        LexicalErrorKind::UnterminatedString { quote: '"' }.to_string(),
        "unterminated string literal opened with `\"`"
    );
}

#[test]
fn constructors_fill_context() {
    let number = LexicalError::invalid_exponent('x', 5, 2);
    assert_eq!(number.context, LexicalErrorContext::NumberLiteral { start: 2 });
    assert_eq!(number.literal_start(), 2);

    let incomplete = LexicalError::incomplete_exponent(4, 1);
    assert_eq!(incomplete.kind, LexicalErrorKind::IncompleteExponent);
    assert_eq!(incomplete.pos, 4);

    let string = LexicalError::unterminated_string('\'', 9, 0);
    assert_eq!(string.context, LexicalErrorContext::InsideString { start: 0 });
    assert_eq!(string.literal_start(), 0);
}

#[test]
fn is_a_std_error() {
    fn assert_error<E: std::error::Error + Send + Sync + 'static>(_: &E) {}
    assert_error(&LexicalError::incomplete_exponent(0, 0));
}
