//! Character classes recognized by the Quill lexer.
//!
//! One predicate per lookahead class keeps the mapping from codepoint
//! class to token kind auditable: classification never crosses a class
//! boundary, so these predicates alone decide where every token ends.

/// Checks if a character is valid as the start of an identifier.
///
/// Valid identifier start characters:
/// - ASCII letters: a-z, A-Z
/// - Underscore: _
///
/// # Example
///
/// ```
/// use quillc_lex::classes::is_ident_start;
///
/// assert!(is_ident_start('a'));
/// assert!(is_ident_start('_'));
/// assert!(!is_ident_start('1'));
/// assert!(!is_ident_start('+'));
/// ```
pub fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

/// Checks if a character is valid as a continuation of an identifier.
///
/// Valid continuation characters are the start characters plus ASCII
/// digits, so digits are legal anywhere but the first position.
///
/// # Example
///
/// ```
/// use quillc_lex::classes::is_ident_continue;
///
/// assert!(is_ident_continue('a'));
/// assert!(is_ident_continue('_'));
/// assert!(is_ident_continue('1'));
/// assert!(!is_ident_continue(' '));
/// ```
pub fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Checks if a character belongs to the whitespace class.
///
/// Exactly space, tab, and newline; a whitespace run may mix all three.
///
/// # Example
///
/// ```
/// use quillc_lex::classes::is_space;
///
/// assert!(is_space(' '));
/// assert!(is_space('\t'));
/// assert!(is_space('\n'));
/// assert!(!is_space('a'));
/// ```
pub fn is_space(c: char) -> bool {
    c == ' ' || c == '\t' || c == '\n'
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ident_start() {
        assert!(is_ident_start('z'));
        assert!(is_ident_start('A'));
        assert!(is_ident_start('_'));
        assert!(!is_ident_start('0'));
        assert!(!is_ident_start('?'));
        assert!(!is_ident_start('α'));
    }

    #[test]
    fn test_ident_continue() {
        assert!(is_ident_continue('z'));
        assert!(is_ident_continue('9'));
        assert!(is_ident_continue('_'));
        assert!(!is_ident_continue('\t'));
        assert!(!is_ident_continue('('));
    }

    #[test]
    fn test_space() {
        assert!(is_space(' '));
        assert!(is_space('\t'));
        assert!(is_space('\n'));
        assert!(!is_space('\r'));
        assert!(!is_space('\0'));
    }
}
