//! End-to-end scanner tests.

use dfalex_lex::{tokenize, tokenize_with, LexErrorKind, Lexicon, Scanner, Token, TokenKind};
use dfalex_util::{DiagnosticCode, Handler, Span};

fn kinds(source: &str) -> Vec<TokenKind> {
    tokenize(source).iter().map(Token::kind).collect()
}

fn lexemes(source: &str) -> Vec<String> {
    tokenize(source).iter().map(|t| t.lexeme().to_owned()).collect()
}

#[test]
fn test_small_program() {
    let source = r#"
        int main() {
            float x = 3.14;
            char *s = "line one
line two";
            if (x != 0 && s) { return 1; }
            /* unreachable /* nested */ still comment */
            return 0; // bye
        }
    "#;
    let tokens = tokenize(source);
    assert!(tokens.iter().all(|t| !t.is_error()), "{tokens:?}");

    let keywords: Vec<&str> = tokens
        .iter()
        .filter(|t| t.kind() == TokenKind::Keyword)
        .map(Token::lexeme)
        .collect();
    assert_eq!(keywords, ["int", "float", "char", "if", "return", "return"]);

    let strings: Vec<&Token> = tokens.iter().filter(|t| t.kind() == TokenKind::String).collect();
    assert_eq!(strings.len(), 1);
    assert_eq!(strings[0].lexeme(), "line one\nline two");

    let comments: Vec<&str> = tokens
        .iter()
        .filter(|t| t.kind() == TokenKind::Comment)
        .map(Token::lexeme)
        .collect();
    assert_eq!(
        comments,
        ["/* unreachable /* nested */ still comment */", "// bye"]
    );
}

#[test]
fn test_operators_munch_maximally() {
    assert_eq!(
        lexemes("a==b!=c<=d>=e&&f||g->h"),
        ["a", "==", "b", "!=", "c", "<=", "d", ">=", "e", "&&", "f", "||", "g", "->", "h"]
    );
    assert_eq!(lexemes("===="), ["==", "=="]);
    assert_eq!(lexemes("!!x"), ["!", "!", "x"]);
    assert_eq!(lexemes("a-->b"), ["a", "-", "->", "b"]);
}

#[test]
fn test_unknown_operator_prefixes() {
    assert_eq!(
        kinds("a & b | c"),
        [
            TokenKind::Identifier,
            TokenKind::Error(LexErrorKind::UnknownOperator),
            TokenKind::Identifier,
            TokenKind::Error(LexErrorKind::UnknownOperator),
            TokenKind::Identifier,
        ]
    );
}

#[test]
fn test_division_is_not_a_comment() {
    assert_eq!(lexemes("a / b"), ["a", "/", "b"]);
    assert_eq!(lexemes("a/b"), ["a", "/", "b"]);
    assert_eq!(kinds("/"), [TokenKind::Operator]);
}

#[test]
fn test_numbers() {
    assert_eq!(lexemes("0 42 3.14 7."), ["0", "42", "3.14", "7."]);
    assert_eq!(lexemes("1.2.3"), ["1.2", ".", "3"]);
    assert_eq!(
        kinds("12ab"),
        [TokenKind::Number, TokenKind::Identifier]
    );
}

#[test]
fn test_identifiers() {
    assert_eq!(lexemes("_a a_1 __ x9y"), ["_a", "a_1", "__", "x9y"]);
    assert_eq!(kinds("returned"), [TokenKind::Identifier]);
    assert_eq!(kinds("Return"), [TokenKind::Identifier]);
}

#[test]
fn test_string_escapes_are_kept_raw() {
    let tokens = tokenize(r#""a\"b" "c\\" """#);
    let bodies: Vec<&str> = tokens.iter().map(Token::lexeme).collect();
    assert_eq!(bodies, [r#"a\"b"#, r"c\\", ""]);
    assert!(tokens.iter().all(|t| t.kind() == TokenKind::String));
}

#[test]
fn test_punctuation() {
    assert_eq!(
        kinds("[a, b];"),
        [
            TokenKind::LBracket,
            TokenKind::Identifier,
            TokenKind::Comma,
            TokenKind::Identifier,
            TokenKind::RBracket,
            TokenKind::Semicolon,
        ]
    );
}

#[test]
fn test_comment_at_end_of_input() {
    assert_eq!(kinds("x // trailing"), [TokenKind::Identifier, TokenKind::Comment]);
    assert_eq!(
        kinds("x /* open"),
        [
            TokenKind::Identifier,
            TokenKind::Error(LexErrorKind::UnterminatedComment)
        ]
    );
    assert_eq!(lexemes("/* a /* b */"), ["/* a /* b */"]);
}

#[test]
fn test_line_comment_stops_at_newline() {
    let tokens = tokenize("// one\ntwo");
    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0].lexeme(), "// one");
    assert_eq!(tokens[1].lexeme(), "two");
    assert_eq!(tokens[1].span(), Span::new(7, 10, 2, 1));
}

#[test]
fn test_non_ascii_is_unexpected() {
    let tokens = tokenize("a é b");
    assert_eq!(tokens.len(), 3);
    assert_eq!(tokens[1].kind(), TokenKind::Error(LexErrorKind::UnexpectedChar));
    assert_eq!(tokens[1].lexeme(), "é");
    assert_eq!(tokens[1].span(), Span::new(2, 4, 1, 3));
    assert_eq!(tokens[2].span().column, 5);
}

#[test]
fn test_errors_do_not_stop_the_scan() {
    let tokens = tokenize("#$ if");
    assert_eq!(
        tokens.iter().map(ToString::to_string).collect::<Vec<_>>(),
        ["<ERROR, #>", "<ERROR, $>", "<KEYWORD, if>"]
    );
}

#[test]
fn test_diagnostic_codes_per_error() {
    let handler = Handler::new();
    let _ = tokenize_with("@ & \"x", &handler);
    let codes: Vec<Option<DiagnosticCode>> =
        handler.diagnostics().into_iter().map(|d| d.code).collect();
    assert_eq!(
        codes,
        [
            Some(DiagnosticCode::E_LEX_UNEXPECTED_CHAR),
            Some(DiagnosticCode::E_LEX_UNKNOWN_OPERATOR),
            Some(DiagnosticCode::E_LEX_UNTERMINATED_STRING),
        ]
    );

    let handler = Handler::new();
    let _ = tokenize_with("/*", &handler);
    assert_eq!(
        handler.diagnostics()[0].code,
        Some(DiagnosticCode::E_LEX_UNTERMINATED_COMMENT)
    );
}

#[test]
fn test_rendered_diagnostic_points_at_source() {
    let source = "x = 1;\ny = @;";
    let handler = Handler::new();
    let _ = tokenize_with(source, &handler);
    let diags = handler.diagnostics();
    assert_eq!(diags.len(), 1);

    let rendered = diags[0].render(source);
    assert!(rendered.starts_with("error[E1001]: unexpected character `@`"), "{rendered}");
    assert!(rendered.contains("--> 2:5"), "{rendered}");
    assert!(rendered.contains("y = @;"), "{rendered}");
}

#[test]
fn test_custom_keywords() {
    let handler = Handler::new();
    let lexicon = Lexicon::new().with_keywords(["fn", "let"]);
    let tokens: Vec<Token> = Scanner::with_lexicon("fn let if iffy", &handler, &lexicon).collect();
    assert_eq!(
        tokens.iter().map(Token::kind).collect::<Vec<_>>(),
        [
            TokenKind::Keyword,
            TokenKind::Keyword,
            TokenKind::Keyword,
            TokenKind::Identifier
        ]
    );
    assert_eq!(kinds("fn"), [TokenKind::Identifier]);
}

#[test]
fn test_scanning_is_repeatable() {
    let source = "for (i = 0; i < 10; i = i + 1) { x[i] = \"v\"; }";
    assert_eq!(tokenize(source), tokenize(source));
}
