use logos::Logos;

/// Represents a lexeme scanned from a single source line.
/// A lexeme is a minimal but meaningful unit of text produced by the lexer;
/// the compiler classifies each one into an output token or an operator
/// stack entry.
#[derive(Logos, Debug, PartialEq, Clone)]
pub enum Lexeme {
    /// Numeric literal lexemes, such as `42`, `3.14`, `.5` or `2.1e-10`.
    #[regex(r"[0-9]+\.[0-9]+([eE][+-]?[0-9]+)?", parse_number)]
    #[regex(r"\.[0-9]+([eE][+-]?[0-9]+)?", parse_number)]
    #[regex(r"[0-9]+([eE][+-]?[0-9]+)?", parse_number)]
    Number(f64),
    /// A quoted string literal. No escape sequences; a `"` cannot appear
    /// inside. An unclosed quote fails the whole scan.
    #[regex(r#""[^"]*""#, trim_quotes)]
    Quoted(String),
    /// Word lexemes; function names, variable names or bare symbols such as
    /// `print` or `total_2`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Word(String),
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// A maximal run of operator characters, such as `+` or `<=`.
    ///
    /// Anything that is not alphanumeric, whitespace, a quote or a
    /// parenthesis joins the run, so two operators cannot abut without
    /// whitespace unless their concatenation is itself registered. The run
    /// is resolved against the operator registry by the compiler.
    #[regex(r#"[^a-zA-Z0-9_ \t\r\n"()]+"#, |lex| lex.slice().to_string())]
    Symbols(String),
    /// Spaces and tabs between lexemes.
    #[regex(r"[ \t\r\n]+", logos::skip)]
    Ignored,
}

/// Parses a numeric literal from the current lexeme slice.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current lexeme.
///
/// # Returns
/// - `Some(f64)`: The parsed value if successful.
/// - `None`: If the slice is not a valid double.
fn parse_number(lex: &logos::Lexer<Lexeme>) -> Option<f64> {
    lex.slice().parse().ok()
}

/// Strips the surrounding quotation marks from a string literal.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current lexeme.
///
/// # Returns
/// The literal's contents without the enclosing `"` characters.
fn trim_quotes(lex: &logos::Lexer<Lexeme>) -> String {
    let slice = lex.slice();
    slice[1..slice.len() - 1].to_string()
}
