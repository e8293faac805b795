//lexical analysis of the FORTRAN subset,
//it breaks the source text into classified tokens
//that the parser then walks into the AST

use regex::Regex;
use std::fmt;
use std::sync::LazyLock;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // Keywords
    Integer,
    Print,
    If,
    Then,
    Do,
    EndIf,
    EndDo,

    // Punctuation
    Comma,
    Asterisk,
    DoubleColon,
    Assign,
    Relop,
    LParen,
    RParen,

    // Literals
    String,
    Id,
    Number,

    // Statement separator
    Newline,
}

impl TokenKind {
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::Integer => "INTEGER",
            TokenKind::Print => "PRINT",
            TokenKind::If => "IF",
            TokenKind::Then => "THEN",
            TokenKind::Do => "DO",
            TokenKind::EndIf => "END_IF",
            TokenKind::EndDo => "END_DO",
            TokenKind::Comma => "COMMA",
            TokenKind::Asterisk => "ASTERISK",
            TokenKind::DoubleColon => "DOUBLE_COLON",
            TokenKind::Assign => "ASSIGN",
            TokenKind::Relop => "RELOP",
            TokenKind::LParen => "LPAREN",
            TokenKind::RParen => "RPAREN",
            TokenKind::String => "STRING",
            TokenKind::Id => "ID",
            TokenKind::Number => "NUMBER",
            TokenKind::Newline => "NEWLINE",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Numeric literal value, decided at lex time by the presence of a decimal point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Int(i64),
    Float(f64),
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Int(v) => write!(f, "{}", v),
            // whole floats keep their decimal point so `1.` stays visibly floating
            Number::Float(v) if v.is_finite() && v.fract() == 0.0 && v.abs() < 1e16 => {
                write!(f, "{:.1}", v)
            }
            Number::Float(v) => write!(f, "{}", v),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum TokenValue {
    Text(String),
    Number(Number),
}

impl fmt::Display for TokenValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenValue::Text(text) => f.write_str(text),
            TokenValue::Number(number) => write!(f, "{}", number),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: TokenValue,
    pub line: usize,
}

impl Token {
    /// Textual value; string literals come back without their quotes.
    pub fn text(&self) -> String {
        self.value.to_string()
    }

    /// Text as it would read in source, with string literals re-quoted.
    pub fn source_text(&self) -> String {
        match self.kind {
            TokenKind::String => format!("\"{}\"", self.value),
            _ => self.value.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
#[error("[ERR-LEX-001] Unexpected character \"{character}\" at line {line}")]
pub struct LexError {
    pub character: char,
    pub line: usize,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum RuleAction {
    Emit(TokenKind),
    Skip,
}

/// Lexer rules in priority order. At every position the FIRST rule whose
/// pattern matches wins, no longest-match arbitration happens. The order is
/// therefore part of the language:
///
/// * keywords sit above `ID`, so a keyword spelling never lexes as an
///   identifier, not even as the prefix of a longer word (`DONE` is `DO`, `NE`);
/// * `END IF` / `END DO` sit above `ID`, otherwise `END` would be an identifier;
/// * `RELOP` sits above `ASSIGN`, otherwise `==` would lex as two assignments.
const RULE_TABLE: &[(RuleAction, &str)] = &[
    (RuleAction::Emit(TokenKind::Integer), r"INTEGER"),
    (RuleAction::Emit(TokenKind::Print), r"PRINT"),
    (RuleAction::Emit(TokenKind::Comma), r","),
    (RuleAction::Emit(TokenKind::Asterisk), r"\*"),
    (RuleAction::Emit(TokenKind::If), r"IF"),
    (RuleAction::Emit(TokenKind::Then), r"THEN"),
    (RuleAction::Emit(TokenKind::Do), r"DO"),
    (RuleAction::Emit(TokenKind::EndIf), r"END IF"),
    (RuleAction::Emit(TokenKind::EndDo), r"END DO"),
    (RuleAction::Emit(TokenKind::DoubleColon), r"::"),
    (RuleAction::Emit(TokenKind::String), r#""[^"]*""#),
    (RuleAction::Emit(TokenKind::Id), r"[A-Za-z_][A-Za-z0-9_]*"),
    (RuleAction::Emit(TokenKind::Number), r"[0-9]+(\.[0-9]*)?"),
    (RuleAction::Emit(TokenKind::Relop), r"<=|>=|==|/=|<|>|\.EQ\.|\.NE\."),
    (RuleAction::Emit(TokenKind::Assign), r"="),
    (RuleAction::Emit(TokenKind::LParen), r"\("),
    (RuleAction::Emit(TokenKind::RParen), r"\)"),
    (RuleAction::Emit(TokenKind::Newline), r"\n"),
    (RuleAction::Skip, r"[ \t\r]+"),
];

struct LexRule {
    action: RuleAction,
    pattern: Regex,
}

static RULES: LazyLock<Vec<LexRule>> = LazyLock::new(|| {
    RULE_TABLE
        .iter()
        .map(|(action, pattern)| LexRule {
            action: *action,
            // anchored: a rule only ever matches at the current position
            pattern: Regex::new(&format!("^(?:{})", pattern))
                .expect("lexer rule table holds valid patterns"),
        })
        .collect()
});

pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    let mut tokens = Vec::new();
    let mut line = 1;
    let mut pos = 0;

    while pos < source.len() {
        let rest = &source[pos..];
        let matched = RULES
            .iter()
            .find_map(|rule| rule.pattern.find(rest).map(|m| (rule.action, m.as_str())));

        let Some((action, lexeme)) = matched else {
            let character = rest.chars().next().unwrap_or_default();
            return Err(LexError { character, line });
        };
        pos += lexeme.len();

        if let RuleAction::Emit(kind) = action {
            tokens.push(Token {
                kind,
                value: token_value(kind, lexeme),
                line,
            });
            match kind {
                TokenKind::Newline => line += 1,
                TokenKind::String => line += lexeme.matches('\n').count(),
                _ => {}
            }
        }
    }

    debug!(tokens = tokens.len(), lines = line, "tokenized source");
    Ok(tokens)
}

fn token_value(kind: TokenKind, lexeme: &str) -> TokenValue {
    match kind {
        TokenKind::Number => TokenValue::Number(parse_number(lexeme)),
        TokenKind::String => TokenValue::Text(lexeme[1..lexeme.len() - 1].to_string()),
        _ => TokenValue::Text(lexeme.to_string()),
    }
}

fn parse_number(lexeme: &str) -> Number {
    if lexeme.contains('.') {
        return Number::Float(lexeme.parse().unwrap_or(f64::NAN));
    }
    // digit runs past i64 range degrade to floating rather than failing the lex
    lexeme
        .parse::<i64>()
        .map(Number::Int)
        .unwrap_or_else(|_| Number::Float(lexeme.parse().unwrap_or(f64::INFINITY)))
}
