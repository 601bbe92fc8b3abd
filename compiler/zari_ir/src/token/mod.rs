//! Token definitions.
//!
//! [`TokenKind`] is the closed set of lexical categories the scanner can
//! produce. Tokens carry no decoded values: literal text is recovered from
//! the source buffer through the token's span.

use std::fmt;

use crate::Span;

/// A classified run of source characters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
    /// Indentation depth of the line containing this token, in units of the
    /// scanner's indentation mode.
    pub indent: u32,
}

impl Token {
    /// Token of `kind` covering `span`, on a line indented `indent` units.
    #[inline]
    pub const fn new(kind: TokenKind, span: Span, indent: u32) -> Self {
        Token { kind, span, indent }
    }
}

/// Broad grouping of token kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenCategory {
    Meta,
    Grouping,
    Arithmetic,
    Logical,
    Punctuation,
    Literal,
    Keyword,
    Error,
}

/// The kind of a token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // Meta
    Eof,
    Eol,

    // Grouping
    LPar,
    RPar,
    LBrac,
    RBrac,
    LCurl,
    RCurl,

    // Arithmetic
    Plus,
    PlusPlus,
    PlusEq,
    Minus,
    MinusMinus,
    MinusEq,
    Star,
    StarStar,
    StarEq,
    StarStarEq,
    Slash,
    SlashSlash,
    SlashEq,
    SlashSlashEq,
    Mod,
    ModEq,

    // Logical/Comparison
    And,
    AndAnd,
    Bar,
    BarBar,
    Lt,
    LtEq,
    Gt,
    GtEq,
    Bang,
    BangEq,
    Eq,
    EqEq,

    // Punctuation
    Dot,
    Comma,
    Colon,
    Semicolon,
    QMark,
    Arrow,

    // Literals
    LitSymbol,
    LitInteger,
    LitFloat,
    LitString,
    LitRawString,
    LitTrue,
    LitFalse,

    // Keywords
    KwLet,
    KwMutable,
    KwType,
    KwFor,
    KwIn,
    KwBreak,
    KwContinue,
    KwWhile,
    KwIf,
    KwElse,
    KwDo,

    /// Placeholder for a malformed literal or an unrecognized character.
    /// The matching diagnostic has already been reported.
    Error,
}

impl TokenKind {
    /// Look up a reserved word. Case-sensitive.
    pub fn keyword(text: &str) -> Option<TokenKind> {
        Some(match text {
            "let" => TokenKind::KwLet,
            "mutable" => TokenKind::KwMutable,
            "type" => TokenKind::KwType,
            "for" => TokenKind::KwFor,
            "in" => TokenKind::KwIn,
            "break" => TokenKind::KwBreak,
            "continue" => TokenKind::KwContinue,
            "while" => TokenKind::KwWhile,
            "if" => TokenKind::KwIf,
            "else" => TokenKind::KwElse,
            "do" => TokenKind::KwDo,
            "true" => TokenKind::LitTrue,
            "false" => TokenKind::LitFalse,
            _ => return None,
        })
    }

    /// Broad grouping this kind belongs to.
    pub fn category(self) -> TokenCategory {
        use TokenKind as K;
        match self {
            K::Eof | K::Eol => TokenCategory::Meta,
            K::LPar | K::RPar | K::LBrac | K::RBrac | K::LCurl | K::RCurl => {
                TokenCategory::Grouping
            }
            K::Plus
            | K::PlusPlus
            | K::PlusEq
            | K::Minus
            | K::MinusMinus
            | K::MinusEq
            | K::Star
            | K::StarStar
            | K::StarEq
            | K::StarStarEq
            | K::Slash
            | K::SlashSlash
            | K::SlashEq
            | K::SlashSlashEq
            | K::Mod
            | K::ModEq => TokenCategory::Arithmetic,
            K::And
            | K::AndAnd
            | K::Bar
            | K::BarBar
            | K::Lt
            | K::LtEq
            | K::Gt
            | K::GtEq
            | K::Bang
            | K::BangEq
            | K::Eq
            | K::EqEq => TokenCategory::Logical,
            K::Dot | K::Comma | K::Colon | K::Semicolon | K::QMark | K::Arrow => {
                TokenCategory::Punctuation
            }
            K::LitSymbol
            | K::LitInteger
            | K::LitFloat
            | K::LitString
            | K::LitRawString
            | K::LitTrue
            | K::LitFalse => TokenCategory::Literal,
            K::KwLet
            | K::KwMutable
            | K::KwType
            | K::KwFor
            | K::KwIn
            | K::KwBreak
            | K::KwContinue
            | K::KwWhile
            | K::KwIf
            | K::KwElse
            | K::KwDo => TokenCategory::Keyword,
            K::Error => TokenCategory::Error,
        }
    }

    /// Whether this is the end-of-line or end-of-file marker.
    pub fn is_meta(self) -> bool {
        self.category() == TokenCategory::Meta
    }

    /// Human-readable name for messages.
    pub fn display_name(self) -> &'static str {
        match self {
            TokenKind::Eof => "end of file",
            TokenKind::Eol => "end of line",

            TokenKind::LPar => "'('",
            TokenKind::RPar => "')'",
            TokenKind::LBrac => "'['",
            TokenKind::RBrac => "']'",
            TokenKind::LCurl => "'{'",
            TokenKind::RCurl => "'}'",

            TokenKind::Plus => "'+'",
            TokenKind::PlusPlus => "'++'",
            TokenKind::PlusEq => "'+='",
            TokenKind::Minus => "'-'",
            TokenKind::MinusMinus => "'--'",
            TokenKind::MinusEq => "'-='",
            TokenKind::Star => "'*'",
            TokenKind::StarStar => "'**'",
            TokenKind::StarEq => "'*='",
            TokenKind::StarStarEq => "'**='",
            TokenKind::Slash => "'/'",
            TokenKind::SlashSlash => "'//'",
            TokenKind::SlashEq => "'/='",
            TokenKind::SlashSlashEq => "'//='",
            TokenKind::Mod => "'%'",
            TokenKind::ModEq => "'%='",

            TokenKind::And => "'&'",
            TokenKind::AndAnd => "'&&'",
            TokenKind::Bar => "'|'",
            TokenKind::BarBar => "'||'",
            TokenKind::Lt => "'<'",
            TokenKind::LtEq => "'<='",
            TokenKind::Gt => "'>'",
            TokenKind::GtEq => "'>='",
            TokenKind::Bang => "'!'",
            TokenKind::BangEq => "'!='",
            TokenKind::Eq => "'='",
            TokenKind::EqEq => "'=='",

            TokenKind::Dot => "'.'",
            TokenKind::Comma => "','",
            TokenKind::Colon => "':'",
            TokenKind::Semicolon => "';'",
            TokenKind::QMark => "'?'",
            TokenKind::Arrow => "'->'",

            TokenKind::LitSymbol => "a name",
            TokenKind::LitInteger => "an integer",
            TokenKind::LitFloat => "a float",
            TokenKind::LitString => "a string",
            TokenKind::LitRawString => "a raw string",
            TokenKind::LitTrue => "'true'",
            TokenKind::LitFalse => "'false'",

            TokenKind::KwLet => "'let'",
            TokenKind::KwMutable => "'mutable'",
            TokenKind::KwType => "'type'",
            TokenKind::KwFor => "'for'",
            TokenKind::KwIn => "'in'",
            TokenKind::KwBreak => "'break'",
            TokenKind::KwContinue => "'continue'",
            TokenKind::KwWhile => "'while'",
            TokenKind::KwIf => "'if'",
            TokenKind::KwElse => "'else'",
            TokenKind::KwDo => "'do'",

            TokenKind::Error => "invalid token",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
