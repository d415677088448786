//! Character constants used throughout the formatter layer

// Punctuation
pub const DQ: char = '"';
pub const SQ: char = '\'';
pub const DOLLAR: char = '$';
pub const MINUS: char = '-';
pub const COLON: char = ':';
pub const SLASH: char = '/';
pub const LT: char = '<';
pub const GT: char = '>';
pub const AT: char = '@';

// Brackets
pub const LPAREN: char = '(';
pub const RPAREN: char = ')';
pub const LBRACKET: char = '[';
pub const RBRACKET: char = ']';
pub const LBRACE: char = '{';
pub const RBRACE: char = '}';

// Identifier and template-literal characters
pub const UNDERSCORE: char = '_';
pub const BT: char = '`';
