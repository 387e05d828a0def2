mod lookup;
mod token;
mod token_kind;

pub use token::Token;
pub use token_kind::TokenKind;

use lookup::keyword_or_reserved;

/// Which sub-scanner interprets the bytes at the current position. The mode
/// is part of the lexer's saved state, so a [`Cursor`] restores it along
/// with the byte offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    /// Outside any script section; bytes are inline HTML.
    Html,
    /// Regular PHP token scanning.
    Script,
    /// Inside a double-quoted string whose only interpolations are simple
    /// `$var` references; produces template start/middle/end pieces.
    Template,
    /// Inside a quote-delimited interpolated string.
    InString(StringKind),
    /// Inside a `${…}` or `{$…}` embedded expression within a string; the
    /// depth counts unbalanced open braces.
    InStringScript(StringKind, u8),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StringKind {
    Double,
    Single,
    Backtick,
    /// The label extent identifies the terminator line.
    Heredoc { label_start: u32, label_len: u16 },
}

impl StringKind {
    fn close_quote(self) -> Option<u8> {
        match self {
            StringKind::Double => Some(b'"'),
            StringKind::Single => Some(b'\''),
            StringKind::Backtick => Some(b'`'),
            StringKind::Heredoc { .. } => None,
        }
    }
}

/// Opaque save/restore point for the token stream. Copying it captures the
/// complete scanner state, which keeps lookahead save/restore O(1).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    pos: u32,
    mode: Mode,
}

impl Cursor {
    pub(crate) fn offset(&self) -> u32 {
        self.pos
    }
}

/// The token producer. Starts in HTML mode and switches modes as script
/// section markers and string delimiters go by. On exhaustion it returns
/// the end-of-file token indefinitely.
#[derive(Debug)]
pub struct Lexer<'a> {
    source: &'a str,
    pos: u32,
    mode: Mode,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            pos: 0,
            mode: Mode::Html,
        }
    }

    pub fn position(&self) -> Cursor {
        Cursor {
            pos: self.pos,
            mode: self.mode,
        }
    }

    pub fn seek(&mut self, cursor: Cursor) {
        self.pos = cursor.pos;
        self.mode = cursor.mode;
    }

    /// The cursor one past the last byte. Lookahead uses this to cut probes
    /// short instead of scanning the end-of-file token repeatedly.
    pub fn end_position(&self) -> Cursor {
        Cursor {
            pos: self.source.len() as u32,
            mode: self.mode,
        }
    }

    /// Re-interpret the stream right after `token` under interpolated-string
    /// lexical mode and return the token found there. Used when a variable
    /// reference inside a template string has just been consumed.
    pub fn rescan_template(&mut self, token: Token) -> Token {
        self.pos = token.end();
        self.mode = Mode::Template;
        self.scan_next()
    }

    /// Produce the next token.
    pub fn scan_next(&mut self) -> Token {
        match self.mode {
            Mode::Html => self.scan_html(),
            Mode::Script | Mode::InStringScript(..) => self.scan_script(),
            Mode::Template => self.scan_template_part(),
            Mode::InString(kind) => self.scan_in_string(kind),
        }
    }

    // Byte helpers. All mode transitions are decided on ASCII bytes, so
    // multi-byte UTF-8 sequences can never split a token boundary.

    fn len(&self) -> u32 {
        self.source.len() as u32
    }

    fn byte(&self, at: u32) -> u8 {
        *self.source.as_bytes().get(at as usize).unwrap_or(&0)
    }

    fn eof_token(&self, full_start: u32) -> Token {
        Token::new(TokenKind::EndOfFile, full_start, self.len(), 0)
    }

    fn token_from(&self, kind: TokenKind, full_start: u32, start: u32) -> Token {
        Token::new(kind, full_start, start, self.pos - start)
    }

    // HTML mode

    fn scan_html(&mut self) -> Token {
        let start = self.pos;
        if start >= self.len() {
            return self.eof_token(start);
        }
        if let Some(tag_len) = self.script_start_tag_len(start) {
            self.pos = start + tag_len;
            self.mode = Mode::Script;
            return self.token_from(TokenKind::ScriptSectionStartTag, start, start);
        }
        while self.pos < self.len() && self.script_start_tag_len(self.pos).is_none() {
            self.pos += 1;
        }
        self.token_from(TokenKind::InlineHtml, start, start)
    }

    fn script_start_tag_len(&self, at: u32) -> Option<u32> {
        let rest = &self.source.as_bytes()[at as usize..];
        if rest.len() >= 5 && rest[..5].eq_ignore_ascii_case(b"<?php") {
            Some(5)
        } else if rest.starts_with(b"<?=") {
            Some(3)
        } else if rest.starts_with(b"<?") {
            Some(2)
        } else {
            None
        }
    }

    // Script mode (also used inside `${…}` / `{$…}` with brace tracking)

    fn scan_script(&mut self) -> Token {
        let full_start = self.pos;
        self.skip_trivia();
        let start = self.pos;
        if start >= self.len() {
            return self.eof_token(full_start);
        }

        let b = self.byte(start);
        match b {
            b'?' => {
                if self.mode == Mode::Script && self.byte(start + 1) == b'>' {
                    self.pos = start + 2;
                    self.mode = Mode::Html;
                    return self.token_from(TokenKind::ScriptSectionEndTag, full_start, start);
                }
                if self.byte(start + 1) == b'?' {
                    self.punct(TokenKind::QuestionQuestion, full_start, start, 2)
                } else {
                    self.punct(TokenKind::Question, full_start, start, 1)
                }
            }
            b'$' => {
                if is_name_start(self.byte(start + 1)) {
                    self.pos = start + 1;
                    self.scan_name_tail();
                    self.token_from(TokenKind::VariableName, full_start, start)
                } else {
                    self.punct(TokenKind::Dollar, full_start, start, 1)
                }
            }
            b'\'' => self.scan_single_quoted(full_start, start),
            b'"' => self.scan_double_quoted(full_start, start),
            b'`' => {
                self.pos = start + 1;
                if !self.in_string_script() {
                    self.mode = Mode::InString(StringKind::Backtick);
                }
                self.token_from(TokenKind::Backtick, full_start, start)
            }
            b'0'..=b'9' => self.scan_number(full_start, start),
            b'.' if self.byte(start + 1).is_ascii_digit() => self.scan_number(full_start, start),
            c if is_name_start(c) => {
                self.pos = start + 1;
                self.scan_name_tail();
                let text = &self.source[start as usize..self.pos as usize];
                let kind = keyword_or_reserved(text).unwrap_or(TokenKind::Name);
                self.token_from(kind, full_start, start)
            }
            _ => self.scan_operator(full_start, start),
        }
    }

    fn in_string_script(&self) -> bool {
        matches!(self.mode, Mode::InStringScript(..))
    }

    fn punct(&mut self, kind: TokenKind, full_start: u32, start: u32, len: u32) -> Token {
        self.pos = start + len;
        self.token_from(kind, full_start, start)
    }

    fn scan_operator(&mut self, full_start: u32, start: u32) -> Token {
        let b = self.byte(start);
        let b1 = self.byte(start + 1);
        let b2 = self.byte(start + 2);
        let (kind, len) = match b {
            b'+' => match b1 {
                b'+' => (TokenKind::PlusPlus, 2),
                b'=' => (TokenKind::PlusEquals, 2),
                _ => (TokenKind::Plus, 1),
            },
            b'-' => match b1 {
                b'-' => (TokenKind::MinusMinus, 2),
                b'=' => (TokenKind::MinusEquals, 2),
                b'>' => (TokenKind::Arrow, 2),
                _ => (TokenKind::Minus, 1),
            },
            b'*' => match (b1, b2) {
                (b'*', b'=') => (TokenKind::AsteriskAsteriskEquals, 3),
                (b'*', _) => (TokenKind::AsteriskAsterisk, 2),
                (b'=', _) => (TokenKind::AsteriskEquals, 2),
                _ => (TokenKind::Asterisk, 1),
            },
            b'/' => match b1 {
                b'=' => (TokenKind::SlashEquals, 2),
                _ => (TokenKind::Slash, 1),
            },
            b'%' => match b1 {
                b'=' => (TokenKind::PercentEquals, 2),
                _ => (TokenKind::Percent, 1),
            },
            b'=' => match (b1, b2) {
                (b'=', b'=') => (TokenKind::EqualsEqualsEquals, 3),
                (b'=', _) => (TokenKind::EqualsEquals, 2),
                (b'>', _) => (TokenKind::DoubleArrow, 2),
                _ => (TokenKind::Equals, 1),
            },
            b'!' => match (b1, b2) {
                (b'=', b'=') => (TokenKind::ExclamationEqualsEquals, 3),
                (b'=', _) => (TokenKind::ExclamationEquals, 2),
                _ => (TokenKind::Exclamation, 1),
            },
            b'<' => {
                if b1 == b'<' && b2 == b'<' {
                    return self.scan_heredoc_start(full_start, start);
                }
                match (b1, b2) {
                    (b'=', b'>') => (TokenKind::LessThanEqualsGreaterThan, 3),
                    (b'<', b'=') => (TokenKind::LessThanLessThanEquals, 3),
                    (b'<', _) => (TokenKind::LessThanLessThan, 2),
                    (b'=', _) => (TokenKind::LessThanEquals, 2),
                    (b'>', _) => (TokenKind::LessThanGreaterThan, 2),
                    _ => (TokenKind::LessThan, 1),
                }
            }
            b'>' => match (b1, b2) {
                (b'>', b'=') => (TokenKind::GreaterThanGreaterThanEquals, 3),
                (b'>', _) => (TokenKind::GreaterThanGreaterThan, 2),
                (b'=', _) => (TokenKind::GreaterThanEquals, 2),
                _ => (TokenKind::GreaterThan, 1),
            },
            b'&' => match b1 {
                b'&' => (TokenKind::AmpersandAmpersand, 2),
                b'=' => (TokenKind::AmpersandEquals, 2),
                _ => (TokenKind::Ampersand, 1),
            },
            b'|' => match b1 {
                b'|' => (TokenKind::BarBar, 2),
                b'=' => (TokenKind::BarEquals, 2),
                _ => (TokenKind::Bar, 1),
            },
            b'^' => match b1 {
                b'=' => (TokenKind::CaretEquals, 2),
                _ => (TokenKind::Caret, 1),
            },
            b'.' => match (b1, b2) {
                (b'.', b'.') => (TokenKind::DotDotDot, 3),
                (b'=', _) => (TokenKind::DotEquals, 2),
                _ => (TokenKind::Dot, 1),
            },
            b':' => match b1 {
                b':' => (TokenKind::ColonColon, 2),
                _ => (TokenKind::Colon, 1),
            },
            b';' => (TokenKind::Semicolon, 1),
            b',' => (TokenKind::Comma, 1),
            b'(' => (TokenKind::OpenParen, 1),
            b')' => (TokenKind::CloseParen, 1),
            b'[' => (TokenKind::OpenBracket, 1),
            b']' => (TokenKind::CloseBracket, 1),
            b'{' => {
                if let Mode::InStringScript(kind, depth) = self.mode {
                    self.mode = Mode::InStringScript(kind, depth.saturating_add(1));
                }
                (TokenKind::OpenBrace, 1)
            }
            b'}' => {
                if let Mode::InStringScript(kind, depth) = self.mode {
                    if depth <= 1 {
                        self.mode = Mode::InString(kind);
                    } else {
                        self.mode = Mode::InStringScript(kind, depth - 1);
                    }
                }
                (TokenKind::CloseBrace, 1)
            }
            b'~' => (TokenKind::Tilde, 1),
            b'@' => (TokenKind::At, 1),
            b'\\' => (TokenKind::Backslash, 1),
            _ => (TokenKind::Unknown, 1),
        };
        self.punct(kind, full_start, start, len)
    }

    fn scan_name_tail(&mut self) {
        while is_name_char(self.byte(self.pos)) && self.pos < self.len() {
            self.pos += 1;
        }
    }

    fn skip_trivia(&mut self) {
        loop {
            let b = self.byte(self.pos);
            match b {
                b' ' | b'\t' | b'\r' | b'\n' => self.pos += 1,
                b'#' => self.skip_line_comment(),
                b'/' if self.byte(self.pos + 1) == b'/' => self.skip_line_comment(),
                b'/' if self.byte(self.pos + 1) == b'*' => {
                    self.pos += 2;
                    while self.pos < self.len() {
                        if self.byte(self.pos) == b'*' && self.byte(self.pos + 1) == b'/' {
                            self.pos += 2;
                            break;
                        }
                        self.pos += 1;
                    }
                }
                _ => break,
            }
            if self.pos >= self.len() {
                break;
            }
        }
    }

    /// Line comments end at the newline or right before a `?>`, which stays
    /// significant so the script section can close.
    fn skip_line_comment(&mut self) {
        while self.pos < self.len() {
            let b = self.byte(self.pos);
            if b == b'\n' {
                self.pos += 1;
                break;
            }
            if b == b'?' && self.byte(self.pos + 1) == b'>' && self.mode == Mode::Script {
                break;
            }
            self.pos += 1;
        }
    }

    fn scan_number(&mut self, full_start: u32, start: u32) -> Token {
        let mut i = start;
        let mut float = false;
        if self.byte(i) == b'0' && matches!(self.byte(i + 1), b'x' | b'X') {
            i += 2;
            while self.byte(i).is_ascii_hexdigit() {
                i += 1;
            }
            self.pos = i;
            return self.token_from(TokenKind::IntegerLiteral, full_start, start);
        }
        if self.byte(i) == b'0' && matches!(self.byte(i + 1), b'b' | b'B') {
            i += 2;
            while matches!(self.byte(i), b'0' | b'1') {
                i += 1;
            }
            self.pos = i;
            return self.token_from(TokenKind::IntegerLiteral, full_start, start);
        }
        while self.byte(i).is_ascii_digit() {
            i += 1;
        }
        if self.byte(i) == b'.' && self.byte(i + 1).is_ascii_digit() {
            float = true;
            i += 1;
            while self.byte(i).is_ascii_digit() {
                i += 1;
            }
        }
        if matches!(self.byte(i), b'e' | b'E') {
            let mut j = i + 1;
            if matches!(self.byte(j), b'+' | b'-') {
                j += 1;
            }
            if self.byte(j).is_ascii_digit() {
                float = true;
                i = j;
                while self.byte(i).is_ascii_digit() {
                    i += 1;
                }
            }
        }
        self.pos = i;
        let kind = if float {
            TokenKind::FloatingLiteral
        } else {
            TokenKind::IntegerLiteral
        };
        self.token_from(kind, full_start, start)
    }

    fn scan_single_quoted(&mut self, full_start: u32, start: u32) -> Token {
        let mut i = start + 1;
        while i < self.len() {
            match self.byte(i) {
                b'\\' => i += 2,
                b'\'' => {
                    self.pos = i + 1;
                    return self.token_from(TokenKind::StringLiteral, full_start, start);
                }
                _ => i += 1,
            }
        }
        if self.in_string_script() {
            // Unterminated inside an embedded expression: swallow the rest
            // rather than losing the enclosing string state.
            self.pos = self.len();
            return self.token_from(TokenKind::StringLiteral, full_start, start);
        }
        self.pos = start + 1;
        self.mode = Mode::InString(StringKind::Single);
        self.token_from(TokenKind::SingleQuote, full_start, start)
    }

    /// Classify a double-quoted string by scanning ahead to its close quote:
    /// no interpolation at all is a single literal token; only simple `$var`
    /// interpolation takes the template route; `${`/`{$` or an unterminated
    /// string take the quote-delimited route.
    fn scan_double_quoted(&mut self, full_start: u32, start: u32) -> Token {
        let mut i = start + 1;
        let mut terminated = false;
        let mut simple_interp_at = None;
        let mut braced_interp = false;
        while i < self.len() {
            match self.byte(i) {
                b'\\' => i += 2,
                b'"' => {
                    terminated = true;
                    break;
                }
                b'$' if is_name_start(self.byte(i + 1)) => {
                    if simple_interp_at.is_none() {
                        simple_interp_at = Some(i);
                    }
                    i += 1;
                }
                b'$' if self.byte(i + 1) == b'{' => {
                    braced_interp = true;
                    i += 2;
                }
                b'{' if self.byte(i + 1) == b'$' => {
                    braced_interp = true;
                    i += 1;
                }
                _ => i += 1,
            }
        }

        if self.in_string_script() {
            // No nested mode switches inside an embedded expression; take
            // the whole thing (interpolated or not) as one literal.
            self.pos = if terminated { i + 1 } else { self.len() };
            return self.token_from(TokenKind::StringLiteral, full_start, start);
        }
        if !terminated || braced_interp {
            self.pos = start + 1;
            self.mode = Mode::InString(StringKind::Double);
            return self.token_from(TokenKind::DoubleQuote, full_start, start);
        }
        if let Some(dollar) = simple_interp_at {
            self.pos = dollar;
            self.mode = Mode::Template;
            return self.token_from(TokenKind::TemplateStringStart, full_start, start);
        }
        self.pos = i + 1;
        self.token_from(TokenKind::StringLiteral, full_start, start)
    }

    fn scan_heredoc_start(&mut self, full_start: u32, start: u32) -> Token {
        let mut i = start + 3;
        while matches!(self.byte(i), b' ' | b'\t') {
            i += 1;
        }
        let quote = match self.byte(i) {
            b'\'' | b'"' => {
                let q = self.byte(i);
                i += 1;
                Some(q)
            }
            _ => None,
        };
        let label_start = i;
        while is_name_char(self.byte(i)) && i < self.len() {
            i += 1;
        }
        let label_len = i - label_start;
        let mut end = i;
        if let Some(q) = quote {
            if self.byte(end) != q {
                // Not a heredoc opener after all.
                return self.punct(TokenKind::LessThanLessThan, full_start, start, 2);
            }
            end += 1;
        }
        if label_len == 0 || !matches!(self.byte(end), b'\r' | b'\n') {
            return self.punct(TokenKind::LessThanLessThan, full_start, start, 2);
        }

        if quote == Some(b'\'') {
            // Nowdoc: no interpolation, one literal token through the
            // terminator label.
            let label = &self.source[label_start as usize..i as usize];
            self.pos = self
                .heredoc_end_from(end, label)
                .map(|(_, label_end)| label_end)
                .unwrap_or_else(|| self.len());
            return self.token_from(TokenKind::StringLiteral, full_start, start);
        }

        self.pos = end;
        self.mode = Mode::InString(StringKind::Heredoc {
            label_start,
            label_len: label_len as u16,
        });
        self.token_from(TokenKind::HeredocStart, full_start, start)
    }

    /// Find the terminator line of a heredoc body starting at `from`.
    /// Returns the offsets of the line start and of the end of the label.
    fn heredoc_end_from(&self, from: u32, label: &str) -> Option<(u32, u32)> {
        let bytes = self.source.as_bytes();
        let mut i = from;
        while i < self.len() {
            if bytes[i as usize] == b'\n' {
                let mut j = i + 1;
                while matches!(self.byte(j), b' ' | b'\t') {
                    j += 1;
                }
                let line_start = i + 1;
                let label_end = j + label.len() as u32;
                if self.source[j as usize..].starts_with(label)
                    && !is_name_char(self.byte(label_end))
                {
                    return Some((line_start, label_end));
                }
            }
            i += 1;
        }
        None
    }

    fn heredoc_label(&self, kind: StringKind) -> &str {
        match kind {
            StringKind::Heredoc {
                label_start,
                label_len,
            } => &self.source[label_start as usize..(label_start + label_len as u32) as usize],
            _ => "",
        }
    }

    // Template mode: inside a `"…"` with only simple `$var` interpolation.

    fn scan_template_part(&mut self) -> Token {
        let start = self.pos;
        if start >= self.len() {
            return self.eof_token(start);
        }
        if self.byte(start) == b'$' && is_name_start(self.byte(start + 1)) {
            self.pos = start + 1;
            self.scan_name_tail();
            return self.token_from(TokenKind::VariableName, start, start);
        }
        let mut i = start;
        while i < self.len() {
            match self.byte(i) {
                b'\\' => i += 2,
                b'"' => {
                    self.pos = i + 1;
                    self.mode = Mode::Script;
                    return self.token_from(TokenKind::TemplateStringEnd, start, start);
                }
                b'$' if is_name_start(self.byte(i + 1)) => {
                    self.pos = i;
                    return self.token_from(TokenKind::TemplateStringMiddle, start, start);
                }
                _ => i += 1,
            }
        }
        // Unterminated: the final piece runs to the end of input.
        self.pos = self.len();
        self.mode = Mode::Script;
        self.token_from(TokenKind::TemplateStringEnd, start, start)
    }

    // Quote-delimited interpolated strings.

    fn scan_in_string(&mut self, kind: StringKind) -> Token {
        let start = self.pos;
        if start >= self.len() {
            return self.eof_token(start);
        }
        if let Some(close) = kind.close_quote() {
            if self.byte(start) == close {
                self.pos = start + 1;
                self.mode = Mode::Script;
                let kind = match close {
                    b'"' => TokenKind::DoubleQuote,
                    b'\'' => TokenKind::SingleQuote,
                    _ => TokenKind::Backtick,
                };
                return self.token_from(kind, start, start);
            }
        }
        if let StringKind::Heredoc { .. } = kind {
            let label = self.heredoc_label(kind);
            if (start == 0 || self.byte(start - 1) == b'\n') && !label.is_empty() {
                let mut j = start;
                while matches!(self.byte(j), b' ' | b'\t') {
                    j += 1;
                }
                let label_end = j + label.len() as u32;
                if self.source[j as usize..].starts_with(label)
                    && !is_name_char(self.byte(label_end))
                {
                    self.pos = label_end;
                    self.mode = Mode::Script;
                    return self.token_from(TokenKind::HeredocEnd, start, start);
                }
            }
        }

        let interpolates = !matches!(kind, StringKind::Single);
        if interpolates {
            if self.byte(start) == b'$' && is_name_start(self.byte(start + 1)) {
                self.pos = start + 1;
                self.scan_name_tail();
                return self.token_from(TokenKind::VariableName, start, start);
            }
            if self.byte(start) == b'$' && self.byte(start + 1) == b'{' {
                self.pos = start + 2;
                self.mode = Mode::InStringScript(kind, 1);
                return self.token_from(TokenKind::DollarOpenBrace, start, start);
            }
            if self.byte(start) == b'{' && self.byte(start + 1) == b'$' {
                self.pos = start + 1;
                self.mode = Mode::InStringScript(kind, 1);
                return self.token_from(TokenKind::OpenBraceDollar, start, start);
            }
        }

        // Literal run: everything up to the next interpolation point or
        // terminator. Always consumes at least one byte.
        let mut i = start;
        while i < self.len() {
            let b = self.byte(i);
            if b == b'\\' && !matches!(kind, StringKind::Heredoc { .. }) {
                i += 2;
                continue;
            }
            if b == b'\n' && matches!(kind, StringKind::Heredoc { .. }) {
                // Stop after each newline so the terminator check above
                // sees line starts.
                i += 1;
                break;
            }
            if i > start {
                if Some(b) == kind.close_quote() {
                    break;
                }
                if interpolates
                    && ((b == b'$' && (is_name_start(self.byte(i + 1)) || self.byte(i + 1) == b'{'))
                        || (b == b'{' && self.byte(i + 1) == b'$'))
                {
                    break;
                }
            }
            i += 1;
        }
        self.pos = i.min(self.len());
        self.token_from(TokenKind::EncapsedAndWhitespace, start, start)
    }
}

fn is_name_start(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'_' || b >= 0x80
}

fn is_name_char(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_' || b >= 0x80
}

#[cfg(test)]
mod test {
    use super::{Lexer, Token, TokenKind};

    fn lex(source: &str) -> Vec<Token> {
        let mut lexer = Lexer::new(source);
        let mut tokens = Vec::new();
        loop {
            let token = lexer.scan_next();
            let done = token.kind == TokenKind::EndOfFile;
            tokens.push(token);
            if done {
                break;
            }
        }
        tokens
    }

    fn kinds(source: &str) -> Vec<TokenKind> {
        lex(source).into_iter().map(|t| t.kind).collect()
    }

    #[test]
    fn html_then_script() {
        assert_eq!(
            kinds("<p><?php $a;"),
            vec![
                TokenKind::InlineHtml,
                TokenKind::ScriptSectionStartTag,
                TokenKind::VariableName,
                TokenKind::Semicolon,
                TokenKind::EndOfFile,
            ]
        );
    }

    #[test]
    fn trivia_attaches_to_following_token() {
        let tokens = lex("<?php  // note\n  $a;");
        let var = tokens[1];
        assert_eq!(var.kind, TokenKind::VariableName);
        assert_eq!(var.full_start, 5);
        assert_eq!(var.text("<?php  // note\n  $a;"), "$a");
    }

    #[test]
    fn full_text_tiles_the_source() {
        let source = "<?php /* c */ $a = 1 + 2.5; ?> tail";
        let rebuilt: std::string::String =
            lex(source).iter().map(|t| t.full_text(source)).collect();
        assert_eq!(rebuilt, source);
    }

    #[test]
    fn operators_longest_match() {
        assert_eq!(
            kinds("<?php $a <=> $b ** $c **= 2 <<= 1;"),
            vec![
                TokenKind::ScriptSectionStartTag,
                TokenKind::VariableName,
                TokenKind::LessThanEqualsGreaterThan,
                TokenKind::VariableName,
                TokenKind::AsteriskAsterisk,
                TokenKind::VariableName,
                TokenKind::AsteriskAsteriskEquals,
                TokenKind::IntegerLiteral,
                TokenKind::LessThanLessThanEquals,
                TokenKind::IntegerLiteral,
                TokenKind::Semicolon,
                TokenKind::EndOfFile,
            ]
        );
    }

    #[test]
    fn keywords_resolve_and_names_do_not() {
        assert_eq!(
            kinds("<?php While $exit exit;"),
            vec![
                TokenKind::ScriptSectionStartTag,
                TokenKind::While,
                TokenKind::VariableName,
                TokenKind::Exit,
                TokenKind::Semicolon,
                TokenKind::EndOfFile,
            ]
        );
    }

    #[test]
    fn plain_double_quoted_string_is_one_token() {
        assert_eq!(
            kinds(r#"<?php "no vars";"#),
            vec![
                TokenKind::ScriptSectionStartTag,
                TokenKind::StringLiteral,
                TokenKind::Semicolon,
                TokenKind::EndOfFile,
            ]
        );
    }

    #[test]
    fn simple_interpolation_takes_template_route() {
        assert_eq!(
            kinds(r#"<?php "hello $name world";"#),
            vec![
                TokenKind::ScriptSectionStartTag,
                TokenKind::TemplateStringStart,
                TokenKind::VariableName,
                TokenKind::TemplateStringEnd,
                TokenKind::Semicolon,
                TokenKind::EndOfFile,
            ]
        );
    }

    #[test]
    fn braced_interpolation_takes_quote_delimited_route() {
        assert_eq!(
            kinds(r#"<?php "a {$x} b";"#),
            vec![
                TokenKind::ScriptSectionStartTag,
                TokenKind::DoubleQuote,
                TokenKind::EncapsedAndWhitespace,
                TokenKind::OpenBraceDollar,
                TokenKind::VariableName,
                TokenKind::CloseBrace,
                TokenKind::EncapsedAndWhitespace,
                TokenKind::DoubleQuote,
                TokenKind::Semicolon,
                TokenKind::EndOfFile,
            ]
        );
    }

    #[test]
    fn dollar_brace_interpolation_scans_script_tokens() {
        assert_eq!(
            kinds(r#"<?php "${a[0]}";"#),
            vec![
                TokenKind::ScriptSectionStartTag,
                TokenKind::DoubleQuote,
                TokenKind::DollarOpenBrace,
                TokenKind::Name,
                TokenKind::OpenBracket,
                TokenKind::IntegerLiteral,
                TokenKind::CloseBracket,
                TokenKind::CloseBrace,
                TokenKind::DoubleQuote,
                TokenKind::Semicolon,
                TokenKind::EndOfFile,
            ]
        );
    }

    #[test]
    fn heredoc_lexes_start_body_end() {
        let source = "<?php $s = <<<EOT\nline $x\nEOT;\n";
        assert_eq!(
            kinds(source),
            vec![
                TokenKind::ScriptSectionStartTag,
                TokenKind::VariableName,
                TokenKind::Equals,
                TokenKind::HeredocStart,
                TokenKind::EncapsedAndWhitespace,
                TokenKind::VariableName,
                TokenKind::EncapsedAndWhitespace,
                TokenKind::HeredocEnd,
                TokenKind::Semicolon,
                TokenKind::EndOfFile,
            ]
        );
    }

    #[test]
    fn nowdoc_is_a_single_literal() {
        let source = "<?php $s = <<<'EOT'\nno $interp\nEOT;\n";
        assert_eq!(
            kinds(source),
            vec![
                TokenKind::ScriptSectionStartTag,
                TokenKind::VariableName,
                TokenKind::Equals,
                TokenKind::StringLiteral,
                TokenKind::Semicolon,
                TokenKind::EndOfFile,
            ]
        );
    }

    #[test]
    fn unterminated_single_quote_streams_to_eof() {
        assert_eq!(
            kinds("<?php 'abc"),
            vec![
                TokenKind::ScriptSectionStartTag,
                TokenKind::SingleQuote,
                TokenKind::EncapsedAndWhitespace,
                TokenKind::EndOfFile,
            ]
        );
    }

    #[test]
    fn lookahead_save_restore_is_lossless() {
        let source = "<?php $a + $b;";
        let mut lexer = Lexer::new(source);
        let first = lexer.scan_next();
        let saved = lexer.position();
        let probe1 = lexer.scan_next();
        let probe2 = lexer.scan_next();
        lexer.seek(saved);
        assert_eq!(lexer.scan_next(), probe1);
        assert_eq!(lexer.scan_next(), probe2);
        assert_eq!(first.kind, TokenKind::ScriptSectionStartTag);
    }

    #[test]
    fn eof_repeats() {
        let mut lexer = Lexer::new("");
        assert_eq!(lexer.scan_next().kind, TokenKind::EndOfFile);
        assert_eq!(lexer.scan_next().kind, TokenKind::EndOfFile);
    }
}
