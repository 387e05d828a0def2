mod context;
mod syntax_tree;

pub(crate) mod grammar;

use crate::cst::{Child, Node, NodeId, SourceFile};
use crate::lexer::Lexer;
use crate::{Token, TokenKind};
use triomphe::Arc;

pub(crate) use context::{parse_list, ParseContext};
pub(crate) use syntax_tree::Arena;
pub use syntax_tree::SyntaxTree;

/// Parse PHP source text into an error-tolerant concrete syntax tree.
///
/// The parser never fails: malformed input surfaces as missing and skipped
/// tokens inside the tree, and every byte of the input is covered by some
/// leaf.
///
/// ## Example
///
/// ```rust
/// use php_parser::Parser;
///
/// let source = "<?php
/// function greet($name) {
///     return \"hello\" . $name;
/// }
/// ";
/// let tree = Parser::new(source).parse();
///
/// // The tree reproduces the source byte for byte.
/// let rebuilt: String = tree
///     .tokens()
///     .iter()
///     .map(|token| tree.full_text(token))
///     .collect();
/// assert_eq!(rebuilt, source);
/// ```
#[derive(Debug)]
pub struct Parser<'input> {
    input: &'input str,
    lexer: Lexer<'input>,
    /// One-token window over the stream.
    pub(crate) token: Token,
    pub(crate) arena: Arena,
    /// Bitset of the list contexts currently on the stack.
    pub(crate) contexts: context::ContextFlags,
}

/// One step of a lookahead probe: a single kind, a set of kinds, or the
/// name-or-keyword class used by the function-declaration disambiguation.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Lookahead {
    Kind(TokenKind),
    AnyOf(&'static [TokenKind]),
    NameOrKeyword,
}

impl Lookahead {
    fn matches(self, kind: TokenKind) -> bool {
        match self {
            Lookahead::Kind(expected) => kind == expected,
            Lookahead::AnyOf(expected) => expected.contains(&kind),
            Lookahead::NameOrKeyword => kind.is_name_like(),
        }
    }
}

impl<'input> Parser<'input> {
    pub fn new(input: &'input str) -> Self {
        let mut lexer = Lexer::new(input);
        let token = lexer.scan_next();
        Self {
            input,
            lexer,
            token,
            arena: Arena::new(),
            contexts: context::ContextFlags::empty(),
        }
    }

    /// Parse the whole input as one source file.
    pub fn parse(mut self) -> SyntaxTree {
        let mut statements = Vec::new();
        if !self.check(TokenKind::EndOfFile) {
            // Anything before the first statement, including a bare
            // `<?php` tag, is a leading inline-HTML island.
            let island = grammar::source::inline_html(&mut self);
            statements.push(Child::Node(island));
        }
        statements.extend(context::parse_list(&mut self, ParseContext::SourceElements));
        let end_of_file = self.eat(TokenKind::EndOfFile);
        let root = self.arena.alloc(SourceFile {
            statements,
            end_of_file,
        });
        SyntaxTree::new(Arc::new(self.input.to_string()), self.arena, root)
    }

    // Token consumption primitives. The window always holds the next
    // unconsumed token; `advance` refills it from the lexer.

    pub(crate) fn check(&self, kind: TokenKind) -> bool {
        self.token.kind == kind
    }

    pub(crate) fn advance(&mut self) -> Token {
        let token = self.token;
        self.token = self.lexer.scan_next();
        token
    }

    /// Consume the current token if it has the expected kind; otherwise
    /// synthesize a zero-width missing token at the current position
    /// without consuming anything.
    pub(crate) fn eat(&mut self, kind: TokenKind) -> Token {
        if self.token.kind == kind {
            self.advance()
        } else {
            Token::missing(kind, self.token.full_start)
        }
    }

    /// Like [`eat`](Self::eat) for several acceptable kinds; a synthesized
    /// token carries the first kind.
    pub(crate) fn eat_any(&mut self, kinds: &[TokenKind]) -> Token {
        if kinds.contains(&self.token.kind) {
            self.advance()
        } else {
            Token::missing(kinds[0], self.token.full_start)
        }
    }

    pub(crate) fn eat_optional(&mut self, kind: TokenKind) -> Option<Token> {
        if self.token.kind == kind {
            Some(self.advance())
        } else {
            None
        }
    }

    pub(crate) fn eat_optional_any(&mut self, kinds: &[TokenKind]) -> Option<Token> {
        if kinds.contains(&self.token.kind) {
            Some(self.advance())
        } else {
            None
        }
    }

    /// Consume the current token as recovery debris.
    pub(crate) fn skip_current(&mut self) -> Token {
        self.advance().into_skipped()
    }

    /// Probe whether the next tokens, starting with the current window,
    /// match `patterns`. Non-destructive: the lexer position and the window
    /// are restored whether or not the probe succeeds.
    pub(crate) fn lookahead(&mut self, patterns: &[Lookahead]) -> bool {
        let window = self.token;
        let saved = self.lexer.position();
        let end = self.lexer.end_position();

        let mut matched = true;
        for (i, pattern) in patterns.iter().enumerate() {
            if i > 0 {
                // Once the stream is exhausted further probes can only see
                // the end-of-file token, so stop pulling from the lexer.
                if self.token.kind != TokenKind::EndOfFile
                    || self.lexer.position().offset() < end.offset()
                {
                    self.token = self.lexer.scan_next();
                }
            }
            if !pattern.matches(self.token.kind) {
                matched = false;
                break;
            }
        }

        self.token = window;
        self.lexer.seek(saved);
        matched
    }

    /// Replace the window with a template-mode rescan of the stream right
    /// after `token`. Used by the template-string production.
    pub(crate) fn rescan_template_after(&mut self, token: Token) {
        self.token = self.lexer.rescan_template(token);
    }

    pub(crate) fn alloc(&mut self, node: impl Into<Node>) -> NodeId {
        self.arena.alloc(node)
    }
}
