use crate::cst::Child;
use crate::parser::{grammar, Parser};
use crate::TokenKind;
use bitflags::bitflags;

/// Identifies which homogeneous grammar list is being parsed. Each context
/// supplies a terminator predicate, a valid-starter predicate, and an
/// element parser; the list driver below is the same for all of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ParseContext {
    SourceElements,
    BlockStatements,
    ClassMembers,
    InterfaceMembers,
    TraitMembers,
    SwitchStatementElements,
    CaseStatementElements,
    WhileStatementElements,
    ForStatementElements,
    ForeachStatementElements,
    DeclareStatementElements,
    IfClause2Elements,
}

bitflags! {
    /// The set of contexts currently on the stack. The grammar never nests
    /// the same context kind twice without an intervening delimiter that
    /// resets it, so one bit per kind is enough.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub(crate) struct ContextFlags: u16 {
        const SOURCE_ELEMENTS = 1 << 0;
        const BLOCK_STATEMENTS = 1 << 1;
        const CLASS_MEMBERS = 1 << 2;
        const INTERFACE_MEMBERS = 1 << 3;
        const TRAIT_MEMBERS = 1 << 4;
        const SWITCH_STATEMENT_ELEMENTS = 1 << 5;
        const CASE_STATEMENT_ELEMENTS = 1 << 6;
        const WHILE_STATEMENT_ELEMENTS = 1 << 7;
        const FOR_STATEMENT_ELEMENTS = 1 << 8;
        const FOREACH_STATEMENT_ELEMENTS = 1 << 9;
        const DECLARE_STATEMENT_ELEMENTS = 1 << 10;
        const IF_CLAUSE_2_ELEMENTS = 1 << 11;
    }
}

impl ParseContext {
    const ALL: [ParseContext; 12] = [
        ParseContext::SourceElements,
        ParseContext::BlockStatements,
        ParseContext::ClassMembers,
        ParseContext::InterfaceMembers,
        ParseContext::TraitMembers,
        ParseContext::SwitchStatementElements,
        ParseContext::CaseStatementElements,
        ParseContext::WhileStatementElements,
        ParseContext::ForStatementElements,
        ParseContext::ForeachStatementElements,
        ParseContext::DeclareStatementElements,
        ParseContext::IfClause2Elements,
    ];

    fn flag(self) -> ContextFlags {
        match self {
            ParseContext::SourceElements => ContextFlags::SOURCE_ELEMENTS,
            ParseContext::BlockStatements => ContextFlags::BLOCK_STATEMENTS,
            ParseContext::ClassMembers => ContextFlags::CLASS_MEMBERS,
            ParseContext::InterfaceMembers => ContextFlags::INTERFACE_MEMBERS,
            ParseContext::TraitMembers => ContextFlags::TRAIT_MEMBERS,
            ParseContext::SwitchStatementElements => ContextFlags::SWITCH_STATEMENT_ELEMENTS,
            ParseContext::CaseStatementElements => ContextFlags::CASE_STATEMENT_ELEMENTS,
            ParseContext::WhileStatementElements => ContextFlags::WHILE_STATEMENT_ELEMENTS,
            ParseContext::ForStatementElements => ContextFlags::FOR_STATEMENT_ELEMENTS,
            ParseContext::ForeachStatementElements => ContextFlags::FOREACH_STATEMENT_ELEMENTS,
            ParseContext::DeclareStatementElements => ContextFlags::DECLARE_STATEMENT_ELEMENTS,
            ParseContext::IfClause2Elements => ContextFlags::IF_CLAUSE_2_ELEMENTS,
        }
    }

    /// Tokens that close this list. End-of-file terminates every context and
    /// is handled by the driver directly.
    fn is_terminator(self, kind: TokenKind) -> bool {
        match self {
            ParseContext::SourceElements => false,
            ParseContext::BlockStatements
            | ParseContext::ClassMembers
            | ParseContext::InterfaceMembers
            | ParseContext::TraitMembers => kind == TokenKind::CloseBrace,
            ParseContext::SwitchStatementElements => {
                matches!(kind, TokenKind::CloseBrace | TokenKind::EndSwitch)
            }
            ParseContext::CaseStatementElements => {
                matches!(kind, TokenKind::Case | TokenKind::Default)
            }
            ParseContext::WhileStatementElements => kind == TokenKind::EndWhile,
            ParseContext::ForStatementElements => kind == TokenKind::EndFor,
            ParseContext::ForeachStatementElements => kind == TokenKind::EndForeach,
            ParseContext::DeclareStatementElements => kind == TokenKind::EndDeclare,
            ParseContext::IfClause2Elements => {
                matches!(kind, TokenKind::ElseIf | TokenKind::Else | TokenKind::EndIf)
            }
        }
    }

    fn is_valid_starter(self, kind: TokenKind) -> bool {
        match self {
            ParseContext::SourceElements
            | ParseContext::BlockStatements
            | ParseContext::CaseStatementElements
            | ParseContext::WhileStatementElements
            | ParseContext::ForStatementElements
            | ParseContext::ForeachStatementElements
            | ParseContext::DeclareStatementElements
            | ParseContext::IfClause2Elements => grammar::statements::is_statement_start(kind),
            ParseContext::ClassMembers | ParseContext::TraitMembers => {
                grammar::classes::is_member_start(kind)
            }
            ParseContext::InterfaceMembers => grammar::classes::is_interface_member_start(kind),
            ParseContext::SwitchStatementElements => {
                matches!(kind, TokenKind::Case | TokenKind::Default)
            }
        }
    }

    fn parse_element(self, p: &mut Parser) -> Child {
        match self {
            ParseContext::SourceElements
            | ParseContext::BlockStatements
            | ParseContext::CaseStatementElements
            | ParseContext::WhileStatementElements
            | ParseContext::ForStatementElements
            | ParseContext::ForeachStatementElements
            | ParseContext::DeclareStatementElements
            | ParseContext::IfClause2Elements => grammar::statements::statement(p),
            ParseContext::ClassMembers | ParseContext::TraitMembers => {
                grammar::classes::class_member(p)
            }
            ParseContext::InterfaceMembers => grammar::classes::interface_member(p),
            ParseContext::SwitchStatementElements => grammar::statements::case_statement(p),
        }
    }
}

/// Parse one homogeneous list. The two-level decision — local starter
/// first, then deferral to any enclosing context that would accept the
/// token, then a one-token skip — keeps a missing close-brace from eating
/// the rest of the file.
pub(crate) fn parse_list(p: &mut Parser, context: ParseContext) -> Vec<Child> {
    let saved = p.contexts;
    p.contexts.insert(context.flag());

    let mut children = Vec::new();
    loop {
        let kind = p.token.kind;
        if kind == TokenKind::EndOfFile || context.is_terminator(kind) {
            break;
        }
        if context.is_valid_starter(kind) {
            let before = p.token.start;
            children.push(context.parse_element(p));
            debug_assert!(p.token.start > before, "list element must advance parsing");
            continue;
        }
        if is_valid_in_enclosing_contexts(p, kind) {
            break;
        }
        children.push(Child::Token(p.skip_current()));
    }

    p.contexts = saved;
    children
}

/// Would any context on the stack accept the current token, either as an
/// element starter or as its terminator? If so this list ends early and the
/// enclosing level deals with the token.
fn is_valid_in_enclosing_contexts(p: &Parser, kind: TokenKind) -> bool {
    ParseContext::ALL.iter().any(|context| {
        p.contexts.contains(context.flag())
            && (context.is_valid_starter(kind) || context.is_terminator(kind))
    })
}
