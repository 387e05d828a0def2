use crate::cst::{
    Child, NamespaceAliasingClause, NamespaceDefinition, NamespaceUseClause,
    NamespaceUseDeclaration, NamespaceUseGroupClause, NodeId, QualifiedName,
};
use crate::parser::grammar::{delimited_list, node, statements};
use crate::parser::{Lookahead, Parser};
use crate::{Token, TokenKind};

pub(crate) fn is_qualified_name_start(kind: TokenKind) -> bool {
    matches!(
        kind,
        TokenKind::Name | TokenKind::Backslash | TokenKind::Namespace
    )
}

/// A possibly-prefixed name: `Foo`, `\Foo\Bar`, `namespace\Foo`. The parts
/// sequence holds names and separators in source order; reserved words and
/// keywords routed here are taken as name parts.
pub(crate) fn qualified_name(p: &mut Parser) -> NodeId {
    let mut parts: Vec<Token> = Vec::new();
    if p.check(TokenKind::Namespace)
        && p.lookahead(&[
            Lookahead::Kind(TokenKind::Namespace),
            Lookahead::Kind(TokenKind::Backslash),
        ])
    {
        parts.push(p.advance());
    }
    if let Some(backslash) = p.eat_optional(TokenKind::Backslash) {
        parts.push(backslash);
    }
    if p.token.kind.is_name_like() {
        parts.push(p.advance());
    } else {
        parts.push(Token::missing(TokenKind::Name, p.token.full_start));
    }
    while p.check(TokenKind::Backslash) {
        if p.lookahead(&[
            Lookahead::Kind(TokenKind::Backslash),
            Lookahead::NameOrKeyword,
        ]) {
            parts.push(p.advance());
            parts.push(p.advance());
            continue;
        }
        parts.push(p.advance());
        // `Foo\{` is the head of a group use; leave the brace in place.
        if !p.check(TokenKind::OpenBrace) {
            parts.push(Token::missing(TokenKind::Name, p.token.full_start));
        }
        break;
    }
    p.alloc(QualifiedName { parts })
}

pub(crate) fn qualified_name_list(p: &mut Parser) -> Option<NodeId> {
    delimited_list(
        p,
        TokenKind::Comma,
        |p| is_qualified_name_start(p.token.kind),
        |p| Child::Node(qualified_name(p)),
    )
}

/// `namespace A\B;` or `namespace { … }`; the body slot is a compound
/// statement or the terminating semicolon.
pub(crate) fn namespace_definition(p: &mut Parser) -> Child {
    let namespace_keyword = p.advance();
    let name = if p.check(TokenKind::Name) {
        Some(qualified_name(p))
    } else {
        None
    };
    let compound_statement_or_semicolon = if p.check(TokenKind::OpenBrace) {
        statements::compound_statement(p)
    } else {
        Child::Token(p.eat(TokenKind::Semicolon))
    };
    node(
        p,
        NamespaceDefinition {
            namespace_keyword,
            name,
            compound_statement_or_semicolon,
        },
    )
}

pub(crate) fn namespace_use_declaration(p: &mut Parser) -> Child {
    let use_keyword = p.advance();
    let function_or_const = p.eat_optional_any(&[TokenKind::Function, TokenKind::Const]);
    let use_clauses = delimited_list(
        p,
        TokenKind::Comma,
        |p| is_qualified_name_start(p.token.kind),
        namespace_use_clause,
    );
    let semicolon = p.eat(TokenKind::Semicolon);
    node(
        p,
        NamespaceUseDeclaration {
            use_keyword,
            function_or_const,
            use_clauses,
            semicolon,
        },
    )
}

fn namespace_use_clause(p: &mut Parser) -> Child {
    let qualified_name = self::qualified_name(p);
    if p.check(TokenKind::OpenBrace) {
        let open_brace = Some(p.advance());
        let group_clauses = delimited_list(
            p,
            TokenKind::Comma,
            |p| {
                matches!(p.token.kind, TokenKind::Function | TokenKind::Const)
                    || is_qualified_name_start(p.token.kind)
            },
            namespace_use_group_clause,
        );
        let close_brace = Some(p.eat(TokenKind::CloseBrace));
        return node(
            p,
            NamespaceUseClause {
                qualified_name,
                open_brace,
                group_clauses,
                close_brace,
                alias_clause: None,
            },
        );
    }
    let alias_clause = aliasing_clause(p);
    node(
        p,
        NamespaceUseClause {
            qualified_name,
            open_brace: None,
            group_clauses: None,
            close_brace: None,
            alias_clause,
        },
    )
}

fn namespace_use_group_clause(p: &mut Parser) -> Child {
    let function_or_const = p.eat_optional_any(&[TokenKind::Function, TokenKind::Const]);
    let qualified_name = self::qualified_name(p);
    let alias_clause = aliasing_clause(p);
    node(
        p,
        NamespaceUseGroupClause {
            function_or_const,
            qualified_name,
            alias_clause,
        },
    )
}

fn aliasing_clause(p: &mut Parser) -> Option<NodeId> {
    let as_keyword = p.eat_optional(TokenKind::As)?;
    let name = p.eat(TokenKind::Name);
    Some(p.alloc(NamespaceAliasingClause { as_keyword, name }))
}

#[cfg(test)]
mod test {
    use crate::cst::{Child, Node, NodeKind};
    use crate::Parser;

    #[test]
    fn namespace_definition_with_name_and_semicolon() {
        let tree = Parser::new("<?php namespace App\\Core;").parse();
        let Child::Node(id) = tree.source_file().statements[1] else {
            panic!("expected a node");
        };
        let Node::NamespaceDefinition(definition) = tree.node(id) else {
            panic!("expected a namespace definition");
        };
        let name = definition.name.expect("name");
        let Node::QualifiedName(name) = tree.node(name) else {
            panic!("expected a qualified name");
        };
        assert_eq!(name.parts.len(), 3);
        assert!(matches!(
            definition.compound_statement_or_semicolon,
            Child::Token(_)
        ));
    }

    #[test]
    fn namespace_backslash_is_an_expression() {
        let tree = Parser::new("<?php namespace\\render();").parse();
        let Child::Node(id) = tree.source_file().statements[1] else {
            panic!("expected a node");
        };
        assert_eq!(tree.node(id).kind(), NodeKind::ExpressionStatement);
    }

    #[test]
    fn use_with_alias() {
        let tree = Parser::new("<?php use Foo\\Bar as Baz, Qux;").parse();
        let Child::Node(id) = tree.source_file().statements[1] else {
            panic!("expected a node");
        };
        let Node::NamespaceUseDeclaration(declaration) = tree.node(id) else {
            panic!("expected a use declaration");
        };
        let Node::DelimitedList(clauses) = tree.node(declaration.use_clauses.expect("clauses"))
        else {
            panic!("expected a clause list");
        };
        assert_eq!(clauses.children.len(), 3);
        let Child::Node(first) = clauses.children[0] else {
            panic!("expected a node");
        };
        let Node::NamespaceUseClause(first) = tree.node(first) else {
            panic!("expected a use clause");
        };
        assert!(first.alias_clause.is_some());
    }

    #[test]
    fn grouped_use_with_per_clause_qualifiers() {
        let tree =
            Parser::new("<?php use A\\B\\{C, function d, const E as F};").parse();
        let Child::Node(id) = tree.source_file().statements[1] else {
            panic!("expected a node");
        };
        let Node::NamespaceUseDeclaration(declaration) = tree.node(id) else {
            panic!("expected a use declaration");
        };
        let Node::DelimitedList(clauses) = tree.node(declaration.use_clauses.expect("clauses"))
        else {
            panic!("expected a clause list");
        };
        let Child::Node(clause) = clauses.children[0] else {
            panic!("expected a node");
        };
        let Node::NamespaceUseClause(clause) = tree.node(clause) else {
            panic!("expected a use clause");
        };
        assert!(clause.open_brace.is_some());
        let Node::DelimitedList(group) = tree.node(clause.group_clauses.expect("group")) else {
            panic!("expected group clauses");
        };
        // Three group clauses and two commas.
        assert_eq!(group.children.len(), 5);
        let Child::Node(last) = group.children[4] else {
            panic!("expected a node");
        };
        let Node::NamespaceUseGroupClause(last) = tree.node(last) else {
            panic!("expected a group clause");
        };
        assert!(last.function_or_const.is_some());
        assert!(last.alias_clause.is_some());
    }

    #[test]
    fn use_of_function_names() {
        let tree = Parser::new("<?php use function Foo\\strlen;").parse();
        let Child::Node(id) = tree.source_file().statements[1] else {
            panic!("expected a node");
        };
        let Node::NamespaceUseDeclaration(declaration) = tree.node(id) else {
            panic!("expected a use declaration");
        };
        assert!(declaration.function_or_const.is_some());
    }
}
