use crate::cst::{
    Child, ClassBaseClause, ClassConstDeclaration, ClassDeclaration, ClassInterfaceClause,
    ClassMembers, ConstDeclaration, ConstElement, InterfaceBaseClause, InterfaceDeclaration,
    MissingMemberDeclaration, NodeId, PropertyDeclaration, ScopedPropertyAccessExpression,
    TraitAdaptations, TraitDeclaration, TraitSelectOrAliasClause, TraitUseClause,
};
use crate::parser::grammar::{delimited_list, expressions, functions, namespaces, node};
use crate::parser::{parse_list, ParseContext, Parser};
use crate::{Token, TokenKind};

const MODIFIERS: &[TokenKind] = &[
    TokenKind::Public,
    TokenKind::Protected,
    TokenKind::Private,
    TokenKind::Static,
    TokenKind::Abstract,
    TokenKind::Final,
    TokenKind::Var,
];

pub(crate) fn is_member_start(kind: TokenKind) -> bool {
    MODIFIERS.contains(&kind)
        || matches!(
            kind,
            TokenKind::Const | TokenKind::Function | TokenKind::VariableName | TokenKind::Use
        )
}

/// Interfaces only carry constants and method signatures, so properties and
/// trait-use clauses are not starters; they defer to the enclosing context.
pub(crate) fn is_interface_member_start(kind: TokenKind) -> bool {
    MODIFIERS.contains(&kind) || matches!(kind, TokenKind::Const | TokenKind::Function)
}

fn modifier_list(p: &mut Parser) -> Vec<Token> {
    let mut modifiers = Vec::new();
    while let Some(modifier) = p.eat_optional_any(MODIFIERS) {
        modifiers.push(modifier);
    }
    modifiers
}

pub(crate) fn class_declaration(p: &mut Parser) -> Child {
    let mut modifiers = Vec::new();
    while let Some(modifier) = p.eat_optional_any(&[TokenKind::Abstract, TokenKind::Final]) {
        modifiers.push(modifier);
    }
    let class_keyword = p.eat(TokenKind::Class);
    let name = p.eat(TokenKind::Name);
    let base_clause = if p.check(TokenKind::Extends) {
        let extends_keyword = p.advance();
        let base_class = Child::Node(namespaces::qualified_name(p));
        Some(p.alloc(ClassBaseClause {
            extends_keyword,
            base_class,
        }))
    } else {
        None
    };
    let interface_clause = if p.check(TokenKind::Implements) {
        let implements_keyword = p.advance();
        let interface_list = namespaces::qualified_name_list(p);
        Some(p.alloc(ClassInterfaceClause {
            implements_keyword,
            interface_list,
        }))
    } else {
        None
    };
    let members = member_block(p, ParseContext::ClassMembers);
    node(
        p,
        ClassDeclaration {
            modifiers,
            class_keyword,
            name,
            base_clause,
            interface_clause,
            members,
        },
    )
}

pub(crate) fn interface_declaration(p: &mut Parser) -> Child {
    let interface_keyword = p.advance();
    let name = p.eat(TokenKind::Name);
    let base_clause = if p.check(TokenKind::Extends) {
        let extends_keyword = p.advance();
        let interface_list = namespaces::qualified_name_list(p);
        Some(p.alloc(InterfaceBaseClause {
            extends_keyword,
            interface_list,
        }))
    } else {
        None
    };
    let members = member_block(p, ParseContext::InterfaceMembers);
    node(
        p,
        InterfaceDeclaration {
            interface_keyword,
            name,
            base_clause,
            members,
        },
    )
}

pub(crate) fn trait_declaration(p: &mut Parser) -> Child {
    let trait_keyword = p.advance();
    let name = p.eat(TokenKind::Name);
    let members = member_block(p, ParseContext::TraitMembers);
    node(
        p,
        TraitDeclaration {
            trait_keyword,
            name,
            members,
        },
    )
}

fn member_block(p: &mut Parser, context: ParseContext) -> NodeId {
    let open_brace = p.eat(TokenKind::OpenBrace);
    let members = parse_list(p, context);
    let close_brace = p.eat(TokenKind::CloseBrace);
    p.alloc(ClassMembers {
        open_brace,
        members,
        close_brace,
    })
}

/// A class or trait member: a modifier prefix, then a const, method,
/// property, or trait-use clause. Modifiers that lead nowhere become a
/// `MissingMemberDeclaration` so they stay in the tree while the list
/// driver recovers.
pub(crate) fn class_member(p: &mut Parser) -> Child {
    let modifiers = modifier_list(p);
    match p.token.kind {
        TokenKind::Const => class_const_declaration(p, modifiers),
        TokenKind::Function => functions::method_declaration(p, modifiers),
        TokenKind::VariableName => property_declaration(p, modifiers),
        TokenKind::Use if modifiers.is_empty() => trait_use_clause(p),
        _ => node(p, MissingMemberDeclaration { modifiers }),
    }
}

/// Interface members are limited to constants and (abstract) methods.
pub(crate) fn interface_member(p: &mut Parser) -> Child {
    let modifiers = modifier_list(p);
    match p.token.kind {
        TokenKind::Const => class_const_declaration(p, modifiers),
        TokenKind::Function => functions::method_declaration(p, modifiers),
        _ => node(p, MissingMemberDeclaration { modifiers }),
    }
}

fn property_declaration(p: &mut Parser, modifiers: Vec<Token>) -> Child {
    let elements = delimited_list(
        p,
        TokenKind::Comma,
        |p| p.check(TokenKind::VariableName),
        expressions::expression,
    );
    let semicolon = p.eat(TokenKind::Semicolon);
    node(
        p,
        PropertyDeclaration {
            modifiers,
            elements,
            semicolon,
        },
    )
}

fn class_const_declaration(p: &mut Parser, modifiers: Vec<Token>) -> Child {
    let const_keyword = p.advance();
    let elements = const_element_list(p);
    let semicolon = p.eat(TokenKind::Semicolon);
    node(
        p,
        ClassConstDeclaration {
            modifiers,
            const_keyword,
            elements,
            semicolon,
        },
    )
}

/// Statement-level `const FOO = 1, BAR = 2;`.
pub(crate) fn const_declaration(p: &mut Parser) -> Child {
    let const_keyword = p.advance();
    let elements = const_element_list(p);
    let semicolon = p.eat(TokenKind::Semicolon);
    node(
        p,
        ConstDeclaration {
            const_keyword,
            elements,
            semicolon,
        },
    )
}

fn const_element_list(p: &mut Parser) -> Option<NodeId> {
    delimited_list(
        p,
        TokenKind::Comma,
        |p| p.check(TokenKind::Name),
        |p| {
            let name = p.eat(TokenKind::Name);
            let equals = p.eat(TokenKind::Equals);
            let assignment = expressions::expression(p);
            node(
                p,
                ConstElement {
                    name,
                    equals,
                    assignment,
                },
            )
        },
    )
}

fn trait_use_clause(p: &mut Parser) -> Child {
    let use_keyword = p.advance();
    let trait_names = namespaces::qualified_name_list(p);
    let (adaptations, semicolon) = if p.check(TokenKind::OpenBrace) {
        (Some(trait_adaptations(p)), None)
    } else {
        (None, Some(p.eat(TokenKind::Semicolon)))
    };
    node(
        p,
        TraitUseClause {
            use_keyword,
            trait_names,
            adaptations,
            semicolon,
        },
    )
}

/// The braced `insteadof`/`as` select-and-alias list, clauses delimited by
/// semicolons.
fn trait_adaptations(p: &mut Parser) -> NodeId {
    let open_brace = p.advance();
    let mut clauses = Vec::new();
    loop {
        match p.token.kind {
            TokenKind::CloseBrace | TokenKind::EndOfFile => break,
            kind if namespaces::is_qualified_name_start(kind) => {
                clauses.push(trait_select_or_alias_clause(p));
            }
            _ => clauses.push(Child::Token(p.skip_current())),
        }
    }
    let close_brace = p.eat(TokenKind::CloseBrace);
    p.alloc(TraitAdaptations {
        open_brace,
        clauses,
        close_brace,
    })
}

fn trait_select_or_alias_clause(p: &mut Parser) -> Child {
    let qualified = namespaces::qualified_name(p);
    let name = if p.check(TokenKind::ColonColon) {
        let double_colon = p.advance();
        let member_name = expressions::member_name(p);
        node(
            p,
            ScopedPropertyAccessExpression {
                scope_resolution_qualifier: Child::Node(qualified),
                double_colon,
                member_name,
            },
        )
    } else {
        Child::Node(qualified)
    };
    let keyword = p.eat_any(&[TokenKind::InsteadOf, TokenKind::As]);
    let modifiers = modifier_list(p);
    let target_names = namespaces::qualified_name_list(p);
    let semicolon = p.eat(TokenKind::Semicolon);
    node(
        p,
        TraitSelectOrAliasClause {
            name,
            keyword,
            modifiers,
            target_names,
            semicolon,
        },
    )
}

#[cfg(test)]
mod test {
    use crate::cst::{Child, Node, NodeKind};
    use crate::Parser;

    fn class_member_kinds(tree: &crate::SyntaxTree, class: Child) -> Vec<NodeKind> {
        let Child::Node(id) = class else {
            panic!("expected a node");
        };
        let Node::ClassDeclaration(class) = tree.node(id) else {
            panic!("expected a class declaration");
        };
        let Node::ClassMembers(members) = tree.node(class.members) else {
            panic!("expected a member block");
        };
        members
            .members
            .iter()
            .filter_map(|child| match child {
                Child::Node(id) => Some(tree.node(*id).kind()),
                Child::Token(_) => None,
            })
            .collect()
    }

    #[test]
    fn class_with_header_clauses_and_members() {
        let source = "<?php
        final class Repo extends Base implements Countable, ArrayAccess {
            const LIMIT = 10;
            public static $instances = [], $count = 0;
            protected function load() {}
            use Logging;
        }";
        let tree = Parser::new(source).parse();
        let class = tree.source_file().statements[1];
        assert_eq!(
            class_member_kinds(&tree, class),
            vec![
                NodeKind::ClassConstDeclaration,
                NodeKind::PropertyDeclaration,
                NodeKind::MethodDeclaration,
                NodeKind::TraitUseClause,
            ]
        );
    }

    #[test]
    fn modifiers_without_a_member_become_missing_member() {
        let source = "<?php class A { public }";
        let tree = Parser::new(source).parse();
        let class = tree.source_file().statements[1];
        assert_eq!(
            class_member_kinds(&tree, class),
            vec![NodeKind::MissingMemberDeclaration]
        );
    }

    #[test]
    fn missing_method_brace_does_not_eat_the_next_member() {
        let source = "<?php class A { function foo() { return; public function bar() {} }";
        let tree = Parser::new(source).parse();
        let class = tree.source_file().statements[1];
        assert_eq!(
            class_member_kinds(&tree, class),
            vec![NodeKind::MethodDeclaration, NodeKind::MethodDeclaration]
        );

        let Child::Node(id) = class else {
            panic!("expected a node");
        };
        let Node::ClassDeclaration(class) = tree.node(id) else {
            panic!("expected a class declaration");
        };
        let Node::ClassMembers(members) = tree.node(class.members) else {
            panic!("expected a member block");
        };
        // The one unmatched brace belongs to foo; the final `}` still
        // closes the class.
        assert!(!members.close_brace.is_missing());

        let Child::Node(foo) = members.members[0] else {
            panic!("expected a node");
        };
        let Node::MethodDeclaration(foo) = tree.node(foo) else {
            panic!("expected a method");
        };
        let Child::Node(body) = foo.compound_statement_or_semicolon else {
            panic!("expected a body");
        };
        let Node::CompoundStatement(body) = tree.node(body) else {
            panic!("expected a compound statement");
        };
        assert!(body.close_brace.is_missing());
    }

    #[test]
    fn interface_declaration_with_extends_list() {
        let source = "<?php interface A extends B, C { const X = 1; function f(); }";
        let tree = Parser::new(source).parse();
        let Child::Node(id) = tree.source_file().statements[1] else {
            panic!("expected a node");
        };
        let Node::InterfaceDeclaration(interface) = tree.node(id) else {
            panic!("expected an interface");
        };
        assert!(interface.base_clause.is_some());
        let Node::ClassMembers(members) = tree.node(interface.members) else {
            panic!("expected a member block");
        };
        assert_eq!(members.members.len(), 2);
    }

    #[test]
    fn trait_use_with_select_and_alias_clauses() {
        let source = "<?php class A {
            use B, C {
                B::big insteadof C;
                C::small as protected little;
            }
        }";
        let tree = Parser::new(source).parse();
        let class = tree.source_file().statements[1];
        let Child::Node(id) = class else {
            panic!("expected a node");
        };
        let Node::ClassDeclaration(class) = tree.node(id) else {
            panic!("expected a class declaration");
        };
        let Node::ClassMembers(members) = tree.node(class.members) else {
            panic!("expected a member block");
        };
        let Child::Node(use_clause) = members.members[0] else {
            panic!("expected a node");
        };
        let Node::TraitUseClause(use_clause) = tree.node(use_clause) else {
            panic!("expected a trait use clause");
        };
        let adaptations = use_clause.adaptations.expect("adaptations");
        let Node::TraitAdaptations(adaptations) = tree.node(adaptations) else {
            panic!("expected adaptations");
        };
        assert_eq!(adaptations.clauses.len(), 2);
        let Child::Node(alias) = adaptations.clauses[1] else {
            panic!("expected a node");
        };
        let Node::TraitSelectOrAliasClause(alias) = tree.node(alias) else {
            panic!("expected a select-or-alias clause");
        };
        assert_eq!(tree.text(&alias.keyword), "as");
        assert_eq!(alias.modifiers.len(), 1);
    }
}
