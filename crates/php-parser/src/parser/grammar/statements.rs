use crate::cst::{
    BreakOrContinueStatement, CaseStatement, CatchClause, Child, CompoundStatement,
    DeclareDirective, DeclareStatement, DoStatement, ElseClause, ElseIfClause, EmptyStatement,
    ExpressionStatement, FinallyClause, ForStatement, ForeachKey, ForeachStatement,
    ForeachValue, GlobalDeclaration, GotoStatement, IfStatement, NamedLabelStatement, NodeId,
    ReturnStatement, SwitchStatement, ThrowStatement, TryStatement, Variable, WhileStatement,
};
use crate::parser::grammar::{
    classes, delimited_list, expressions, functions, namespaces, node, source,
};
use crate::parser::{parse_list, Lookahead, ParseContext, Parser};
use crate::{Token, TokenKind};

pub(crate) fn is_statement_start(kind: TokenKind) -> bool {
    matches!(
        kind,
        TokenKind::OpenBrace
            | TokenKind::If
            | TokenKind::Switch
            | TokenKind::While
            | TokenKind::Do
            | TokenKind::For
            | TokenKind::Foreach
            | TokenKind::Goto
            | TokenKind::Continue
            | TokenKind::Break
            | TokenKind::Return
            | TokenKind::Throw
            | TokenKind::Try
            | TokenKind::Declare
            | TokenKind::Class
            | TokenKind::Interface
            | TokenKind::Trait
            | TokenKind::Namespace
            | TokenKind::Use
            | TokenKind::Global
            | TokenKind::Const
            | TokenKind::Abstract
            | TokenKind::Final
            | TokenKind::Semicolon
            | TokenKind::ScriptSectionEndTag
    ) || expressions::is_expression_start(kind)
}

/// Dispatch on the leading token to one of the statement productions.
/// Returns a token child only for the `abstract`/`final`-without-`class`
/// case, which is skipped outright so the enclosing list can retry.
pub(crate) fn statement(p: &mut Parser) -> Child {
    if p.token.kind == TokenKind::Function
        && (p.lookahead(&[
            Lookahead::Kind(TokenKind::Function),
            Lookahead::NameOrKeyword,
        ]) || p.lookahead(&[
            Lookahead::Kind(TokenKind::Function),
            Lookahead::Kind(TokenKind::Ampersand),
            Lookahead::NameOrKeyword,
        ]))
    {
        return functions::function_declaration(p);
    }
    if p.token.kind == TokenKind::Static
        && !p.lookahead(&[
            Lookahead::Kind(TokenKind::Static),
            Lookahead::AnyOf(&[
                TokenKind::Function,
                TokenKind::OpenParen,
                TokenKind::ColonColon,
            ]),
        ])
    {
        return functions::function_static_declaration(p);
    }
    if p.token.kind == TokenKind::Name
        && p.lookahead(&[
            Lookahead::Kind(TokenKind::Name),
            Lookahead::Kind(TokenKind::Colon),
        ])
    {
        let name = p.advance();
        let colon = p.advance();
        return node(p, NamedLabelStatement { name, colon });
    }
    match p.token.kind {
        TokenKind::OpenBrace => compound_statement(p),
        TokenKind::If => if_statement(p),
        TokenKind::Switch => switch_statement(p),
        TokenKind::While => while_statement(p),
        TokenKind::Do => do_statement(p),
        TokenKind::For => for_statement(p),
        TokenKind::Foreach => foreach_statement(p),
        TokenKind::Goto => {
            let goto_keyword = p.advance();
            let name = p.eat(TokenKind::Name);
            let semicolon = p.eat(TokenKind::Semicolon);
            node(
                p,
                GotoStatement {
                    goto_keyword,
                    name,
                    semicolon,
                },
            )
        }
        TokenKind::Break | TokenKind::Continue => {
            let keyword = p.advance();
            let breakout_level = p.eat_optional(TokenKind::IntegerLiteral);
            let semicolon = p.eat(TokenKind::Semicolon);
            node(
                p,
                BreakOrContinueStatement {
                    keyword,
                    breakout_level,
                    semicolon,
                },
            )
        }
        TokenKind::Return => {
            let return_keyword = p.advance();
            let expression = if expressions::is_expression_start(p.token.kind) {
                Some(expressions::expression(p))
            } else {
                None
            };
            let semicolon = p.eat(TokenKind::Semicolon);
            node(
                p,
                ReturnStatement {
                    return_keyword,
                    expression,
                    semicolon,
                },
            )
        }
        TokenKind::Throw => {
            let throw_keyword = p.advance();
            let expression = expressions::expression(p);
            let semicolon = p.eat(TokenKind::Semicolon);
            node(
                p,
                ThrowStatement {
                    throw_keyword,
                    expression,
                    semicolon,
                },
            )
        }
        TokenKind::Try => try_statement(p),
        TokenKind::Declare => declare_statement(p),
        TokenKind::Abstract | TokenKind::Final => {
            // Only a modifier when a class declaration actually follows;
            // anything else is debris at statement level.
            if p.lookahead(&[
                Lookahead::Kind(p.token.kind),
                Lookahead::Kind(TokenKind::Class),
            ]) {
                classes::class_declaration(p)
            } else {
                Child::Token(p.skip_current())
            }
        }
        TokenKind::Class => classes::class_declaration(p),
        TokenKind::Interface => classes::interface_declaration(p),
        TokenKind::Trait => classes::trait_declaration(p),
        TokenKind::Namespace => {
            // `namespace\Foo` is a relative qualified name, not a
            // definition.
            if p.lookahead(&[
                Lookahead::Kind(TokenKind::Namespace),
                Lookahead::Kind(TokenKind::Backslash),
            ]) {
                expression_statement(p)
            } else {
                namespaces::namespace_definition(p)
            }
        }
        TokenKind::Use => namespaces::namespace_use_declaration(p),
        TokenKind::Global => {
            let global_keyword = p.advance();
            let variables =
                delimited_list(p, TokenKind::Comma, is_simple_variable_start, simple_variable);
            let semicolon = p.eat(TokenKind::Semicolon);
            node(
                p,
                GlobalDeclaration {
                    global_keyword,
                    variables,
                    semicolon,
                },
            )
        }
        TokenKind::Const => classes::const_declaration(p),
        TokenKind::Semicolon => {
            let semicolon = p.advance();
            node(p, EmptyStatement { semicolon })
        }
        TokenKind::ScriptSectionEndTag => Child::Node(source::inline_html(p)),
        _ => expression_statement(p),
    }
}

fn expression_statement(p: &mut Parser) -> Child {
    let expression = expressions::expression_force(p);
    // A `?>` satisfies the trailing semicolon; it stays put and becomes the
    // next statement's inline-HTML island.
    let semicolon = if p.check(TokenKind::ScriptSectionEndTag) {
        None
    } else {
        Some(p.eat(TokenKind::Semicolon))
    };
    node(
        p,
        ExpressionStatement {
            expression,
            semicolon,
        },
    )
}

pub(crate) fn compound_statement(p: &mut Parser) -> Child {
    let open_brace = p.eat(TokenKind::OpenBrace);
    let statements = parse_list(p, ParseContext::BlockStatements);
    let close_brace = p.eat(TokenKind::CloseBrace);
    node(
        p,
        CompoundStatement {
            open_brace,
            statements,
            close_brace,
        },
    )
}

fn if_statement(p: &mut Parser) -> Child {
    let if_keyword = p.advance();
    let open_paren = p.eat(TokenKind::OpenParen);
    let condition = expressions::expression(p);
    let close_paren = p.eat(TokenKind::CloseParen);

    if let Some(colon) = p.eat_optional(TokenKind::Colon) {
        let statements = parse_list(p, ParseContext::IfClause2Elements);
        let mut elseif_clauses = Vec::new();
        while p.check(TokenKind::ElseIf) {
            elseif_clauses.push(elseif_clause(p, true));
        }
        let else_clause = if p.check(TokenKind::Else) {
            let else_keyword = p.advance();
            let colon = Some(p.eat(TokenKind::Colon));
            let statements = parse_list(p, ParseContext::IfClause2Elements);
            Some(p.alloc(ElseClause {
                else_keyword,
                colon,
                statements,
            }))
        } else {
            None
        };
        let endif_keyword = Some(p.eat(TokenKind::EndIf));
        let semicolon = Some(p.eat(TokenKind::Semicolon));
        return node(
            p,
            IfStatement {
                if_keyword,
                open_paren,
                condition,
                close_paren,
                colon: Some(colon),
                statements,
                elseif_clauses,
                else_clause,
                endif_keyword,
                semicolon,
            },
        );
    }

    let statements = vec![statement(p)];
    let mut elseif_clauses = Vec::new();
    while p.check(TokenKind::ElseIf) {
        elseif_clauses.push(elseif_clause(p, false));
    }
    let else_clause = if p.check(TokenKind::Else) {
        let else_keyword = p.advance();
        let statements = vec![statement(p)];
        Some(p.alloc(ElseClause {
            else_keyword,
            colon: None,
            statements,
        }))
    } else {
        None
    };
    node(
        p,
        IfStatement {
            if_keyword,
            open_paren,
            condition,
            close_paren,
            colon: None,
            statements,
            elseif_clauses,
            else_clause,
            endif_keyword: None,
            semicolon: None,
        },
    )
}

fn elseif_clause(p: &mut Parser, colon_form: bool) -> Child {
    let elseif_keyword = p.advance();
    let open_paren = p.eat(TokenKind::OpenParen);
    let condition = expressions::expression(p);
    let close_paren = p.eat(TokenKind::CloseParen);
    let (colon, statements) = if colon_form {
        (
            Some(p.eat(TokenKind::Colon)),
            parse_list(p, ParseContext::IfClause2Elements),
        )
    } else {
        (None, vec![statement(p)])
    };
    node(
        p,
        ElseIfClause {
            elseif_keyword,
            open_paren,
            condition,
            close_paren,
            colon,
            statements,
        },
    )
}

fn switch_statement(p: &mut Parser) -> Child {
    let switch_keyword = p.advance();
    let open_paren = p.eat(TokenKind::OpenParen);
    let expression = expressions::expression(p);
    let close_paren = p.eat(TokenKind::CloseParen);

    let colon = p.eat_optional(TokenKind::Colon);
    let open_brace = if colon.is_none() {
        Some(p.eat(TokenKind::OpenBrace))
    } else {
        None
    };
    let case_statements = parse_list(p, ParseContext::SwitchStatementElements);
    let (close_brace, endswitch_keyword, semicolon) = if colon.is_some() {
        (
            None,
            Some(p.eat(TokenKind::EndSwitch)),
            Some(p.eat(TokenKind::Semicolon)),
        )
    } else {
        (Some(p.eat(TokenKind::CloseBrace)), None, None)
    };
    node(
        p,
        SwitchStatement {
            switch_keyword,
            open_paren,
            expression,
            close_paren,
            colon,
            open_brace,
            case_statements,
            close_brace,
            endswitch_keyword,
            semicolon,
        },
    )
}

pub(crate) fn case_statement(p: &mut Parser) -> Child {
    let keyword = p.eat_any(&[TokenKind::Case, TokenKind::Default]);
    let expression = if keyword.kind == TokenKind::Case {
        Some(expressions::expression(p))
    } else {
        None
    };
    // PHP accepts `;` in place of the case label colon.
    let label_terminator = p.eat_any(&[TokenKind::Colon, TokenKind::Semicolon]);
    let statements = parse_list(p, ParseContext::CaseStatementElements);
    node(
        p,
        CaseStatement {
            keyword,
            expression,
            label_terminator,
            statements,
        },
    )
}

fn while_statement(p: &mut Parser) -> Child {
    let while_keyword = p.advance();
    let open_paren = p.eat(TokenKind::OpenParen);
    let condition = expressions::expression(p);
    let close_paren = p.eat(TokenKind::CloseParen);
    let (colon, statements, endwhile_keyword, semicolon) =
        loop_body(p, ParseContext::WhileStatementElements, TokenKind::EndWhile);
    node(
        p,
        WhileStatement {
            while_keyword,
            open_paren,
            condition,
            close_paren,
            colon,
            statements,
            endwhile_keyword,
            semicolon,
        },
    )
}

/// The shared tail of the loop statements: either a single-statement body
/// or a colon-delimited list closed by the given `end…` keyword and a
/// semicolon.
#[allow(clippy::type_complexity)]
fn loop_body(
    p: &mut Parser,
    context: ParseContext,
    end_keyword: TokenKind,
) -> (Option<Token>, Vec<Child>, Option<Token>, Option<Token>) {
    if let Some(colon) = p.eat_optional(TokenKind::Colon) {
        let statements = parse_list(p, context);
        let end = p.eat(end_keyword);
        let semicolon = p.eat(TokenKind::Semicolon);
        (Some(colon), statements, Some(end), Some(semicolon))
    } else {
        (None, vec![statement(p)], None, None)
    }
}

fn do_statement(p: &mut Parser) -> Child {
    let do_keyword = p.advance();
    let statement = statement(p);
    let while_keyword = p.eat(TokenKind::While);
    let open_paren = p.eat(TokenKind::OpenParen);
    let condition = expressions::expression(p);
    let close_paren = p.eat(TokenKind::CloseParen);
    let semicolon = p.eat(TokenKind::Semicolon);
    node(
        p,
        DoStatement {
            do_keyword,
            statement,
            while_keyword,
            open_paren,
            condition,
            close_paren,
            semicolon,
        },
    )
}

fn for_statement(p: &mut Parser) -> Child {
    let for_keyword = p.advance();
    let open_paren = p.eat(TokenKind::OpenParen);
    let initializer = expression_group(p);
    let first_semicolon = p.eat(TokenKind::Semicolon);
    let control = expression_group(p);
    let second_semicolon = p.eat(TokenKind::Semicolon);
    let end_of_loop = expression_group(p);
    let close_paren = p.eat(TokenKind::CloseParen);
    let (colon, statements, endfor_keyword, semicolon) =
        loop_body(p, ParseContext::ForStatementElements, TokenKind::EndFor);
    node(
        p,
        ForStatement {
            for_keyword,
            open_paren,
            initializer,
            first_semicolon,
            control,
            second_semicolon,
            end_of_loop,
            close_paren,
            colon,
            statements,
            endfor_keyword,
            semicolon,
        },
    )
}

fn expression_group(p: &mut Parser) -> Option<NodeId> {
    delimited_list(
        p,
        TokenKind::Comma,
        |p| expressions::is_expression_start(p.token.kind),
        expressions::expression,
    )
}

fn foreach_statement(p: &mut Parser) -> Child {
    let foreach_keyword = p.advance();
    let open_paren = p.eat(TokenKind::OpenParen);
    let collection = expressions::expression(p);
    let as_keyword = p.eat(TokenKind::As);

    let ampersand = p.eat_optional(TokenKind::Ampersand);
    let first = expressions::expression(p);
    let (key, value) = if ampersand.is_none() && p.check(TokenKind::DoubleArrow) {
        let arrow = p.advance();
        let key = p.alloc(ForeachKey {
            expression: first,
            arrow,
        });
        let value_ampersand = p.eat_optional(TokenKind::Ampersand);
        let value_expression = expressions::expression(p);
        let value = p.alloc(ForeachValue {
            ampersand: value_ampersand,
            expression: value_expression,
        });
        (Some(key), Some(value))
    } else {
        let value = p.alloc(ForeachValue {
            ampersand,
            expression: first,
        });
        (None, Some(value))
    };

    let close_paren = p.eat(TokenKind::CloseParen);
    let (colon, statements, endforeach_keyword, semicolon) = loop_body(
        p,
        ParseContext::ForeachStatementElements,
        TokenKind::EndForeach,
    );
    node(
        p,
        ForeachStatement {
            foreach_keyword,
            open_paren,
            collection,
            as_keyword,
            key,
            value,
            close_paren,
            colon,
            statements,
            endforeach_keyword,
            semicolon,
        },
    )
}

fn try_statement(p: &mut Parser) -> Child {
    let try_keyword = p.advance();
    let compound = compound_statement(p);
    let mut catch_clauses = Vec::new();
    while p.check(TokenKind::Catch) {
        let catch_keyword = p.advance();
        let open_paren = p.eat(TokenKind::OpenParen);
        let class_name = Child::Node(namespaces::qualified_name(p));
        let variable_name = p.eat(TokenKind::VariableName);
        let close_paren = p.eat(TokenKind::CloseParen);
        let compound = compound_statement(p);
        catch_clauses.push(node(
            p,
            CatchClause {
                catch_keyword,
                open_paren,
                class_name,
                variable_name,
                close_paren,
                compound_statement: compound,
            },
        ));
    }
    let finally_clause = if p.check(TokenKind::Finally) {
        let finally_keyword = p.advance();
        let compound = compound_statement(p);
        Some(p.alloc(FinallyClause {
            finally_keyword,
            compound_statement: compound,
        }))
    } else {
        None
    };
    node(
        p,
        TryStatement {
            try_keyword,
            compound_statement: compound,
            catch_clauses,
            finally_clause,
        },
    )
}

fn declare_statement(p: &mut Parser) -> Child {
    let declare_keyword = p.advance();
    let open_paren = p.eat(TokenKind::OpenParen);
    let directives = delimited_list(
        p,
        TokenKind::Comma,
        |p| p.check(TokenKind::Name),
        declare_directive,
    );
    let close_paren = p.eat(TokenKind::CloseParen);

    if let Some(semicolon) = p.eat_optional(TokenKind::Semicolon) {
        return node(
            p,
            DeclareStatement {
                declare_keyword,
                open_paren,
                directives,
                close_paren,
                colon: None,
                statements: Vec::new(),
                enddeclare_keyword: None,
                semicolon: Some(semicolon),
            },
        );
    }
    let (colon, statements, enddeclare_keyword, semicolon) = loop_body(
        p,
        ParseContext::DeclareStatementElements,
        TokenKind::EndDeclare,
    );
    node(
        p,
        DeclareStatement {
            declare_keyword,
            open_paren,
            directives,
            close_paren,
            colon,
            statements,
            enddeclare_keyword,
            semicolon,
        },
    )
}

fn declare_directive(p: &mut Parser) -> Child {
    let name = p.eat(TokenKind::Name);
    let equals = p.eat(TokenKind::Equals);
    let literal = p.eat_any(&[
        TokenKind::IntegerLiteral,
        TokenKind::FloatingLiteral,
        TokenKind::StringLiteral,
    ]);
    node(
        p,
        DeclareDirective {
            name,
            equals,
            literal,
        },
    )
}

fn is_simple_variable_start(p: &Parser) -> bool {
    matches!(p.token.kind, TokenKind::VariableName | TokenKind::Dollar)
}

fn simple_variable(p: &mut Parser) -> Child {
    let name = p.advance();
    node(p, Variable { name })
}

#[cfg(test)]
mod test {
    use crate::cst::{Child, Node, NodeKind};
    use crate::Parser;

    fn statement_kinds(source: &str) -> Vec<NodeKind> {
        let tree = Parser::new(source).parse();
        tree.source_file()
            .statements
            .iter()
            .filter_map(|child| match child {
                Child::Node(id) => Some(tree.node(*id).kind()),
                Child::Token(_) => None,
            })
            .collect()
    }

    #[test]
    fn statement_dispatch_covers_the_leading_keywords() {
        let kinds = statement_kinds(
            "<?php
            ;
            { $a; }
            if ($a) $b;
            while ($a) $b;
            do $b; while ($a);
            for (;;) $b;
            foreach ($a as $v) $b;
            goto end;
            break 2;
            continue;
            return $a;
            throw $e;
            try {} catch (E $e) {} finally {}
            end:
            $a;",
        );
        assert_eq!(
            kinds,
            vec![
                NodeKind::InlineHtml,
                NodeKind::EmptyStatement,
                NodeKind::CompoundStatement,
                NodeKind::IfStatement,
                NodeKind::WhileStatement,
                NodeKind::DoStatement,
                NodeKind::ForStatement,
                NodeKind::ForeachStatement,
                NodeKind::GotoStatement,
                NodeKind::BreakOrContinueStatement,
                NodeKind::BreakOrContinueStatement,
                NodeKind::ReturnStatement,
                NodeKind::ThrowStatement,
                NodeKind::TryStatement,
                NodeKind::NamedLabelStatement,
                NodeKind::ExpressionStatement,
            ]
        );
    }

    #[test]
    fn colon_form_if_collects_clauses() {
        let source = "<?php if ($a): echo 1; elseif ($b): echo 2; else: echo 3; endif;";
        let tree = Parser::new(source).parse();
        let file = tree.source_file();
        let Child::Node(id) = file.statements[1] else {
            panic!("expected a node");
        };
        let Node::IfStatement(if_statement) = tree.node(id) else {
            panic!("expected an if statement");
        };
        assert!(if_statement.colon.is_some());
        assert_eq!(if_statement.statements.len(), 1);
        assert_eq!(if_statement.elseif_clauses.len(), 1);
        assert!(if_statement.else_clause.is_some());
        let endif = if_statement.endif_keyword.expect("endif");
        assert_eq!(tree.text(&endif), "endif");
        let semicolon = if_statement.semicolon.expect("semicolon");
        assert!(!semicolon.is_missing());
    }

    #[test]
    fn else_if_two_words_nests_an_if() {
        let tree = Parser::new("<?php if ($a) $b; else if ($c) $d;").parse();
        let file = tree.source_file();
        let Child::Node(id) = file.statements[1] else {
            panic!("expected a node");
        };
        let Node::IfStatement(if_statement) = tree.node(id) else {
            panic!("expected an if statement");
        };
        let else_clause = if_statement.else_clause.expect("else clause");
        let Node::ElseClause(else_clause) = tree.node(else_clause) else {
            panic!("expected an else clause");
        };
        let Child::Node(nested) = else_clause.statements[0] else {
            panic!("expected a node");
        };
        assert_eq!(tree.node(nested).kind(), NodeKind::IfStatement);
    }

    #[test]
    fn switch_brace_and_colon_forms() {
        let tree = Parser::new("<?php switch ($a) { case 1: $b; default: $c; }").parse();
        let Child::Node(id) = tree.source_file().statements[1] else {
            panic!("expected a node");
        };
        let Node::SwitchStatement(switch) = tree.node(id) else {
            panic!("expected a switch");
        };
        assert!(switch.open_brace.is_some());
        assert_eq!(switch.case_statements.len(), 2);

        let tree = Parser::new("<?php switch ($a): case 1: $b; endswitch;").parse();
        let Child::Node(id) = tree.source_file().statements[1] else {
            panic!("expected a node");
        };
        let Node::SwitchStatement(switch) = tree.node(id) else {
            panic!("expected a switch");
        };
        assert!(switch.colon.is_some());
        assert!(switch.endswitch_keyword.is_some());
    }

    #[test]
    fn case_body_stops_at_the_next_case() {
        let tree = Parser::new("<?php switch ($a) { case 1: $b; $c; case 2: $d; }").parse();
        let Child::Node(id) = tree.source_file().statements[1] else {
            panic!("expected a node");
        };
        let Node::SwitchStatement(switch) = tree.node(id) else {
            panic!("expected a switch");
        };
        let Child::Node(first) = switch.case_statements[0] else {
            panic!("expected a node");
        };
        let Node::CaseStatement(first) = tree.node(first) else {
            panic!("expected a case");
        };
        assert_eq!(first.statements.len(), 2);
    }

    #[test]
    fn foreach_key_and_by_ref_value() {
        let tree = Parser::new("<?php foreach ($map as $k => &$v) {}").parse();
        let Child::Node(id) = tree.source_file().statements[1] else {
            panic!("expected a node");
        };
        let Node::ForeachStatement(foreach) = tree.node(id) else {
            panic!("expected a foreach");
        };
        let key = foreach.key.expect("key");
        assert_eq!(tree.node(key).kind(), NodeKind::ForeachKey);
        let Node::ForeachValue(value) = tree.node(foreach.value.expect("value")) else {
            panic!("expected a foreach value");
        };
        assert!(value.ampersand.is_some());
    }

    #[test]
    fn abstract_without_class_is_skipped_debris() {
        let tree = Parser::new("<?php abstract $x = 1;").parse();
        let file = tree.source_file();
        let Child::Token(skipped) = file.statements[1] else {
            panic!("expected a skipped token");
        };
        assert!(skipped.is_skipped());
        assert_eq!(tree.text(&skipped), "abstract");
        // The assignment still parses as the next statement.
        let Child::Node(id) = file.statements[2] else {
            panic!("expected a node");
        };
        assert_eq!(tree.node(id).kind(), NodeKind::ExpressionStatement);
    }

    #[test]
    fn static_variable_declaration_vs_static_expression() {
        let tree = Parser::new("<?php static $count = 0;").parse();
        let Child::Node(id) = tree.source_file().statements[1] else {
            panic!("expected a node");
        };
        assert_eq!(
            tree.node(id).kind(),
            NodeKind::FunctionStaticDeclaration
        );

        let tree = Parser::new("<?php static::helper();").parse();
        let Child::Node(id) = tree.source_file().statements[1] else {
            panic!("expected a node");
        };
        assert_eq!(tree.node(id).kind(), NodeKind::ExpressionStatement);
    }

    #[test]
    fn declare_forms() {
        let tree = Parser::new("<?php declare(strict_types=1);").parse();
        let Child::Node(id) = tree.source_file().statements[1] else {
            panic!("expected a node");
        };
        let Node::DeclareStatement(declare) = tree.node(id) else {
            panic!("expected a declare");
        };
        assert!(declare.semicolon.is_some());
        assert!(declare.statements.is_empty());

        let tree = Parser::new("<?php declare(ticks=1) { $a; }").parse();
        let Child::Node(id) = tree.source_file().statements[1] else {
            panic!("expected a node");
        };
        let Node::DeclareStatement(declare) = tree.node(id) else {
            panic!("expected a declare");
        };
        assert_eq!(declare.statements.len(), 1);
    }

    #[test]
    fn missing_parens_surface_as_missing_tokens() {
        let tree = Parser::new("<?php if $a) $b;").parse();
        let Child::Node(id) = tree.source_file().statements[1] else {
            panic!("expected a node");
        };
        let Node::IfStatement(if_statement) = tree.node(id) else {
            panic!("expected an if statement");
        };
        assert!(if_statement.open_paren.is_missing());
        assert!(!if_statement.close_paren.is_missing());
    }

    #[test]
    fn expression_statement_semicolon_satisfied_by_close_tag() {
        let tree = Parser::new("<?php echo 1 ?>").parse();
        let file = tree.source_file();
        let Child::Node(id) = file.statements[1] else {
            panic!("expected a node");
        };
        let Node::ExpressionStatement(statement) = tree.node(id) else {
            panic!("expected an expression statement");
        };
        assert!(statement.semicolon.is_none());
        // The tag itself became a trailing island.
        let Child::Node(island) = file.statements[2] else {
            panic!("expected a node");
        };
        assert_eq!(tree.node(island).kind(), NodeKind::InlineHtml);
    }
}
