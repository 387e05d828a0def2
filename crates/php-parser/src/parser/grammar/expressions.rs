use crate::cst::{
    ArgumentExpression, ArrayCreationExpression, ArrayElement, AssignmentExpression,
    BinaryExpression, BracedExpression, CallExpression, CastExpression, Child, CloneExpression,
    EchoExpression,
    EmptyIntrinsicExpression, ErrorControlExpression, EvalIntrinsicExpression,
    ExitIntrinsicExpression, IssetIntrinsicExpression, ListIntrinsicExpression,
    MemberAccessExpression, Node, NodeId, NodeKind, NumericLiteral, ObjectCreationExpression,
    ParenthesizedExpression, PostfixUpdateExpression, PrefixUpdateExpression,
    PrintIntrinsicExpression, ReservedWordExpression, ScopedPropertyAccessExpression,
    ScriptInclusionExpression, StringLiteral, SubscriptExpression, TernaryExpression,
    UnaryOpExpression, UnknownExpression, UnsetIntrinsicExpression, Variable,
};
use crate::parser::grammar::{delimited_list, functions, namespaces, node, strings};
use crate::parser::{Lookahead, Parser};
use crate::{Token, TokenKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Assoc {
    Left,
    Right,
    None,
}

/// Binding strength and associativity per binary operator; higher binds
/// tighter. `?` enters the ternary production and `instanceof` joins the
/// non-associative comparison family.
fn binary_operator(kind: TokenKind) -> Option<(u8, Assoc)> {
    let entry = match kind {
        TokenKind::Or => (6, Assoc::Left),
        TokenKind::Xor => (7, Assoc::Left),
        TokenKind::And => (8, Assoc::Left),
        TokenKind::Equals
        | TokenKind::AsteriskAsteriskEquals
        | TokenKind::AsteriskEquals
        | TokenKind::SlashEquals
        | TokenKind::PercentEquals
        | TokenKind::PlusEquals
        | TokenKind::MinusEquals
        | TokenKind::DotEquals
        | TokenKind::LessThanLessThanEquals
        | TokenKind::GreaterThanGreaterThanEquals
        | TokenKind::AmpersandEquals
        | TokenKind::CaretEquals
        | TokenKind::BarEquals
        | TokenKind::QuestionQuestion => (9, Assoc::Right),
        TokenKind::Question => (10, Assoc::Left),
        TokenKind::BarBar => (12, Assoc::Left),
        TokenKind::AmpersandAmpersand => (13, Assoc::Left),
        TokenKind::Bar => (14, Assoc::Left),
        TokenKind::Caret => (15, Assoc::Left),
        TokenKind::Ampersand => (16, Assoc::Left),
        TokenKind::EqualsEquals
        | TokenKind::ExclamationEquals
        | TokenKind::LessThanGreaterThan
        | TokenKind::EqualsEqualsEquals
        | TokenKind::ExclamationEqualsEquals => (17, Assoc::None),
        TokenKind::LessThan
        | TokenKind::GreaterThan
        | TokenKind::LessThanEquals
        | TokenKind::GreaterThanEquals
        | TokenKind::LessThanEqualsGreaterThan => (18, Assoc::None),
        TokenKind::LessThanLessThan | TokenKind::GreaterThanGreaterThan => (19, Assoc::Left),
        TokenKind::Plus | TokenKind::Minus | TokenKind::Dot => (20, Assoc::Left),
        TokenKind::Asterisk | TokenKind::Slash | TokenKind::Percent => (21, Assoc::Left),
        TokenKind::InstanceOf => (22, Assoc::None),
        TokenKind::AsteriskAsterisk => (23, Assoc::Right),
        _ => return None,
    };
    Some(entry)
}

fn is_assignment_operator(kind: TokenKind) -> bool {
    matches!(
        kind,
        TokenKind::Equals
            | TokenKind::AsteriskAsteriskEquals
            | TokenKind::AsteriskEquals
            | TokenKind::SlashEquals
            | TokenKind::PercentEquals
            | TokenKind::PlusEquals
            | TokenKind::MinusEquals
            | TokenKind::DotEquals
            | TokenKind::LessThanLessThanEquals
            | TokenKind::GreaterThanGreaterThanEquals
            | TokenKind::AmpersandEquals
            | TokenKind::CaretEquals
            | TokenKind::BarEquals
    )
}

/// Type names recognized inside a `(typename)` cast.
const CAST_TYPES: &[TokenKind] = &[
    TokenKind::Array,
    TokenKind::Unset,
    TokenKind::Int,
    TokenKind::Integer,
    TokenKind::Bool,
    TokenKind::Boolean,
    TokenKind::Float,
    TokenKind::Double,
    TokenKind::Real,
    TokenKind::String,
    TokenKind::Binary,
    TokenKind::Object,
];

pub(crate) fn is_expression_start(kind: TokenKind) -> bool {
    matches!(
        kind,
        TokenKind::VariableName
            | TokenKind::Dollar
            | TokenKind::Name
            | TokenKind::Backslash
            | TokenKind::Namespace
            | TokenKind::IntegerLiteral
            | TokenKind::FloatingLiteral
            | TokenKind::StringLiteral
            | TokenKind::TemplateStringStart
            | TokenKind::DoubleQuote
            | TokenKind::SingleQuote
            | TokenKind::HeredocStart
            | TokenKind::Backtick
            | TokenKind::OpenParen
            | TokenKind::OpenBracket
            | TokenKind::Array
            | TokenKind::New
            | TokenKind::Clone
            | TokenKind::Plus
            | TokenKind::Minus
            | TokenKind::Exclamation
            | TokenKind::Tilde
            | TokenKind::At
            | TokenKind::PlusPlus
            | TokenKind::MinusMinus
            | TokenKind::Include
            | TokenKind::IncludeOnce
            | TokenKind::Require
            | TokenKind::RequireOnce
            | TokenKind::Echo
            | TokenKind::Print
            | TokenKind::List
            | TokenKind::Unset
            | TokenKind::Empty
            | TokenKind::Eval
            | TokenKind::Exit
            | TokenKind::Die
            | TokenKind::Isset
            | TokenKind::Function
            | TokenKind::Static
    ) || kind.is_reserved_word()
}

/// The outer expression entry point. Returns a zero-width missing token of
/// pseudo-kind `Expression` when nothing expression-like is present.
pub(crate) fn expression(p: &mut Parser) -> Child {
    if p.check(TokenKind::EndOfFile) {
        return Child::Token(Token::missing(TokenKind::Expression, p.token.full_start));
    }
    match p.token.kind {
        TokenKind::Include
        | TokenKind::IncludeOnce
        | TokenKind::Require
        | TokenKind::RequireOnce => {
            let keyword = p.advance();
            let operand = expression(p);
            node(
                p,
                ScriptInclusionExpression {
                    keyword,
                    expression: operand,
                },
            )
        }
        _ => binary_expression(p, 0),
    }
}

/// Like [`expression`], but guarantees forward progress: if nothing could
/// be parsed, the offending token is skipped alongside the missing marker
/// so the expression-statement loop cannot spin.
pub(crate) fn expression_force(p: &mut Parser) -> Child {
    let expression = self::expression(p);
    if let Child::Token(missing) = expression {
        if missing.is_missing()
            && missing.kind == TokenKind::Expression
            && !p.check(TokenKind::EndOfFile)
        {
            let skipped = p.skip_current();
            return node(
                p,
                UnknownExpression {
                    children: vec![Child::Token(missing), Child::Token(skipped)],
                },
            );
        }
    }
    expression
}

/// The precedence climb. `min_precedence` is the loosest operator the
/// caller is still willing to take.
fn binary_expression(p: &mut Parser, min_precedence: u8) -> Child {
    let mut left = unary_expression(p, true);
    let mut previous: Option<(u8, Assoc)> = None;
    loop {
        let operator_kind = p.token.kind;
        let Some((precedence, assoc)) = binary_operator(operator_kind) else {
            break;
        };
        // Non-associative operators refuse to chain at their own level:
        // `$a < $b < $c` stops after the first comparison.
        if let Some((previous_precedence, Assoc::None)) = previous {
            if previous_precedence == precedence {
                break;
            }
        }
        let stop = match assoc {
            Assoc::Right => precedence < min_precedence,
            Assoc::Left | Assoc::None => precedence <= min_precedence,
        };
        if stop {
            break;
        }

        let operator = p.advance();
        previous = Some((precedence, assoc));

        if operator_kind == TokenKind::Question {
            left = ternary_rest(p, left, operator);
            continue;
        }
        let by_ref = if operator_kind == TokenKind::Equals {
            p.eat_optional(TokenKind::Ampersand)
        } else {
            None
        };

        // `**` binds tighter than a unary prefix on its left: `-3 ** 2`
        // re-wraps to `-(3 ** 2)`.
        if operator_kind == TokenKind::AsteriskAsterisk {
            if let Child::Node(unary) = left {
                if p.arena.node(unary).kind() == NodeKind::UnaryOpExpression {
                    rewrap_exponent(p, unary, operator, precedence);
                    continue;
                }
            }
        }

        let right = binary_expression(p, precedence);
        left = if is_assignment_operator(operator_kind) {
            node(
                p,
                AssignmentExpression {
                    left,
                    operator,
                    by_ref,
                    right,
                },
            )
        } else {
            node(
                p,
                BinaryExpression {
                    left,
                    operator,
                    right,
                },
            )
        };
    }
    left
}

/// Build `operand ** right` underneath the unary operator already parsed:
/// the unary node keeps its place in the tree and its old operand becomes
/// the left side of the new exponent node.
fn rewrap_exponent(p: &mut Parser, unary: NodeId, operator: Token, precedence: u8) {
    let operand = match p.arena.node(unary) {
        Node::UnaryOpExpression(expression) => expression.operand,
        _ => unreachable!("caller checked the node kind"),
    };
    if let Child::Node(inner) = operand {
        p.arena.detach(inner);
    }
    let right = binary_expression(p, precedence);
    let exponent = p.alloc(BinaryExpression {
        left: operand,
        operator,
        right,
    });
    match p.arena.node_mut(unary) {
        Node::UnaryOpExpression(expression) => expression.operand = Child::Node(exponent),
        _ => unreachable!("caller checked the node kind"),
    }
    p.arena.reparent(exponent, unary);
}

fn ternary_rest(p: &mut Parser, condition: Child, question: Token) -> Child {
    // Short ternary: `$a ?: $b` has no middle expression.
    let if_expression = if p.check(TokenKind::Colon) {
        None
    } else {
        Some(expression(p))
    };
    let colon = p.eat(TokenKind::Colon);
    // The else branch binds at assignment strength so `$a ? $b : $c = $d`
    // keeps the assignment inside the ternary.
    let else_expression = binary_expression(p, 9);
    node(
        p,
        TernaryExpression {
            condition,
            question,
            if_expression,
            colon,
            else_expression,
        },
    )
}

fn unary_expression(p: &mut Parser, allow_update: bool) -> Child {
    if p.token.kind == TokenKind::OpenParen
        && p.lookahead(&[
            Lookahead::Kind(TokenKind::OpenParen),
            Lookahead::AnyOf(CAST_TYPES),
            Lookahead::Kind(TokenKind::CloseParen),
        ])
    {
        let open_paren = p.advance();
        let cast_type = p.advance();
        let close_paren = p.advance();
        let operand = unary_expression(p, allow_update);
        return node(
            p,
            CastExpression {
                open_paren,
                cast_type,
                close_paren,
                operand,
            },
        );
    }
    match p.token.kind {
        TokenKind::Plus | TokenKind::Minus | TokenKind::Exclamation | TokenKind::Tilde => {
            let operator = p.advance();
            let operand = unary_expression(p, allow_update);
            node(p, UnaryOpExpression { operator, operand })
        }
        TokenKind::At => {
            let at = p.advance();
            let operand = unary_expression(p, allow_update);
            node(p, ErrorControlExpression { at, operand })
        }
        TokenKind::PlusPlus | TokenKind::MinusMinus => {
            let operator = p.advance();
            // `++$a++` is rejected by keeping postfix updates out of the
            // operand of a prefix update.
            let operand = unary_expression(p, false);
            node(p, PrefixUpdateExpression { operator, operand })
        }
        TokenKind::New => object_creation_expression(p),
        TokenKind::Clone => {
            let clone_keyword = p.advance();
            let operand = unary_expression(p, allow_update);
            node(
                p,
                CloneExpression {
                    clone_keyword,
                    operand,
                },
            )
        }
        _ => {
            let primary = primary_expression(p);
            postfix_rest(p, primary, allow_update)
        }
    }
}

fn primary_expression(p: &mut Parser) -> Child {
    if p.token.kind == TokenKind::Static
        && p.lookahead(&[
            Lookahead::Kind(TokenKind::Static),
            Lookahead::Kind(TokenKind::Function),
        ])
    {
        let static_modifier = p.advance();
        return functions::anonymous_function(p, Some(static_modifier));
    }
    match p.token.kind {
        TokenKind::VariableName | TokenKind::Dollar => {
            let name = p.advance();
            node(p, Variable { name })
        }
        TokenKind::Name | TokenKind::Backslash | TokenKind::Namespace => {
            Child::Node(namespaces::qualified_name(p))
        }
        TokenKind::TemplateStringStart => strings::template_expression(p),
        TokenKind::IntegerLiteral | TokenKind::FloatingLiteral => {
            let token = p.advance();
            node(p, NumericLiteral { token })
        }
        TokenKind::StringLiteral => {
            let token = p.advance();
            node(p, StringLiteral { token })
        }
        TokenKind::DoubleQuote
        | TokenKind::SingleQuote
        | TokenKind::HeredocStart
        | TokenKind::Backtick => strings::interpolated_string(p),
        TokenKind::Array | TokenKind::OpenBracket => array_creation_expression(p),
        TokenKind::OpenParen => {
            let open_paren = p.advance();
            let inner = expression(p);
            let close_paren = p.eat(TokenKind::CloseParen);
            node(
                p,
                ParenthesizedExpression {
                    open_paren,
                    expression: inner,
                    close_paren,
                },
            )
        }
        TokenKind::Echo => {
            let echo_keyword = p.advance();
            let expressions = delimited_list(
                p,
                TokenKind::Comma,
                |p| is_expression_start(p.token.kind),
                expression,
            );
            node(
                p,
                EchoExpression {
                    echo_keyword,
                    expressions,
                },
            )
        }
        TokenKind::Print => {
            let print_keyword = p.advance();
            let operand = expression(p);
            node(
                p,
                PrintIntrinsicExpression {
                    print_keyword,
                    expression: operand,
                },
            )
        }
        TokenKind::List => {
            let list_keyword = p.advance();
            let open_paren = p.eat(TokenKind::OpenParen);
            let elements = array_element_list(p);
            let close_paren = p.eat(TokenKind::CloseParen);
            node(
                p,
                ListIntrinsicExpression {
                    list_keyword,
                    open_paren,
                    elements,
                    close_paren,
                },
            )
        }
        TokenKind::Unset => {
            let unset_keyword = p.advance();
            let open_paren = p.eat(TokenKind::OpenParen);
            let expressions = expression_list(p);
            let close_paren = p.eat(TokenKind::CloseParen);
            node(
                p,
                UnsetIntrinsicExpression {
                    unset_keyword,
                    open_paren,
                    expressions,
                    close_paren,
                },
            )
        }
        TokenKind::Empty => {
            let empty_keyword = p.advance();
            let open_paren = p.eat(TokenKind::OpenParen);
            let inner = expression(p);
            let close_paren = p.eat(TokenKind::CloseParen);
            node(
                p,
                EmptyIntrinsicExpression {
                    empty_keyword,
                    open_paren,
                    expression: inner,
                    close_paren,
                },
            )
        }
        TokenKind::Eval => {
            let eval_keyword = p.advance();
            let open_paren = p.eat(TokenKind::OpenParen);
            let inner = expression(p);
            let close_paren = p.eat(TokenKind::CloseParen);
            node(
                p,
                EvalIntrinsicExpression {
                    eval_keyword,
                    open_paren,
                    expression: inner,
                    close_paren,
                },
            )
        }
        TokenKind::Exit | TokenKind::Die => {
            let exit_keyword = p.advance();
            let (open_paren, inner, close_paren) = if p.check(TokenKind::OpenParen) {
                let open_paren = p.advance();
                let inner = if p.check(TokenKind::CloseParen) {
                    None
                } else {
                    Some(expression(p))
                };
                let close_paren = p.eat(TokenKind::CloseParen);
                (Some(open_paren), inner, Some(close_paren))
            } else {
                (None, None, None)
            };
            node(
                p,
                ExitIntrinsicExpression {
                    exit_keyword,
                    open_paren,
                    expression: inner,
                    close_paren,
                },
            )
        }
        TokenKind::Isset => {
            let isset_keyword = p.advance();
            let open_paren = p.eat(TokenKind::OpenParen);
            let expressions = expression_list(p);
            let close_paren = p.eat(TokenKind::CloseParen);
            node(
                p,
                IssetIntrinsicExpression {
                    isset_keyword,
                    open_paren,
                    expressions,
                    close_paren,
                },
            )
        }
        TokenKind::Function => functions::anonymous_function(p, None),
        TokenKind::True | TokenKind::False | TokenKind::Null => {
            // `true` is a value unless it heads a qualified name or call.
            if p.lookahead(&[
                Lookahead::Kind(p.token.kind),
                Lookahead::AnyOf(&[
                    TokenKind::Backslash,
                    TokenKind::ColonColon,
                    TokenKind::OpenParen,
                ]),
            ]) {
                Child::Node(namespaces::qualified_name(p))
            } else {
                let token = p.advance();
                node(p, ReservedWordExpression { token })
            }
        }
        kind if kind.is_reserved_word() || kind == TokenKind::Static => {
            Child::Node(namespaces::qualified_name(p))
        }
        _ => Child::Token(Token::missing(TokenKind::Expression, p.token.full_start)),
    }
}

/// The left-recursive tail of a primary: subscripts, member and scoped
/// access, calls, and a final postfix update. Array creations take
/// subscripts only, and a `(` directly after a call ends the chain.
fn postfix_rest(p: &mut Parser, mut expression: Child, allow_update: bool) -> Child {
    loop {
        let Child::Node(id) = expression else {
            return expression;
        };
        let kind = p.arena.node(id).kind();
        let postfixable = matches!(
            kind,
            NodeKind::Variable
                | NodeKind::ParenthesizedExpression
                | NodeKind::QualifiedName
                | NodeKind::CallExpression
                | NodeKind::MemberAccessExpression
                | NodeKind::SubscriptExpression
                | NodeKind::ScopedPropertyAccessExpression
                | NodeKind::StringLiteral
                | NodeKind::ArrayCreationExpression
        );
        if !postfixable {
            return expression;
        }
        match p.token.kind {
            TokenKind::OpenBracket | TokenKind::OpenBrace => {
                let open = p.advance();
                let close_kind = if open.kind == TokenKind::OpenBracket {
                    TokenKind::CloseBracket
                } else {
                    TokenKind::CloseBrace
                };
                // Empty subscripts (`$a[] = 1`) are part of the grammar.
                let index = if p.check(close_kind) {
                    None
                } else {
                    Some(self::expression(p))
                };
                let close = p.eat(close_kind);
                expression = node(
                    p,
                    SubscriptExpression {
                        postfix_expression: expression,
                        open,
                        index,
                        close,
                    },
                );
            }
            _ if kind == NodeKind::ArrayCreationExpression => return expression,
            TokenKind::Arrow => {
                let arrow = p.advance();
                let member_name = self::member_name(p);
                expression = node(
                    p,
                    MemberAccessExpression {
                        dereferencable: expression,
                        arrow,
                        member_name,
                    },
                );
            }
            TokenKind::ColonColon => {
                let double_colon = p.advance();
                let member_name = self::member_name(p);
                expression = node(
                    p,
                    ScopedPropertyAccessExpression {
                        scope_resolution_qualifier: expression,
                        double_colon,
                        member_name,
                    },
                );
            }
            TokenKind::OpenParen => {
                let open_paren = p.advance();
                let arguments = argument_list(p);
                let close_paren = p.eat(TokenKind::CloseParen);
                expression = node(
                    p,
                    CallExpression {
                        callable: expression,
                        open_paren,
                        arguments,
                        close_paren,
                    },
                );
                // Call chaining is spelled through parentheses; a bare `(`
                // right after a call ends this chain.
                if p.check(TokenKind::OpenParen) {
                    return expression;
                }
            }
            TokenKind::PlusPlus | TokenKind::MinusMinus if allow_update => {
                let operator = p.advance();
                return node(
                    p,
                    PostfixUpdateExpression {
                        operand: expression,
                        operator,
                    },
                );
            }
            _ => return expression,
        }
    }
}

/// A member-name after `->` or `::`: a name, a simple variable, a braced
/// expression, or any keyword coerced to a name (`$x->class`).
pub(crate) fn member_name(p: &mut Parser) -> Child {
    match p.token.kind {
        TokenKind::Name => Child::Token(p.advance()),
        TokenKind::VariableName | TokenKind::Dollar => {
            let name = p.advance();
            node(p, Variable { name })
        }
        TokenKind::OpenBrace => {
            let open_brace = p.advance();
            let inner = expression(p);
            let close_brace = p.eat(TokenKind::CloseBrace);
            node(
                p,
                BracedExpression {
                    open_brace,
                    expression: inner,
                    close_brace,
                },
            )
        }
        kind if kind.is_name_like() => {
            let mut token = p.advance();
            token.kind = TokenKind::Name;
            Child::Token(token)
        }
        _ => Child::Token(Token::missing(TokenKind::Name, p.token.full_start)),
    }
}

fn object_creation_expression(p: &mut Parser) -> Child {
    let new_keyword = p.advance();
    let designator = match p.token.kind {
        TokenKind::VariableName | TokenKind::Dollar => {
            let name = p.advance();
            node(p, Variable { name })
        }
        TokenKind::Static => Child::Token(p.advance()),
        kind if namespaces::is_qualified_name_start(kind) || kind.is_reserved_word() => {
            Child::Node(namespaces::qualified_name(p))
        }
        _ => Child::Token(Token::missing(TokenKind::Name, p.token.full_start)),
    };
    let (open_paren, arguments, close_paren) = if p.check(TokenKind::OpenParen) {
        let open_paren = p.advance();
        let arguments = argument_list(p);
        let close_paren = p.eat(TokenKind::CloseParen);
        (Some(open_paren), arguments, Some(close_paren))
    } else {
        (None, None, None)
    };
    node(
        p,
        ObjectCreationExpression {
            new_keyword,
            designator,
            open_paren,
            arguments,
            close_paren,
        },
    )
}

fn array_creation_expression(p: &mut Parser) -> Child {
    if p.check(TokenKind::Array) {
        let array_keyword = Some(p.advance());
        let open = p.eat(TokenKind::OpenParen);
        let elements = array_element_list(p);
        let close = p.eat(TokenKind::CloseParen);
        node(
            p,
            ArrayCreationExpression {
                array_keyword,
                open,
                elements,
                close,
            },
        )
    } else {
        let open = p.advance();
        let elements = array_element_list(p);
        let close = p.eat(TokenKind::CloseBracket);
        node(
            p,
            ArrayCreationExpression {
                array_keyword: None,
                open,
                elements,
                close,
            },
        )
    }
}

fn array_element_list(p: &mut Parser) -> Option<NodeId> {
    delimited_list(
        p,
        TokenKind::Comma,
        |p| p.check(TokenKind::Ampersand) || is_expression_start(p.token.kind),
        array_element,
    )
}

fn array_element(p: &mut Parser) -> Child {
    let leading_by_ref = p.eat_optional(TokenKind::Ampersand);
    let first = expression(p);
    if leading_by_ref.is_none() && p.check(TokenKind::DoubleArrow) {
        let arrow = p.advance();
        let by_ref = p.eat_optional(TokenKind::Ampersand);
        let value = expression(p);
        return node(
            p,
            ArrayElement {
                key: Some(first),
                arrow: Some(arrow),
                by_ref,
                value,
            },
        );
    }
    node(
        p,
        ArrayElement {
            key: None,
            arrow: None,
            by_ref: leading_by_ref,
            value: first,
        },
    )
}

fn expression_list(p: &mut Parser) -> Option<NodeId> {
    delimited_list(
        p,
        TokenKind::Comma,
        |p| is_expression_start(p.token.kind),
        expression,
    )
}

fn argument_list(p: &mut Parser) -> Option<NodeId> {
    delimited_list(
        p,
        TokenKind::Comma,
        |p| {
            matches!(p.token.kind, TokenKind::Ampersand | TokenKind::DotDotDot)
                || is_expression_start(p.token.kind)
        },
        |p| {
            let by_ref = p.eat_optional(TokenKind::Ampersand);
            let dot_dot_dot = p.eat_optional(TokenKind::DotDotDot);
            let inner = expression(p);
            node(
                p,
                ArgumentExpression {
                    by_ref,
                    dot_dot_dot,
                    expression: inner,
                },
            )
        },
    )
}
