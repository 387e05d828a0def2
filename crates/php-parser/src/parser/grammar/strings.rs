use crate::cst::{Child, EmbeddedExpression, InterpolatedStringExpression, TemplateExpression};
use crate::parser::grammar::{expressions, node};
use crate::parser::Parser;
use crate::TokenKind;

/// A double-quoted string interleaving literal pieces with simple `$var`
/// references. After each variable the lexer is asked to rescan under
/// template mode so the following piece is read in string context.
pub(crate) fn template_expression(p: &mut Parser) -> Child {
    let mut children = vec![Child::Token(p.advance())];
    loop {
        match p.token.kind {
            TokenKind::VariableName => {
                let variable = p.advance();
                children.push(Child::Token(variable));
                p.rescan_template_after(variable);
            }
            TokenKind::TemplateStringMiddle => children.push(Child::Token(p.advance())),
            _ => break,
        }
    }
    let end = p.eat(TokenKind::TemplateStringEnd);
    children.push(Child::Token(end));
    node(p, TemplateExpression { children })
}

/// A quote-delimited interpolated string: `"…"`, heredoc, or backtick.
/// `${…}` and `{$…}` open embedded expression sub-parses that must close
/// with `}`; every other token is a literal child. Terminates on the
/// matching close quote or end of file.
pub(crate) fn interpolated_string(p: &mut Parser) -> Child {
    let start_quote = p.advance();
    let close_kind = match start_quote.kind {
        TokenKind::DoubleQuote => TokenKind::DoubleQuote,
        TokenKind::SingleQuote => TokenKind::SingleQuote,
        TokenKind::Backtick => TokenKind::Backtick,
        TokenKind::HeredocStart => TokenKind::HeredocEnd,
        _ => unreachable!("caller dispatched on a quote token"),
    };
    let mut children = Vec::new();
    loop {
        match p.token.kind {
            kind if kind == close_kind => break,
            TokenKind::EndOfFile => break,
            TokenKind::DollarOpenBrace | TokenKind::OpenBraceDollar => {
                let open = p.advance();
                let expression = expressions::expression(p);
                let close_brace = p.eat(TokenKind::CloseBrace);
                children.push(node(
                    p,
                    EmbeddedExpression {
                        open,
                        expression,
                        close_brace,
                    },
                ));
            }
            _ => children.push(Child::Token(p.advance())),
        }
    }
    let end_quote = p.eat(close_kind);
    node(
        p,
        InterpolatedStringExpression {
            start_quote,
            children,
            end_quote,
        },
    )
}
