pub(crate) mod classes;
pub(crate) mod expressions;
pub(crate) mod functions;
pub(crate) mod namespaces;
pub(crate) mod source;
pub(crate) mod statements;
pub(crate) mod strings;

use crate::cst::{Child, DelimitedList, Node, NodeId};
use crate::parser::Parser;
use crate::TokenKind;

/// Allocate a finished node and hand it back as a child.
pub(crate) fn node(p: &mut Parser, node: impl Into<Node>) -> Child {
    Child::Node(p.alloc(node))
}

/// Parse `element (delimiter element)*` into a single ordered sequence,
/// keeping the delimiters so trailing ones survive. Returns `None` when no
/// element starts at the current token, leaving it untouched.
pub(crate) fn delimited_list(
    p: &mut Parser,
    delimiter: TokenKind,
    is_element_start: fn(&Parser) -> bool,
    mut parse_element: impl FnMut(&mut Parser) -> Child,
) -> Option<NodeId> {
    if !is_element_start(p) {
        return None;
    }
    let mut children = Vec::new();
    loop {
        if is_element_start(p) {
            children.push(parse_element(p));
        }
        match p.eat_optional(delimiter) {
            Some(delimiter) => children.push(Child::Token(delimiter)),
            None => break,
        }
    }
    Some(p.alloc(DelimitedList { children }))
}
