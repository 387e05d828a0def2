use crate::cst::{
    AnonymousFunctionCreationExpression, AnonymousFunctionUseClause, Child, FunctionDeclaration,
    FunctionStaticDeclaration, MethodDeclaration, NodeId, Parameter, StaticVariableDeclaration,
    UseVariableName,
};
use crate::parser::grammar::{delimited_list, expressions, namespaces, node, statements};
use crate::parser::Parser;
use crate::{Token, TokenKind};

/// Scalar types usable in parameter and return type positions alongside
/// qualified names.
const TYPE_KEYWORDS: &[TokenKind] = &[
    TokenKind::Array,
    TokenKind::Callable,
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
    TokenKind::Void,
    TokenKind::Iterable,
];

pub(crate) fn function_declaration(p: &mut Parser) -> Child {
    let function_keyword = p.advance();
    let by_ref = p.eat_optional(TokenKind::Ampersand);
    let name = function_name(p);
    let (open_paren, parameters, close_paren) = parameter_clause(p);
    let (colon, return_type) = return_type_clause(p);
    let compound_statement = statements::compound_statement(p);
    node(
        p,
        FunctionDeclaration {
            function_keyword,
            by_ref,
            name,
            open_paren,
            parameters,
            close_paren,
            colon,
            return_type,
            compound_statement,
        },
    )
}

pub(crate) fn method_declaration(p: &mut Parser, modifiers: Vec<Token>) -> Child {
    let function_keyword = p.advance();
    let by_ref = p.eat_optional(TokenKind::Ampersand);
    let name = function_name(p);
    let (open_paren, parameters, close_paren) = parameter_clause(p);
    let (colon, return_type) = return_type_clause(p);
    // Abstract and interface methods end at a bare semicolon.
    let compound_statement_or_semicolon = if p.check(TokenKind::Semicolon) {
        Child::Token(p.advance())
    } else {
        statements::compound_statement(p)
    };
    node(
        p,
        MethodDeclaration {
            modifiers,
            function_keyword,
            by_ref,
            name,
            open_paren,
            parameters,
            close_paren,
            colon,
            return_type,
            compound_statement_or_semicolon,
        },
    )
}

pub(crate) fn anonymous_function(p: &mut Parser, static_modifier: Option<Token>) -> Child {
    let function_keyword = p.eat(TokenKind::Function);
    let by_ref = p.eat_optional(TokenKind::Ampersand);
    // Anonymous functions are nameless; a name here is debris.
    let skipped_name = if p.check(TokenKind::Name) {
        Some(p.skip_current())
    } else {
        None
    };
    let (open_paren, parameters, close_paren) = parameter_clause(p);
    let use_clause = if p.check(TokenKind::Use) {
        let use_keyword = p.advance();
        let open_paren = p.eat(TokenKind::OpenParen);
        let variables = delimited_list(p, TokenKind::Comma, is_use_variable_start, use_variable);
        let close_paren = p.eat(TokenKind::CloseParen);
        Some(p.alloc(AnonymousFunctionUseClause {
            use_keyword,
            open_paren,
            variables,
            close_paren,
        }))
    } else {
        None
    };
    let (colon, return_type) = return_type_clause(p);
    let compound_statement = statements::compound_statement(p);
    node(
        p,
        AnonymousFunctionCreationExpression {
            static_modifier,
            function_keyword,
            by_ref,
            skipped_name,
            open_paren,
            parameters,
            close_paren,
            use_clause,
            colon,
            return_type,
            compound_statement,
        },
    )
}

/// Function names may collide with keywords (`function list() …` inside a
/// class); anything name-like is accepted.
fn function_name(p: &mut Parser) -> Token {
    if p.token.kind.is_name_like() {
        p.advance()
    } else {
        p.eat(TokenKind::Name)
    }
}

fn parameter_clause(p: &mut Parser) -> (Token, Option<NodeId>, Token) {
    let open_paren = p.eat(TokenKind::OpenParen);
    let parameters = delimited_list(p, TokenKind::Comma, is_parameter_start, parameter);
    let close_paren = p.eat(TokenKind::CloseParen);
    (open_paren, parameters, close_paren)
}

fn return_type_clause(p: &mut Parser) -> (Option<Token>, Option<Child>) {
    match p.eat_optional(TokenKind::Colon) {
        Some(colon) => (Some(colon), Some(type_declaration(p))),
        None => (None, None),
    }
}

fn is_type_start(kind: TokenKind) -> bool {
    TYPE_KEYWORDS.contains(&kind) || namespaces::is_qualified_name_start(kind)
}

fn type_declaration(p: &mut Parser) -> Child {
    if TYPE_KEYWORDS.contains(&p.token.kind) {
        Child::Token(p.advance())
    } else {
        Child::Node(namespaces::qualified_name(p))
    }
}

fn is_parameter_start(p: &Parser) -> bool {
    matches!(
        p.token.kind,
        TokenKind::Ampersand | TokenKind::DotDotDot | TokenKind::VariableName
    ) || is_type_start(p.token.kind)
}

fn parameter(p: &mut Parser) -> Child {
    let type_declaration = if is_type_start(p.token.kind) {
        Some(self::type_declaration(p))
    } else {
        None
    };
    let by_ref = p.eat_optional(TokenKind::Ampersand);
    let dot_dot_dot = p.eat_optional(TokenKind::DotDotDot);
    let variable_name = p.eat(TokenKind::VariableName);
    let (equals, default_value) = match p.eat_optional(TokenKind::Equals) {
        Some(equals) => (Some(equals), Some(expressions::expression(p))),
        None => (None, None),
    };
    node(
        p,
        Parameter {
            type_declaration,
            by_ref,
            dot_dot_dot,
            variable_name,
            equals,
            default_value,
        },
    )
}

fn is_use_variable_start(p: &Parser) -> bool {
    matches!(
        p.token.kind,
        TokenKind::Ampersand | TokenKind::VariableName
    )
}

fn use_variable(p: &mut Parser) -> Child {
    let ampersand = p.eat_optional(TokenKind::Ampersand);
    let variable_name = p.eat(TokenKind::VariableName);
    node(
        p,
        UseVariableName {
            ampersand,
            variable_name,
        },
    )
}

/// `static $x = 1, $y;` inside a function body.
pub(crate) fn function_static_declaration(p: &mut Parser) -> Child {
    let static_keyword = p.advance();
    let declarations = delimited_list(
        p,
        TokenKind::Comma,
        |p| p.check(TokenKind::VariableName),
        |p| {
            let variable_name = p.eat(TokenKind::VariableName);
            let (equals, assignment) = match p.eat_optional(TokenKind::Equals) {
                Some(equals) => (Some(equals), Some(expressions::expression(p))),
                None => (None, None),
            };
            node(
                p,
                StaticVariableDeclaration {
                    variable_name,
                    equals,
                    assignment,
                },
            )
        },
    );
    let semicolon = p.eat(TokenKind::Semicolon);
    node(
        p,
        FunctionStaticDeclaration {
            static_keyword,
            declarations,
            semicolon,
        },
    )
}

#[cfg(test)]
mod test {
    use crate::cst::{Child, Node, NodeKind};
    use crate::Parser;

    #[test]
    fn function_declaration_with_typed_defaulted_parameters() {
        let source = "<?php function f(int $a, Foo\\Bar &$b, ...$rest, $x = 1) : iterable {}";
        let tree = Parser::new(source).parse();
        let Child::Node(id) = tree.source_file().statements[1] else {
            panic!("expected a node");
        };
        let Node::FunctionDeclaration(function) = tree.node(id) else {
            panic!("expected a function declaration");
        };
        assert_eq!(tree.text(&function.name), "f");
        assert!(function.colon.is_some());
        let Node::DelimitedList(parameters) = tree.node(function.parameters.expect("parameters"))
        else {
            panic!("expected a parameter list");
        };
        // Four parameters, three commas.
        assert_eq!(parameters.children.len(), 7);
        let Child::Node(rest) = parameters.children[4] else {
            panic!("expected a node");
        };
        let Node::Parameter(rest) = tree.node(rest) else {
            panic!("expected a parameter");
        };
        assert!(rest.dot_dot_dot.is_some());
    }

    #[test]
    fn closure_with_use_clause_and_static_prefix() {
        let source = "<?php $f = static function (&$x) use ($captured, &$shared) { return $x; };";
        let tree = Parser::new(source).parse();
        let Child::Node(id) = tree.source_file().statements[1] else {
            panic!("expected a node");
        };
        let Node::ExpressionStatement(statement) = tree.node(id) else {
            panic!("expected an expression statement");
        };
        let Child::Node(assignment) = statement.expression else {
            panic!("expected a node");
        };
        let Node::AssignmentExpression(assignment) = tree.node(assignment) else {
            panic!("expected an assignment");
        };
        let Child::Node(closure) = assignment.right else {
            panic!("expected a node");
        };
        let Node::AnonymousFunctionCreationExpression(closure) = tree.node(closure) else {
            panic!("expected a closure");
        };
        assert!(closure.static_modifier.is_some());
        let use_clause = closure.use_clause.expect("use clause");
        let Node::AnonymousFunctionUseClause(use_clause) = tree.node(use_clause) else {
            panic!("expected a use clause");
        };
        let Node::DelimitedList(variables) = tree.node(use_clause.variables.expect("variables"))
        else {
            panic!("expected a variable list");
        };
        assert_eq!(variables.children.len(), 3);
    }

    #[test]
    fn abstract_method_ends_at_semicolon() {
        let source = "<?php abstract class A { abstract protected function f(); }";
        let tree = Parser::new(source).parse();
        let Child::Node(id) = tree.source_file().statements[1] else {
            panic!("expected a node");
        };
        let Node::ClassDeclaration(class) = tree.node(id) else {
            panic!("expected a class");
        };
        assert_eq!(class.modifiers.len(), 1);
        let Node::ClassMembers(members) = tree.node(class.members) else {
            panic!("expected members");
        };
        let Child::Node(method) = members.members[0] else {
            panic!("expected a node");
        };
        let Node::MethodDeclaration(method) = tree.node(method) else {
            panic!("expected a method");
        };
        assert_eq!(method.modifiers.len(), 2);
        assert!(matches!(
            method.compound_statement_or_semicolon,
            Child::Token(_)
        ));
    }

    #[test]
    fn named_function_expression_statement_fallback() {
        // `function (` with no name parses as an (unused) closure
        // expression, not a declaration.
        let tree = Parser::new("<?php function () {};").parse();
        let Child::Node(id) = tree.source_file().statements[1] else {
            panic!("expected a node");
        };
        let Node::ExpressionStatement(statement) = tree.node(id) else {
            panic!("expected an expression statement");
        };
        let Child::Node(closure) = statement.expression else {
            panic!("expected a node");
        };
        assert_eq!(
            tree.node(closure).kind(),
            NodeKind::AnonymousFunctionCreationExpression
        );
    }
}
