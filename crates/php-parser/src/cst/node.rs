use crate::cst::{Child, NodeId, Slot};
use crate::Token;

/// Declares one struct per grammar production, the `NodeKind` discriminant,
/// the `Node` sum type, and in-order child traversal, all from a single slot
/// list so slot order and traversal order cannot drift apart.
macro_rules! define_nodes {
    ($( $(#[$meta:meta])* $Kind:ident { $( $field:ident: $ty:ty ),* $(,)? } )*) => {
        /// Discriminant for every grammar production the parser can build.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum NodeKind { $( $Kind, )* }

        $(
            $(#[$meta])*
            #[derive(Debug, Clone, PartialEq)]
            pub struct $Kind { $( pub $field: $ty, )* }

            impl From<$Kind> for Node {
                fn from(node: $Kind) -> Node {
                    Node::$Kind(node)
                }
            }
        )*

        /// A grammar production with its named slots, in source order.
        #[derive(Debug, Clone, PartialEq)]
        pub enum Node { $( $Kind($Kind), )* }

        impl Node {
            pub fn kind(&self) -> NodeKind {
                match self { $( Node::$Kind(_) => NodeKind::$Kind, )* }
            }

            /// Visit this node's direct children in source order.
            pub fn for_each_child(&self, visit: &mut dyn FnMut(Child)) {
                match self {
                    $( Node::$Kind(node) => { $( Slot::for_each(&node.$field, visit); )* } )*
                }
            }
        }
    };
}

define_nodes! {
    /// Root of the tree. The trailing end-of-file token carries any trivia
    /// after the last statement, which keeps the tree byte-complete.
    SourceFile { statements: Vec<Child>, end_of_file: Token }

    /// An island of non-script text. All three slots are optional: a file
    /// may start without a `<?php` tag, end without a `?>`, or contain an
    /// empty island between back-to-back tags.
    InlineHtml { script_end: Option<Token>, text: Option<Token>, script_start: Option<Token> }

    // Statements

    CompoundStatement { open_brace: Token, statements: Vec<Child>, close_brace: Token }
    NamedLabelStatement { name: Token, colon: Token }
    /// The semicolon is `None` only when a `?>` stood in for it.
    ExpressionStatement { expression: Child, semicolon: Option<Token> }
    EmptyStatement { semicolon: Token }
    /// Covers both body forms: single-statement (one entry in `statements`,
    /// no `colon`) and the colon-delimited form ending in `endif;`.
    IfStatement {
        if_keyword: Token,
        open_paren: Token,
        condition: Child,
        close_paren: Token,
        colon: Option<Token>,
        statements: Vec<Child>,
        elseif_clauses: Vec<Child>,
        else_clause: Option<NodeId>,
        endif_keyword: Option<Token>,
        semicolon: Option<Token>,
    }
    ElseIfClause {
        elseif_keyword: Token,
        open_paren: Token,
        condition: Child,
        close_paren: Token,
        colon: Option<Token>,
        statements: Vec<Child>,
    }
    ElseClause { else_keyword: Token, colon: Option<Token>, statements: Vec<Child> }
    SwitchStatement {
        switch_keyword: Token,
        open_paren: Token,
        expression: Child,
        close_paren: Token,
        colon: Option<Token>,
        open_brace: Option<Token>,
        case_statements: Vec<Child>,
        close_brace: Option<Token>,
        endswitch_keyword: Option<Token>,
        semicolon: Option<Token>,
    }
    /// `keyword` is `case` or `default`; `expression` is absent for
    /// `default`. The label terminator is `:` or `;`.
    CaseStatement {
        keyword: Token,
        expression: Option<Child>,
        label_terminator: Token,
        statements: Vec<Child>,
    }
    WhileStatement {
        while_keyword: Token,
        open_paren: Token,
        condition: Child,
        close_paren: Token,
        colon: Option<Token>,
        statements: Vec<Child>,
        endwhile_keyword: Option<Token>,
        semicolon: Option<Token>,
    }
    DoStatement {
        do_keyword: Token,
        statement: Child,
        while_keyword: Token,
        open_paren: Token,
        condition: Child,
        close_paren: Token,
        semicolon: Token,
    }
    ForStatement {
        for_keyword: Token,
        open_paren: Token,
        initializer: Option<NodeId>,
        first_semicolon: Token,
        control: Option<NodeId>,
        second_semicolon: Token,
        end_of_loop: Option<NodeId>,
        close_paren: Token,
        colon: Option<Token>,
        statements: Vec<Child>,
        endfor_keyword: Option<Token>,
        semicolon: Option<Token>,
    }
    ForeachStatement {
        foreach_keyword: Token,
        open_paren: Token,
        collection: Child,
        as_keyword: Token,
        key: Option<NodeId>,
        value: Option<NodeId>,
        close_paren: Token,
        colon: Option<Token>,
        statements: Vec<Child>,
        endforeach_keyword: Option<Token>,
        semicolon: Option<Token>,
    }
    ForeachKey { expression: Child, arrow: Token }
    ForeachValue { ampersand: Option<Token>, expression: Child }
    GotoStatement { goto_keyword: Token, name: Token, semicolon: Token }
    BreakOrContinueStatement { keyword: Token, breakout_level: Option<Token>, semicolon: Token }
    ReturnStatement { return_keyword: Token, expression: Option<Child>, semicolon: Token }
    ThrowStatement { throw_keyword: Token, expression: Child, semicolon: Token }
    TryStatement {
        try_keyword: Token,
        compound_statement: Child,
        catch_clauses: Vec<Child>,
        finally_clause: Option<NodeId>,
    }
    CatchClause {
        catch_keyword: Token,
        open_paren: Token,
        class_name: Child,
        variable_name: Token,
        close_paren: Token,
        compound_statement: Child,
    }
    FinallyClause { finally_keyword: Token, compound_statement: Child }
    DeclareStatement {
        declare_keyword: Token,
        open_paren: Token,
        directives: Option<NodeId>,
        close_paren: Token,
        colon: Option<Token>,
        statements: Vec<Child>,
        enddeclare_keyword: Option<Token>,
        semicolon: Option<Token>,
    }
    DeclareDirective { name: Token, equals: Token, literal: Token }

    // Declarations

    FunctionDeclaration {
        function_keyword: Token,
        by_ref: Option<Token>,
        name: Token,
        open_paren: Token,
        parameters: Option<NodeId>,
        close_paren: Token,
        colon: Option<Token>,
        return_type: Option<Child>,
        compound_statement: Child,
    }
    MethodDeclaration {
        modifiers: Vec<Token>,
        function_keyword: Token,
        by_ref: Option<Token>,
        name: Token,
        open_paren: Token,
        parameters: Option<NodeId>,
        close_paren: Token,
        colon: Option<Token>,
        return_type: Option<Child>,
        compound_statement_or_semicolon: Child,
    }
    Parameter {
        type_declaration: Option<Child>,
        by_ref: Option<Token>,
        dot_dot_dot: Option<Token>,
        variable_name: Token,
        equals: Option<Token>,
        default_value: Option<Child>,
    }
    /// A closure. `skipped_name` holds the stray name some inputs put after
    /// `function`; closures are nameless, so it is kept as a skipped token.
    AnonymousFunctionCreationExpression {
        static_modifier: Option<Token>,
        function_keyword: Token,
        by_ref: Option<Token>,
        skipped_name: Option<Token>,
        open_paren: Token,
        parameters: Option<NodeId>,
        close_paren: Token,
        use_clause: Option<NodeId>,
        colon: Option<Token>,
        return_type: Option<Child>,
        compound_statement: Child,
    }
    AnonymousFunctionUseClause {
        use_keyword: Token,
        open_paren: Token,
        variables: Option<NodeId>,
        close_paren: Token,
    }
    UseVariableName { ampersand: Option<Token>, variable_name: Token }
    ClassDeclaration {
        modifiers: Vec<Token>,
        class_keyword: Token,
        name: Token,
        base_clause: Option<NodeId>,
        interface_clause: Option<NodeId>,
        members: NodeId,
    }
    ClassBaseClause { extends_keyword: Token, base_class: Child }
    ClassInterfaceClause { implements_keyword: Token, interface_list: Option<NodeId> }
    /// Member block shared by class, interface, and trait declarations.
    ClassMembers { open_brace: Token, members: Vec<Child>, close_brace: Token }
    InterfaceDeclaration {
        interface_keyword: Token,
        name: Token,
        base_clause: Option<NodeId>,
        members: NodeId,
    }
    InterfaceBaseClause { extends_keyword: Token, interface_list: Option<NodeId> }
    TraitDeclaration { trait_keyword: Token, name: Token, members: NodeId }
    PropertyDeclaration { modifiers: Vec<Token>, elements: Option<NodeId>, semicolon: Token }
    ClassConstDeclaration {
        modifiers: Vec<Token>,
        const_keyword: Token,
        elements: Option<NodeId>,
        semicolon: Token,
    }
    ConstDeclaration { const_keyword: Token, elements: Option<NodeId>, semicolon: Token }
    ConstElement { name: Token, equals: Token, assignment: Child }
    GlobalDeclaration { global_keyword: Token, variables: Option<NodeId>, semicolon: Token }
    FunctionStaticDeclaration { static_keyword: Token, declarations: Option<NodeId>, semicolon: Token }
    StaticVariableDeclaration { variable_name: Token, equals: Option<Token>, assignment: Option<Child> }
    /// A member that got no further than its modifier list. Holding the
    /// modifiers here keeps them in the tree while the list driver decides
    /// what to do with the token that stopped the parse.
    MissingMemberDeclaration { modifiers: Vec<Token> }
    TraitUseClause {
        use_keyword: Token,
        trait_names: Option<NodeId>,
        adaptations: Option<NodeId>,
        semicolon: Option<Token>,
    }
    TraitAdaptations { open_brace: Token, clauses: Vec<Child>, close_brace: Token }
    TraitSelectOrAliasClause {
        name: Child,
        keyword: Token,
        modifiers: Vec<Token>,
        target_names: Option<NodeId>,
        semicolon: Token,
    }
    NamespaceDefinition {
        namespace_keyword: Token,
        name: Option<NodeId>,
        compound_statement_or_semicolon: Child,
    }
    NamespaceUseDeclaration {
        use_keyword: Token,
        function_or_const: Option<Token>,
        use_clauses: Option<NodeId>,
        semicolon: Token,
    }
    NamespaceUseClause {
        qualified_name: NodeId,
        open_brace: Option<Token>,
        group_clauses: Option<NodeId>,
        close_brace: Option<Token>,
        alias_clause: Option<NodeId>,
    }
    NamespaceUseGroupClause {
        function_or_const: Option<Token>,
        qualified_name: NodeId,
        alias_clause: Option<NodeId>,
    }
    NamespaceAliasingClause { as_keyword: Token, name: Token }
    /// Name parts interleaved with their separators: an optional leading
    /// `\` or `namespace\` prefix, then names joined by `\`.
    QualifiedName { parts: Vec<Token> }
    /// Elements alternating with their delimiters, stored as one ordered
    /// sequence so trailing delimiters survive where the grammar allows
    /// them.
    DelimitedList { children: Vec<Child> }

    // Expressions

    UnaryOpExpression { operator: Token, operand: Child }
    ErrorControlExpression { at: Token, operand: Child }
    PrefixUpdateExpression { operator: Token, operand: Child }
    PostfixUpdateExpression { operand: Child, operator: Token }
    CastExpression { open_paren: Token, cast_type: Token, close_paren: Token, operand: Child }
    ObjectCreationExpression {
        new_keyword: Token,
        designator: Child,
        open_paren: Option<Token>,
        arguments: Option<NodeId>,
        close_paren: Option<Token>,
    }
    CloneExpression { clone_keyword: Token, operand: Child }
    BinaryExpression { left: Child, operator: Token, right: Child }
    /// `by_ref` holds the `&` of a by-reference assignment and is only ever
    /// present after a plain `=`.
    AssignmentExpression { left: Child, operator: Token, by_ref: Option<Token>, right: Child }
    /// `if_expression` is absent in the short form `$a ?: $b`.
    TernaryExpression {
        condition: Child,
        question: Token,
        if_expression: Option<Child>,
        colon: Token,
        else_expression: Child,
    }
    /// `name` is a `$`-prefixed variable name or a bare `$`.
    Variable { name: Token }
    NumericLiteral { token: Token }
    StringLiteral { token: Token }
    ReservedWordExpression { token: Token }
    /// Template-string pieces and interpolated variables, in order.
    TemplateExpression { children: Vec<Child> }
    InterpolatedStringExpression { start_quote: Token, children: Vec<Child>, end_quote: Token }
    /// `${…}` or `{$…}` inside an interpolated string.
    EmbeddedExpression { open: Token, expression: Child, close_brace: Token }
    ParenthesizedExpression { open_paren: Token, expression: Child, close_paren: Token }
    ArrayCreationExpression {
        array_keyword: Option<Token>,
        open: Token,
        elements: Option<NodeId>,
        close: Token,
    }
    ArrayElement { key: Option<Child>, arrow: Option<Token>, by_ref: Option<Token>, value: Child }
    SubscriptExpression { postfix_expression: Child, open: Token, index: Option<Child>, close: Token }
    MemberAccessExpression { dereferencable: Child, arrow: Token, member_name: Child }
    ScopedPropertyAccessExpression {
        scope_resolution_qualifier: Child,
        double_colon: Token,
        member_name: Child,
    }
    CallExpression { callable: Child, open_paren: Token, arguments: Option<NodeId>, close_paren: Token }
    ArgumentExpression { by_ref: Option<Token>, dot_dot_dot: Option<Token>, expression: Child }
    /// `{ expression }` in a member-name position.
    BracedExpression { open_brace: Token, expression: Child, close_brace: Token }
    ScriptInclusionExpression { keyword: Token, expression: Child }
    EchoExpression { echo_keyword: Token, expressions: Option<NodeId> }
    PrintIntrinsicExpression { print_keyword: Token, expression: Child }
    ListIntrinsicExpression { list_keyword: Token, open_paren: Token, elements: Option<NodeId>, close_paren: Token }
    UnsetIntrinsicExpression { unset_keyword: Token, open_paren: Token, expressions: Option<NodeId>, close_paren: Token }
    EmptyIntrinsicExpression { empty_keyword: Token, open_paren: Token, expression: Child, close_paren: Token }
    EvalIntrinsicExpression { eval_keyword: Token, open_paren: Token, expression: Child, close_paren: Token }
    ExitIntrinsicExpression {
        exit_keyword: Token,
        open_paren: Option<Token>,
        expression: Option<Child>,
        close_paren: Option<Token>,
    }
    IssetIntrinsicExpression { isset_keyword: Token, open_paren: Token, expressions: Option<NodeId>, close_paren: Token }
    /// Holds the missing-expression token and the skipped token consumed to
    /// guarantee forward progress when an expression was forced.
    UnknownExpression { children: Vec<Child> }
}
