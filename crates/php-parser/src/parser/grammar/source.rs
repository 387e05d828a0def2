use crate::cst::{InlineHtml, NodeId};
use crate::parser::Parser;
use crate::TokenKind;

/// An inline-HTML island: an optional `?>` tag, optional HTML text, and an
/// optional `<?php` tag resuming the script. All three slots may be absent
/// when tags sit back to back, and the leading island of a file has no
/// closing tag at all.
pub(crate) fn inline_html(p: &mut Parser) -> NodeId {
    let script_end = p.eat_optional(TokenKind::ScriptSectionEndTag);
    let text = p.eat_optional(TokenKind::InlineHtml);
    let script_start = p.eat_optional(TokenKind::ScriptSectionStartTag);
    p.alloc(InlineHtml {
        script_end,
        text,
        script_start,
    })
}

#[cfg(test)]
mod test {
    use crate::cst::{Child, Node};
    use crate::Parser;

    #[test]
    fn leading_island_holds_the_open_tag() {
        let tree = Parser::new("<?php $a;").parse();
        let file = tree.source_file();
        let Child::Node(island) = file.statements[0] else {
            panic!("expected a node");
        };
        let Node::InlineHtml(island) = tree.node(island) else {
            panic!("expected an inline-HTML island");
        };
        assert!(island.script_end.is_none());
        assert!(island.text.is_none());
        let tag = island.script_start.expect("open tag");
        assert_eq!(tree.text(&tag), "<?php");
    }

    #[test]
    fn text_before_the_open_tag_is_an_island() {
        let tree = Parser::new("<title>x</title><?php $a;").parse();
        let file = tree.source_file();
        let Child::Node(island) = file.statements[0] else {
            panic!("expected a node");
        };
        let Node::InlineHtml(island) = tree.node(island) else {
            panic!("expected an inline-HTML island");
        };
        let text = island.text.expect("html text");
        assert_eq!(tree.text(&text), "<title>x</title>");
        assert!(island.script_start.is_some());
    }

    #[test]
    fn close_tag_midstream_opens_an_island() {
        let source = "<?php $a; ?>between<?php $b;";
        let tree = Parser::new(source).parse();
        let file = tree.source_file();
        // island, $a;, island, $b;
        assert_eq!(file.statements.len(), 4);
        let Child::Node(island) = file.statements[2] else {
            panic!("expected a node");
        };
        let Node::InlineHtml(island) = tree.node(island) else {
            panic!("expected an inline-HTML island");
        };
        assert!(island.script_end.is_some());
        assert_eq!(tree.text(&island.text.expect("html text")), "between");
        assert!(island.script_start.is_some());
    }

    #[test]
    fn html_only_input_is_one_island() {
        let tree = Parser::new("<p>no php here</p>").parse();
        let file = tree.source_file();
        assert_eq!(file.statements.len(), 1);
    }
}
