use criterion::*;
use php_parser::Lexer;
use php_parser::TokenKind;

const SCRIPT: &str = r#"<?php
namespace App\Service;

use App\Contract\Cache;
use function App\Support\normalize;

class UserDirectory implements Cache {
    const VERSION = 3;
    private $entries = [];

    public function lookup($id, $default = null) {
        if (!isset($this->entries[$id])) {
            return $default;
        }
        return $this->entries[$id];
    }

    public function warm(array $rows) {
        foreach ($rows as $id => $row) {
            $this->entries[$id] = normalize($row) . " (v" . self::VERSION . ")";
        }
        return count($this->entries) > 0 ? $this : null;
    }
}
"#;

fn parse_script(source: &str) {
    let tree = php_parser::Parser::new(source).parse();

    // Simulate a basic traversal over the statement list.
    let file = tree.source_file();
    for statement in &file.statements {
        if let php_parser::cst::Child::Node(id) = statement {
            black_box(tree.node(*id).kind());
        }
    }
}

fn bench_script_parser(c: &mut Criterion) {
    c.bench_function("script_parser", move |b| b.iter(|| parse_script(SCRIPT)));
}

fn bench_script_lexer(c: &mut Criterion) {
    c.bench_function("script_lexer", move |b| {
        b.iter(|| {
            let mut lexer = Lexer::new(SCRIPT);
            loop {
                let token = lexer.scan_next();
                if token.kind == TokenKind::EndOfFile {
                    break;
                }
                black_box(token);
            }
        })
    });
}

criterion_group!(benches, bench_script_lexer, bench_script_parser);
criterion_main!(benches);
