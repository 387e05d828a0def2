use crate::TokenKind;
use rustc_hash::FxHashMap;
use std::sync::LazyLock;

const LONGEST_WORD: usize = "include_once".len();

static WORDS: LazyLock<FxHashMap<&'static str, TokenKind>> = LazyLock::new(|| {
    let mut map = FxHashMap::default();
    for &(text, kind) in KEYWORDS.iter().chain(RESERVED_WORDS) {
        map.insert(text, kind);
    }
    map
});

/// Resolve a scanned name to a keyword or reserved-word kind. PHP keywords
/// are case-insensitive, so the lookup lowercases ASCII first.
pub(crate) fn keyword_or_reserved(ident: &str) -> Option<TokenKind> {
    if ident.is_empty() || ident.len() > LONGEST_WORD || !ident.is_ascii() {
        return None;
    }
    let lower = ident.to_ascii_lowercase();
    WORDS.get(lower.as_str()).copied()
}

const KEYWORDS: &[(&str, TokenKind)] = &[
    ("abstract", TokenKind::Abstract),
    ("and", TokenKind::And),
    ("array", TokenKind::Array),
    ("as", TokenKind::As),
    ("break", TokenKind::Break),
    ("callable", TokenKind::Callable),
    ("case", TokenKind::Case),
    ("catch", TokenKind::Catch),
    ("class", TokenKind::Class),
    ("clone", TokenKind::Clone),
    ("const", TokenKind::Const),
    ("continue", TokenKind::Continue),
    ("declare", TokenKind::Declare),
    ("default", TokenKind::Default),
    ("die", TokenKind::Die),
    ("do", TokenKind::Do),
    ("echo", TokenKind::Echo),
    ("else", TokenKind::Else),
    ("elseif", TokenKind::ElseIf),
    ("empty", TokenKind::Empty),
    ("enddeclare", TokenKind::EndDeclare),
    ("endfor", TokenKind::EndFor),
    ("endforeach", TokenKind::EndForeach),
    ("endif", TokenKind::EndIf),
    ("endswitch", TokenKind::EndSwitch),
    ("endwhile", TokenKind::EndWhile),
    ("eval", TokenKind::Eval),
    ("exit", TokenKind::Exit),
    ("extends", TokenKind::Extends),
    ("final", TokenKind::Final),
    ("finally", TokenKind::Finally),
    ("for", TokenKind::For),
    ("foreach", TokenKind::Foreach),
    ("function", TokenKind::Function),
    ("global", TokenKind::Global),
    ("goto", TokenKind::Goto),
    ("if", TokenKind::If),
    ("implements", TokenKind::Implements),
    ("include", TokenKind::Include),
    ("include_once", TokenKind::IncludeOnce),
    ("instanceof", TokenKind::InstanceOf),
    ("insteadof", TokenKind::InsteadOf),
    ("interface", TokenKind::Interface),
    ("isset", TokenKind::Isset),
    ("list", TokenKind::List),
    ("namespace", TokenKind::Namespace),
    ("new", TokenKind::New),
    ("or", TokenKind::Or),
    ("print", TokenKind::Print),
    ("private", TokenKind::Private),
    ("protected", TokenKind::Protected),
    ("public", TokenKind::Public),
    ("require", TokenKind::Require),
    ("require_once", TokenKind::RequireOnce),
    ("return", TokenKind::Return),
    ("static", TokenKind::Static),
    ("switch", TokenKind::Switch),
    ("throw", TokenKind::Throw),
    ("trait", TokenKind::Trait),
    ("try", TokenKind::Try),
    ("unset", TokenKind::Unset),
    ("use", TokenKind::Use),
    ("var", TokenKind::Var),
    ("while", TokenKind::While),
    ("xor", TokenKind::Xor),
];

const RESERVED_WORDS: &[(&str, TokenKind)] = &[
    ("true", TokenKind::True),
    ("false", TokenKind::False),
    ("null", TokenKind::Null),
    ("int", TokenKind::Int),
    ("integer", TokenKind::Integer),
    ("bool", TokenKind::Bool),
    ("boolean", TokenKind::Boolean),
    ("float", TokenKind::Float),
    ("double", TokenKind::Double),
    ("real", TokenKind::Real),
    ("string", TokenKind::String),
    ("binary", TokenKind::Binary),
    ("object", TokenKind::Object),
    ("void", TokenKind::Void),
    ("iterable", TokenKind::Iterable),
];

#[cfg(test)]
mod test {
    use super::keyword_or_reserved;
    use crate::TokenKind;

    #[test]
    fn keywords_are_case_insensitive() {
        assert_eq!(keyword_or_reserved("While"), Some(TokenKind::While));
        assert_eq!(keyword_or_reserved("FOREACH"), Some(TokenKind::Foreach));
        assert_eq!(keyword_or_reserved("TRUE"), Some(TokenKind::True));
    }

    #[test]
    fn plain_names_do_not_resolve() {
        assert_eq!(keyword_or_reserved("whileLoop"), None);
        assert_eq!(keyword_or_reserved("strlen"), None);
        assert_eq!(keyword_or_reserved(""), None);
    }
}
