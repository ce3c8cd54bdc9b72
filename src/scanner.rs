//! Lexical extraction of exported generator symbols.
//!
//! Generator scripts are never parsed as a real language. The scanner pattern
//! matches raw source text for two shapes:
//!
//! - an exported function declaration: `export [async] function fooGenerator`
//! - an exported constant bound to an arrow function:
//!   `export const fooGenerator = [async] (`
//!
//! where the identifier contains the case-insensitive substring "generator".
//! This is a best-effort heuristic; unusual formatting (multi-line signatures,
//! rebound names) can produce false negatives, which callers treat as a
//! silent no-emit rather than an error.

use once_cell::sync::Lazy;
use regex::Regex;

static FUNCTION_DECL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)export\s+(?:async\s+)?function\s+([A-Za-z0-9_]*generator[A-Za-z0-9_]*)")
        .expect("valid function declaration regex")
});

static ARROW_CONST_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)export\s+const\s+([A-Za-z0-9_]*generator[A-Za-z0-9_]*)\s*=\s*(?:async\s+)?\(")
        .expect("valid arrow constant regex")
});

/// Extracts every exported generator symbol from `source`.
///
/// Matches from both shapes are merged in order of first appearance in the
/// text and deduplicated by exact string equality. Returns an empty vector
/// when nothing matches.
pub fn extract_generator_symbols(source: &str) -> Vec<String> {
    let mut found: Vec<(usize, &str)> = Vec::new();
    for re in [&*FUNCTION_DECL_RE, &*ARROW_CONST_RE] {
        for caps in re.captures_iter(source) {
            if let Some(m) = caps.get(1) {
                found.push((m.start(), m.as_str()));
            }
        }
    }
    found.sort_by_key(|(start, _)| *start);

    let mut names: Vec<String> = Vec::new();
    for (_, name) in found {
        if !names.iter().any(|n| n == name) {
            names.push(name.to_string());
        }
    }
    names
}

/// Stricter single-symbol detector used by the flat layout convention.
///
/// The first function-declaration match wins regardless of position; the
/// first arrow-constant match is consulted only when no declaration matched.
pub fn extract_single_symbol(source: &str) -> Option<String> {
    FUNCTION_DECL_RE
        .captures(source)
        .or_else(|| ARROW_CONST_RE.captures(source))
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_function_declaration() {
        let source = "export function fooGenerator(payload: any) {}";
        assert_eq!(extract_generator_symbols(source), vec!["fooGenerator"]);
    }

    #[test]
    fn test_extract_async_function_declaration() {
        let source = "export async function orderGenerator(payload, session) {}";
        assert_eq!(extract_generator_symbols(source), vec!["orderGenerator"]);
    }

    #[test]
    fn test_extract_arrow_constant() {
        let source = "export const barGenerator = async (payload, session) => payload;";
        assert_eq!(extract_generator_symbols(source), vec!["barGenerator"]);
    }

    #[test]
    fn test_extract_is_case_insensitive() {
        let source = "export function buildGENERATORPayload() {}";
        assert_eq!(
            extract_generator_symbols(source),
            vec!["buildGENERATORPayload"]
        );
    }

    #[test]
    fn test_extract_preserves_first_seen_order_across_shapes() {
        let source = r#"
export const firstGenerator = (payload) => payload;
export function secondGenerator(payload) {}
export const thirdGenerator = async (payload) => payload;
"#;
        assert_eq!(
            extract_generator_symbols(source),
            vec!["firstGenerator", "secondGenerator", "thirdGenerator"]
        );
    }

    #[test]
    fn test_extract_deduplicates_exact_names() {
        let source = r#"
export function fooGenerator(payload) {}
export function fooGenerator(payload) {}
"#;
        assert_eq!(extract_generator_symbols(source), vec!["fooGenerator"]);
    }

    #[test]
    fn test_extract_ignores_non_generator_exports() {
        let source = r#"
export function buildPayload() {}
export const helper = (x) => x;
"#;
        assert!(extract_generator_symbols(source).is_empty());
    }

    #[test]
    fn test_extract_ignores_unexported_generator() {
        let source = "function hiddenGenerator() {}";
        assert!(extract_generator_symbols(source).is_empty());
    }

    #[test]
    fn test_arrow_constant_requires_function_value() {
        // A constant bound to plain data is not a generator declaration.
        let source = "export const fooGenerator = 42;";
        assert!(extract_generator_symbols(source).is_empty());
    }

    #[test]
    fn test_single_symbol_prefers_function_declaration() {
        let source = r#"
export const earlyGenerator = (payload) => payload;
export function lateGenerator(payload) {}
"#;
        assert_eq!(
            extract_single_symbol(source),
            Some("lateGenerator".to_string())
        );
    }

    #[test]
    fn test_single_symbol_falls_back_to_arrow() {
        let source = "export const onlyGenerator = async (payload) => payload;";
        assert_eq!(
            extract_single_symbol(source),
            Some("onlyGenerator".to_string())
        );
    }

    #[test]
    fn test_single_symbol_none_when_no_match() {
        assert_eq!(extract_single_symbol("export function makeStuff() {}"), None);
    }
}
