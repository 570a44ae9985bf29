//! Placeholder substitution over template bodies.

use std::collections::{HashMap, HashSet};

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};

use crate::templates::catalog::Template;

/// A `{name}` token. Only identifier-shaped tokens are substitution
/// candidates; any other brace sequence passes through untouched.
static PLACEHOLDER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{([A-Za-z][A-Za-z0-9_]*)\}").unwrap());

/// Result of one render call. Ephemeral — the engine retains nothing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderedPost {
    pub text: String,
}

/// Renders a template body against caller-supplied variable values.
///
/// Every occurrence of `{name}` for a declared `name` is replaced: with the
/// value when it is present and non-empty, otherwise with the literal
/// `[name]` so the caller can see which fields were left blank. Undeclared
/// tokens are left as written. The body is scanned exactly once, so a
/// substituted value is never itself re-scanned for placeholders.
pub fn render(template: &Template, values: &HashMap<String, String>) -> RenderedPost {
    let declared: HashSet<&str> = template.variable_names.iter().map(String::as_str).collect();
    let text = PLACEHOLDER_RE
        .replace_all(&template.body, |caps: &Captures<'_>| {
            let name = &caps[1];
            if !declared.contains(name) {
                return caps[0].to_owned();
            }
            match values.get(name) {
                Some(value) if !value.is_empty() => value.clone(),
                _ => format!("[{name}]"),
            }
        })
        .into_owned();
    RenderedPost { text }
}

/// Returns the subset of `variable_names` whose `[name]` placeholder still
/// appears in `rendered` — the variables no value was supplied for.
pub fn discover_unfilled(rendered: &str, variable_names: &[String]) -> HashSet<String> {
    variable_names
        .iter()
        .filter(|name| rendered.contains(&format!("[{name}]")))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn template(body: &str, variables: &[&str]) -> Template {
        Template {
            id: "test".to_string(),
            title: "Test".to_string(),
            category: "Test".to_string(),
            icon: "🧪".to_string(),
            description: "test template".to_string(),
            body: body.to_string(),
            variable_names: variables.iter().map(|v| v.to_string()).collect(),
        }
    }

    fn values(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_missing_value_renders_bracketed_placeholder() {
        let t = template("Hi {name}, congrats on {achievement}!", &["name", "achievement"]);
        let rendered = render(&t, &values(&[("name", "Sam")]));
        assert_eq!(rendered.text, "Hi Sam, congrats on [achievement]!");

        let unfilled = discover_unfilled(&rendered.text, &t.variable_names);
        assert_eq!(unfilled.len(), 1);
        assert!(unfilled.contains("achievement"));
    }

    #[test]
    fn test_every_occurrence_is_replaced() {
        let t = template("{word}, {word}, and {word} again", &["word"]);
        let rendered = render(&t, &values(&[("word", "echo")]));
        assert_eq!(rendered.text, "echo, echo, and echo again");
    }

    #[test]
    fn test_unused_key_never_changes_output() {
        let t = template("Only {one} here", &["one"]);
        let with_extra = render(&t, &values(&[("one", "value"), ("unrelated", "noise")]));
        let without = render(&t, &values(&[("one", "value")]));
        assert_eq!(with_extra, without);
    }

    #[test]
    fn test_empty_value_counts_as_unfilled() {
        let t = template("Launching {product}!", &["product"]);
        let rendered = render(&t, &values(&[("product", "")]));
        assert_eq!(rendered.text, "Launching [product]!");
        assert!(discover_unfilled(&rendered.text, &t.variable_names).contains("product"));
    }

    #[test]
    fn test_undeclared_token_passes_through() {
        let t = template("Declared {a}, undeclared {b}", &["a"]);
        let rendered = render(&t, &values(&[("a", "yes"), ("b", "never")]));
        assert_eq!(rendered.text, "Declared yes, undeclared {b}");
    }

    #[test]
    fn test_substituted_values_are_not_rescanned() {
        let t = template("By {author} at {company}", &["author", "company"]);
        let rendered = render(&t, &values(&[("author", "{company}"), ("company", "Acme")]));
        assert_eq!(rendered.text, "By {company} at Acme");
    }

    #[test]
    fn test_non_identifier_braces_pass_through() {
        let t = template("Keep {not a var} and {2bad} literal, fill {ok}", &["ok"]);
        let rendered = render(&t, &values(&[("ok", "done")]));
        assert_eq!(rendered.text, "Keep {not a var} and {2bad} literal, fill done");
    }

    #[test]
    fn test_declared_name_absent_from_body_is_harmless() {
        let t = template("No placeholders here", &["ghost"]);
        let rendered = render(&t, &values(&[]));
        assert_eq!(rendered.text, "No placeholders here");
        assert!(discover_unfilled(&rendered.text, &t.variable_names).is_empty());
    }

    #[test]
    fn test_unfilled_roundtrip_matches_missing_and_empty_values() {
        let t = template(
            "{a} {b} {c}",
            &["a", "b", "c"],
        );
        // a supplied, b empty, c missing.
        let rendered = render(&t, &values(&[("a", "filled"), ("b", "")]));
        let unfilled = discover_unfilled(&rendered.text, &t.variable_names);
        assert_eq!(unfilled.len(), 2);
        assert!(unfilled.contains("b"));
        assert!(unfilled.contains("c"));
    }
}
