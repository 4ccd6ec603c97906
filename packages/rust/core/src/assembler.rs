//! Loot table text assembly.
//!
//! Joins pool fragment texts as elements of the `pools` array by plain text
//! concatenation. Fragments are opaque: nothing is parsed or normalized
//! during assembly, every line is only indented two tabs deeper so it sits
//! visually inside the array.

use std::path::Path;

use tracing::{debug, instrument};

use lootbuilder_shared::{LootBuilderError, Result};

/// Fixed document prefix, up to and including the opening `[`.
const PREFIX: &str = "{\n\t\"pools\": [";

/// Fixed document suffix closing the array and the document.
const SUFFIX: &str = "\n\t]\n}";

/// Indentation applied to every fragment line.
const INDENT: &str = "\t\t";

/// Prefix every `\n`-terminated line of `content` with two tab characters.
///
/// The first line and blank lines are indented too. An empty fragment is
/// treated as one empty line.
pub fn reindent(content: &str) -> String {
    if content.is_empty() {
        return INDENT.to_string();
    }

    content
        .split_inclusive('\n')
        .flat_map(|line| [INDENT, line])
        .collect()
}

/// Assemble re-indented fragments into the final loot table document.
///
/// Non-empty input produces
/// `{\n\t"pools": [\n<F1>,\n<F2>,...\n<Fn>\n\t]\n}` with each `<Fi>`
/// re-indented and no comma after the final fragment. Zero fragments
/// produce the well-formed empty document `{\n\t"pools": [\n\t]\n}`.
#[instrument(skip_all, fields(fragments = fragments.len()))]
pub fn assemble(fragments: &[String]) -> String {
    let mut out = String::from(PREFIX);

    for (i, fragment) in fragments.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        out.push('\n');
        out.push_str(&reindent(fragment));
    }

    out.push_str(SUFFIX);
    debug!(bytes = out.len(), "loot table document assembled");
    out
}

/// Require a fragment to parse as a single JSON object.
///
/// Used by the opt-in `--check` mode; assembly itself never parses.
pub fn check_fragment(path: &Path, content: &str) -> Result<()> {
    let value: serde_json::Value = serde_json::from_str(content)
        .map_err(|e| LootBuilderError::fragment(path, e.to_string()))?;

    if !value.is_object() {
        return Err(LootBuilderError::fragment(
            path,
            "top-level value is not an object",
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reindent_prefixes_every_line() {
        assert_eq!(reindent("{\"a\":1}"), "\t\t{\"a\":1}");
        assert_eq!(reindent("{\n  \"a\": 1\n}"), "\t\t{\n\t\t  \"a\": 1\n\t\t}");
    }

    #[test]
    fn reindent_indents_blank_lines() {
        assert_eq!(reindent("a\n\nb"), "\t\ta\n\t\t\n\t\tb");
    }

    #[test]
    fn reindent_preserves_trailing_newline() {
        assert_eq!(reindent("{}\n"), "\t\t{}\n");
    }

    #[test]
    fn reindent_empty_fragment_is_one_indented_line() {
        assert_eq!(reindent(""), "\t\t");
    }

    #[test]
    fn assemble_two_fragments_matches_expected_bytes() {
        let fragments = vec!["{\"a\":1}".to_string(), "{\"b\":2}".to_string()];
        assert_eq!(
            assemble(&fragments),
            "{\n\t\"pools\": [\n\t\t{\"a\":1},\n\t\t{\"b\":2}\n\t]\n}"
        );
    }

    #[test]
    fn assemble_single_fragment_has_no_trailing_comma() {
        let fragments = vec!["{\"gold\": true}".to_string()];
        assert_eq!(
            assemble(&fragments),
            "{\n\t\"pools\": [\n\t\t{\"gold\": true}\n\t]\n}"
        );
    }

    #[test]
    fn assemble_joins_in_given_order() {
        let fragments = vec![
            "{\"first\":1}".to_string(),
            "{\"second\":2}".to_string(),
            "{\"third\":3}".to_string(),
        ];
        let doc = assemble(&fragments);

        let first = doc.find("first").unwrap();
        let second = doc.find("second").unwrap();
        let third = doc.find("third").unwrap();
        assert!(first < second && second < third);
    }

    #[test]
    fn assemble_empty_input_is_well_formed() {
        let doc = assemble(&[]);
        assert_eq!(doc, "{\n\t\"pools\": [\n\t]\n}");

        let parsed: serde_json::Value = serde_json::from_str(&doc).unwrap();
        assert_eq!(parsed["pools"], serde_json::json!([]));
    }

    #[test]
    fn assembled_output_parses_for_json_fragments() {
        let fragments = vec![
            "{\n\t\"rolls\": 1,\n\t\"entries\": []\n}".to_string(),
            "{\"rolls\": {\"min\": 2, \"max\": 4}}".to_string(),
        ];
        let doc = assemble(&fragments);

        let parsed: serde_json::Value = serde_json::from_str(&doc).unwrap();
        assert_eq!(parsed["pools"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn check_fragment_accepts_objects() {
        assert!(check_fragment(Path::new("a.json"), "{\"rolls\": 3}").is_ok());
    }

    #[test]
    fn check_fragment_rejects_non_objects() {
        let err = check_fragment(Path::new("a.json"), "[1, 2]").unwrap_err();
        assert!(err.to_string().contains("not an object"));

        assert!(check_fragment(Path::new("a.json"), "42").is_err());
    }

    #[test]
    fn check_fragment_rejects_malformed_json() {
        let err = check_fragment(Path::new("broken.json"), "{\"rolls\": ").unwrap_err();
        assert!(matches!(err, LootBuilderError::Fragment { .. }));
        assert!(err.to_string().contains("broken.json"));
    }
}
