use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use super::model::ManifestEntry;
use super::normalize::normalize_manifest_name;
use crate::config::DEFAULT_SECTION_MARKER;
use crate::error::{Result, ValidatorError};

/// `$ <start> <end> <rest of line>`, matched against a trimmed line.
static RANGE_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\$\s+([0-9]+)\s+([0-9]+)\s+(.*)$").unwrap_or_else(|e| unreachable!("{e}"))
});

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Parse range declarations following the default `$ Module ID Range` marker.
pub fn parse_manifest(document: &str) -> Vec<ManifestEntry> {
    parse_manifest_with_marker(document, DEFAULT_SECTION_MARKER)
}

/// Parse range declarations following `marker`.
///
/// Lines before the marker are ignored. The section never closes: every later
/// line matching `$ <digits> <digits> <text>` becomes an entry and anything
/// else (comments, blanks, other directives, a repeated marker) is skipped.
/// Returns an empty vector when the marker never appears.
pub fn parse_manifest_with_marker(document: &str, marker: &str) -> Vec<ManifestEntry> {
    let mut entries = Vec::new();
    let mut in_section = false;

    for (line_no, line) in document.split(['\n', '\r']).enumerate() {
        let stripped = line.trim();

        if !in_section {
            if stripped.starts_with(marker) {
                log::debug!("section marker found on line {}", line_no + 1);
                in_section = true;
            }
            continue;
        }

        let Some(caps) = RANGE_LINE.captures(stripped) else {
            continue;
        };

        let (Ok(start), Ok(end)) = (caps[1].parse::<i128>(), caps[2].parse::<i128>()) else {
            log::debug!("line {}: range numbers out of bounds, skipped", line_no + 1);
            continue;
        };
        let rest = &caps[3];

        if start > end {
            log::warn!("line {}: inverted manifest range {start} > {end}", line_no + 1);
        }

        entries.push(ManifestEntry {
            normalized_name: normalize_manifest_name(rest),
            start,
            end,
            raw_name: rest.to_string(),
        });
    }

    if !in_section {
        log::info!("manifest has no '{marker}' section");
    }
    log::info!("parsed {} manifest entries", entries.len());
    entries
}

/// Decode manifest bytes as UTF-8, dropping any invalid sequences.
pub fn decode_manifest_bytes(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len());
    let mut rest = bytes;
    let mut dropped = 0usize;

    loop {
        match std::str::from_utf8(rest) {
            Ok(valid) => {
                out.push_str(valid);
                break;
            }
            Err(e) => {
                let (valid, after) = rest.split_at(e.valid_up_to());
                // `valid_up_to` always lands on a char boundary.
                out.push_str(std::str::from_utf8(valid).unwrap_or_default());
                let skip = e.error_len().unwrap_or(after.len());
                dropped += skip;
                rest = &after[skip..];
            }
        }
    }

    if dropped > 0 {
        log::warn!("dropped {dropped} undecodable byte(s) from manifest");
    }
    out
}

/// Read and parse a manifest file.
pub fn load_manifest(path: &Path, marker: &str) -> Result<Vec<ManifestEntry>> {
    let bytes = std::fs::read(path).map_err(|e| ValidatorError::io(path, e))?;
    Ok(parse_manifest_with_marker(&decode_manifest_bytes(&bytes), marker))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
*KEYWORD
$ 10 20 M_EARLY_PART.k
$ Module ID Range
$ start end name
$ 1000 1999 M_BODY_LWR_FRT_STRUCTURE_EVEK_SCC_LHD_V0.k
*PART
$   2000   2999   M_HOOD-OUTER v2.k $ 42
";

    #[test]
    fn parses_entries_after_marker() {
        let entries = parse_manifest(SAMPLE);
        assert_eq!(entries.len(), 2);

        assert_eq!(entries[0].start, 1000);
        assert_eq!(entries[0].end, 1999);
        assert_eq!(
            entries[0].normalized_name,
            "body_lwr_frt_structure_evek_scc_lhd_v0"
        );
        assert_eq!(entries[0].raw_name, "M_BODY_LWR_FRT_STRUCTURE_EVEK_SCC_LHD_V0.k");

        assert_eq!(entries[1].normalized_name, "hood_outer");
        assert_eq!(entries[1].raw_name, "M_HOOD-OUTER v2.k $ 42");
    }

    #[test]
    fn lines_before_marker_never_parsed() {
        let entries = parse_manifest(SAMPLE);
        assert!(entries.iter().all(|e| e.normalized_name != "early_part"));
    }

    #[test]
    fn no_marker_yields_empty() {
        assert!(parse_manifest("$ 1 2 M_PART.k\n$ 3 4 M_OTHER.k\n").is_empty());
        assert!(parse_manifest("").is_empty());
    }

    #[test]
    fn marker_only_yields_empty() {
        assert!(parse_manifest("$ Module ID Range\n\n$ comment\n").is_empty());
    }

    #[test]
    fn second_marker_is_skipped() {
        let doc = "$ Module ID Range\n$ 1 5 M_A.k\n$ Module ID Range\n$ 6 9 M_B.k\n";
        let names: Vec<_> = parse_manifest(doc)
            .into_iter()
            .map(|e| e.normalized_name)
            .collect();
        assert_eq!(names, vec!["a", "b"]);
    }

    #[test]
    fn marker_may_carry_trailing_text_and_indent() {
        let doc = "   $ Module ID Range (generated)\n$ 1 2 M_A.k\n";
        assert_eq!(parse_manifest(doc).len(), 1);
    }

    #[test]
    fn requires_text_after_numbers() {
        let doc = "$ Module ID Range\n$ 1 2\n$ 1 2 \n$1 2 x\n$ -1 2 x\n$ 1 2 x\n";
        let entries = parse_manifest(doc);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].raw_name, "x");
    }

    #[test]
    fn oversized_numbers_skipped() {
        let doc = "$ Module ID Range\n\
                   $ 1000000000000000000000000000000000000000 1 M_BIG.k\n\
                   $ 1 2 M_OK.k\n";
        let entries = parse_manifest(doc);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].normalized_name, "ok");
    }

    #[test]
    fn numbers_beyond_i64_kept() {
        let doc = "$ Module ID Range\n$ 9223372036854775808 99999999999999999999 M_WIDE.k\n";
        let entries = parse_manifest(doc);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].start, i128::from(i64::MAX) + 1);
        assert_eq!(entries[0].end, 99_999_999_999_999_999_999);
    }

    #[test]
    fn repeated_calls_agree() {
        assert_eq!(parse_manifest(SAMPLE), parse_manifest(SAMPLE));
    }

    #[test]
    fn inverted_entry_kept() {
        let entries = parse_manifest("$ Module ID Range\n$ 50 10 M_X.k\n");
        assert_eq!(entries.len(), 1);
        assert!(entries[0].start > entries[0].end);
    }

    #[test]
    fn crlf_and_lone_cr_line_endings() {
        let doc = "$ Module ID Range\r\n$ 1 2 M_A.k\r$ 3 4 M_B.k\r\n";
        assert_eq!(parse_manifest(doc).len(), 2);
    }

    #[test]
    fn custom_marker() {
        let doc = "$ Module ID Range\n$ 1 2 M_A.k\n# ranges\n$ 3 4 M_B.k\n";
        let entries = parse_manifest_with_marker(doc, "# ranges");
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].normalized_name, "b");
    }

    #[test]
    fn invalid_bytes_are_dropped() {
        let mut bytes = b"$ Module ID Range\n$ 1 2 M_A".to_vec();
        bytes.extend_from_slice(&[0xff, 0xfe]);
        bytes.extend_from_slice(b"B.k\n$ 3 4 M_C\xe2\x82.k\n");
        let text = decode_manifest_bytes(&bytes);
        let entries = parse_manifest(&text);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].normalized_name, "ab");
        assert_eq!(entries[1].normalized_name, "c");
    }

    #[test]
    fn valid_utf8_passes_through() {
        assert_eq!(decode_manifest_bytes("Größe".as_bytes()), "Größe");
    }
}
