//! String literal escape decoding (spec.md §4.2 step 5, §9).
//!
//! Validation of escape sequences is deferred all the way to here: the DFA
//! accepts any character after a backslash (class `Any`) and only this
//! post-processing pass decides what it meant. Two quirks are preserved
//! deliberately rather than "fixed" (spec.md §9):
//!
//! - a malformed `\uHHHH` (fewer than 4 hex digits before the lexeme ends)
//!   degrades to a literal `u` rather than raising an error;
//! - UTF-16 surrogate pairs are never combined; each half is decoded on its
//!   own. Since a lone surrogate is not a valid Rust `char`, it is rendered
//!   as U+FFFD (REPLACEMENT CHARACTER) here rather than via `unsafe` code
//!   that would let it stand as ill-formed UTF-8 — a narrow, documented
//!   deviation from the byte-for-byte original behavior, not a behavioral
//!   fix of the pairing quirk itself.

/// Decode a closed string lexeme (including both quote characters) into its
/// text payload.
pub fn decode(committed: &[char]) -> String {
    debug_assert!(committed.len() >= 2, "string lexeme must include both quotes");
    let inner = &committed[1..committed.len() - 1];
    let mut out = String::with_capacity(inner.len());
    let mut i = 0;
    while i < inner.len() {
        let c = inner[i];
        if c != '\\' || i + 1 >= inner.len() {
            out.push(c);
            i += 1;
            continue;
        }

        match inner[i + 1] {
            '\\' => {
                out.push('\\');
                i += 2;
            }
            '/' => {
                out.push('/');
                i += 2;
            }
            '"' => {
                out.push('"');
                i += 2;
            }
            't' => {
                out.push('\t');
                i += 2;
            }
            'n' => {
                out.push('\n');
                i += 2;
            }
            'r' => {
                out.push('\r');
                i += 2;
            }
            'f' => {
                out.push('\u{000C}');
                i += 2;
            }
            'b' => {
                out.push('\u{0008}');
                i += 2;
            }
            'u' => {
                let hex_start = i + 2;
                let hex_end = hex_start + 4;
                let has_four_hex = hex_end <= inner.len()
                    && inner[hex_start..hex_end].iter().all(|h| h.is_ascii_hexdigit());
                if has_four_hex {
                    let hex: String = inner[hex_start..hex_end].iter().collect();
                    let code = u32::from_str_radix(&hex, 16).expect("validated hex digits");
                    out.push(char::from_u32(code).unwrap_or('\u{FFFD}'));
                    i = hex_end;
                } else {
                    out.push('u');
                    i += 2;
                }
            }
            other => {
                // Not one of the defined escapes; pass the character through
                // rather than erroring, matching the scanner's general
                // lenient-degradation stance on malformed escapes.
                out.push(other);
                i += 2;
            }
        }
    }
    out
}
