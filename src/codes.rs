//! Invitation code generation.

use std::collections::BTreeSet;

use rand::Rng;

const ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Random characters per code, before formatting.
pub const CODE_LEN: usize = 12;
/// Characters per hyphen-separated group.
pub const GROUP_LEN: usize = 4;
/// Codes in one generated batch.
pub const CODE_COUNT: usize = 57;

const FORMATTED_LEN: usize = CODE_LEN + CODE_LEN / GROUP_LEN - 1;

/// Draw one code: twelve independent uniform picks from `[A-Z0-9]`, with a
/// hyphen inserted after every group of four.
pub fn generate<R: Rng>(rng: &mut R) -> String {
    let mut code = String::with_capacity(FORMATTED_LEN);
    for i in 0..CODE_LEN {
        if i > 0 && i % GROUP_LEN == 0 {
            code.push('-');
        }
        let c = ALPHABET[rng.gen_range(0..ALPHABET.len())];
        code.push(c as char);
    }
    code
}

/// Draw codes until the set holds [`CODE_COUNT`] distinct ones. A duplicate
/// draw simply fails to grow the set and the loop goes again.
///
/// The returned set iterates in lexicographic order; that order is the
/// output contract of the batch.
pub fn generate_batch<R: Rng>(rng: &mut R) -> BTreeSet<String> {
    let mut codes = BTreeSet::new();
    while codes.len() < CODE_COUNT {
        codes.insert(generate(rng));
    }
    codes
}

pub fn is_well_formed(code: &str) -> bool {
    if code.len() != FORMATTED_LEN {
        return false;
    }
    for (i, c) in code.bytes().enumerate() {
        if i % (GROUP_LEN + 1) == GROUP_LEN {
            if c != b'-' {
                return false;
            }
        } else if !c.is_ascii_uppercase() && !c.is_ascii_digit() {
            return false;
        }
    }
    true
}
