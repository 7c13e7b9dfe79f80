//! Rabin–Karp substring search
//!
//! A window of `m` bytes slides over the text while its polynomial hash is
//! updated in O(1). Positions whose hash differs from the pattern's are
//! rejected immediately; equal hashes are confirmed with a byte comparison, so
//! collisions never produce false matches.
//!
//! Offsets are byte offsets. An empty pattern matches once, at offset 0.

use crate::types::AnalysisError;

/// Parameters of the polynomial rolling hash
///
/// `hash(s) = (s[0]*base^(m-1) + ... + s[m-1]) mod modulus`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HashParams {
    base: u64,
    modulus: u64,
}

impl HashParams {
    /// Alphabet radix for byte strings
    pub const DEFAULT_BASE: u64 = 256;

    /// Large prime modulus
    pub const DEFAULT_MODULUS: u64 = 1_000_000_007;

    /// Create validated parameters
    ///
    /// Both values must lie in `2..=u32::MAX` so that every intermediate
    /// product fits in a `u64`. The modulus should be prime; that is not
    /// checked, a composite modulus only causes more collisions.
    ///
    /// # Errors
    ///
    /// Returns `AnalysisError::InvalidHashParameters` if either value is out
    /// of range.
    pub fn new(base: u64, modulus: u64) -> Result<Self, AnalysisError> {
        let valid = 2..=u64::from(u32::MAX);
        if !valid.contains(&base) || !valid.contains(&modulus) {
            return Err(AnalysisError::invalid_hash_parameters(base, modulus));
        }
        Ok(HashParams { base, modulus })
    }

    pub fn base(&self) -> u64 {
        self.base
    }

    pub fn modulus(&self) -> u64 {
        self.modulus
    }

    fn hash(&self, bytes: &[u8]) -> u64 {
        bytes
            .iter()
            .fold(0, |hash, &b| (hash * self.base + u64::from(b)) % self.modulus)
    }

    /// `base^(exponent) mod modulus`
    fn power(&self, exponent: usize) -> u64 {
        (0..exponent).fold(1 % self.modulus, |acc, _| (acc * self.base) % self.modulus)
    }

    /// Slide the window one byte: drop `outgoing`, append `incoming`
    ///
    /// `high_order` is `base^(m-1) mod modulus`. The subtraction is done as an
    /// addition of the complement so the value never leaves `[0, modulus)`.
    fn roll(&self, hash: u64, outgoing: u8, incoming: u8, high_order: u64) -> u64 {
        let outgoing = (u64::from(outgoing) * high_order) % self.modulus;
        let without = (hash + self.modulus - outgoing) % self.modulus;
        (without * self.base + u64::from(incoming)) % self.modulus
    }
}

impl Default for HashParams {
    fn default() -> Self {
        HashParams {
            base: Self::DEFAULT_BASE,
            modulus: Self::DEFAULT_MODULUS,
        }
    }
}

/// Precompiled search for one pattern
///
/// The pattern hash and the high-order factor are computed once, so the same
/// matcher can scan many texts.
#[derive(Debug, Clone)]
pub struct PatternMatcher {
    pattern: Vec<u8>,
    params: HashParams,
    pattern_hash: u64,
    high_order: u64,
}

impl PatternMatcher {
    /// Matcher with the default hash parameters
    pub fn new(pattern: impl AsRef<[u8]>) -> Self {
        Self::with_params(pattern, HashParams::default())
    }

    /// Matcher with explicit hash parameters
    pub fn with_params(pattern: impl AsRef<[u8]>, params: HashParams) -> Self {
        let pattern = pattern.as_ref().to_vec();
        let pattern_hash = params.hash(&pattern);
        let high_order = params.power(pattern.len().saturating_sub(1));

        PatternMatcher {
            pattern,
            params,
            pattern_hash,
            high_order,
        }
    }

    pub fn pattern(&self) -> &[u8] {
        &self.pattern
    }

    /// Whether the pattern occurs anywhere in `text`
    ///
    /// Stops at the first confirmed match.
    pub fn is_match(&self, text: impl AsRef<[u8]>) -> bool {
        self.scan(text.as_ref(), true).next().is_some()
    }

    /// Every offset where the pattern occurs, ascending
    ///
    /// Overlapping occurrences are all reported.
    pub fn find_all(&self, text: impl AsRef<[u8]>) -> Vec<usize> {
        self.scan(text.as_ref(), false).collect()
    }

    fn scan<'a>(&'a self, text: &'a [u8], first_only: bool) -> Scan<'a> {
        let m = self.pattern.len();
        let window_hash = if m <= text.len() {
            self.params.hash(&text[..m])
        } else {
            0
        };

        Scan {
            matcher: self,
            text,
            offset: 0,
            window_hash,
            first_only,
            done: false,
        }
    }
}

/// Lazy iterator over confirmed match offsets
struct Scan<'a> {
    matcher: &'a PatternMatcher,
    text: &'a [u8],
    offset: usize,
    window_hash: u64,
    first_only: bool,
    done: bool,
}

impl Iterator for Scan<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        let pattern = &self.matcher.pattern;
        let m = pattern.len();

        if self.done || m > self.text.len() {
            return None;
        }
        if m == 0 {
            self.done = true;
            return Some(0);
        }

        let last_offset = self.text.len() - m;
        while self.offset <= last_offset {
            let offset = self.offset;
            let hit = self.window_hash == self.matcher.pattern_hash
                && &self.text[offset..offset + m] == pattern.as_slice();

            if offset < last_offset {
                self.window_hash = self.matcher.params.roll(
                    self.window_hash,
                    self.text[offset],
                    self.text[offset + m],
                    self.matcher.high_order,
                );
            }
            self.offset += 1;

            if hit {
                self.done = self.first_only;
                return Some(offset);
            }
        }

        self.done = true;
        None
    }
}

/// Whether `pattern` occurs as a contiguous substring of `text`
///
/// A pattern longer than the text never matches; an empty pattern always does.
pub fn contains_pattern(text: impl AsRef<[u8]>, pattern: impl AsRef<[u8]>) -> bool {
    PatternMatcher::new(pattern).is_match(text)
}

/// All byte offsets at which `pattern` occurs in `text`
pub fn find_pattern_offsets(text: impl AsRef<[u8]>, pattern: impl AsRef<[u8]>) -> Vec<usize> {
    PatternMatcher::new(pattern).find_all(text)
}
