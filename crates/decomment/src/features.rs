//! Per-standard lexical feature flags.
//!
//! A [`FeatureSet`] is derived from a [`Standard`] exactly once, before
//! scanning starts, and consulted read-only afterwards. Flags never
//! change what the scanner consumes — a raw string is scanned as a raw
//! string under C89 too — they only decide whether doing so records a
//! "feature used but not supported" diagnostic.

use bitflags::bitflags;
use std::fmt::Write as _;

use crate::standard::Standard;

bitflags! {
    /// The lexical features a standard enables.
    ///
    /// Newer standards accumulate the flags of the standards they
    /// extend; the rows in [`FeatureSet::for_standard`] are written out
    /// flat so each standard's full set is visible at a glance.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct FeatureSet: u8 {
        /// `//` comments running to end of line.
        const DOUBLE_SLASH = 1 << 0;
        /// Raw string literals `R"delim(...)delim"`.
        const RAW_STRINGS = 1 << 1;
        /// Unicode-prefixed literals (`u"A"`, `U"A"`, `u8"A"`, `u'x'`, `U'x'`).
        const UNICODE_LITERALS = 1 << 2;
        /// Binary integer literals `0b0101`.
        const BINARY_LITERALS = 1 << 3;
        /// Hexadecimal floating point literals `0x2.34P-12`.
        const HEX_FLOAT = 1 << 4;
        /// Digit separators in numeric literals, `1'000'000`.
        const DIGIT_SEPARATORS = 1 << 5;
        /// Universal character names `\uXXXX` / `\Uxxxxxxxx`.
        const UNIVERSAL_NAMES = 1 << 6;
    }
}

impl FeatureSet {
    /// The complete feature table.
    ///
    /// # Invariant
    ///
    /// Total over [`Standard`]: the match is exhaustive, so adding a
    /// standard without deciding its features is a compile error.
    pub fn for_standard(standard: Standard) -> FeatureSet {
        match standard {
            Standard::C89 | Standard::C90 | Standard::C94 => FeatureSet::empty(),
            Standard::C99 => {
                FeatureSet::HEX_FLOAT | FeatureSet::UNIVERSAL_NAMES | FeatureSet::DOUBLE_SLASH
            }
            Standard::C | Standard::C11 | Standard::C18 => {
                FeatureSet::HEX_FLOAT
                    | FeatureSet::UNIVERSAL_NAMES
                    | FeatureSet::DOUBLE_SLASH
                    | FeatureSet::UNICODE_LITERALS
            }
            Standard::Cxx98 | Standard::Cxx03 => {
                FeatureSet::UNIVERSAL_NAMES | FeatureSet::DOUBLE_SLASH
            }
            Standard::Cxx11 => {
                FeatureSet::UNIVERSAL_NAMES
                    | FeatureSet::DOUBLE_SLASH
                    | FeatureSet::RAW_STRINGS
                    | FeatureSet::UNICODE_LITERALS
            }
            Standard::Cxx14 => {
                FeatureSet::UNIVERSAL_NAMES
                    | FeatureSet::DOUBLE_SLASH
                    | FeatureSet::RAW_STRINGS
                    | FeatureSet::UNICODE_LITERALS
                    | FeatureSet::BINARY_LITERALS
                    | FeatureSet::DIGIT_SEPARATORS
            }
            Standard::Cxx | Standard::Cxx17 => {
                FeatureSet::UNIVERSAL_NAMES
                    | FeatureSet::DOUBLE_SLASH
                    | FeatureSet::RAW_STRINGS
                    | FeatureSet::UNICODE_LITERALS
                    | FeatureSet::BINARY_LITERALS
                    | FeatureSet::DIGIT_SEPARATORS
                    | FeatureSet::HEX_FLOAT
            }
        }
    }

    /// Human-readable listing: the standard's name followed by one line
    /// per enabled feature.
    pub fn summary(self, standard: Standard) -> String {
        let mut text = format!("Standard: {standard}\n");
        let blurbs = [
            (FeatureSet::DOUBLE_SLASH, "Double slash comments // to EOL"),
            (FeatureSet::RAW_STRINGS, "Raw strings R\"ZZ(string)ZZ\""),
            (
                FeatureSet::UNICODE_LITERALS,
                "Unicode strings (u\"A\", U\"A\", u8\"A\")",
            ),
            (FeatureSet::BINARY_LITERALS, "Binary constants 0b0101"),
            (FeatureSet::HEX_FLOAT, "Hexadecimal floats 0x2.34P-12"),
            (
                FeatureSet::DIGIT_SEPARATORS,
                "Numeric punctuation 0x1234'5678",
            ),
            (
                FeatureSet::UNIVERSAL_NAMES,
                "Universal character names \\uXXXX and \\Uxxxxxxxx",
            ),
        ];
        for (flag, blurb) in blurbs {
            if self.contains(flag) {
                let _ = writeln!(text, "Feature:  {blurb}");
            }
        }
        text
    }
}

/// A single feature, named the way diagnostics spell it.
///
/// [`FeatureSet`] answers "is this enabled"; `Feature` exists so a
/// warning site can say *which* disabled feature it tripped over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feature {
    HexFloat,
    RawString,
    DoubleSlash,
    Unicode,
    Binary,
    DigitSeparator,
    Universal,
}

impl Feature {
    /// The name used in `<name> feature used but not supported in <standard>`.
    pub fn name(self) -> &'static str {
        match self {
            Feature::HexFloat => "Hexadecimal floating point constant",
            Feature::RawString => "Raw string",
            Feature::DoubleSlash => "Double slash comment",
            Feature::Unicode => "Unicode character or string",
            Feature::Binary => "Binary literal",
            Feature::DigitSeparator => "Numeric punctuation",
            Feature::Universal => "Universal character name",
        }
    }

    /// The corresponding [`FeatureSet`] bit.
    pub fn flag(self) -> FeatureSet {
        match self {
            Feature::HexFloat => FeatureSet::HEX_FLOAT,
            Feature::RawString => FeatureSet::RAW_STRINGS,
            Feature::DoubleSlash => FeatureSet::DOUBLE_SLASH,
            Feature::Unicode => FeatureSet::UNICODE_LITERALS,
            Feature::Binary => FeatureSet::BINARY_LITERALS,
            Feature::DigitSeparator => FeatureSet::DIGIT_SEPARATORS,
            Feature::Universal => FeatureSet::UNIVERSAL_NAMES,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    // === Table Rows ===

    #[test]
    fn ancient_c_has_no_features() {
        for standard in [Standard::C89, Standard::C90, Standard::C94] {
            assert_eq!(FeatureSet::for_standard(standard), FeatureSet::empty());
        }
    }

    #[test]
    fn c99_gains_hex_float_ucn_and_double_slash() {
        let features = FeatureSet::for_standard(Standard::C99);
        assert_eq!(
            features,
            FeatureSet::HEX_FLOAT | FeatureSet::UNIVERSAL_NAMES | FeatureSet::DOUBLE_SLASH
        );
    }

    #[test]
    fn modern_c_adds_unicode_literals_to_c99() {
        let c99 = FeatureSet::for_standard(Standard::C99);
        for standard in [Standard::C, Standard::C11, Standard::C18] {
            assert_eq!(
                FeatureSet::for_standard(standard),
                c99 | FeatureSet::UNICODE_LITERALS
            );
        }
    }

    #[test]
    fn early_cxx_matches_c99_minus_hex_float() {
        for standard in [Standard::Cxx98, Standard::Cxx03] {
            assert_eq!(
                FeatureSet::for_standard(standard),
                FeatureSet::UNIVERSAL_NAMES | FeatureSet::DOUBLE_SLASH
            );
        }
    }

    #[test]
    fn cxx_accumulates_through_the_revisions() {
        let cxx03 = FeatureSet::for_standard(Standard::Cxx03);
        let cxx11 = FeatureSet::for_standard(Standard::Cxx11);
        let cxx14 = FeatureSet::for_standard(Standard::Cxx14);
        let cxx17 = FeatureSet::for_standard(Standard::Cxx17);

        assert_eq!(
            cxx11,
            cxx03 | FeatureSet::RAW_STRINGS | FeatureSet::UNICODE_LITERALS
        );
        assert_eq!(
            cxx14,
            cxx11 | FeatureSet::BINARY_LITERALS | FeatureSet::DIGIT_SEPARATORS
        );
        assert_eq!(cxx17, cxx14 | FeatureSet::HEX_FLOAT);
        assert_eq!(FeatureSet::for_standard(Standard::Cxx), cxx17);
    }

    #[test]
    fn cxx17_and_current_c_differ_only_in_raw_and_binary_support() {
        // C never grows raw strings, binary literals, or digit separators.
        let c18 = FeatureSet::for_standard(Standard::C18);
        assert!(!c18.contains(FeatureSet::RAW_STRINGS));
        assert!(!c18.contains(FeatureSet::BINARY_LITERALS));
        assert!(!c18.contains(FeatureSet::DIGIT_SEPARATORS));
    }

    // === Feature Names ===

    #[test]
    fn every_feature_maps_to_a_distinct_flag() {
        let all = [
            Feature::HexFloat,
            Feature::RawString,
            Feature::DoubleSlash,
            Feature::Unicode,
            Feature::Binary,
            Feature::DigitSeparator,
            Feature::Universal,
        ];
        let mut union = FeatureSet::empty();
        for feature in all {
            assert!(!union.intersects(feature.flag()), "{feature:?} overlaps");
            union |= feature.flag();
        }
        assert_eq!(union, FeatureSet::all());
    }

    // === Summary ===

    #[test]
    fn summary_lists_enabled_features_in_order() {
        let text = FeatureSet::for_standard(Standard::Cxx98).summary(Standard::Cxx98);
        assert_eq!(
            text,
            "Standard: C++98\n\
             Feature:  Double slash comments // to EOL\n\
             Feature:  Universal character names \\uXXXX and \\Uxxxxxxxx\n"
        );
    }

    #[test]
    fn summary_for_featureless_standard_is_just_the_header() {
        let text = FeatureSet::for_standard(Standard::C90).summary(Standard::C90);
        assert_eq!(text, "Standard: C90\n");
    }
}
