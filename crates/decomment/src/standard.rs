//! Language standard selection.
//!
//! The selected standard decides which lexical constructs are accepted
//! silently and which draw a "feature not supported" diagnostic; it
//! never changes *what* is scanned. `C` and `Cxx` are rolling aliases
//! for the most recent C and C++ standards this scanner knows about
//! (C18 and C++17), so pipelines that just want "current" behavior
//! don't need updating when a new standard lands.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// A C or C++ language standard (or a "current standard" alias).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Standard {
    /// Current C standard (alias for C18 behavior).
    C,
    C89,
    C90,
    C94,
    C99,
    C11,
    C18,
    /// Current C++ standard (alias for C++17 behavior).
    Cxx,
    Cxx98,
    Cxx03,
    Cxx11,
    Cxx14,
    Cxx17,
}

impl Standard {
    /// Every recognized standard, in declaration order.
    pub const ALL: [Standard; 13] = [
        Standard::C,
        Standard::C89,
        Standard::C90,
        Standard::C94,
        Standard::C99,
        Standard::C11,
        Standard::C18,
        Standard::Cxx,
        Standard::Cxx98,
        Standard::Cxx03,
        Standard::Cxx11,
        Standard::Cxx14,
        Standard::Cxx17,
    ];

    /// The user-facing name, as accepted by [`FromStr`] and echoed in
    /// diagnostics.
    pub fn as_str(self) -> &'static str {
        match self {
            Standard::C => "C",
            Standard::C89 => "C89",
            Standard::C90 => "C90",
            Standard::C94 => "C94",
            Standard::C99 => "C99",
            Standard::C11 => "C11",
            Standard::C18 => "C18",
            Standard::Cxx => "C++",
            Standard::Cxx98 => "C++98",
            Standard::Cxx03 => "C++03",
            Standard::Cxx11 => "C++11",
            Standard::Cxx14 => "C++14",
            Standard::Cxx17 => "C++17",
        }
    }
}

impl fmt::Display for Standard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A standard name that is not one of the recognized spellings.
///
/// This is the single fatal error of the crate: an unknown standard is
/// a caller configuration mistake, not a property of the text being
/// scanned, so it is rejected before any scanning starts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized language standard `{0}`")]
pub struct UnknownStandard(pub String);

impl FromStr for Standard {
    type Err = UnknownStandard;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "C" => Ok(Standard::C),
            "C89" => Ok(Standard::C89),
            "C90" => Ok(Standard::C90),
            "C94" => Ok(Standard::C94),
            "C99" => Ok(Standard::C99),
            "C11" => Ok(Standard::C11),
            "C18" => Ok(Standard::C18),
            "C++" => Ok(Standard::Cxx),
            "C++98" => Ok(Standard::Cxx98),
            "C++03" => Ok(Standard::Cxx03),
            "C++11" => Ok(Standard::Cxx11),
            "C++14" => Ok(Standard::Cxx14),
            "C++17" => Ok(Standard::Cxx17),
            _ => Err(UnknownStandard(name.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn every_standard_round_trips_through_its_name() {
        for standard in Standard::ALL {
            let parsed: Standard = standard
                .as_str()
                .parse()
                .unwrap_or_else(|_| panic!("{standard} failed to re-parse"));
            assert_eq!(parsed, standard);
        }
    }

    #[test]
    fn display_matches_as_str() {
        assert_eq!(Standard::Cxx17.to_string(), "C++17");
        assert_eq!(Standard::C.to_string(), "C");
        assert_eq!(Standard::Cxx.to_string(), "C++");
    }

    #[test]
    fn unknown_name_is_rejected() {
        let err = "C++20".parse::<Standard>().unwrap_err();
        assert_eq!(err, UnknownStandard("C++20".to_owned()));
        assert_eq!(err.to_string(), "unrecognized language standard `C++20`");
    }

    #[test]
    fn names_are_case_sensitive() {
        assert!("c99".parse::<Standard>().is_err());
        assert!("c++11".parse::<Standard>().is_err());
    }
}
