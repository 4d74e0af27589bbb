//! Allergens reported by the postal-code feed.

use std::fmt;

/// An allergen the postal-code page has a row for.
///
/// The feed identifies allergens by their German name, including the
/// special characters in "Beifuß" and "Gräser". Names are matched exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Allergen {
    Ambrosia,
    Ampfer,
    Beifuss,
    Birke,
    Buche,
    Eiche,
    Erle,
    Esche,
    Graeser,
    Hasel,
    Pappel,
    Roggen,
    Ulme,
    Wegerich,
    Weide,
}

impl Allergen {
    /// All recognised allergens in page order.
    pub const ALL: [Allergen; 15] = [
        Allergen::Ambrosia,
        Allergen::Ampfer,
        Allergen::Beifuss,
        Allergen::Birke,
        Allergen::Buche,
        Allergen::Eiche,
        Allergen::Erle,
        Allergen::Esche,
        Allergen::Graeser,
        Allergen::Hasel,
        Allergen::Pappel,
        Allergen::Roggen,
        Allergen::Ulme,
        Allergen::Wegerich,
        Allergen::Weide,
    ];

    /// Look up an allergen by the name the feed uses.
    ///
    /// Returns `None` for names we don't render, so new allergens added by
    /// the provider are skipped rather than rejected.
    pub fn from_feed_name(name: &str) -> Option<Self> {
        let allergen = match name {
            "Ambrosia" => Allergen::Ambrosia,
            "Ampfer" => Allergen::Ampfer,
            "Beifuß" => Allergen::Beifuss,
            "Birke" => Allergen::Birke,
            "Buche" => Allergen::Buche,
            "Eiche" => Allergen::Eiche,
            "Erle" => Allergen::Erle,
            "Esche" => Allergen::Esche,
            "Gräser" => Allergen::Graeser,
            "Hasel" => Allergen::Hasel,
            "Pappel" => Allergen::Pappel,
            "Roggen" => Allergen::Roggen,
            "Ulme" => Allergen::Ulme,
            "Wegerich" => Allergen::Wegerich,
            "Weide" => Allergen::Weide,
            _ => return None,
        };
        Some(allergen)
    }

    /// The feed's (and the page's) name for this allergen.
    pub fn label(self) -> &'static str {
        match self {
            Allergen::Ambrosia => "Ambrosia",
            Allergen::Ampfer => "Ampfer",
            Allergen::Beifuss => "Beifuß",
            Allergen::Birke => "Birke",
            Allergen::Buche => "Buche",
            Allergen::Eiche => "Eiche",
            Allergen::Erle => "Erle",
            Allergen::Esche => "Esche",
            Allergen::Graeser => "Gräser",
            Allergen::Hasel => "Hasel",
            Allergen::Pappel => "Pappel",
            Allergen::Roggen => "Roggen",
            Allergen::Ulme => "Ulme",
            Allergen::Wegerich => "Wegerich",
            Allergen::Weide => "Weide",
        }
    }
}

impl fmt::Display for Allergen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_roundtrips_through_feed_name() {
        for allergen in Allergen::ALL {
            assert_eq!(Allergen::from_feed_name(allergen.label()), Some(allergen));
        }
    }

    #[test]
    fn special_characters_are_exact() {
        assert_eq!(Allergen::from_feed_name("Beifuß"), Some(Allergen::Beifuss));
        assert_eq!(Allergen::from_feed_name("Gräser"), Some(Allergen::Graeser));
        assert_eq!(Allergen::from_feed_name("Beifuss"), None);
        assert_eq!(Allergen::from_feed_name("Graeser"), None);
    }

    #[test]
    fn matching_is_case_sensitive() {
        assert_eq!(Allergen::from_feed_name("hasel"), None);
        assert_eq!(Allergen::from_feed_name("HASEL"), None);
    }

    #[test]
    fn unknown_name_is_none() {
        assert_eq!(Allergen::from_feed_name("Unknown"), None);
        assert_eq!(Allergen::from_feed_name(""), None);
    }
}
