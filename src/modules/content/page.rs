use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Marketing and legal pages served from static content
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageName {
    About,
    Contact,
    Faq,
    Pricing,
    Privacy,
    Terms,
    Careers,
}

impl PageName {
    pub const ALL: [PageName; 7] = [
        PageName::About,
        PageName::Contact,
        PageName::Faq,
        PageName::Pricing,
        PageName::Privacy,
        PageName::Terms,
        PageName::Careers,
    ];

    /// Route keys, in the same order as `ALL`
    pub const NAMES: &'static [&'static str] = &[
        "about", "contact", "faq", "pricing", "privacy", "terms", "careers",
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PageName::About => "about",
            PageName::Contact => "contact",
            PageName::Faq => "faq",
            PageName::Pricing => "pricing",
            PageName::Privacy => "privacy",
            PageName::Terms => "terms",
            PageName::Careers => "careers",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            PageName::About => "About Us",
            PageName::Contact => "Contact",
            PageName::Faq => "Frequently Asked Questions",
            PageName::Pricing => "Pricing",
            PageName::Privacy => "Privacy Policy",
            PageName::Terms => "Terms of Service",
            PageName::Careers => "Careers",
        }
    }

    pub fn path(&self) -> String {
        format!("/{}", self.as_str())
    }
}

impl FromStr for PageName {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PageName::ALL
            .into_iter()
            .find(|page| page.as_str() == s)
            .ok_or_else(|| format!("Unknown page: {}", s))
    }
}

impl fmt::Display for PageName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
