//! Layout direction and page language
//!
//! The host passes the layout direction in explicitly; the page language of
//! the learn-more web view is derived from it, so text direction and page
//! language can never disagree.

use serde::{Deserialize, Serialize};

/// Text flow direction of the surrounding UI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LayoutDirection {
    /// Left-to-right (e.g. English)
    Ltr,
    /// Right-to-left (e.g. Arabic)
    Rtl,
}

impl LayoutDirection {
    pub fn is_rtl(self) -> bool {
        self == LayoutDirection::Rtl
    }

    /// Language of the learn-more page for this direction
    pub fn page_lang(self) -> Lang {
        match self {
            LayoutDirection::Ltr => Lang::En,
            LayoutDirection::Rtl => Lang::Ar,
        }
    }

    /// Value for the HTML `dir` attribute
    pub fn dir_attr(self) -> &'static str {
        match self {
            LayoutDirection::Ltr => "ltr",
            LayoutDirection::Rtl => "rtl",
        }
    }
}

/// Supported content languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Lang {
    En,
    Ar,
}

impl Lang {
    pub fn code(self) -> &'static str {
        match self {
            Lang::En => "en",
            Lang::Ar => "ar",
        }
    }
}
