use std::{fmt, str::FromStr};

use crate::foundation::error::{SiteError, SiteResult};

/// The five routed pages.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Route {
    Home,
    Product,
    Philosophy,
    About,
    Contact,
}

impl Route {
    /// Menu order.
    pub const ALL: [Route; 5] = [
        Self::Home,
        Self::Product,
        Self::Philosophy,
        Self::About,
        Self::Contact,
    ];

    pub fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Product => "/product",
            Self::Philosophy => "/philosophy",
            Self::About => "/about",
            Self::Contact => "/contact",
        }
    }

    pub fn slug(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Product => "product",
            Self::Philosophy => "philosophy",
            Self::About => "about",
            Self::Contact => "contact",
        }
    }

    pub fn menu_label(self) -> &'static str {
        match self {
            Self::Home => "ESSENCE",
            Self::Product => "VOID 01",
            Self::Philosophy => "MANIFESTO",
            Self::About => "THE MAKERS",
            Self::Contact => "INQUIRY",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

impl FromStr for Route {
    type Err = SiteError;

    /// Accepts the exact paths, with or without a trailing slash.
    fn from_str(s: &str) -> SiteResult<Self> {
        let trimmed = s.trim();
        let path = match trimmed.trim_end_matches('/') {
            "" => "/",
            p => p,
        };
        Self::ALL
            .into_iter()
            .find(|r| r.path() == path)
            .ok_or_else(|| SiteError::routing(format!("no page at '{trimmed}'")))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/site/routes.rs"]
mod tests;
