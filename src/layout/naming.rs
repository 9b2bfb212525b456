use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How a view id such as `user_name` is turned into a field name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NamingConvention {
    /// `user_name`
    Snake,
    /// `userName`
    Camel,
    /// `mUserName`
    #[default]
    #[serde(alias = "hungarian", alias = "member")]
    HungarianMember,
}

impl FromStr for NamingConvention {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "snake" => Ok(NamingConvention::Snake),
            "camel" => Ok(NamingConvention::Camel),
            "hungarian" | "member" | "hungarian_member" => Ok(NamingConvention::HungarianMember),
            other => Err(format!("unknown naming convention: {}", other)),
        }
    }
}

impl fmt::Display for NamingConvention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NamingConvention::Snake => "snake",
            NamingConvention::Camel => "camel",
            NamingConvention::HungarianMember => "hungarian",
        };
        f.write_str(name)
    }
}

/// Derive a field name from a view id.
///
/// The id is split on `_`. For `Camel` the first segment is kept as written
/// and every later one is capitalized; an empty segment appends nothing, so a
/// leading underscore leaves the first slot empty and `_user_name` derives
/// `UserName`. `HungarianMember` capitalizes every segment after an `m`. A
/// non-empty id never derives to an empty name: if nothing is appended the
/// id is returned unchanged.
pub fn derive_field_name(id: &str, convention: NamingConvention) -> String {
    let mut segments = id.split('_');

    let derived = match convention {
        NamingConvention::Snake => return id.to_string(),
        NamingConvention::Camel => {
            let mut name = segments.next().unwrap_or_default().to_string();
            for segment in segments.filter(|segment| !segment.is_empty()) {
                name.push_str(&capitalize(segment));
            }
            name
        }
        NamingConvention::HungarianMember => {
            let mut name = String::from("m");
            for segment in segments.filter(|segment| !segment.is_empty()) {
                name.push_str(&capitalize(segment));
            }
            name
        }
    };

    if derived.is_empty() {
        id.to_string()
    } else {
        derived
    }
}

/// Upper-case the first character (ASCII only, independent of locale)
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => {
            let mut out = String::with_capacity(s.len());
            out.push(first.to_ascii_uppercase());
            out.push_str(chars.as_str());
            out
        }
        None => String::new(),
    }
}
