//! Path templates for the credit transfers feature.
//!
//! Every template is derived from [`BASE_PATH`] at compile time. Parameterized
//! templates carry the [`ID_PLACEHOLDER`] token (`:id`) as a whole path
//! segment; this module never substitutes it. See [`crate::links`] for that.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

macro_rules! base_path {
    () => {
        "/credit-transfers"
    };
}

macro_rules! id_placeholder {
    () => {
        ":id"
    };
}

/// Common prefix of every credit transfer route.
pub const BASE_PATH: &str = base_path!();

/// Segment replaced by a concrete identifier at dispatch time.
pub const ID_PLACEHOLDER: &str = id_placeholder!();

pub const NEW: &str = concat!(base_path!(), "/new");
pub const LIST: &str = base_path!();
pub const DETAILS: &str = concat!(base_path!(), "/", id_placeholder!());
pub const EDIT: &str = concat!(base_path!(), "/", id_placeholder!(), "/edit");

/// Logical navigation target within the credit transfers feature
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, utoipa::ToSchema,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RouteKey {
    New,
    List,
    Details,
    Edit,
}

impl RouteKey {
    pub const ALL: [RouteKey; 4] = [
        RouteKey::New,
        RouteKey::List,
        RouteKey::Details,
        RouteKey::Edit,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            RouteKey::New => "NEW",
            RouteKey::List => "LIST",
            RouteKey::Details => "DETAILS",
            RouteKey::Edit => "EDIT",
        }
    }

    pub const fn template(self) -> &'static str {
        match self {
            RouteKey::New => NEW,
            RouteKey::List => LIST,
            RouteKey::Details => DETAILS,
            RouteKey::Edit => EDIT,
        }
    }

    /// Whether the template contains [`ID_PLACEHOLDER`]
    pub fn requires_id(self) -> bool {
        self.template()
            .split('/')
            .any(|segment| segment == ID_PLACEHOLDER)
    }
}

impl fmt::Display for RouteKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string does not name a [`RouteKey`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownRouteKey(pub String);

impl fmt::Display for UnknownRouteKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Unknown route key: expected one of NEW, LIST, DETAILS, EDIT, got '{}'",
            self.0
        )
    }
}

impl std::error::Error for UnknownRouteKey {}

impl FromStr for RouteKey {
    type Err = UnknownRouteKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RouteKey::ALL
            .into_iter()
            .find(|key| key.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownRouteKey(s.to_string()))
    }
}

static ROUTES: LazyLock<BTreeMap<RouteKey, &'static str>> = LazyLock::new(|| {
    RouteKey::ALL
        .into_iter()
        .map(|key| (key, key.template()))
        .collect()
});

pub fn base_path() -> &'static str {
    BASE_PATH
}

/// The complete key to template mapping, built on first use and shared for
/// the rest of the process.
pub fn routes() -> &'static BTreeMap<RouteKey, &'static str> {
    &ROUTES
}
