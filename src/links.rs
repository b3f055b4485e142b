use crate::credit_transfers::{ID_PLACEHOLDER, RouteKey};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkError {
    /// The template has a placeholder but no identifier was supplied
    MissingId(RouteKey),
}

impl fmt::Display for LinkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LinkError::MissingId(key) => {
                write!(f, "Missing required parameter 'id' for route {}", key)
            }
        }
    }
}

impl std::error::Error for LinkError {}

/// Build a concrete link for `key`.
///
/// The identifier is inserted verbatim in place of the placeholder segment.
/// It is ignored for templates without a placeholder.
pub fn href(key: RouteKey, id: Option<&str>) -> Result<String, LinkError> {
    let template = key.template();
    if !key.requires_id() {
        return Ok(template.to_string());
    }

    let id = id.ok_or(LinkError::MissingId(key))?;

    let link = template
        .split('/')
        .map(|segment| if segment == ID_PLACEHOLDER { id } else { segment })
        .collect::<Vec<_>>()
        .join("/");

    Ok(link)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_href_substitutes_id() {
        assert_eq!(
            href(RouteKey::Details, Some("42")).unwrap(),
            "/credit-transfers/42"
        );
        assert_eq!(
            href(RouteKey::Edit, Some("42")).unwrap(),
            "/credit-transfers/42/edit"
        );
    }

    #[test]
    fn test_href_static_routes_ignore_id() {
        assert_eq!(href(RouteKey::List, None).unwrap(), "/credit-transfers");
        assert_eq!(
            href(RouteKey::New, Some("42")).unwrap(),
            "/credit-transfers/new"
        );
    }

    #[test]
    fn test_href_missing_id() {
        let err = href(RouteKey::Edit, None).unwrap_err();
        assert_eq!(err, LinkError::MissingId(RouteKey::Edit));
        assert_eq!(
            err.to_string(),
            "Missing required parameter 'id' for route EDIT"
        );
    }

    #[test]
    fn test_href_does_not_validate_id() {
        // Identifiers are opaque; whatever the caller passes ends up in the link
        assert_eq!(
            href(RouteKey::Details, Some("")).unwrap(),
            "/credit-transfers/"
        );
        assert_eq!(
            href(RouteKey::Details, Some(":id")).unwrap(),
            "/credit-transfers/:id"
        );
    }
}
