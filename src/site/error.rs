//! Site mapping errors.
//!
//! Every variant is fatal for the build: nothing is retried and no partial
//! page set is kept.

use thiserror::Error;

use crate::content::{NodeId, QueryError};

#[derive(Debug, Error)]
pub enum SiteError {
    /// The content query reported one or more errors.
    #[error("content query failed: {}", join_errors(.0))]
    Query(Vec<QueryError>),

    /// A routable node has no usable `templateKey`.
    #[error("node `{0}` has no templateKey")]
    MissingTemplateKey(NodeId),

    /// A node names a template that is not registered.
    #[error("no template registered for `{key}` (node `{node}`)")]
    MissingTemplate { key: String, node: NodeId },

    /// A node reached page planning without a slug.
    #[error("node `{0}` has no slug")]
    MissingSlug(NodeId),

    /// A markdown node has no file path to derive a slug from.
    #[error("node `{0}` has no resolvable file path")]
    MissingPath(NodeId),

    /// A slug was computed twice for the same node.
    #[error("slug of node `{0}` is already set")]
    SlugAlreadySet(NodeId),

    /// A markdown node overrides a product but names no `overrideSlug`.
    #[error("node `{node}` overrides product `{handle}` but has no overrideSlug")]
    MissingOverrideSlug { node: NodeId, handle: String },
}

fn join_errors(errors: &[QueryError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_error_display_joins_messages() {
        let err = SiteError::Query(vec![QueryError::new("a"), QueryError::new("b")]);
        assert_eq!(err.to_string(), "content query failed: a; b");
    }

    #[test]
    fn test_missing_template_display() {
        let err = SiteError::MissingTemplate {
            key: "blog-post".into(),
            node: NodeId::new("md-1"),
        };
        assert_eq!(
            err.to_string(),
            "no template registered for `blog-post` (node `md-1`)"
        );
    }
}
