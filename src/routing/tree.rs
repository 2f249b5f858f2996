//! Radix tree over slash-delimited path segments.

use std::collections::HashMap;

use crate::error::RouterError;

/// A registered route: the original pattern, its parameter names in
/// declaration order, and an arbitrary payload (page metadata, component
/// entry, whatever the embedder attaches).
#[derive(Debug)]
pub struct Route<T> {
    pattern: String,
    param_names: Vec<String>,
    payload: T,
}

impl<T> Route<T> {
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn param_names(&self) -> &[String] {
        &self.param_names
    }

    pub fn payload(&self) -> &T {
        &self.payload
    }
}

/// A successful lookup: the matched route plus captured parameter values
/// bound positionally to the declared names.
#[derive(Debug)]
pub struct RouteMatch<'a, T> {
    route: &'a Route<T>,
    params: Vec<(String, String)>,
}

impl<'a, T> RouteMatch<'a, T> {
    pub fn pattern(&self) -> &str {
        self.route.pattern()
    }

    pub fn payload(&self) -> &T {
        self.route.payload()
    }

    /// Captured `(name, value)` pairs in declaration order.
    pub fn params(&self) -> &[(String, String)] {
        &self.params
    }

    pub fn param(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }
}

#[derive(Debug)]
struct ParamChild<T> {
    name: String,
    node: Box<RouteNode<T>>,
}

#[derive(Debug)]
struct RouteNode<T> {
    /// Exact-match children keyed by segment.
    children: HashMap<String, RouteNode<T>>,
    /// At most one dynamic child per level.
    param: Option<ParamChild<T>>,
    /// Present only when a route terminates here; intermediate prefixes
    /// are never matches.
    route: Option<Route<T>>,
}

impl<T> RouteNode<T> {
    fn new() -> Self {
        Self {
            children: HashMap::new(),
            param: None,
            route: None,
        }
    }
}

/// Immutable-once-published radix tree mapping URL paths to routes.
///
/// Built off to the side and swapped in wholesale through
/// [`SharedRouteTable`](crate::routing::SharedRouteTable); a table is
/// never mutated after publication.
#[derive(Debug)]
pub struct RouteTable<T> {
    root: RouteNode<T>,
}

impl<T> Default for RouteTable<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> RouteTable<T> {
    pub fn new() -> Self {
        Self {
            root: RouteNode::new(),
        }
    }

    /// Register `pattern` with its payload.
    ///
    /// Segments are slash-delimited; a `:` prefix marks a dynamic capture
    /// (`/users/:uid/posts/:pid`). `/` registers the root route.
    /// Re-registering a pattern replaces its route. Registering a second,
    /// differently-named dynamic segment at a level that already has one
    /// fails with [`RouterError::ParamConflict`].
    pub fn insert(&mut self, pattern: &str, payload: T) -> Result<(), RouterError> {
        if pattern.is_empty() {
            return Err(RouterError::EmptyPattern);
        }

        let mut node = &mut self.root;
        let mut param_names = Vec::new();

        for segment in pattern.split('/').filter(|s| !s.is_empty()) {
            if let Some(name) = segment.strip_prefix(':') {
                let child = node.param.get_or_insert_with(|| ParamChild {
                    name: name.to_string(),
                    node: Box::new(RouteNode::new()),
                });
                if child.name != name {
                    return Err(RouterError::ParamConflict {
                        existing: child.name.clone(),
                        new: name.to_string(),
                    });
                }
                param_names.push(name.to_string());
                node = &mut child.node;
            } else {
                node = node
                    .children
                    .entry(segment.to_string())
                    .or_insert_with(RouteNode::new);
            }
        }

        node.route = Some(Route {
            pattern: pattern.to_string(),
            param_names,
            payload,
        });
        Ok(())
    }

    /// Resolve a concrete path.
    ///
    /// Walks segment by segment; at every level an exact static child is
    /// preferred over the dynamic child (no backtracking). Returns `None`
    /// if neither exists at some level, or if the walk ends on a node
    /// with no registered route.
    pub fn match_path<'a>(&'a self, path: &str) -> Option<RouteMatch<'a, T>> {
        let mut node = &self.root;
        let mut captured: Vec<&str> = Vec::new();

        for segment in path.split('/').filter(|s| !s.is_empty()) {
            if let Some(child) = node.children.get(segment) {
                node = child;
            } else if let Some(ref param) = node.param {
                captured.push(segment);
                node = &param.node;
            } else {
                return None;
            }
        }

        let route = node.route.as_ref()?;
        debug_assert_eq!(route.param_names.len(), captured.len());
        let params = route
            .param_names
            .iter()
            .zip(captured)
            .map(|(name, value)| (name.clone(), value.to_string()))
            .collect();

        Some(RouteMatch { route, params })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_preferred_over_dynamic() {
        let mut table = RouteTable::new();
        table.insert("/posts/:id", "post").unwrap();
        table.insert("/posts/featured", "featured").unwrap();

        let m = table.match_path("/posts/featured").unwrap();
        assert_eq!(m.pattern(), "/posts/featured");
        assert!(m.params().is_empty());

        let m = table.match_path("/posts/42").unwrap();
        assert_eq!(m.pattern(), "/posts/:id");
        assert_eq!(m.param("id"), Some("42"));

        assert!(table.match_path("/unregistered").is_none());
    }

    #[test]
    fn test_multi_param_extraction() {
        let mut table = RouteTable::new();
        table.insert("/users/:uid/posts/:pid", ()).unwrap();

        let m = table.match_path("/users/alice/posts/456").unwrap();
        assert_eq!(m.param("uid"), Some("alice"));
        assert_eq!(m.param("pid"), Some("456"));
        assert_eq!(
            m.params(),
            &[
                ("uid".to_string(), "alice".to_string()),
                ("pid".to_string(), "456".to_string()),
            ]
        );
    }

    #[test]
    fn test_intermediate_prefix_is_not_a_match() {
        let mut table = RouteTable::new();
        table.insert("/users/:uid/posts", ()).unwrap();

        assert!(table.match_path("/users").is_none());
        assert!(table.match_path("/users/alice").is_none());
        assert!(table.match_path("/users/alice/posts").is_some());
    }

    #[test]
    fn test_param_conflict_rejected() {
        let mut table = RouteTable::new();
        table.insert("/posts/:id", ()).unwrap();

        let err = table.insert("/posts/:slug", ()).unwrap_err();
        assert_eq!(
            err,
            RouterError::ParamConflict {
                existing: "id".to_string(),
                new: "slug".to_string(),
            }
        );

        // Same name at the same level merges fine.
        table.insert("/posts/:id/edit", ()).unwrap();
        assert!(table.match_path("/posts/7/edit").is_some());
    }

    #[test]
    fn test_root_route() {
        let mut table = RouteTable::new();
        table.insert("/", "index").unwrap();

        assert_eq!(*table.match_path("/").unwrap().payload(), "index");
        assert!(table.match_path("/other").is_none());
    }

    #[test]
    fn test_empty_pattern_rejected() {
        let mut table: RouteTable<()> = RouteTable::new();
        assert_eq!(table.insert("", ()).unwrap_err(), RouterError::EmptyPattern);
    }

    #[test]
    fn test_trailing_slash_matches() {
        let mut table = RouteTable::new();
        table.insert("/about", ()).unwrap();

        assert!(table.match_path("/about/").is_some());
        assert!(table.match_path("about").is_some());
    }

    #[test]
    fn test_no_backtracking_past_static_child() {
        let mut table = RouteTable::new();
        table.insert("/posts/featured", ()).unwrap();
        table.insert("/posts/:id/comments", ()).unwrap();

        // "featured" commits to the static child, which has no
        // "comments" below it.
        assert!(table.match_path("/posts/featured/comments").is_none());
        assert!(table.match_path("/posts/9/comments").is_some());
    }
}
