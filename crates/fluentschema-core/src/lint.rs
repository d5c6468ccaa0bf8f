//! Construction-time checks for schemas.
//!
//! An undeclared node makes `validate` reject silently. These checks find
//! such nodes up front without changing how evaluation behaves.
//!
//! Paths start at `$`; `.name` enters an object property, `[]` an array
//! element and `|n` the n-th union alternative.

use crate::error::{Result, SchemaError};
use crate::kind::Kind;
use crate::schema::Schema;

impl Schema {
    /// Paths of every reachable node with no declared kind.
    pub fn undeclared_paths(&self) -> Vec<String> {
        let mut paths = Vec::new();
        collect_undeclared(self, "$".to_string(), &mut paths);
        paths
    }

    /// Fail with the first undeclared path, if any.
    pub fn ensure_declared(&self) -> Result<()> {
        match self.undeclared_paths().into_iter().next() {
            Some(path) => Err(SchemaError::Undeclared { path }),
            None => Ok(()),
        }
    }
}

fn collect_undeclared(schema: &Schema, path: String, paths: &mut Vec<String>) {
    match schema.kind() {
        Kind::Unset => paths.push(path),
        Kind::String | Kind::Number | Kind::Boolean => {}
        Kind::Object(properties) => {
            for (name, child) in properties {
                collect_undeclared(child, format!("{path}.{name}"), paths);
            }
        }
        Kind::Array(element) => collect_undeclared(element, format!("{path}[]"), paths),
        Kind::Union(alternatives) => {
            for (index, alternative) in alternatives.iter().enumerate() {
                collect_undeclared(alternative, format!("{path}|{index}"), paths);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::is;

    use super::*;

    #[test]
    fn declared_schema_passes() {
        let schema = is::object([
            ("name", is::string()),
            ("tags", is::optional().array_of(is::string())),
            ("pick", is::one_of([is::number(), is::boolean()])),
        ]);
        assert!(schema.undeclared_paths().is_empty());
        assert!(schema.ensure_declared().is_ok());
    }

    #[test]
    fn bare_root_is_reported() {
        assert_eq!(is::optional().undeclared_paths(), vec!["$"]);
        assert!(matches!(
            is::which(|_| true).ensure_declared(),
            Err(SchemaError::Undeclared { path }) if path == "$"
        ));
    }

    #[test]
    fn nested_paths_are_reported_in_order() {
        let schema = is::object([
            ("a", Schema::new()),
            ("list", is::array_of(is::optional())),
            ("pick", is::one_of([is::string(), Schema::new()])),
        ]);
        assert_eq!(schema.undeclared_paths(), vec!["$.a", "$.list[]", "$.pick|1"]);
        assert!(matches!(
            schema.ensure_declared(),
            Err(SchemaError::Undeclared { path }) if path == "$.a"
        ));
    }

    #[test]
    fn empty_composites_are_declared() {
        assert!(is::any_object().ensure_declared().is_ok());
        assert!(is::one_of(Vec::new()).ensure_declared().is_ok());
    }
}
