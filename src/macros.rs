// src/macros.rs

//! Convenience macros for instrumenting a scope or a whole function body
//! without naming the guard variable.

/// Expands to the fully-qualified name of the enclosing function as a
/// `&'static str`, with the crate-root prefix left in place.
#[macro_export]
macro_rules! function_name {
    () => {{
        fn anchor() {}
        fn name_of<T>(_: T) -> &'static str {
            std::any::type_name::<T>()
        }
        let full = name_of(anchor);
        full.strip_suffix("::anchor").unwrap_or(full)
    }};
}

/// Times the rest of the enclosing scope under `$name`, recording into
/// `$instrumentor` when the scope exits by any path.
///
/// ```
/// # let instrumentor = flamefile::Instrumentor::new();
/// # let dir = tempfile::tempdir().unwrap();
/// # instrumentor.begin_session("doc", dir.path().join("trace.json")).unwrap();
/// {
///     flamefile::profile_scope!(instrumentor, "load config");
///     // ... the work being measured ...
/// }
/// # instrumentor.end_session().unwrap();
/// ```
#[macro_export]
macro_rules! profile_scope {
    ($instrumentor:expr, $name:expr) => {
        let _flamefile_guard = $instrumentor.timer($name);
    };
}

/// Times the rest of the enclosing function, named after the function itself.
#[macro_export]
macro_rules! profile_function {
    ($instrumentor:expr) => {
        $crate::profile_scope!($instrumentor, $crate::function_name!());
    };
}

#[cfg(test)]
mod tests {
    use crate::session::Instrumentor;
    use std::fs;
    use tempfile::tempdir;

    fn event_names(path: &std::path::Path) -> Vec<String> {
        let value: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap();
        value["traceEvents"]
            .as_array()
            .unwrap()
            .iter()
            .map(|event| event["name"].as_str().unwrap().to_string())
            .collect()
    }

    #[test]
    fn test_function_name_resolves_enclosing_function() {
        let name = function_name!();
        assert!(
            name.ends_with("tests::test_function_name_resolves_enclosing_function"),
            "unexpected function name: {name}"
        );
    }

    #[test]
    fn test_profile_scope_records_on_scope_exit() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("trace.json");
        let instrumentor = Instrumentor::new();
        instrumentor.begin_session("macro-scope", &path).unwrap();

        {
            profile_scope!(instrumentor, "outer");
            {
                profile_scope!(instrumentor, "inner");
            }
        }

        instrumentor.end_session().unwrap();
        assert_eq!(event_names(&path), vec!["inner", "outer"]);
    }

    #[test]
    fn test_profile_function_uses_function_name() {
        fn traced_unit(instrumentor: &Instrumentor) {
            profile_function!(instrumentor);
        }

        let dir = tempdir().unwrap();
        let path = dir.path().join("trace.json");
        let instrumentor = Instrumentor::new();
        instrumentor.begin_session("macro-fn", &path).unwrap();

        traced_unit(&instrumentor);

        instrumentor.end_session().unwrap();
        let names = event_names(&path);
        assert_eq!(names.len(), 1);
        assert!(names[0].ends_with("traced_unit"), "got: {}", names[0]);
    }
}
