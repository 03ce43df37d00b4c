//! Filter-expression building for record-store list queries.

/// Builds the boolean-OR id filter: `id="a" || id="b" || id="c"`.
///
/// Ids that match no document are silently absent from the result. That is
/// filter semantics, not an error. An empty input produces an empty string;
/// callers short-circuit before issuing a request.
pub fn ids_filter<S: AsRef<str>>(ids: &[S]) -> String {
    ids.iter()
        .map(|id| format!("id=\"{}\"", id.as_ref()))
        .collect::<Vec<_>>()
        .join(" || ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_id() {
        assert_eq!(ids_filter(&["abc123"]), "id=\"abc123\"");
    }

    #[test]
    fn test_multiple_ids_joined_with_or() {
        assert_eq!(
            ids_filter(&["a1", "b2", "c3"]),
            "id=\"a1\" || id=\"b2\" || id=\"c3\""
        );
    }

    #[test]
    fn test_empty_input_is_empty_string() {
        let ids: [&str; 0] = [];
        assert_eq!(ids_filter(&ids), "");
    }
}
