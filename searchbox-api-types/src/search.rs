use serde::{Deserialize, Serialize};

/// One ranked hit returned by `POST /api/search`.
///
/// On the wire a result is a two element array, `["docs/gl4/glClear.xhtml", 0.42]`,
/// and a response is a JSON array of those, already ordered by the server.
#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
#[serde(from = "(String, f32)", into = "(String, f32)")]
pub struct SearchResult {
    pub path: String,
    pub rank: f32,
}

impl SearchResult {
    pub fn new(path: impl Into<String>, rank: f32) -> Self {
        Self {
            path: path.into(),
            rank,
        }
    }
}

impl From<(String, f32)> for SearchResult {
    fn from((path, rank): (String, f32)) -> Self {
        Self { path, rank }
    }
}

impl From<SearchResult> for (String, f32) {
    fn from(value: SearchResult) -> Self {
        (value.path, value.rank)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_ranked_pairs_in_order() {
        let results: Vec<SearchResult> =
            serde_json::from_str(r#"[["a.txt",3],["b.txt",1.5]]"#).unwrap();
        assert_eq!(
            results,
            vec![SearchResult::new("a.txt", 3.0), SearchResult::new("b.txt", 1.5)]
        );
    }

    #[test]
    fn serializes_as_pair() {
        let json = serde_json::to_string(&SearchResult::new("docs/x.xhtml", 0.5)).unwrap();
        assert_eq!(json, r#"["docs/x.xhtml",0.5]"#);
    }

    #[test]
    fn rejects_other_shapes() {
        assert!(serde_json::from_str::<Vec<SearchResult>>(r#"[{"path":"a","rank":1}]"#).is_err());
        assert!(serde_json::from_str::<Vec<SearchResult>>(r#"[["a.txt"]]"#).is_err());
        assert!(serde_json::from_str::<Vec<SearchResult>>(r#"{"a.txt":1}"#).is_err());
    }
}
