use crate::document::element::{Element, SegmentGroup};
use crate::prelude::{DocumentError, DocumentResult};
use log::info;
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;

/// Solution document produced by the beam solver.
///
/// `visual_params`, `solver_params` and `problem` are kept opaque. The
/// document is read once and never written back.
#[derive(Debug, Clone)]
pub struct SolutionDocument {
    pub visual_params: Value,
    pub solver_params: Value,
    pub problem: Value,
    pub solution: Vec<Element>,
    pub solution_seg: Option<Vec<SegmentGroup>>,
}

impl SolutionDocument {
    /// Reads and parses the document at `path`. The file is closed before
    /// parsing starts.
    pub fn load<P: AsRef<Path>>(path: P) -> DocumentResult<Self> {
        let path_ref = path.as_ref();
        let contents = fs::read_to_string(path_ref).map_err(|source| DocumentError::Io {
            path: path_ref.to_path_buf(),
            source,
        })?;
        let document = Self::from_json_str(&contents)?;
        info!(
            "loaded {}: {} solution elements, {} segment groups",
            path_ref.display(),
            document.solution.len(),
            document.segment_groups().len()
        );
        Ok(document)
    }

    pub fn from_json_str(contents: &str) -> DocumentResult<Self> {
        let value: Value = serde_json::from_str(contents)?;
        Self::from_value(value)
    }

    pub fn from_value(value: Value) -> DocumentResult<Self> {
        let Value::Object(mut root) = value else {
            return Err(DocumentError::NotAnObject);
        };

        let visual_params = take_required(&mut root, "visual_params")?;
        let solver_params = take_required(&mut root, "solver_params")?;
        let problem = take_required(&mut root, "problem")?;

        let solution = match take_required(&mut root, "solution")? {
            Value::Array(items) => parse_elements(items, |idx| format!("solution[{idx}]"))?,
            _ => return Err(DocumentError::NotASequence("solution")),
        };

        let solution_seg = match root.remove("solution_seg") {
            None => None,
            Some(Value::Array(groups)) => Some(parse_groups(groups)?),
            Some(_) => return Err(DocumentError::NotASequence("solution_seg")),
        };

        Ok(Self {
            visual_params,
            solver_params,
            problem,
            solution,
            solution_seg,
        })
    }

    /// Segment groups in document order; empty when `solution_seg` is absent.
    pub fn segment_groups(&self) -> &[SegmentGroup] {
        self.solution_seg.as_deref().unwrap_or_default()
    }
}

fn take_required(root: &mut Map<String, Value>, key: &'static str) -> DocumentResult<Value> {
    root.remove(key).ok_or(DocumentError::MissingKey(key))
}

fn parse_groups(groups: Vec<Value>) -> DocumentResult<Vec<SegmentGroup>> {
    groups
        .into_iter()
        .enumerate()
        .map(|(group_idx, group)| match group {
            Value::Array(items) => {
                parse_elements(items, |idx| format!("solution_seg[{group_idx}][{idx}]"))
            }
            _ => Err(DocumentError::MalformedGroup { index: group_idx }),
        })
        .collect()
}

fn parse_elements<F>(items: Vec<Value>, location: F) -> DocumentResult<Vec<Element>>
where
    F: Fn(usize) -> String,
{
    items
        .into_iter()
        .enumerate()
        .map(|(idx, item)| {
            serde_json::from_value(item).map_err(|source| DocumentError::MalformedElement {
                location: location(idx),
                source,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn base_document() -> Value {
        json!({
            "visual_params": {"scale": 1.0},
            "solver_params": {"steps": 10},
            "problem": {"corr_selector": 0, "EI": 1.0, "elements_count": 2},
            "solution": [
                {"full": {"x": 0.0, "y": 0.0}},
                {"full": {"x": 1.0, "y": 0.5}},
            ],
        })
    }

    #[test]
    fn document_without_segments_is_valid() {
        let document = SolutionDocument::from_value(base_document()).unwrap();
        assert_eq!(document.solution.len(), 2);
        assert!(document.solution_seg.is_none());
        assert!(document.segment_groups().is_empty());
    }

    #[test]
    fn document_reads_segment_groups_in_order() {
        let mut raw = base_document();
        raw["solution_seg"] = json!([
            [{"full": {"x": 0.0, "y": 0.0}}, {"full": {"x": 1.0, "y": 1.0}}],
            [{"full": {"x": 2.0, "y": 3.0}}],
        ]);
        let document = SolutionDocument::from_value(raw).unwrap();
        let groups = document.segment_groups();
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[1][0], Element::new(2.0, 3.0));
    }

    #[test]
    fn missing_problem_is_reported_by_key() {
        let mut raw = base_document();
        raw.as_object_mut().unwrap().remove("problem");
        let err = SolutionDocument::from_value(raw).unwrap_err();
        assert!(matches!(err, DocumentError::MissingKey("problem")));
    }

    #[test]
    fn missing_solution_is_reported_by_key() {
        let mut raw = base_document();
        raw.as_object_mut().unwrap().remove("solution");
        let err = SolutionDocument::from_value(raw).unwrap_err();
        assert!(matches!(err, DocumentError::MissingKey("solution")));
    }

    #[test]
    fn null_segments_are_rejected() {
        let mut raw = base_document();
        raw["solution_seg"] = Value::Null;
        let err = SolutionDocument::from_value(raw).unwrap_err();
        assert!(matches!(err, DocumentError::NotASequence("solution_seg")));
    }

    #[test]
    fn malformed_element_reports_location() {
        let mut raw = base_document();
        raw["solution_seg"] = json!([[{"full": {"x": 0.0, "y": 0.0}}], [{"full": {"x": 1.0}}]]);
        match SolutionDocument::from_value(raw).unwrap_err() {
            DocumentError::MalformedElement { location, .. } => {
                assert_eq!(location, "solution_seg[1][0]")
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn non_sequence_group_is_rejected() {
        let mut raw = base_document();
        raw["solution_seg"] = json!([[], {"full": {"x": 0.0, "y": 0.0}}]);
        let err = SolutionDocument::from_value(raw).unwrap_err();
        assert!(matches!(err, DocumentError::MalformedGroup { index: 1 }));
    }

    #[test]
    fn non_finite_coordinates_never_load() {
        let nan = r#"{"visual_params": {}, "solver_params": {}, "problem": {},
            "solution": [{"full": {"x": NaN, "y": 0.0}}]}"#;
        assert!(matches!(
            SolutionDocument::from_json_str(nan).unwrap_err(),
            DocumentError::Parse(_)
        ));
        let overflow = r#"{"visual_params": {}, "solver_params": {}, "problem": {},
            "solution": [{"full": {"x": 1e400, "y": 0.0}}]}"#;
        assert!(SolutionDocument::from_json_str(overflow).is_err());
    }

    #[test]
    fn non_object_root_is_rejected() {
        let err = SolutionDocument::from_json_str("[1, 2, 3]").unwrap_err();
        assert!(matches!(err, DocumentError::NotAnObject));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = SolutionDocument::from_json_str("{\"problem\": ").unwrap_err();
        assert!(matches!(err, DocumentError::Parse(_)));
    }

    #[test]
    fn load_reads_file_from_disk() {
        let mut temp = NamedTempFile::new().unwrap();
        temp.write_all(base_document().to_string().as_bytes())
            .unwrap();
        let path = temp.into_temp_path();
        let document = SolutionDocument::load(&path).unwrap();
        assert_eq!(document.problem["elements_count"], 2);
    }

    #[test]
    fn load_reports_missing_file() {
        let err = SolutionDocument::load("/nonexistent/solution.json").unwrap_err();
        assert!(matches!(err, DocumentError::Io { .. }));
    }
}
