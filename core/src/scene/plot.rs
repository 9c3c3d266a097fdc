use crate::document::{Element, SolutionDocument};
use crate::math::bounds::{Bounds, AXIS_MARGIN};
use crate::prelude::DataPoint;
use crate::scene::palette::SegmentColor;
use crate::scene::title::problem_title;
use log::debug;

/// One segment group, ready to be stroked as a connected line.
#[derive(Debug, Clone, PartialEq)]
pub struct Polyline {
    pub color: SegmentColor,
    pub points: Vec<DataPoint>,
}

/// Everything the viewer draws for one solution document.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotScene {
    pub title: String,
    pub polylines: Vec<Polyline>,
    /// Points of the unsegmented solution; drawn only on request.
    pub solution_points: Vec<DataPoint>,
}

impl PlotScene {
    pub fn from_document(document: &SolutionDocument) -> Self {
        let polylines: Vec<Polyline> = document
            .segment_groups()
            .iter()
            .enumerate()
            .map(|(idx, group)| {
                let color = SegmentColor::for_group(idx);
                debug!(
                    "segment group {idx}: {} points in {}",
                    group.len(),
                    color.name()
                );
                Polyline {
                    color,
                    points: points_of(group),
                }
            })
            .collect();

        Self {
            title: problem_title(&document.problem),
            polylines,
            solution_points: points_of(&document.solution),
        }
    }

    /// Padded data extent of what is drawn, falling back to the unit square.
    pub fn bounds(&self, include_solution: bool) -> Bounds {
        let segment_points = self.polylines.iter().flat_map(|line| line.points.iter());
        let tight = if include_solution {
            Bounds::from_points(segment_points.chain(self.solution_points.iter()))
        } else {
            Bounds::from_points(segment_points)
        };
        tight.map_or(Bounds::UNIT, |b| b.padded(AXIS_MARGIN))
    }

    pub fn point_count(&self) -> usize {
        self.polylines.iter().map(|line| line.points.len()).sum()
    }
}

fn points_of(elements: &[Element]) -> Vec<DataPoint> {
    elements.iter().map(Element::point).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn document_with_segments(segments: serde_json::Value) -> SolutionDocument {
        let mut raw = json!({
            "visual_params": {},
            "solver_params": {},
            "problem": {"EI": 1.0, "elements_count": 3},
            "solution": [{"full": {"x": -5.0, "y": 7.0}}],
        });
        if !segments.is_null() {
            raw["solution_seg"] = segments;
        }
        SolutionDocument::from_value(raw).unwrap()
    }

    #[test]
    fn empty_segments_draw_nothing_but_keep_title() {
        let scene = PlotScene::from_document(&document_with_segments(json!([])));
        assert!(scene.polylines.is_empty());
        assert_eq!(scene.title, "{'EI': 1.0, 'elements_count': 3}");
    }

    #[test]
    fn absent_segments_draw_nothing() {
        let scene = PlotScene::from_document(&document_with_segments(serde_json::Value::Null));
        assert!(scene.polylines.is_empty());
        assert_eq!(scene.solution_points, vec![DataPoint::new(-5.0, 7.0)]);
    }

    #[test]
    fn groups_take_palette_colors_in_order() {
        let groups: Vec<_> = (0..5)
            .map(|i| json!([{"full": {"x": i, "y": 0.0}}]))
            .collect();
        let scene = PlotScene::from_document(&document_with_segments(json!(groups)));
        let colors: Vec<_> = scene.polylines.iter().map(|line| line.color).collect();
        assert_eq!(
            colors,
            vec![
                SegmentColor::Red,
                SegmentColor::Green,
                SegmentColor::Blue,
                SegmentColor::Red,
                SegmentColor::Green,
            ]
        );
    }

    #[test]
    fn drawn_points_match_document_values() {
        let segments = json!([
            [{"full": {"x": 0.1, "y": 0.2}}, {"full": {"x": 0.3, "y": -0.4}}, {"full": {"x": 0.0, "y": 9.5}}],
            [{"full": {"x": 3.0, "y": 2.0}}, {"full": {"x": 1.0, "y": 1.0}}],
        ]);
        let document = document_with_segments(segments);
        let scene = PlotScene::from_document(&document);
        for (line, group) in scene.polylines.iter().zip(document.segment_groups()) {
            let expected: Vec<_> = group
                .iter()
                .map(|el| DataPoint::new(el.full.x, el.full.y))
                .collect();
            assert_eq!(line.points, expected);
        }
        assert_eq!(scene.point_count(), 5);
    }

    #[test]
    fn bounds_ignore_solution_unless_requested() {
        let segments = json!([[{"full": {"x": 0.0, "y": 0.0}}, {"full": {"x": 1.0, "y": 1.0}}]]);
        let scene = PlotScene::from_document(&document_with_segments(segments));
        let segments_only = scene.bounds(false);
        assert!(segments_only.min_x > -1.0);
        let with_solution = scene.bounds(true);
        assert!(with_solution.min_x < -5.0);
        assert!(with_solution.max_y > 7.0);
    }

    #[test]
    fn empty_scene_uses_unit_bounds() {
        let scene = PlotScene::from_document(&document_with_segments(json!([])));
        assert_eq!(scene.bounds(false), Bounds::UNIT);
    }
}
