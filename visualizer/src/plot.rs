use beamplotcore::math::{format_tick, nice_step, nice_ticks, ScreenRect, Viewport};
use beamplotcore::scene::{PlotScene, SegmentColor};
use beamplotcore::DataPoint;
use iced::{
    mouse,
    widget::canvas::{self, Frame, Geometry, Path, Stroke, Text},
    Color, Pixels, Point, Rectangle, Renderer, Size, Theme,
};

const MARGIN_LEFT: f32 = 64.0;
const MARGIN_RIGHT: f32 = 16.0;
const MARGIN_TOP: f32 = 8.0;
const MARGIN_BOTTOM: f32 = 32.0;
const TICK_LENGTH: f32 = 5.0;
const LABEL_SIZE: f32 = 11.0;
// rough advance of one label glyph, for centering without text metrics
const LABEL_CHAR_WIDTH: f32 = 6.2;

const AXIS_COLOR: Color = Color {
    r: 0.15,
    g: 0.15,
    b: 0.15,
    a: 1.0,
};
const GRID_COLOR: Color = Color {
    r: 0.9,
    g: 0.9,
    b: 0.9,
    a: 1.0,
};
const SOLUTION_COLOR: Color = Color {
    r: 0.12,
    g: 0.47,
    b: 0.71,
    a: 1.0,
};

/// Drawing options taken from the viewer config and window state.
#[derive(Debug, Clone, Copy)]
pub struct PlotStyle {
    pub line_width: f32,
    pub marker_radius: f32,
    pub tick_count: usize,
    pub show_solution: bool,
}

/// Canvas program that draws a [`PlotScene`] as a framed line plot.
pub struct SolutionPlot<'a> {
    scene: &'a PlotScene,
    style: PlotStyle,
}

impl<'a> SolutionPlot<'a> {
    pub fn new(scene: &'a PlotScene, style: PlotStyle) -> Self {
        Self { scene, style }
    }
}

impl<Message> canvas::Program<Message> for SolutionPlot<'_> {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        frame.fill_rectangle(Point::ORIGIN, bounds.size(), Color::WHITE);

        let Some(area) = plot_area(bounds.size()) else {
            return vec![frame.into_geometry()];
        };
        let viewport = Viewport::new(self.scene.bounds(self.style.show_solution), area);

        draw_axes(&mut frame, &viewport, self.style.tick_count);

        for line in &self.scene.polylines {
            let path = polyline_path(&viewport, &line.points);
            frame.stroke(
                &path,
                Stroke::default()
                    .with_width(self.style.line_width)
                    .with_color(segment_color(line.color)),
            );
        }

        if self.style.show_solution {
            for point in &self.scene.solution_points {
                let center = screen_point(&viewport, *point);
                let marker =
                    Path::new(|builder| builder.circle(center, self.style.marker_radius));
                frame.fill(&marker, SOLUTION_COLOR);
            }
        }

        let border = Path::rectangle(
            Point::new(area.x as f32, area.y as f32),
            Size::new(area.width as f32, area.height as f32),
        );
        frame.stroke(
            &border,
            Stroke::default().with_width(1.0).with_color(AXIS_COLOR),
        );

        vec![frame.into_geometry()]
    }
}

pub fn segment_color(color: SegmentColor) -> Color {
    let [r, g, b] = color.rgb();
    Color::from_rgb(r, g, b)
}

fn plot_area(size: Size) -> Option<ScreenRect> {
    let width = size.width - MARGIN_LEFT - MARGIN_RIGHT;
    let height = size.height - MARGIN_TOP - MARGIN_BOTTOM;
    (width > 0.0 && height > 0.0).then(|| ScreenRect {
        x: MARGIN_LEFT as f64,
        y: MARGIN_TOP as f64,
        width: width as f64,
        height: height as f64,
    })
}

fn screen_point(viewport: &Viewport, point: DataPoint) -> Point {
    let (x, y) = viewport.to_screen(point);
    Point::new(x as f32, y as f32)
}

fn polyline_path(viewport: &Viewport, points: &[DataPoint]) -> Path {
    Path::new(|builder| {
        for (idx, point) in points.iter().enumerate() {
            let target = screen_point(viewport, *point);
            if idx == 0 {
                builder.move_to(target);
            } else {
                builder.line_to(target);
            }
        }
    })
}

fn draw_axes(frame: &mut Frame, viewport: &Viewport, tick_count: usize) {
    let data = viewport.data;
    let area = viewport.screen;
    let left = area.x as f32;
    let right = (area.x + area.width) as f32;
    let top = area.y as f32;
    let bottom = (area.y + area.height) as f32;

    let grid = Stroke::default().with_width(1.0).with_color(GRID_COLOR);
    let tick = Stroke::default().with_width(1.0).with_color(AXIS_COLOR);

    if let Some(step) = nice_step(data.min_x, data.max_x, tick_count) {
        for value in nice_ticks(data.min_x, data.max_x, tick_count) {
            let x = viewport.screen_x(value) as f32;
            frame.stroke(&segment(Point::new(x, top), Point::new(x, bottom)), grid);
            frame.stroke(
                &segment(Point::new(x, bottom), Point::new(x, bottom + TICK_LENGTH)),
                tick,
            );
            let label = format_tick(value, step);
            let half_width = label.len() as f32 * LABEL_CHAR_WIDTH / 2.0;
            frame.fill_text(tick_label(
                label,
                Point::new(x - half_width, bottom + TICK_LENGTH + 3.0),
            ));
        }
    }

    if let Some(step) = nice_step(data.min_y, data.max_y, tick_count) {
        for value in nice_ticks(data.min_y, data.max_y, tick_count) {
            let y = viewport.screen_y(value) as f32;
            frame.stroke(&segment(Point::new(left, y), Point::new(right, y)), grid);
            frame.stroke(
                &segment(Point::new(left - TICK_LENGTH, y), Point::new(left, y)),
                tick,
            );
            let label = format_tick(value, step);
            let width = label.len() as f32 * LABEL_CHAR_WIDTH;
            frame.fill_text(tick_label(
                label,
                Point::new(left - TICK_LENGTH - 4.0 - width, y - LABEL_SIZE / 2.0),
            ));
        }
    }
}

fn segment(from: Point, to: Point) -> Path {
    Path::new(|builder| {
        builder.move_to(from);
        builder.line_to(to);
    })
}

fn tick_label(content: String, position: Point) -> Text {
    Text {
        content,
        position,
        color: AXIS_COLOR,
        size: Pixels(LABEL_SIZE),
        ..Text::default()
    }
}
