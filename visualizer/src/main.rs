use anyhow::Context;
use beamplotcore::{PlotScene, SolutionDocument};
use clap::Parser;
use cli::Args;
use config::ViewerConfig;
use iced::{
    widget::{button, canvas::Canvas, column, row, text, text::Wrapping, Container},
    Alignment, Element, Length, Size, Task, Theme,
};
use log::info;
use plot::{PlotStyle, SolutionPlot};
use std::io;
use std::path::Path;

mod cli;
mod config;
mod fatal;
mod plot;

fn main() {
    env_logger::init();
    let args = Args::parse();
    let status = fatal::guard(|| run(args));
    std::process::exit(status);
}

fn run(args: Args) -> anyhow::Result<()> {
    let mut config = match &args.config {
        Some(path) => ViewerConfig::load(path)?,
        None => ViewerConfig::default(),
    };
    if args.show_solution {
        config.show_solution_points = true;
    }

    let path = args.resolve_path(&mut io::stdin().lock(), &mut io::stdout())?;
    let document = SolutionDocument::load(&path)
        .with_context(|| format!("loading solution document {}", path.display()))?;
    let scene = PlotScene::from_document(&document);
    info!(
        "plotting {} segment groups ({} points)",
        scene.polylines.len(),
        scene.point_count()
    );

    let window_size = Size::new(config.window_width, config.window_height);
    let viewer = Viewer::new(scene, config, window_label(&path));

    iced::application(
        move || (viewer.clone(), Task::none()),
        Viewer::update,
        Viewer::view,
    )
    .title(application_title)
    .theme(application_theme)
    .window_size(window_size)
    .run()
    .context("running viewer window")?;

    info!("viewer closed");
    Ok(())
}

fn window_label(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

fn application_title(state: &Viewer) -> String {
    format!("beamplot - {}", state.label)
}

fn application_theme(_: &Viewer) -> Theme {
    Theme::Light
}

#[derive(Debug, Clone)]
struct Viewer {
    scene: PlotScene,
    config: ViewerConfig,
    label: String,
    show_solution: bool,
}

#[derive(Debug, Clone)]
enum Message {
    ToggleSolution,
}

impl Viewer {
    fn new(scene: PlotScene, config: ViewerConfig, label: String) -> Self {
        let show_solution = config.show_solution_points;
        Self {
            scene,
            config,
            label,
            show_solution,
        }
    }

    fn update(state: &mut Self, message: Message) -> Task<Message> {
        match message {
            Message::ToggleSolution => {
                state.show_solution = !state.show_solution;
                Task::none()
            }
        }
    }

    fn view(state: &Self) -> Element<'_, Message> {
        let title = Container::new(
            text(&state.scene.title)
                .size(state.config.title_size)
                .wrapping(Wrapping::Word),
        )
        .center_x(Length::Fill)
        .padding(8);

        let plot = Canvas::new(SolutionPlot::new(&state.scene, state.plot_style()))
            .width(Length::Fill)
            .height(Length::Fill);

        let toggle_label = if state.show_solution {
            "Hide solution points"
        } else {
            "Show solution points"
        };
        let footer = row![
            text(state.summary()).size(13).width(Length::Fill),
            button(toggle_label)
                .on_press(Message::ToggleSolution)
                .padding(6),
        ]
        .spacing(12)
        .align_y(Alignment::Center);

        let layout = column![title, plot, footer].spacing(8).padding(12);

        Container::new(layout)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    fn plot_style(&self) -> PlotStyle {
        PlotStyle {
            line_width: self.config.line_width,
            marker_radius: self.config.marker_radius,
            tick_count: self.config.tick_count,
            show_solution: self.show_solution,
        }
    }

    fn summary(&self) -> String {
        format!(
            "{} segment groups / {} solution points",
            self.scene.polylines.len(),
            self.scene.solution_points.len()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn viewer(config: ViewerConfig) -> Viewer {
        let document = SolutionDocument::from_value(json!({
            "visual_params": {},
            "solver_params": {},
            "problem": {"elements_count": 2},
            "solution": [{"full": {"x": 0.0, "y": 0.0}}, {"full": {"x": 1.0, "y": 0.0}}],
            "solution_seg": [[{"full": {"x": 0.0, "y": 0.0}}, {"full": {"x": 1.0, "y": 0.0}}]],
        }))
        .unwrap();
        Viewer::new(
            PlotScene::from_document(&document),
            config,
            "solution.json".into(),
        )
    }

    #[test]
    fn solution_overlay_starts_from_config_and_toggles() {
        let mut state = viewer(ViewerConfig::default());
        assert!(!state.plot_style().show_solution);
        let _ = Viewer::update(&mut state, Message::ToggleSolution);
        assert!(state.plot_style().show_solution);

        let enabled = viewer(ViewerConfig {
            show_solution_points: true,
            ..ViewerConfig::default()
        });
        assert!(enabled.show_solution);
    }

    #[test]
    fn summary_and_title_describe_document() {
        let state = viewer(ViewerConfig::default());
        assert_eq!(state.summary(), "1 segment groups / 2 solution points");
        assert_eq!(application_title(&state), "beamplot - solution.json");
    }

    #[test]
    fn window_label_prefers_file_name() {
        assert_eq!(window_label(Path::new("runs/a/solution.json")), "solution.json");
        assert_eq!(window_label(Path::new("/")), "/");
    }
}
