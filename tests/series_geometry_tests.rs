use approx::assert_relative_eq;
use conversion_chart::api::{ChartSession, ChartSessionConfig};
use conversion_chart::core::{
    CurveKind, DailyRecord, Dataset, LineStyle, LinearScale, PathCommand, PathVertex, Variation,
    Viewport, category_x_positions, curve_commands, project_series_path,
};
use conversion_chart::render::NullRenderer;

fn rate_scale() -> LinearScale {
    LinearScale::new((0.0, 10.0), (100.0, 0.0)).expect("scale")
}

#[test]
fn categories_are_evenly_spaced_and_single_category_is_centered() {
    let viewport = Viewport::new(1000, 500);
    assert_eq!(
        category_x_positions(3, viewport, 0.0).expect("positions"),
        vec![0.0, 500.0, 1000.0]
    );
    assert_eq!(
        category_x_positions(3, viewport, 100.0).expect("positions"),
        vec![100.0, 500.0, 900.0]
    );
    assert_eq!(
        category_x_positions(1, viewport, 20.0).expect("positions"),
        vec![500.0]
    );
    assert!(category_x_positions(0, viewport, 0.0).expect("positions").is_empty());
}

#[test]
fn invalid_viewport_or_padding_is_rejected() {
    assert!(category_x_positions(2, Viewport::new(0, 10), 0.0).is_err());
    assert!(category_x_positions(2, Viewport::new(100, 10), 50.0).is_err());
    assert!(category_x_positions(2, Viewport::new(100, 10), f64::NAN).is_err());
}

#[test]
fn linear_path_connects_across_gaps() {
    let path = project_series_path(
        &[Some(0.0), None, Some(10.0)],
        &[0.0, 500.0, 1000.0],
        rate_scale(),
        CurveKind::Linear,
        false,
    )
    .expect("path");

    assert_eq!(path.vertices.len(), 2);
    assert_eq!(
        path.stroke,
        vec![
            PathCommand::MoveTo { x: 0.0, y: 100.0 },
            PathCommand::LineTo { x: 1000.0, y: 0.0 },
        ]
    );
    assert!(path.fill.is_none());
}

#[test]
fn bump_curve_uses_midpoint_control_points() {
    let vertices = [PathVertex { x: 0.0, y: 100.0 }, PathVertex { x: 100.0, y: 0.0 }];
    let commands = curve_commands(&vertices, CurveKind::Bump);

    assert_eq!(
        commands[1],
        PathCommand::CurveTo {
            x1: 50.0,
            y1: 100.0,
            x2: 50.0,
            y2: 0.0,
            x: 100.0,
            y: 0.0,
        }
    );
}

#[test]
fn monotone_curve_flattens_at_local_extrema() {
    let vertices = [
        PathVertex { x: 0.0, y: 100.0 },
        PathVertex { x: 100.0, y: 0.0 },
        PathVertex { x: 200.0, y: 100.0 },
    ];
    let commands = curve_commands(&vertices, CurveKind::Monotone);
    assert_eq!(commands.len(), 3);

    let PathCommand::CurveTo { x1, y1, x2, y2, .. } = commands[1] else {
        panic!("expected cubic segment");
    };
    assert_relative_eq!(x1, 100.0 / 3.0, epsilon = 1e-9);
    assert_relative_eq!(y1, 50.0, epsilon = 1e-9);
    assert_relative_eq!(x2, 200.0 / 3.0, epsilon = 1e-9);
    assert_relative_eq!(y2, 0.0, epsilon = 1e-9);

    let PathCommand::CurveTo { y1, y2, .. } = commands[2] else {
        panic!("expected cubic segment");
    };
    assert_relative_eq!(y1, 0.0, epsilon = 1e-9);
    assert_relative_eq!(y2, 50.0, epsilon = 1e-9);
}

#[test]
fn monotone_curve_with_two_vertices_is_a_straight_line() {
    let vertices = [PathVertex { x: 0.0, y: 10.0 }, PathVertex { x: 10.0, y: 0.0 }];
    assert_eq!(
        curve_commands(&vertices, CurveKind::Monotone)[1],
        PathCommand::LineTo { x: 10.0, y: 0.0 }
    );
}

#[test]
fn single_vertex_produces_only_a_move() {
    let vertices = [PathVertex { x: 5.0, y: 5.0 }];
    for curve in [CurveKind::Linear, CurveKind::Bump, CurveKind::Monotone] {
        assert_eq!(
            curve_commands(&vertices, curve),
            vec![PathCommand::MoveTo { x: 5.0, y: 5.0 }]
        );
    }
}

#[test]
fn area_fill_is_closed_against_zero_baseline() {
    let path = project_series_path(
        &[Some(5.0), Some(10.0)],
        &[0.0, 100.0],
        rate_scale(),
        CurveKind::Monotone,
        true,
    )
    .expect("path");

    let fill = path.fill.expect("fill path");
    let tail = &fill[fill.len() - 3..];
    assert_eq!(
        tail,
        &[
            PathCommand::LineTo { x: 100.0, y: 100.0 },
            PathCommand::LineTo { x: 0.0, y: 100.0 },
            PathCommand::Close,
        ]
    );
    assert_eq!(&fill[..path.stroke.len()], path.stroke.as_slice());
}

#[test]
fn all_gaps_produce_an_empty_path() {
    let path = project_series_path(
        &[None, None],
        &[0.0, 1.0],
        rate_scale(),
        CurveKind::Linear,
        true,
    )
    .expect("path");
    assert!(path.vertices.is_empty());
    assert!(path.stroke.is_empty());
    assert!(path.fill.is_none());
}

#[test]
fn mismatched_lengths_are_rejected() {
    let result = project_series_path(
        &[Some(1.0)],
        &[0.0, 1.0],
        rate_scale(),
        CurveKind::Linear,
        false,
    );
    assert!(result.is_err());
}

#[test]
fn rate_scale_falls_back_to_unit_domain() {
    let scale = LinearScale::for_rates(0.0, (100.0, 0.0)).expect("scale");
    assert_eq!(scale.domain(), (0.0, 1.0));
    assert!(LinearScale::new((1.0, 1.0), (0.0, 1.0)).is_err());

    let scale = LinearScale::for_rates(20.0, (90.0, 10.0)).expect("scale");
    assert_relative_eq!(scale.to_pixel(10.0).expect("pixel"), 50.0);
    assert_relative_eq!(scale.from_pixel(50.0).expect("value"), 10.0);
}

#[test]
fn session_view_projects_visible_series_into_pixels() {
    let dataset = Dataset::new(
        vec![Variation::new(1, "A"), Variation::new(2, "B")],
        vec![
            DailyRecord::new("d1").with_counts("1", 100, 10).with_counts("2", 100, 40),
            DailyRecord::new("d2").with_counts("1", 100, 20).with_counts("2", 100, 50),
        ],
    )
    .expect("dataset");
    let config = ChartSessionConfig::new(Viewport::new(200, 100)).with_padding_px(10.0);
    let mut session =
        ChartSession::with_dataset(NullRenderer::default(), config, dataset).expect("session");
    session.toggle_variation("2");
    session.set_line_style(LineStyle::Area);

    let projected = session.project_paths().expect("paths");
    assert_eq!(projected.len(), 1);
    let series = &projected[0];
    assert_eq!(series.id, "1");
    assert_eq!(
        series.path.vertices,
        vec![PathVertex { x: 10.0, y: 50.0 }, PathVertex { x: 190.0, y: 10.0 }]
    );
    assert!(series.path.fill.is_some());
}
