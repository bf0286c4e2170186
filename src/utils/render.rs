// PNG rendering of a solved tour

use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use plotters::style::FontStyle;
use std::error::Error;
use std::path::Path;

use crate::error::{SolverError, SolverResult};
use crate::models::TourSolution;

const CONNECTION_GREY: RGBColor = RGBColor(211, 211, 211);
const START_COLOR: RGBColor = RGBColor(0x59, 0x1f, 0xf9);

/// Chart ranges `(min_x, max_x, min_y, max_y)` around the coordinates.
///
/// x gets half a unit either side; y leaves three units below for the
/// legend and two above for the route/distance text lines.
pub fn plot_bounds(coordinates: &[(f64, f64)]) -> (f64, f64, f64, f64) {
    if coordinates.is_empty() {
        return (-0.5, 0.5, -3.0, 2.0);
    }

    let mut min_x = f64::INFINITY;
    let mut max_x = f64::NEG_INFINITY;
    let mut min_y = f64::INFINITY;
    let mut max_y = f64::NEG_INFINITY;
    for &(x, y) in coordinates {
        min_x = min_x.min(x);
        max_x = max_x.max(x);
        min_y = min_y.min(y);
        max_y = max_y.max(y);
    }

    (min_x - 0.5, max_x + 0.5, min_y - 3.0, max_y + 2.0)
}

/// The two annotation lines printed above the cities
pub fn summary_lines(solution: &TourSolution) -> (String, String) {
    let order = solution
        .visiting_order
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(", ");
    (
        format!("Route: ({})", order),
        format!("Total distance: {:.3}", solution.total_distance),
    )
}

/// Draw the tour to a PNG at `output_path`.
///
/// Every city pair is connected in light grey, the best tour is drawn in
/// green, and the start city is highlighted.
pub fn render_tour(solution: &TourSolution, output_path: impl AsRef<Path>) -> SolverResult<()> {
    draw_tour(solution, output_path.as_ref()).map_err(|e| SolverError::Render(e.to_string()))
}

fn draw_tour(solution: &TourSolution, output_path: &Path) -> Result<(), Box<dyn Error>> {
    let coordinates: &[(f64, f64)] = &solution.coordinates;
    let (min_x, max_x, min_y, max_y) = plot_bounds(coordinates);

    let root = BitMapBackend::new(output_path, (1000, 800)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(
            format!("Travelling salesman (brute force) with {} cities", coordinates.len()),
            ("sans-serif", 20).into_font(),
        )
        .margin(10)
        .x_label_area_size(30)
        .y_label_area_size(30)
        .build_cartesian_2d(min_x..max_x, min_y..max_y)?;

    chart
        .configure_mesh()
        .x_desc("X axis")
        .y_desc("Y axis")
        .draw()?;

    // Connections between every pair of cities
    let pairs = coordinates.iter().enumerate().flat_map(move |(i, &from)| {
        coordinates[i + 1..]
            .iter()
            .map(move |&to| PathElement::new(vec![from, to], CONNECTION_GREY.stroke_width(1)))
    });
    chart
        .draw_series(pairs)?
        .label("Connections between cities")
        .legend(|(x, y)| {
            PathElement::new(vec![(x, y), (x + 20, y)], CONNECTION_GREY.stroke_width(1))
        });

    // The best tour
    let path = solution.ordered_coordinates();
    chart
        .draw_series(LineSeries::new(path.clone(), GREEN.stroke_width(2)))?
        .label("Route travelled")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], GREEN.stroke_width(2)));
    chart.draw_series(
        path.iter()
            .map(|&point| Circle::new(point, 5, ShapeStyle::from(&GREEN).filled())),
    )?;

    // Start and end city
    if let Some(&start) = solution
        .start_city()
        .and_then(|city| coordinates.get(city))
    {
        let style = ShapeStyle::from(&START_COLOR).filled();
        chart
            .draw_series(std::iter::once(Circle::new(start, 7, style)))?
            .label("Start and end")
            .legend(move |(x, y)| Circle::new((x, y), 7, style));
    }

    // City indices just above each marker
    let label_style = ("sans-serif", 14)
        .into_font()
        .style(FontStyle::Bold)
        .color(&BLACK)
        .pos(Pos::new(HPos::Center, VPos::Bottom));
    chart.draw_series(coordinates.iter().enumerate().map(|(city, &(x, y))| {
        Text::new(city.to_string(), (x, y + 0.2), label_style.clone())
    }))?;

    // Route and distance summary
    let (route_line, distance_line) = summary_lines(solution);
    let text_style = ("sans-serif", 16).into_font().color(&BLACK);
    chart.draw_series(vec![
        Text::new(route_line, (min_x + 0.1, max_y - 0.5), text_style.clone()),
        Text::new(distance_line, (min_x + 0.1, max_y - 1.0), text_style),
    ])?;

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .position(SeriesLabelPosition::LowerLeft)
        .draw()?;

    root.present()?;

    Ok(())
}
