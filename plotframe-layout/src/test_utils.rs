/// Test utilities for debugging and visualization
pub mod layout_debug {
    use crate::engine::{LayoutResult, Region};
    use plotframe_common::Rect;
    use std::fmt::Write;

    fn style(region: Region) -> (&'static str, &'static str) {
        match region {
            Region::Title | Region::Footer => ("#fff3d0", "orange"),
            Region::Legend => ("#ffe0e0", "red"),
            Region::Canvas => ("#f0f0f0", "blue"),
            Region::Scale(..) => ("#e0ffe0", "green"),
        }
    }

    fn label(region: Region) -> String {
        match region {
            Region::Scale(side, slot) => format!("Scale {:?} {}", side, slot),
            other => format!("{:?}", other),
        }
    }

    /// Generate an SVG visualization of the layout result
    pub fn layout_to_svg(layout: &LayoutResult, bounds: Rect) -> String {
        let mut svg = String::new();

        writeln!(
            &mut svg,
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{}\" height=\"{}\" viewBox=\"{} {} {} {}\">",
            bounds.width, bounds.height, bounds.x, bounds.y, bounds.width, bounds.height
        )
        .unwrap();
        writeln!(
            &mut svg,
            "  <rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"white\" stroke=\"black\" stroke-width=\"1\"/>",
            bounds.x, bounds.y, bounds.width, bounds.height
        )
        .unwrap();

        for (region, rect) in layout.regions() {
            let (fill, stroke) = style(region);
            writeln!(
                &mut svg,
                "  <rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"{}\" stroke=\"{}\" stroke-width=\"1\" opacity=\"0.7\"/>",
                rect.x, rect.y, rect.width, rect.height, fill, stroke
            )
            .unwrap();
            writeln!(
                &mut svg,
                "  <text x=\"{}\" y=\"{}\" font-size=\"10\" fill=\"{}\">{}</text>",
                rect.x + 2.0,
                rect.y + 10.0,
                stroke,
                label(region)
            )
            .unwrap();
            writeln!(
                &mut svg,
                "  <text x=\"{}\" y=\"{}\" font-size=\"8\" fill=\"gray\">{}x{}</text>",
                rect.x + 2.0,
                rect.y + 20.0,
                rect.width as i32,
                rect.height as i32
            )
            .unwrap();
        }

        writeln!(&mut svg, "</svg>").unwrap();
        svg
    }

    /// Print layout details for debugging
    pub fn print_layout_details(layout: &LayoutResult) {
        println!("\n=== Layout Details ===");
        println!("Solver iterations: {}", layout.iterations);
        for (region, rect) in layout.regions() {
            println!(
                "{:<16} x={:.1}, y={:.1}, w={:.1}, h={:.1}",
                label(region),
                rect.x,
                rect.y,
                rect.width,
                rect.height
            );
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use crate::components::{PlotComponents, ScaleSpec, TextLabel};
        use crate::engine::compute_layout;
        use crate::options::LayoutOptions;
        use crate::settings::LayoutSettings;
        use crate::snapshot::MeasurementSnapshot;
        use plotframe_common::Side;
        use plotframe_text::measurement::heuristic::HeuristicTextMeasurer;

        #[test]
        fn test_layout_to_svg() {
            let components = PlotComponents::new()
                .title(TextLabel::new("Title"))
                .scale(Side::Left, ScaleSpec::new().label_extent(30.0));
            let bounds = Rect::new(0.0, 0.0, 400.0, 300.0);
            let measurer = HeuristicTextMeasurer::default();
            let snapshot = MeasurementSnapshot::capture(&components, bounds, &measurer);
            let layout = compute_layout(bounds, &LayoutSettings::default(), LayoutOptions::empty(), &snapshot);

            print_layout_details(&layout);
            let svg = layout_to_svg(&layout, bounds);
            assert!(svg.starts_with("<svg"));
            assert!(svg.contains(">Canvas</text>"));
            assert!(svg.contains(">Scale Left 0</text>"));
            assert!(svg.contains(">Title</text>"));
            assert!(!svg.contains("Legend"));
        }
    }
}
