use plotframe_layout::{LayoutResult, Rect, Region};
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Show the layout logs of a test run, controlled by `RUST_LOG`
pub fn init_tracing() {
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_test_writer().with_span_events(FmtSpan::CLOSE))
        .with(EnvFilter::from_default_env())
        .try_init();
}

/// Two regions that may not share any area.
///
/// Perpendicular scales are stretched into the corners next to the canvas
/// and may meet there, everything else has to stay apart.
fn must_be_disjoint(a: Region, b: Region) -> bool {
    match (a, b) {
        (Region::Scale(side_a, _), Region::Scale(side_b, _)) => side_a == side_b,
        _ => true,
    }
}

/// Assert that no two regions of the layout overlap
pub fn assert_no_overlaps(layout: &LayoutResult) {
    let regions = layout.regions();
    for (i, (region_a, rect_a)) in regions.iter().enumerate() {
        for (region_b, rect_b) in &regions[i + 1..] {
            if must_be_disjoint(*region_a, *region_b) {
                assert!(
                    !rect_a.intersects(rect_b),
                    "{:?} {:?} overlaps {:?} {:?}",
                    region_a,
                    rect_a,
                    region_b,
                    rect_b
                );
            }
        }
    }
}

/// Assert that every region lies inside `bounds`
pub fn assert_inside(layout: &LayoutResult, bounds: Rect) {
    for (region, rect) in layout.regions() {
        assert!(
            bounds.contains(&rect),
            "{:?} {:?} is outside of {:?}",
            region,
            rect,
            bounds
        );
    }
}

/// Assert that no stored rectangle has a negative extent
pub fn assert_non_negative(layout: &LayoutResult) {
    let mut rects = vec![layout.title, layout.footer, layout.legend, layout.canvas];
    for (_, scales) in layout.scales.iter() {
        rects.extend(scales.iter().copied());
    }
    for rect in rects {
        assert!(rect.width >= 0.0 && rect.height >= 0.0, "negative size: {:?}", rect);
    }
}
