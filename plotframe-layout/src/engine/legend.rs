use crate::options::LayoutOptions;
use crate::settings::LayoutSettings;
use crate::snapshot::LegendData;
use plotframe_common::{LegendPosition, Rect};

/// Cut the legend out of `rect`, flush to the edge named by the legend position.
///
/// The legend takes at most `legend_ratio` of the rectangle in the direction
/// it grows; a left/right legend that has to scroll also gets room for its
/// vertical scrollbar.
pub(crate) fn layout_legend(
    settings: &LayoutSettings,
    options: LayoutOptions,
    legend: &LegendData,
    rect: Rect,
) -> Rect {
    let position = settings.legend_position;
    let ratio = settings.legend_ratio;

    let dim = if position.is_horizontal() {
        legend
            .hint
            .height
            .min((rect.height * ratio).floor())
            .max(legend.v_scroll_extent)
    } else {
        let mut dim = legend.hint.width.min((rect.width * ratio).floor());
        if !options.contains(LayoutOptions::IGNORE_SCROLLBARS) && legend.hint.height > rect.height {
            dim += legend.h_scroll_extent;
        }
        dim
    };

    let mut legend_rect = rect;
    match position {
        LegendPosition::Left => legend_rect.width = dim,
        LegendPosition::Right => {
            legend_rect.x = rect.right() - dim;
            legend_rect.width = dim;
        }
        LegendPosition::Top => legend_rect.height = dim,
        LegendPosition::Bottom => {
            legend_rect.y = rect.bottom() - dim;
            legend_rect.height = dim;
        }
    }

    tracing::trace!(?position, dim, "placed legend");
    legend_rect
}

/// Stretch a legend that is smaller than the canvas along the canvas
/// instead of the whole plot
pub(crate) fn align_legend(
    settings: &LayoutSettings,
    legend: &LegendData,
    canvas: Rect,
    legend_rect: Rect,
) -> Rect {
    let mut aligned = legend_rect;

    if settings.legend_position.is_horizontal() {
        if legend.hint.width < canvas.width {
            aligned.x = canvas.x;
            aligned.width = canvas.width;
        }
    } else if legend.hint.height < canvas.height {
        aligned.y = canvas.y;
        aligned.height = canvas.height;
    }

    aligned
}
