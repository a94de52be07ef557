//! Human-readable layout reports

use crate::algorithm::candidate::GridCandidate;
use crate::algorithm::cost::{CostWeights, OmitScaling};
use crate::spatial::AxisAdjustment;
use std::fmt::Write;

/// Signed adjustment at the leading (left or top) edge: `+N` pads, `-N`
/// crops, `0` is exact
///
/// The leading edge gets the rounded-down half, so an odd total puts the
/// extra pixel on the trailing edge.
pub fn edge_value(adjustment: AxisAdjustment) -> String {
    match adjustment {
        AxisAdjustment::Pad(_) => format!("+{}", adjustment.leading()),
        AxisAdjustment::Clip(_) => format!("-{}", adjustment.leading()),
        AxisAdjustment::Exact => "0".to_string(),
    }
}

/// Horizontal and vertical leading-edge adjustments, `h,v`
pub fn edge_summary(layout: &GridCandidate) -> String {
    format!(
        "{},{}",
        edge_value(layout.adjustment.horizontal),
        edge_value(layout.adjustment.vertical)
    )
}

/// The cost sum written out, e.g. `1500×0 + 1.0×67 + 2.0×12 = 91.0`
pub fn cost_arithmetic(layout: &GridCandidate, weights: &CostWeights) -> String {
    let mut parts = vec![match weights.omit_scaling() {
        OmitScaling::PerTile => format!("{:.0}×{}", weights.omit_base_cost(), layout.omitted_tiles),
        OmitScaling::FractionOfPool => {
            format!("{:.0}×{:.4}", weights.omit_base_cost(), layout.omit_fraction())
        }
    }];

    let padding = layout.adjustment.total_padding();
    if padding > 0 {
        parts.push(format!("{:.1}×{padding}", weights.pad_cost()));
    }
    let clipping = layout.adjustment.total_clipping();
    if clipping > 0 {
        parts.push(format!("{:.1}×{clipping}", weights.clip_cost()));
    }

    format!("{} = {:.1}", parts.join(" + "), layout.cost.total)
}

/// Multi-line description of one layout
pub fn describe(layout: &GridCandidate) -> String {
    let mut text = format!(
        "{}×{} grid ({} tiles, {}×{}px cells)\n",
        layout.cols, layout.rows, layout.used_tiles, layout.cell_width, layout.cell_height
    );
    let _ = writeln!(
        text,
        "  Montage: {}×{}px",
        layout.montage_width, layout.montage_height
    );
    let _ = writeln!(text, "  Strategy: {}", layout.strategy());

    if layout.omitted_tiles > 0 {
        let _ = writeln!(
            text,
            "  Omitted: {} tiles ({:.1}%)",
            layout.omitted_tiles,
            100.0 * layout.omit_fraction()
        );
    }

    let horizontal = layout.adjustment.horizontal;
    let vertical = layout.adjustment.vertical;
    if horizontal.padding() > 0 {
        let _ = writeln!(text, "  Padding H: {}", edge_split(horizontal, "left", "right"));
    }
    if vertical.padding() > 0 {
        let _ = writeln!(text, "  Padding V: {}", edge_split(vertical, "top", "bottom"));
    }
    if horizontal.is_clip() {
        let _ = writeln!(
            text,
            "  Clipping H: {} ({:.1}% of cell)",
            edge_split(horizontal, "left", "right"),
            100.0 * layout.horizontal_clip_fraction()
        );
    }
    if vertical.is_clip() {
        let _ = writeln!(
            text,
            "  Clipping V: {} ({:.1}% of cell)",
            edge_split(vertical, "top", "bottom"),
            100.0 * layout.vertical_clip_fraction()
        );
    }

    let _ = write!(text, "  Score: {:.1}", layout.cost.total);
    text
}

fn edge_split(adjustment: AxisAdjustment, leading: &str, trailing: &str) -> String {
    format!(
        "{}px {leading}, {}px {trailing}",
        adjustment.leading(),
        adjustment.trailing()
    )
}

/// Column header matching [`table_row`]
pub fn table_header() -> String {
    format!(
        "{:<8} {:<11} {:<11} {:<14} {:<12} {:>10}",
        "Grid", "Used/n", "Cell", "Strategy", "Lead(h,v)", "Total"
    )
}

/// One fixed-width table line
pub fn table_row(layout: &GridCandidate) -> String {
    let grid = format!("{}×{}", layout.cols, layout.rows);
    let usage = format!("{}/{}", layout.used_tiles, layout.available_tiles());
    let cell = format!("{}×{}", layout.cell_width, layout.cell_height);
    let edges = edge_summary(layout);

    format!(
        "{grid:<8} {usage:<11} {cell:<11} {:<14} {edges:<12} {:>10.1}",
        layout.strategy(),
        layout.cost.total
    )
}
