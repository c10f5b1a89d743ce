//! Basic symbol classifier: line first, then circle, else nothing.

use crate::cfg::RecognizerCfg;
use crate::fit::{fit_circle, fit_line};
use crate::geom::Point;
use crate::symbol::BasicSymbol;

/// Classifies one completed gesture.
///
/// A line is accepted when its goodness is strictly above
/// `cfg.line_goodness_min`; the segment runs from the `t_max` end to the
/// `t_min` end of the fit. Otherwise a circle is accepted when its goodness is
/// strictly above `cfg.circle_goodness_min`. A fit that passes its threshold
/// but yields invalid geometry counts as a miss.
pub fn classify(points: &[Point], cfg: &RecognizerCfg) -> Option<BasicSymbol> {
    let line = fit_line(points);
    let line_goodness = line.goodness();
    if line_goodness > cfg.line_goodness_min {
        match line.segment() {
            Ok(seg) => {
                tracing::debug!(goodness = line_goodness, n = points.len(), "accepted line");
                return Some(BasicSymbol::Line(seg));
            }
            Err(e) => tracing::trace!(error = %e, "line fit is degenerate"),
        }
    }

    let circle = fit_circle(points);
    let circle_goodness = circle.goodness();
    if circle_goodness > cfg.circle_goodness_min {
        match circle.circle() {
            Ok(c) => {
                tracing::debug!(goodness = circle_goodness, radius = c.radius(), "accepted circle");
                return Some(BasicSymbol::Circle(c));
            }
            Err(e) => tracing::trace!(error = %e, "circle fit is degenerate"),
        }
    }

    tracing::debug!(
        n = points.len(),
        line_goodness,
        circle_goodness,
        "gesture discarded"
    );
    None
}
