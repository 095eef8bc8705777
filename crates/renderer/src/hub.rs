//! Hub rendering: label at the centroid, outline along the exterior ring.

use geometry::{centroid, exterior_ring_points, parse_wkt, ExteriorRing, Geometry, Point};
use hub_common::HubRecord;
use tracing::{debug, info, warn};

use crate::canvas::Surface;
use crate::config::RenderConfig;
use crate::error::{RenderError, RenderResult};
use crate::label::label_anchor;

/// Why a hub was left off the canvas.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// Parsed fine but is not a `Polygon`; carries the actual type name.
    NotAPolygon(&'static str),
    /// `POLYGON EMPTY` has no centroid to label.
    EmptyPolygon,
}

/// Result of rendering one hub.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderOutcome {
    Drawn,
    Skipped(SkipReason),
}

/// Counts for a full render pass.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RenderSummary {
    pub drawn: usize,
    pub skipped: usize,
}

/// Render every hub in order.
///
/// Non-polygon hubs are skipped; any other problem aborts the pass.
pub fn render_hubs<S: Surface + ?Sized>(
    surface: &mut S,
    hubs: &[HubRecord],
    config: &RenderConfig,
) -> RenderResult<RenderSummary> {
    let mut summary = RenderSummary::default();

    for hub in hubs {
        match render_hub(surface, hub, config)? {
            RenderOutcome::Drawn => summary.drawn += 1,
            RenderOutcome::Skipped(_) => summary.skipped += 1,
        }
    }

    info!(
        drawn = summary.drawn,
        skipped = summary.skipped,
        "Rendered hubs"
    );
    Ok(summary)
}

/// Render a single hub.
pub fn render_hub<S: Surface + ?Sized>(
    surface: &mut S,
    hub: &HubRecord,
    config: &RenderConfig,
) -> RenderResult<RenderOutcome> {
    debug!(hub = %hub, "Rendering hub");

    let geometry = parse_wkt(&hub.polygon).map_err(|source| RenderError::Geometry {
        hub: hub.name.clone(),
        source,
    })?;

    let polygon = match geometry {
        Geometry::Polygon(polygon) => polygon,
        other => {
            let geometry_type = other.geometry_type();
            warn!(hub = %hub.name, geometry_type, "Skipping hub: geometry is not a Polygon");
            return Ok(RenderOutcome::Skipped(SkipReason::NotAPolygon(geometry_type)));
        }
    };

    let Some(center) = centroid(&polygon) else {
        warn!(hub = %hub.name, "Skipping hub: polygon is empty");
        return Ok(RenderOutcome::Skipped(SkipReason::EmptyPolygon));
    };

    draw_hub_shape(surface, &hub.name, &polygon, center, config)?;
    Ok(RenderOutcome::Drawn)
}

/// Draw the label at `center`, then the outline of `shape`'s exterior ring.
pub fn draw_hub_shape<S, R>(
    surface: &mut S,
    name: &str,
    shape: &R,
    center: Point,
    config: &RenderConfig,
) -> RenderResult<()>
where
    S: Surface + ?Sized,
    R: ExteriorRing + ?Sized,
{
    let (x, y) = label_anchor(center, name, config.font_size);
    surface.draw_label(x, y, name, config.label_color);

    let ring = exterior_ring_points(shape).map_err(|source| RenderError::Geometry {
        hub: name.to_string(),
        source,
    })?;
    surface.draw_outline(&ring, config.outline_color);

    Ok(())
}
