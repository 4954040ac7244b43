//! Plot facet outlines as SVG.

use crate::facets::FacetSampling;
use geo::BoundingRect;
use svg::Document;
use svg::node::element::path::Data;
use svg::node::element::{Group, Path, Text};

/// Margin around the drawing, as a fraction of its larger side.
const MARGIN: f64 = 0.05;

impl FacetSampling {
    /// Render every facet as a closed black polyline.
    ///
    /// Both axes share one scale and y points up, so the plot matches the
    /// coordinates written by the DXF exporter. The title names the facet count.
    #[allow(clippy::unnecessary_cast)]
    pub fn to_svg(&self) -> String {
        let Some(bounds) = self.to_geo().bounding_rect() else {
            return Document::new().to_string();
        };

        let (min, max) = (bounds.min(), bounds.max());
        let side = (max.x - min.x).max(max.y - min.y) as f64;
        let margin = side * MARGIN;
        let (width, height) = (
            (max.x - min.x) as f64 + 2.0 * margin,
            (max.y - min.y) as f64 + 2.0 * margin,
        );

        let mut outlines = Group::new()
            .set("fill", "none")
            .set("stroke", "black")
            .set("stroke-width", side / 500.0)
            .set("transform", "scale(1,-1)");

        for facet in &self.facets {
            let first = facet.vertices[0];
            let data = facet.vertices[1..]
                .iter()
                .fold(Data::new().move_to((first.x as f32, first.y as f32)), |data, p| {
                    data.line_to((p.x as f32, p.y as f32))
                })
                .close();
            outlines = outlines.add(Path::new().set("d", data));
        }

        let title = Text::new(format!("Log spiral in {} facets", self.facet_count()))
            .set("x", min.x as f64)
            .set("y", -(max.y as f64) - margin / 2.0)
            .set("font-size", margin / 2.0);

        Document::new()
            .set(
                "viewBox",
                format!(
                    "{} {} {} {}",
                    min.x as f64 - margin,
                    -(max.y as f64) - margin,
                    width,
                    height
                ),
            )
            .set("width", format!("{width}mm"))
            .set("height", format!("{height}mm"))
            .add(title)
            .add(outlines)
            .to_string()
    }
}
