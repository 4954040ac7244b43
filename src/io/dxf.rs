use crate::facets::{FACET_VERTICES, Facet, FacetSampling};
use crate::float_types::Real;
use crate::io::IoError;
use nalgebra::Point2;
use std::io::Cursor;

use dxf::Drawing;
use dxf::LwPolylineVertex;
use dxf::entities::*;
use dxf::enums::{AcadVersion, Units};

/// Export facets to DXF, one closed `LWPOLYLINE` per facet.
///
/// Vertex order is preserved and every polyline repeats its first vertex at
/// the end as well as carrying the closed flag. Coordinates are written as
/// millimeters without scaling.
///
/// # Returns
/// A `Result` containing the DXF file as a byte vector or an error if exporting fails.
pub fn to_dxf(facets: &[Facet]) -> Result<Vec<u8>, IoError> {
    let mut drawing = Drawing::new();
    drawing.header.version = AcadVersion::R2010;
    drawing.header.default_drawing_units = Units::Millimeters;

    for facet in facets {
        let mut polyline = LwPolyline::default();
        #[allow(clippy::unnecessary_cast)]
        polyline.vertices.extend(facet.vertices.iter().map(|p| LwPolylineVertex {
            x: p.x as f64,
            y: p.y as f64,
            ..Default::default()
        }));
        polyline.set_is_closed(true);
        drawing.add_entity(Entity::new(EntityType::LwPolyline(polyline)));
    }

    let mut buffer = Vec::new();
    drawing.save(&mut buffer)?;
    tracing::debug!(entities = facets.len(), bytes = buffer.len(), "wrote dxf");
    Ok(buffer)
}

/// Import facets from DXF data written by [`to_dxf`].
///
/// Every closed `LWPOLYLINE` becomes a facet, numbered in file order. A
/// four-vertex polyline relies on its closed flag and gets its first vertex
/// repeated. Other entity kinds are ignored.
pub fn facets_from_dxf(dxf_data: &[u8]) -> Result<Vec<Facet>, IoError> {
    let drawing = Drawing::load(&mut Cursor::new(dxf_data))?;
    let mut facets = Vec::new();

    for entity in drawing.entities() {
        let EntityType::LwPolyline(polyline) = &entity.specific else {
            continue;
        };
        if !polyline.is_closed() {
            continue;
        }

        let mut points: Vec<Point2<Real>> = polyline
            .vertices
            .iter()
            .map(|v| Point2::new(v.x as Real, v.y as Real))
            .collect();
        if points.len() == FACET_VERTICES - 1 {
            points.push(points[0]);
        }
        let vertices: [Point2<Real>; FACET_VERTICES] =
            points.try_into().map_err(|points: Vec<Point2<Real>>| {
                IoError::MalformedInput(format!(
                    "facet {} has {} vertices, expected {}",
                    facets.len(),
                    points.len(),
                    FACET_VERTICES
                ))
            })?;

        facets.push(Facet {
            index: facets.len(),
            vertices,
        });
    }

    Ok(facets)
}

impl FacetSampling {
    /// See [`to_dxf`].
    pub fn to_dxf(&self) -> Result<Vec<u8>, IoError> {
        self::to_dxf(&self.facets)
    }
}
