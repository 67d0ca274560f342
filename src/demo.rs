// Copyright 2025 the Geodraw Edit Authors
// SPDX-License-Identifier: Apache-2.0

//! Scripted editing sessions replayed against `MemoryHost`

use crate::editing::{DrawMode, EditSession, PointerEvent, PointerTarget, SetupOptions};
use crate::geo::{GeoToolkit, Spherical};
use crate::host::{DrawHost, MemoryHost};
use crate::model::{CoordPath, Feature, FeatureId, Geometry, ShapeKind};
use anyhow::{Context, Result, bail};
use kurbo::Point;

/// Shapes the demo knows how to script
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Script {
    /// Insert a vertex at a midpoint, drag it, then trash another
    Polygon,
    /// Drag a corner across the opposite one
    Rectangle,
    /// Pull a circle's edge outward
    Circle,
}

impl Script {
    pub fn from_arg(arg: &str) -> Result<Self> {
        Ok(match arg {
            "polygon" => Script::Polygon,
            "rectangle" => Script::Rectangle,
            "circle" => Script::Circle,
            other => bail!("unknown script '{other}', expected polygon, rectangle or circle"),
        })
    }
}

/// Replay `script` and return the host with everything it recorded
pub fn replay(script: Script) -> Result<MemoryHost> {
    let mut host = MemoryHost::new();
    match script {
        Script::Polygon => polygon(&mut host)?,
        Script::Rectangle => rectangle(&mut host)?,
        Script::Circle => circle(&mut host)?,
    }
    Ok(host)
}

fn path(s: &str) -> Result<CoordPath> {
    s.parse()
        .with_context(|| format!("bad coordinate path '{s}'"))
}

fn vertex(parent: FeatureId, path: CoordPath, point: Point) -> PointerEvent {
    PointerEvent::at(point).on(PointerTarget::Vertex {
        parent,
        path,
        point,
    })
}

/// Press at `from`, drag through `to`, release
fn drag_gesture(
    session: &mut EditSession,
    host: &mut MemoryHost,
    press: PointerEvent,
    to: Point,
) {
    session.mouse_down(host, &press);
    session.drag(host, &PointerEvent::at(to));
    session.mouse_up(host, &PointerEvent::at(to));
}

fn polygon(host: &mut MemoryHost) -> Result<()> {
    let ring = vec![
        Point::new(-1.0, -1.0),
        Point::new(-1.0, 1.0),
        Point::new(1.0, 1.0),
        Point::new(1.0, -1.0),
    ];
    let id = host.add(Feature::new(ShapeKind::Polygon, Geometry::Polygon(vec![ring])));
    let mut session: EditSession = EditSession::setup(host, SetupOptions::for_feature(id))?;

    let midpoint = Point::new(0.0, 1.0);
    let press = PointerEvent::at(midpoint).on(PointerTarget::Midpoint {
        parent: id,
        path: path("0.2")?,
        point: midpoint,
    });
    drag_gesture(&mut session, host, press, Point::new(0.0, 2.0));

    let corner = Point::new(1.0, -1.0);
    let press = vertex(id, path("0.4")?, corner);
    session.mouse_down(host, &press);
    session.mouse_up(host, &press);
    session.trash(host);

    DrawMode::stop(&mut session, host);
    Ok(())
}

fn rectangle(host: &mut MemoryHost) -> Result<()> {
    let geo = Spherical;
    let ring = geo.rectangle_ring(Point::new(0.0, 0.0), Point::new(1.0, 1.0));
    let id = host.add(Feature::new(ShapeKind::Rectangle, Geometry::Polygon(vec![ring])));
    let mut session: EditSession = EditSession::setup(host, SetupOptions::for_feature(id))?;

    drag_gesture(
        &mut session,
        host,
        vertex(id, path("0.0")?, Point::new(0.0, 0.0)),
        Point::new(2.0, 2.0),
    );

    DrawMode::stop(&mut session, host);
    Ok(())
}

fn circle(host: &mut MemoryHost) -> Result<()> {
    let geo = Spherical;
    let center = Point::new(13.4, 52.5);
    let ring = geo.circle_ring(center, 1.0);
    let edge = ring
        .first()
        .copied()
        .context("circle builder produced no vertices")?;
    let feature = Feature::new(ShapeKind::Circle, Geometry::Polygon(vec![ring])).with_center(center);
    let id = host.add(feature);
    let mut session: EditSession = EditSession::setup(host, SetupOptions::for_feature(id))?;

    let pulled = crate::geo::geodesy::destination(center, 2.0, 0.0);
    drag_gesture(&mut session, host, vertex(id, path("0.0")?, edge), pulled);

    let radius = host
        .feature(id)
        .and_then(|f| f.geometry().outer_ring())
        .and_then(|ring| ring.first().copied())
        .map(|p| geo.distance(center, p))
        .context("circle disappeared during the drag")?;
    tracing::info!("[demo] circle radius is now {:.3} km", radius);

    DrawMode::stop(&mut session, host);
    Ok(())
}
