//! SVG output of a [`Cone`] and its parastichy history.
//!
//! Disk coordinates live in the sector frame with `+y` pointing away from
//! the vertex. SVG's `y` grows downward, so every point is mapped through
//! [`SvgRenderer::to_screen`], which also translates by the configured vertex.

use crate::cone::Cone;
use crate::disk::Disk;
use crate::float_types::{FULL_TURN_DEGREES, Real};
use crate::parastichy::{SegmentDirection, front_segments};
use nalgebra::{Point2, Vector2};
use std::path::Path as FsPath;
use svg::Document;
use svg::node::element::path::Data;
use svg::node::element::{Circle, Group, Path, Text};

const UP_COLOR: &str = "rgb(200,0,0)";
const DOWN_COLOR: &str = "rgb(200,200,0)";
const GRAPH_COLOR: &str = "rgb(0,0,200)";
const AXES_COLOR: &str = "rgb(255,175,175)";

/// Degrees between neighbouring polar guide rays.
const AXES_STEP_DEGREES: Real = 15.0;
/// Number of concentric guide rings.
const AXES_RINGS: usize = 12;

const CHART_WIDTH: Real = 800.0;
const CHART_HEIGHT: Real = 400.0;
const CHART_MARGIN: Real = 40.0;

/// Draws one cone. Layers other than the sector and the disks are optional.
#[derive(Debug, Clone, Copy)]
pub struct SvgRenderer<'a> {
    cone: &'a Cone,
    axes: bool,
    front: bool,
    graph: bool,
    ghosts: bool,
}

impl<'a> SvgRenderer<'a> {
    /// A renderer with every layer switched on.
    pub const fn new(cone: &'a Cone) -> Self {
        SvgRenderer {
            cone,
            axes: true,
            front: true,
            graph: true,
            ghosts: true,
        }
    }

    /// Polar guide rays and rings around the vertex.
    pub const fn with_axes(mut self, axes: bool) -> Self {
        self.axes = axes;
        self
    }

    /// The frontier polyline, coloured by segment direction.
    pub const fn with_front(mut self, front: bool) -> Self {
        self.front = front;
        self
    }

    /// Parent-to-child edges.
    pub const fn with_graph(mut self, graph: bool) -> Self {
        self.graph = graph;
        self
    }

    /// Rotated copies of the disks next to the seam.
    pub const fn with_ghosts(mut self, ghosts: bool) -> Self {
        self.ghosts = ghosts;
        self
    }

    /// Map a sector-frame point to SVG user space.
    pub fn to_screen(&self, p: &Point2<Real>) -> (Real, Real) {
        let vertex = self.cone.vertex();
        (vertex.x + p.x, vertex.y - p.y)
    }

    /// Distance from the vertex that every drawn disk fits within.
    fn reach(&self) -> Real {
        let radius = self.cone.disk_radius();
        self.cone
            .disks()
            .iter()
            .chain(self.cone.extra_disks())
            .map(Disk::distance_to_vertex)
            .fold(0.0, Real::max)
            + 2.0 * radius
    }

    /// The packing: sector edges, disks with their ids, and whichever
    /// optional layers are enabled.
    pub fn packing(&self) -> Document {
        let reach = self.reach();
        let radius = self.cone.disk_radius();
        let stroke_width = radius * 0.1;

        let mut document = Document::new();

        if self.axes {
            document = document.add(self.axes_group(reach, stroke_width));
        }
        document = document.add(self.sector_edges(reach, stroke_width * 2.0));

        if self.ghosts {
            let ghosts = self.cone.extra_disks().iter().fold(
                Group::new().set("class", "ghosts"),
                |group, disk| {
                    group
                        .add(self.disk_circle(disk, "rgb(240,240,240)", "rgb(200,200,200)"))
                        .add(self.disk_label(disk, "rgb(200,200,200)"))
                },
            );
            document = document.add(ghosts);
        }

        let disks = self.cone.disks().iter().fold(
            Group::new().set("class", "disks"),
            |group, disk| {
                group
                    .add(self.disk_circle(disk, "rgb(180,180,180)", "none"))
                    .add(self.disk_label(disk, "black"))
            },
        );
        document = document.add(disks);

        if self.graph {
            document = document.add(self.ontological_graph(stroke_width));
        }
        if self.front {
            document = document.add(self.front_polyline(stroke_width * 2.0));
        }

        // the vertex is the origin of the sector frame
        let (cx, cy) = self.to_screen(&Point2::origin());
        document.set("viewBox", (cx - reach, cy - reach, 2.0 * reach, 2.0 * reach))
    }

    fn line(&self, from: &Point2<Real>, to: &Point2<Real>, color: &str, width: Real) -> Path {
        let data = Data::new()
            .move_to(self.to_screen(from))
            .line_to(self.to_screen(to));
        Path::new()
            .set("stroke", color)
            .set("stroke-width", width)
            .set("stroke-linecap", "round")
            .set("fill", "none")
            .set("d", data)
    }

    fn sector_edges(&self, reach: Real, width: Real) -> Group {
        let sector = self.cone.sector();
        let vertex = Point2::origin();
        Group::new()
            .set("class", "sector")
            .add(self.line(&vertex, &Point2::from(sector.left_edge() * reach), "black", width))
            .add(self.line(&vertex, &Point2::from(sector.right_edge() * reach), "black", width))
    }

    fn axes_group(&self, reach: Real, width: Real) -> Group {
        let vertex = Point2::origin();
        let rays = (0..)
            .map(|step| step as Real * AXES_STEP_DEGREES)
            .take_while(|&degrees| degrees < FULL_TURN_DEGREES);

        let mut group = Group::new().set("class", "axes");
        for degrees in rays {
            let (sin, cos) = degrees.to_radians().sin_cos();
            let end = Point2::from(Vector2::new(cos, sin) * reach);
            group = group.add(self.line(&vertex, &end, AXES_COLOR, width));
        }

        let (cx, cy) = self.to_screen(&vertex);
        for ring in 1..=AXES_RINGS {
            let r = reach * ring as Real / AXES_RINGS as Real;
            group = group.add(
                Circle::new()
                    .set("cx", cx)
                    .set("cy", cy)
                    .set("r", r)
                    .set("stroke", AXES_COLOR)
                    .set("stroke-width", width)
                    .set("fill", "none"),
            );
        }
        group
    }

    fn disk_circle(&self, disk: &Disk, fill: &str, stroke: &str) -> Circle {
        let (cx, cy) = self.to_screen(&disk.pos());
        let mut circle = Circle::new()
            .set("class", "disk")
            .set("cx", cx)
            .set("cy", cy)
            .set("r", disk.radius())
            .set("fill", fill)
            .set("stroke", stroke)
            .set("stroke-width", disk.radius() * 0.1);
        if let Some(id) = disk.id() {
            circle = circle.set("data-id", id.to_string());
        }
        circle
    }

    fn disk_label(&self, disk: &Disk, color: &str) -> Text {
        let (x, y) = self.to_screen(&disk.pos());
        let label = disk.id().map(|id| id.to_string()).unwrap_or_default();
        Text::new(label)
            .set("x", x)
            .set("y", y)
            .set("font-size", disk.radius() * 0.8)
            .set("text-anchor", "middle")
            .set("dominant-baseline", "central")
            .set("fill", color)
    }

    fn ontological_graph(&self, width: Real) -> Group {
        let mut group = Group::new().set("class", "graph");
        for disk in self.cone.disks() {
            let Some(parents) = disk.parents() else {
                continue;
            };
            for parent in [parents.left, parents.right] {
                group = group.add(self.line(&parent.pos, &disk.pos(), GRAPH_COLOR, width));
            }
        }
        group
    }

    fn front_polyline(&self, width: Real) -> Group {
        let segments = front_segments(self.cone.front(), self.cone.sector());
        segments
            .iter()
            .fold(Group::new().set("class", "front"), |group, segment| {
                let color = match segment.direction {
                    SegmentDirection::Up => UP_COLOR,
                    SegmentDirection::Down => DOWN_COLOR,
                };
                group.add(self.line(&segment.left.pos(), &segment.right.pos(), color, width))
            })
    }

    /// Up and down parastichy counts against iteration, one polyline each.
    pub fn parastichy_chart(&self) -> Document {
        let history = self.cone.history();
        let iterations = history.len().saturating_sub(1).max(1) as Real;
        let max_count = history.max_count().max(1) as Real;

        let plot_width = CHART_WIDTH - 2.0 * CHART_MARGIN;
        let plot_height = CHART_HEIGHT - 2.0 * CHART_MARGIN;
        let origin = (CHART_MARGIN, CHART_HEIGHT - CHART_MARGIN);
        let point = |iteration: usize, count: usize| {
            (
                origin.0 + plot_width * iteration as Real / iterations,
                origin.1 - plot_height * count as Real / max_count,
            )
        };

        let axes = Data::new()
            .move_to((origin.0, origin.1 - plot_height))
            .line_to(origin)
            .line_to((origin.0 + plot_width, origin.1));

        let mut document = Document::new().add(
            Path::new()
                .set("class", "chart-axes")
                .set("stroke", "black")
                .set("stroke-width", 1.0)
                .set("fill", "none")
                .set("d", axes),
        );

        for (class, color, counts) in [
            ("up", UP_COLOR, history.up_counts()),
            ("down", DOWN_COLOR, history.down_counts()),
        ] {
            let Some((&first, rest)) = counts.split_first() else {
                continue;
            };
            let data = rest
                .iter()
                .enumerate()
                .fold(Data::new().move_to(point(0, first)), |data, (index, &count)| {
                    data.line_to(point(index + 1, count))
                });
            document = document.add(
                Path::new()
                    .set("class", class)
                    .set("stroke", color)
                    .set("stroke-width", 2.0)
                    .set("fill", "none")
                    .set("d", data),
            );
        }

        let labels = [
            (format!("{}", history.len().saturating_sub(1)), origin.0 + plot_width, origin.1 + 20.0),
            (format!("{}", history.max_count()), origin.0 - 10.0, origin.1 - plot_height),
        ];
        for (label, x, y) in labels {
            document = document.add(
                Text::new(label)
                    .set("x", x)
                    .set("y", y)
                    .set("font-size", 12.0)
                    .set("text-anchor", "end"),
            );
        }

        document.set("viewBox", (0.0, 0.0, CHART_WIDTH, CHART_HEIGHT))
    }

    /// Write [`SvgRenderer::packing`] to `path`.
    pub fn save_packing(&self, path: impl AsRef<FsPath>) -> std::io::Result<()> {
        svg::save(path, &self.packing())
    }

    /// Write [`SvgRenderer::parastichy_chart`] to `path`.
    pub fn save_parastichy_chart(&self, path: impl AsRef<FsPath>) -> std::io::Result<()> {
        svg::save(path, &self.parastichy_chart())
    }
}
