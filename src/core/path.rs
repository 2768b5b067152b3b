use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::ScaledPoint;
use crate::error::{ChartError, ChartResult};

/// Vertex of a path outline in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PathVertex {
    pub x: f64,
    pub y: f64,
}

impl PathVertex {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn lerp(self, other: Self, t: f64) -> Self {
        Self {
            x: self.x + (other.x - self.x) * t,
            y: self.y + (other.y - self.y) * t,
        }
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<ScaledPoint> for PathVertex {
    fn from(point: ScaledPoint) -> Self {
        Self::new(point.x, point.y)
    }
}

/// Outline made of one move-to followed by straight segments.
///
/// `Display` renders SVG path data (`M0,100L50,20Z`) and `FromStr` parses the
/// absolute `M`/`L`/`Z` subset back, so descriptions can be handed to any
/// surface that understands SVG paths.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PathDescription {
    vertices: Vec<PathVertex>,
    closed: bool,
}

impl PathDescription {
    #[must_use]
    pub fn new(vertices: Vec<PathVertex>, closed: bool) -> Self {
        Self { vertices, closed }
    }

    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn vertices(&self) -> &[PathVertex] {
        &self.vertices
    }

    #[must_use]
    pub fn into_vertices(self) -> Vec<PathVertex> {
        self.vertices
    }

    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.vertices.iter().all(|vertex| vertex.is_finite())
    }

    pub fn validate(&self) -> ChartResult<()> {
        match self.vertices.iter().position(|vertex| !vertex.is_finite()) {
            Some(index) => Err(ChartError::InvalidGeometry(format!(
                "path vertex {index} has a non-finite coordinate"
            ))),
            None => Ok(()),
        }
    }
}

/// Area outline: the series left to right, then back along `baseline_y`.
#[must_use]
pub fn area_path(points: &[ScaledPoint], baseline_y: f64) -> PathDescription {
    if points.is_empty() {
        return PathDescription::empty();
    }

    let mut vertices = Vec::with_capacity(points.len() * 2);
    vertices.extend(points.iter().copied().map(PathVertex::from));
    vertices.extend(
        points
            .iter()
            .rev()
            .map(|point| PathVertex::new(point.x, baseline_y)),
    );
    PathDescription::new(vertices, true)
}

/// Open polyline through the series.
#[must_use]
pub fn line_path(points: &[ScaledPoint]) -> PathDescription {
    PathDescription::new(
        points.iter().copied().map(PathVertex::from).collect(),
        false,
    )
}

impl fmt::Display for PathDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, vertex) in self.vertices.iter().enumerate() {
            let command = if index == 0 { 'M' } else { 'L' };
            write!(f, "{command}{},{}", vertex.x, vertex.y)?;
        }
        if self.closed && !self.vertices.is_empty() {
            f.write_str("Z")?;
        }
        Ok(())
    }
}

impl FromStr for PathDescription {
    type Err = ChartError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let mut vertices = Vec::new();
        let mut closed = false;
        let mut chars = input.char_indices().peekable();

        while let Some((offset, ch)) = chars.next() {
            if ch.is_whitespace() || ch == ',' {
                continue;
            }
            if closed {
                return Err(ChartError::MalformedPath(format!(
                    "unexpected `{ch}` after close command at offset {offset}"
                )));
            }
            match ch {
                'M' | 'L' => {
                    if (ch == 'M') != vertices.is_empty() {
                        return Err(ChartError::MalformedPath(format!(
                            "`{ch}` at offset {offset}: only a single leading move-to is supported"
                        )));
                    }
                    let start = offset + ch.len_utf8();
                    let mut end = start;
                    while let Some(&(next_offset, next)) = chars.peek() {
                        if next.is_ascii_alphabetic() && next != 'e' && next != 'E' {
                            break;
                        }
                        end = next_offset + next.len_utf8();
                        chars.next();
                    }
                    vertices.push(parse_vertex(&input[start..end], offset)?);
                }
                'Z' | 'z' => {
                    if vertices.is_empty() {
                        return Err(ChartError::MalformedPath(
                            "close command before any move-to".to_owned(),
                        ));
                    }
                    closed = true;
                }
                other => {
                    return Err(ChartError::MalformedPath(format!(
                        "unsupported path command `{other}` at offset {offset}"
                    )));
                }
            }
        }

        Ok(Self { vertices, closed })
    }
}

fn parse_vertex(body: &str, offset: usize) -> ChartResult<PathVertex> {
    let coordinates = body
        .split(|ch: char| ch == ',' || ch.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(|token| {
            token.parse::<f64>().map_err(|err| {
                ChartError::MalformedPath(format!(
                    "invalid coordinate `{token}` at offset {offset}: {err}"
                ))
            })
        })
        .collect::<ChartResult<SmallVec<[f64; 2]>>>()?;

    match coordinates.as_slice() {
        [x, y] => Ok(PathVertex::new(*x, *y)),
        other => Err(ChartError::MalformedPath(format!(
            "expected 2 coordinates at offset {offset}, found {}",
            other.len()
        ))),
    }
}
