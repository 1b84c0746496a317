//! JSON scene files and solve reports.
//!
//! Scene format:
//! `{ "objects": [{"name","x","y"}], "constraints": [{"kind":"fixed","object","x","y"} | {"kind":"distance","a","b","distance"}] }`

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use locus::geom::{Point, Shape};
use locus::ids::ObjectId;
use locus::scene::{Link, Scene};
use locus::solver::Solution;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ObjectSpec {
    pub name: String,
    pub x: f64,
    pub y: f64,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ConstraintSpec {
    Fixed { object: String, x: f64, y: f64 },
    Distance { a: String, b: String, distance: f64 },
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SceneFile {
    pub objects: Vec<ObjectSpec>,
    #[serde(default)]
    pub constraints: Vec<ConstraintSpec>,
}

/// A scene plus the names its objects had in the file.
pub struct NamedScene {
    pub scene: Scene,
    pub names: BTreeMap<ObjectId, String>,
}

impl NamedScene {
    pub fn name(&self, id: ObjectId) -> String {
        self.names.get(&id).cloned().unwrap_or_else(|| id.to_string())
    }
}

impl SceneFile {
    pub fn load(path: &Path) -> Result<Self> {
        let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
        serde_json::from_slice(&bytes).with_context(|| format!("parsing {}", path.display()))
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("creating {}", parent.display()))?;
            }
        }
        fs::write(path, serde_json::to_vec_pretty(self)?)
            .with_context(|| format!("writing {}", path.display()))
    }

    /// Register objects in file order and declare the constraints.
    pub fn build(&self) -> Result<NamedScene> {
        let mut scene = Scene::new();
        let mut by_name: HashMap<&str, Point> = HashMap::new();
        let mut names = BTreeMap::new();
        for o in &self.objects {
            let p = scene.add_point(o.x, o.y);
            if by_name.insert(o.name.as_str(), p).is_some() {
                bail!("duplicate object name {:?}", o.name);
            }
            if let Some(id) = p.id {
                names.insert(id, o.name.clone());
            }
        }
        let lookup = |name: &str| -> Result<Point> {
            by_name
                .get(name)
                .copied()
                .with_context(|| format!("constraint refers to unknown object {name:?}"))
        };
        for (i, c) in self.constraints.iter().enumerate() {
            match c {
                ConstraintSpec::Fixed { object, x, y } => scene
                    .fix(&lookup(object)?, Point::new(*x, *y))
                    .with_context(|| format!("constraint {i}"))?,
                ConstraintSpec::Distance { a, b, distance } => scene
                    .distance(&lookup(a)?, &lookup(b)?, *distance)
                    .with_context(|| format!("constraint {i}"))?,
            }
        }
        Ok(NamedScene { scene, names })
    }

    /// Describe an in-memory scene, naming objects `p0`, `p1`, ... by position.
    pub fn from_scene(scene: &Scene) -> Self {
        let names: HashMap<ObjectId, String> = scene
            .objects()
            .iter()
            .enumerate()
            .filter_map(|(k, p)| p.id.map(|id| (id, format!("p{k}"))))
            .collect();
        let name = |id: ObjectId| names.get(&id).cloned().unwrap_or_else(|| id.to_string());
        let objects = scene
            .objects()
            .iter()
            .enumerate()
            .map(|(k, p)| ObjectSpec {
                name: format!("p{k}"),
                x: p.x(),
                y: p.y(),
            })
            .collect();
        let constraints = scene
            .links()
            .iter()
            .map(|link| match *link {
                Link::Fix { object, target } => ConstraintSpec::Fixed {
                    object: name(object),
                    x: target.x(),
                    y: target.y(),
                },
                Link::Distance { a, b, distance } => ConstraintSpec::Distance {
                    a: name(a),
                    b: name(b),
                    distance,
                },
            })
            .collect();
        Self {
            objects,
            constraints,
        }
    }
}

/// Serializable mirror of `Shape`.
#[derive(Clone, Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ShapeJson {
    Point { x: f64, y: f64 },
    Circle { x: f64, y: f64, r: f64 },
    Line { x1: f64, y1: f64, x2: f64, y2: f64 },
    Locus { items: Vec<ShapeJson> },
}

impl From<&Shape> for ShapeJson {
    fn from(s: &Shape) -> Self {
        match s {
            Shape::Point(p) => ShapeJson::Point { x: p.x(), y: p.y() },
            Shape::Circle(c) => ShapeJson::Circle {
                x: c.x(),
                y: c.y(),
                r: c.r,
            },
            Shape::Line(l) => ShapeJson::Line {
                x1: l.p1.x(),
                y1: l.p1.y(),
                x2: l.p2.x(),
                y2: l.p2.y(),
            },
            Shape::Locus(l) => ShapeJson::Locus {
                items: l.iter().map(ShapeJson::from).collect(),
            },
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SolveReport {
    pub freedoms: BTreeMap<String, ShapeJson>,
    /// One position per resolved object.
    pub picks: BTreeMap<String, [f64; 2]>,
    pub anchored: Vec<String>,
    pub unresolved: Vec<usize>,
    pub contradictions: Vec<String>,
    pub complete: bool,
}

impl SolveReport {
    pub fn new(named: &NamedScene, sol: &Solution) -> Self {
        Self {
            freedoms: sol
                .freedoms
                .iter()
                .map(|(id, f)| (named.name(*id), ShapeJson::from(f)))
                .collect(),
            picks: sol
                .pick_positions()
                .into_iter()
                .map(|(id, p)| (named.name(id), [p.x(), p.y()]))
                .collect(),
            anchored: sol.anchored.iter().map(|id| named.name(*id)).collect(),
            unresolved: sol.unresolved.clone(),
            contradictions: sol
                .freedoms
                .contradictions()
                .into_iter()
                .map(|id| named.name(id))
                .collect(),
            complete: sol.is_complete(),
        }
    }
}
