// Replay scripts: a viewport plus an ordered list of pointer events and
// layout commands, stored as JSON.

use serde::Deserialize;
use std::path::Path;
use trisplit_core::{Size, Vec2};

#[derive(Debug, Clone, Deserialize)]
pub struct Script {
    pub viewport: Viewport,
    #[serde(default)]
    pub steps: Vec<Step>,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl From<Viewport> for Size {
    fn from(v: Viewport) -> Self {
        Size::new(v.width, v.height)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl From<Point> for Vec2 {
    fn from(p: Point) -> Self {
        Vec2::new(p.x, p.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    Down(Point),
    Move(Point),
    Up(Point),
    Toggle,
    Reset,
    Dispose,
    Resize(Viewport),
}

pub fn load_script(path: &Path) -> Result<Script, Box<dyn std::error::Error>> {
    let data = std::fs::read_to_string(path)
        .map_err(|e| format!("cannot read {}: {}", path.display(), e))?;
    let script: Script = serde_json::from_str(&data)
        .map_err(|e| format!("cannot parse {}: {}", path.display(), e))?;
    Ok(script)
}
