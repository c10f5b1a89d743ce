//! JSON rows for a bank snapshot.

use serde::Serialize;
use symrec::api::{Palette, Stroke, Symbol};

#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StrokeRow {
    Segment { from: [f64; 2], to: [f64; 2] },
    Circle { center: [f64; 2], radius: f64 },
}

#[derive(Debug, Serialize)]
pub struct SymbolRow {
    pub kind: String,
    pub label: String,
    pub anchor: [f64; 2],
    pub palette: &'static str,
    pub strokes: Vec<StrokeRow>,
}

impl From<&Symbol> for SymbolRow {
    fn from(s: &Symbol) -> Self {
        let label = s.label();
        let strokes = s
            .strokes()
            .into_iter()
            .map(|st| match st {
                Stroke::Segment(seg) => {
                    let [a, b] = seg.endpoints();
                    StrokeRow::Segment {
                        from: [a.x, a.y],
                        to: [b.x, b.y],
                    }
                }
                Stroke::Circle(c) => StrokeRow::Circle {
                    center: [c.center().x, c.center().y],
                    radius: c.radius(),
                },
            })
            .collect();
        Self {
            kind: format!("{:?}", s.kind()),
            label: label.text.to_string(),
            anchor: [label.anchor.x, label.anchor.y],
            palette: match s.palette() {
                Palette::Basic => "basic",
                Palette::Composite => "composite",
                Palette::Rectangle => "rectangle",
            },
            strokes,
        }
    }
}

pub fn rows(symbols: &[Symbol]) -> Vec<SymbolRow> {
    symbols.iter().map(SymbolRow::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};
    use symrec::api::{Circle, LineSegment};

    #[test]
    fn rows_serialize_with_tagged_strokes() {
        let symbols = vec![
            Symbol::Line(LineSegment::from_coords(1.0, 2.0, 3.0, 4.0).unwrap()),
            Symbol::Circle(Circle::from_coords(5.0, 6.0, 7.0).unwrap()),
        ];
        let v: Value = serde_json::to_value(rows(&symbols)).unwrap();
        assert_eq!(v[0]["kind"], "LineSegment");
        assert_eq!(v[0]["label"], "LineSegment");
        assert_eq!(v[0]["palette"], "basic");
        assert_eq!(
            v[0]["strokes"][0],
            json!({"type": "segment", "from": [1.0, 2.0], "to": [3.0, 4.0]})
        );
        assert_eq!(
            v[1]["strokes"][0],
            json!({"type": "circle", "center": [5.0, 6.0], "radius": 7.0})
        );
        assert_eq!(v[1]["anchor"], json!([5.0, 6.0]));
    }
}
