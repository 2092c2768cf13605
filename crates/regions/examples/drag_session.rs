//! Replay a short annotation drag and print what the UI would persist.
//!
//! Usage:
//!   cargo run -p regions --example drag_session
//!
//! Each drag update replaces the shape wholesale, then the final shape is
//! validated (area, center membership) and persisted as a vertex list.

use regions::prelude::*;

fn main() {
    let start = Coordinate::new(0.30, 0.25);
    let drags = [
        Coordinate::new(0.35, 0.30),
        Coordinate::new(0.50, 0.45),
        Coordinate::new(0.70, 0.60),
    ];

    let mut rect = Rectangle::from_corners(start, start);
    let mut ellipse = Ellipse::from_corners(start, start);
    let mut lasso = FreePolygon::new(vec![start]);
    for p in drags {
        println!(
            "drag to ({:.2}, {:.2}) from rect area {:.4}, ellipse area {:.4}",
            p.x,
            p.y,
            rect.area(),
            ellipse.area()
        );
        rect = Rectangle::from_corners(start, p);
        ellipse = Ellipse::from_corners(start, p);
        lasso.push(p);
    }
    lasso.push(Coordinate::new(0.30, 0.60));

    let regions: [Region; 3] = [rect.into(), ellipse.into(), lasso.into()];
    for r in &regions {
        let border = r.border();
        println!(
            "{:<13} area={:.5} center_inside={} border_vertices={}",
            r.kind().as_str(),
            r.area(),
            r.contains(r.center()),
            border.len()
        );
    }

    let mut rec = Recorder::new();
    regions[1].draw(1920.0, 1080.0, &mut rec);
    println!("ellipse draw commands: {:?}", rec.cmds);
}
