//! Man-made templates: house, sailing boat, rocket and a car on a road.

use coloring_core::{Paint, Primitive, ValidationError};

use crate::sketch::Sketch;

/// Lower-left corners of the two square house windows.
const HOUSE_WINDOWS: [(f64, f64); 2] = [(-1.2, -0.5), (0.6, -0.5)];
const HOUSE_WINDOW_SIZE: f64 = 0.6;
/// Smoke puffs above the chimney, lowest first.
const SMOKE: [(f64, f64); 3] = [(1.0, 1.6), (1.2, 1.9), (0.9, 2.2)];

/// Porthole x-offsets along the boat hull.
const PORTHOLES: [f64; 3] = [-0.6, 0.0, 0.6];
/// Wave crest x-offsets below the boat.
const WAVES: [f64; 4] = [-1.5, -0.5, 0.5, 1.5];

/// Road half-length either side of the car anchor.
const ROAD_HALF: f64 = 3.0;
/// Left ends of the dashed centre-line segments.
const ROAD_DASHES: [f64; 4] = [-2.6, -1.2, 0.2, 1.6];
const ROAD_DASH_LEN: f64 = 0.8;
/// Traffic light lamp heights, top to bottom.
const SIGNAL_LAMPS: [f64; 3] = [2.6, 2.15, 1.7];
const SIGNAL_X: f64 = 2.6;

/// House with a chimney. Anchor is roughly the middle of the front wall.
///
/// Exactly two windows, each split into four panes by a centred cross.
pub fn house(x: f64, y: f64, scale: f64) -> Result<Vec<Primitive>, ValidationError> {
    let mut s = Sketch::new(x, y, scale)?;
    s.rect((-1.5, -2.0), (3.0, 2.5), Paint::MAIN)?
        .polygon(&[(-1.8, 0.5), (0.0, 1.5), (1.8, 0.5)], Paint::MAIN)?
        .rect((-0.3, -2.0), (0.6, 1.2), Paint::MAIN)?
        .circle(0.15, -1.4, 0.05, Paint::Fill)?;

    let w = HOUSE_WINDOW_SIZE;
    for (wx, wy) in HOUSE_WINDOWS {
        s.rect((wx, wy), (w, w), Paint::MAIN)?;
    }
    for (wx, wy) in HOUSE_WINDOWS {
        let (cx, cy) = (wx + w / 2.0, wy + w / 2.0);
        s.line(&[(cx, wy), (cx, wy + w)], Paint::DETAIL)?
            .line(&[(wx, cy), (wx + w, cy)], Paint::DETAIL)?;
    }

    s.rect((0.8, 0.8), (0.4, 0.8), Paint::MAIN)?;
    for (sx, sy) in SMOKE {
        s.circle(sx, sy, 0.1, Paint::DETAIL)?;
    }
    Ok(s.finish())
}

/// Sailing boat on small waves. Anchor is the centre of the deck line.
pub fn boat(x: f64, y: f64, scale: f64) -> Result<Vec<Primitive>, ValidationError> {
    let mut s = Sketch::new(x, y, scale)?;
    s.polygon(
        &[(-1.5, 0.3), (1.5, 0.3), (1.0, -0.5), (-1.0, -0.5)],
        Paint::MAIN,
    )?
    .line(&[(0.0, 0.3), (0.0, 2.4)], Paint::MAIN)?
    .polygon(&[(0.1, 0.5), (0.1, 2.2), (1.2, 0.5)], Paint::MAIN)?
    .polygon(&[(-0.1, 0.5), (-0.1, 1.8), (-0.9, 0.5)], Paint::MAIN)?
    .polygon(&[(0.0, 2.4), (0.4, 2.25), (0.0, 2.1)], Paint::DETAIL)?;
    for px in PORTHOLES {
        s.circle(px, -0.1, 0.1, Paint::DETAIL)?;
    }
    for wx in WAVES {
        s.arc((wx, -0.65), (1.0, 0.3), 0.0, (0.0, 180.0), Paint::DETAIL)?;
    }
    Ok(s.finish())
}

/// Rocket lifting off. Anchor is the centre of the body tube.
pub fn rocket(x: f64, y: f64, scale: f64) -> Result<Vec<Primitive>, ValidationError> {
    let mut s = Sketch::new(x, y, scale)?;
    s.rect((-0.5, -1.2), (1.0, 2.0), Paint::MAIN)?
        .polygon(&[(-0.5, 0.8), (0.0, 1.8), (0.5, 0.8)], Paint::MAIN)?
        .circle(0.0, 0.2, 0.28, Paint::MAIN)?
        .circle(0.0, 0.2, 0.18, Paint::DETAIL)?
        .polygon(&[(-0.5, -0.4), (-1.0, -1.4), (-0.5, -1.2)], Paint::MAIN)?
        .polygon(&[(0.5, -0.4), (0.5, -1.2), (1.0, -1.4)], Paint::MAIN)?
        .polygon(
            &[(-0.3, -1.2), (0.3, -1.2), (0.4, -1.45), (-0.4, -1.45)],
            Paint::MAIN,
        )?;

    // Exhaust flames.
    s.line(&[(-0.25, -1.45), (-0.35, -2.0)], Paint::DETAIL)?
        .line(&[(0.0, -1.45), (0.0, -2.2)], Paint::DETAIL)?
        .line(&[(0.25, -1.45), (0.35, -2.0)], Paint::DETAIL)?;
    Ok(s.finish())
}

/// Car on a two-lane road next to a traffic light.
///
/// Anchor is the centre of the car body. The road runs `ROAD_HALF` either
/// side; the signal stands on the right verge.
pub fn car(x: f64, y: f64, scale: f64) -> Result<Vec<Primitive>, ValidationError> {
    let mut s = Sketch::new(x, y, scale)?;
    s.polygon(
        &[
            (-1.6, -0.3),
            (1.6, -0.3),
            (1.6, 0.4),
            (0.9, 0.4),
            (0.5, 1.0),
            (-0.7, 1.0),
            (-1.1, 0.4),
            (-1.6, 0.4),
        ],
        Paint::MAIN,
    )?
    .polygon(
        &[(0.1, 0.45), (0.75, 0.45), (0.45, 0.9), (0.1, 0.9)],
        Paint::DETAIL,
    )?
    .polygon(
        &[(-0.1, 0.45), (-0.95, 0.45), (-0.62, 0.9), (-0.1, 0.9)],
        Paint::DETAIL,
    )?
    .circle(1.45, 0.1, 0.1, Paint::DETAIL)?;
    for wx in [-1.0, 1.0] {
        s.circle(wx, -0.3, 0.4, Paint::MAIN)?
            .circle(wx, -0.3, 0.15, Paint::DETAIL)?;
    }

    // Road edges, then the dashed centre line.
    s.line(&[(-ROAD_HALF, -0.7), (ROAD_HALF, -0.7)], Paint::MAIN)?
        .line(&[(-ROAD_HALF, -1.9), (ROAD_HALF, -1.9)], Paint::MAIN)?;
    for dx in ROAD_DASHES {
        s.line(&[(dx, -1.3), (dx + ROAD_DASH_LEN, -1.3)], Paint::DETAIL)?;
    }

    s.line(&[(SIGNAL_X, -0.7), (SIGNAL_X, 1.4)], Paint::MAIN)?
        .rect((SIGNAL_X - 0.25, 1.4), (0.5, 1.5), Paint::MAIN)?;
    for ly in SIGNAL_LAMPS {
        s.circle(SIGNAL_X, ly, 0.17, Paint::DETAIL)?;
    }
    Ok(s.finish())
}
