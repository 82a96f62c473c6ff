// Static vector annotations over the rendered heat map
//
// The overlay is deliberately simple: circles, arrows and bitmap-font
// labels stamped straight into the RGBA buffer. Everything is positioned
// in world coordinates (meters) so the layout tracks the Schwarzschild
// radius no matter what mass or image size the driver picked.

use std::f64::consts::PI;

use image::{Rgba, RgbaImage};

// ============================================================================
// WORLD <-> PIXEL MAPPING
// ============================================================================

// Maps the square world domain [-half_extent, +half_extent]^2 onto a
// size x size pixel raster with y pointing up (world origin at the
// center of the image, larger y toward the top edge).
#[derive(Debug, Clone, Copy)]
pub struct Viewport {
    // Half the world-domain edge, in meters
    pub half_extent: f64,
    // Image edge, in pixels
    pub size: u32,
}

impl Viewport {
    // Convert a world position to fractional pixel coordinates
    #[inline]
    pub fn to_pixel(&self, wx: f64, wy: f64) -> (f64, f64) {
        let edge = (self.size - 1) as f64;
        let u = (wx + self.half_extent) / (2.0 * self.half_extent);
        let v = (wy + self.half_extent) / (2.0 * self.half_extent);
        (u * edge, (1.0 - v) * edge)
    }

    // Pixels per meter
    #[inline]
    pub fn scale(&self) -> f64 {
        self.size as f64 / (2.0 * self.half_extent)
    }

    // Stroke width in pixels, tuned so lines stay visible at any
    // output resolution (2 px at the reference 600 px edge)
    #[inline]
    fn stroke(&self) -> f64 {
        (self.size as f64 / 300.0).max(1.0)
    }

    // Integer scale factor for the 5x7 label font
    #[inline]
    fn text_scale(&self) -> u32 {
        ((self.size as f64 / 400.0).round() as u32).max(1)
    }
}

// ============================================================================
// RASTER PRIMITIVES
// ============================================================================

#[inline]
fn put(img: &mut RgbaImage, x: i64, y: i64, color: Rgba<u8>) {
    if x >= 0 && y >= 0 && (x as u32) < img.width() && (y as u32) < img.height() {
        img.put_pixel(x as u32, y as u32, color);
    }
}

// Filled disk at fractional pixel center
fn draw_disk(img: &mut RgbaImage, cx: f64, cy: f64, radius: f64, color: Rgba<u8>) {
    let r = radius.max(0.5);
    let (x0, x1) = ((cx - r).floor() as i64, (cx + r).ceil() as i64);
    let (y0, y1) = ((cy - r).floor() as i64, (cy + r).ceil() as i64);
    for y in y0..=y1 {
        for x in x0..=x1 {
            let dx = x as f64 - cx;
            let dy = y as f64 - cy;
            if dx * dx + dy * dy <= r * r {
                put(img, x, y, color);
            }
        }
    }
}

// Circle outline of given stroke width
fn draw_circle(img: &mut RgbaImage, cx: f64, cy: f64, radius: f64, stroke: f64, color: Rgba<u8>) {
    let outer = radius + stroke / 2.0;
    let inner = (radius - stroke / 2.0).max(0.0);
    let (x0, x1) = ((cx - outer).floor() as i64, (cx + outer).ceil() as i64);
    let (y0, y1) = ((cy - outer).floor() as i64, (cy + outer).ceil() as i64);
    for y in y0..=y1 {
        for x in x0..=x1 {
            let dx = x as f64 - cx;
            let dy = y as f64 - cy;
            let d2 = dx * dx + dy * dy;
            if d2 <= outer * outer && d2 >= inner * inner {
                put(img, x, y, color);
            }
        }
    }
}

// Straight segment, stamped as overlapping disks so thickness and caps
// come out round without any polygon rasterization
fn draw_line(
    img: &mut RgbaImage,
    x0: f64,
    y0: f64,
    x1: f64,
    y1: f64,
    stroke: f64,
    color: Rgba<u8>,
) {
    let dx = x1 - x0;
    let dy = y1 - y0;
    let len = (dx * dx + dy * dy).sqrt();
    let steps = (len * 2.0).ceil().max(1.0) as usize;
    for i in 0..=steps {
        let t = i as f64 / steps as f64;
        draw_disk(img, x0 + dx * t, y0 + dy * t, stroke / 2.0, color);
    }
}

// Arrow from tail to tip with a two-stroke head
fn draw_arrow(
    img: &mut RgbaImage,
    tail_x: f64,
    tail_y: f64,
    tip_x: f64,
    tip_y: f64,
    stroke: f64,
    color: Rgba<u8>,
) {
    draw_line(img, tail_x, tail_y, tip_x, tip_y, stroke, color);

    let dx = tip_x - tail_x;
    let dy = tip_y - tail_y;
    let len = (dx * dx + dy * dy).sqrt();
    if len < 1e-9 {
        return;
    }

    // Head length proportional to the shaft, capped for short arrows
    let head = (len * 0.25).min(stroke * 6.0).max(stroke * 2.0);
    let angle = dy.atan2(dx);
    for side in [-1.0, 1.0] {
        let barb = angle + PI - side * (PI / 6.0);
        draw_line(
            img,
            tip_x,
            tip_y,
            tip_x + head * barb.cos(),
            tip_y + head * barb.sin(),
            stroke,
            color,
        );
    }
}

// ============================================================================
// BITMAP FONT
// ============================================================================

// 5x7 glyphs, one byte per row, bit 4 = leftmost column. Only the
// characters appearing in the annotation labels are defined; anything
// else renders as a blank advance.
fn glyph(c: char) -> [u8; 7] {
    match c {
        'B' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10001, 0b10001, 0b11110],
        'E' => [0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b11111],
        'G' => [0b01110, 0b10001, 0b10000, 0b10111, 0b10001, 0b10001, 0b01110],
        'H' => [0b10001, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001],
        'I' => [0b01110, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110],
        'M' => [0b10001, 0b11011, 0b10101, 0b10101, 0b10001, 0b10001, 0b10001],
        'R' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10100, 0b10010, 0b10001],
        'S' => [0b01110, 0b10001, 0b10000, 0b01110, 0b00001, 0b10001, 0b01110],
        'T' => [0b11111, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100],
        'a' => [0b00000, 0b00000, 0b01110, 0b00001, 0b01111, 0b10001, 0b01111],
        'b' => [0b10000, 0b10000, 0b11110, 0b10001, 0b10001, 0b10001, 0b11110],
        'c' => [0b00000, 0b00000, 0b01110, 0b10001, 0b10000, 0b10001, 0b01110],
        'd' => [0b00001, 0b00001, 0b01111, 0b10001, 0b10001, 0b10001, 0b01111],
        'e' => [0b00000, 0b00000, 0b01110, 0b10001, 0b11111, 0b10000, 0b01110],
        'g' => [0b00000, 0b00000, 0b01111, 0b10001, 0b01111, 0b00001, 0b01110],
        'h' => [0b10000, 0b10000, 0b11110, 0b10001, 0b10001, 0b10001, 0b10001],
        'i' => [0b00100, 0b00000, 0b01100, 0b00100, 0b00100, 0b00100, 0b01110],
        'k' => [0b10000, 0b10000, 0b10010, 0b10100, 0b11000, 0b10100, 0b10010],
        'l' => [0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110],
        'm' => [0b00000, 0b00000, 0b11010, 0b10101, 0b10101, 0b10101, 0b10101],
        'n' => [0b00000, 0b00000, 0b11110, 0b10001, 0b10001, 0b10001, 0b10001],
        'o' => [0b00000, 0b00000, 0b01110, 0b10001, 0b10001, 0b10001, 0b01110],
        'p' => [0b00000, 0b00000, 0b11110, 0b10001, 0b11110, 0b10000, 0b10000],
        'r' => [0b00000, 0b00000, 0b10110, 0b11001, 0b10000, 0b10000, 0b10000],
        's' => [0b00000, 0b00000, 0b01111, 0b10000, 0b01110, 0b00001, 0b11110],
        't' => [0b00100, 0b00100, 0b11111, 0b00100, 0b00100, 0b00100, 0b00011],
        'u' => [0b00000, 0b00000, 0b10001, 0b10001, 0b10001, 0b10001, 0b01111],
        'v' => [0b00000, 0b00000, 0b10001, 0b10001, 0b10001, 0b01010, 0b00100],
        'w' => [0b00000, 0b00000, 0b10001, 0b10101, 0b10101, 0b10101, 0b01010],
        'y' => [0b00000, 0b00000, 0b10001, 0b10001, 0b01111, 0b00001, 0b01110],
        'z' => [0b00000, 0b00000, 0b11111, 0b00010, 0b00100, 0b01000, 0b11111],
        '2' => [0b01110, 0b10001, 0b00001, 0b00010, 0b00100, 0b01000, 0b11111],
        '3' => [0b11111, 0b00010, 0b00100, 0b00010, 0b00001, 0b10001, 0b01110],
        '8' => [0b01110, 0b10001, 0b10001, 0b01110, 0b10001, 0b10001, 0b01110],
        '=' => [0b00000, 0b00000, 0b11111, 0b00000, 0b11111, 0b00000, 0b00000],
        '/' => [0b00000, 0b00001, 0b00010, 0b00100, 0b01000, 0b10000, 0b00000],
        '^' => [0b00100, 0b01010, 0b10001, 0b00000, 0b00000, 0b00000, 0b00000],
        '*' => [0b00000, 0b00100, 0b10101, 0b01110, 0b10101, 0b00100, 0b00000],
        '(' => [0b00010, 0b00100, 0b01000, 0b01000, 0b01000, 0b00100, 0b00010],
        ')' => [0b01000, 0b00100, 0b00010, 0b00010, 0b00010, 0b00100, 0b01000],
        _ => [0; 7],
    }
}

const GLYPH_WIDTH: u32 = 5;
const GLYPH_HEIGHT: u32 = 7;
// One blank column between glyphs
const GLYPH_ADVANCE: u32 = GLYPH_WIDTH + 1;

// Stamp a label centered on the given pixel position
fn draw_text(img: &mut RgbaImage, cx: f64, cy: f64, text: &str, scale: u32, color: Rgba<u8>) {
    let count = text.chars().count() as u32;
    if count == 0 {
        return;
    }
    let width = (count * GLYPH_ADVANCE - 1) * scale;
    let height = GLYPH_HEIGHT * scale;
    let left = cx - width as f64 / 2.0;
    let top = cy - height as f64 / 2.0;

    for (idx, c) in text.chars().enumerate() {
        let rows = glyph(c);
        let glyph_left = left + (idx as u32 * GLYPH_ADVANCE * scale) as f64;
        for (row, bits) in rows.iter().enumerate() {
            for col in 0..GLYPH_WIDTH {
                if bits & (1u8 << (GLYPH_WIDTH - 1 - col)) == 0 {
                    continue;
                }
                // One font cell becomes a scale x scale block
                for sy in 0..scale {
                    for sx in 0..scale {
                        let px = (glyph_left + (col * scale + sx) as f64).round() as i64;
                        let py = (top + (row as u32 * scale + sy) as f64).round() as i64;
                        put(img, px, py, color);
                    }
                }
            }
        }
    }
}

// ============================================================================
// ANNOTATION SEQUENCE
// ============================================================================

const CYAN: Rgba<u8> = Rgba([0, 255, 255, 255]);
const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);
const BLACK: Rgba<u8> = Rgba([0, 0, 0, 255]);
const RED: Rgba<u8> = Rgba([255, 40, 40, 255]);

// Draw the full fixed overlay: event horizon, singularity, interior
// space callout and Hawking radiation arrows, all scaled by Rs.
pub fn draw_annotations(img: &mut RgbaImage, viewport: &Viewport, rs: f64) {
    let stroke = viewport.stroke();
    let text = viewport.text_scale();
    let px = |wx: f64, wy: f64| viewport.to_pixel(wx, wy);

    // Event horizon ring at r = Rs
    let (cx, cy) = px(0.0, 0.0);
    draw_circle(img, cx, cy, rs * viewport.scale(), stroke, CYAN);
    let (tx, ty) = px(0.0, 2.4 * rs);
    draw_text(img, tx, ty, "Event Horizon", text, CYAN);
    let (tx, ty) = px(0.0, 1.9 * rs);
    draw_text(img, tx, ty, "Rs = 2GM/c^2", text, CYAN);

    // Singularity dot at the center
    draw_disk(img, cx, cy, 0.1 * rs * viewport.scale(), WHITE);
    draw_text(img, cx, cy, "Singularity", text, BLACK);

    // Interior space callout, arrow pointing in from outside the horizon
    let (tail_x, tail_y) = px(3.0 * rs, -2.0 * rs);
    let (tip_x, tip_y) = px(0.0, -0.5 * rs);
    draw_arrow(img, tail_x, tail_y, tip_x, tip_y, stroke, WHITE);
    let (tx, ty) = px(3.0 * rs, -2.25 * rs);
    draw_text(img, tx, ty, "Interior Space", text, WHITE);
    let (tx, ty) = px(0.0, -2.6 * rs);
    draw_text(img, tx, ty, "Space and time are distorted", text, WHITE);

    // Hawking radiation: 8 arrows at equally spaced angles, each from
    // the horizon out to 2*Rs
    let arrows = 8;
    for k in 0..arrows {
        let angle = 2.0 * PI * k as f64 / arrows as f64;
        let (tail_x, tail_y) = px(rs * angle.cos(), rs * angle.sin());
        let (tip_x, tip_y) = px(2.0 * rs * angle.cos(), 2.0 * rs * angle.sin());
        draw_arrow(img, tail_x, tail_y, tip_x, tip_y, stroke, RED);
    }
    let (tx, ty) = px(3.0 * rs, 1.3 * rs);
    draw_text(img, tx, ty, "Hawking Radiation", text, RED);
    let (tx, ty) = px(3.0 * rs, 0.9 * rs);
    draw_text(img, tx, ty, "T = hbar*c^3/(8*pi*kB*G*M)", text, RED);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_viewport_center_maps_to_image_center() {
        let vp = Viewport {
            half_extent: 100.0,
            size: 401,
        };
        let (x, y) = vp.to_pixel(0.0, 0.0);
        assert_eq!(x, 200.0);
        assert_eq!(y, 200.0);
    }

    #[test]
    fn test_viewport_corners() {
        let vp = Viewport {
            half_extent: 50.0,
            size: 100,
        };
        // Lower-left world corner lands at the bottom-left pixel (y up)
        let (x, y) = vp.to_pixel(-50.0, -50.0);
        assert_eq!((x, y), (0.0, 99.0));
        let (x, y) = vp.to_pixel(50.0, 50.0);
        assert_eq!((x, y), (99.0, 0.0));
    }

    #[test]
    fn test_viewport_y_axis_points_up() {
        let vp = Viewport {
            half_extent: 10.0,
            size: 200,
        };
        let (_, y_high) = vp.to_pixel(0.0, 5.0);
        let (_, y_low) = vp.to_pixel(0.0, -5.0);
        assert!(y_high < y_low, "larger world y must map to smaller pixel row");
    }

    #[test]
    fn test_disk_stays_in_bounds() {
        // Drawing partially off-canvas must not panic or wrap
        let mut img = RgbaImage::new(32, 32);
        draw_disk(&mut img, 0.0, 0.0, 10.0, WHITE);
        draw_disk(&mut img, 40.0, 40.0, 10.0, WHITE);
        assert_eq!(*img.get_pixel(0, 0), WHITE);
    }

    #[test]
    fn test_circle_outline_is_hollow() {
        let mut img = RgbaImage::new(64, 64);
        draw_circle(&mut img, 32.0, 32.0, 20.0, 2.0, CYAN);
        assert_eq!(*img.get_pixel(32, 32), Rgba([0, 0, 0, 0]), "center untouched");
        assert_eq!(*img.get_pixel(52, 32), CYAN, "rim painted");
    }

    #[test]
    fn test_text_marks_pixels() {
        let mut img = RgbaImage::new(64, 16);
        draw_text(&mut img, 32.0, 8.0, "Rs", 1, WHITE);
        let painted = img.pixels().filter(|p| **p == WHITE).count();
        assert!(painted > 0, "label must paint at least one pixel");
    }

    #[test]
    fn test_annotations_render_without_panic() {
        let rs = 29_500.0;
        let vp = Viewport {
            half_extent: 5.0 * rs,
            size: 128,
        };
        let mut img = RgbaImage::new(128, 128);
        draw_annotations(&mut img, &vp, rs);

        // Every overlay color must have landed somewhere on the canvas
        for (color, name) in [(CYAN, "horizon"), (WHITE, "interior"), (RED, "hawking")] {
            let painted = img.pixels().filter(|p| **p == color).count();
            assert!(painted > 0, "{name} overlay painted no pixels");
        }
    }
}
