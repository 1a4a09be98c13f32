/// Procedural renderer for the WavPlayer waveform icon
///
/// Every measurement derives from the requested pixel size, so one routine
/// covers the whole resolution ladder: panel inset, corner radius, stroke
/// widths, dot radius, and sample count all scale proportionally.

use image::{Rgba, RgbaImage};

use crate::constants::{palette, sizes, wave};

/// One sample on the synthetic waveform polyline, in pixel space.
pub type WaveformPoint = (f32, f32);

/// Number of waveform samples drawn at the given icon size.
///
/// Small icons keep a floor of 20 points so the shape stays legible; larger
/// icons gain detail proportionally.
pub fn point_count(size: u32) -> u32 {
    (size / 4).max(wave::MIN_POINTS)
}

/// Sample positions of the synthetic waveform at the given icon size.
///
/// The signal is a fixed weighted mix of three sines at relative frequencies
/// 1.0, 2.3 and 0.7. The weights sum to 1.0, so every sample stays within
/// `size/2 ± span/3`, where `span` is the horizontal extent between the
/// waveform insets (`size/4` on each side).
///
/// # Examples
///
/// ```
/// use wavplayer_icongen::icon::waveform_points;
///
/// let points = waveform_points(64);
/// assert_eq!(points.len(), 20);
/// assert_eq!(points[0], (16.0, 32.0)); // starts on the center line
/// ```
pub fn waveform_points(size: u32) -> Vec<WaveformPoint> {
    let inset = (size / 4) as f32;
    let span = size as f32 - 2.0 * inset;
    let center_y = (size / 2) as f32;

    let n = point_count(size);
    let mut points = Vec::with_capacity(n as usize);

    for i in 0..n {
        let x = inset + i as f32 * span / (n - 1) as f32;

        // The phase step is PHASE_SPAN / n, so the run stops one step short
        // of two full base cycles.
        let t = i as f32 / n as f32 * wave::PHASE_SPAN;
        let amplitude = (t * wave::FREQS[0]).sin() * wave::WEIGHTS[0]
            + (t * wave::FREQS[1]).sin() * wave::WEIGHTS[1]
            + (t * wave::FREQS[2]).sin() * wave::WEIGHTS[2];

        let y = center_y + amplitude * (span / 3.0);
        points.push((x, y));
    }

    points
}

/// Render the WavPlayer icon at `size` x `size` pixels.
///
/// Pure function of `size`: no randomness, no clock, no external state, so
/// repeated calls are pixel-identical. Drawing is crisp (no anti-aliasing)
/// and later shapes overwrite earlier ones; the semi-transparent center line
/// lands in the output with its alpha as-is.
pub fn render(size: u32) -> RgbaImage {
    let mut img = RgbaImage::from_pixel(size, size, Rgba([0, 0, 0, 0]));

    // Rounded background panel
    let margin = (size / 8) as f32;
    let corner_radius = (size / 6) as f32;
    fill_rounded_rect(
        &mut img,
        margin,
        margin,
        size as f32 - margin,
        size as f32 - margin,
        corner_radius,
        palette::PANEL,
    );

    // Waveform polyline
    let points = waveform_points(size);
    let line_width = (size / 32).max(2) as f32;
    for pair in points.windows(2) {
        draw_segment(&mut img, pair[0], pair[1], line_width, palette::WAVE);
    }

    // Accent dots at every third sample point; skipped below the threshold
    // to avoid clutter at small sizes
    if size >= sizes::DOT_THRESHOLD {
        let dot_radius = (size / 40).max(2) as f32;
        for (i, &(x, y)) in points.iter().enumerate() {
            if i % 3 == 0 {
                fill_circle(&mut img, x, y, dot_radius, palette::ACCENT);
            }
        }
    }

    // Center reference line across the waveform span
    let inset = (size / 4) as f32;
    let center_y = (size / 2) as f32;
    let ref_width = (size / 64).max(1) as f32;
    draw_segment(
        &mut img,
        (inset, center_y),
        (size as f32 - inset, center_y),
        ref_width,
        palette::CENTER_LINE,
    );

    img
}

/// Pixel rows/columns that can satisfy an inclusive `[lo, hi]` bound,
/// clamped to the canvas.
fn span(lo: f32, hi: f32, limit: u32) -> std::ops::Range<u32> {
    let start = lo.max(0.0) as u32;
    let end = ((hi + 1.0).max(0.0) as u32).min(limit);
    start..end
}

/// Fill an axis-aligned rounded rectangle spanning `[x0, x1] x [y0, y1]`.
fn fill_rounded_rect(
    img: &mut RgbaImage,
    x0: f32,
    y0: f32,
    x1: f32,
    y1: f32,
    radius: f32,
    color: Rgba<u8>,
) {
    // Corner radius cannot exceed half the box
    let radius = radius.min((x1 - x0) / 2.0).min((y1 - y0) / 2.0);

    for y in span(y0, y1, img.height()) {
        for x in span(x0, x1, img.width()) {
            // Distance from the radius-inset core box; zero along the
            // straight edges, positive only in the corner squares
            let dx = (x0 + radius - x as f32).max(x as f32 - (x1 - radius)).max(0.0);
            let dy = (y0 + radius - y as f32).max(y as f32 - (y1 - radius)).max(0.0);
            if dx * dx + dy * dy <= radius * radius {
                img.put_pixel(x, y, color);
            }
        }
    }
}

/// Draw a line segment with the given stroke width and round caps.
fn draw_segment(
    img: &mut RgbaImage,
    a: WaveformPoint,
    b: WaveformPoint,
    width: f32,
    color: Rgba<u8>,
) {
    let (ax, ay) = a;
    let (bx, by) = b;
    let half = width / 2.0;
    let len_sq = (bx - ax) * (bx - ax) + (by - ay) * (by - ay);

    for y in span(ay.min(by) - half, ay.max(by) + half, img.height()) {
        for x in span(ax.min(bx) - half, ax.max(bx) + half, img.width()) {
            let px = x as f32;
            let py = y as f32;

            // Closest point on the segment to this pixel
            let t = if len_sq > 0.0 {
                (((px - ax) * (bx - ax) + (py - ay) * (by - ay)) / len_sq).clamp(0.0, 1.0)
            } else {
                0.0
            };
            let dx = px - (ax + t * (bx - ax));
            let dy = py - (ay + t * (by - ay));
            if dx * dx + dy * dy <= half * half {
                img.put_pixel(x, y, color);
            }
        }
    }
}

/// Fill a circle centered at `(cx, cy)`.
fn fill_circle(img: &mut RgbaImage, cx: f32, cy: f32, radius: f32, color: Rgba<u8>) {
    for y in span(cy - radius, cy + radius, img.height()) {
        for x in span(cx - radius, cx + radius, img.width()) {
            let dx = x as f32 - cx;
            let dy = y as f32 - cy;
            if dx * dx + dy * dy <= radius * radius {
                img.put_pixel(x, y, color);
            }
        }
    }
}
