//! Decorative rising bubbles behind the page.

use rand::Rng;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bubble {
    pub size_px: f64,
    pub left_vw: f64,
    /// Starts below the viewport, so this is negative.
    pub bottom_px: f64,
    pub duration_s: f64,
    pub opacity: f64,
}

impl Bubble {
    pub fn random(rng: &mut impl Rng) -> Self {
        let opacity = 0.10 + rng.r#gen::<f64>() * 0.18;
        Self {
            size_px: rng.gen_range(40.0..100.0),
            left_vw: rng.gen_range(0.0..100.0),
            bottom_px: -rng.gen_range(20.0..60.0),
            duration_s: rng.gen_range(14.0..24.0),
            opacity: (opacity * 100.0).round() / 100.0,
        }
    }

    pub fn style(&self) -> String {
        format!(
            "width:{w}px; height:{w}px; left:{l}vw; bottom:{b}px; animation-duration:{d}s; opacity:{o:.2};",
            w = self.size_px,
            l = self.left_vw,
            b = self.bottom_px,
            d = self.duration_s,
            o = self.opacity
        )
    }
}

pub fn generate_bubbles(rng: &mut impl Rng, count: usize) -> Vec<Bubble> {
    (0..count).map(|_| Bubble::random(rng)).collect()
}
