//! Decorative falling-glyph background. No state worth keeping: it is
//! rebuilt on resize and only ever drawn dimmed behind the window.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const GLYPHS: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
const MIN_STEP_MS: u64 = 50;
const MAX_STEP_MS: u64 = 140;
const MIN_TRAIL: u16 = 4;
const MAX_TRAIL: u16 = 14;

#[derive(Debug, Clone)]
struct Drop {
    /// Row of the leading glyph; negative while above the screen.
    head: i32,
    trail: u16,
    step_ms: u64,
    next_ms: u64,
    /// Changes every step so the glyphs shimmer.
    salt: u32,
}

/// One glyph to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub x: u16,
    pub y: u16,
    pub glyph: char,
    pub head: bool,
}

#[derive(Debug)]
pub struct MatrixRain {
    width: u16,
    height: u16,
    drops: Vec<Drop>,
    rng: StdRng,
}

impl MatrixRain {
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self {
            width: 0,
            height: 0,
            drops: Vec::new(),
            rng,
        }
    }

    /// Rebuild the columns when the screen size changes.
    pub fn resize(&mut self, width: u16, height: u16, now_ms: u64) {
        if (width, height) == (self.width, self.height) {
            return;
        }
        self.width = width;
        self.height = height;
        self.drops = (0..width).map(|_| self.spawn(now_ms, true)).collect();
    }

    fn spawn(&mut self, now_ms: u64, scatter: bool) -> Drop {
        let height = i32::from(self.height.max(1));
        let trail = self.rng.random_range(MIN_TRAIL..=MAX_TRAIL);
        let head = if scatter {
            self.rng.random_range(-height..height)
        } else {
            -self.rng.random_range(0..height)
        };
        let step_ms = self.rng.random_range(MIN_STEP_MS..=MAX_STEP_MS);
        Drop {
            head,
            trail,
            step_ms,
            next_ms: now_ms + step_ms,
            salt: self.rng.random(),
        }
    }

    pub fn tick(&mut self, now_ms: u64) {
        let bottom = i32::from(self.height);
        for i in 0..self.drops.len() {
            while self.drops[i].next_ms <= now_ms {
                let drop = &mut self.drops[i];
                drop.head += 1;
                drop.next_ms += drop.step_ms;
                drop.salt = drop.salt.wrapping_mul(1_103_515_245).wrapping_add(12_345);
                if drop.head - i32::from(drop.trail) > bottom {
                    let next = drop.next_ms;
                    self.drops[i] = self.spawn(next, false);
                }
            }
        }
    }

    /// Earliest time any column moves.
    pub fn next_wakeup(&self) -> Option<u64> {
        self.drops.iter().map(|d| d.next_ms).min()
    }

    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        let height = i32::from(self.height);
        self.drops.iter().enumerate().flat_map(move |(x, drop)| {
            let top = drop.head - i32::from(drop.trail) + 1;
            (top.max(0)..=drop.head.min(height - 1)).map(move |y| {
                let index = (drop.salt as usize).wrapping_add(y as usize * 7) % GLYPHS.len();
                Cell {
                    x: x as u16,
                    y: y as u16,
                    glyph: char::from(GLYPHS[index]),
                    head: y == drop.head,
                }
            })
        })
    }
}
