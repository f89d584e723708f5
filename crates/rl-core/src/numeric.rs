/// Floating point type of every physical input and result.
pub type Real = f64;

/// Acceptance band for comparing computed heat losses and flows.
///
/// Two values agree when they are within `abs` of each other, or within
/// `rel` of the larger magnitude.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tolerance {
    pub abs: Real,
    pub rel: Real,
}

impl Tolerance {
    /// A micro-watt (or m³/h) absolute band, tight enough for summed components.
    pub const FINE: Tolerance = Tolerance {
        abs: 1e-6,
        rel: 1e-9,
    };

    pub const fn new(abs: Real, rel: Real) -> Self {
        Self { abs, rel }
    }

    pub fn close(self, a: Real, b: Real) -> bool {
        let diff = (a - b).abs();
        diff <= self.abs || diff <= self.rel * a.abs().max(b.abs())
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::new(1e-9, 1e-9)
    }
}
