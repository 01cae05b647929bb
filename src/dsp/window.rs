//! Window functions, evaluated one sample at a time.
//!
//! Every `*_fn` takes the sample index `n` and the window length `len` and returns zero for any
//! `n` outside `0..len`, so a window can be slid over a longer signal without bounds checks. A
//! window of length one is `[1.0]`.

use std::f64::consts::PI;

use derive_more::{Display, IsVariant};

/// Returns `n` as a float if it lies inside a window of `len` samples.
fn position(n: isize, len: usize) -> Option<f64> {
    usize::try_from(n).ok().filter(|&n| n < len).map(|n| n as f64)
}

/// Shared handling of the bounds and the single-sample window for all windows.
fn sample(n: isize, len: usize, f: impl FnOnce(f64, f64) -> f64) -> f64 {
    match position(n, len) {
        None => 0.0,
        Some(_) if len == 1 => 1.0,
        Some(n) => f(n, len as f64),
    }
}

/// The rectangular window: one inside, zero outside.
pub fn rectwin_fn(n: isize, len: usize) -> f64 {
    sample(n, len, |_, _| 1.0)
}

/// `0.42 - 0.5 cos(2πn / (L - 1)) + 0.08 cos(4πn / (L - 1))`
pub fn blackman_fn(n: isize, len: usize) -> f64 {
    sample(n, len, |n, len| {
        0.42 - 0.5 * (2.0 * PI * n / (len - 1.0)).cos() + 0.08 * (4.0 * PI * n / (len - 1.0)).cos()
    })
}

/// The full Blackman window of `len` samples.
///
/// # Examples
/// ```
/// # use meadow::dsp::window::blackman;
/// let w = blackman(7);
/// assert_eq!(w.len(), 7);
/// assert!((w[3] - 1.0).abs() < 1e-15);
/// ```
pub fn blackman(len: usize) -> Vec<f64> {
    Window::Blackman.samples(len)
}

/// The Gaussian window, `exp(-0.5 (α (n - c) / c)^2)` with `c = (L - 1) / 2`. A larger `alpha`
/// gives a narrower window.
pub fn gausswin_fn(n: isize, len: usize, alpha: f64) -> f64 {
    sample(n, len, |n, len| {
        let center = (len - 1.0) / 2.0;
        let dn = n - center;
        let x = alpha * dn / center;
        (-0.5 * (x * x)).exp()
    })
}

/// The Kaiser window, `I0(β sqrt(1 - ((n - c) / c)^2)) / I0(β)` with `c = (L - 1) / 2`, where
/// `I0` is the zeroth order modified Bessel function of the first kind.
pub fn kaiser_fn(n: isize, len: usize, beta: f64) -> f64 {
    sample(n, len, |n, len| {
        let half = (len - 1.0) / 2.0;
        let r = (n - half) / half;
        bessel_i0(beta * (1.0 - r * r).sqrt()) / bessel_i0(beta)
    })
}

/// The Hann-Poisson window, `0.5 (1 - cos(2πn / N)) exp(-α |N - 2n| / N)` with `N = L - 1`.
pub fn hann_poisson_fn(n: isize, len: usize, alpha: f64) -> f64 {
    sample(n, len, |n, len| {
        let big_n = len - 1.0;
        0.5 * (1.0 - (2.0 * PI * n / big_n).cos()) * (-alpha * (big_n - 2.0 * n).abs() / big_n).exp()
    })
}

/// `I0(x) = Σ ((x / 2)^k / k!)^2`, summed until the terms stop contributing.
fn bessel_i0(x: f64) -> f64 {
    let half = x / 2.0;
    let mut term = 1.0;
    let mut sum = 1.0;
    for k in 1..500 {
        term *= half / k as f64;
        let contribution = term * term;
        sum += contribution;
        if contribution <= sum * f64::EPSILON * 0.25 {
            break;
        }
    }
    sum
}

/// A window function chosen at runtime, along with its parameters.
///
/// # Examples
/// ```
/// # use meadow::dsp::Window;
/// let w = Window::Gaussian { alpha: 3.0 };
/// assert_eq!(w.at(-1, 7), 0.0);
/// assert_eq!(w.at(3, 7), 1.0);
/// assert_eq!(w.samples(7).len(), 7);
/// assert_eq!(w.to_string(), "gausswin(3)");
/// ```
#[derive(Debug, Display, Clone, Copy, PartialEq, IsVariant)]
pub enum Window {
    #[display("rectwin")]
    Rectangular,
    #[display("blackman")]
    Blackman,
    #[display("gausswin({alpha})")]
    Gaussian { alpha: f64 },
    #[display("kaiser({beta})")]
    Kaiser { beta: f64 },
    #[display("hann_poisson({alpha})")]
    HannPoisson { alpha: f64 },
}

impl Window {
    /// Evaluates sample `n` of the window of length `len`.
    pub fn at(&self, n: isize, len: usize) -> f64 {
        match *self {
            Window::Rectangular => rectwin_fn(n, len),
            Window::Blackman => blackman_fn(n, len),
            Window::Gaussian { alpha } => gausswin_fn(n, len, alpha),
            Window::Kaiser { beta } => kaiser_fn(n, len, beta),
            Window::HannPoisson { alpha } => hann_poisson_fn(n, len, alpha),
        }
    }

    /// Returns all `len` samples of the window.
    pub fn samples(&self, len: usize) -> Vec<f64> {
        (0..len as isize).map(|n| self.at(n, len)).collect()
    }

    /// Multiplies `signal` by the window, sized to the length of `signal`.
    pub fn apply(&self, signal: &mut [f64]) {
        let len = signal.len();
        for (n, x) in signal.iter_mut().enumerate() {
            *x *= self.at(n as isize, len);
        }
    }
}
