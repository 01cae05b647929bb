#![cfg(test)]

use super::window::*;

fn make_window(len: usize, f: impl Fn(isize) -> f64) -> Vec<f64> {
    assert_eq!(f(-1), 0.0, "Samples before the window should be zero.");
    assert_eq!(f(len as isize), 0.0, "Samples after the window should be zero.");
    (0..len as isize).map(f).collect()
}

#[track_caller]
fn assert_near(actual: &[f64], expected: &[f64], tolerance: f64) {
    assert_eq!(actual.len(), expected.len());
    for (i, (a, e)) in actual.iter().zip(expected).enumerate() {
        assert!(
            (a - e).abs() <= tolerance,
            "sample {i}: {a} differs from {e} by more than {tolerance}"
        );
    }
}

#[test]
fn test_rectwin() {
    assert_eq!(make_window(7, |n| rectwin_fn(n, 7)), [1.0; 7]);
    assert_eq!(make_window(8, |n| rectwin_fn(n, 8)), [1.0; 8]);
}

#[test]
fn test_blackman() {
    let w7 = make_window(7, |n| blackman_fn(n, 7));
    assert_near(
        &w7,
        &[
            -1.387778780781446e-17,
            1.299999999999999e-01,
            6.299999999999999e-01,
            9.999999999999999e-01,
            6.300000000000002e-01,
            1.299999999999999e-01,
            -1.387778780781446e-17,
        ],
        1e-15,
    );
    assert_eq!(blackman(7), w7, "The full window should match sample by sample evaluation.");

    assert_near(
        &make_window(8, |n| blackman_fn(n, 8)),
        &[
            -1.387778780781446e-17,
            9.045342435412804e-02,
            4.591829575459636e-01,
            9.203636180999081e-01,
            9.203636180999083e-01,
            4.591829575459638e-01,
            9.045342435412812e-02,
            -1.387778780781446e-17,
        ],
        1e-15,
    );
}

#[test]
fn test_gausswin() {
    assert_near(
        &make_window(7, |n| gausswin_fn(n, 7, 3.0)),
        &[
            1.110899653824231e-02,
            1.353352832366127e-01,
            6.065306597126334e-01,
            1.000000000000000e+00,
            6.065306597126334e-01,
            1.353352832366127e-01,
            1.110899653824231e-02,
        ],
        1e-15,
    );
    assert_near(
        &make_window(8, |n| gausswin_fn(n, 8, 4.0)),
        &[
            3.354626279025119e-04,
            1.687988414878993e-02,
            2.300662989938091e-01,
            8.493658165683124e-01,
            8.493658165683124e-01,
            2.300662989938091e-01,
            1.687988414878993e-02,
            3.354626279025119e-04,
        ],
        1e-15,
    );
}

#[test]
fn test_kaiser() {
    assert_near(
        &make_window(7, |n| kaiser_fn(n, 7, 1.23)),
        &[
            0.706450386180156,
            0.862875634246974,
            0.964683201523233,
            1.000000000000000,
            0.964683201523233,
            0.862875634246974,
            0.706450386180156,
        ],
        1e-14,
    );
    assert_near(
        &make_window(8, |n| kaiser_fn(n, 8, 1.78)),
        &[
            0.509303391023423,
            0.726907890745535,
            0.895844495440142,
            0.988089123045320,
            0.988089123045320,
            0.895844495440142,
            0.726907890745535,
            0.509303391023423,
        ],
        1e-14,
    );
}

#[test]
fn test_hann_poisson() {
    assert_near(
        &make_window(7, |n| hann_poisson_fn(n, 7, 2.1)),
        &[
            0.0,
            0.061649240985402,
            0.372438977843557,
            1.000000000000000,
            0.372438977843557,
            0.061649240985402,
            0.0,
        ],
        1e-14,
    );
    assert_near(
        &make_window(8, |n| hann_poisson_fn(n, 8, 2.9)),
        &[
            0.0,
            0.023721205183369,
            0.176384455982313,
            0.628091634613610,
            0.628091634613610,
            0.176384455982313,
            0.023721205183369,
            0.0,
        ],
        1e-14,
    );
}

#[test]
fn test_degenerate_lengths() {
    let windows = [
        Window::Rectangular,
        Window::Blackman,
        Window::Gaussian { alpha: 2.5 },
        Window::Kaiser { beta: 0.5 },
        Window::HannPoisson { alpha: 1.0 },
    ];
    for window in windows {
        assert_eq!(window.samples(1), [1.0], "{window} of length 1");
        assert!(window.samples(0).is_empty(), "{window} of length 0");
        assert_eq!(window.at(0, 0), 0.0);
    }
}

#[test]
fn test_window_enum() {
    let w = Window::Kaiser { beta: 1.78 };
    assert!(w.is_kaiser());
    assert_eq!(w.to_string(), "kaiser(1.78)");
    assert_eq!(w.at(2, 8), kaiser_fn(2, 8, 1.78));

    let mut signal = [2.0; 7];
    Window::HannPoisson { alpha: 2.1 }.apply(&mut signal);
    assert_eq!(signal[0], 0.0);
    assert_eq!(signal[3], 2.0);
    assert!((signal[1] - signal[5]).abs() < 1e-15);
}
