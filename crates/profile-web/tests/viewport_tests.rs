// Host-side tests for fitting the canvas to the device texture limit.

#![allow(dead_code)]
mod viewport {
    include!("../src/viewport.rs");
}

use viewport::fit_within;

#[test]
fn sizes_within_the_limit_pass_through() {
    assert_eq!(fit_within(1920, 1080, 8192), (1920, 1080));
    assert_eq!(fit_within(8192, 8192, 8192), (8192, 8192));
}

#[test]
fn oversized_canvas_is_scaled_down_keeping_aspect() {
    // A 4K monitor at a 3x device pixel ratio.
    let (w, h) = fit_within(11520, 6480, 8192);
    assert_eq!(w, 8192);
    assert_eq!(h, 4608);
    let (w, h) = fit_within(3000, 12000, 8192);
    assert_eq!((w, h), (2048, 8192));
}

#[test]
fn degenerate_sizes_stay_renderable() {
    assert_eq!(fit_within(0, 0, 8192), (1, 1));
    assert_eq!(fit_within(100_000, 1, 2048), (2048, 1));
    assert_eq!(fit_within(5, 5, 0), (1, 1));
}
