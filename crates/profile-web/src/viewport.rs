/// Shrink `width` x `height` so neither side exceeds `max`, keeping the
/// aspect ratio. Sides never drop below 1.
pub fn fit_within(width: u32, height: u32, max: u32) -> (u32, u32) {
    let width = width.max(1);
    let height = height.max(1);
    let max = max.max(1);
    let longest = width.max(height);
    if longest <= max {
        return (width, height);
    }
    let scale = max as f64 / longest as f64;
    let fit = |side: u32| ((side as f64 * scale).round() as u32).clamp(1, max);
    (fit(width), fit(height))
}
