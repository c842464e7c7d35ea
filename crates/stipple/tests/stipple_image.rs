use std::collections::HashSet;

use glam::IVec2;
use rand::rngs::StdRng;
use rand::SeedableRng;
use stipple::prelude::*;

/// 120x60 RGBA image: black left half, white right half.
fn split_image() -> (u32, u32, Vec<u8>) {
    let (w, h) = (120u32, 60u32);
    let mut pixels = Vec::with_capacity((w * h * 4) as usize);
    for _y in 0..h {
        for x in 0..w {
            let v = if x < w / 2 { 0 } else { 255 };
            pixels.extend_from_slice(&[v, v, v, 255]);
        }
    }
    (w, h, pixels)
}

#[test]
fn bright_half_of_image_is_stippled_densely() {
    let (w, h, pixels) = split_image();
    let raster = BrightnessRaster::from_rgba8(w, h, &pixels).unwrap();
    let domain = raster.domain().unwrap();

    let config = RunConfig::new(400).with_tries(TriesPolicy::Fixed(25));
    let mut rng = StdRng::seed_from_u64(11);
    let result = run_placement(domain, &raster, &config, &mut rng).unwrap();

    let bright = result.points.iter().filter(|p| p.x >= 60).count();
    let dark = result.len() - bright;
    assert!(bright > 2 * dark, "bright={bright} dark={dark}");

    let inverted = InvertedWeight(raster.clone());
    let mut rng = StdRng::seed_from_u64(11);
    let flipped = run_placement(domain, &inverted, &config, &mut rng).unwrap();
    let dark_flipped = flipped.points.iter().filter(|p| p.x < 60).count();
    assert!(dark_flipped > flipped.len() - dark_flipped);
}

#[test]
fn bitmap_output_flags_every_placed_point() {
    let domain = Domain::from_size(100, 100).unwrap();
    let config = RunConfig::new(50).with_tries(TriesPolicy::Fixed(20));
    let mut rng = StdRng::seed_from_u64(0x5EED);
    let result = run_placement(domain, &ConstantWeight(0.5), &config, &mut rng).unwrap();

    let text = Bitmap::from_points(&domain, &result.points).to_p2_string();
    assert!(text.starts_with("P2 100 100 1\n"));

    let parsed = Bitmap::parse_p2(&text).unwrap();
    let recovered: HashSet<IVec2> = parsed.points().collect();
    let placed: HashSet<IVec2> = result.points.iter().copied().collect();
    assert_eq!(recovered, placed);
    assert_eq!(parsed.count_set(), 50);
}

#[test]
fn runner_is_reproducible_per_seed() {
    let runner = StippleRunner::try_new(RunConfig::new(120)).unwrap();
    let domain = Domain::new([-50, -50], [50, 50]).unwrap();
    let field = |p: IVec2| -> f32 { ((p.x + 50) as f32 / 100.0).clamp(0.0, 1.0) };

    let a = runner
        .run(domain, &field, &mut StdRng::seed_from_u64(8))
        .unwrap();
    let b = runner
        .run(domain, &field, &mut StdRng::seed_from_u64(8))
        .unwrap();
    assert_eq!(a, b);
    assert!(a
        .points
        .iter()
        .all(|&p| domain.contains_padded(p, DEFAULT_PADDING)));
}
