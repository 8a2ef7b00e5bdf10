// tests/properties.rs
use glam::Vec2;
use proptest::prelude::*;
use symbios_fractal::{Rules, expand, interpret, normalize};

fn point() -> impl Strategy<Value = Vec2> {
    (-1.0e3f32..1.0e3, -1.0e3f32..1.0e3).prop_map(|(x, y)| Vec2::new(x, y))
}

fn rules() -> impl Strategy<Value = Rules> {
    prop::collection::btree_map(
        prop::sample::select(vec!['F', 'X', 'Y', '+']),
        "[FXY+\\-\\[\\]]{0,6}",
        0..4,
    )
}

proptest! {
    #[test]
    fn zero_iterations_returns_axiom(axiom in "[FXY+\\-\\[\\]]{0,16}", rules in rules()) {
        prop_assert_eq!(expand(&axiom, &rules, 0), axiom);
    }

    #[test]
    fn expansion_is_deterministic(axiom in "[FXY+\\-]{0,8}", rules in rules(), n in 0usize..4) {
        prop_assert_eq!(expand(&axiom, &rules, n), expand(&axiom, &rules, n));
    }

    #[test]
    fn interpret_emits_origin_draws_and_pops(commands in "[Ff+\\-\\[\\]X]{0,64}") {
        let points = interpret(&commands, 37.5, 3.0);
        prop_assert_eq!(points[0], Vec2::ZERO);

        let mut depth = 0usize;
        let mut pops = 0usize;
        for c in commands.chars() {
            match c {
                '[' => depth += 1,
                ']' if depth > 0 => {
                    depth -= 1;
                    pops += 1;
                }
                _ => {}
            }
        }
        let draws = commands.matches('F').count();
        prop_assert_eq!(points.len(), 1 + draws + pops);
    }

    #[test]
    fn normalize_preserves_length_and_fits(
        points in prop::collection::vec(point(), 0..64),
        width in 50.0f32..2000.0,
        height in 50.0f32..2000.0,
        padding in 0.0f32..24.0,
    ) {
        let out = normalize(&points, width, height, padding);
        prop_assert_eq!(out.len(), points.len());

        let eps = 1e-2 * width.max(height) / 100.0 + 1e-2;
        for p in &out {
            prop_assert!(p.x >= padding - eps && p.x <= width - padding + eps);
            prop_assert!(p.y >= padding - eps && p.y <= height - padding + eps);
        }
    }
}
