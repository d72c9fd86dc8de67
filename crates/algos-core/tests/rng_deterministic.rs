use algos_core::rng::RngHandle;
use rand::Rng;

fn draw_edges(rng: &mut RngHandle, vertices: usize) -> Vec<(usize, usize)> {
    (0..32)
        .map(|_| (rng.gen_range(0..vertices), rng.gen_range(0..vertices)))
        .collect()
}

#[test]
fn same_seed_draws_same_edges() {
    let mut first = RngHandle::from_seed(1234);
    let mut second = RngHandle::from_seed(1234);
    assert_eq!(draw_edges(&mut first, 10), draw_edges(&mut second, 10));
    assert_eq!(first.seed(), 1234);
}

#[test]
fn clone_continues_the_same_stream() {
    let mut original = RngHandle::from_seed(7);
    let _ = draw_edges(&mut original, 5);
    let mut copy = original.clone();
    assert_eq!(draw_edges(&mut original, 5), draw_edges(&mut copy, 5));
}

#[test]
fn different_seeds_diverge() {
    let mut a = RngHandle::from_seed(1);
    let mut b = RngHandle::from_seed(2);
    assert_ne!(draw_edges(&mut a, 1_000), draw_edges(&mut b, 1_000));
}
