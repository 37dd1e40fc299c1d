use crate::vector::Vector;
use rand::Rng;

pub fn generate_random_vectors(dim: usize, num: usize) -> Vec<Vector> {
    let mut rng = rand::thread_rng();

    (0..num)
        .map(|_| (0..dim).map(|_| rng.gen_range(-1.0f32..1.0)).collect::<Vector>())
        .collect()
}
