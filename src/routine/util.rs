use rand::seq::SliceRandom;
use rand::Rng;

/// `all − taken`, en conservant l'ordre (croissant) de `all`.
pub(super) fn set_difference(all: &[usize], taken: &[usize]) -> Vec<usize> {
    all.iter().copied().filter(|i| !taken.contains(i)).collect()
}

/// Sous-ensemble uniforme de taille `size`, trié par ordre croissant.
///
/// Mélange Fisher–Yates, préfixe, tri. `size` est borné par le nombre de candidats.
pub(super) fn random_subset<R: Rng + ?Sized>(
    candidates: &[usize],
    size: usize,
    rng: &mut R,
) -> Vec<usize> {
    let mut pool = candidates.to_vec();
    pool.shuffle(rng);
    pool.truncate(size.min(candidates.len()));
    pool.sort_unstable();
    pool
}
