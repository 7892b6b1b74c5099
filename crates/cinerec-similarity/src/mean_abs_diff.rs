use cinerec_core::models::{Movie, Similarity};
use cinerec_core::traits::IRatingLookup;

/// Similarity of `a` and `b` from their common raters.
///
/// Common raters are visited in ascending user id, so the sum is the same
/// whichever movie is passed first.
pub fn mean_absolute_difference<S>(store: &S, a: &Movie, b: &Movie, rating_span: f64) -> Similarity
where
    S: IRatingLookup + ?Sized,
{
    let mut total_diff = 0.0;
    let mut common = 0usize;

    for &user in a.raters.intersection(&b.raters) {
        if let (Some(ra), Some(rb)) = (store.get_rating(user, a.id), store.get_rating(user, b.id)) {
            total_diff += (ra - rb).abs();
            common += 1;
        }
    }

    if common == 0 {
        return Similarity::NoEvidence;
    }

    let avg_diff = total_diff / common as f64;
    Similarity::Computed(1.0 - avg_diff / rating_span)
}
