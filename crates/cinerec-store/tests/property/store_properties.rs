use cinerec_core::models::{MovieId, MovieRecord, RatingRecord, UserId};
use cinerec_core::traits::IRatingLookup;
use cinerec_store::RatingStore;
use proptest::prelude::*;

const MOVIES: u32 = 8;

fn catalog() -> Vec<MovieRecord> {
    (1..=MOVIES)
        .map(|id| MovieRecord {
            movie_id: MovieId(id),
            title: format!("Movie {id}"),
        })
        .collect()
}

/// Ratings with unique (user, movie) keys, so record order cannot matter.
fn arb_ratings() -> impl Strategy<Value = Vec<RatingRecord>> {
    prop::collection::btree_map((1u32..20, 1u32..=MOVIES), 1u32..=10, 0..60).prop_map(|map| {
        map.into_iter()
            .map(|((user, movie), half_stars)| RatingRecord {
                user_id: UserId(user),
                movie_id: MovieId(movie),
                rating: f64::from(half_stars) * 0.5,
            })
            .collect()
    })
}

// ── Grouping does not depend on input order ──────────────────────────────

proptest! {
    #[test]
    fn shuffled_input_builds_identical_store(
        ratings in arb_ratings(),
        seed in any::<u64>(),
    ) {
        let sorted = RatingStore::from_records(catalog(), ratings.clone()).unwrap();

        // Deterministic shuffle driven by the seed.
        let mut shuffled = ratings.clone();
        let len = shuffled.len();
        let mut state = seed | 1;
        for i in (1..len).rev() {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            shuffled.swap(i, (state % (i as u64 + 1)) as usize);
        }
        let permuted = RatingStore::from_records(catalog(), shuffled).unwrap();

        prop_assert_eq!(sorted.stats(), permuted.stats());
        for (user, user_ratings) in sorted.users() {
            prop_assert_eq!(user_ratings, permuted.get_user_ratings(user).unwrap());
        }
        for id in 1..=MOVIES {
            prop_assert_eq!(
                sorted.raters_of(MovieId(id)).unwrap(),
                permuted.raters_of(MovieId(id)).unwrap()
            );
        }
    }

    #[test]
    fn every_rating_is_retrievable(ratings in arb_ratings()) {
        let store = RatingStore::from_records(catalog(), ratings.clone()).unwrap();
        prop_assert_eq!(store.stats().ratings, ratings.len());
        for record in &ratings {
            prop_assert_eq!(store.get_rating(record.user_id, record.movie_id), Some(record.rating));
            prop_assert!(store.get_movie(record.movie_id).unwrap().is_rated_by(record.user_id));
        }
    }
}
