use std::cmp::Ordering;

use crate::entities::{Driver, Passenger};

use super::{relevance_score, MatchScore};

/// Picks the highest-scoring driver for a passenger.
///
/// Scans the candidates in order and keeps the first maximum, so ties go to
/// the earliest candidate. Drivers that cannot be scored (no reported
/// position) are skipped with a warning rather than failing the whole scan.
/// An empty candidate list yields `None`.
pub fn select_best_driver<'a>(
    passenger: &Passenger,
    drivers: &'a [Driver],
) -> Option<(&'a Driver, f64)> {
    let mut best: Option<(&Driver, f64)> = None;

    for driver in drivers {
        let score = match relevance_score(passenger, driver) {
            Ok(score) => score,
            Err(_) => {
                tracing::warn!(driver = %driver.username, "skipping driver that cannot be scored");
                continue;
            }
        };

        match best {
            None => best = Some((driver, score)),
            Some((_, best_score)) if score > best_score => best = Some((driver, score)),
            _ => {}
        }
    }

    best
}

/// Ranks passengers for a driver and returns the best `n`.
///
/// Passengers that cannot be scored are skipped with a warning. The sort is
/// stable and descending, so equal scores keep their input order.
pub fn top_customers(driver: &Driver, passengers: &[Passenger], n: usize) -> Vec<MatchScore> {
    let mut scores = Vec::with_capacity(passengers.len());

    for passenger in passengers {
        match relevance_score(passenger, driver) {
            Ok(score) => scores.push(MatchScore {
                username: passenger.username.clone(),
                score,
            }),
            Err(_) => {
                tracing::warn!(passenger = %passenger.username, "skipping passenger that cannot be scored");
            }
        }
    }

    scores.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
    scores.truncate(n);

    scores
}

#[cfg(test)]
mod tests {
    use super::super::test_fixtures::{driver_at, passenger_from};
    use super::*;
    use crate::matching::relevance_score;

    #[test]
    fn best_driver_over_empty_list_is_none() {
        let passenger = passenger_from("alice", 3.866, 11.516);

        assert!(select_best_driver(&passenger, &[]).is_none());
    }

    #[test]
    fn best_driver_over_singleton_returns_it_with_its_score() {
        let passenger = passenger_from("alice", 3.866, 11.516);
        let drivers = vec![driver_at("bob", 3.848, 11.502, 4.5)];

        let (driver, score) = select_best_driver(&passenger, &drivers).unwrap();

        assert_eq!(driver.username, "bob");
        assert_eq!(score, relevance_score(&passenger, &drivers[0]).unwrap());
    }

    #[test]
    fn best_driver_prefers_higher_score() {
        let passenger = passenger_from("alice", 3.866, 11.516);
        let drivers = vec![
            driver_at("far", 3.95, 11.60, 0.0),
            driver_at("near", 3.866, 11.517, 0.0),
        ];

        let (driver, _) = select_best_driver(&passenger, &drivers).unwrap();

        assert_eq!(driver.username, "near");
    }

    #[test]
    fn best_driver_tie_goes_to_first_candidate() {
        let passenger = passenger_from("alice", 3.866, 11.516);
        // Identical position and rating, so identical scores.
        let drivers = vec![
            driver_at("first", 3.848, 11.502, 3.0),
            driver_at("second", 3.848, 11.502, 3.0),
        ];

        let (driver, _) = select_best_driver(&passenger, &drivers).unwrap();

        assert_eq!(driver.username, "first");
    }

    #[test]
    fn best_driver_skips_unscorable_candidates() {
        let passenger = passenger_from("alice", 3.866, 11.516);
        let mut unplaced = driver_at("ghost", 0.0, 0.0, 5.0);
        unplaced.location = None;

        let drivers = vec![unplaced, driver_at("bob", 3.848, 11.502, 4.5)];

        let (driver, _) = select_best_driver(&passenger, &drivers).unwrap();

        assert_eq!(driver.username, "bob");
    }

    #[test]
    fn top_customers_sorts_descending_and_truncates() {
        let driver = driver_at("bob", 3.866, 11.516, 0.0);
        let passengers = vec![
            passenger_from("far", 3.95, 11.60),
            passenger_from("near", 3.866, 11.517),
            passenger_from("mid", 3.88, 11.53),
        ];

        let top = top_customers(&driver, &passengers, 2);

        assert_eq!(top.len(), 2);
        assert_eq!(top[0].username, "near");
        assert_eq!(top[1].username, "mid");
        assert!(top[0].score >= top[1].score);
    }

    #[test]
    fn top_customers_ties_keep_input_order() {
        let driver = driver_at("bob", 3.866, 11.516, 0.0);
        // First passenger scores lower; the other two are colocated and tie.
        let passengers = vec![
            passenger_from("low", 3.95, 11.60),
            passenger_from("tie_a", 3.87, 11.52),
            passenger_from("tie_b", 3.87, 11.52),
        ];

        let top = top_customers(&driver, &passengers, 2);

        assert_eq!(top[0].username, "tie_a");
        assert_eq!(top[1].username, "tie_b");
        assert_eq!(top[0].score, top[1].score);
    }

    #[test]
    fn top_customers_with_zero_n_is_empty() {
        let driver = driver_at("bob", 3.866, 11.516, 0.0);
        let passengers = vec![passenger_from("alice", 3.87, 11.52)];

        assert!(top_customers(&driver, &passengers, 0).is_empty());
    }

    #[test]
    fn top_customers_with_large_n_returns_all_sorted() {
        let driver = driver_at("bob", 3.866, 11.516, 0.0);
        let passengers = vec![
            passenger_from("far", 3.95, 11.60),
            passenger_from("near", 3.866, 11.517),
        ];

        let top = top_customers(&driver, &passengers, 10);

        assert_eq!(top.len(), 2);
        assert_eq!(top[0].username, "near");
        assert_eq!(top[1].username, "far");
    }

    #[test]
    fn top_customers_identical_scores_preserve_input_order() {
        let driver = driver_at("bob", 3.866, 11.516, 0.0);
        let passengers = vec![
            passenger_from("a", 3.87, 11.52),
            passenger_from("b", 3.87, 11.52),
            passenger_from("c", 3.87, 11.52),
        ];

        let top = top_customers(&driver, &passengers, 3);

        let order: Vec<_> = top.iter().map(|m| m.username.as_str()).collect();
        assert_eq!(order, vec!["a", "b", "c"]);
    }

    #[test]
    fn top_customers_over_empty_collection_is_empty() {
        let driver = driver_at("bob", 3.866, 11.516, 0.0);

        assert!(top_customers(&driver, &[], 5).is_empty());
    }

    #[test]
    fn top_customers_single_passenger() {
        let driver = driver_at("bob", 3.866, 11.516, 0.0);
        let passengers = vec![passenger_from("alice", 3.87, 11.52)];

        let top = top_customers(&driver, &passengers, 5);

        assert_eq!(top.len(), 1);
        assert_eq!(top[0].username, "alice");
    }

    #[test]
    fn top_customers_skips_unscorable_passengers() {
        let driver = driver_at("bob", 3.866, 11.516, 0.0);
        let passengers = vec![
            crate::entities::Passenger::new("no_travel".into()),
            passenger_from("alice", 3.87, 11.52),
        ];

        let top = top_customers(&driver, &passengers, 5);

        assert_eq!(top.len(), 1);
        assert_eq!(top[0].username, "alice");
    }
}
