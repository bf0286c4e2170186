// Integration tests for the exhaustive tour solver
use brute_tour::algorithms::brute_force::{evaluate_all, select_best, tour_cost};
use brute_tour::models::{Tour, TspInstance};
use brute_tour::utils::coordinates::generate_instance;
use brute_tour::utils::permutations::{factorial, Permutations};
use brute_tour::{ExhaustiveSolver, SearchMode, SolverError, TourSolver};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn exact() -> ExhaustiveSolver {
    ExhaustiveSolver::new(SearchMode::Exact)
}

#[test]
fn test_collinear_cities() {
    let instance = TspInstance::from_coordinates(&[0.0, 1.0, 2.0, 3.0], &[0.0; 4], 0).unwrap();
    let matrix = instance.distance_matrix();

    for i in 0..4 {
        for j in 0..4 {
            assert_eq!(matrix.get(i, j), (i as f64 - j as f64).abs());
        }
    }

    let solution = exact().solve(&instance).unwrap();
    assert_eq!(solution.visiting_order, vec![0, 1, 2, 3, 0]);
    assert_eq!(solution.total_distance, 6.0);
    assert_eq!(solution.permutations_evaluated, 6);
}

#[test]
fn test_unit_square_follows_perimeter() {
    let instance =
        TspInstance::from_coordinates(&[0.0, 1.0, 1.0, 0.0], &[0.0, 0.0, 1.0, 1.0], 0).unwrap();

    let solution = exact().solve(&instance).unwrap();
    assert_eq!(solution.total_distance, 4.0);
    assert_eq!(solution.visiting_order, vec![0, 1, 2, 3, 0]);

    // The diagonal-crossing order costs more
    let matrix = instance.distance_matrix();
    assert_eq!(tour_cost(0, &matrix, &[2, 1, 3]), 4.828);
}

#[test]
fn test_minimum_cities_hand_check() {
    let instance =
        TspInstance::from_coordinates(&[0.0, 4.0, 4.0, 1.0], &[0.0, 0.0, 3.0, 2.0], 2).unwrap();
    let matrix = instance.distance_matrix();

    let perms: Vec<Vec<usize>> = Permutations::excluding(4, 2).collect();
    assert_eq!(perms.len(), 6);

    let costs = evaluate_all(2, &matrix, &perms);
    let best = select_best(costs.iter().copied()).unwrap();

    let solution = exact().with_threads(1).solve(&instance).unwrap();
    assert_eq!(solution.total_distance, costs[best]);
    assert_eq!(solution.visiting_order[1..4], perms[best][..]);
}

#[test]
fn test_permutation_count_is_factorial() {
    for n in 4..=8 {
        for start in [0, n / 2, n - 1] {
            let count = Permutations::excluding(n, start).count() as u64;
            assert_eq!(Some(count), factorial(n - 1));
        }
    }
}

#[test]
fn test_random_instances_are_exhaustively_optimal() {
    let mut rng = StdRng::seed_from_u64(2024);

    for n in 4..=7 {
        let instance = generate_instance(n, None, true, &mut rng).unwrap();
        let matrix = instance.distance_matrix();
        assert!(matrix.is_symmetric());

        let solution = exact().solve(&instance).unwrap();
        let tour = Tour {
            visiting_order: solution.visiting_order.clone(),
            total_distance: solution.total_distance,
        };
        assert!(tour.is_valid_for(n));
        assert_eq!(tour.start_city(), Some(instance.start_city));

        let costs = evaluate_all(
            instance.start_city,
            &matrix,
            Permutations::excluding(n, instance.start_city),
        );
        assert!(costs.iter().all(|&c| solution.total_distance <= c));
    }
}

#[test]
fn test_rerun_is_identical() {
    let instance = generate_instance(8, Some(3), true, &mut StdRng::seed_from_u64(17)).unwrap();

    let first = exact().solve(&instance).unwrap();
    let second = exact().solve(&instance).unwrap();
    let sequential = exact().with_threads(1).solve(&instance).unwrap();

    assert_eq!(first, second);
    assert_eq!(first, sequential);
}

#[test]
fn test_coordinates_are_passed_through() {
    let instance = generate_instance(5, Some(0), true, &mut StdRng::seed_from_u64(8)).unwrap();
    let solution = exact().solve(&instance).unwrap();

    let expected: Vec<(f64, f64)> = instance
        .locations()
        .iter()
        .map(|l| (l.x, l.y))
        .collect();
    assert_eq!(solution.coordinates, expected);
    assert_eq!(solution.distance_matrix, instance.distance_matrix().to_rows());
}

#[test]
fn test_bounded_mode_is_labelled_and_truncated() {
    let instance = generate_instance(6, Some(1), false, &mut StdRng::seed_from_u64(4)).unwrap();

    let bounded = ExhaustiveSolver::new(SearchMode::Bounded)
        .solve(&instance)
        .unwrap();
    let exact_solution = exact().solve(&instance).unwrap();

    // 5! - 5!/5
    assert_eq!(bounded.permutations_evaluated, 96);
    assert_eq!(bounded.mode, SearchMode::Bounded);
    assert!(exact_solution.total_distance <= bounded.total_distance);
}

#[test]
fn test_invalid_arguments_fail_fast() {
    let too_few = TspInstance::from_coordinates(&[0.0, 1.0, 2.0], &[0.0; 3], 0);
    assert!(matches!(too_few, Err(SolverError::InvalidArgument(_))));

    let bad_start = TspInstance::from_coordinates(&[0.0, 1.0, 2.0, 3.0], &[0.0; 4], 9);
    assert!(matches!(bad_start, Err(SolverError::InvalidArgument(_))));

    let mut rng = StdRng::seed_from_u64(1);
    assert!(matches!(
        generate_instance(22, None, false, &mut rng),
        Err(SolverError::InvalidArgument(_))
    ));
}
