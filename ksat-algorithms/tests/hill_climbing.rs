use ksat_algorithms::hill_climbing;
use ksat_instance::{Assignment, Error, Formula, Literal, Params, ParsedFormula};
use rand::{rngs::SmallRng, SeedableRng};

/// `(A or B)`
fn single_clause() -> ParsedFormula {
    let formula =
        Formula::from_literals(2, vec![Literal::positive('A'), Literal::positive('B')]).unwrap();
    ParsedFormula::new(&formula)
}

fn random_instance(seed: u8) -> ParsedFormula {
    let formula = Formula::generate(
        &[seed; 32],
        &Params {
            num_vars: 8,
            clause_size: 3,
            num_clauses: 20,
        },
    )
    .unwrap();
    ParsedFormula::new(&formula)
}

#[test]
fn one_scan_satisfies_a_single_clause() {
    let parsed = single_clause();
    let initial = Assignment::from_pairs([('A', false), ('B', false)]);
    assert_eq!(parsed.fitness(&initial).unwrap(), 0);

    let result = hill_climbing::solve(&parsed, initial, 1).unwrap();
    assert_eq!(result.fitness, 1);
    assert_eq!(result.steps, 1);
    assert!(result.satisfies(&parsed));
}

#[test]
fn zero_depth_returns_the_initial_assignment() {
    let parsed = single_clause();
    let initial = Assignment::from_pairs([('A', false), ('B', false)]);
    let result = hill_climbing::solve(&parsed, initial.clone(), 0).unwrap();
    assert_eq!(result.assignment, initial);
    assert_eq!(result.fitness, 0);
    assert_eq!(result.steps, 0);
}

#[test]
fn satisfied_start_returns_immediately() {
    let parsed = single_clause();
    let initial = Assignment::from_pairs([('A', true), ('B', false)]);
    let result = hill_climbing::solve(&parsed, initial.clone(), 50).unwrap();
    assert_eq!(result.assignment, initial);
    assert_eq!(result.fitness, 1);
    assert_eq!(result.steps, 0);
}

#[test]
fn a_later_strictly_better_flip_overwrites_the_tracked_one() {
    // Clauses (A), (B), (B): flipping A yields fitness 1, flipping B
    // yields 2, so the scan commits B.
    let formula = Formula::from_literals(
        1,
        vec![
            Literal::positive('A'),
            Literal::positive('B'),
            Literal::positive('B'),
        ],
    )
    .unwrap();
    let parsed = ParsedFormula::new(&formula);
    let initial = Assignment::from_pairs([('A', false), ('B', false)]);

    let result = hill_climbing::solve(&parsed, initial, 1).unwrap();
    assert_eq!(result.assignment.get('A'), Some(false));
    assert_eq!(result.assignment.get('B'), Some(true));
    assert_eq!(result.fitness, 2);
}

#[test]
fn ties_keep_the_first_strict_improver() {
    // Clauses (A), (B): both flips reach fitness 1; A scans first and the
    // tie never displaces it.
    let formula =
        Formula::from_literals(1, vec![Literal::positive('A'), Literal::positive('B')]).unwrap();
    let parsed = ParsedFormula::new(&formula);
    let initial = Assignment::from_pairs([('A', false), ('B', false)]);

    let result = hill_climbing::solve(&parsed, initial, 1).unwrap();
    assert_eq!(result.assignment.get('A'), Some(true));
    assert_eq!(result.assignment.get('B'), Some(false));
    assert_eq!(result.fitness, 1);
}

#[test]
fn committed_scans_never_decrease_fitness() {
    let parsed = random_instance(3);
    let mut rng = SmallRng::seed_from_u64(11);
    let initial = Assignment::random(parsed.distinct(), &mut rng);
    let mut last = parsed.fitness(&initial).unwrap();
    for depth in 0..6 {
        let result = hill_climbing::solve(&parsed, initial.clone(), depth).unwrap();
        assert!(result.fitness >= last);
        last = result.fitness;
    }
}

#[test]
fn reported_fitness_matches_reevaluation() {
    let parsed = random_instance(6);
    let mut rng = SmallRng::seed_from_u64(23);
    let initial = Assignment::random(parsed.distinct(), &mut rng);
    let result = hill_climbing::solve(&parsed, initial, 30).unwrap();
    assert_eq!(result.fitness, parsed.fitness(&result.assignment).unwrap());
}

#[test]
fn empty_assignment_is_rejected() {
    let parsed = single_clause();
    let empty = Assignment::from_pairs(Vec::new());
    assert!(matches!(
        hill_climbing::solve(&parsed, empty, 5),
        Err(Error::Configuration(_))
    ));
}
