use ksat_algorithms::variable_neighborhood;
use ksat_instance::{Assignment, Error, Formula, Literal, Params, ParsedFormula};
use rand::{rngs::SmallRng, SeedableRng};

fn random_instance(seed: u8) -> ParsedFormula {
    let formula = Formula::generate(
        &[seed; 32],
        &Params {
            num_vars: 10,
            clause_size: 3,
            num_clauses: 30,
        },
    )
    .unwrap();
    ParsedFormula::new(&formula)
}

#[test]
fn fitness_never_drops_below_the_initial() {
    let parsed = random_instance(13);
    let mut rng = SmallRng::seed_from_u64(51);
    let initial = Assignment::random(parsed.distinct(), &mut rng);
    let initial_fitness = parsed.fitness(&initial).unwrap();

    let result = variable_neighborhood::solve(&parsed, initial, 200, &mut rng).unwrap();
    assert!(result.fitness >= initial_fitness);
}

#[test]
fn satisfied_start_returns_without_stepping() {
    // `(A or B)`
    let formula =
        Formula::from_literals(2, vec![Literal::positive('A'), Literal::positive('B')]).unwrap();
    let parsed = ParsedFormula::new(&formula);
    let initial = Assignment::from_pairs([('A', true), ('B', false)]);
    let mut rng = SmallRng::seed_from_u64(4);

    let result = variable_neighborhood::solve(&parsed, initial.clone(), 100, &mut rng).unwrap();
    assert_eq!(result.assignment, initial);
    assert_eq!(result.fitness, 1);
    assert_eq!(result.steps, 0);
}

#[test]
fn unreachable_target_spends_the_whole_budget() {
    // `(A) and (~A)` cannot be satisfied
    let formula =
        Formula::from_literals(1, vec![Literal::positive('A'), Literal::negated('A')]).unwrap();
    let parsed = ParsedFormula::new(&formula);
    let initial = Assignment::from_pairs([('A', false)]);
    let mut rng = SmallRng::seed_from_u64(2);

    let result = variable_neighborhood::solve(&parsed, initial, 25, &mut rng).unwrap();
    assert_eq!(result.steps, 25);
    assert_eq!(result.fitness, 1);
}

#[test]
fn reported_fitness_matches_reevaluation() {
    let parsed = random_instance(21);
    let mut rng = SmallRng::seed_from_u64(77);
    let initial = Assignment::random(parsed.distinct(), &mut rng);

    let result = variable_neighborhood::solve(&parsed, initial, 150, &mut rng).unwrap();
    assert_eq!(result.fitness, parsed.fitness(&result.assignment).unwrap());
}

#[test]
fn empty_assignment_is_rejected() {
    let parsed = random_instance(1);
    let empty = Assignment::from_pairs(Vec::new());
    let mut rng = SmallRng::seed_from_u64(0);
    assert!(matches!(
        variable_neighborhood::solve(&parsed, empty, 10, &mut rng),
        Err(Error::Configuration(_))
    ));
}
