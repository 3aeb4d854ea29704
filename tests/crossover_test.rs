use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use swarmlab::operators::{CrossoverStrategy, UniformCrossover};
use swarmlab::random::{ConstantControlParameter, RandomControlParameter};
use swarmlab::selection::TournamentSelection;
use swarmlab::topology::{GBestTopology, Topology};
use swarmlab::types::Vector;
use swarmlab::{Entity, Fitness, Individual};

fn random_individual(rng: &mut StdRng, dim: usize) -> Individual {
    let values: Vec<f64> = (0..dim).map(|_| rng.gen_range(-10.0..10.0)).collect();
    Individual::with_fitness(Vector::from_values(&values), Fitness::Single(rng.gen()))
}

#[test]
fn test_offspring_genes_come_from_parents() {
    let mut rng = StdRng::seed_from_u64(5);
    let crossover: UniformCrossover<Individual> = UniformCrossover::new()
        .with_probability(Box::new(ConstantControlParameter::new(1.0)));

    for _ in 0..50 {
        let parents = vec![random_individual(&mut rng, 7), random_individual(&mut rng, 7)];
        let offspring = crossover.crossover(&mut rng, &parents).unwrap();
        assert_eq!(offspring.len(), 2);

        let p1 = parents[0].contents().values();
        let p2 = parents[1].contents().values();
        let c1 = offspring[0].contents().values();
        let c2 = offspring[1].contents().values();
        for i in 0..7 {
            let expected = if i % 2 == 0 { (p1[i], p2[i]) } else { (p2[i], p1[i]) };
            assert_eq!((c1[i], c2[i]), expected);
        }
        assert!(offspring.iter().all(|o| o.is_dirty()));
        // parents untouched
        assert!(parents.iter().all(|p| !p.is_dirty()));
    }
}

#[test]
fn test_random_probability_produces_either_outcome() {
    let mut rng = StdRng::seed_from_u64(8);
    let crossover: UniformCrossover<Individual> =
        UniformCrossover::new().with_probability(Box::new(RandomControlParameter::new()));
    let parents = vec![random_individual(&mut rng, 4), random_individual(&mut rng, 4)];

    let mut produced = 0;
    let mut skipped = 0;
    for _ in 0..200 {
        match crossover.crossover(&mut rng, &parents).unwrap().len() {
            0 => skipped += 1,
            2 => produced += 1,
            n => panic!("unexpected offspring count {}", n),
        }
    }
    assert!(produced > 0);
    assert!(skipped > 0);
}

#[test]
fn test_perform_operation_with_tournament_selection() {
    let mut rng = StdRng::seed_from_u64(13);
    let population: GBestTopology<Individual> =
        GBestTopology::from_entities((0..10).map(|_| random_individual(&mut rng, 3)).collect());
    let crossover: UniformCrossover<Individual> = UniformCrossover::new()
        .with_probability(Box::new(ConstantControlParameter::new(1.0)))
        .with_selection(Box::new(TournamentSelection::new(3).unwrap()));

    let mut offspring: GBestTopology<Individual> = GBestTopology::new();
    for _ in 0..5 {
        crossover
            .perform_operation(&mut rng, &population, &mut offspring)
            .unwrap();
    }
    assert_eq!(offspring.len(), 10);
    assert_eq!(population.len(), 10);
}
