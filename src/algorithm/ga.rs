use rand::rngs::StdRng;
use tracing::{debug, info};

use super::{evaluate_all, update_best, OptimizationResult};
use crate::config::{GaSettings, SolverConfig};
use crate::entity::{best_index, Entity, Fitness, Individual};
use crate::error::{SwarmError, SwarmResult};
use crate::measurement::AlgorithmSnapshot;
use crate::operators::{CrossoverStrategy, GaussianMutation, MutationStrategy, UniformCrossover};
use crate::problem::Problem;
use crate::random::ConstantControlParameter;
use crate::selection::{SelectionStrategy, TournamentSelection};
use crate::topology::{GBestTopology, Topology};

/// Generational GA with (mu + lambda) elitist replacement
pub struct GeneticAlgorithm {
    config: SolverConfig,
    crossover: UniformCrossover<Individual>,
    mutation: GaussianMutation,
    selection: TournamentSelection,
    population: GBestTopology<Individual>,
    best: Option<Individual>,
    iteration: usize,
    rng: StdRng,
}

impl GeneticAlgorithm {
    pub fn new(config: SolverConfig, settings: GaSettings) -> SwarmResult<Self> {
        config.validate()?;
        let selection = TournamentSelection::new(settings.tournament_size)?;
        let crossover = UniformCrossover::new()
            .with_probability(Box::new(ConstantControlParameter::new(
                settings.crossover_probability,
            )))
            .with_selection(Box::new(selection));
        let mutation = GaussianMutation::new(
            Box::new(ConstantControlParameter::new(settings.mutation_probability)),
            settings.mutation_scale,
        )?;
        let rng = config.rng();

        Ok(Self {
            config,
            crossover,
            mutation,
            selection,
            population: GBestTopology::new(),
            best: None,
            iteration: 0,
            rng,
        })
    }

    pub fn iteration(&self) -> usize {
        self.iteration
    }

    pub fn population(&self) -> &GBestTopology<Individual> {
        &self.population
    }

    /// Fill the population with random feasible individuals.
    pub fn initialise<P: Problem + ?Sized>(&mut self, problem: &P) -> SwarmResult<()> {
        let mut individuals = Vec::with_capacity(self.config.population_size);
        for _ in 0..self.config.population_size {
            individuals.push(Individual::new(problem.domain().random_vector(&mut self.rng)?));
        }
        evaluate_all(individuals.as_mut_slice(), problem)?;

        self.population = GBestTopology::from_entities(individuals);
        self.best = None;
        self.iteration = 0;
        update_best(&mut self.best, self.population.best());
        Ok(())
    }

    /// One generation.
    pub fn step<P: Problem + ?Sized>(&mut self, problem: &P) -> SwarmResult<()> {
        if self.population.is_empty() {
            return Err(SwarmError::InsufficientData(
                "population is not initialised".to_string(),
            ));
        }

        let mut offspring: GBestTopology<Individual> = GBestTopology::new();
        while offspring.len() < self.config.population_size {
            let before = offspring.len();
            self.crossover
                .perform_operation(&mut self.rng, &self.population, &mut offspring)?;
            if offspring.len() == before {
                // crossover declined; the offspring is a copy of a selected parent
                let parent = self.selection.select(&mut self.rng, self.population.entities())?;
                offspring.add(parent.clone());
            }
        }

        let mut offspring = offspring.into_entities();
        offspring.truncate(self.config.population_size);
        self.mutation.mutate_all(&mut self.rng, offspring.as_mut_slice())?;
        evaluate_all(offspring.as_mut_slice(), problem)?;

        // (mu + lambda): keep the best of parents and offspring
        let mut pool = std::mem::take(&mut self.population).into_entities();
        pool.extend(offspring);
        let mut survivors = Vec::with_capacity(self.config.population_size);
        while survivors.len() < self.config.population_size {
            let Some(i) = best_index(&pool, 0..pool.len()) else { break };
            survivors.push(pool.swap_remove(i));
        }

        self.population = GBestTopology::from_entities(survivors);
        update_best(&mut self.best, self.population.best());
        self.iteration += 1;
        Ok(())
    }

    pub fn solve<P: Problem + ?Sized>(&mut self, problem: &P) -> SwarmResult<OptimizationResult> {
        info!(
            population = self.config.population_size,
            iterations = self.config.max_iterations,
            "starting genetic algorithm"
        );
        self.initialise(problem)?;

        let mut history = Vec::with_capacity(self.config.max_iterations);
        for iter in 0..self.config.max_iterations {
            let best = self.best_fitness();
            if iter % 10 == 0 {
                debug!(iteration = iter, best = ?best, "GA progress");
            }
            history.push(best);
            self.step(problem)?;
        }

        let best = self
            .best
            .clone()
            .ok_or_else(|| SwarmError::InsufficientData("no solution found".to_string()))?;
        info!(best = ?best.fitness(), "genetic algorithm finished");

        Ok(OptimizationResult {
            best_solution: best.contents().clone(),
            best_fitness: best.fitness().clone(),
            history,
        })
    }

    fn best_fitness(&self) -> Fitness {
        self.best
            .as_ref()
            .map(|b| b.fitness().clone())
            .unwrap_or_default()
    }
}

impl AlgorithmSnapshot for GeneticAlgorithm {
    type Entity = Individual;

    fn entities(&self) -> &[Individual] {
        self.population.entities()
    }

    fn best_solution(&self) -> Option<&Individual> {
        self.best.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::problem::FunctionProblem;

    fn sphere() -> FunctionProblem {
        FunctionProblem::from_domain_str("R(-5, 5)^4", |x| Ok(x.iter().map(|v| v * v).sum()))
            .unwrap()
    }

    fn config() -> SolverConfig {
        SolverConfig {
            population_size: 20,
            max_iterations: 30,
            seed: Some(3),
        }
    }

    #[test]
    fn test_history_never_worsens() {
        let mut ga = GeneticAlgorithm::new(config(), GaSettings::default()).unwrap();
        let result = ga.solve(&sphere()).unwrap();

        assert_eq!(result.history.len(), 30);
        let values: Vec<f64> = result.history.iter().filter_map(|f| f.single()).collect();
        assert_eq!(values.len(), 30);
        assert!(values.windows(2).all(|w| w[1] <= w[0]));
        assert!(result.best_fitness.single().unwrap() <= values[0]);
        assert!(sphere().domain().contains(&result.best_solution));
    }

    #[test]
    fn test_population_size_is_kept() {
        let problem = sphere();
        let mut ga = GeneticAlgorithm::new(config(), GaSettings::default()).unwrap();
        ga.initialise(&problem).unwrap();
        ga.step(&problem).unwrap();
        ga.step(&problem).unwrap();

        assert_eq!(ga.entities().len(), 20);
        assert_eq!(ga.iteration(), 2);
        assert!(ga.entities().iter().all(|e| !e.is_dirty()));
    }

    #[test]
    fn test_step_requires_initialisation() {
        let mut ga = GeneticAlgorithm::new(config(), GaSettings::default()).unwrap();
        assert!(ga.step(&sphere()).is_err());
    }

    #[test]
    fn test_rejects_bad_settings() {
        let settings = GaSettings { tournament_size: 0, ..GaSettings::default() };
        assert!(GeneticAlgorithm::new(config(), settings).is_err());
        let empty = SolverConfig { population_size: 0, ..config() };
        assert!(GeneticAlgorithm::new(empty, GaSettings::default()).is_err());
    }
}
