use rand::rngs::StdRng;
use rand::Rng;
use tracing::{debug, info};

use super::{evaluate_all, update_best, OptimizationResult};
use crate::config::{PsoSettings, SolverConfig};
use crate::entity::{Entity, Fitness, Particle};
use crate::error::{SwarmError, SwarmResult};
use crate::measurement::AlgorithmSnapshot;
use crate::problem::Problem;
use crate::topology::{GBestTopology, LBestTopology, Topology};
use crate::types::Vector;

/// Inertia-weight particle swarm
///
/// Each particle is pulled towards its personal best and towards the best
/// personal best in its neighbourhood. Positions are clamped to the domain.
pub struct Pso {
    config: SolverConfig,
    settings: PsoSettings,
    swarm: Box<dyn Topology<Particle>>,
    best: Option<Particle>,
    iteration: usize,
    rng: StdRng,
}

impl Pso {
    pub fn new(config: SolverConfig, settings: PsoSettings) -> SwarmResult<Self> {
        config.validate()?;
        let rng = config.rng();
        Ok(Self {
            swarm: Self::empty_swarm(&settings),
            config,
            settings,
            best: None,
            iteration: 0,
            rng,
        })
    }

    fn empty_swarm(settings: &PsoSettings) -> Box<dyn Topology<Particle>> {
        match settings.neighbourhood_size {
            Some(size) => Box::new(LBestTopology::new(size)),
            None => Box::new(GBestTopology::new()),
        }
    }

    pub fn iteration(&self) -> usize {
        self.iteration
    }

    pub fn swarm(&self) -> &dyn Topology<Particle> {
        self.swarm.as_ref()
    }

    /// Place particles uniformly in the domain with zero velocity.
    pub fn initialise<P: Problem + ?Sized>(&mut self, problem: &P) -> SwarmResult<()> {
        let mut swarm = Self::empty_swarm(&self.settings);
        for _ in 0..self.config.population_size {
            swarm.add(Particle::new(problem.domain().random_vector(&mut self.rng)?));
        }
        evaluate_all(swarm.entities_mut(), problem)?;

        self.swarm = swarm;
        self.best = None;
        self.iteration = 0;
        update_best(&mut self.best, self.swarm.best());
        Ok(())
    }

    /// Personal best position of the best neighbour of `index`.
    fn social_guide(&self, index: usize) -> SwarmResult<Vector> {
        let entities = self.swarm.entities();
        let mut guide: Option<&Particle> = None;
        for j in self.swarm.neighbourhood(index)? {
            let Some(p) = entities.get(j) else { continue };
            let better = guide.map_or(true, |g| {
                p.personal_best_fitness().is_better_than(g.personal_best_fitness())
            });
            if better {
                guide = Some(p);
            }
        }
        guide
            .map(|p| p.personal_best().clone())
            .ok_or_else(|| SwarmError::InsufficientData("empty neighbourhood".to_string()))
    }

    pub fn step<P: Problem + ?Sized>(&mut self, problem: &P) -> SwarmResult<()> {
        if self.swarm.is_empty() {
            return Err(SwarmError::InsufficientData(
                "swarm is not initialised".to_string(),
            ));
        }

        // Guides are read before any particle moves
        let guides = (0..self.swarm.len())
            .map(|i| self.social_guide(i))
            .collect::<SwarmResult<Vec<_>>>()?;

        let PsoSettings { inertia, c1, c2, .. } = self.settings;
        for (particle, guide) in self.swarm.entities_mut().iter_mut().zip(&guides) {
            let position = particle.contents().values();
            let pbest = particle.personal_best().values();
            let guide = guide.values();

            let velocity: Vec<f64> = particle
                .velocity()
                .iter()
                .enumerate()
                .map(|(j, v)| {
                    let r1: f64 = self.rng.gen();
                    let r2: f64 = self.rng.gen();
                    inertia * v
                        + c1 * r1 * (pbest[j] - position[j])
                        + c2 * r2 * (guide[j] - position[j])
                })
                .collect();

            for (gene, v) in particle.contents_mut().iter_mut().zip(&velocity) {
                gene.set_value(gene.value() + v);
                gene.clamp_to_bounds();
            }
            particle.set_velocity(velocity);
            particle.mark_dirty();
        }

        evaluate_all(self.swarm.entities_mut(), problem)?;
        update_best(&mut self.best, self.swarm.best());
        self.iteration += 1;
        Ok(())
    }

    pub fn solve<P: Problem + ?Sized>(&mut self, problem: &P) -> SwarmResult<OptimizationResult> {
        info!(
            particles = self.config.population_size,
            iterations = self.config.max_iterations,
            "starting particle swarm"
        );
        self.initialise(problem)?;

        let mut history = Vec::with_capacity(self.config.max_iterations);
        for iter in 0..self.config.max_iterations {
            let best = self
                .best
                .as_ref()
                .map(|b| b.fitness().clone())
                .unwrap_or(Fitness::Inferior);
            if iter % 10 == 0 {
                debug!(iteration = iter, best = ?best, "PSO progress");
            }
            history.push(best);
            self.step(problem)?;
        }

        let best = self
            .best
            .clone()
            .ok_or_else(|| SwarmError::InsufficientData("no solution found".to_string()))?;
        info!(best = ?best.fitness(), "particle swarm finished");

        Ok(OptimizationResult {
            best_solution: best.contents().clone(),
            best_fitness: best.fitness().clone(),
            history,
        })
    }
}

impl AlgorithmSnapshot for Pso {
    type Entity = Particle;

    fn entities(&self) -> &[Particle] {
        self.swarm.entities()
    }

    fn best_solution(&self) -> Option<&Particle> {
        self.best.as_ref()
    }
}
