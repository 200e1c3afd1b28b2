use rand::rngs::StdRng;
use rand::seq::index;
use rand::{Rng, SeedableRng};

use super::DetectError;

// ---------------------------------------------------------------------------
// Isolation forest over 1-D data (Liu et al., 2008)
// ---------------------------------------------------------------------------

const EULER_GAMMA: f64 = 0.577_215_664_901_532_9;

/// Fit-time parameters. The defaults mirror the demo service:
/// 100 trees, 256-point subsamples, 5% contamination, fixed seed.
#[derive(Debug, Clone, Copy)]
pub struct ForestParams {
    pub n_trees: usize,
    pub sample_size: usize,
    pub contamination: f64,
    pub seed: u64,
}

impl Default for ForestParams {
    fn default() -> Self {
        ForestParams {
            n_trees: 100,
            sample_size: 256,
            contamination: 0.05,
            seed: 42,
        }
    }
}

#[derive(Debug, Clone)]
enum Node {
    Internal {
        split: f64,
        left: Box<Node>,
        right: Box<Node>,
    },
    Leaf {
        size: usize,
    },
}

#[derive(Debug, Clone)]
struct IsoTree {
    root: Node,
}

impl IsoTree {
    fn fit(values: &[f64], max_depth: usize, rng: &mut StdRng) -> Self {
        IsoTree {
            root: build_node(values, 0, max_depth, rng),
        }
    }

    /// Path length from the root to the leaf holding `value`, with the
    /// standard unbuilt-subtree adjustment at the leaf.
    fn path_length(&self, value: f64) -> f64 {
        let mut node = &self.root;
        let mut depth = 0.0;
        loop {
            match node {
                Node::Leaf { size } => return depth + average_path_length(*size),
                Node::Internal { split, left, right } => {
                    node = if value < *split { left } else { right };
                    depth += 1.0;
                }
            }
        }
    }
}

fn build_node(values: &[f64], depth: usize, max_depth: usize, rng: &mut StdRng) -> Node {
    if depth >= max_depth || values.len() <= 1 {
        return Node::Leaf { size: values.len() };
    }

    let min = values.iter().cloned().fold(f64::INFINITY, f64::min);
    let max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    if max - min < f64::EPSILON {
        // All duplicates; nothing left to split on.
        return Node::Leaf { size: values.len() };
    }

    let split = rng.gen_range(min..max);
    let (left, right): (Vec<f64>, Vec<f64>) = values.iter().copied().partition(|&v| v < split);

    Node::Internal {
        split,
        left: Box::new(build_node(&left, depth + 1, max_depth, rng)),
        right: Box::new(build_node(&right, depth + 1, max_depth, rng)),
    }
}

/// Average path length of an unsuccessful BST search in a tree of `n`
/// nodes, `c(n)` in the paper. Normalizes path lengths into scores.
fn average_path_length(n: usize) -> f64 {
    if n <= 1 {
        return 0.0;
    }
    let n = n as f64;
    2.0 * ((n - 1.0).ln() + EULER_GAMMA) - 2.0 * (n - 1.0) / n
}

/// A fitted isolation forest. Pure function of its input after `fit`.
#[derive(Debug, Clone)]
pub struct IsolationForest {
    trees: Vec<IsoTree>,
    sample_size: usize,
    threshold: f64,
}

impl IsolationForest {
    /// Grow `n_trees` trees on random subsamples of `data`, then derive
    /// the decision threshold from the training-score quantile implied
    /// by the contamination rate.
    pub fn fit(data: &[f64], params: ForestParams) -> Result<Self, DetectError> {
        if data.is_empty() {
            return Err(DetectError::EmptyCalibration);
        }
        if data.len() < 2 {
            return Err(DetectError::CalibrationTooSmall(data.len()));
        }
        if params.n_trees == 0 {
            return Err(DetectError::NoTrees);
        }
        if !(params.contamination > 0.0 && params.contamination < 1.0) {
            return Err(DetectError::InvalidContamination(params.contamination));
        }

        let sample_size = params.sample_size.min(data.len());
        let max_depth = (sample_size as f64).log2().ceil() as usize;
        let mut rng = StdRng::seed_from_u64(params.seed);

        let trees = (0..params.n_trees)
            .map(|_| {
                let subsample: Vec<f64> = index::sample(&mut rng, data.len(), sample_size)
                    .iter()
                    .map(|i| data[i])
                    .collect();
                IsoTree::fit(&subsample, max_depth, &mut rng)
            })
            .collect();

        let mut forest = IsolationForest {
            trees,
            sample_size,
            threshold: 0.5,
        };

        // Flag the top `contamination` share of the training sample.
        let mut scores: Vec<f64> = data.iter().map(|&v| forest.score(v)).collect();
        scores.sort_by(|a, b| b.total_cmp(a));
        let k = ((params.contamination * data.len() as f64).ceil() as usize)
            .clamp(1, data.len());
        forest.threshold = scores[k - 1];

        Ok(forest)
    }

    /// Anomaly score in (0, 1]; higher means easier to isolate.
    pub fn score(&self, value: f64) -> f64 {
        let mean_path = self
            .trees
            .iter()
            .map(|tree| tree.path_length(value))
            .sum::<f64>()
            / self.trees.len() as f64;
        2.0_f64.powf(-mean_path / average_path_length(self.sample_size))
    }

    /// Classify one value: -1 outlier, +1 inlier.
    pub fn predict(&self, value: f64) -> i32 {
        if self.score(value) >= self.threshold {
            -1
        } else {
            1
        }
    }
}
