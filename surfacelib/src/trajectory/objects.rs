// Points of one optimizer iteration, stored column-wise so they can be handed to a plot directly.
// The three columns always have the same length.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Snapshot {
    x: Vec<f64>,
    y: Vec<f64>,
    z: Vec<f64>,
}

impl Snapshot {
    pub fn new() -> Self {
        Snapshot::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Snapshot {
            x: Vec::with_capacity(capacity),
            y: Vec::with_capacity(capacity),
            z: Vec::with_capacity(capacity),
        }
    }

    pub fn from_points<I>(points: I) -> Self
    where
        I: IntoIterator<Item = (f64, f64, f64)>,
    {
        let mut snapshot = Snapshot::new();
        for (x, y, z) in points {
            snapshot.push(x, y, z);
        }
        snapshot
    }

    pub fn push(&mut self, x: f64, y: f64, z: f64) {
        self.x.push(x);
        self.y.push(y);
        self.z.push(z);
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    pub fn x(&self) -> &[f64] {
        &self.x
    }

    pub fn y(&self) -> &[f64] {
        &self.y
    }

    pub fn z(&self) -> &[f64] {
        &self.z
    }

    pub fn point(&self, index: usize) -> Option<(f64, f64, f64)> {
        Some((*self.x.get(index)?, self.y[index], self.z[index]))
    }

    pub fn points(&self) -> impl Iterator<Item = (f64, f64, f64)> + '_ {
        self.x
            .iter()
            .zip(self.y.iter())
            .zip(self.z.iter())
            .map(|((&x, &y), &z)| (x, y, z))
    }
}

// Ordered snapshots, one per iteration.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Trajectory {
    // Iteration count from the file header. Informational only, it is never used to drive parsing.
    declared_iterations: usize,
    snapshots: Vec<Snapshot>,
}

impl Trajectory {
    pub fn new(declared_iterations: usize, snapshots: Vec<Snapshot>) -> Self {
        Trajectory {
            declared_iterations,
            snapshots,
        }
    }

    pub fn from_snapshots(snapshots: Vec<Snapshot>) -> Self {
        Trajectory::new(snapshots.len(), snapshots)
    }

    pub fn declared_iterations(&self) -> usize {
        self.declared_iterations
    }

    pub fn snapshots(&self) -> &[Snapshot] {
        &self.snapshots
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn first(&self) -> Option<&Snapshot> {
        self.snapshots.first()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Snapshot> {
        self.snapshots.iter()
    }

    pub fn total_points(&self) -> usize {
        self.snapshots.iter().map(Snapshot::len).sum()
    }
}

impl<'a> IntoIterator for &'a Trajectory {
    type Item = &'a Snapshot;
    type IntoIter = std::slice::Iter<'a, Snapshot>;

    fn into_iter(self) -> Self::IntoIter {
        self.snapshots.iter()
    }
}
