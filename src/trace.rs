use {crate::PageId, serde::Serialize, std::ops::Index};

/// Outcome of a single reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StepRecord<P: PageId> {
    /// Snapshot of the frames after the reference, in slot order.
    pub frames: Vec<P>,

    /// Referenced page.
    pub page: P,

    /// Whether the page was not resident before the reference.
    pub fault: bool,

    /// Human-readable description of the step.
    pub explanation: String,

    /// Page evicted to make room for `page`.
    ///
    /// Set only on faults that happen while all frames are occupied.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub replaced_page: Option<P>,
}

impl<P: PageId> StepRecord<P> {
    /// Whether the referenced page was already resident.
    pub fn is_hit(&self) -> bool {
        !self.fault
    }

    /// Slot now holding the referenced page.
    pub fn slot(&self) -> Option<usize> {
        self.frames.iter().position(|page| *page == self.page)
    }
}

/// Full step-by-step outcome of replaying a reference string.
///
/// Holds exactly one [`StepRecord`] per reference, in reference order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Trace<P: PageId> {
    steps: Vec<StepRecord<P>>,
}

impl<P: PageId> Trace<P> {
    pub(crate) fn new(steps: Vec<StepRecord<P>>) -> Self {
        Self { steps }
    }

    /// Number of steps, equal to the length of the reference string.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Whether the trace has no steps.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Step at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&StepRecord<P>> {
        self.steps.get(index)
    }

    /// All steps in reference order.
    pub fn steps(&self) -> &[StepRecord<P>] {
        &self.steps
    }

    /// Iterator over steps in reference order.
    pub fn iter(&self) -> std::slice::Iter<'_, StepRecord<P>> {
        self.steps.iter()
    }

    /// Total number of page faults.
    pub fn faults(&self) -> usize {
        self.steps.iter().filter(|step| step.fault).count()
    }

    /// Total number of hits.
    pub fn hits(&self) -> usize {
        self.len() - self.faults()
    }

    /// Statistics of the whole trace.
    pub fn stats(&self) -> Stats {
        Stats::from_steps(&self.steps)
    }

    /// Statistics of the steps up to and including `index`.
    ///
    /// An index past the end covers the whole trace.
    pub fn stats_at(&self, index: usize) -> Stats {
        let end = index.saturating_add(1).min(self.len());
        Stats::from_steps(&self.steps[..end])
    }

    /// Consumes the trace, returning its steps.
    pub fn into_steps(self) -> Vec<StepRecord<P>> {
        self.steps
    }
}

impl<P: PageId> Index<usize> for Trace<P> {
    type Output = StepRecord<P>;

    fn index(&self, index: usize) -> &Self::Output {
        &self.steps[index]
    }
}

impl<'a, P: PageId> IntoIterator for &'a Trace<P> {
    type Item = &'a StepRecord<P>;
    type IntoIter = std::slice::Iter<'a, StepRecord<P>>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}

/// Hit and fault counts over a run of steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Stats {
    /// Number of references processed.
    pub references: usize,

    /// Number of references that found their page resident.
    pub hits: usize,

    /// Number of page faults.
    pub faults: usize,
}

impl Stats {
    fn from_steps<P: PageId>(steps: &[StepRecord<P>]) -> Self {
        let faults = steps.iter().filter(|step| step.fault).count();
        Self {
            references: steps.len(),
            hits: steps.len() - faults,
            faults,
        }
    }

    /// Percentage of references that were hits.
    pub fn hit_rate(&self) -> f64 {
        Self::percentage(self.hits, self.references)
    }

    /// Percentage of references that were page faults.
    pub fn fault_rate(&self) -> f64 {
        Self::percentage(self.faults, self.references)
    }

    fn percentage(part: usize, total: usize) -> f64 {
        if total == 0 {
            return 0.0;
        }
        part as f64 / total as f64 * 100.0
    }
}
