/// Frustum culling pass.
///
/// Once per frame: rebuild the frustum from the camera, classify every
/// candidate against it, and write each candidate's visibility flag
/// exactly once. Per-candidate data problems are logged and skipped;
/// they never abort the pass.

use rayon::prelude::*;
use rustc_hash::FxHashMap;
use crate::camera::{Camera, Frustum, FrustumBuilder};
use crate::config::{CullingConfig, InvalidCameraPolicy};
use crate::error::Error;
use crate::{engine_debug, engine_warn};
use super::candidate::CullCandidate;
use super::classifier::{CullOutcome, VisibilityClassifier};

const SOURCE: &str = "galaxy3d::FrustumCuller";

/// Where the frustum used by a pass came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrustumSource {
    /// Built from this frame's camera
    Fresh,
    /// Camera rejected; last valid frustum reused
    Reused,
    /// Camera rejected and nothing to reuse; everything hidden
    Unavailable,
}

/// Result of one culling pass. Lives for one frame.
#[derive(Debug, Clone)]
pub struct CullReport {
    frame_index: u64,
    frustum_source: FrustumSource,
    frustum_error: Option<Error>,
    outcomes: Vec<CullOutcome>,
    counts: FxHashMap<CullOutcome, usize>,
}

impl CullReport {
    fn new(frame_index: u64, frustum_source: FrustumSource, frustum_error: Option<Error>) -> Self {
        Self {
            frame_index,
            frustum_source,
            frustum_error,
            outcomes: Vec::new(),
            counts: FxHashMap::default(),
        }
    }

    fn record(&mut self, outcome: CullOutcome) {
        self.outcomes.push(outcome);
        *self.counts.entry(outcome).or_insert(0) += 1;
    }

    /// Sequence number of the pass (first pass is 1).
    pub fn frame_index(&self) -> u64 {
        self.frame_index
    }

    pub fn frustum_source(&self) -> FrustumSource {
        self.frustum_source
    }

    /// Why this frame's camera was rejected, if it was.
    pub fn frustum_error(&self) -> Option<&Error> {
        self.frustum_error.as_ref()
    }

    /// Outcomes in candidate order.
    pub fn outcomes(&self) -> &[CullOutcome] {
        &self.outcomes
    }

    pub fn outcome(&self, index: usize) -> Option<CullOutcome> {
        self.outcomes.get(index).copied()
    }

    pub fn candidate_count(&self) -> usize {
        self.outcomes.len()
    }

    /// Number of candidates that ended with `outcome`.
    pub fn count(&self, outcome: CullOutcome) -> usize {
        self.counts.get(&outcome).copied().unwrap_or(0)
    }

    pub fn visible_count(&self) -> usize {
        self.count(CullOutcome::Visible)
    }

    /// Candidates skipped because of missing or empty geometry.
    pub fn anomaly_count(&self) -> usize {
        self.counts.iter()
            .filter(|(outcome, _)| outcome.is_anomaly())
            .map(|(_, count)| count)
            .sum()
    }

    /// Indices (in candidate order) of the visible candidates.
    pub fn visible_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.outcomes.iter()
            .enumerate()
            .filter(|(_, outcome)| outcome.is_visible())
            .map(|(index, _)| index)
    }
}

/// Per-frame frustum culler.
///
/// Stateful only to support `InvalidCameraPolicy::ReuseLastValid`:
/// it remembers the last frustum that built successfully.
#[derive(Debug, Clone)]
pub struct FrustumCuller {
    config: CullingConfig,
    builder: FrustumBuilder,
    classifier: VisibilityClassifier,
    last_valid: Option<Frustum>,
    frame_index: u64,
}

impl FrustumCuller {
    pub fn new(config: CullingConfig) -> Self {
        Self {
            builder: FrustumBuilder::from_config(&config),
            classifier: VisibilityClassifier::new(config.policy),
            config,
            last_valid: None,
            frame_index: 0,
        }
    }

    pub fn config(&self) -> &CullingConfig {
        &self.config
    }

    pub fn classifier(&self) -> &VisibilityClassifier {
        &self.classifier
    }

    /// Last frustum built from a valid camera.
    pub fn last_valid_frustum(&self) -> Option<&Frustum> {
        self.last_valid.as_ref()
    }

    /// Number of passes run so far.
    pub fn frame_index(&self) -> u64 {
        self.frame_index
    }

    /// Forget the remembered frustum (e.g. after a camera cut).
    pub fn reset(&mut self) {
        self.last_valid = None;
    }

    /// Run one culling pass on the calling thread.
    pub fn cull<'a, C, I>(&mut self, camera: &Camera, candidates: I) -> CullReport
    where
        C: CullCandidate + ?Sized + 'a,
        I: IntoIterator<Item = &'a mut C>,
    {
        let (frustum, mut report) = self.begin_frame(camera);

        for candidate in candidates {
            let outcome = Self::apply(&self.classifier, frustum.as_ref(), candidate);
            report.record(outcome);
        }

        Self::log_summary(&report);
        report
    }

    /// Run one culling pass, fanning candidates out across the rayon pool.
    ///
    /// Each candidate's reads and its single flag write are disjoint from
    /// every other candidate's, so no locking is needed. All workers have
    /// joined when this returns. Below `parallel_threshold` candidates the
    /// pass runs sequentially.
    pub fn cull_parallel<C>(&mut self, camera: &Camera, candidates: &mut [C]) -> CullReport
    where
        C: CullCandidate + Send,
    {
        if candidates.len() < self.config.parallel_threshold {
            return self.cull(camera, candidates.iter_mut());
        }

        let (frustum, mut report) = self.begin_frame(camera);
        let classifier = &self.classifier;

        let outcomes: Vec<CullOutcome> = candidates
            .par_iter_mut()
            .map(|candidate| Self::apply(classifier, frustum.as_ref(), candidate))
            .collect();

        for outcome in outcomes {
            report.record(outcome);
        }

        Self::log_summary(&report);
        report
    }

    /// Build (or recover) the frustum for a new frame.
    fn begin_frame(&mut self, camera: &Camera) -> (Option<Frustum>, CullReport) {
        self.frame_index += 1;

        match self.builder.build(camera) {
            Ok(frustum) => {
                self.last_valid = Some(frustum);
                (Some(frustum), CullReport::new(self.frame_index, FrustumSource::Fresh, None))
            }
            Err(err) => {
                let reused = match self.config.invalid_camera {
                    InvalidCameraPolicy::ReuseLastValid => self.last_valid,
                    InvalidCameraPolicy::HideAll => None,
                };
                let source = if reused.is_some() {
                    FrustumSource::Reused
                } else {
                    FrustumSource::Unavailable
                };
                engine_warn!(SOURCE, "Frame {}: invalid camera ({}), frustum {:?}",
                    self.frame_index, err, source);
                (reused, CullReport::new(self.frame_index, source, Some(err)))
            }
        }
    }

    /// Classify one candidate and write its flag.
    fn apply<C: CullCandidate + ?Sized>(
        classifier: &VisibilityClassifier,
        frustum: Option<&Frustum>,
        candidate: &mut C,
    ) -> CullOutcome {
        let outcome = match frustum {
            Some(frustum) => classifier.classify(frustum, &*candidate),
            None => CullOutcome::NoFrustum,
        };

        if outcome.is_anomaly() {
            engine_warn!(SOURCE, "Object '{}' skipped: {}", candidate.name(), outcome);
        }

        candidate.set_visible(outcome.is_visible());
        outcome
    }

    fn log_summary(report: &CullReport) {
        engine_debug!(SOURCE,
            "Frame {}: {} of {} visible ({} culled by bounds, {} culled by mesh, {} skipped)",
            report.frame_index(),
            report.visible_count(),
            report.candidate_count(),
            report.count(CullOutcome::CulledByBounds),
            report.count(CullOutcome::CulledByMesh),
            report.anomaly_count());
    }
}

impl Default for FrustumCuller {
    fn default() -> Self {
        Self::new(CullingConfig::default())
    }
}

#[cfg(test)]
#[path = "culler_tests.rs"]
mod tests;
