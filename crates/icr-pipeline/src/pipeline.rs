//! The `Pipeline` struct and its run loop.

use std::fmt;
use std::path::Path;

use icr_assign::{PointIndex, assign_nearest, join_segment_attrs};
use icr_core::{LinearUnit, PartitionKey, PipelineConfig};
use icr_features::{
    RoutePartition, StatePartition, filter_interstate_crashes, filter_interstate_roads,
    partition_states, project_crashes, project_roads, read_crash_features, read_road_features,
};
use icr_geom::{EquidistantConic, Projection, dissolve, sample_points};
use icr_output::{CsvRateWriter, RatePointRow, RateWriter};
use icr_rate::{CrashRateRecord, apply_crash_counts, merge_state_records, route_records};

use crate::cancel::CancelToken;
use crate::error::{PipelineError, PipelineResult};
use crate::observer::PipelineObserver;

// ── Run summary ───────────────────────────────────────────────────────────────

/// Terminal status of a run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// States whose merged output was written.
    pub states_emitted: usize,
    /// States abandoned after a route or emit failure.
    pub states_failed: usize,
    /// Routes that completed their stage sequence.
    pub routes_processed: usize,
    /// Crashes within the distance threshold, across all emitted states.
    pub crashes_assigned: usize,
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} states emitted ({} failed), {} routes, {} crashes assigned",
            self.states_emitted, self.states_failed, self.routes_processed, self.crashes_assigned
        )
    }
}

// ── Per-stage outputs ─────────────────────────────────────────────────────────

/// One route's completed stage sequence.
struct RouteOutput {
    records: Vec<CrashRateRecord>,
    points: usize,
    qualifying: usize,
}

/// One state's merged result plus the stats the observer hooks report.
struct StateOutput {
    records: Vec<CrashRateRecord>,
    qualifying: usize,
    route_stats: Vec<(PartitionKey, usize, usize)>,
}

/// Why a state was abandoned.
struct StateFailure {
    /// The failing route, or `None` for a state-level failure.
    route: Option<u32>,
    error: PipelineError,
}

// ── Pipeline ──────────────────────────────────────────────────────────────────

/// The crash-rate pipeline.
///
/// Holds the configuration, the projection, and the cancellation token;
/// all dataset state lives inside [`run`](Self::run) and is dropped when it
/// returns — nothing persists across runs.
pub struct Pipeline<P: Projection = EquidistantConic> {
    config: PipelineConfig,
    projection: P,
    cancel: CancelToken,
}

impl Pipeline<EquidistantConic> {
    /// A pipeline using the standard analysis projection (USA Contiguous
    /// Equidistant Conic).
    pub fn new(config: PipelineConfig) -> Self {
        Self::with_projection(config, EquidistantConic::usa_contiguous())
    }
}

impl<P: Projection> Pipeline<P> {
    /// A pipeline with a caller-supplied projection.
    pub fn with_projection(config: PipelineConfig, projection: P) -> Self {
        Self {
            config,
            projection,
            cancel: CancelToken::new(),
        }
    }

    /// A clone of the run's cancellation token.  Cancel it from anywhere;
    /// the run stops at the next partition boundary with
    /// [`PipelineError::Cancelled`].
    pub fn cancel_token(&self) -> CancelToken {
        self.cancel.clone()
    }

    /// Run the full analysis: read → filter → project → per-state loop →
    /// emit.
    ///
    /// Feature (schema) errors before partitioning abort the run.  A failure
    /// inside one state's processing abandons that state, reports it through
    /// `observer`, and continues with the next; output already emitted for
    /// prior states is preserved.  `writer.finish()` is always called.
    pub fn run<W, O>(
        &self,
        road_source: &Path,
        crash_source: &Path,
        writer: &mut W,
        observer: &mut O,
    ) -> PipelineResult<RunSummary>
    where
        W: RateWriter,
        O: PipelineObserver,
    {
        let result = self.run_inner(road_source, crash_source, writer, observer);
        match result {
            Ok(summary) => {
                writer.finish()?;
                observer.on_finished(&summary);
                Ok(summary)
            }
            Err(e) => {
                // Best effort: the close error would only mask the original.
                let _ = writer.finish();
                Err(e)
            }
        }
    }

    fn run_inner<W, O>(
        &self,
        road_source: &Path,
        crash_source: &Path,
        writer: &mut W,
        observer: &mut O,
    ) -> PipelineResult<RunSummary>
    where
        W: RateWriter,
        O: PipelineObserver,
    {
        // ── Whole-dataset filtering (schema failures abort the run) ───────
        let roads = filter_interstate_roads(read_road_features(road_source)?)?;
        let crashes = filter_interstate_crashes(read_crash_features(crash_source)?)?;
        let segments = project_roads(&roads, &self.projection)?;
        let events = project_crashes(&crashes, &self.projection)?;
        observer.on_filtered(segments.len(), events.len());

        // ── Per-state loop ────────────────────────────────────────────────
        let states = partition_states(&segments, &events);
        let mut summary = RunSummary::default();

        for state in &states {
            if self.cancel.is_cancelled() {
                return Err(PipelineError::Cancelled);
            }
            let routes = state.routes();
            observer.on_state_start(state.state_code, routes.len());

            match self.process_state(state, &routes) {
                Ok(out) => {
                    for &(key, points, qualifying) in &out.route_stats {
                        observer.on_route_done(key, points, qualifying);
                    }
                    summary.routes_processed += out.route_stats.len();

                    let rows: Vec<RatePointRow> =
                        out.records.iter().map(RatePointRow::from).collect();
                    match writer.write_state(state.state_code, &rows) {
                        Ok(()) => {
                            observer.on_state_emitted(state.state_code, rows.len());
                            summary.states_emitted += 1;
                            summary.crashes_assigned += out.qualifying;
                        }
                        Err(e) => {
                            let e = PipelineError::from(e);
                            observer.on_state_error(state.state_code, None, &e);
                            summary.states_failed += 1;
                        }
                    }
                }
                Err(failure) => {
                    if matches!(failure.error, PipelineError::Cancelled) {
                        return Err(PipelineError::Cancelled);
                    }
                    observer.on_state_error(state.state_code, failure.route, &failure.error);
                    summary.states_failed += 1;
                }
            }
        }

        Ok(summary)
    }

    /// Process every route of one state and merge the results.
    ///
    /// The per-route record sets are this state's scratch space: built here,
    /// merged, and dropped before the next state starts.
    fn process_state(
        &self,
        state: &StatePartition<'_>,
        routes: &[u32],
    ) -> Result<StateOutput, StateFailure> {
        // Plain copies so the (possibly parallel) route closures capture no
        // part of `self`.
        let spacing = self.config.spacing_native;
        let near_dist = self.config.near_dist;
        let unit = self.config.unit;
        let cancel = &self.cancel;

        let route_job = |&route: &u32| -> (u32, PipelineResult<RouteOutput>) {
            if cancel.is_cancelled() {
                return (route, Err(PipelineError::Cancelled));
            }
            let part = state.route_partition(route);
            (route, process_route(&part, spacing, near_dist, unit))
        };

        #[cfg(not(feature = "parallel"))]
        let results: Vec<(u32, PipelineResult<RouteOutput>)> =
            routes.iter().map(route_job).collect();

        #[cfg(feature = "parallel")]
        let results: Vec<(u32, PipelineResult<RouteOutput>)> = {
            use rayon::prelude::*;
            routes.par_iter().map(route_job).collect()
        };

        // Merge barrier: all routes joined before anything is emitted.
        // Results arrive in ascending route order either way, so the merged
        // output is identical with and without `parallel`.
        let mut route_sets = Vec::with_capacity(results.len());
        let mut route_stats = Vec::with_capacity(results.len());
        let mut qualifying = 0usize;

        for (route, result) in results {
            match result {
                Ok(out) => {
                    route_stats.push((
                        PartitionKey::new(state.state_code, route),
                        out.points,
                        out.qualifying,
                    ));
                    qualifying += out.qualifying;
                    route_sets.push(out.records);
                }
                Err(error) => {
                    return Err(StateFailure {
                        route: Some(route),
                        error,
                    });
                }
            }
        }

        Ok(StateOutput {
            records: merge_state_records(route_sets),
            qualifying,
            route_stats,
        })
    }
}

// ── Route stage sequence ──────────────────────────────────────────────────────

/// One route's full stage sequence: dissolve → sample → join → assign →
/// aggregate → records.
///
/// Free function so the parallel path shares it without capturing the
/// pipeline; reads only its own partition.
fn process_route(
    part: &RoutePartition<'_>,
    spacing: f64,
    near_dist: f64,
    unit: LinearUnit,
) -> PipelineResult<RouteOutput> {
    // Dissolve the route's segments into its logical multi-part geometry.
    let merged = dissolve(part.segments.iter().map(|s| s.line.clone()).collect());

    // Sample each part; spacing restarts per part.
    let mut samples = Vec::new();
    for line in &merged {
        samples.extend(sample_points(line, spacing)?);
    }

    // Attribute join, then nearest-crash assignment over the shared index.
    let mut points = join_segment_attrs(&samples, &part.segments)?;
    let index = PointIndex::build(&points)?;
    let assignments = assign_nearest(&part.crashes, &index);

    // Aggregate: unit-convert, threshold, count, rate.
    let qualifying = apply_crash_counts(&mut points, &assignments, near_dist, unit);
    let records = route_records(&points, part.key);

    Ok(RouteOutput {
        points: points.len(),
        qualifying,
        records,
    })
}

// ── Convenience entry point ───────────────────────────────────────────────────

/// Run the analysis end to end with the standard projection and the CSV
/// backend: one `crash_rates_{state}.csv` per state in
/// `config.output_dir`.
pub fn run<O: PipelineObserver>(
    road_source: &Path,
    crash_source: &Path,
    config: PipelineConfig,
    observer: &mut O,
) -> PipelineResult<RunSummary> {
    let mut writer = CsvRateWriter::new(&config.output_dir)?;
    Pipeline::new(config).run(road_source, crash_source, &mut writer, observer)
}
