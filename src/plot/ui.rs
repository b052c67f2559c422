use tracing::trace;

use crate::api::PlotDefaults;
use crate::core::{Condition, Vec2, YAxis};
use crate::ffi::ForeignBackend;
use crate::marshal::{ForeignString, RawVec2, SkipReason, labeled, paired, single, triple};

use super::PlotSpec;

/// Plot calls against the current plot context.
///
/// Item operations validate their arrays before marshaling anything: an empty
/// array, paired arrays of different lengths, or a length beyond the C `int`
/// range turn the call into a no-op.
pub struct PlotUi<'a, B: ForeignBackend> {
    backend: &'a mut B,
    defaults: &'a PlotDefaults,
}

fn accept<T>(input: Result<T, SkipReason>, entry: &'static str) -> Option<T> {
    input.map_err(|reason| reason.log(entry)).ok()
}

impl<'a, B: ForeignBackend> PlotUi<'a, B> {
    pub(crate) fn new(backend: &'a mut B, defaults: &'a PlotDefaults) -> Self {
        Self { backend, defaults }
    }

    /// Plot arguments seeded from the bridge's plot defaults.
    #[must_use]
    pub fn spec<'s>(&self, title: &'s str) -> PlotSpec<'s> {
        PlotSpec::from_defaults(title, self.defaults)
    }

    pub fn set_next_plot_limits(&mut self, x_min: f64, x_max: f64, y_min: f64, y_max: f64, cond: Condition) {
        self.backend
            .plot_set_next_plot_limits(x_min, x_max, y_min, y_max, cond.bits());
    }

    /// Custom x ticks for the next plot, one label per value.
    pub fn set_next_plot_ticks_x<S: AsRef<str>>(&mut self, values: &[f64], labels: &[S], show_default: bool) {
        let Some((values, labels)) = accept(labeled(values, labels), "iggImPlotSetNextPlotTicksX") else {
            return;
        };
        self.backend
            .plot_set_next_plot_ticks_x(values, &labels, show_default);
    }

    pub fn set_next_plot_ticks_y<S: AsRef<str>>(
        &mut self,
        values: &[f64],
        labels: &[S],
        show_default: bool,
        y_axis: YAxis,
    ) {
        let Some((values, labels)) = accept(labeled(values, labels), "iggImPlotSetNextPlotTicksY") else {
            return;
        };
        self.backend
            .plot_set_next_plot_ticks_y(values, &labels, show_default, y_axis.index());
    }

    pub fn fit_next_plot_axes(&mut self, x: bool, y: bool, y2: bool, y3: bool) {
        self.backend.plot_fit_next_plot_axes(x, y, y2, y3);
    }

    /// Starts a plot. Only call [`end_plot`](Self::end_plot) when this
    /// returns `true`.
    pub fn begin_plot(&mut self, spec: &PlotSpec<'_>) -> bool {
        let title = ForeignString::new(spec.title);
        let x_label = ForeignString::optional(spec.x_label);
        let y_label = ForeignString::optional(spec.y_label);
        let y2_label = ForeignString::optional(spec.y2_label);
        let y3_label = ForeignString::optional(spec.y3_label);
        let visible = self.backend.plot_begin_plot(
            &title,
            x_label.as_ref(),
            y_label.as_ref(),
            &spec.size.into(),
            spec.flags.to_c(),
            spec.x_flags.to_c(),
            spec.y_flags.to_c(),
            spec.y2_flags.to_c(),
            spec.y3_flags.to_c(),
            y2_label.as_ref(),
            y3_label.as_ref(),
        );
        trace!(title = spec.title, visible, "begin plot");
        visible
    }

    pub fn end_plot(&mut self) {
        self.backend.plot_end_plot();
    }

    /// Runs `body` between `begin_plot` and `end_plot` when the plot is
    /// visible.
    pub fn with_plot<R>(&mut self, spec: &PlotSpec<'_>, body: impl FnOnce(&mut Self) -> R) -> Option<R> {
        if !self.begin_plot(spec) {
            return None;
        }
        let output = body(self);
        self.end_plot();
        Some(output)
    }

    pub fn bars(&mut self, label: &str, values: &[f64], width: f64, shift: f64, offset: i32) {
        let Some(values) = accept(single(values), "iggImPlotBars") else {
            return;
        };
        let label = ForeignString::new(label);
        self.backend.plot_bars(&label, values, width, shift, offset);
    }

    pub fn bars_xy(&mut self, label: &str, xs: &[f64], ys: &[f64], width: f64, offset: i32) {
        let Some((xs, ys)) = accept(paired(xs, ys), "iggImPlotBarsXY") else {
            return;
        };
        let label = ForeignString::new(label);
        self.backend.plot_bars_xy(&label, xs, ys, width, offset);
    }

    pub fn bars_h(&mut self, label: &str, values: &[f64], height: f64, shift: f64, offset: i32) {
        let Some(values) = accept(single(values), "iggImPlotBarsH") else {
            return;
        };
        let label = ForeignString::new(label);
        self.backend.plot_bars_h(&label, values, height, shift, offset);
    }

    pub fn bars_h_xy(&mut self, label: &str, xs: &[f64], ys: &[f64], height: f64, offset: i32) {
        let Some((xs, ys)) = accept(paired(xs, ys), "iggImPlotBarsHXY") else {
            return;
        };
        let label = ForeignString::new(label);
        self.backend.plot_bars_h_xy(&label, xs, ys, height, offset);
    }

    /// Line through `values`, with x = `x0 + i * x_scale`.
    pub fn line(&mut self, label: &str, values: &[f64], x_scale: f64, x0: f64, offset: i32) {
        let Some(values) = accept(single(values), "iggImPlotLine") else {
            return;
        };
        let label = ForeignString::new(label);
        self.backend.plot_line(&label, values, x_scale, x0, offset);
    }

    pub fn line_xy(&mut self, label: &str, xs: &[f64], ys: &[f64], offset: i32) {
        let Some((xs, ys)) = accept(paired(xs, ys), "iggImPlotLineXY") else {
            return;
        };
        let label = ForeignString::new(label);
        self.backend.plot_line_xy(&label, xs, ys, offset);
    }

    pub fn scatter(&mut self, label: &str, values: &[f64], x_scale: f64, x0: f64, offset: i32) {
        let Some(values) = accept(single(values), "iggImPlotScatter") else {
            return;
        };
        let label = ForeignString::new(label);
        self.backend.plot_scatter(&label, values, x_scale, x0, offset);
    }

    pub fn scatter_xy(&mut self, label: &str, xs: &[f64], ys: &[f64], offset: i32) {
        let Some((xs, ys)) = accept(paired(xs, ys), "iggImPlotScatterXY") else {
            return;
        };
        let label = ForeignString::new(label);
        self.backend.plot_scatter_xy(&label, xs, ys, offset);
    }

    pub fn stairs(&mut self, label: &str, values: &[f64], x_scale: f64, x0: f64, offset: i32) {
        let Some(values) = accept(single(values), "iggImPlotStairs") else {
            return;
        };
        let label = ForeignString::new(label);
        self.backend.plot_stairs(&label, values, x_scale, x0, offset);
    }

    pub fn stairs_xy(&mut self, label: &str, xs: &[f64], ys: &[f64], offset: i32) {
        let Some((xs, ys)) = accept(paired(xs, ys), "iggImPlotStairsXY") else {
            return;
        };
        let label = ForeignString::new(label);
        self.backend.plot_stairs_xy(&label, xs, ys, offset);
    }

    /// Vertical error bars of half-height `err[i]` centred on `(xs[i], ys[i])`.
    pub fn error_bars(&mut self, label: &str, xs: &[f64], ys: &[f64], err: &[f64], offset: i32) {
        let Some((xs, ys, err)) = accept(triple(xs, ys, err), "iggImPlotErrorBars") else {
            return;
        };
        let label = ForeignString::new(label);
        self.backend.plot_error_bars(&label, xs, ys, err, offset);
    }

    pub fn error_bars_h(&mut self, label: &str, xs: &[f64], ys: &[f64], err: &[f64], offset: i32) {
        let Some((xs, ys, err)) = accept(triple(xs, ys, err), "iggImPlotErrorBarsH") else {
            return;
        };
        let label = ForeignString::new(label);
        self.backend.plot_error_bars_h(&label, xs, ys, err, offset);
    }

    pub fn stems(&mut self, label: &str, values: &[f64], y_ref: f64, x_scale: f64, x0: f64, offset: i32) {
        let Some(values) = accept(single(values), "iggImPlotStems") else {
            return;
        };
        let label = ForeignString::new(label);
        self.backend
            .plot_stems(&label, values, y_ref, x_scale, x0, offset);
    }

    pub fn stems_xy(&mut self, label: &str, xs: &[f64], ys: &[f64], y_ref: f64, offset: i32) {
        let Some((xs, ys)) = accept(paired(xs, ys), "iggImPlotStemsXY") else {
            return;
        };
        let label = ForeignString::new(label);
        self.backend.plot_stems_xy(&label, xs, ys, y_ref, offset);
    }

    pub fn vlines(&mut self, label: &str, xs: &[f64], offset: i32) {
        let Some(xs) = accept(single(xs), "iggImPlotVLines") else {
            return;
        };
        let label = ForeignString::new(label);
        self.backend.plot_vlines(&label, xs, offset);
    }

    pub fn hlines(&mut self, label: &str, ys: &[f64], offset: i32) {
        let Some(ys) = accept(single(ys), "iggImPlotHLines") else {
            return;
        };
        let label = ForeignString::new(label);
        self.backend.plot_hlines(&label, ys, offset);
    }

    /// Pie chart centred on `(x, y)` in plot units.
    ///
    /// `label_fmt` is a printf-style format for the slice values; `None`
    /// hides them. Slices start at `angle0` degrees.
    #[allow(clippy::too_many_arguments)]
    pub fn pie_chart<S: AsRef<str>>(
        &mut self,
        labels: &[S],
        values: &[f64],
        x: f64,
        y: f64,
        radius: f64,
        normalize: bool,
        label_fmt: Option<&str>,
        angle0: f64,
    ) {
        let Some((values, labels)) = accept(labeled(values, labels), "iggImPlotPieChart") else {
            return;
        };
        let label_fmt = ForeignString::optional(label_fmt);
        self.backend.plot_pie_chart(
            &labels,
            values,
            x,
            y,
            radius,
            normalize,
            label_fmt.as_ref(),
            angle0,
        );
    }

    /// Top-left corner of the current plot area in screen pixels.
    pub fn plot_pos(&mut self) -> Vec2 {
        let mut out = RawVec2::default();
        self.backend.plot_get_plot_pos(&mut out);
        out.into()
    }

    pub fn plot_size(&mut self) -> Vec2 {
        let mut out = RawVec2::default();
        self.backend.plot_get_plot_size(&mut out);
        out.into()
    }

    pub fn is_plot_hovered(&mut self) -> bool {
        self.backend.plot_is_plot_hovered()
    }

    pub fn is_plot_x_axis_hovered(&mut self) -> bool {
        self.backend.plot_is_plot_x_axis_hovered()
    }

    pub fn is_plot_y_axis_hovered(&mut self, y_axis: YAxis) -> bool {
        self.backend.plot_is_plot_y_axis_hovered(y_axis.index())
    }
}

impl<B: ForeignBackend> std::fmt::Debug for PlotUi<'_, B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlotUi")
            .field("defaults", self.defaults)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::accept;
    use crate::marshal::{SkipReason, single};

    #[test]
    fn accept_drops_rejected_input() {
        assert!(accept(single(&[]), "iggImPlotLine").is_none());
        assert!(accept::<()>(Err(SkipReason::TooLong { len: 1 }), "iggImPlotLine").is_none());
        assert_eq!(accept(single(&[1.0]), "iggImPlotLine").map(|slice| slice.len()), Some(1));
    }
}
