use tracing::debug;

use crate::core::PlotContextHandle;
use crate::ffi::ForeignBackend;
use crate::plot::PlotUi;

use super::Bridge;

impl<B: ForeignBackend> Bridge<B> {
    /// Creates a plot context. The first one created becomes current.
    pub fn create_plot_context(&mut self) -> PlotContextHandle {
        let context = self.backend.plot_create_context();
        debug!(?context, "create plot context");
        context
    }

    /// Destroys the current plot context, whichever one that is.
    ///
    /// The native call takes no argument, so there is no way to target a
    /// specific handle returned by [`create_plot_context`](Self::create_plot_context).
    pub fn destroy_plot_context(&mut self) {
        debug!("destroy current plot context");
        self.backend.plot_destroy_context();
    }

    /// Plot calls against the current plot context.
    pub fn plot(&mut self) -> PlotUi<'_, B> {
        PlotUi::new(&mut self.backend, &self.config.plot)
    }
}
