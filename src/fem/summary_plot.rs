use super::Diagnostics;
use crate::StrError;
use plotpy::{Curve, Plot, RayEndpoint};
use std::ffi::OsStr;

/// Holds the reference (critical) point used to annotate the summary figure
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CriticalPoint {
    /// Load multiplier at which damage starts
    pub load: f64,

    /// Force resultant at which damage starts
    pub force: f64,
}

/// Draws the force and energies versus the load multiplier
///
/// The figure has two stacked panels: (1) force versus load and (2) elastic, dissipated,
/// and total energies versus load. Dashed lines mark the critical point, if given.
pub struct SummaryPlot {
    plot: Plot,
}

impl SummaryPlot {
    /// Allocates a new instance and draws the curves
    pub fn new(diagnostics: &Diagnostics, critical: Option<CriticalPoint>) -> Self {
        let loads = diagnostics.loads();

        // force versus load
        let mut force = Curve::new();
        force
            .set_line_color("blue")
            .set_marker_style("o")
            .set_line_width(2.0)
            .draw(&loads, &diagnostics.force_column());

        // energies versus load
        let mut elastic = Curve::new();
        let mut surface = Curve::new();
        let mut total = Curve::new();
        elastic
            .set_label("Elastic")
            .set_line_color("blue")
            .set_marker_style("o")
            .set_line_width(2.0)
            .draw(&loads, &diagnostics.energy_column(1));
        surface
            .set_label("Dissipated")
            .set_line_color("red")
            .set_marker_style("o")
            .set_line_width(2.0)
            .draw(&loads, &diagnostics.energy_column(2));
        total
            .set_label("Total")
            .set_line_color("black")
            .set_line_style("--")
            .set_line_width(2.0)
            .draw(&loads, &diagnostics.energy_column(3));

        let mut plot = Plot::new();
        plot.set_subplot(2, 1, 1).add(&force);
        if let Some(cp) = critical {
            plot.add(&reference_lines(cp.load, cp.force));
        }
        plot.grid_and_labels("Load multiplier", "Force");

        plot.set_subplot(2, 1, 2).add(&elastic).add(&surface).add(&total);
        if let Some(cp) = critical {
            plot.add(&reference_lines(cp.load, f64::NAN));
        }
        plot.grid_labels_legend("Load multiplier", "Energies")
            .set_figure_size_points(600.0, 600.0);
        SummaryPlot { plot }
    }

    /// Saves the figure
    ///
    /// # Input
    ///
    /// * `figure_path` -- may be a String, &str, or Path
    pub fn save<S>(&self, figure_path: &S) -> Result<(), StrError>
    where
        S: AsRef<OsStr> + ?Sized,
    {
        self.plot.save(figure_path)
    }
}

/// Returns dashed gray lines at x = load and y = value (the latter is skipped if value is NaN)
fn reference_lines(load: f64, value: f64) -> Curve {
    let mut lines = Curve::new();
    lines.set_line_color("grey").set_line_style("--").set_line_width(2.0);
    lines.draw_ray(load, 0.0, RayEndpoint::Vertical);
    if value.is_finite() {
        lines.draw_ray(0.0, value, RayEndpoint::Horizontal);
    }
    lines
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::{CriticalPoint, SummaryPlot};
    use crate::base::DEFAULT_TEST_DIR;
    use crate::fem::{Diagnostics, StepRecord};

    const SAVE_FIGURE: bool = false;

    #[test]
    fn summary_plot_works() {
        let mut diagnostics = Diagnostics::new(4);
        for i in 0..4 {
            let t = i as f64;
            diagnostics
                .record(&StepRecord {
                    t,
                    elastic: 0.5 * t * t,
                    surface: 0.0,
                    force: t,
                    iterations: 1,
                    converged: true,
                    backend_failures: 0,
                })
                .unwrap();
        }
        let critical = CriticalPoint { load: 2.5, force: 2.5 };
        let fig = SummaryPlot::new(&diagnostics, Some(critical));
        if SAVE_FIGURE {
            fig.save(&format!("{}/summary_plot_works.svg", DEFAULT_TEST_DIR)).unwrap();
        }
    }
}
