//!Time-dependent observation planning plots: airmass and altitude
//!against the sampling window.

use log::debug;
use plotly::common::{AxisSide, Mode, Title};
use plotly::layout::{Axis, Legend};
use plotly::{Layout, Plot, Scatter};

use super::{format_time, TraceStyle};
use crate::{Error, FixedTarget, Observer, ObservingTime};

///Display configuration for a freshly created airmass figure. Ignored
///when an existing plot handle is supplied, since the layout is then
///already fixed.
#[derive(Clone, Debug)]
pub struct AirmassOptions {
    ///Displayed airmass span, low to high. The axis is drawn inverted
    ///so low airmass (high in the sky) plots near the top.
    pub airmass_range: (f64, f64),
    ///Adds a right-hand axis labelled in altitude degrees
    pub altitude_axis: bool,
    ///Labels the time axis in the observer's timezone instead of UTC
    pub use_local_tz: bool,
    ///Legend placement in normalized figure coordinates
    pub legend_anchor: Option<(f64, f64)>,
}

impl Default for AirmassOptions {
    fn default() -> AirmassOptions {
        AirmassOptions {
            airmass_range: (1.0, 3.0),
            altitude_axis: false,
            use_local_tz: false,
            legend_anchor: None,
        }
    }
}

///Draws one airmass-vs-time curve for `target` onto `plot`, or onto a
///new figure when no handle is given. A single instant is expanded to
///a 24 hour window centered on it. Samples below the horizon become
///gaps in the curve. Repeated calls threading the returned handle
///accumulate curves on one figure.
pub fn plot_airmass(
    target: &FixedTarget,
    observer: &Observer,
    time: impl Into<ObservingTime>,
    plot: Option<Plot>,
    style: Option<TraceStyle>,
    options: Option<AirmassOptions>,
) -> Result<Plot, Error> {
    let samples = time.into().samples()?;
    let options = options.unwrap_or_default();
    // options only apply to a figure built here; labels added to an
    // existing handle must stay on the axis scale it was built with
    let (mut plot, timezone) = match plot {
        Some(plot) => (plot, None),
        None => {
            let timezone = if options.use_local_tz {
                Some(observer.timezone())
            } else {
                None
            };
            (build_airmass_plot(&options), timezone)
        },
    };
    debug!(
        "airmass curve: {} from {}, {} samples",
        target.name,
        observer.name,
        samples.len()
    );

    let labels: Vec<String> = samples.iter().map(|t| format_time(*t, timezone)).collect();
    let airmass: Vec<f64> = samples
        .iter()
        .map(|t| observer.airmass(&target.coord, *t).unwrap_or(f64::NAN))
        .collect();

    let style = style.unwrap_or_default();
    let trace = Scatter::new(labels, airmass)
        .mode(Mode::Lines)
        .name(target.name.as_str())
        .connect_gaps(false)
        .line(style.line());
    plot.add_trace(trace);
    Ok(plot)
}

///Same contract as [plot_airmass] with altitude in degrees on the Y
///axis, horizon at the bottom and zenith at the top.
pub fn plot_altitude(
    target: &FixedTarget,
    observer: &Observer,
    time: impl Into<ObservingTime>,
    plot: Option<Plot>,
    style: Option<TraceStyle>,
) -> Result<Plot, Error> {
    let samples = time.into().samples()?;
    let mut plot = plot.unwrap_or_else(build_altitude_plot);
    debug!(
        "altitude curve: {} from {}, {} samples",
        target.name,
        observer.name,
        samples.len()
    );

    let labels: Vec<String> = samples.iter().map(|t| format_time(*t, None)).collect();
    let altitude: Vec<f64> = samples
        .iter()
        .map(|t| observer.altaz(&target.coord, *t).altitude)
        .collect();

    let style = style.unwrap_or_default();
    let trace = Scatter::new(labels, altitude)
        .mode(Mode::Lines)
        .name(target.name.as_str())
        .line(style.line());
    plot.add_trace(trace);
    Ok(plot)
}

fn build_airmass_plot(options: &AirmassOptions) -> Plot {
    let x_title = if options.use_local_tz {
        "Local time"
    } else {
        "Time [UTC]"
    };
    let (low, high) = options.airmass_range;
    let mut layout = Layout::new()
        .title(Title::with_text("Airmass"))
        .x_axis(Axis::new().title(Title::with_text(x_title)).zero_line(false))
        .y_axis(
            Axis::new()
                .title(Title::with_text("Airmass"))
                // inverted: overhead targets plot near the top
                .range(vec![high, low])
                .zero_line(false),
        )
        .show_legend(true)
        .auto_size(true);
    if options.altitude_axis {
        // endpoints track the airmass scale: high airmass sits at the
        // bottom of the inverted axis, so low altitude does too
        layout = layout.y_axis2(
            Axis::new()
                .title(Title::with_text("Altitude [°]"))
                .overlaying("y")
                .side(AxisSide::Right)
                .range(vec![altitude_at_airmass(high), altitude_at_airmass(low)])
                .zero_line(false),
        );
    }
    if let Some((x, y)) = options.legend_anchor {
        layout = layout.legend(Legend::new().x(x).y(y));
    }
    let mut plot = Plot::new();
    plot.set_layout(layout);
    plot
}

///Altitude in degrees at which a target shows the given plane-parallel
///airmass. Inverse of the secant-of-zenith-distance formula.
fn altitude_at_airmass(airmass: f64) -> f64 {
    (1. / airmass.max(1.)).asin().to_degrees()
}

fn build_altitude_plot() -> Plot {
    let layout = Layout::new()
        .title(Title::with_text("Altitude"))
        .x_axis(Axis::new().title(Title::with_text("Time [UTC]")).zero_line(false))
        .y_axis(
            Axis::new()
                .title(Title::with_text("Altitude [°]"))
                .range(vec![0., 90.])
                .zero_line(true),
        )
        .show_legend(true)
        .auto_size(true);
    let mut plot = Plot::new();
    plot.set_layout(layout);
    plot
}
