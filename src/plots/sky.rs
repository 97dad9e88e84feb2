//!Polar sky-position plots: where a target sits on the local sky over
//!the sampling window, zenith at the center and horizon at the rim.

use log::debug;
use plotly::common::{Mode, Title};
use plotly::{Layout, Plot, ScatterPolar};

use super::{format_time, TraceStyle};
use crate::{Error, FixedTarget, Observer, ObservingTime};

///Draws the sky path of `target` onto `plot`, or onto a new polar
///figure when no handle is given. Theta is the azimuth, r the zenith
///distance, so r = 0 is the zenith and r = 90 the horizon. Samples
///below the horizon are dropped. Accumulates across calls exactly like
///the time-dependent plots.
pub fn plot_sky(
    target: &FixedTarget,
    observer: &Observer,
    time: impl Into<ObservingTime>,
    plot: Option<Plot>,
    style: Option<TraceStyle>,
) -> Result<Plot, Error> {
    let samples = time.into().samples()?;
    let mut plot = plot.unwrap_or_else(build_sky_plot);

    let mut theta = Vec::with_capacity(samples.len());
    let mut zenith_distance = Vec::with_capacity(samples.len());
    let mut hover = Vec::with_capacity(samples.len());
    for time in &samples {
        let horizontal = observer.altaz(&target.coord, *time);
        if horizontal.altitude > 0. {
            theta.push(horizontal.azimuth);
            zenith_distance.push(horizontal.zenith_distance());
            hover.push(format_time(*time, None));
        }
    }
    debug!(
        "sky path: {} from {}, {}/{} samples above horizon",
        target.name,
        observer.name,
        theta.len(),
        samples.len()
    );

    let style = style.unwrap_or_default();
    let trace = ScatterPolar::new(theta, zenith_distance)
        .mode(Mode::Markers)
        .name(target.name.as_str())
        .hover_text_array(hover)
        .marker(style.marker());
    plot.add_trace(trace);
    Ok(plot)
}

fn build_sky_plot() -> Plot {
    let layout = Layout::new()
        .title(Title::with_text("Sky position"))
        .show_legend(true)
        .auto_size(true);
    let mut plot = Plot::new();
    plot.set_layout(layout);
    plot
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::helpers::quick_gen_datetime;
    use serde_json::Value;

    fn subaru() -> Observer {
        Observer::new([19.8285, -155.48025, 4163.], "Subaru Telescope")
    }

    fn plot_json(plot: &Plot) -> Value {
        serde_json::from_str(&plot.to_json()).unwrap()
    }

    #[test]
    fn test_sky_path_stays_above_horizon() {
        let time = quick_gen_datetime(2015, 6, 15, 23, 30, 0);
        let sirius =
            FixedTarget::from_sexagesimal("06h45m08.9173s", "-16d42m58.017s", "Sirius").unwrap();
        let plot = plot_sky(&sirius, &subaru(), time, None, None).unwrap();
        let json = plot_json(&plot);
        let r = json["data"][0]["r"].as_array().unwrap();
        assert!(!r.is_empty());
        assert!(r.len() < 100);
        assert!(r
            .iter()
            .filter_map(|v| v.as_f64())
            .all(|zd| (0. ..90.).contains(&zd)));
    }

    #[test]
    fn test_never_rising_target_is_empty() {
        let time = quick_gen_datetime(2015, 6, 15, 23, 30, 0);
        let southern = FixedTarget::new(crate::EquatorialCoord::from_degrees(90., -80.), "Deep South");
        let plot = plot_sky(&southern, &subaru(), time, None, None).unwrap();
        let json = plot_json(&plot);
        assert!(json["data"][0]["r"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_two_targets_share_one_figure() {
        let time = quick_gen_datetime(2015, 6, 15, 23, 30, 0);
        let observer = subaru();
        let sirius =
            FixedTarget::from_sexagesimal("06h45m08.9173s", "-16d42m58.017s", "Sirius").unwrap();
        let polaris =
            FixedTarget::from_sexagesimal("02h31m49.09s", "+89d15m50.8s", "Polaris").unwrap();
        let plot = plot_sky(&sirius, &observer, time, None, None).unwrap();
        let plot = plot_sky(&polaris, &observer, time, Some(plot), None).unwrap();
        let json = plot_json(&plot);
        let data = json["data"].as_array().unwrap();
        assert_eq!(data.len(), 2);
        assert_eq!(data[1]["name"], "Polaris");
        assert_eq!(data[0]["type"], "scatterpolar");
    }
}
