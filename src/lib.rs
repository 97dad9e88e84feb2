use chrono::{DateTime, Duration, Utc};
use thiserror::Error;

pub use observer::Observer;
pub use target::FixedTarget;
pub use types::EquatorialCoord;
pub use types::Frame;
pub use types::HorizontalCoord;
mod helpers;
mod observer;
pub mod plots;
mod target;
mod types;

///Number of samples taken across the 24 hour window that a single
///observation instant expands into.
pub const DEFAULT_WINDOW_SAMPLES: usize = 100;

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid right ascension: {0}")]
    InvalidRightAscension(String),
    #[error("invalid declination: {0}")]
    InvalidDeclination(String),
    #[error("empty time grid")]
    EmptyTimeGrid,
}

///When to plot: either one instant, expanded by the consumer into a
///24 hour window centered on it, or an explicit sample grid used
///verbatim.
#[derive(Clone, Debug)]
pub enum ObservingTime {
    Instant(DateTime<Utc>),
    Grid(Vec<DateTime<Utc>>),
}

impl From<DateTime<Utc>> for ObservingTime {
    fn from(instant: DateTime<Utc>) -> ObservingTime {
        ObservingTime::Instant(instant)
    }
}

impl From<Vec<DateTime<Utc>>> for ObservingTime {
    fn from(grid: Vec<DateTime<Utc>>) -> ObservingTime {
        ObservingTime::Grid(grid)
    }
}

impl ObservingTime {
    pub fn samples(&self) -> Result<Vec<DateTime<Utc>>, Error> {
        match self {
            ObservingTime::Instant(instant) => Ok(time_grid(*instant, DEFAULT_WINDOW_SAMPLES)),
            ObservingTime::Grid(grid) => {
                if grid.is_empty() {
                    Err(Error::EmptyTimeGrid)
                } else {
                    Ok(grid.clone())
                }
            },
        }
    }
}

///Evenly spreads `samples` instants over a 24 hour window centered on
///`center`, first and last landing exactly 12 hours either side.
pub fn time_grid(center: DateTime<Utc>, samples: usize) -> Vec<DateTime<Utc>> {
    let samples = samples.max(2);
    let window_ms: i64 = 24 * 3600 * 1000;
    (0..samples)
        .map(|i| {
            let offset_ms = i as i64 * window_ms / (samples as i64 - 1) - window_ms / 2;
            center + Duration::milliseconds(offset_ms)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::helpers::quick_gen_datetime;

    #[test]
    fn test_time_grid_brackets_center() {
        let center = quick_gen_datetime(2015, 6, 15, 23, 30, 0);
        let grid = time_grid(center, DEFAULT_WINDOW_SAMPLES);
        assert_eq!(grid.len(), DEFAULT_WINDOW_SAMPLES);
        assert_eq!(grid[0], center - Duration::hours(12));
        assert_eq!(grid[grid.len() - 1], center + Duration::hours(12));
        assert!(grid.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn test_instant_expands() {
        let center = quick_gen_datetime(2015, 6, 15, 23, 30, 0);
        let samples = ObservingTime::from(center).samples().unwrap();
        assert_eq!(samples.len(), DEFAULT_WINDOW_SAMPLES);
        assert!(samples[0] <= center - Duration::hours(11));
        assert!(samples[samples.len() - 1] >= center + Duration::hours(11));
    }

    #[test]
    fn test_explicit_grid_verbatim() {
        let grid = vec![
            quick_gen_datetime(2015, 6, 15, 22, 0, 0),
            quick_gen_datetime(2015, 6, 15, 23, 0, 0),
        ];
        let samples = ObservingTime::from(grid.clone()).samples().unwrap();
        assert_eq!(samples, grid);
    }

    #[test]
    fn test_empty_grid_rejected() {
        assert!(ObservingTime::Grid(vec![]).samples().is_err());
    }
}
