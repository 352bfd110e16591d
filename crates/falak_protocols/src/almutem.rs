//! The almutem protocol: the planet scoring highest over the hylegic
//! points, the house positions and the rulers of the moment.

use falak_core::{AngleId, BodyId, Chart, CoreError, Position, SEVEN_PLANETS};
use falak_dignity::EssentialScorer;
use tracing::debug;

use crate::hours::HourTable;
use crate::score::{ScoreRow, ScoreTable};

/// Points per house, indexed by [`falak_core::HouseId::index`].
pub const HOUSE_SCORES: [i32; 12] = [12, 6, 3, 9, 7, 1, 10, 4, 5, 11, 8, 2];

/// Points for the ruler of the day (or night).
pub const DAY_RULER_SCORE: i32 = 7;
/// Points for the ruler of the hour.
pub const HOUR_RULER_SCORE: i32 = 6;

/// Sun, Moon, Asc, Pars Fortuna and Syzygy with their labels.
pub fn hylegic_points(chart: &Chart) -> Result<Vec<(&'static str, Position)>, CoreError> {
    let mut res = Vec::with_capacity(5);
    for id in [BodyId::Sun, BodyId::Moon] {
        res.push((id.name(), chart.body(id)?.position));
    }
    res.push((AngleId::Asc.name(), chart.angle(AngleId::Asc).position));
    for id in [BodyId::ParsFortuna, BodyId::Syzygy] {
        res.push((id.name(), chart.body(id)?.position));
    }
    Ok(res)
}

/// House-position points of the seven planets.
pub fn house_row(chart: &Chart) -> Result<ScoreRow, CoreError> {
    let mut row = ScoreRow::new();
    for id in SEVEN_PLANETS {
        let house = chart.house_of(chart.body(id)?.position.lon)?;
        row.set(id, HOUSE_SCORES[house.id.index()]);
    }
    Ok(row)
}

/// Day-or-night ruler and hour ruler points. When one planet is both it
/// keeps only the hour ruler's points.
pub fn rulers_row(hours: &HourTable) -> ScoreRow {
    let mut row = ScoreRow::new();
    row.set(hours.current_ruler(), DAY_RULER_SCORE);
    row.set(hours.hour_ruler(), HOUR_RULER_SCORE);
    row
}

/// Full almutem table of a chart.
///
/// The chart must contain the seven planets, Pars Fortuna and Syzygy.
pub fn almutem(
    chart: &Chart,
    scorer: &EssentialScorer,
    hours: &HourTable,
) -> Result<ScoreTable, CoreError> {
    let mut rows = Vec::with_capacity(7);
    for (label, pos) in hylegic_points(chart)? {
        let info = scorer.info(pos.sign, pos.sign_lon);
        rows.push((label.to_string(), ScoreRow::from_info(&info)));
    }
    rows.push(("Houses".to_string(), house_row(chart)?));
    rows.push(("Rulers".to_string(), rulers_row(hours)));

    let table = ScoreTable::new(rows);
    debug!(almuten = table.almuten().name(), "almutem protocol");
    Ok(table)
}
