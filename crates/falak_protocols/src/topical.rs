//! Topical almuten: the almutem protocol restricted to the significators
//! of one house topic.

use falak_core::{BodyId, Chart, CoreError, HouseId, PointId, Position, Positional};
use falak_dignity::{EssentialScorer, ruler, sign_dignities};
use serde::Serialize;

use crate::arabic_parts::{ArabicPart, arabic_part};
use crate::score::{ScoreRow, ScoreTable};

/// Builds the significator list of a topic.
pub type TopicBuilder = fn(&Chart) -> Result<Vec<(PointId, Position)>, CoreError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TopicalProtocol {
    /// Wealth (Omar of Tiberias).
    SecondHouse,
    /// Siblings (Omar of Tiberias).
    ThirdHouse,
}

pub const ALL_TOPICAL_PROTOCOLS: [TopicalProtocol; 2] =
    [TopicalProtocol::SecondHouse, TopicalProtocol::ThirdHouse];

impl TopicalProtocol {
    pub const fn name(self) -> &'static str {
        match self {
            Self::SecondHouse => "TA_2H",
            Self::ThirdHouse => "TA_3H",
        }
    }

    pub const fn builder(self) -> TopicBuilder {
        match self {
            Self::SecondHouse => second_house_points,
            Self::ThirdHouse => third_house_points,
        }
    }
}

fn house_id(n: u8) -> Result<HouseId, CoreError> {
    HouseId::new(n).ok_or_else(|| CoreError::UnknownIdentifier(format!("House{n}")))
}

fn body_entry(chart: &Chart, id: BodyId) -> Result<(PointId, Position), CoreError> {
    let body = chart.body(id)?;
    Ok((body.point_id(), body.position))
}

/// House cusp, bodies in the house and the ruler of the cusp.
fn house_entries(chart: &Chart, house: HouseId) -> Result<Vec<(PointId, Position)>, CoreError> {
    let cusp = chart.house(house);
    let mut res = vec![(cusp.point_id(), cusp.position)];
    res.extend(
        chart
            .bodies_in_house(house)
            .into_iter()
            .map(|b| (b.point_id(), b.position)),
    );
    res.push(body_entry(chart, ruler(cusp.position.sign))?);
    Ok(res)
}

/// Part and the ruler of its sign.
fn part_entries(chart: &Chart, part: ArabicPart) -> Result<Vec<(PointId, Position)>, CoreError> {
    let p = arabic_part(chart, part)?;
    Ok(vec![
        (p.id, p.position),
        body_entry(chart, ruler(p.position.sign))?,
    ])
}

/// Second house, its occupants and ruler, Pars Substance and its ruler,
/// Jupiter, Pars Fortuna and its ruler.
pub fn second_house_points(chart: &Chart) -> Result<Vec<(PointId, Position)>, CoreError> {
    let mut res = house_entries(chart, house_id(2)?)?;
    res.extend(part_entries(chart, ArabicPart::Substance)?);
    res.push(body_entry(chart, BodyId::Jupiter)?);
    let fortuna = chart.body(BodyId::ParsFortuna)?;
    res.push((fortuna.point_id(), fortuna.position));
    res.push(body_entry(chart, ruler(fortuna.position.sign))?);
    Ok(res)
}

/// Third house, its occupants and ruler, Pars Brothers and its ruler,
/// Mars and the three triplicity rulers of Mars' sign.
pub fn third_house_points(chart: &Chart) -> Result<Vec<(PointId, Position)>, CoreError> {
    let mut res = house_entries(chart, house_id(3)?)?;
    res.extend(part_entries(chart, ArabicPart::Brothers)?);
    let mars = chart.body(BodyId::Mars)?;
    res.push((mars.point_id(), mars.position));
    for trip in sign_dignities(mars.position.sign).trip {
        res.push(body_entry(chart, trip)?);
    }
    Ok(res)
}

/// Score table over a topic's significators. A point listed twice is
/// scored once.
pub fn topical_almuten(
    chart: &Chart,
    scorer: &EssentialScorer,
    protocol: TopicalProtocol,
) -> Result<ScoreTable, CoreError> {
    let mut seen: Vec<PointId> = Vec::new();
    let mut rows = Vec::new();
    for (id, pos) in (protocol.builder())(chart)? {
        if seen.contains(&id) {
            continue;
        }
        seen.push(id);
        let info = scorer.info(pos.sign, pos.sign_lon);
        rows.push((id.to_string(), ScoreRow::from_info(&info)));
    }
    Ok(ScoreTable::new(rows))
}
