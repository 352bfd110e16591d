//! Arabic parts (lots).
//!
//! Each part is the arc from `A` to `B` projected from `C`, that is
//! `C + B - A`, with separate diurnal and nocturnal operand orders.
//! Operands may be bodies, house cusps, the ruler of a house cusp, the
//! ascendant or another part.

use falak_core::{AngleId, BodyId, Chart, CoreError, DerivedPoint, HouseId, PointId};
use falak_dignity::ruler;
use falak_math::normalize;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ArabicPart {
    Fortuna,
    Spirit,
    Faith,
    Substance,
    WeddingMale,
    WeddingFemale,
    Sons,
    Father,
    Mother,
    Brothers,
    Diseases,
    Death,
    Travel,
    Friends,
    Enemies,
    Saturn,
    Jupiter,
    Mars,
    Venus,
    Mercury,
    /// Also called the part of bravery.
    Horsemanship,
}

pub const ALL_ARABIC_PARTS: [ArabicPart; 21] = [
    ArabicPart::Fortuna,
    ArabicPart::Spirit,
    ArabicPart::Faith,
    ArabicPart::Substance,
    ArabicPart::WeddingMale,
    ArabicPart::WeddingFemale,
    ArabicPart::Sons,
    ArabicPart::Father,
    ArabicPart::Mother,
    ArabicPart::Brothers,
    ArabicPart::Diseases,
    ArabicPart::Death,
    ArabicPart::Travel,
    ArabicPart::Friends,
    ArabicPart::Enemies,
    ArabicPart::Saturn,
    ArabicPart::Jupiter,
    ArabicPart::Mars,
    ArabicPart::Venus,
    ArabicPart::Mercury,
    ArabicPart::Horsemanship,
];

/// One term of a part formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PartOperand {
    Body(BodyId),
    House(HouseId),
    /// Ruler of the sign on a house cusp.
    HouseRuler(HouseId),
    Asc,
    Part(ArabicPart),
}

use ArabicPart as P;
use PartOperand::{Asc, Body, Part};

const fn b(id: BodyId) -> PartOperand {
    Body(id)
}

const fn house(n: u8) -> HouseId {
    match HouseId::new(n) {
        Some(h) => h,
        None => panic!("house number out of range"),
    }
}

const HOUSE2: HouseId = house(2);
const HOUSE8: HouseId = house(8);
const HOUSE9: HouseId = house(9);
const HOUSE12: HouseId = house(12);

impl ArabicPart {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Fortuna => "Pars Fortuna",
            Self::Spirit => "Pars Spirit",
            Self::Faith => "Pars Faith",
            Self::Substance => "Pars Substance",
            Self::WeddingMale => "Pars Wedding [Male]",
            Self::WeddingFemale => "Pars Wedding [Female]",
            Self::Sons => "Pars Sons",
            Self::Father => "Pars Father",
            Self::Mother => "Pars Mother",
            Self::Brothers => "Pars Brothers",
            Self::Diseases => "Pars Diseases",
            Self::Death => "Pars Death",
            Self::Travel => "Pars Travel",
            Self::Friends => "Pars Friends",
            Self::Enemies => "Pars Enemies",
            Self::Saturn => "Pars Saturn",
            Self::Jupiter => "Pars Jupiter",
            Self::Mars => "Pars Mars",
            Self::Venus => "Pars Venus",
            Self::Mercury => "Pars Mercury",
            Self::Horsemanship => "Pars Horsemanship",
        }
    }

    /// `[A, B, C]` for a diurnal or nocturnal chart.
    pub const fn formula(self, diurnal: bool) -> [PartOperand; 3] {
        use BodyId::{Jupiter, Mars, Mercury, Moon, Saturn, Sun, Venus};
        let (day, night) = match self {
            P::Fortuna => ([b(Sun), b(Moon), Asc], [b(Moon), b(Sun), Asc]),
            P::Spirit => ([b(Moon), b(Sun), Asc], [b(Sun), b(Moon), Asc]),
            P::Faith => ([b(Moon), b(Mercury), Asc], [b(Mercury), b(Moon), Asc]),
            P::Substance => {
                let f = [PartOperand::HouseRuler(HOUSE2), PartOperand::House(HOUSE2), Asc];
                (f, f)
            }
            P::WeddingMale => ([b(Saturn), b(Venus), Asc], [b(Saturn), b(Venus), Asc]),
            P::WeddingFemale => ([b(Venus), b(Saturn), Asc], [b(Venus), b(Saturn), Asc]),
            P::Sons => ([b(Jupiter), b(Saturn), Asc], [b(Saturn), b(Jupiter), Asc]),
            P::Father => ([b(Sun), b(Saturn), Asc], [b(Saturn), b(Sun), Asc]),
            P::Mother => ([b(Venus), b(Moon), Asc], [b(Moon), b(Venus), Asc]),
            P::Brothers => ([b(Saturn), b(Jupiter), Asc], [b(Saturn), b(Jupiter), Asc]),
            P::Diseases => ([b(Saturn), b(Mars), Asc], [b(Mars), b(Saturn), Asc]),
            P::Death => {
                let f = [b(Moon), PartOperand::House(HOUSE8), b(Saturn)];
                (f, f)
            }
            P::Travel => {
                let f = [PartOperand::HouseRuler(HOUSE9), PartOperand::House(HOUSE9), Asc];
                (f, f)
            }
            P::Friends => ([b(Moon), b(Mercury), Asc], [b(Moon), b(Mercury), Asc]),
            P::Enemies => {
                let f = [PartOperand::HouseRuler(HOUSE12), PartOperand::House(HOUSE12), Asc];
                (f, f)
            }
            P::Saturn => ([b(Saturn), Part(P::Fortuna), Asc], [Part(P::Fortuna), b(Saturn), Asc]),
            P::Jupiter => ([Part(P::Spirit), b(Jupiter), Asc], [b(Jupiter), Part(P::Spirit), Asc]),
            P::Mars => ([b(Mars), Part(P::Fortuna), Asc], [Part(P::Fortuna), b(Mars), Asc]),
            P::Venus => ([Part(P::Spirit), b(Venus), Asc], [b(Venus), Part(P::Spirit), Asc]),
            P::Mercury => ([b(Mercury), Part(P::Fortuna), Asc], [Part(P::Fortuna), b(Mercury), Asc]),
            P::Horsemanship => ([b(Saturn), b(Moon), Asc], [b(Moon), b(Saturn), Asc]),
        };
        if diurnal { day } else { night }
    }
}

fn operand_lon(chart: &Chart, op: PartOperand, diurnal: bool) -> Result<f64, CoreError> {
    Ok(match op {
        PartOperand::Body(id) => chart.body(id)?.position.lon,
        PartOperand::House(h) => chart.house(h).position.lon,
        PartOperand::HouseRuler(h) => {
            let sign = chart.house(h).position.sign;
            chart.body(ruler(sign))?.position.lon
        }
        PartOperand::Asc => chart.angle(AngleId::Asc).position.lon,
        PartOperand::Part(part) => raw_lon(chart, part, diurnal)?,
    })
}

fn raw_lon(chart: &Chart, part: ArabicPart, diurnal: bool) -> Result<f64, CoreError> {
    let [a, b, c] = part.formula(diurnal);
    Ok(operand_lon(chart, c, diurnal)? + operand_lon(chart, b, diurnal)?
        - operand_lon(chart, a, diurnal)?)
}

/// Longitude of a part, with the formula chosen by the chart's sect.
pub fn part_lon(chart: &Chart, part: ArabicPart) -> Result<f64, CoreError> {
    let diurnal = chart.is_diurnal()?;
    Ok(normalize(raw_lon(chart, part, diurnal)?))
}

/// A part as a derived chart point named after it.
pub fn arabic_part(chart: &Chart, part: ArabicPart) -> Result<DerivedPoint, CoreError> {
    Ok(DerivedPoint::at(PointId::Named(part.name()), part_lon(chart, part)?))
}
