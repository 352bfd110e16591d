//! Per-planet score rows shared by the almutem-style protocols.
//!
//! A row holds, for each of the seven planets, the running text of the
//! points it collected (`+5+3`) and their sum. Rows are folded into a final
//! `Score` row.

use falak_core::{BodyId, SEVEN_PLANETS};
use falak_dignity::{DignityKind, EssentialInfo};
use serde::Serialize;

/// Positive dignities counted by the almutem protocols, in scoring order.
pub const ALMUTEM_DIGNITIES: [DignityKind; 7] = [
    DignityKind::Ruler,
    DignityKind::Exalt,
    DignityKind::DayTrip,
    DignityKind::NightTrip,
    DignityKind::PartTrip,
    DignityKind::Term,
    DignityKind::Face,
];

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScoreCell {
    pub text: String,
    pub score: i32,
}

/// One cell per classical planet, in [`SEVEN_PLANETS`] order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScoreRow {
    cells: [ScoreCell; 7],
}

fn slot(id: BodyId) -> Option<usize> {
    SEVEN_PLANETS.iter().position(|p| *p == id)
}

impl ScoreRow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Row with the positive dignity points of a position.
    pub fn from_info(info: &EssentialInfo) -> Self {
        let mut row = Self::new();
        for kind in ALMUTEM_DIGNITIES {
            if let Some(holder) = info.holder(kind) {
                row.add(holder, kind.score());
            }
        }
        row
    }

    /// Append `score` to a planet's cell. Non-classical bodies are ignored.
    pub fn add(&mut self, id: BodyId, score: i32) {
        if let Some(i) = slot(id) {
            let cell = &mut self.cells[i];
            cell.text.push_str(&format!("+{score}"));
            cell.score += score;
        }
    }

    /// Replace a planet's cell with a single score.
    pub fn set(&mut self, id: BodyId, score: i32) {
        if let Some(i) = slot(id) {
            self.cells[i] = ScoreCell {
                text: format!("+{score}"),
                score,
            };
        }
    }

    pub fn cell(&self, id: BodyId) -> Option<&ScoreCell> {
        slot(id).map(|i| &self.cells[i])
    }

    pub fn score(&self, id: BodyId) -> i32 {
        self.cell(id).map_or(0, |c| c.score)
    }

    pub fn iter(&self) -> impl Iterator<Item = (BodyId, &ScoreCell)> {
        SEVEN_PLANETS.iter().copied().zip(self.cells.iter())
    }

    /// Highest scoring planet; the first in planet order wins ties.
    pub fn leader(&self) -> BodyId {
        let mut best = (SEVEN_PLANETS[0], self.cells[0].score);
        for (id, cell) in self.iter().skip(1) {
            if cell.score > best.1 {
                best = (id, cell.score);
            }
        }
        best.0
    }
}

/// Sum rows cell by cell, concatenating their texts.
pub fn fold_rows<'a, I>(rows: I) -> ScoreRow
where
    I: IntoIterator<Item = &'a ScoreRow>,
{
    let mut total = ScoreRow::new();
    for row in rows {
        for (acc, cell) in total.cells.iter_mut().zip(row.cells.iter()) {
            acc.text.push_str(&cell.text);
            acc.score += cell.score;
        }
    }
    total
}

/// Labelled rows and their folded `Score` row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreTable {
    pub rows: Vec<(String, ScoreRow)>,
    pub score: ScoreRow,
}

impl ScoreTable {
    pub fn new(rows: Vec<(String, ScoreRow)>) -> Self {
        let score = fold_rows(rows.iter().map(|(_, row)| row));
        Self { rows, score }
    }

    pub fn row(&self, label: &str) -> Option<&ScoreRow> {
        self.rows.iter().find(|(l, _)| l == label).map(|(_, r)| r)
    }

    /// Planet with the highest total.
    pub fn almuten(&self) -> BodyId {
        self.score.leader()
    }
}
