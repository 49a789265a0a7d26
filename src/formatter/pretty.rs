use crate::types;

use comfy_table::{presets::NOTHING, Attribute, Cell, CellAlignment, Color, Table};
use std::fmt::Display;

pub struct Pretty {
    display_group: bool,
    result: types::FullResult,
}

impl Pretty {
    pub fn new(display_group: bool, result: types::FullResult) -> Self {
        Self {
            display_group,
            result,
        }
    }
}

fn allowed_cell(allowed: bool) -> Cell {
    Cell::new(if allowed { "allow" } else { "deny" })
}

fn outcome_cell(result: &types::CaseResult) -> Cell {
    match &result.outcome {
        types::Outcome::Passed => Cell::new("✔")
            .fg(Color::AnsiValue(34))
            .set_alignment(CellAlignment::Center),
        types::Outcome::Mismatch { actual } => {
            let got = if actual.allowed { "allowed" } else { "denied" };
            Cell::new(format!("✖ {}", got)).fg(Color::Red)
        }
        types::Outcome::Errored(e) => Cell::new(format!("✖ {}", e)).fg(Color::Red),
    }
}

impl Display for Pretty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut table = Table::new();
        table.load_preset(NOTHING);

        let column_count = if self.display_group { 8 } else { 7 };

        let mut titles = Vec::with_capacity(column_count);
        titles.extend(
            ["Case", "Subject", "Namespace"]
                .iter()
                .map(|t| Cell::new(t).add_attribute(Attribute::Bold)),
        );
        if self.display_group {
            titles.push(Cell::new("Group").add_attribute(Attribute::Bold));
        }
        titles.extend(
            ["Resource", "Verb", "Expected", "Result"]
                .iter()
                .map(|t| Cell::new(t).add_attribute(Attribute::Bold)),
        );
        table.set_header(titles);

        self.result.items.iter().for_each(|result| {
            let case = &result.case;
            let mut row: Vec<Cell> = Vec::with_capacity(column_count);
            row.push(Cell::new(case.name));
            row.push(Cell::new(case.user));
            row.push(Cell::new(if case.namespace.is_empty() {
                "*"
            } else {
                case.namespace
            }));
            if self.display_group {
                row.push(Cell::new(case.group));
            }
            row.push(Cell::new(case.resource));
            row.push(Cell::new(case.verb));
            row.push(allowed_cell(case.expected_allowed));
            row.push(outcome_cell(result));
            table.add_row(row);
        });

        table.fmt(f)
    }
}
