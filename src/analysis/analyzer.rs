//! Planning analysis pass.
//!
//! # Algorithm
//!
//! 1. Build one presence histogram per weekday from every non-empty cell.
//! 2. Report each employee/day cell holding overlapping shifts.
//! 3. Compare each baselined row total with its contract.
//! 4. Scan each day's histogram for understaffed windows.
//!
//! # Complexity
//! O(r * d * s) where r=rows, d=7 days, s=shifts per cell, plus the walk
//! length of each shift.

use std::fmt;

use tracing::{debug, warn};

use crate::grid::ScheduleGrid;
use crate::models::{column_for_weekday, Finding, FindingKind, WEEKDAYS};
use crate::parse::{extract_intervals, has_overlap};
use crate::roster::Roster;

use super::config::AnalyzerConfig;
use super::presence::PresenceHistogram;

/// Findings of one analysis pass, grouped by category.
///
/// | Order | Category |
/// |-------|----------|
/// | 1 | overlapping shifts (by row, then day) |
/// | 2 | contract deviations (by row) |
/// | 3 | understaffed windows (by day, then time) |
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnalysisReport {
    /// Every finding.
    pub findings: Vec<Finding>,
}

impl AnalysisReport {
    /// Whether nothing was found.
    pub fn is_clean(&self) -> bool {
        self.findings.is_empty()
    }

    /// Number of findings.
    pub fn len(&self) -> usize {
        self.findings.len()
    }

    /// Whether the report is empty.
    pub fn is_empty(&self) -> bool {
        self.findings.is_empty()
    }

    /// Findings of one category.
    pub fn of_kind(&self, kind: FindingKind) -> impl Iterator<Item = &Finding> {
        self.findings.iter().filter(move |f| f.kind() == kind)
    }

    /// Overlap findings.
    pub fn overlaps(&self) -> impl Iterator<Item = &Finding> {
        self.of_kind(FindingKind::Overlap)
    }

    /// Contract deviation findings.
    pub fn deviations(&self) -> impl Iterator<Item = &Finding> {
        self.of_kind(FindingKind::ContractDeviation)
    }

    /// Understaffing findings.
    pub fn understaffing(&self) -> impl Iterator<Item = &Finding> {
        self.of_kind(FindingKind::Understaffing)
    }
}

impl fmt::Display for AnalysisReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_clean() {
            return f.write_str("Aucune erreur détectée.");
        }
        for (i, finding) in self.findings.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            write!(f, "• {finding}")?;
        }
        Ok(())
    }
}

/// Read-only planning analyzer.
///
/// # Example
///
/// ```
/// use u_planning::analysis::ScheduleAnalyzer;
/// use u_planning::grid::ScheduleGrid;
/// use u_planning::models::{ContractType, Employee};
/// use u_planning::roster::Roster;
///
/// let roster = Roster::from(vec![
///     Employee::new("Alice").with_contract(ContractType::Student),
/// ]);
/// let mut grid = ScheduleGrid::new(roster.clone());
/// grid.set_cell(0, 1, "7-15 10-12").unwrap();
///
/// let report = ScheduleAnalyzer::new().analyze(&grid, &roster);
/// assert_eq!(report.overlaps().count(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScheduleAnalyzer {
    config: AnalyzerConfig,
}

impl ScheduleAnalyzer {
    /// Creates an analyzer with the default staffing rules.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the staffing rules.
    pub fn with_config(mut self, config: AnalyzerConfig) -> Self {
        self.config = config;
        self
    }

    /// The staffing rules in use.
    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Analyzes a planning. The grid is not modified.
    ///
    /// Contracts are looked up in `roster` by trimmed row name; rows with
    /// no roster entry or no contract get no deviation finding.
    pub fn analyze(&self, grid: &ScheduleGrid, roster: &Roster) -> AnalysisReport {
        let mut presence: Vec<PresenceHistogram> = WEEKDAYS
            .iter()
            .map(|&day| {
                PresenceHistogram::new(self.config.hours_for(day), self.config.fine_step_after)
            })
            .collect();
        let mut overlaps = Vec::new();
        let mut deviations = Vec::new();

        for row in 0..grid.row_count() {
            let name = grid.name(row).unwrap_or_default().trim();

            for (day_index, &day) in WEEKDAYS.iter().enumerate() {
                let text = grid
                    .cell_text(row, column_for_weekday(day))
                    .unwrap_or_default()
                    .trim();
                if text.is_empty() {
                    continue;
                }
                let intervals = extract_intervals(text);
                if has_overlap(&intervals) {
                    overlaps.push(Finding::Overlap {
                        employee: name.to_string(),
                        day,
                    });
                }
                for interval in &intervals {
                    presence[day_index].add(interval);
                }
            }

            let Some(employee) = roster.find(name) else {
                warn!(row, name, "row name not on roster, contract check skipped");
                continue;
            };
            let Some(contract) = employee.contract else {
                debug!(row, name, "employee has no contract, contract check skipped");
                continue;
            };
            let expected = contract.baseline_hours();
            if !contract.reports_deviation() || expected <= 0.0 {
                continue;
            }
            let actual = grid.total(row).unwrap_or_default();
            if actual != expected {
                deviations.push(Finding::ContractDeviation {
                    employee: name.to_string(),
                    contract,
                    expected,
                    actual,
                });
            }
        }

        let mut findings = overlaps;
        findings.append(&mut deviations);
        for (histogram, &day) in presence.iter().zip(WEEKDAYS.iter()) {
            for (start, end) in histogram.understaffed_windows(self.config.min_staff) {
                findings.push(Finding::Understaffed { day, start, end });
            }
        }
        debug!(findings = findings.len(), "planning analyzed");
        AnalysisReport { findings }
    }
}

/// Analyzes a planning with the default staffing rules.
pub fn analyze(grid: &ScheduleGrid, roster: &Roster) -> AnalysisReport {
    ScheduleAnalyzer::new().analyze(grid, roster)
}
