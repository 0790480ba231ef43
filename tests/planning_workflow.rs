use pretty_assertions::assert_eq;

use u_planning::analysis::{analyze, AnalyzerConfig, ScheduleAnalyzer};
use u_planning::grid::ScheduleGrid;
use u_planning::models::{ContractType, Employee, FindingKind, Selection};
use u_planning::roster::Roster;
use u_planning::store::{JsonStore, RosterSource, ScheduleStore};
use u_planning::validation::validate_roster;
use u_planning::week::WeekRef;

fn team() -> Roster {
    Roster::from(vec![
        Employee::new("Alice")
            .with_email("alice@example.com")
            .with_contract(ContractType::Hours35),
        Employee::new("Bob")
            .with_email("bob@example.com")
            .with_contract(ContractType::Hours33),
        Employee::new("Chloé")
            .with_email("chloe@example.com")
            .with_contract(ContractType::Student),
        Employee::new("Dan")
            .with_email("dan@example.com")
            .with_contract(ContractType::Owner),
    ])
}

#[test]
fn edit_save_reload_and_analyze() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonStore::in_dir(dir.path());
    let roster = team();
    assert!(validate_roster(roster.employees()).is_ok());
    store.save_employees(&roster).unwrap();

    let week = WeekRef::new(2025, 16).unwrap();
    let roster = store.load_employees().unwrap();
    let mut grid = ScheduleGrid::new(roster.clone());
    grid.load_snapshot(store.load_schedule(week.week, week.year).unwrap().as_ref());

    // Alice: 7 + 7 + 7 + 7 + 7 = 35h.
    grid.paste_region(0, 1, "8 15\t8 15\t8 15\t8 15\t8 15");
    // Bob: two short days and a paid-leave day.
    grid.set_cell(1, 1, "7 12").unwrap();
    grid.set_cell(1, 2, "7-12").unwrap();
    grid.set_cell(1, 3, "CP").unwrap();
    // Chloé: overlapping shifts on Saturday.
    grid.set_cell(2, 6, "7-15 10-12").unwrap();

    assert_eq!(grid.total(0), Some(35.0));
    assert_eq!(grid.total(1), Some(15.5));
    assert_eq!(grid.total(2), Some(10.0));

    store
        .save_schedule(week.week, week.year, &grid.to_snapshot(&week))
        .unwrap();

    let mut reloaded = ScheduleGrid::new(roster.clone());
    let saved = store.load_schedule(week.week, week.year).unwrap();
    let outcome = reloaded.load_snapshot(saved.as_ref());
    assert_eq!(outcome.loaded_rows, vec![0, 1, 2, 3]);
    for row in 0..grid.row_count() {
        assert_eq!(reloaded.day_texts(row), grid.day_texts(row));
        assert_eq!(reloaded.total(row), grid.total(row));
    }

    let report = analyze(&reloaded, &roster);
    let overlaps: Vec<String> = report.overlaps().map(ToString::to_string).collect();
    assert_eq!(overlaps, vec!["Chevauchement d'horaires, Chloé le samedi"]);
    let deviations: Vec<String> = report.deviations().map(ToString::to_string).collect();
    assert_eq!(deviations, vec!["Bob - Manque d'h: 17.50h (contrat: 33h)"]);
    assert_eq!(report.understaffing().count(), 7);
}

#[test]
fn bulk_edits_stay_consistent_with_history() {
    let mut grid = ScheduleGrid::new(team());

    grid.paste_region(0, 1, "7 12\t7 12\n8 13\t8 13");
    grid.clear_selection(Selection::new(0, 1, 1, 1));
    assert_eq!(grid.total(0), Some(5.0));
    assert_eq!(grid.total(1), Some(5.0));

    // Undo the clear, then the paste.
    grid.undo_selection(Selection::new(0, 1, 1, 1));
    assert_eq!(grid.copy_region(0, 1, 1, 2), "7 - 12\t7 - 12\n8 - 13\t8 - 13");
    let block = Selection::new(0, 1, 1, 2);
    grid.undo_selection(block);
    assert_eq!(grid.copy_region(0, 1, 1, 2), "\t\n\t");
    assert_eq!(grid.total(0), Some(0.0));

    grid.redo_selection(block);
    assert_eq!(grid.total(0), Some(10.0));
    assert_eq!(grid.total(1), Some(10.0));
}

#[test]
fn roster_changes_flow_into_grid_and_analysis() {
    let mut roster = team();
    let mut grid = ScheduleGrid::new(roster.clone());
    grid.set_cell(1, 1, "CP").unwrap();
    assert_eq!(grid.total(1), Some(5.5));

    roster.set_contract(1, Some(ContractType::Hours39));
    roster.remove(3);
    grid.sync_roster(roster.clone());
    assert_eq!(grid.row_count(), 3);
    assert_eq!(grid.total(1), Some(6.5));

    let relaxed = ScheduleAnalyzer::new().with_config(AnalyzerConfig::new().with_min_staff(0));
    let report = relaxed.analyze(&grid, &roster);
    let kinds: Vec<FindingKind> = report.findings.iter().map(|f| f.kind()).collect();
    assert_eq!(
        kinds,
        vec![FindingKind::ContractDeviation, FindingKind::ContractDeviation]
    );
}
