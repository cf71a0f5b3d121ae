use chrono::NaiveDate;
use fitness_coach::models::{Theme, User};
use fitness_coach::{PlanFormat, PlanParser, Program, StateStore};
use fitness_coach_cli::storage::SledStore;
use tempfile::TempDir;

const PLAN: &str = "🏋️ Workout\nFocus: Back\n\
    Row\tLats\tIntermediate\t4\t10\thttps://example.com/row\n\
    Pull-up\tLats\tAdvanced\t3\t6\thttps://example.com/pullup\n";

fn program() -> Program {
    let mut program = Program::default();
    program.append_day(
        PlanParser::new().parse(PLAN),
        NaiveDate::from_ymd_opt(2024, 10, 1).unwrap(),
    );
    program
}

#[test]
fn test_state_survives_reopen() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("state");

    let mut user = User::default();
    let mut program = program();
    program.toggle_exercise(&mut user, 0, 0).unwrap();

    {
        let mut state = StateStore::new(SledStore::open(&path).unwrap());
        state.save(&user, &program);
        state.save_theme(Theme::Light);
    }

    let state = StateStore::new(SledStore::open(&path).unwrap());
    let saved = state.load().expect("saved state");

    assert_eq!(saved.user, user);
    assert_eq!(saved.program, program);
    assert_eq!(saved.program.days()[0].completion, vec![true, false]);
    assert_eq!(state.load_theme(Theme::Dark), Theme::Light);
}

#[test]
fn test_reset_keeps_theme_only() {
    let dir = TempDir::new().unwrap();
    let mut state = StateStore::new(SledStore::open(&dir.path().join("state")).unwrap());

    state.save(&User::default(), &program());
    state.reset(Theme::Light);

    assert!(state.load().is_none());
    assert_eq!(state.load_theme(Theme::Dark), Theme::Light);
    assert_eq!(state.inner().len(), 1);
}

#[test]
fn test_empty_program_is_not_written() {
    let dir = TempDir::new().unwrap();
    let mut state = StateStore::new(SledStore::open(&dir.path().join("state")).unwrap());

    state.save(&User::default(), &Program::default());

    assert!(state.inner().is_empty());
}
