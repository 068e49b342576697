use std::sync::Arc;

use policy_sim::flush::{flush_to_jsonl, load_from_jsonl};
use policy_sim::model::*;
use policy_sim::testutil::{
    self, ConstantRng, economic_template, quiet_scheduler, scenario_snapshot, template,
};
use policy_sim::{ImplementationScheduler, SchedulerConfig};

fn read_lines(path: &std::path::Path) -> Vec<String> {
    std::fs::read_to_string(path)
        .unwrap()
        .lines()
        .map(String::from)
        .collect()
}

/// One policy finished, one cancelled, one still running with challenges.
fn busy_scheduler() -> ImplementationScheduler<ConstantRng> {
    let snapshot = scenario_snapshot();
    let mut scheduler = ImplementationScheduler::new(SchedulerConfig::new(100), ConstantRng::low());

    let mut quick = template(Category::Social, Complexity::Low);
    quick.duration = 2;
    scheduler.submit(Arc::new(quick), &snapshot).unwrap();
    scheduler
        .submit(Arc::new(economic_template()), &snapshot)
        .unwrap();
    scheduler
        .submit(Arc::new(template(Category::Environmental, Complexity::Low)), &snapshot)
        .unwrap();

    testutil::tick_weeks(&mut scheduler, &snapshot, SimWeek::new(1, 1), SimWeek::new(1, 6));
    scheduler.cancel(3, &snapshot.at(SimWeek::new(1, 6))).unwrap();
    scheduler
}

#[test]
fn flush_writes_one_record_per_line() {
    let scheduler = busy_scheduler();
    let dir = tempfile::tempdir().unwrap();
    flush_to_jsonl(&scheduler.state(), dir.path()).unwrap();

    let active = read_lines(&dir.path().join("active.jsonl"));
    let history = read_lines(&dir.path().join("history.jsonl"));
    assert_eq!(active.len(), 1);
    assert_eq!(history.len(), 2);

    let running: serde_json::Value = serde_json::from_str(&active[0]).unwrap();
    assert_eq!(running["id"], 2);
    assert_eq!(running["status"], "implementing");
    assert_eq!(running["template"]["id"], "fiscal_stimulus");
    assert!(running["effects"]["final"].is_null());

    let statuses: Vec<String> = history
        .iter()
        .map(|line| serde_json::from_str::<serde_json::Value>(line).unwrap()["status"].to_string())
        .collect();
    assert_eq!(statuses, vec!["\"completed\"", "\"cancelled\""]);
}

#[test]
fn reloaded_scheduler_continues_where_it_left_off() {
    let original = busy_scheduler();
    let dir = tempfile::tempdir().unwrap();
    flush_to_jsonl(&original.state(), dir.path()).unwrap();

    let records = load_from_jsonl(dir.path()).unwrap();
    assert_eq!(records.len(), 3);

    let mut reloaded = quiet_scheduler(100);
    reloaded.restore(records).unwrap();
    assert_eq!(reloaded.used_capacity(), original.used_capacity());
    assert_eq!(reloaded.history().len(), 2);
    let before = reloaded.active(2).unwrap();
    let saved = original.active(2).unwrap();
    assert_eq!(before.current_phase, saved.current_phase);
    assert_eq!(before.last_tick, saved.last_tick);
    assert_eq!(
        before.opposition.challenges.len(),
        saved.opposition.challenges.len()
    );
    assert!((before.progress - saved.progress).abs() < 1e-9);

    // Same week again is a no-op after reload too.
    assert!(
        reloaded
            .tick(&scenario_snapshot().at(SimWeek::new(1, 6)))
            .is_empty()
    );

    let next = reloaded
        .submit(Arc::new(template(Category::Foreign, Complexity::Low)), &scenario_snapshot())
        .unwrap();
    assert_eq!(next.record.id, 4);
}

#[test]
fn malformed_phase_table_fails_to_load() {
    let scheduler = busy_scheduler();
    let dir = tempfile::tempdir().unwrap();
    let mut record = serde_json::to_value(scheduler.active(2).unwrap()).unwrap();
    record["phases"] = serde_json::json!({ "phases": [] });
    std::fs::write(dir.path().join("active.jsonl"), format!("{record}\n")).unwrap();

    let err = load_from_jsonl(dir.path()).unwrap_err();
    assert_eq!(err.kind(), std::io::ErrorKind::InvalidData);
}

#[test]
fn missing_directory_loads_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let records = load_from_jsonl(&dir.path().join("never_written")).unwrap();
    assert!(records.is_empty());
}
