use khitta_core::db::open_db_in_memory;
use khitta_core::{
    LessonRecord, ObjectiveDomain, PlanRepository, PlanService, RepoError, SqlitePlanRepository,
};
use rusqlite::Connection;

fn sample_plan(title: &str) -> LessonRecord {
    let mut plan = LessonRecord::new();
    plan.title = title.to_string();
    plan.subject = "الرياضيات".to_string();
    plan.school_name = "مدرسة النور".to_string();
    plan.teacher_name = "أحمد".to_string();
    plan.education_area = "منطقة الرياض".to_string();
    plan.methods = vec!["الحوار والمناقشة".to_string()];
    plan.set_date("2024-03-04");
    plan.add_objective(ObjectiveDomain::Cognitive, "الفهم", "يشرح الكسر", "سؤال شفهي");
    plan
}

fn force_updated_at(conn: &Connection, plan: &LessonRecord, updated_at: i64) {
    conn.execute(
        "UPDATE lesson_plans SET updated_at = ?1 WHERE uuid = ?2;",
        rusqlite::params![updated_at, plan.uuid.to_string()],
    )
    .unwrap();
}

#[test]
fn upsert_and_get_round_trip() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqlitePlanRepository::try_new(&conn).unwrap();

    let plan = sample_plan("درس الكسور");
    repo.upsert_plan(&plan).unwrap();

    let loaded = repo.get_plan(plan.uuid).unwrap().unwrap();
    assert_eq!(loaded, plan);
    assert_eq!(loaded.day, "الاثنين");
    assert_eq!(loaded.cognitive.len(), 1);
}

#[test]
fn get_missing_plan_returns_none() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqlitePlanRepository::try_new(&conn).unwrap();

    let absent = repo.get_plan(uuid::Uuid::new_v4()).unwrap();
    assert!(absent.is_none());
}

#[test]
fn upsert_replaces_on_id_match_instead_of_appending() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqlitePlanRepository::try_new(&conn).unwrap();

    let mut plan = sample_plan("مسودة");
    repo.upsert_plan(&plan).unwrap();

    plan.title = "نسخة محدثة".to_string();
    plan.closure = "تلخيص الدرس".to_string();
    repo.upsert_plan(&plan).unwrap();

    let all = repo.list_plans().unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].title, "نسخة محدثة");
    assert_eq!(all[0].closure, "تلخيص الدرس");
}

#[test]
fn list_orders_most_recently_saved_first() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqlitePlanRepository::try_new(&conn).unwrap();

    let older = sample_plan("الدرس الأول");
    let newer = sample_plan("الدرس الثاني");
    repo.upsert_plan(&older).unwrap();
    repo.upsert_plan(&newer).unwrap();
    // Timestamps have second resolution; pin them to make ordering
    // deterministic in-process.
    force_updated_at(&conn, &older, 1_000);
    force_updated_at(&conn, &newer, 2_000);

    let all = repo.list_plans().unwrap();
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].uuid, newer.uuid);
    assert_eq!(all[1].uuid, older.uuid);
}

#[test]
fn latest_profile_follows_the_most_recent_save() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqlitePlanRepository::try_new(&conn).unwrap();

    assert!(repo.latest_profile().unwrap().is_none());

    let older = sample_plan("الدرس الأول");
    let mut newer = sample_plan("الدرس الثاني");
    newer.school_name = "مدرسة الأمل".to_string();
    repo.upsert_plan(&older).unwrap();
    repo.upsert_plan(&newer).unwrap();
    force_updated_at(&conn, &older, 1_000);
    force_updated_at(&conn, &newer, 2_000);

    let profile = repo.latest_profile().unwrap().unwrap();
    assert_eq!(profile.school_name, "مدرسة الأمل");
    assert_eq!(profile.teacher_name, "أحمد");
}

#[test]
fn repository_rejects_uninitialized_connection() {
    let conn = Connection::open_in_memory().unwrap();

    match SqlitePlanRepository::try_new(&conn) {
        Err(RepoError::UninitializedConnection { actual_version: 0, .. }) => {}
        other => panic!("expected uninitialized-connection error, got {other:?}"),
    }
}

#[test]
fn service_prefills_new_plans_from_latest_profile() {
    let conn = open_db_in_memory().unwrap();
    let service = PlanService::new(SqlitePlanRepository::try_new(&conn).unwrap());

    let blank = service.new_plan().unwrap();
    assert!(blank.school_name.is_empty());

    let saved = sample_plan("درس محفوظ");
    service.save_plan(&saved).unwrap();

    let prefilled = service.new_plan().unwrap();
    assert_eq!(prefilled.school_name, "مدرسة النور");
    assert_eq!(prefilled.teacher_name, "أحمد");
    assert_ne!(prefilled.uuid, saved.uuid);
    assert!(prefilled.title.is_empty());
}

#[test]
fn service_get_maps_missing_plan_to_not_found() {
    let conn = open_db_in_memory().unwrap();
    let service = PlanService::new(SqlitePlanRepository::try_new(&conn).unwrap());

    let missing = uuid::Uuid::new_v4();
    let err = service.get_plan(missing).unwrap_err();
    assert!(err.to_string().contains("not found"));

    let plan = sample_plan("درس");
    service.save_plan(&plan).unwrap();
    let loaded = service.get_plan(plan.uuid).unwrap();
    assert_eq!(loaded.uuid, plan.uuid);
}
