use khitta_core::{merge_extracted, ExtractedPlan, LessonRecord, Objective};

fn extracted_with_date(date: &str, day: Option<&str>) -> ExtractedPlan {
    ExtractedPlan {
        date: Some(date.to_string()),
        day: day.map(str::to_string),
        ..ExtractedPlan::default()
    }
}

#[test]
fn present_fields_are_never_overwritten() {
    let mut current = LessonRecord::new();
    current.title = "درس الكسور".to_string();
    current.subject = "الرياضيات".to_string();
    current.methods = vec!["الحوار والمناقشة".to_string()];
    current.cognitive = vec![Objective::new("الفهم", "يشرح الكسر", "سؤال شفهي")];

    let extracted = ExtractedPlan {
        title: Some("عنوان آخر".to_string()),
        subject: Some("العلوم".to_string()),
        methods: Some(vec!["العصف الذهني".to_string()]),
        cognitive: Some(vec![Objective::new("التطبيق", "يحل تمريناً", "ورقة عمل")]),
        ..ExtractedPlan::default()
    };

    let merged = merge_extracted(&current, &extracted);
    assert_eq!(merged.title, "درس الكسور");
    assert_eq!(merged.subject, "الرياضيات");
    assert_eq!(merged.methods, vec!["الحوار والمناقشة".to_string()]);
    assert_eq!(merged.cognitive, current.cognitive);
}

#[test]
fn empty_fields_are_filled_from_extraction() {
    let current = LessonRecord::new();

    let extracted = ExtractedPlan {
        title: Some("درس الكسور".to_string()),
        grade: Some("الخامس".to_string()),
        aids: Some(vec!["السبورة".to_string(), "أوراق العمل".to_string()]),
        affective: Some(vec![Objective::new(
            "الاستجابة",
            "يشارك في النقاش",
            "ملاحظة",
        )]),
        ..ExtractedPlan::default()
    };

    let merged = merge_extracted(&current, &extracted);
    assert_eq!(merged.title, "درس الكسور");
    assert_eq!(merged.grade, "الخامس");
    assert_eq!(merged.aids.len(), 2);
    assert_eq!(merged.affective.len(), 1);
}

#[test]
fn fully_empty_extraction_is_a_noop() {
    let mut current = LessonRecord::new();
    current.title = "درس".to_string();
    current.date = "2024-01-01".to_string();

    let merged = merge_extracted(&current, &ExtractedPlan::default());
    assert_eq!(merged, current);
}

#[test]
fn extracted_day_wins_when_date_was_freshly_accepted() {
    let mut current = LessonRecord::new();
    current.date = String::new();
    current.day = "الأحد".to_string();

    let extracted = extracted_with_date("2024-03-04", Some("الاثنين"));

    let merged = merge_extracted(&current, &extracted);
    assert_eq!(merged.date, "2024-03-04");
    assert_eq!(merged.day, "الاثنين");
}

#[test]
fn day_coupling_is_inert_when_date_already_present() {
    let mut current = LessonRecord::new();
    current.date = "2024-01-01".to_string();
    current.day = "الاثنين".to_string();

    let extracted = extracted_with_date("2024-03-04", Some("الأربعاء"));

    let merged = merge_extracted(&current, &extracted);
    assert_eq!(merged.date, "2024-01-01");
    assert_eq!(merged.day, "الاثنين");
}

#[test]
fn accepted_date_without_extracted_day_derives_the_weekday() {
    let mut current = LessonRecord::new();
    current.day = "الأحد".to_string();

    // 2024-03-04 is a Monday.
    let extracted = extracted_with_date("2024-03-04", None);

    let merged = merge_extracted(&current, &extracted);
    assert_eq!(merged.date, "2024-03-04");
    assert_eq!(merged.day, "الاثنين");
}

#[test]
fn advisory_day_is_ignored_when_no_date_was_accepted() {
    let current = LessonRecord::new();

    let extracted = ExtractedPlan {
        day: Some("الخميس".to_string()),
        ..ExtractedPlan::default()
    };

    let merged = merge_extracted(&current, &extracted);
    assert_eq!(merged.day, current.day);
}

#[test]
fn merge_is_idempotent_once_gaps_are_filled() {
    let current = LessonRecord::new();

    let extracted = ExtractedPlan {
        title: Some("درس الكسور".to_string()),
        subject: Some("الرياضيات".to_string()),
        date: Some("2024-03-04".to_string()),
        day: Some("الاثنين".to_string()),
        methods: Some(vec!["حل المشكلات".to_string()]),
        ..ExtractedPlan::default()
    };

    let once = merge_extracted(&current, &extracted);
    let twice = merge_extracted(&once, &extracted);
    assert_eq!(once, twice);
}
